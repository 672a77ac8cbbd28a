use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::controls::Session;
use crate::units::Readout;

const CLIP_ID: &str = "field-of-view";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub field_of_view: Rgb,
    pub ink: Rgb,
    pub accent: Rgb,
    pub out_of_frame: Rgb,
}

impl Palette {
    const DEFAULT: Self = Self {
        field_of_view: Rgb::from_u32(0xeff7fb),
        ink: Rgb::from_u32(0x212e40),
        accent: Rgb::from_u32(0xfb9936),
        out_of_frame: Rgb::splat(0xaa),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Draws the session as a standalone SVG document.
///
/// Layers, back to front: field of view cone, camera, sharp zone, hyperfocal marker, the subject
/// greyed out, the part of the subject inside the field of view, focus line.
pub fn render(session: &Session, palette: &Palette) -> String {
    let camera = &session.camera;
    let layout = session.layout();
    let dof = session.result();
    let height = session.subject.height();
    let view_box = layout.view_box(camera.distance, height);
    let view_path = layout.view_path(dof.vertical_fov, height);
    let readout = Readout::new(camera, &dof);

    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{view_box}\">\n"
    ));
    svg.push_str(&format!(
        "  <title>{}, sharp from {} to {}</title>\n",
        readout.settings, readout.near_limit, readout.far_limit
    ));
    svg.push_str(&format!(
        "  <defs><clipPath id=\"{CLIP_ID}\"><path d=\"{view_path}\"/></clipPath></defs>\n"
    ));
    svg.push_str(&format!(
        "  <path d=\"{view_path}\" fill=\"{}\"/>\n",
        palette.field_of_view
    ));

    if view_box.min.x <= 0.0 {
        svg.push_str(&camera_icon(layout.camera(), palette));
    }

    svg.push_str(&format!(
        "  <rect x=\"{}\" y=\"0\" width=\"{}\" height=\"{height}\" fill=\"{}\" fill-opacity=\"0.3\"/>\n",
        dof.near,
        dof.far - dof.near,
        palette.accent
    ));

    if dof.hyperfocal > 0.0 && view_box.contains_x(dof.hyperfocal) {
        svg.push_str(&format!(
            "  <line x1=\"{0}\" y1=\"0\" x2=\"{0}\" y2=\"{height}\" stroke=\"{1}\" stroke-width=\"1\" stroke-dasharray=\"4,4\"/>\n",
            dof.hyperfocal, palette.accent
        ));
    }

    let subject = format!(
        "<path transform=\"translate({})\" d=\"{}\"/>",
        camera.distance,
        session.subject.silhouette()
    );
    svg.push_str(&format!(
        "  <g fill=\"{}\">{subject}</g>\n",
        palette.out_of_frame
    ));
    svg.push_str(&format!(
        "  <g clip-path=\"url(#{CLIP_ID})\" fill=\"{}\">{subject}</g>\n",
        palette.ink
    ));

    svg.push_str(&format!(
        "  <line x1=\"{0}\" y1=\"0\" x2=\"{0}\" y2=\"{height}\" stroke=\"{1}\" stroke-width=\"0.5\"/>\n",
        camera.distance, palette.ink
    ));

    svg.push_str("</svg>\n");
    svg
}

/// A small camera body with lens and flash, drawn just left of the lens position.
fn camera_icon(lens: DVec2, palette: &Palette) -> String {
    let ink = palette.ink;
    let glass = palette.field_of_view;
    format!(
        concat!(
            "  <g transform=\"translate(-10, {})\">",
            "<rect x=\"0\" y=\"2\" width=\"10\" height=\"7\" rx=\"1\" fill=\"{ink}\"/>",
            "<circle cx=\"5\" cy=\"5.5\" r=\"2.5\" fill=\"{ink}\"/>",
            "<circle cx=\"5\" cy=\"5.5\" r=\"1.5\" fill=\"{glass}\"/>",
            "<rect x=\"1\" y=\"0\" width=\"3\" height=\"2\" rx=\"0.5\" fill=\"{ink}\"/>",
            "</g>\n",
        ),
        lens.y - 5.0,
        ink = ink,
        glass = glass,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{Subject, ViewportClass};
    use crate::optics::Camera;

    #[test]
    fn full_view() {
        let session = Session::default();
        let svg = render(&session, &Palette::default());
        let dof = session.result();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"-15 0 375 72\">"));
        assert!(svg.contains("<title>50mm f/1.8, sharp from 1.76m to 1.90m</title>"));
        assert!(svg.contains("<clipPath id=\"field-of-view\"><path d=\"M0,13.3 L"));
        assert!(svg.contains(&format!("<rect x=\"{}\" y=\"0\"", dof.near)));
        assert!(svg.contains("translate(-10, 9.3)"));
        assert!(svg.contains("translate(72)"));
        assert!(svg.contains("clip-path=\"url(#field-of-view)\""));
        assert!(svg.contains("fill=\"#fb9936\" fill-opacity=\"0.3\""));
        // hyperfocal distance is far beyond the scene
        assert!(!svg.contains("stroke-dasharray"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn compact_view_follows_subject() {
        let session = Session::default()
            .with_viewport(ViewportClass::Compact)
            .with_subject(Subject::Dog)
            .with_distance(200.0);
        let svg = render(&session, &Palette::default());

        assert!(svg.contains("viewBox=\"152 0 120 30\""));
        // camera is out of view
        assert!(!svg.contains("translate(-10,"));
    }

    #[test]
    fn hyperfocal_marker_when_visible() {
        let camera = Camera {
            focal_length: 24.0,
            aperture: 16.0,
            ..Default::default()
        };
        let session = Session {
            camera,
            ..Default::default()
        };
        let dof = session.result();
        assert!(dof.hyperfocal < 360.0);

        let svg = render(&session, &Palette::default());
        assert!(svg.contains(&format!("<line x1=\"{0}\" y1=\"0\" x2=\"{0}\"", dof.hyperfocal)));
        assert!(svg.contains("stroke-dasharray=\"4,4\""));
    }

    #[test]
    fn infinite_zone_reaches_the_end() {
        let session = Session::default().with_preset(&"FF - 28mm".parse().unwrap());
        let session = Session {
            camera: Camera {
                aperture: 22.0,
                distance: 300.0,
                ..session.camera
            },
            ..session
        };
        let dof = session.result();
        assert!(dof.infinite);

        let svg = render(&session, &Palette::default());
        assert!(svg.contains(&format!("width=\"{}\"", 360.0 - dof.near)));
        assert!(svg.contains("to ∞</title>"));
    }
}
