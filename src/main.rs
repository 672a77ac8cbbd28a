use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use depth_of_field::color::Rgb;
use depth_of_field::controls::{Preset, Session};
use depth_of_field::diagram::{self, Palette, Subject, ViewportClass};
use depth_of_field::optics::Sensor;
use depth_of_field::units::Readout;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// JSON setup to start from, `.json.gz` works too
    #[clap(long, value_parser)]
    setup: Option<PathBuf>,

    /// One of the common setups, e.g. "FF - 50mm"
    #[clap(long, value_parser)]
    preset: Option<Preset>,

    /// Focal length in millimeters
    #[clap(long, value_parser)]
    focal: Option<f64>,

    /// f-number
    #[clap(long, value_parser)]
    aperture: Option<f64>,

    #[clap(long, value_parser)]
    sensor: Option<Sensor>,

    /// Subject distance in inches
    #[clap(long, value_parser)]
    distance: Option<f64>,

    #[clap(long, value_parser)]
    subject: Option<Subject>,

    /// Frame the diagram around the subject with fewer slider marks
    #[clap(long)]
    compact: bool,

    /// Color of the sharp zone, e.g. "#fb9936"
    #[clap(long, value_parser)]
    accent: Option<Rgb>,

    /// Write the diagram here, `.svgz` is compressed
    #[clap(long, value_parser)]
    svg: Option<PathBuf>,

    /// Print the result as JSON instead of text
    #[clap(long)]
    json: bool,
}

impl Cli {
    fn session(&self) -> Result<Session> {
        let mut session = match &self.setup {
            Some(path) => depth_of_field::load_setup(path)?,
            None => Session::default(),
        };

        if let Some(preset) = &self.preset {
            session = session.with_preset(preset);
        }
        if let Some(sensor) = self.sensor {
            session = session.with_sensor(sensor);
        }
        if let Some(subject) = self.subject {
            session = session.with_subject(subject);
        }
        if self.compact {
            session = session.with_viewport(ViewportClass::Compact);
        }

        let mut camera = session.camera;
        camera.focal_length = self.focal.unwrap_or(camera.focal_length);
        camera.aperture = self.aperture.unwrap_or(camera.aperture);
        camera.distance = self.distance.unwrap_or(camera.distance);
        let session = Session { camera, ..session };

        session.validate()?;
        Ok(session.clamped())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let session = args.session()?;
    let dof = session.result();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dof)?);
    } else {
        println!("{}", Readout::new(&session.camera, &dof));
    }

    if let Some(path) = &args.svg {
        let palette = Palette {
            accent: args.accent.unwrap_or(Palette::default().accent),
            ..Default::default()
        };
        let svg = diagram::render(&session, &palette);
        depth_of_field::save_svg(path, &svg)?;
    }

    Ok(())
}
