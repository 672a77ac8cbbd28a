use std::fmt;

use glam::DVec2;

use crate::math::{unlerp, Interpolate};

/// The visible part of the scene, as in an SVG `viewBox`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min: DVec2,
    pub size: DVec2,
}

impl ViewBox {
    pub fn max(&self) -> DVec2 {
        self.min + self.size
    }

    pub fn contains_x(&self, x: f64) -> bool {
        self.min.x < x && x < self.max().x
    }
}

/// `min-x min-y width height`
impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min.x, self.min.y, self.size.x, self.size.y
        )
    }
}

/// Where a [`ViewBox`] is shown on screen.
///
/// The drawing fills the element width and its height follows the aspect ratio, so a single
/// scale factor maps between the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub view_box: ViewBox,
    /// Top left corner of the element, in client pixels.
    pub origin: DVec2,
    /// Element width in client pixels.
    pub width: f64,
}

impl Viewport {
    pub fn new(view_box: ViewBox, origin: DVec2, width: f64) -> Self {
        debug_assert!(width > 0.0, "viewport width must be positive");
        debug_assert!(
            view_box.size.x > 0.0 && view_box.size.y > 0.0,
            "view box must have a positive size"
        );
        Self {
            view_box,
            origin,
            width,
        }
    }

    pub fn height(&self) -> f64 {
        self.width * self.view_box.size.y / self.view_box.size.x
    }

    /// Maps a pointer position in client pixels to scene coordinates.
    pub fn to_scene(&self, client: DVec2) -> DVec2 {
        let factor = DVec2::new(
            unlerp(self.origin.x, self.origin.x + self.width, client.x),
            unlerp(self.origin.y, self.origin.y + self.height(), client.y),
        );
        let min = self.view_box.min;
        let max = self.view_box.max();
        DVec2::new(min.x.lerp(max.x, factor.x), min.y.lerp(max.y, factor.y))
    }

    pub fn to_client(&self, scene: DVec2) -> DVec2 {
        let scale = self.width / self.view_box.size.x;
        self.origin + (scene - self.view_box.min) * scale
    }
}
