//! Side view of the scene: camera on the left, subject at the focus distance, the sharp zone
//! and the field of view cone drawn to scale in inches.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::controls::Density;
use crate::optics::MAX_DISTANCE;

mod subject;
mod svg;
mod view_path;
mod viewport;

pub use self::subject::Subject;
pub use self::svg::{render, Palette};
pub use self::view_path::ViewPath;
pub use self::viewport::{ViewBox, Viewport};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewportClass {
    #[default]
    Full,
    Compact,
}

impl ViewportClass {
    pub const fn layout(self) -> Layout {
        match self {
            Self::Full => Layout::FULL,
            Self::Compact => Layout::COMPACT,
        }
    }
}

/// Framing of the diagram and density of the slider marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub max_distance: f64,
    pub view_width: f64,
    pub camera_y: f64,
    pub density: Density,
    /// Scroll the view so the subject stays in sight instead of showing the whole scene.
    pub follow_subject: bool,
}

impl Layout {
    /// Leftmost visible x, leaves room for the camera icon.
    pub const MIN_VIEW_X: f64 = -15.0;

    pub const FULL: Self = Self {
        max_distance: MAX_DISTANCE,
        view_width: MAX_DISTANCE - Self::MIN_VIEW_X,
        camera_y: 14.3,
        density: Density::Full,
        follow_subject: false,
    };

    pub const COMPACT: Self = Self {
        max_distance: MAX_DISTANCE,
        view_width: 120.0,
        camera_y: 14.3,
        density: Density::Compact,
        follow_subject: true,
    };

    /// Left edge of the view. A following view keeps the subject 40% in from the left,
    /// without scrolling past the camera or past `max_distance`.
    pub fn view_start(&self, distance: f64) -> f64 {
        if !self.follow_subject {
            return Self::MIN_VIEW_X;
        }
        (distance - self.view_width * 0.4)
            .min(self.max_distance - self.view_width)
            .max(Self::MIN_VIEW_X)
    }

    pub fn view_box(&self, distance: f64, height: f64) -> ViewBox {
        ViewBox {
            min: DVec2::new(self.view_start(distance), 0.0),
            size: DVec2::new(self.view_width, height),
        }
    }

    pub fn camera(&self) -> DVec2 {
        DVec2::new(0.0, self.camera_y)
    }

    pub fn view_path(&self, vertical_fov: f64, height: f64) -> ViewPath {
        ViewPath::build(self.camera(), vertical_fov, self.max_distance, height)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::FULL
    }
}
