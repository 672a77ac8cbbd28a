//! Slider ranges, presets and the session state that every interaction replaces.

use serde::{Deserialize, Serialize};

use crate::diagram::{Layout, Subject, ViewportClass};
use crate::error::SetupError;
use crate::optics::{Camera, DepthOfField, FocalScale, Sensor};

mod marks;
mod preset;

pub use self::marks::{aperture_marks, distance_marks, focal_marks, Density, SliderMark};
pub use self::preset::Preset;

/// Closest distance a subject can be dragged to, in inches.
pub const MIN_DRAG_DISTANCE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    /// Subject distance in inches.
    pub const DISTANCE: Self = Self::new(10.0, 400.0, 1.0);
    /// Position on the [`FocalScale`].
    pub const FOCAL_POSITION: Self = Self::new(0.0, 100.0, 0.1);
    pub const APERTURE: Self = Self::new(0.8, 22.0, 0.1);

    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Clamps and rounds to the nearest step counted from `min`. The result is rounded to the
    /// decimal places of `step`, so 1.4 stays 1.4 and prints that way.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((self.clamp(value) - self.min) / self.step).round();
        let snapped = (self.min + steps * self.step).min(self.max);
        let scale = 10f64.powi(self.decimals());
        (snapped * scale).round() / scale
    }

    fn decimals(&self) -> i32 {
        (0..9)
            .find(|&decimals| {
                let scaled = self.step * 10f64.powi(decimals);
                (scaled - scaled.round()).abs() < 1e-9
            })
            .unwrap_or(9)
    }
}

/// Everything the diagram shows. Setters return a new session, the caller redraws from it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub camera: Camera,
    #[serde(default)]
    pub subject: Subject,
    #[serde(default)]
    pub viewport: ViewportClass,
}

impl Session {
    pub fn new(camera: Camera, subject: Subject, viewport: ViewportClass) -> Self {
        Self {
            camera,
            subject,
            viewport,
        }
    }

    pub fn layout(&self) -> Layout {
        self.viewport.layout()
    }

    pub fn result(&self) -> DepthOfField {
        self.camera.depth_of_field(self.layout().max_distance)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        self.camera.validate()
    }

    /// Brings the camera into the slider ranges. Focal lengths below the scale are kept, the
    /// smartphone preset needs them.
    pub fn clamped(self) -> Self {
        let camera = Camera {
            focal_length: self.camera.focal_length.min(FocalScale::default().max),
            aperture: SliderRange::APERTURE.clamp(self.camera.aperture),
            distance: SliderRange::DISTANCE.clamp(self.camera.distance),
            ..self.camera
        };
        if camera != self.camera {
            log::warn!("camera {:?} clamped to {:?}", self.camera, camera);
        }
        Self { camera, ..self }
    }

    pub fn focal_position(&self) -> f64 {
        FocalScale::default().to_position(self.camera.focal_length)
    }

    pub fn with_distance(self, distance: f64) -> Self {
        self.with_camera(Camera {
            distance: SliderRange::DISTANCE.snap(distance),
            ..self.camera
        })
    }

    pub fn with_focal_position(self, position: f64) -> Self {
        let position = SliderRange::FOCAL_POSITION.snap(position);
        self.with_camera(Camera {
            focal_length: FocalScale::default().to_focal_length(position),
            ..self.camera
        })
    }

    pub fn with_aperture(self, aperture: f64) -> Self {
        self.with_camera(Camera {
            aperture: SliderRange::APERTURE.snap(aperture),
            ..self.camera
        })
    }

    pub fn with_sensor(self, sensor: Sensor) -> Self {
        self.with_camera(Camera {
            sensor,
            ..self.camera
        })
    }

    /// Replaces the lens, sensor and distance at once.
    pub fn with_preset(self, preset: &Preset) -> Self {
        self.with_camera(preset.camera())
    }

    pub fn with_subject(self, subject: Subject) -> Self {
        Self { subject, ..self }
    }

    pub fn with_viewport(self, viewport: ViewportClass) -> Self {
        Self { viewport, ..self }
    }

    /// Moves the subject to where the pointer was dragged, `x` in scene inches.
    pub fn drag_to(self, x: f64) -> Self {
        let distance = x.clamp(MIN_DRAG_DISTANCE, self.layout().max_distance);
        self.with_camera(Camera {
            distance,
            ..self.camera
        })
    }

    pub fn distance_marks(&self) -> Vec<SliderMark> {
        let layout = self.layout();
        distance_marks(layout.max_distance, layout.density)
    }

    pub fn focal_marks(&self) -> Vec<SliderMark> {
        focal_marks(&FocalScale::default(), self.layout().density)
    }

    pub fn aperture_marks(&self) -> Vec<SliderMark> {
        aperture_marks(self.layout().density)
    }

    fn with_camera(self, camera: Camera) -> Self {
        log::debug!("camera set to {camera:?}");
        Self { camera, ..self }
    }
}
