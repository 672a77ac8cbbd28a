use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::units;

use super::Sensor;

/// A camera setup. Lengths on the lens are in millimeters, the subject distance is in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub focal_length: f64,
    pub aperture: f64,
    #[serde(default)]
    pub sensor: Sensor,
    pub distance: f64,
}

impl Camera {
    const DEFAULT: Self = Self {
        focal_length: 50.0,
        aperture: 1.8,
        sensor: Sensor::FullFrame,
        distance: 72.0,
    };

    pub fn validate(&self) -> Result<(), SetupError> {
        fn positive(field: &'static str, value: f64) -> Result<(), SetupError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SetupError::InvalidCamera {
                    field,
                    value,
                    expected: "a positive number",
                })
            }
        }

        positive("focal length", self.focal_length)?;
        positive("aperture", self.aperture)?;
        if !(self.distance.is_finite() && self.distance >= 0.0) {
            return Err(SetupError::InvalidCamera {
                field: "distance",
                value: self.distance,
                expected: "zero or more",
            });
        }
        Ok(())
    }

    pub fn hyperfocal_mm(&self) -> f64 {
        let coc = self.sensor.profile().coc;
        debug_assert!(self.aperture * coc > 0.0, "aperture and coc must be positive");
        self.focal_length + self.focal_length * self.focal_length / (self.aperture * coc)
    }

    /// Hyperfocal distance in inches.
    pub fn hyperfocal(&self) -> f64 {
        units::mm_to_inches(self.hyperfocal_mm())
    }

    /// Vertical field of view in degrees.
    pub fn vertical_fov(&self) -> f64 {
        debug_assert!(self.focal_length > 0.0, "focal length must be positive");
        let height = self.sensor.profile().height;
        2.0 * (height / 2.0 / self.focal_length).atan().to_degrees()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::DEFAULT
    }
}
