use serde::{Deserialize, Serialize};

use crate::units;

use super::Camera;

/// Depth of field of a [`Camera`], all distances in inches.
///
/// `near` and `far` are clamped to `[0, max_distance]`. When `infinite` is set,
/// `far` is `max_distance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthOfField {
    pub hyperfocal: f64,
    pub near: f64,
    pub far: f64,
    pub infinite: bool,
    pub vertical_fov: f64,
}

impl DepthOfField {
    /// Length of the sharp zone, `None` when it extends to infinity.
    pub fn depth(&self) -> Option<f64> {
        (!self.infinite).then(|| self.far - self.near)
    }

    pub fn contains(&self, distance: f64) -> bool {
        self.near <= distance && (self.infinite || distance <= self.far)
    }
}

impl Camera {
    pub fn depth_of_field(&self, max_distance: f64) -> DepthOfField {
        debug_assert!(self.focal_length > 0.0, "focal length must be positive");
        debug_assert!(self.aperture > 0.0, "aperture must be positive");

        let focal_length = self.focal_length;
        let distance_mm = units::inches_to_mm(self.distance);
        let hyperfocal_mm = self.hyperfocal_mm();
        let offset = distance_mm - focal_length;

        let near_mm = hyperfocal_mm * distance_mm / (hyperfocal_mm + offset);
        // a zero denominator puts the far limit at infinity
        let far_denominator = hyperfocal_mm - offset;
        let far_mm =
            (far_denominator != 0.0).then(|| hyperfocal_mm * distance_mm / far_denominator);

        let hyperfocal = units::mm_to_inches(hyperfocal_mm);
        let near = units::mm_to_inches(near_mm).clamp(0.0, max_distance);
        let far = far_mm.map(|far_mm| units::mm_to_inches(far_mm).clamp(0.0, max_distance));

        let infinite = self.distance >= hyperfocal
            || match (far, far_mm) {
                (Some(far), Some(far_mm)) => far < near || far_mm < 0.0,
                _ => true,
            };

        let far = match far {
            Some(far) if !infinite => far,
            _ => max_distance,
        };

        let dof = DepthOfField {
            hyperfocal,
            near,
            far,
            infinite,
            vertical_fov: self.vertical_fov(),
        };
        log::debug!("{:?} -> {:?}", self, dof);
        dof
    }
}
