use serde::{Deserialize, Serialize};

/// Logarithmic mapping between focal lengths and a `[0, 100]` slider position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalScale {
    pub min: f64,
    pub max: f64,
}

impl FocalScale {
    const DEFAULT: Self = Self {
        min: 8.0,
        max: 800.0,
    };

    pub fn to_position(&self, focal_length: f64) -> f64 {
        let focal_length = focal_length.max(self.min);
        100.0 * (focal_length / self.min).ln() / (self.max / self.min).ln()
    }

    /// Inverse of [`to_position`](Self::to_position), rounded to whole millimeters.
    pub fn to_focal_length(&self, position: f64) -> f64 {
        (self.min * (self.max / self.min).powf(position / 100.0)).round()
    }
}

impl Default for FocalScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn bounds() {
        let scale = FocalScale::default();
        assert_relative_eq!(scale.to_position(8.0), 0.0);
        assert_relative_eq!(scale.to_position(800.0), 100.0);
        assert_relative_eq!(scale.to_position(80.0), 50.0, epsilon = 1e-9);
        assert_eq!(scale.to_focal_length(0.0), 8.0);
        assert_eq!(scale.to_focal_length(100.0), 800.0);
        assert_eq!(scale.to_focal_length(50.0), 80.0);
    }

    #[test]
    fn below_minimum_clamps() {
        let scale = FocalScale::default();
        assert_eq!(scale.to_position(4.3), 0.0);
        assert_eq!(scale.to_position(0.0), 0.0);
        assert_eq!(scale.to_position(-5.0), 0.0);
    }

    #[test]
    fn round_trip() {
        let scale = FocalScale::default();
        for tenth in 80..=8000 {
            let focal_length = tenth as f64 / 10.0;
            let back = scale.to_focal_length(scale.to_position(focal_length));
            assert!(
                (back - focal_length).abs() <= 1.0,
                "{focal_length} -> {back}"
            );
        }
        for focal_length in 8..=800 {
            let focal_length = focal_length as f64;
            assert_eq!(
                scale.to_focal_length(scale.to_position(focal_length)),
                focal_length
            );
        }
    }

    #[test]
    fn monotonic() {
        let scale = FocalScale::default();
        let mut previous = f64::NEG_INFINITY;
        for tenth in 80..=8000 {
            let position = scale.to_position(tenth as f64 / 10.0);
            assert!(position > previous);
            previous = position;
        }

        let mut previous = 0.0;
        for step in 0..=1000 {
            let focal_length = scale.to_focal_length(step as f64 / 10.0);
            assert!(focal_length >= previous);
            previous = focal_length;
        }
    }
}
