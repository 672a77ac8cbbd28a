use std::str::FromStr;

use crate::error::SetupError;
use crate::optics::{Camera, Sensor};

/// A common camera and lens combination, with a distance that suits it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub focal_length: f64,
    pub aperture: f64,
    pub ideal_distance: f64,
    pub sensor: Sensor,
}

impl Preset {
    pub const ALL: [Self; 6] = [
        Self::new("Smartphone", 4.3, 2.0, 36.0, Sensor::Smartphone),
        Self::new("APS-C - 35mm", 35.0, 1.8, 72.0, Sensor::ApsC),
        Self::new("FF - 28mm", 28.0, 1.4, 48.0, Sensor::FullFrame),
        Self::new("FF - 35mm", 35.0, 1.4, 60.0, Sensor::FullFrame),
        Self::new("FF - 50mm", 50.0, 1.8, 72.0, Sensor::FullFrame),
        Self::new("FF - 70mm", 70.0, 2.8, 96.0, Sensor::FullFrame),
    ];

    const fn new(
        name: &'static str,
        focal_length: f64,
        aperture: f64,
        ideal_distance: f64,
        sensor: Sensor,
    ) -> Self {
        Self {
            name,
            focal_length,
            aperture,
            ideal_distance,
            sensor,
        }
    }

    pub fn camera(&self) -> Camera {
        Camera {
            focal_length: self.focal_length,
            aperture: self.aperture,
            sensor: self.sensor,
            distance: self.ideal_distance,
        }
    }
}

impl FromStr for Preset {
    type Err = SetupError;

    /// Matches the name ignoring case and spaces, so `ff-50mm` finds `FF - 50mm`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn key(name: &str) -> String {
            name.chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect()
        }

        let wanted = key(s);
        Self::ALL
            .into_iter()
            .find(|preset| key(preset.name) == wanted)
            .ok_or_else(|| SetupError::UnknownPreset(s.trim().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::MAX_DISTANCE;

    #[test]
    fn parse() {
        assert_eq!("FF - 50mm".parse::<Preset>().unwrap().focal_length, 50.0);
        assert_eq!("ff-70mm".parse::<Preset>().unwrap().aperture, 2.8);
        assert_eq!(
            "smartphone".parse::<Preset>().unwrap().sensor,
            Sensor::Smartphone
        );
        assert_eq!(
            "FF - 85mm".parse::<Preset>(),
            Err(SetupError::UnknownPreset("FF - 85mm".to_owned()))
        );
    }

    #[test]
    fn presets_are_valid_and_finite() {
        for preset in Preset::ALL {
            let camera = preset.camera();
            assert_eq!(camera.validate(), Ok(()));
            let dof = camera.depth_of_field(MAX_DISTANCE);
            assert!(!dof.infinite, "{}", preset.name);
            assert!(dof.contains(preset.ideal_distance), "{}", preset.name);
        }
    }
}
