use serde::{Deserialize, Serialize};

use crate::optics::FocalScale;
use crate::units;

/// How many marks the sliders carry. Narrow screens get fewer so the labels do not overlap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Density {
    #[default]
    Full,
    Compact,
}

const FOCAL_LENGTHS_FULL: [u32; 10] = [8, 14, 24, 35, 50, 85, 135, 200, 400, 800];
const FOCAL_LENGTHS_COMPACT: [u32; 5] = [8, 24, 50, 135, 400];
const APERTURES_FULL: [f64; 9] = [1.4, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0];
const APERTURES_COMPACT: [f64; 5] = [1.4, 2.8, 5.6, 11.0, 22.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl SliderMark {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// A mark on every whole meter (every other one when compact) up to `max_distance` inches.
pub fn distance_marks(max_distance: f64, density: Density) -> Vec<SliderMark> {
    let step = match density {
        Density::Full => 1,
        Density::Compact => 2,
    };
    let last = units::inches_to_meters(max_distance).floor() as u32;

    (step..=last)
        .step_by(step as usize)
        .map(|meters| SliderMark::new(units::meters_to_inches(meters as f64), format!("{meters}m")))
        .collect()
}

/// Common focal lengths, placed on the logarithmic slider.
pub fn focal_marks(scale: &FocalScale, density: Density) -> Vec<SliderMark> {
    let focal_lengths: &[u32] = match density {
        Density::Full => &FOCAL_LENGTHS_FULL,
        Density::Compact => &FOCAL_LENGTHS_COMPACT,
    };

    focal_lengths
        .iter()
        .map(|&focal_length| {
            SliderMark::new(scale.to_position(focal_length as f64), focal_length.to_string())
        })
        .collect()
}

/// Full stops from f/1.4 to f/22.
pub fn aperture_marks(density: Density) -> Vec<SliderMark> {
    let apertures: &[f64] = match density {
        Density::Full => &APERTURES_FULL,
        Density::Compact => &APERTURES_COMPACT,
    };

    apertures
        .iter()
        .map(|&aperture| SliderMark::new(aperture, aperture.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::optics::MAX_DISTANCE;

    fn labels(marks: &[SliderMark]) -> Vec<&str> {
        marks.iter().map(|mark| mark.label.as_str()).collect()
    }

    #[test]
    fn distance() {
        let marks = distance_marks(MAX_DISTANCE, Density::Full);
        assert_eq!(
            labels(&marks),
            ["1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m"]
        );
        assert_relative_eq!(marks[0].value, 39.3701);
        assert_relative_eq!(marks[8].value, 9.0 * 39.3701);
        assert!(marks.iter().all(|mark| mark.value <= MAX_DISTANCE));

        let marks = distance_marks(MAX_DISTANCE, Density::Compact);
        assert_eq!(labels(&marks), ["2m", "4m", "6m", "8m"]);

        assert!(distance_marks(30.0, Density::Full).is_empty());
    }

    #[test]
    fn focal() {
        let scale = FocalScale::default();

        let marks = focal_marks(&scale, Density::Full);
        assert_eq!(
            labels(&marks),
            ["8", "14", "24", "35", "50", "85", "135", "200", "400", "800"]
        );
        assert_eq!(marks[0].value, 0.0);
        assert_relative_eq!(marks[9].value, 100.0);
        assert!(marks.windows(2).all(|pair| pair[0].value < pair[1].value));

        let marks = focal_marks(&scale, Density::Compact);
        assert_eq!(labels(&marks), ["8", "24", "50", "135", "400"]);
        assert_relative_eq!(marks[2].value, scale.to_position(50.0));
    }

    #[test]
    fn aperture() {
        let marks = aperture_marks(Density::Full);
        assert_eq!(
            labels(&marks),
            ["1.4", "2", "2.8", "4", "5.6", "8", "11", "16", "22"]
        );
        assert_eq!(marks[1].value, 2.0);

        let marks = aperture_marks(Density::Compact);
        assert_eq!(labels(&marks), ["1.4", "2.8", "5.6", "11", "22"]);
    }
}
