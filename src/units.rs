//! Length conversions and the metric readouts shown next to the diagram.

use std::fmt;

use crate::optics::{Camera, DepthOfField};

pub const MM_PER_INCH: f64 = 25.4;
pub const METERS_PER_INCH: f64 = 0.0254;
/// Rounded reciprocal of [`METERS_PER_INCH`], used to place the meter marks.
pub const INCHES_PER_METER: f64 = 39.3701;

pub fn inches_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

pub fn inches_to_meters(inches: f64) -> f64 {
    inches * METERS_PER_INCH
}

pub fn meters_to_inches(meters: f64) -> f64 {
    meters * INCHES_PER_METER
}

/// Formats a distance given in inches as meters, e.g. `format_metric(72.0, 2) == "1.83m"`.
pub fn format_metric(inches: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, Distance::Finite(inches))
}

/// A distance in inches that may be unbounded.
///
/// The `Display` impl prints meters and honors the formatter precision, so
/// `format!("{:.1}", distance)` gives one decimal. Unbounded distances print as `∞`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Finite(f64),
    Infinite,
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Finite(inches) => {
                let precision = f.precision().unwrap_or(0);
                write!(f, "{:.*}m", precision, inches_to_meters(inches))
            }
            Self::Infinite => f.write_str("∞"),
        }
    }
}

/// The text readouts of a computed setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub settings: String,
    pub hyperfocal: String,
    pub subject_distance: String,
    pub depth_of_field: String,
    pub near_limit: String,
    pub far_limit: String,
}

impl Readout {
    pub fn new(camera: &Camera, dof: &DepthOfField) -> Self {
        let far = if dof.infinite {
            Distance::Infinite
        } else {
            Distance::Finite(dof.far)
        };
        let depth = match dof.depth() {
            Some(depth) => Distance::Finite(depth),
            None => Distance::Infinite,
        };

        Self {
            settings: format!("{}mm f/{}", camera.focal_length, camera.aperture),
            hyperfocal: format!("{:.2}", Distance::Finite(dof.hyperfocal)),
            subject_distance: format!("{:.1}", Distance::Finite(camera.distance)),
            depth_of_field: format!("{}", depth),
            near_limit: format!("{:.2}", Distance::Finite(dof.near)),
            far_limit: format!("{:.2}", far),
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.settings)?;
        writeln!(f, "hyperfocal:       {}", self.hyperfocal)?;
        writeln!(f, "subject distance: {}", self.subject_distance)?;
        writeln!(f, "depth of field:   {}", self.depth_of_field)?;
        write!(f, "sharp from {} to {}", self.near_limit, self.far_limit)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::optics::{Sensor, MAX_DISTANCE};

    #[test]
    fn metric_formatting() {
        assert_eq!(format_metric(72.0, 2), "1.83m");
        assert_eq!(format_metric(72.0, 1), "1.8m");
        assert_eq!(format_metric(72.0, 0), "2m");
        assert_eq!(format_metric(360.0, 2), "9.14m");
        assert_eq!(format!("{}", Distance::Infinite), "∞");
        assert_eq!(format!("{:.2}", Distance::Infinite), "∞");
    }

    #[test]
    fn conversions() {
        assert_relative_eq!(inches_to_mm(10.0), 254.0);
        assert_relative_eq!(mm_to_inches(254.0), 10.0);
        assert_relative_eq!(inches_to_meters(100.0), 2.54);
        assert_relative_eq!(meters_to_inches(1.0), 39.3701);
    }

    #[test]
    fn readout_finite() {
        let camera = Camera::default();
        let dof = camera.depth_of_field(MAX_DISTANCE);
        let readout = Readout::new(&camera, &dof);

        assert_eq!(readout.settings, "50mm f/1.8");
        assert_eq!(readout.subject_distance, "1.8m");
        assert_eq!(readout.hyperfocal, format_metric(dof.hyperfocal, 2));
        assert_eq!(readout.near_limit, format_metric(dof.near, 2));
        assert_eq!(readout.far_limit, format_metric(dof.far, 2));
        assert_eq!(readout.depth_of_field, format_metric(dof.far - dof.near, 0));
    }

    #[test]
    fn readout_infinite() {
        let camera = Camera {
            focal_length: 4.3,
            aperture: 2.0,
            sensor: Sensor::FullFrame,
            distance: 200.0,
        };
        let dof = camera.depth_of_field(MAX_DISTANCE);
        assert!(dof.infinite);

        let readout = Readout::new(&camera, &dof);
        assert_eq!(readout.settings, "4.3mm f/2");
        assert_eq!(readout.far_limit, "∞");
        assert_eq!(readout.depth_of_field, "∞");
    }
}
