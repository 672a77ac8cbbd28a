//! Depth of field, hyperfocal distance and field of view of a camera setup.

mod camera;
mod dof;
mod scale;
mod sensor;

pub use self::camera::Camera;
pub use self::dof::DepthOfField;
pub use self::scale::FocalScale;
pub use self::sensor::{Sensor, SensorProfile};

/// Outer bound of the drawn scene and of every computed limit, in inches (about 9.1m).
pub const MAX_DISTANCE: f64 = 360.0;
