use std::fmt;

use glam::DVec2;

/// The field of view of the camera as a closed polygon, in scene coordinates (y down).
///
/// The apex sits at the camera, split by one unit above and below so the cone keeps some width
/// at the lens. Each edge follows its ray until it leaves the frame through the top or bottom,
/// then runs along that frame edge out to `max_distance`. The far edge is flat at `max_distance`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPath {
    points: Vec<DVec2>,
}

impl ViewPath {
    pub fn build(camera: DVec2, vertical_fov: f64, max_distance: f64, height: f64) -> Self {
        let half_angle = (vertical_fov / 2.0).to_radians();
        let mut points = Vec::with_capacity(7);

        points.push(camera - DVec2::Y);

        let top = intercept_x(camera, half_angle, 0.0);
        if top < max_distance {
            points.push(DVec2::new(top, 0.0));
            points.push(DVec2::new(max_distance, 0.0));
        } else {
            let rise = rise_at(camera, half_angle, max_distance);
            points.push(DVec2::new(max_distance, camera.y - rise));
        }

        points.push(DVec2::new(max_distance, camera.y));

        let bottom = intercept_x(camera, -half_angle, height);
        if bottom < max_distance {
            points.push(DVec2::new(max_distance, height));
            points.push(DVec2::new(bottom, height));
        } else {
            let rise = rise_at(camera, -half_angle, max_distance);
            points.push(DVec2::new(max_distance, camera.y - rise));
        }

        points.push(camera + DVec2::Y);

        Self { points }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }
}

/// Where a ray leaving `camera` at `angle` (radians, counterclockwise) crosses `y = target_y`.
fn intercept_x(camera: DVec2, angle: f64, target_y: f64) -> f64 {
    -(target_y - camera.y) / angle.tan() + camera.x
}

/// How far a ray has climbed above the camera once it reaches `x`.
fn rise_at(camera: DVec2, angle: f64, x: f64) -> f64 {
    angle.tan() * (x - camera.x)
}

/// SVG path data, e.g. `M0,13.3 L360,8.9 … Z`.
impl fmt::Display for ViewPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            let command = if i == 0 { "M" } else { " L" };
            write!(f, "{command}{},{}", point.x, point.y)?;
        }
        f.write_str(" Z")
    }
}
