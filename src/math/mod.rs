pub trait Interpolate {
    fn lerp(self, other: Self, factor: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(self, other: Self, factor: f64) -> Self {
        self + (other - self) * factor
    }
}

/// Where `value` sits between `min` and `max`, as a factor for [`Interpolate::lerp`].
pub fn unlerp(min: f64, max: f64, value: f64) -> f64 {
    (value - min) / (max - min)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn lerp_unlerp() {
        assert_relative_eq!(2.0_f64.lerp(6.0, 0.25), 3.0);
        assert_relative_eq!(unlerp(2.0, 6.0, 3.0), 0.25);
        assert_relative_eq!(unlerp(-15.0, 105.0, 45.0), 0.5);
    }
}
