use nalgebra::Vector2;

/// Closed-form projectile displacement after `t` seconds for a launch at
/// `angle_deg` above the horizontal with initial speed `velocity`.
/// No drag: x = v·cos(θ)·t, y = v·sin(θ)·t − ½·g·t².
pub fn displacement(angle_deg: f64, velocity: f64, g: f64, t: f64) -> Vector2<f64> {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vector2::new(
        velocity * cos * t,
        velocity * sin * t - 0.5 * g * t * t,
    )
}

/// Time until the projectile returns to its launch height (s).
pub fn time_of_flight(angle_deg: f64, velocity: f64, g: f64) -> f64 {
    2.0 * velocity * angle_deg.to_radians().sin() / g
}

/// Peak height above the launch point (m).
pub fn apex_height(angle_deg: f64, velocity: f64, g: f64) -> f64 {
    let vy = velocity * angle_deg.to_radians().sin();
    vy * vy / (2.0 * g)
}

/// Horizontal distance covered when back at launch height (m).
pub fn range(angle_deg: f64, velocity: f64, g: f64) -> f64 {
    velocity * velocity * (2.0 * angle_deg.to_radians()).sin() / g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::G0;

    #[test]
    fn zero_time_is_origin() {
        let d = displacement(45.0, 100.0, G0, 0.0);
        assert_eq!(d, Vector2::zeros());
    }

    #[test]
    fn vertical_launch_has_no_drift() {
        let d = displacement(90.0, 50.0, G0, 2.0);
        assert!(d.x.abs() < 1e-9);
        assert!((d.y - (100.0 - 0.5 * G0 * 4.0)).abs() < 1e-9);
    }

    #[test]
    fn lands_after_time_of_flight() {
        let tof = time_of_flight(30.0, 80.0, G0);
        let d = displacement(30.0, 80.0, G0, tof);
        assert!(d.y.abs() < 1e-9, "should be back at launch height, got {}", d.y);
        assert!((d.x - range(30.0, 80.0, G0)).abs() < 1e-9);
    }

    #[test]
    fn apex_reached_at_half_flight() {
        let tof = time_of_flight(60.0, 40.0, G0);
        let d = displacement(60.0, 40.0, G0, tof / 2.0);
        assert!((d.y - apex_height(60.0, 40.0, G0)).abs() < 1e-9);
    }

    #[test]
    fn range_peaks_at_45_degrees() {
        let r45 = range(45.0, 60.0, G0);
        assert!(r45 > range(30.0, 60.0, G0));
        assert!(r45 > range(60.0, 60.0, G0));
    }
}
