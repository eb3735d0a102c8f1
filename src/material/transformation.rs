/// Maps a damage variable (plus ancillary information) into the range [0, 1]
pub trait TransformationFunction: Send {
    /// Computes the mapped value
    fn map(&self, damage: f64, normal_stress: f64) -> f64;

    /// Computes the derivative of the mapped value with respect to the damage variable
    fn d_map_d_damage(&self, damage: f64, normal_stress: f64) -> f64;

    /// Computes the derivative of the mapped value with respect to the normal stress
    fn d_map_d_normal(&self, damage: f64, normal_stress: f64) -> f64;
}

/// Implements a sigmoid transformation: d=0 → 0, d=c → 1, β controls the smoothing
///
/// For 0 < d < c, with u = (d / (c - d))^β:
///
/// ```text
/// map = u / (1 + u)
/// ```
///
/// clamped to 0 below d=0 and to 1 above d=c.
pub struct SigmoidTransformation {
    /// Critical damage c at which the map saturates to one
    c: f64,

    /// Smoothing exponent β
    beta: f64,
}

impl SigmoidTransformation {
    /// Allocates a new instance
    pub fn new(c: f64, beta: f64) -> Self {
        SigmoidTransformation { c, beta }
    }
}

impl TransformationFunction for SigmoidTransformation {
    fn map(&self, damage: f64, _normal_stress: f64) -> f64 {
        if damage <= 0.0 {
            return 0.0;
        }
        if damage >= self.c {
            return 1.0;
        }
        let u = f64::powf(damage / (self.c - damage), self.beta);
        u / (1.0 + u)
    }

    fn d_map_d_damage(&self, damage: f64, _normal_stress: f64) -> f64 {
        if damage <= 0.0 || damage >= self.c {
            return 0.0;
        }
        let u = f64::powf(damage / (self.c - damage), self.beta);
        let du = self.beta * u * self.c / (damage * (self.c - damage));
        du / ((1.0 + u) * (1.0 + u))
    }

    fn d_map_d_normal(&self, _damage: f64, _normal_stress: f64) -> f64 {
        0.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{SigmoidTransformation, TransformationFunction};
    use russell_lab::{approx_eq, deriv1_central5};

    #[test]
    fn map_interpolates_between_zero_and_one() {
        let transformation = SigmoidTransformation::new(2.0, 3.0);
        assert_eq!(transformation.map(-1.0, 0.0), 0.0);
        assert_eq!(transformation.map(0.0, 0.0), 0.0);
        assert_eq!(transformation.map(2.0, 0.0), 1.0);
        assert_eq!(transformation.map(5.0, 0.0), 1.0);
        // the midpoint maps to one half for any β
        approx_eq(transformation.map(1.0, 0.0), 0.5, 1e-15);
        let inside = transformation.map(0.8, 0.0);
        assert!(inside > 0.0 && inside < 0.5);
    }

    #[test]
    fn map_is_monotonic() {
        let transformation = SigmoidTransformation::new(1.5, 2.0);
        let mut previous = 0.0;
        for k in 1..15 {
            let value = transformation.map(0.1 * (k as f64), 0.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn derivative_matches_finite_differences() {
        let transformation = SigmoidTransformation::new(2.0, 3.0);
        struct Args {}
        let mut args = Args {};
        for &damage in &[0.3, 0.7, 1.0, 1.6] {
            let ana = transformation.d_map_d_damage(damage, 0.0);
            let num = deriv1_central5(damage, &mut args, |d_at, _| {
                Ok(SigmoidTransformation::new(2.0, 3.0).map(d_at, 0.0))
            })
            .unwrap();
            approx_eq(ana, num, 1e-8);
        }
        assert_eq!(transformation.d_map_d_damage(0.0, 0.0), 0.0);
        assert_eq!(transformation.d_map_d_normal(1.0, 0.0), 0.0);
    }
}
