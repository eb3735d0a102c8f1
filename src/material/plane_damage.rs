use russell_lab::Vector;

/// Specifies the essential functions for slip-plane damage laws
///
/// A law sees the resolved shear stresses and slip rates of the systems lying
/// on one crystallographic plane, the stress normal to that plane, and the
/// current damage value; it returns the damage rate and its derivatives.
pub trait SlipPlaneDamage: Send {
    /// Returns the initial value of the damage variable
    fn setup(&self) -> f64;

    /// Computes the damage rate
    fn damage_rate(&self, shears: &Vector, slip_rates: &Vector, normal_stress: f64, damage: f64) -> f64;

    /// Computes the derivative of the damage rate with respect to each shear stress
    fn d_damage_rate_d_shear(&self, shears: &Vector, slip_rates: &Vector, normal_stress: f64, damage: f64) -> Vector;

    /// Computes the derivative of the damage rate with respect to each slip rate
    fn d_damage_rate_d_slip(&self, shears: &Vector, slip_rates: &Vector, normal_stress: f64, damage: f64) -> Vector;

    /// Computes the derivative of the damage rate with respect to the normal stress
    fn d_damage_rate_d_normal(&self, shears: &Vector, slip_rates: &Vector, normal_stress: f64, damage: f64) -> f64;

    /// Computes the derivative of the damage rate with respect to the damage variable
    fn d_damage_rate_d_damage(&self, shears: &Vector, slip_rates: &Vector, normal_stress: f64, damage: f64) -> f64;
}

/// Implements damage driven by the accumulated plastic work on a plane
///
/// ```text
/// ḋ = Σᵢ τᵢ γ̇ᵢ
/// ```
pub struct WorkPlaneDamage;

impl WorkPlaneDamage {
    /// Allocates a new instance
    pub fn new() -> Self {
        WorkPlaneDamage {}
    }
}

impl SlipPlaneDamage for WorkPlaneDamage {
    fn setup(&self) -> f64 {
        0.0
    }

    fn damage_rate(&self, shears: &Vector, slip_rates: &Vector, _normal_stress: f64, _damage: f64) -> f64 {
        let mut rate = 0.0;
        for i in 0..shears.dim() {
            rate += shears[i] * slip_rates[i];
        }
        rate
    }

    fn d_damage_rate_d_shear(&self, shears: &Vector, slip_rates: &Vector, _normal_stress: f64, _damage: f64) -> Vector {
        let mut derivative = Vector::new(shears.dim());
        for i in 0..shears.dim() {
            derivative[i] = slip_rates[i];
        }
        derivative
    }

    fn d_damage_rate_d_slip(&self, shears: &Vector, _slip_rates: &Vector, _normal_stress: f64, _damage: f64) -> Vector {
        let mut derivative = Vector::new(shears.dim());
        for i in 0..shears.dim() {
            derivative[i] = shears[i];
        }
        derivative
    }

    fn d_damage_rate_d_normal(&self, _shears: &Vector, _slip_rates: &Vector, _normal_stress: f64, _damage: f64) -> f64 {
        0.0
    }

    fn d_damage_rate_d_damage(&self, _shears: &Vector, _slip_rates: &Vector, _normal_stress: f64, _damage: f64) -> f64 {
        0.0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{SlipPlaneDamage, WorkPlaneDamage};
    use russell_lab::{approx_eq, deriv1_central5, Vector};

    #[test]
    fn rate_is_the_plastic_work_rate() {
        let law = WorkPlaneDamage::new();
        assert_eq!(law.setup(), 0.0);
        let shears = Vector::from(&[2.0, -1.0, 0.5]);
        let slip_rates = Vector::from(&[0.1, 0.2, -0.4]);
        approx_eq(law.damage_rate(&shears, &slip_rates, 10.0, 0.3), 0.2 - 0.2 - 0.2, 1e-15);
        assert_eq!(law.d_damage_rate_d_normal(&shears, &slip_rates, 10.0, 0.3), 0.0);
        assert_eq!(law.d_damage_rate_d_damage(&shears, &slip_rates, 10.0, 0.3), 0.0);
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let law = WorkPlaneDamage::new();
        let shears = Vector::from(&[2.0, -1.0, 0.5]);
        let slip_rates = Vector::from(&[0.1, 0.2, -0.4]);
        let d_shear = law.d_damage_rate_d_shear(&shears, &slip_rates, 10.0, 0.3);
        let d_slip = law.d_damage_rate_d_slip(&shears, &slip_rates, 10.0, 0.3);
        struct Args {}
        let mut args = Args {};
        for k in 0..3 {
            let num = deriv1_central5(shears[k], &mut args, |tau_at, _| {
                let mut shears_pert = Vector::from(&[2.0, -1.0, 0.5]);
                shears_pert[k] = tau_at;
                Ok(WorkPlaneDamage::new().damage_rate(&shears_pert, &slip_rates, 10.0, 0.3))
            })
            .unwrap();
            approx_eq(d_shear[k], num, 1e-10);
            let num = deriv1_central5(slip_rates[k], &mut args, |gdot_at, _| {
                let mut rates_pert = Vector::from(&[0.1, 0.2, -0.4]);
                rates_pert[k] = gdot_at;
                Ok(WorkPlaneDamage::new().damage_rate(&shears, &rates_pert, 10.0, 0.3))
            })
            .unwrap();
            approx_eq(d_slip[k], num, 1e-10);
        }
    }
}
