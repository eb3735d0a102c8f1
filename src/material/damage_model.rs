use super::{new_plane_damage, new_transformation, ParamDamageModel};
use super::{SlipPlaneDamage, TransformationFunction};
use crate::state::History;
use crate::StrError;
use russell_lab::Vector;

/// Specifies the essential functions for crystallographic damage models
pub trait CrystalDamageTrait: Send {
    /// Returns the number of damage variables
    fn nvars(&self) -> usize;

    /// Returns the names of the damage variables
    fn varnames(&self) -> &[String];

    /// Renames the damage variables (e.g., to avoid collisions between phases)
    fn set_varnames(&mut self, names: Vec<String>) -> Result<(), StrError>;

    /// Declares every damage variable into the history (setup phase)
    fn populate_history(&self, history: &mut History) -> Result<(), StrError>;

    /// Writes the initial values into this model's own slots
    fn init_history(&self, history: &mut History) -> Result<(), StrError>;
}

/// Implements one scalar damage variable per slip plane, driven by a plane-level law
///
/// The per-plane damage accumulates via a [SlipPlaneDamage] law and is mapped
/// into a [0, 1] degradation factor by a [TransformationFunction] when the
/// surrounding model assembles its projection operator.
pub struct PlanarDamageModel {
    /// Plane-level damage law
    damage: Box<dyn SlipPlaneDamage>,

    /// Map from damage values to degradation factors
    transformation: Box<dyn TransformationFunction>,

    /// One variable name per slip plane
    varnames: Vec<String>,
}

impl PlanarDamageModel {
    /// Allocates a new instance from a parameter set
    pub fn new(param: &ParamDamageModel) -> Self {
        let varnames = (0..param.nplanes).map(|p| format!("damage_{}", p)).collect();
        PlanarDamageModel {
            damage: new_plane_damage(&param.plane_damage),
            transformation: new_transformation(&param.transformation),
            varnames,
        }
    }

    /// Computes the damage rate of every plane
    ///
    /// `shears[p]` and `slip_rates[p]` hold the resolved shear stresses and
    /// slip rates of the systems on plane p; `normal_stresses[p]` is the
    /// stress normal to plane p. The result is a history congruent with the
    /// input: this model's slots hold the rates and all other slots are zero.
    pub fn damage_rate(
        &self,
        shears: &[Vector],
        slip_rates: &[Vector],
        normal_stresses: &Vector,
        history: &History,
    ) -> Result<History<'static>, StrError> {
        self.check_planes(shears, slip_rates, normal_stresses)?;
        let mut rate = history.blank_copy();
        for (p, name) in self.varnames.iter().enumerate() {
            let damage = *history.get::<f64>(name)?;
            *rate.get_mut::<f64>(name)? =
                self.damage
                    .damage_rate(&shears[p], &slip_rates[p], normal_stresses[p], damage);
        }
        Ok(rate)
    }

    /// Computes the derivative of each plane's damage rate with respect to its own damage
    ///
    /// Same layout convention as [PlanarDamageModel::damage_rate].
    pub fn d_damage_rate_d_damage(
        &self,
        shears: &[Vector],
        slip_rates: &[Vector],
        normal_stresses: &Vector,
        history: &History,
    ) -> Result<History<'static>, StrError> {
        self.check_planes(shears, slip_rates, normal_stresses)?;
        let mut derivative = history.blank_copy();
        for (p, name) in self.varnames.iter().enumerate() {
            let damage = *history.get::<f64>(name)?;
            *derivative.get_mut::<f64>(name)? =
                self.damage
                    .d_damage_rate_d_damage(&shears[p], &slip_rates[p], normal_stresses[p], damage);
        }
        Ok(derivative)
    }

    /// Computes the transformed degradation factor of every plane
    pub fn transformed(&self, history: &History, normal_stresses: &Vector) -> Result<Vector, StrError> {
        if normal_stresses.dim() != self.varnames.len() {
            return Err("number of plane entries differs from the number of slip planes");
        }
        let mut factors = Vector::new(self.varnames.len());
        for (p, name) in self.varnames.iter().enumerate() {
            let damage = *history.get::<f64>(name)?;
            factors[p] = self.transformation.map(damage, normal_stresses[p]);
        }
        Ok(factors)
    }

    fn check_planes(&self, shears: &[Vector], slip_rates: &[Vector], normal_stresses: &Vector) -> Result<(), StrError> {
        if shears.len() != self.varnames.len()
            || slip_rates.len() != self.varnames.len()
            || normal_stresses.dim() != self.varnames.len()
        {
            return Err("number of plane entries differs from the number of slip planes");
        }
        Ok(())
    }
}

impl CrystalDamageTrait for PlanarDamageModel {
    fn nvars(&self) -> usize {
        self.varnames.len()
    }

    fn varnames(&self) -> &[String] {
        &self.varnames
    }

    fn set_varnames(&mut self, names: Vec<String>) -> Result<(), StrError> {
        if names.len() != self.varnames.len() {
            return Err("number of variable names differs from the number of slip planes");
        }
        self.varnames = names;
        Ok(())
    }

    fn populate_history(&self, history: &mut History) -> Result<(), StrError> {
        for name in &self.varnames {
            history.declare::<f64>(name)?;
        }
        Ok(())
    }

    fn init_history(&self, history: &mut History) -> Result<(), StrError> {
        for name in &self.varnames {
            *history.get_mut::<f64>(name)? = self.damage.setup();
        }
        Ok(())
    }
}

/// Implements an inert damage model holding a single frozen variable
///
/// Useful to exercise the damage interface without degrading anything.
pub struct NilDamageModel {
    varnames: Vec<String>,
}

impl NilDamageModel {
    /// Allocates a new instance
    pub fn new() -> Self {
        NilDamageModel {
            varnames: vec!["damage".to_string()],
        }
    }
}

impl CrystalDamageTrait for NilDamageModel {
    fn nvars(&self) -> usize {
        1
    }

    fn varnames(&self) -> &[String] {
        &self.varnames
    }

    fn set_varnames(&mut self, names: Vec<String>) -> Result<(), StrError> {
        if names.len() != 1 {
            return Err("number of variable names differs from the number of slip planes");
        }
        self.varnames = names;
        Ok(())
    }

    fn populate_history(&self, history: &mut History) -> Result<(), StrError> {
        history.declare::<f64>(&self.varnames[0])
    }

    fn init_history(&self, history: &mut History) -> Result<(), StrError> {
        *history.get_mut::<f64>(&self.varnames[0])? = 0.0;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{CrystalDamageTrait, NilDamageModel, PlanarDamageModel};
    use crate::material::{ParamDamageModel, ParamPlaneDamage, ParamTransformation};
    use crate::state::History;
    use crate::StrError;
    use russell_lab::{approx_eq, Vector};

    fn sample_param(nplanes: usize) -> ParamDamageModel {
        ParamDamageModel {
            nplanes,
            plane_damage: ParamPlaneDamage::Work,
            transformation: ParamTransformation::Sigmoid { c: 1.0, beta: 2.0 },
        }
    }

    #[test]
    fn populate_and_init_work() -> Result<(), StrError> {
        let model = PlanarDamageModel::new(&sample_param(3));
        assert_eq!(model.nvars(), 3);
        assert_eq!(model.varnames(), &["damage_0", "damage_1", "damage_2"]);
        let mut history = History::new();
        model.populate_history(&mut history)?;
        assert_eq!(history.size(), 3);
        model.init_history(&mut history)?;
        for name in model.varnames() {
            assert_eq!(*history.get::<f64>(name)?, 0.0);
        }
        Ok(())
    }

    #[test]
    fn set_varnames_checks_the_count() {
        let mut model = PlanarDamageModel::new(&sample_param(2));
        assert_eq!(
            model.set_varnames(vec!["one".to_string()]).err(),
            Some("number of variable names differs from the number of slip planes")
        );
        model.set_varnames(vec!["basal".to_string(), "prism".to_string()]).unwrap();
        assert_eq!(model.varnames(), &["basal", "prism"]);
    }

    #[test]
    fn damage_rate_fills_only_owned_slots() -> Result<(), StrError> {
        let model = PlanarDamageModel::new(&sample_param(2));
        let mut history = History::new();
        history.declare::<f64>("other")?;
        model.populate_history(&mut history)?;
        model.init_history(&mut history)?;
        *history.get_mut::<f64>("other")? = 5.0;

        let shears = vec![Vector::from(&[2.0, 1.0]), Vector::from(&[0.5, 0.5])];
        let slip_rates = vec![Vector::from(&[0.1, 0.2]), Vector::from(&[0.3, 0.1])];
        let normal_stresses = Vector::from(&[10.0, 5.0]);
        let rate = model.damage_rate(&shears, &slip_rates, &normal_stresses, &history)?;
        assert!(rate.congruent(&history));
        approx_eq(*rate.get::<f64>("damage_0")?, 0.4, 1e-15);
        approx_eq(*rate.get::<f64>("damage_1")?, 0.2, 1e-15);
        assert_eq!(*rate.get::<f64>("other")?, 0.0);

        let derivative = model.d_damage_rate_d_damage(&shears, &slip_rates, &normal_stresses, &history)?;
        assert_eq!(*derivative.get::<f64>("damage_0")?, 0.0); // work damage has no self-coupling

        // mismatched plane count
        assert_eq!(
            model.damage_rate(&shears[..1], &slip_rates, &normal_stresses, &history).err(),
            Some("number of plane entries differs from the number of slip planes")
        );
        Ok(())
    }

    #[test]
    fn transformed_maps_damage_to_factors() -> Result<(), StrError> {
        let model = PlanarDamageModel::new(&sample_param(2));
        let mut history = History::new();
        model.populate_history(&mut history)?;
        *history.get_mut::<f64>("damage_0")? = 0.0;
        *history.get_mut::<f64>("damage_1")? = 0.5; // sigmoid midpoint for c = 1
        let normal_stresses = Vector::from(&[1.0, 1.0]);
        let factors = model.transformed(&history, &normal_stresses)?;
        approx_eq(factors[0], 0.0, 1e-15);
        approx_eq(factors[1], 0.5, 1e-15);
        Ok(())
    }

    #[test]
    fn nil_model_declares_one_frozen_variable() -> Result<(), StrError> {
        let mut model = NilDamageModel::new();
        assert_eq!(model.nvars(), 1);
        let mut history = History::new();
        model.populate_history(&mut history)?;
        model.init_history(&mut history)?;
        assert_eq!(history.size(), 1);
        assert_eq!(*history.get::<f64>("damage")?, 0.0);
        model.set_varnames(vec!["nothing".to_string()])?;
        assert_eq!(model.varnames(), &["nothing"]);
        Ok(())
    }
}
