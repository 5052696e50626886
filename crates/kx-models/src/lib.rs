//! Physical models for the kinetix harness.
//!
//! Every model implements `kx_sim::Simulate` and owns its state
//! exclusively; integrator callbacks take their parameters as explicit
//! copies, never through shared references. The relativistic models use
//! natural units with `c = 1`.

pub mod constant_force;
pub mod double_pendulum;
pub mod oscillator;
pub mod pendulum;
pub mod phase_oscillator;
pub mod relativistic_oscillator;
pub mod spring_pair;
pub mod worldline;

pub use constant_force::{ConstantForce, RelativisticConstantForce};
pub use double_pendulum::DoublePendulum;
pub use oscillator::Oscillator;
pub use pendulum::{Pendulum, PhasePendulum};
pub use phase_oscillator::{PhaseOscillator, RelativisticPhaseOscillator};
pub use relativistic_oscillator::RelativisticOscillator;
pub use spring_pair::{PhaseSpringPair, SpringPair};
pub use worldline::{GalileanPlayer, RelativisticPlayer};

use kx_sim::Simulate;

/// Names accepted by [`build`], in presentation order.
pub const MODEL_NAMES: &[&str] = &[
    "oscillator",
    "oscillator-phase",
    "oscillator-sr",
    "oscillator-sr-phase",
    "constant-force",
    "constant-force-sr",
    "pendulum",
    "pendulum-phase",
    "double-pendulum",
    "spring-pair",
    "spring-pair-phase",
    "galilean",
    "einsteinian",
];

/// Construct a model by name with its default parameters.
pub fn build(name: &str) -> Option<Box<dyn Simulate>> {
    let sim: Box<dyn Simulate> = match name {
        "oscillator" => Box::new(Oscillator::default()),
        "oscillator-phase" => Box::new(PhaseOscillator::default()),
        "oscillator-sr" => Box::new(RelativisticOscillator::default()),
        "oscillator-sr-phase" => Box::new(RelativisticPhaseOscillator::default()),
        "constant-force" => Box::new(ConstantForce::default()),
        "constant-force-sr" => Box::new(RelativisticConstantForce::default()),
        "pendulum" => Box::new(Pendulum::default()),
        "pendulum-phase" => Box::new(PhasePendulum::default()),
        "double-pendulum" => Box::new(DoublePendulum::default()),
        "spring-pair" => Box::new(SpringPair::default()),
        "spring-pair-phase" => Box::new(PhaseSpringPair::default()),
        "galilean" => Box::new(GalileanPlayer::default()),
        "einsteinian" => Box::new(RelativisticPlayer::default()),
        _ => return None,
    };
    Some(sim)
}

/// How often the models emit an energy diagnostic, in steps.
pub(crate) const DIAG_EVERY: u64 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_model_builds() {
        for name in MODEL_NAMES {
            assert!(build(name).is_some(), "{name} missing from build()");
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(build("teapot").is_none());
    }
}
