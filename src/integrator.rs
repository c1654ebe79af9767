//! Time integration over a fixed network.

use crate::float::Float;
use crate::network::Network;
use crate::observer::StepObserver;

/// Advances every particle of a network by one tick.
///
/// Implementations must visit particles and springs in list order so that
/// identical inputs give bit-identical trajectories.
pub trait Integrator<F: Float> {
    fn step<O: StepObserver>(&mut self, network: &mut Network<F>, dt: F, observer: &mut O);
}

/// Which integrator a body uses. Fixed when the body is created.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntegratorKind {
    /// Semi-implicit Euler with spring forces and velocity damping.
    Euler,
    /// Position Verlet with iterative spring-length relaxation.
    Verlet,
}
