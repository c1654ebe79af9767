//! Network construction strategies.
//!
//! Every builder validates its inputs first and either returns a complete
//! [`Network`] or an error; nothing is half-built. Building twice from the same
//! inputs gives the same particles and the same springs in the same order.

use crate::float::Float;
use crate::network::Network;
use crate::config::BuildConfig;
use crate::error::PhysicsError;

/// A strategy that turns a shape or mesh into a particle/spring network.
pub trait NetworkBuilder<F: Float> {
    fn build(&self, config: &BuildConfig<F>) -> Result<Network<F>, PhysicsError>;
}

impl<F: Float, B: NetworkBuilder<F> + ?Sized> NetworkBuilder<F> for &B {
    fn build(&self, config: &BuildConfig<F>) -> Result<Network<F>, PhysicsError> {
        (**self).build(config)
    }
}

/// Log the outcome of a build.
pub(crate) fn log_built<F: Float>(strategy: &str, network: &Network<F>) {
    log::debug!(
        "{}: generated {} particles and {} springs",
        strategy,
        network.particle_count(),
        network.spring_count()
    );
}
