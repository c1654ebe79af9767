//! A simulated soft body: one network, one integrator, optional mesh coupling.

use crate::float::Float;
use crate::vec::Vec3;
use crate::network::Network;
use crate::config::{BuildConfig, SimulationConfig};
use crate::builder::NetworkBuilder;
use crate::ground::GroundPlane;
use crate::integrator::{Integrator, IntegratorKind};
use crate::euler::EulerIntegrator;
use crate::verlet::VerletIntegrator;
use crate::sync::{MeshSink, MeshSync};
use crate::transform::Transform;
use crate::observer::StepObserver;
use crate::error::PhysicsError;
use alloc::vec::Vec as AllocVec;

#[derive(Clone, Debug, PartialEq)]
enum Stepper<F: Float> {
    Euler(EulerIntegrator<F>),
    Verlet(VerletIntegrator<F>),
}

impl<F: Float> Stepper<F> {
    fn new(kind: IntegratorKind, config: &SimulationConfig<F>) -> Self {
        let ground = GroundPlane::new(config.ground_height, config.restitution);
        match kind {
            IntegratorKind::Euler => {
                Stepper::Euler(EulerIntegrator::new(config.gravity, config.damping_factor, ground))
            }
            IntegratorKind::Verlet => Stepper::Verlet(VerletIntegrator::new(
                config.gravity,
                config.damping,
                config.solver_iterations,
                ground,
            )),
        }
    }
}

/// Owns a mass-spring network and advances it one tick per [`step`](Self::step).
///
/// The integrator is chosen at construction and cannot be switched. Callers
/// only ever see read-only views of the network; the positions returned by
/// [`positions`](Self::positions) are snapshots.
///
/// ```
/// use softmass::{SoftBody, CubeBuilder, BuildConfig, SimulationConfig, IntegratorKind, Vec3, NoOpStepObserver};
///
/// let cube = CubeBuilder::new(1.0f32, Vec3::new(0.0, 2.0, 0.0));
/// let mut body = SoftBody::build(&cube, &BuildConfig::new(), SimulationConfig::new(), IntegratorKind::Euler).unwrap();
/// for _ in 0..60 {
///     body.step(1.0 / 60.0, &mut NoOpStepObserver);
/// }
/// assert!(body.positions().iter().all(|p| p.y >= 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct SoftBody<F: Float> {
    network: Network<F>,
    config: SimulationConfig<F>,
    kind: IntegratorKind,
    stepper: Stepper<F>,
    mesh_sync: Option<MeshSync<F>>,
    elapsed: F,
    ticks: u64,
}

impl<F: Float> SoftBody<F> {
    pub fn new(
        network: Network<F>,
        config: SimulationConfig<F>,
        kind: IntegratorKind,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        network.validate()?;
        if kind == IntegratorKind::Verlet && !VerletIntegrator::relaxation_is_stable(&network) {
            log::warn!(
                "verlet body has springs between particles lighter than 0.5; relaxation will overshoot"
            );
        }
        let stepper = Stepper::new(kind, &config);
        Ok(SoftBody {
            network,
            config,
            kind,
            stepper,
            mesh_sync: None,
            elapsed: F::zero(),
            ticks: 0,
        })
    }

    /// Build the network with `builder` and wrap it in a body.
    pub fn build<B: NetworkBuilder<F> + ?Sized>(
        builder: &B,
        build_config: &BuildConfig<F>,
        config: SimulationConfig<F>,
        kind: IntegratorKind,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let network = builder.build(build_config)?;
        Self::new(network, config, kind)
    }

    /// Couple the body to a render mesh. `source_vertices` are the local-space
    /// vertices the network was built from; `transform` is the body transform
    /// used by the builder.
    pub fn with_mesh_sync(
        mut self,
        source_vertices: &[Vec3<F>],
        transform: Transform<F>,
    ) -> Result<Self, PhysicsError> {
        self.mesh_sync = Some(MeshSync::new(source_vertices, transform, &self.network)?);
        Ok(self)
    }

    /// Advance one tick. Ticks with a non-positive or non-finite `dt` are ignored.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        if !dt.is_positive_finite() {
            log::trace!("ignoring tick with dt = {}", dt);
            return;
        }
        match &mut self.stepper {
            Stepper::Euler(euler) => euler.step(&mut self.network, dt, observer),
            Stepper::Verlet(verlet) => verlet.step(&mut self.network, dt, observer),
        }
        self.elapsed = self.elapsed + dt;
        self.ticks += 1;
        observer.on_step_complete();
    }

    /// Advance one tick, then push the surface to `sink` exactly once.
    ///
    /// Bodies without mesh coupling just step. Ignored ticks sync nothing.
    pub fn step_coupled<O: StepObserver, S: MeshSink<F> + ?Sized>(
        &mut self,
        dt: F,
        observer: &mut O,
        sink: &mut S,
    ) {
        if !dt.is_positive_finite() {
            return;
        }
        self.step(dt, observer);
        if let Some(sync) = self.mesh_sync.as_mut() {
            sync.sync(&self.network, sink);
            observer.on_mesh_sync(sync.vertex_count());
        }
    }

    /// Replace the network with a fresh build. On error the current network is kept.
    pub fn rebuild<B: NetworkBuilder<F> + ?Sized>(
        &mut self,
        builder: &B,
        build_config: &BuildConfig<F>,
    ) -> Result<(), PhysicsError> {
        let network = builder.build(build_config)?;
        if let Some(sync) = self.mesh_sync.as_mut() {
            sync.rebind(&network)?;
        }
        self.network = network;
        self.elapsed = F::zero();
        self.ticks = 0;
        Ok(())
    }

    pub fn network(&self) -> &Network<F> { &self.network }
    pub fn config(&self) -> &SimulationConfig<F> { &self.config }
    pub fn kind(&self) -> IntegratorKind { self.kind }
    pub fn elapsed(&self) -> F { self.elapsed }
    pub fn ticks(&self) -> u64 { self.ticks }
    pub fn is_mesh_coupled(&self) -> bool { self.mesh_sync.is_some() }

    /// Synced local-space vertex buffer, if coupled.
    pub fn mesh_vertices(&self) -> Option<&[Vec3<F>]> {
        self.mesh_sync.as_ref().map(|s| s.vertices())
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.network.positions()
    }

    pub fn spring_pairs(&self) -> AllocVec<(usize, usize)> {
        self.network.spring_pairs()
    }

    pub fn particle_count(&self) -> usize { self.network.particle_count() }
    pub fn spring_count(&self) -> usize { self.network.spring_count() }
}
