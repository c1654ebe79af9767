//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation ticks.
///
/// Implement this trait to monitor integrator progress (e.g., for debugging,
/// visualization, or profiling). All methods have default no-op
/// implementations. Hooks fire in tick order.
pub trait StepObserver {
    /// Called after spring and external forces are accumulated (Euler only).
    fn on_forces_accumulated(&mut self) {}

    /// Called after all particles have been advanced.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over the springs (Verlet only).
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a particle is pushed back onto the ground plane.
    fn on_ground_contact(&mut self, _particle: usize) {}

    /// Called when a tick is fully complete, before any mesh sync.
    fn on_step_complete(&mut self) {}

    /// Called after the surface vertices were handed to the mesh sink.
    fn on_mesh_sync(&mut self, _vertex_count: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
