//! Hooks for watching a substep pass by pass.

/// Trait for observing the passes of a cloth substep.
///
/// Implement this to collect diagnostics (collision counts, corrections)
/// or to snapshot positions between passes. All methods default to no-ops.
pub trait StepObserver {
    /// Forces have been accumulated for every point mass.
    fn on_forces(&mut self) {}

    /// Every non-pinned point mass has been Verlet-advanced.
    fn on_integrate(&mut self) {}

    /// Self-collision finished; `corrected` point masses were pushed.
    fn on_self_collision(&mut self, _corrected: usize) {}

    /// All collision primitives have been applied.
    fn on_collisions(&mut self) {}

    /// Strain limiting finished; `corrected` springs were shortened.
    fn on_strain_limit(&mut self, _corrected: usize) {}

    /// The substep is complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
