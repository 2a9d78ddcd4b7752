// Render-scoped interaction state: pointer tracking, scroll reveal, decorative
// particle emission. Each instance is owned by one section render and released
// through `Teardown`; nothing here is process-wide.

pub mod particles;
pub mod pointer;
pub mod reveal;

pub use particles::SnowField;
pub use pointer::PointerTracker;
pub use reveal::RevealTracker;

/// Releases a section's registrations (listeners, observers, timers).
///
/// After teardown the owner ignores further events; tearing down twice is a no-op.
pub trait Teardown {
    fn teardown(&mut self);

    #[allow(dead_code)]
    fn is_torn_down(&self) -> bool;
}
