//! Utility helpers: generational storage and scoped trace timers.

pub mod allocator;
pub mod logging;

pub use allocator::{Arena, SurfaceId};
pub use logging::ScopedTimer;
