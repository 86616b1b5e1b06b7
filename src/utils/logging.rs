use log::{log_enabled, Level};
use std::time::Instant;

/// Scoped timer that traces how long a blast phase took.
///
/// Nothing is measured unless the `trace` level is enabled for this crate.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Option<Instant>,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        let start = if log_enabled!(Level::Trace) {
            log::trace!("⏱️ start {label}");
            Some(Instant::now())
        } else {
            None
        };
        Self { label, start }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            log::trace!("⏱️ end {} ({} µs)", self.label, start.elapsed().as_micros());
        }
    }
}
