//! Scoped timer ownership for the clock and boot text.
//!
//! A [`ScheduledTask`] is acquired when a timer is registered and releases it when dropped, so a
//! torn-down view can never leave a callback behind.

use std::time::Duration;

use leptos::{logging, set_interval_with_handle, set_timeout_with_handle};

/// Owns one registered host timer. Dropping it cancels the timer.
#[must_use = "dropping a ScheduledTask cancels it immediately"]
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    /// Wraps an arbitrary cancellation hook.
    pub fn from_cancel(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancels now instead of at drop.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Runs `callback` every `period` until the returned task is dropped.
pub fn schedule_repeating(
    period: Duration,
    callback: impl Fn() + 'static,
) -> Option<ScheduledTask> {
    match set_interval_with_handle(callback, period) {
        Ok(handle) => Some(ScheduledTask::from_cancel(move || handle.clear())),
        Err(err) => {
            logging::warn!("interval registration failed: {err:?}");
            None
        }
    }
}

/// Runs `callback` once after `delay` unless the returned task is dropped first.
pub fn schedule_once(delay: Duration, callback: impl FnOnce() + 'static) -> Option<ScheduledTask> {
    match set_timeout_with_handle(callback, delay) {
        Ok(handle) => Some(ScheduledTask::from_cancel(move || handle.clear())),
        Err(err) => {
            logging::warn!("timeout registration failed: {err:?}");
            None
        }
    }
}
