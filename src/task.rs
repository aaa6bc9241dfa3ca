//! Recurring-task scheduling for continuous scrolling.
//!
//! The scroll engine never talks to a timer API directly; it drives a
//! `TickScheduler`, so tests can substitute a deterministic fake and the
//! browser build plugs in `setInterval`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// A repeating-tick timer owned by one widget.
///
/// `start` replaces any prior task, so a widget never owns two live
/// timers; `stop` is idempotent.
pub trait TickScheduler {
    /// Begin (or restart) the repeating task with the given interval.
    fn start(&mut self, interval_ms: u32);
    /// Cancel the running task, if any. Safe to call when already stopped.
    fn stop(&mut self);
    /// Whether a task is currently scheduled.
    fn is_active(&self) -> bool;
}

/// `setInterval`-backed scheduler for the browser build.
///
/// The tick closure is created once and kept alive for the scheduler's
/// lifetime so the interval can keep invoking it.
#[cfg(target_arch = "wasm32")]
pub struct IntervalScheduler {
    tick: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

#[cfg(target_arch = "wasm32")]
impl IntervalScheduler {
    pub fn new(tick: Box<dyn FnMut()>) -> Self {
        Self {
            tick: Closure::wrap(tick),
            handle: None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl TickScheduler for IntervalScheduler {
    fn start(&mut self, interval_ms: u32) {
        self.stop();
        let Some(window) = web_sys::window() else {
            return;
        };
        let interval = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.tick.as_ref().unchecked_ref(),
            interval,
        ) {
            Ok(id) => self.handle = Some(id),
            Err(_) => self.handle = None,
        }
    }

    fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
    }

    fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
