//! Notification sink that surfaces user-facing messages through tracing.

use trolley_store::Notifier;

/// [`Notifier`] that emits each storefront message as a warning event.
///
/// Embedders with a real toast/UI surface provide their own sink; this one
/// keeps headless deployments observable.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, message: &'static str) {
        tracing::warn!(target: "trolley::notice", "{message}");
    }
}
