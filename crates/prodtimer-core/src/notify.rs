//! Notification port for countdown completion.

/// External collaborator invoked when a countdown phase finishes.
///
/// Implementations are fire-and-forget: `notify_completion` must not
/// block the engine, and `cancel_notification` must be safe to call
/// when nothing is playing. Failures stay inside the implementation;
/// the engine's state transitions never depend on them.
pub trait Notifier {
    fn notify_completion(&mut self);
    fn cancel_notification(&mut self);
}

/// Notifier that does nothing. Default for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify_completion(&mut self) {}
    fn cancel_notification(&mut self) {}
}
