use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::domain::{NotificationKind, NotificationRequest, NotifierTimings, ToastPhase};

/// Identifies one `show` call.
pub type ToastId = u64;

/// Timer transition for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierEvent {
    /// Entry delay elapsed.
    Reveal(ToastId),
    /// Display duration elapsed.
    Expire(ToastId),
    /// Exit transition finished.
    Remove(ToastId),
}

impl NotifierEvent {
    /// Returns the toast the event belongs to.
    #[must_use]
    pub const fn toast_id(self) -> ToastId {
        match self {
            Self::Reveal(id) | Self::Expire(id) | Self::Remove(id) => id,
        }
    }
}

/// The toast currently on screen.
#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    request: NotificationRequest,
    phase: ToastPhase,
    timer: AbortHandle,
}

impl Toast {
    /// Returns the toast id.
    #[must_use]
    pub const fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the message.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.request.text
    }

    /// Returns the toast kind.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.request.kind
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> ToastPhase {
        self.phase
    }
}

/// Single-slot toast manager.
///
/// Timers run as tokio tasks and report back through the event channel
/// returned by [`Notifier::new`]; the owner feeds those events into
/// [`Notifier::handle_event`]. Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct Notifier {
    current: Option<Toast>,
    next_id: ToastId,
    timings: NotifierTimings,
    events: mpsc::UnboundedSender<NotifierEvent>,
}

impl Notifier {
    /// Creates notifier and the receiver its timers report to.
    #[must_use]
    pub fn new(timings: NotifierTimings) -> (Self, mpsc::UnboundedReceiver<NotifierEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let notifier = Self {
            current: None,
            next_id: 0,
            timings,
            events,
        };
        (notifier, rx)
    }

    /// Displays a toast, replacing any current one immediately.
    pub fn show(&mut self, request: NotificationRequest) {
        if let Some(previous) = self.current.take() {
            previous.timer.abort();
            debug!(toast_id = previous.id, "Toast superseded");
        }

        let id = self.next_id;
        self.next_id += 1;

        let timer = self.schedule_lifetime(id);
        debug!(toast_id = id, kind = ?request.kind, "Showing toast");

        self.current = Some(Toast {
            id,
            request,
            phase: ToastPhase::Appearing,
            timer,
        });
    }

    /// Shows a success toast.
    pub fn success(&mut self, text: impl Into<String>) {
        self.show(NotificationRequest::success(text));
    }

    /// Shows an error toast.
    pub fn error(&mut self, text: impl Into<String>) {
        self.show(NotificationRequest::error(text));
    }

    /// Starts the exit transition. No-op if nothing is shown or the toast is
    /// already leaving.
    pub fn remove(&mut self) {
        let remove_delay = self.timings.remove_delay;
        let events = self.events.clone();

        let Some(toast) = self.current.as_mut() else {
            return;
        };
        if toast.phase == ToastPhase::Disappearing {
            return;
        }

        toast.timer.abort();
        toast.phase = ToastPhase::Disappearing;

        let id = toast.id;
        toast.timer = tokio::spawn(async move {
            sleep(remove_delay).await;
            let _ = events.send(NotifierEvent::Remove(id));
        })
        .abort_handle();
    }

    /// Applies a timer transition. Returns whether the display changed.
    pub fn handle_event(&mut self, event: NotifierEvent) -> bool {
        let Some(toast) = self.current.as_mut() else {
            return false;
        };
        if toast.id != event.toast_id() {
            return false;
        }

        match event {
            NotifierEvent::Reveal(_) => {
                if toast.phase != ToastPhase::Appearing {
                    return false;
                }
                toast.phase = ToastPhase::Visible;
                true
            }
            NotifierEvent::Expire(_) => {
                if toast.phase == ToastPhase::Disappearing {
                    return false;
                }
                self.remove();
                true
            }
            NotifierEvent::Remove(_) => {
                if toast.phase != ToastPhase::Disappearing {
                    return false;
                }
                self.current = None;
                debug!(toast_id = event.toast_id(), "Toast removed");
                true
            }
        }
    }

    /// Returns the displayed toast.
    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Returns phase of the current toast, `None` when empty.
    #[must_use]
    pub fn phase(&self) -> Option<ToastPhase> {
        self.current.as_ref().map(|toast| toast.phase)
    }

    /// Returns whether nothing is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    fn schedule_lifetime(&self, id: ToastId) -> AbortHandle {
        let events = self.events.clone();
        let NotifierTimings {
            appear_delay,
            duration,
            ..
        } = self.timings;

        tokio::spawn(async move {
            sleep(appear_delay).await;
            let _ = events.send(NotifierEvent::Reveal(id));
            sleep(duration.saturating_sub(appear_delay)).await;
            let _ = events.send(NotifierEvent::Expire(id));
        })
        .abort_handle()
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Some(toast) = self.current.take() {
            toast.timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    async fn advance(
        notifier: &mut Notifier,
        rx: &mut mpsc::UnboundedReceiver<NotifierEvent>,
        by: Duration,
    ) {
        sleep(by).await;
        while let Ok(event) = rx.try_recv() {
            notifier.handle_event(event);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_lifecycle() {
        let (mut notifier, mut rx) = Notifier::new(NotifierTimings::default());
        assert!(notifier.is_empty());

        notifier.success("Prost");
        assert_eq!(notifier.phase(), Some(ToastPhase::Appearing));

        advance(&mut notifier, &mut rx, Duration::from_millis(50)).await;
        assert_eq!(notifier.phase(), Some(ToastPhase::Visible));
        assert_eq!(notifier.current().unwrap().text(), "Prost");

        advance(&mut notifier, &mut rx, Duration::from_millis(4900)).await;
        assert_eq!(notifier.phase(), Some(ToastPhase::Visible));

        advance(&mut notifier, &mut rx, Duration::from_millis(100)).await;
        assert_eq!(notifier.phase(), Some(ToastPhase::Disappearing));

        advance(&mut notifier, &mut rx, Duration::from_millis(400)).await;
        assert!(notifier.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_supersedes_current() {
        let (mut notifier, mut rx) = Notifier::new(NotifierTimings::default());

        notifier.error("first");
        let first_id = notifier.current().unwrap().id();
        notifier.success("second");

        let current = notifier.current().unwrap();
        assert_eq!(current.text(), "second");
        assert_eq!(current.kind(), NotificationKind::Success);
        assert_ne!(current.id(), first_id);

        advance(&mut notifier, &mut rx, Duration::from_millis(50)).await;
        assert_eq!(notifier.current().unwrap().text(), "second");
        assert_eq!(notifier.phase(), Some(ToastPhase::Visible));

        advance(&mut notifier, &mut rx, Duration::from_secs(6)).await;
        assert_eq!(notifier.phase(), Some(ToastPhase::Disappearing));
        assert_eq!(notifier.current().unwrap().text(), "second");

        advance(&mut notifier, &mut rx, Duration::from_millis(500)).await;
        assert!(notifier.is_empty());

        let leftover = timeout(Duration::from_secs(60), rx.recv()).await;
        assert!(leftover.is_err(), "superseded toast still emitted events");
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_show_restarts_timer() {
        let (mut notifier, mut rx) = Notifier::new(NotifierTimings::default());

        notifier.success("first");
        advance(&mut notifier, &mut rx, Duration::from_secs(4)).await;

        notifier.success("second");
        advance(&mut notifier, &mut rx, Duration::from_secs(2)).await;
        assert_eq!(notifier.phase(), Some(ToastPhase::Visible));
        assert_eq!(notifier.current().unwrap().text(), "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_early_and_idempotent() {
        let (mut notifier, mut rx) = Notifier::new(NotifierTimings::default());

        notifier.remove();
        assert!(notifier.is_empty());

        notifier.error("oops");
        advance(&mut notifier, &mut rx, Duration::from_millis(20)).await;

        notifier.remove();
        notifier.remove();
        assert_eq!(notifier.phase(), Some(ToastPhase::Disappearing));

        advance(&mut notifier, &mut rx, Duration::from_millis(350)).await;
        assert!(notifier.is_empty());

        notifier.remove();
        assert!(notifier.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_events_are_ignored() {
        let (mut notifier, _rx) = Notifier::new(NotifierTimings::default());

        notifier.success("one");
        let stale = notifier.current().unwrap().id();
        notifier.success("two");

        assert!(!notifier.handle_event(NotifierEvent::Expire(stale)));
        assert!(!notifier.handle_event(NotifierEvent::Remove(stale)));
        assert_eq!(notifier.phase(), Some(ToastPhase::Appearing));
        assert_eq!(notifier.current().unwrap().text(), "two");
    }
}
