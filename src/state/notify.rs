/// Transient toast messages.
///
/// A single slot holds at most one live toast. Emitting a new one replaces
/// whatever is showing and restarts the display window. Every toast gets a
/// sequence number, and the auto-dismiss timer carries that number back, so
/// an expiry scheduled for a toast that has since been replaced is ignored
/// instead of clearing the newer one.
use std::time::Duration;

/// How long a toast stays up before it dismisses itself
pub const AUTO_DISMISS: Duration = Duration::from_millis(3000);

/// Visual flavor of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Something was added to the order
    Success,
    /// Neutral status, e.g. order completed
    Info,
}

/// One short-lived status message
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    seq: u64,
}

/// The single toast slot
#[derive(Debug, Default)]
pub struct Toasts {
    active: Option<Toast>,
    next_seq: u64,
}

impl Toasts {
    /// Show a toast, replacing any active one.
    /// Returns the sequence number the expiry timer must hand back to
    /// [`Toasts::expire`].
    pub fn emit(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.active = Some(Toast {
            message: message.into(),
            kind,
            seq,
        });

        seq
    }

    /// Timer-driven dismiss. Only clears the slot when `seq` still names the
    /// active toast; a stale timer from a superseded toast does nothing.
    pub fn expire(&mut self, seq: u64) {
        if self.active.as_ref().is_some_and(|toast| toast.seq == seq) {
            self.active = None;
        }
    }

    /// Operator clicked the toast's close button
    pub fn dismiss(&mut self) {
        self.active = None;
    }

    /// The toast currently showing, if any
    pub fn active(&self) -> Option<&Toast> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_replaces_active_toast() {
        let mut toasts = Toasts::default();
        toasts.emit("first", ToastKind::Success);
        toasts.emit("second", ToastKind::Info);

        let active = toasts.active().unwrap();
        assert_eq!(active.message, "second");
        assert_eq!(active.kind, ToastKind::Info);
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut toasts = Toasts::default();
        let first = toasts.emit("first", ToastKind::Success);
        let second = toasts.emit("second", ToastKind::Success);

        // The first toast's timer fires after it was superseded
        toasts.expire(first);
        assert!(toasts.active().is_some());

        toasts.expire(second);
        assert!(toasts.active().is_none());
    }

    #[test]
    fn test_explicit_dismiss_clears_unconditionally() {
        let mut toasts = Toasts::default();
        toasts.emit("anything", ToastKind::Info);

        toasts.dismiss();
        assert!(toasts.active().is_none());

        // Dismissing an empty slot is harmless
        toasts.dismiss();
        assert!(toasts.active().is_none());
    }

    #[test]
    fn test_expire_on_empty_slot_is_harmless() {
        let mut toasts = Toasts::default();
        toasts.expire(0);
        assert!(toasts.active().is_none());
    }
}
