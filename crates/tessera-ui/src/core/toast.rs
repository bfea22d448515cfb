//! Notification toast queue.
//!
//! # Design
//! - Ids are monotonically increasing per queue so timers and dismiss
//!   buttons can address one toast without racing on indexes.
//! - The queue never reorders; toasts render oldest first.

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information.
    #[default]
    Info,
    /// A completed operation.
    Success,
    /// A failed operation.
    Error,
}

impl ToastKind {
    /// Alert class modifier rendered by the toast host.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Queue-unique id used for dismissal.
    pub id: u64,
    /// Visual flavor.
    pub kind: ToastKind,
    /// Message shown to the operator.
    pub message: String,
}

/// Ordered queue of active toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Active toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Reconcile armed auto-dismiss timers against the visible toast ids.
///
/// Returns `(to_arm, to_cancel)`: ids that appeared since the last pass and
/// ids whose toast is gone. Ids already armed stay untouched so a new toast
/// never restarts the countdown of an older one.
#[must_use]
pub fn reconcile_timers(armed: &[u64], visible: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let to_arm = visible
        .iter()
        .copied()
        .filter(|id| !armed.contains(id))
        .collect();
    let to_cancel = armed
        .iter()
        .copied()
        .filter(|id| !visible.contains(id))
        .collect();
    (to_arm, to_cancel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Info, "saved");
        let second = queue.push(ToastKind::Error, "failed");
        assert!(second > first);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[0].message, "saved");
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "one");
        queue.push(ToastKind::Info, "two");
        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].message, "two");

        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Info, "one");
        queue.dismiss(first);
        let second = queue.push(ToastKind::Info, "two");
        assert!(second > first);
        assert!(!queue.is_empty());
    }

    #[test]
    fn a_new_toast_leaves_existing_timers_armed() {
        let (to_arm, to_cancel) = reconcile_timers(&[0], &[0, 1]);
        assert_eq!(to_arm, vec![1]);
        assert!(to_cancel.is_empty());
    }

    #[test]
    fn a_dismissed_toast_releases_its_timer() {
        let (to_arm, to_cancel) = reconcile_timers(&[0, 1], &[1]);
        assert!(to_arm.is_empty());
        assert_eq!(to_cancel, vec![0]);
    }
}
