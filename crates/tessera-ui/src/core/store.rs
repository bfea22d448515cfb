//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Only state that crosses feature boundaries lives here; page-local form
//!   state stays inside the owning feature.

use crate::core::toast::{ToastKind, ToastQueue};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Active notification toasts.
    pub toasts: ToastQueue,
    /// Title shown in the topbar for the current page.
    pub page_title: String,
}

/// Queue a toast on the shared store.
pub fn push_toast(store: &mut AppStore, kind: ToastKind, message: impl Into<String>) -> u64 {
    store.toasts.push(kind, message)
}

/// Dismiss a toast on the shared store.
pub fn dismiss_toast(store: &mut AppStore, id: u64) {
    store.toasts.dismiss(id);
}

/// Record the current page title for the topbar.
pub fn set_page_title(store: &mut AppStore, title: impl Into<String>) {
    store.page_title = title.into();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_flow_through_the_store() {
        let mut store = AppStore::default();
        let id = push_toast(&mut store, ToastKind::Success, "Tenant saved");
        assert_eq!(store.toasts.toasts().len(), 1);
        dismiss_toast(&mut store, id);
        assert!(store.toasts.is_empty());
    }

    #[test]
    fn page_title_updates() {
        let mut store = AppStore::default();
        set_page_title(&mut store, "Users");
        assert_eq!(store.page_title, "Users");
    }
}
