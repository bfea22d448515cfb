use crate::core::store::{self, AppStore};
use crate::core::toast::reconcile_timers;
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;
use yewdux::prelude::*;

const AUTO_DISMISS_MS: u32 = 4_000;

/// Renders the shared toast queue and auto-dismisses each entry.
#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let (app, dispatch) = use_store::<AppStore>();
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);

    {
        let ids: Vec<u64> = app.toasts.toasts().iter().map(|toast| toast.id).collect();
        let dispatch = dispatch.clone();
        let timers = timers.clone();
        // Timers are keyed by toast id so a new toast never resets the
        // countdown of the ones already on screen.
        use_effect_with_deps(
            move |visible: &Vec<u64>| {
                let mut timers = timers.borrow_mut();
                let armed: Vec<u64> = timers.keys().copied().collect();
                let (to_arm, to_cancel) = reconcile_timers(&armed, visible);
                for id in to_cancel {
                    timers.remove(&id);
                }
                for id in to_arm {
                    let dispatch = dispatch.clone();
                    timers.insert(
                        id,
                        Timeout::new(AUTO_DISMISS_MS, move || {
                            dispatch.reduce_mut(move |app| store::dismiss_toast(app, id));
                        }),
                    );
                }
            },
            ids,
        );
    }

    html! {
        <div class="toast toast-end" aria-live="polite" aria-atomic="true">
            {for app.toasts.toasts().iter().map(|toast| {
                let id = toast.id;
                let on_close = dispatch.reduce_mut_callback(move |app| {
                    store::dismiss_toast(app, id);
                });
                html! {
                    <div class={classes!("alert", toast.kind.class())} role="status">
                        <span>{toast.message.clone()}</span>
                        <button
                            class="btn btn-ghost btn-xs"
                            aria-label="Dismiss"
                            onclick={on_close}
                        >{"✕"}</button>
                    </div>
                }
            })}
        </div>
    }
}
