use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// One-based page number shown to the operator.
    #[prop_or(1u64)]
    pub current: u64,
    #[prop_or(1u64)]
    pub total: u64,
    /// How many numbered buttons to show around the current page.
    #[prop_or(5u64)]
    pub window: u64,
    #[prop_or_default]
    pub class: Classes,
    /// Emits the selected one-based page number.
    #[prop_or_default]
    pub on_change: Callback<u64>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total = props.total.max(1);
    let current = props.current.clamp(1, total);
    let window = props.window.max(1);

    let half = window / 2;
    let first_shown = current.saturating_sub(half).max(1);
    let last_shown = (first_shown + window - 1).min(total);

    let go_to = |page: u64| {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(page))
    };

    html! {
        <div class={classes!("join", props.class.clone())}>
            <button class="btn join-item" disabled={current <= 1} onclick={go_to(1)}>{"«"}</button>
            <button class="btn join-item" disabled={current <= 1} onclick={go_to(current - 1)}>{"‹"}</button>
            {for (first_shown..=last_shown).map(|page| {
                let classes = classes!("btn", "join-item", (page == current).then_some("btn-active"));
                html! { <button class={classes} onclick={go_to(page)}>{page}</button> }
            })}
            <button class="btn join-item" disabled={current >= total} onclick={go_to(current + 1)}>{"›"}</button>
            <button class="btn join-item" disabled={current >= total} onclick={go_to(total)}>{"»"}</button>
        </div>
    }
}
