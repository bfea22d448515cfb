use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Tab)]
pub fn tab(props: &TabProps) -> Html {
    html! {
        <button
            role="tab"
            class={classes!(
                "tab",
                props.size.with_prefix("tab"),
                props.active.then_some("tab-active"),
                props.class.clone(),
            )}
            aria-selected={if props.active { "true" } else { "false" }}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            {props.label.clone()}
        </button>
    }
}
