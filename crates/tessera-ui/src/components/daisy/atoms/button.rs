use crate::components::daisy::foundations::{DaisyColor, DaisySize, DaisyVariant, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub variant: DaisyVariant,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub block: bool,
    #[prop_or_default]
    pub square: bool,
    #[prop_or_default]
    pub circle: bool,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub r#type: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let mut classes = classes!(
        "btn",
        props.variant.as_class(),
        props.size.with_prefix("btn"),
        props.wide.then_some("btn-wide"),
        props.block.then_some("btn-block"),
        props.square.then_some("btn-square"),
        props.circle.then_some("btn-circle"),
        props.active.then_some("btn-active"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("btn", props.tone) {
        classes.push(tone);
    }

    html! {
        <button
            class={classes}
            disabled={props.disabled}
            r#type={props.r#type.clone()}
            onclick={props.onclick.clone()}
        >
            if props.loading {
                <span class="loading loading-spinner"></span>
            }
            { for props.children.iter() }
        </button>
    }
}
