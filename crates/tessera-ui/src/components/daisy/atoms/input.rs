use crate::components::daisy::foundations::{DaisyColor, DaisySize, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(AttrValue::from("text"))]
    pub r#type: AttrValue,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub bordered: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    /// Fires on every input with the current value.
    #[prop_or_default]
    pub oninput: Callback<String>,
    /// Fires when focus leaves the input, with the final value.
    #[prop_or_default]
    pub onchange: Callback<String>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let mut classes = classes!(
        "input",
        props.bordered.then_some("input-bordered"),
        props.size.with_prefix("input"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("input", props.tone) {
        classes.push(tone);
    }

    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                onchange.emit(input.value());
            }
        })
    };

    html! {
        <input
            class={classes}
            r#type={props.r#type.clone()}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            disabled={props.disabled}
            oninput={oninput}
            onchange={onchange}
        />
    }
}
