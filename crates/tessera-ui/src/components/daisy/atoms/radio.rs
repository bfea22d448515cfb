use crate::components::daisy::foundations::{DaisyColor, DaisySize, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RadioProps {
    /// Group name shared by related radios.
    pub name: AttrValue,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onselect: Callback<()>,
}

#[function_component(Radio)]
pub fn radio(props: &RadioProps) -> Html {
    let mut classes = classes!(
        "radio",
        props.size.with_prefix("radio"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("radio", props.tone) {
        classes.push(tone);
    }
    let onchange = {
        let onselect = props.onselect.clone();
        Callback::from(move |_: Event| onselect.emit(()))
    };

    html! {
        <input
            r#type="radio"
            name={props.name.clone()}
            class={classes}
            checked={props.checked}
            disabled={props.disabled}
            onchange={onchange}
        />
    }
}
