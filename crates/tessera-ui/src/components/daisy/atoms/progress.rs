use crate::components::daisy::foundations::{DaisyColor, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressProps {
    /// Current value; `None` renders the indeterminate bar.
    #[prop_or_default]
    pub value: Option<u32>,
    #[prop_or(100u32)]
    pub max: u32,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Progress)]
pub fn progress(props: &ProgressProps) -> Html {
    let mut classes = classes!("progress", props.class.clone());
    if let Some(tone) = tone_class("progress", props.tone) {
        classes.push(tone);
    }
    html! {
        <progress
            class={classes}
            value={props.value.map(|value| value.to_string())}
            max={props.max.to_string()}
        />
    }
}
