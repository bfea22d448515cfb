use crate::components::daisy::foundations::{DaisyColor, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub soft: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let mut classes = classes!(
        "alert",
        props.soft.then_some("alert-soft"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("alert", props.tone) {
        classes.push(tone);
    }
    html! {
        <div role="alert" class={classes}>{ for props.children.iter() }</div>
    }
}
