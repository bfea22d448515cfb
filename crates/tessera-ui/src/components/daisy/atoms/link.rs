use crate::components::daisy::foundations::{DaisyColor, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub hover_only: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TextLink)]
pub fn text_link(props: &LinkProps) -> Html {
    let mut classes = classes!(
        "link",
        props.hover_only.then_some("link-hover"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("link", props.tone) {
        classes.push(tone);
    }
    html! {
        <a class={classes} href={props.href.clone()}>{ for props.children.iter() }</a>
    }
}
