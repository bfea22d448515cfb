use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KbdProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Kbd)]
pub fn kbd(props: &KbdProps) -> Html {
    html! {
        <kbd class={classes!("kbd", props.size.with_prefix("kbd"), props.class.clone())}>
            {props.label.clone()}
        </kbd>
    }
}
