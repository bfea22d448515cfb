use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub horizontal: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    html! {
        <ul class={classes!(
            "menu",
            props.size.with_prefix("menu"),
            props.horizontal.then_some("menu-horizontal"),
            props.class.clone()
        )}>
            { for props.children.iter() }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuItemProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(MenuItem)]
pub fn menu_item(props: &MenuItemProps) -> Html {
    html! {
        <li class={classes!(props.disabled.then_some("menu-disabled"))}>
            <button
                class={classes!(props.active.then_some("menu-active"))}
                disabled={props.disabled}
                onclick={props.onclick.clone()}
            >
                {props.label.clone()}
            </button>
        </li>
    }
}
