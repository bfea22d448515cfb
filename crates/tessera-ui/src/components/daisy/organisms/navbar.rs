use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Rendered in the start slot, usually the page title.
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub start: Children,
    #[prop_or_default]
    pub end: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <div class={classes!("navbar", "bg-base-100", "border-b", "border-base-300", props.class.clone())}>
            <div class="navbar-start gap-2">
                { for props.start.iter() }
                if !props.title.is_empty() {
                    <span class="text-lg font-semibold">{props.title.clone()}</span>
                }
            </div>
            <div class="navbar-end gap-2">{ for props.end.iter() }</div>
        </div>
    }
}
