use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    /// Image URL; falls back to a placeholder with `initials`.
    #[prop_or_default]
    pub src: Option<AttrValue>,
    #[prop_or_default]
    pub initials: AttrValue,
    #[prop_or_default]
    pub rounded: bool,
    #[prop_or_default]
    pub online: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let classes = classes!(
        "avatar",
        props.online.then_some("avatar-online"),
        props.src.is_none().then_some("avatar-placeholder"),
        props.class.clone()
    );
    let shape = if props.rounded { "rounded-full" } else { "rounded" };

    html! {
        <div class={classes}>
            <div class={classes!("w-10", shape)}>
                {props.src.as_ref().map_or_else(
                    || html! { <span>{props.initials.clone()}</span> },
                    |src| html! { <img src={src.clone()} alt={props.initials.clone()} /> },
                )}
            </div>
        </div>
    }
}
