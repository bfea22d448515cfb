use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub bordered: bool,
    #[prop_or_default]
    pub compact: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    /// Buttons rendered in the card's action row.
    #[prop_or_default]
    pub actions: Option<Html>,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let classes = classes!(
        "card",
        "bg-base-100",
        props.bordered.then_some("card-border"),
        props.compact.then_some("card-sm"),
        props.class.clone()
    );
    html! {
        <div class={classes}>
            <div class="card-body">
                {props.title.as_ref().map(|title| html! {
                    <h2 class="card-title">{title.clone()}</h2>
                }).unwrap_or_default()}
                { for props.children.iter() }
                {props.actions.as_ref().map(|actions| html! {
                    <div class="card-actions justify-end">{actions.clone()}</div>
                }).unwrap_or_default()}
            </div>
        </div>
    }
}
