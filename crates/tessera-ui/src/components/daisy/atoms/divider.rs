use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DividerProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub horizontal: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Divider)]
pub fn divider(props: &DividerProps) -> Html {
    html! {
        <div class={classes!(
            "divider",
            props.horizontal.then_some("divider-horizontal"),
            props.class.clone()
        )}>
            {props.label.clone().map(Html::from).unwrap_or_default()}
        </div>
    }
}
