use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub figure: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    html! {
        <div class={classes!("stat", props.class.clone())}>
            {props.figure.as_ref().map(|figure| html! {
                <div class="stat-figure">{figure.clone()}</div>
            }).unwrap_or_default()}
            <div class="stat-title">{props.title.clone()}</div>
            <div class="stat-value">{props.value.clone()}</div>
            {props.description.as_ref().map(|description| html! {
                <div class="stat-desc">{description.clone()}</div>
            }).unwrap_or_default()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatGroupProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StatGroup)]
pub fn stat_group(props: &StatGroupProps) -> Html {
    html! {
        <div class={classes!("stats", "shadow", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
