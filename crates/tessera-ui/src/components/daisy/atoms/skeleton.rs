use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    /// Utility classes controlling the placeholder's footprint.
    #[prop_or_default]
    pub class: Classes,
}

/// Animated placeholder block shown while content loads.
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    html! { <div class={classes!("skeleton", props.class.clone())}></div> }
}
