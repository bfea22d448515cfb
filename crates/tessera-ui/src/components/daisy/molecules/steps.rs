use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StepsProps {
    pub labels: Vec<AttrValue>,
    /// Index of the step currently in progress; earlier steps render done.
    #[prop_or_default]
    pub current: usize,
    #[prop_or_default]
    pub vertical: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Steps)]
pub fn steps(props: &StepsProps) -> Html {
    let classes = classes!(
        "steps",
        props.vertical.then_some("steps-vertical"),
        props.class.clone()
    );
    html! {
        <ul class={classes}>
            {props.labels.iter().enumerate().map(|(index, label)| {
                let state = (index <= props.current).then_some("step-primary");
                html! {
                    <li class={classes!("step", state)}>{label.clone()}</li>
                }
            }).collect::<Html>()}
        </ul>
    }
}
