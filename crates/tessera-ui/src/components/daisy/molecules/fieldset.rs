use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldsetProps {
    pub legend: AttrValue,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Bordered group for related form controls.
#[function_component(Fieldset)]
pub fn fieldset(props: &FieldsetProps) -> Html {
    let classes = classes!(
        "fieldset",
        "rounded-box",
        "border",
        "border-base-300",
        "p-4",
        props.class.clone()
    );
    html! {
        <fieldset class={classes}>
            <legend class="fieldset-legend">{props.legend.clone()}</legend>
            { for props.children.iter() }
        </fieldset>
    }
}
