use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldLabelProps {
    pub text: AttrValue,
    /// Secondary caption rendered at the opposite end.
    #[prop_or_default]
    pub alt: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Form-control label wrapping an input with captions.
#[function_component(FieldLabel)]
pub fn field_label(props: &FieldLabelProps) -> Html {
    html! {
        <label class={classes!("form-control", props.class.clone())}>
            <div class="label">
                <span class="label-text">{props.text.clone()}</span>
                {props.alt.as_ref().map(|alt| html! {
                    <span class="label-text-alt">{alt.clone()}</span>
                }).unwrap_or_default()}
            </div>
            { for props.children.iter() }
        </label>
    }
}
