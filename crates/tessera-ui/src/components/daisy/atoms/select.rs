use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

/// One selectable entry: `(value, caption)`.
pub type SelectOption = (AttrValue, AttrValue);

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    #[prop_or_default]
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub bordered: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<String>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let classes = classes!(
        "select",
        props.bordered.then_some("select-bordered"),
        props.size.with_prefix("select"),
        props.class.clone()
    );
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                onchange.emit(select.value());
            }
        })
    };

    html! {
        <select class={classes} disabled={props.disabled} onchange={onchange}>
            {for props.options.iter().map(|(value, label)| {
                let selected = props.value.as_ref() == Some(value);
                html! { <option value={value.clone()} selected={selected}>{label.clone()}</option> }
            })}
        </select>
    }
}
