use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(3u32)]
    pub rows: u32,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub bordered: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let classes = classes!(
        "textarea",
        props.bordered.then_some("textarea-bordered"),
        props.size.with_prefix("textarea"),
        props.class.clone()
    );
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                oninput.emit(area.value());
            }
        })
    };

    html! {
        <textarea
            class={classes}
            rows={props.rows.to_string()}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            disabled={props.disabled}
            oninput={oninput}
        />
    }
}
