use crate::components::daisy::atoms::Tab;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum TabStyle {
    #[default]
    Plain,
    Boxed,
    Bordered,
    Lifted,
}

impl TabStyle {
    const fn class(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Boxed => Some("tabs-boxed"),
            Self::Bordered => Some("tabs-bordered"),
            Self::Lifted => Some("tabs-lifted"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub labels: Vec<AttrValue>,
    #[prop_or_default]
    pub active: usize,
    #[prop_or_default]
    pub style: TabStyle,
    #[prop_or_default]
    pub on_select: Callback<usize>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    html! {
        <div role="tablist" class={classes!("tabs", props.style.class(), props.class.clone())}>
            {props.labels.iter().enumerate().map(|(index, label)| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(index));
                html! {
                    <Tab
                        label={label.clone()}
                        active={index == props.active}
                        {onclick}
                    />
                }
            }).collect::<Html>()}
        </div>
    }
}
