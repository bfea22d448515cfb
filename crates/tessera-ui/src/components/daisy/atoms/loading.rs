use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

/// Loading indicator shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadingShape {
    #[default]
    Spinner,
    Dots,
    Ring,
    Bars,
}

impl LoadingShape {
    const fn as_class(self) -> &'static str {
        match self {
            Self::Spinner => "loading-spinner",
            Self::Dots => "loading-dots",
            Self::Ring => "loading-ring",
            Self::Bars => "loading-bars",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub shape: LoadingShape,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <span class={classes!(
            "loading",
            props.shape.as_class(),
            props.size.with_prefix("loading"),
            props.class.clone()
        )}></span>
    }
}
