use yew::prelude::*;

/// Tooltip placement relative to the wrapped element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TooltipSide {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipSide {
    const fn as_class(self) -> Option<&'static str> {
        match self {
            Self::Top => None,
            Self::Bottom => Some("tooltip-bottom"),
            Self::Left => Some("tooltip-left"),
            Self::Right => Some("tooltip-right"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub tip: AttrValue,
    #[prop_or_default]
    pub side: TooltipSide,
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    html! {
        <div
            class={classes!(
                "tooltip",
                props.side.as_class(),
                props.open.then_some("tooltip-open"),
                props.class.clone()
            )}
            data-tip={props.tip.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}
