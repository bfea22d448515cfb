use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum CollapseIcon {
    #[default]
    None,
    Arrow,
    Plus,
}

impl CollapseIcon {
    const fn class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Arrow => Some("collapse-arrow"),
            Self::Plus => Some("collapse-plus"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CollapseProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub icon: CollapseIcon,
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Checkbox-driven collapse; state lives in the DOM, not in Rust.
#[function_component(Collapse)]
pub fn collapse(props: &CollapseProps) -> Html {
    let classes = classes!(
        "collapse",
        "bg-base-200",
        props.icon.class(),
        props.class.clone()
    );
    html! {
        <div class={classes}>
            <input type="checkbox" checked={props.open} />
            <div class="collapse-title font-medium">{props.title.clone()}</div>
            <div class="collapse-content">
                { for props.children.iter() }
            </div>
        </div>
    }
}
