use yew::prelude::*;

/// Dropdown menu alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DropdownAlign {
    #[default]
    Start,
    End,
}

#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    /// Element that opens the menu.
    pub trigger: Html,
    #[prop_or_default]
    pub align: DropdownAlign,
    #[prop_or_default]
    pub hover: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let classes = classes!(
        "dropdown",
        (props.align == DropdownAlign::End).then_some("dropdown-end"),
        props.hover.then_some("dropdown-hover"),
        props.class.clone()
    );
    html! {
        <div class={classes}>
            <div tabindex="0" role="button">{props.trigger.clone()}</div>
            <ul tabindex="0" class="dropdown-content menu bg-base-100 rounded-box z-10 w-52 p-2 shadow">
                { for props.children.iter() }
            </ul>
        </div>
    }
}
