use yew::prelude::*;

/// One entry in the sidebar navigation menu.
#[derive(Clone, PartialEq)]
pub struct SidebarItem {
    pub label: AttrValue,
    /// Short glyph shown before the label.
    pub icon: AttrValue,
    pub active: bool,
    pub onclick: Callback<MouseEvent>,
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub brand: AttrValue,
    pub items: Vec<SidebarItem>,
    #[prop_or_default]
    pub footer: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let classes = classes!(
        "flex",
        "flex-col",
        "w-64",
        "min-h-screen",
        "bg-base-200",
        props.class.clone()
    );
    html! {
        <aside class={classes}>
            <div class="px-4 py-4 text-xl font-bold">{props.brand.clone()}</div>
            <ul class="menu flex-1 px-2">
                {props.items.iter().map(|item| html! {
                    <li>
                        <a
                            class={item.active.then_some("active")}
                            onclick={item.onclick.clone()}
                        >
                            <span>{item.icon.clone()}</span>
                            {item.label.clone()}
                        </a>
                    </li>
                }).collect::<Html>()}
            </ul>
            {props.footer.as_ref().map(|footer| html! {
                <div class="px-4 py-3">{footer.clone()}</div>
            }).unwrap_or_default()}
        </aside>
    }
}
