use yew::prelude::*;

/// One crumb in the trail; crumbs without an `href` render as plain text.
#[derive(Clone, PartialEq)]
pub struct Crumb {
    pub label: AttrValue,
    pub href: Option<AttrValue>,
}

impl Crumb {
    pub fn link(label: impl Into<AttrValue>, href: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn text(label: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BreadcrumbsProps {
    pub crumbs: Vec<Crumb>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Breadcrumbs)]
pub fn breadcrumbs(props: &BreadcrumbsProps) -> Html {
    html! {
        <div class={classes!("breadcrumbs", "text-sm", props.class.clone())}>
            <ul>
                {props.crumbs.iter().map(|crumb| html! {
                    <li>
                        {match &crumb.href {
                            Some(href) => html! { <a href={href.clone()}>{crumb.label.clone()}</a> },
                            None => html! { {crumb.label.clone()} },
                        }}
                    </li>
                }).collect::<Html>()}
            </ul>
        </div>
    }
}
