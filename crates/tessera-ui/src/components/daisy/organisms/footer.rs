use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let classes = classes!(
        "footer",
        "footer-center",
        "p-4",
        "bg-base-200",
        "text-base-content",
        "text-sm",
        props.class.clone()
    );
    html! {
        <footer class={classes}>{ for props.children.iter() }</footer>
    }
}
