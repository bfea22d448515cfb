use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TableProps {
    /// Pre-rendered `<tr>` of header cells.
    #[prop_or_default]
    pub header: Option<Html>,
    /// Pre-rendered `<tr>` body rows.
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub zebra: bool,
    /// Keep the header row visible while the body scrolls.
    #[prop_or_default]
    pub pin_header: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Table)]
pub fn table(props: &TableProps) -> Html {
    let classes = classes!(
        "table",
        props.size.with_prefix("table"),
        props.zebra.then_some("table-zebra"),
        props.pin_header.then_some("table-pin-rows"),
        props.class.clone()
    );
    html! {
        <div class="overflow-x-auto">
            <table class={classes}>
                {props.header.as_ref().map(|header| html! {
                    <thead>{header.clone()}</thead>
                }).unwrap_or_default()}
                <tbody>
                    { for props.children.iter() }
                </tbody>
            </table>
        </div>
    }
}
