//! Server-driven data grid.
//!
//! # Design
//! - The grid owns a [`GridController`] and forwards every emitted
//!   [`LoadRequest`] through `on_load`; fetching stays with the caller.
//! - Rows arrive pre-rendered so cell markup is entirely caller-defined.
//! - `total_count` flows back in as a prop after each fetch.

use crate::components::daisy::{
    Button, DaisySize, DaisyVariant, Input, Pagination, Select, SelectOption, Skeleton, Table,
};
use crate::core::grid::{GridColumn, GridController, LoadRequest, SortDirection};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DataGridProps {
    pub columns: Vec<GridColumn>,
    /// Pre-rendered `<tr>` elements for the current page.
    pub rows: Vec<Html>,
    /// Total matching records reported by the last fetch.
    pub total_count: u64,
    #[prop_or_default]
    pub loading: bool,
    /// Receives every load request the controller emits.
    pub on_load: Callback<LoadRequest>,
    #[prop_or(AttrValue::Static("No records found."))]
    pub empty_message: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

const fn sort_glyph(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::None => "↕",
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    }
}

#[function_component(DataGrid)]
pub fn data_grid(props: &DataGridProps) -> Html {
    let controller = use_state(GridController::new);

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |total_count| {
                let mut next = (*controller).clone();
                next.set_total_count(*total_count);
                controller.set(next);
                || ()
            },
            props.total_count,
        );
    }

    // Kick off the first fetch once after mount.
    {
        let controller = controller.clone();
        let on_load = props.on_load.clone();
        use_effect_with_deps(
            move |()| {
                on_load.emit(controller.refresh());
                || ()
            },
            (),
        );
    }

    // Applies a mutation and forwards the emission, if any.
    let mutate = {
        let controller = controller.clone();
        let on_load = props.on_load.clone();
        move |apply: &dyn Fn(&mut GridController) -> Option<LoadRequest>| {
            let mut next = (*controller).clone();
            if let Some(request) = apply(&mut next) {
                on_load.emit(request);
            }
            controller.set(next);
        }
    };

    let header = html! {
        <tr>
            {props.columns.iter().map(|column| {
                let direction = controller.sort_direction_for(&column.field);
                let label = if column.sortable {
                    let field = column.field.clone();
                    let mutate = mutate.clone();
                    let onclick = Callback::from(move |_| {
                        let field = field.clone();
                        mutate(&|grid: &mut GridController| grid.toggle_sort(&field));
                    });
                    html! {
                        <button class="flex items-center gap-1 cursor-pointer" {onclick}>
                            {column.title.clone()}
                            <span class="opacity-60">{sort_glyph(direction)}</span>
                        </button>
                    }
                } else {
                    html! { {column.title.clone()} }
                };
                html! { <th class={column.align.class()}>{label}</th> }
            }).collect::<Html>()}
        </tr>
    };

    let has_filterable = props.columns.iter().any(|column| column.filterable);
    let filter_row = has_filterable.then(|| {
        html! {
            <tr>
                {props.columns.iter().map(|column| {
                    if column.filterable {
                        let field = column.field.clone();
                        let mutate = mutate.clone();
                        let onchange = Callback::from(move |value: String| {
                            let field = field.clone();
                            mutate(&|grid: &mut GridController| grid.apply_filter(&field, &value));
                        });
                        let value = controller
                            .filter_value(&column.field)
                            .map(str::to_owned)
                            .unwrap_or_default();
                        html! {
                            <th>
                                <Input
                                    value={value}
                                    placeholder={format!("Filter {}", column.title)}
                                    size={DaisySize::Sm}
                                    bordered=true
                                    onchange={onchange}
                                />
                            </th>
                        }
                    } else {
                        html! { <th></th> }
                    }
                }).collect::<Html>()}
            </tr>
        }
    });

    let column_count = props.columns.len();
    let body = if props.loading {
        (0..5)
            .map(|_| {
                html! {
                    <tr>
                        {(0..column_count).map(|_| html! {
                            <td><Skeleton class={classes!("h-4", "w-full")} /></td>
                        }).collect::<Html>()}
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    } else if props.rows.is_empty() {
        vec![html! {
            <tr>
                <td colspan={column_count.to_string()} class="text-center opacity-60 py-8">
                    {props.empty_message.clone()}
                </td>
            </tr>
        }]
    } else {
        props.rows.clone()
    };

    let summary = if controller.total_count() == 0 {
        String::from("No records")
    } else {
        format!(
            "Showing {}\u{2013}{} of {}",
            controller.first_item_index(),
            controller.last_item_index(),
            controller.total_count()
        )
    };

    let on_page = {
        let mutate = mutate.clone();
        Callback::from(move |page: u64| {
            // Pagination is one-based; the controller is zero-based.
            mutate(&|grid: &mut GridController| grid.go_to_page(page.saturating_sub(1)));
        })
    };

    let size_options: Vec<SelectOption> = controller
        .page_size_options()
        .iter()
        .map(|size| {
            (
                AttrValue::from(size.to_string()),
                AttrValue::from(format!("{size} / page")),
            )
        })
        .collect();
    let on_page_size = {
        let mutate = mutate.clone();
        Callback::from(move |value: String| {
            if let Ok(page_size) = value.parse::<u64>() {
                mutate(&|grid: &mut GridController| grid.change_page_size(page_size));
            }
        })
    };

    let clear = controller.has_active_filters().then(|| {
        let mutate = mutate.clone();
        let onclick = Callback::from(move |_| {
            mutate(&|grid: &mut GridController| grid.clear_filters());
        });
        html! {
            <Button size={DaisySize::Sm} variant={DaisyVariant::Ghost} onclick={onclick}>
                {"Clear filters"}
            </Button>
        }
    });

    html! {
        <div class={classes!("flex", "flex-col", "gap-2", props.class.clone())}>
            <div class="flex items-center justify-between">
                <span class="text-sm opacity-70">{summary}</span>
                {clear.unwrap_or_default()}
            </div>
            <Table
                header={html! { <>{header}{filter_row.unwrap_or_default()}</> }}
                zebra=true
            >
                { body }
            </Table>
            <div class="flex items-center justify-between">
                <Select
                    options={size_options}
                    value={Some(AttrValue::from(controller.page_size().to_string()))}
                    size={DaisySize::Sm}
                    bordered=true
                    onchange={on_page_size}
                />
                <Pagination
                    current={controller.display_page_number()}
                    total={controller.total_pages()}
                    on_change={on_page}
                />
            </div>
        </div>
    }
}
