//! Tenants page: grid, edit dialog, and delete confirmation.

use crate::app::ApiCtx;
use crate::components::daisy::{
    Badge, Button, DaisyColor, DaisySize, DaisyVariant, FieldLabel, Input, Modal, Toggle,
};
use crate::components::grid::DataGrid;
use crate::core::grid::LoadRequest;
use crate::core::store::{self, AppStore};
use crate::core::toast::ToastKind;
use crate::features::tenants::state::{TenantForm, columns};
use std::cell::RefCell;
use std::rc::Rc;
use tessera_api_models::TenantDto;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(TenantsPage)]
pub(crate) fn tenants_page() -> Html {
    let Some(api) = use_context::<ApiCtx>() else {
        return Html::default();
    };
    let dispatch = Dispatch::<AppStore>::new();

    let tenants = use_state(Vec::<TenantDto>::new);
    let total = use_state(|| 0u64);
    let loading = use_state(|| true);
    let form = use_state(|| None as Option<TenantForm>);
    let form_error = use_state(|| None as Option<String>);
    let pending_delete = use_state(|| None as Option<TenantDto>);
    let last_request: Rc<RefCell<LoadRequest>> = use_mut_ref(LoadRequest::default);

    let load = {
        let api = api.clone();
        let tenants = tenants.clone();
        let total = total.clone();
        let loading = loading.clone();
        let dispatch = dispatch.clone();
        let last_request = last_request.clone();
        Callback::from(move |request: LoadRequest| {
            *last_request.borrow_mut() = request.clone();
            let api = api.clone();
            let tenants = tenants.clone();
            let total = total.clone();
            let loading = loading.clone();
            let dispatch = dispatch.clone();
            loading.set(true);
            yew::platform::spawn_local(async move {
                match api.client.list_tenants(&request).await {
                    Ok(page) => {
                        total.set(page.total_count);
                        tenants.set(page.items);
                    }
                    Err(err) => {
                        dispatch.reduce_mut(move |app| {
                            store::push_toast(app, ToastKind::Error, err.to_string());
                        });
                    }
                }
                loading.set(false);
            });
        })
    };

    let reload = {
        let load = load.clone();
        let last_request = last_request.clone();
        Callback::from(move |()| {
            let request = last_request.borrow().clone();
            load.emit(request);
        })
    };

    let open_create = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            form_error.set(None);
            form.set(Some(TenantForm::new()));
        })
    };

    let close_form = {
        let form = form.clone();
        Callback::from(move |()| form.set(None))
    };

    let save = {
        let api = api.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let dispatch = dispatch.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            let Some(current) = (*form).clone() else {
                return;
            };
            let input = match current.to_input() {
                Ok(input) => input,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            let api = api.clone();
            let form = form.clone();
            let form_error = form_error.clone();
            let dispatch = dispatch.clone();
            let reload = reload.clone();
            yew::platform::spawn_local(async move {
                let result = match input.id {
                    Some(id) => api.client.update_tenant(id, &input).await,
                    None => api.client.create_tenant(&input).await,
                };
                match result {
                    Ok(saved) => {
                        dispatch.reduce_mut(move |app| {
                            store::push_toast(
                                app,
                                ToastKind::Success,
                                format!("Saved tenant {}", saved.name),
                            );
                        });
                        form.set(None);
                        form_error.set(None);
                        reload.emit(());
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
            });
        })
    };

    let confirm_delete = {
        let api = api.clone();
        let pending_delete = pending_delete.clone();
        let dispatch = dispatch.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            let Some(tenant) = (*pending_delete).clone() else {
                return;
            };
            let api = api.clone();
            let pending_delete = pending_delete.clone();
            let dispatch = dispatch.clone();
            let reload = reload.clone();
            yew::platform::spawn_local(async move {
                match api.client.delete_tenant(tenant.id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(move |app| {
                            store::push_toast(
                                app,
                                ToastKind::Success,
                                format!("Deleted tenant {}", tenant.name),
                            );
                        });
                        reload.emit(());
                    }
                    Err(err) => {
                        dispatch.reduce_mut(move |app| {
                            store::push_toast(app, ToastKind::Error, err.to_string());
                        });
                    }
                }
                pending_delete.set(None);
            });
        })
    };

    let rows = tenants
        .iter()
        .map(|tenant| {
            let edit = {
                let form = form.clone();
                let form_error = form_error.clone();
                let tenant = tenant.clone();
                Callback::from(move |_| {
                    form_error.set(None);
                    form.set(Some(TenantForm::from_dto(&tenant)));
                })
            };
            let request_delete = {
                let pending_delete = pending_delete.clone();
                let tenant = tenant.clone();
                Callback::from(move |_| pending_delete.set(Some(tenant.clone())))
            };
            let valid_until = tenant
                .valid_until
                .map_or_else(|| "Unlimited".to_string(), |at| at.format("%Y-%m-%d").to_string());
            let active = if tenant.is_active {
                html! { <Badge tone={DaisyColor::Success} size={DaisySize::Sm}>{"Active"}</Badge> }
            } else {
                html! { <Badge tone={DaisyColor::Neutral} size={DaisySize::Sm}>{"Inactive"}</Badge> }
            };
            html! {
                <tr key={tenant.id.to_string()}>
                    <td>{tenant.name.clone()}</td>
                    <td><code>{tenant.identifier.clone()}</code></td>
                    <td>{tenant.admin_email.clone().unwrap_or_default()}</td>
                    <td>{valid_until}</td>
                    <td class="text-center">{active}</td>
                    <td class="text-right">
                        <div class="join">
                            <Button size={DaisySize::Xs} variant={DaisyVariant::Ghost} onclick={edit}>
                                {"Edit"}
                            </Button>
                            <Button
                                size={DaisySize::Xs}
                                variant={DaisyVariant::Ghost}
                                tone={DaisyColor::Error}
                                onclick={request_delete}
                            >{"Delete"}</Button>
                        </div>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    let dialog = (*form).clone().map(|current| {
        let set = |apply: fn(&mut TenantForm, String)| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone().unwrap_or_default();
                apply(&mut next, value);
                form.set(Some(next));
            })
        };
        let set_active = {
            let form = form.clone();
            Callback::from(move |checked: bool| {
                let mut next = (*form).clone().unwrap_or_default();
                next.is_active = checked;
                form.set(Some(next));
            })
        };
        html! {
            <Modal open=true title={current.title()} on_close={close_form.clone()}>
                <div class="flex flex-col gap-2">
                    <FieldLabel text="Name">
                        <Input
                            value={current.name.clone()}
                            bordered=true
                            oninput={set(|form, value| form.name = value)}
                        />
                    </FieldLabel>
                    <FieldLabel text="Identifier" alt="Lowercase, digits, hyphens">
                        <Input
                            value={current.identifier.clone()}
                            bordered=true
                            oninput={set(|form, value| form.identifier = value)}
                        />
                    </FieldLabel>
                    <FieldLabel text="Admin email" alt="Optional">
                        <Input
                            value={current.admin_email.clone()}
                            r#type="email"
                            bordered=true
                            oninput={set(|form, value| form.admin_email = value)}
                        />
                    </FieldLabel>
                    <FieldLabel text="Valid until" alt="YYYY-MM-DD, blank for unlimited">
                        <Input
                            value={current.valid_until.clone()}
                            bordered=true
                            oninput={set(|form, value| form.valid_until = value)}
                        />
                    </FieldLabel>
                    <FieldLabel text="Active">
                        <Toggle checked={current.is_active} onchange={set_active} />
                    </FieldLabel>
                    {form_error.as_ref().map(|message| html! {
                        <p class="text-error text-sm">{message.clone()}</p>
                    }).unwrap_or_default()}
                    <div class="modal-action">
                        <Button variant={DaisyVariant::Ghost} onclick={{
                            let close_form = close_form.clone();
                            Callback::from(move |_| close_form.emit(()))
                        }}>{"Cancel"}</Button>
                        <Button tone={DaisyColor::Primary} onclick={save.clone()}>{"Save"}</Button>
                    </div>
                </div>
            </Modal>
        }
    });

    let confirm = (*pending_delete).clone().map(|tenant| {
        let cancel = {
            let pending_delete = pending_delete.clone();
            Callback::from(move |()| pending_delete.set(None))
        };
        html! {
            <Modal open=true title="Delete tenant" on_close={cancel.clone()}>
                <p>{format!("Delete {}? All of its data becomes unreachable.", tenant.name)}</p>
                <div class="modal-action">
                    <Button variant={DaisyVariant::Ghost} onclick={{
                        let cancel = cancel.clone();
                        Callback::from(move |_| cancel.emit(()))
                    }}>{"Cancel"}</Button>
                    <Button tone={DaisyColor::Error} onclick={confirm_delete.clone()}>
                        {"Delete"}
                    </Button>
                </div>
            </Modal>
        }
    });

    html! {
        <div class="flex flex-col gap-4">
            <div class="flex justify-end">
                <Button tone={DaisyColor::Primary} size={DaisySize::Sm} onclick={open_create}>
                    {"Add tenant"}
                </Button>
            </div>
            <DataGrid
                columns={columns()}
                rows={rows}
                total_count={*total}
                loading={*loading}
                on_load={load}
            />
            {dialog.unwrap_or_default()}
            {confirm.unwrap_or_default()}
        </div>
    }
}
