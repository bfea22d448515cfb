//! Roles page: grid, edit dialog, and delete confirmation.

use crate::app::ApiCtx;
use crate::components::daisy::{
    Badge, Button, DaisyColor, DaisySize, DaisyVariant, FieldLabel, Input, Modal, TextArea,
};
use crate::components::grid::DataGrid;
use crate::core::grid::LoadRequest;
use crate::core::store::{self, AppStore};
use crate::core::toast::ToastKind;
use crate::features::roles::state::{RoleForm, columns, permission_summary};
use std::cell::RefCell;
use std::rc::Rc;
use tessera_api_models::RoleDto;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(RolesPage)]
pub(crate) fn roles_page() -> Html {
    let Some(api) = use_context::<ApiCtx>() else {
        return Html::default();
    };
    let dispatch = Dispatch::<AppStore>::new();

    let roles = use_state(Vec::<RoleDto>::new);
    let total = use_state(|| 0u64);
    let loading = use_state(|| true);
    let form = use_state(|| None as Option<RoleForm>);
    let form_error = use_state(|| None as Option<String>);
    let pending_delete = use_state(|| None as Option<RoleDto>);
    let last_request: Rc<RefCell<LoadRequest>> = use_mut_ref(LoadRequest::default);

    let load = {
        let api = api.clone();
        let roles = roles.clone();
        let total = total.clone();
        let loading = loading.clone();
        let dispatch = dispatch.clone();
        let last_request = last_request.clone();
        Callback::from(move |request: LoadRequest| {
            *last_request.borrow_mut() = request.clone();
            let api = api.clone();
            let roles = roles.clone();
            let total = total.clone();
            let loading = loading.clone();
            let dispatch = dispatch.clone();
            loading.set(true);
            yew::platform::spawn_local(async move {
                match api.client.list_roles(&request).await {
                    Ok(page) => {
                        total.set(page.total_count);
                        roles.set(page.items);
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
            form.set(Some(RoleForm::default()));
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
                    Some(id) => api.client.update_role(id, &input).await,
                    None => api.client.create_role(&input).await,
                };
                match result {
                    Ok(saved) => {
                        dispatch.reduce_mut(move |app| {
                            store::push_toast(
                                app,
                                ToastKind::Success,
                                format!("Saved role {}", saved.name),
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
            let Some(role) = (*pending_delete).clone() else {
                return;
            };
            let api = api.clone();
            let pending_delete = pending_delete.clone();
            let dispatch = dispatch.clone();
            let reload = reload.clone();
            yew::platform::spawn_local(async move {
                match api.client.delete_role(role.id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(move |app| {
                            store::push_toast(
                                app,
                                ToastKind::Success,
                                format!("Deleted role {}", role.name),
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

    let rows = roles
        .iter()
        .map(|role| {
            let edit = {
                let form = form.clone();
                let form_error = form_error.clone();
                let role = role.clone();
                Callback::from(move |_| {
                    form_error.set(None);
                    form.set(Some(RoleForm::from_dto(&role)));
                })
            };
            let request_delete = {
                let pending_delete = pending_delete.clone();
                let role = role.clone();
                Callback::from(move |_| pending_delete.set(Some(role.clone())))
            };
            // Default roles cannot be removed, only edited.
            let delete_cell = if role.is_default {
                html! {
                    <Badge tone={DaisyColor::Neutral} size={DaisySize::Sm}>{"Default"}</Badge>
                }
            } else {
                html! {
                    <Button
                        size={DaisySize::Xs}
                        variant={DaisyVariant::Ghost}
                        tone={DaisyColor::Error}
                        onclick={request_delete}
                    >{"Delete"}</Button>
                }
            };
            html! {
                <tr key={role.id.to_string()}>
                    <td>{role.name.clone()}</td>
                    <td>{role.description.clone().unwrap_or_default()}</td>
                    <td>
                        <Badge tone={DaisyColor::Info} size={DaisySize::Sm} outline=true>
                            {permission_summary(role)}
                        </Badge>
                    </td>
                    <td class="text-right">
                        <div class="join">
                            <Button size={DaisySize::Xs} variant={DaisyVariant::Ghost} onclick={edit}>
                                {"Edit"}
                            </Button>
                            {delete_cell}
                        </div>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    let dialog = (*form).clone().map(|current| {
        let set = |apply: fn(&mut RoleForm, String)| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone().unwrap_or_default();
                apply(&mut next, value);
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
                    <FieldLabel text="Description" alt="Optional">
                        <TextArea
                            value={current.description.clone()}
                            rows=3
                            bordered=true
                            oninput={set(|form, value| form.description = value)}
                        />
                    </FieldLabel>
                    <FieldLabel text="Permissions" alt="Comma separated">
                        <Input
                            value={current.permissions.clone()}
                            bordered=true
                            oninput={set(|form, value| form.permissions = value)}
                        />
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

    let confirm = (*pending_delete).clone().map(|role| {
        let cancel = {
            let pending_delete = pending_delete.clone();
            Callback::from(move |()| pending_delete.set(None))
        };
        html! {
            <Modal open=true title="Delete role" on_close={cancel.clone()}>
                <p>{format!("Delete {}? Users holding it lose its permissions.", role.name)}</p>
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
                    {"Add role"}
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
