//! Users page: grid, edit dialog, and delete confirmation.

use crate::app::ApiCtx;
use crate::components::daisy::{
    Badge, Button, DaisyColor, DaisySize, DaisyVariant, FieldLabel, Input, Modal, Toggle,
};
use crate::components::grid::DataGrid;
use crate::core::grid::LoadRequest;
use crate::core::store::{self, AppStore};
use crate::core::toast::ToastKind;
use crate::features::users::state::{UserForm, columns};
use std::cell::RefCell;
use std::rc::Rc;
use tessera_api_models::UserDto;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(UsersPage)]
pub(crate) fn users_page() -> Html {
    let Some(api) = use_context::<ApiCtx>() else {
        return Html::default();
    };
    let dispatch = Dispatch::<AppStore>::new();

    let users = use_state(Vec::<UserDto>::new);
    let total = use_state(|| 0u64);
    let loading = use_state(|| true);
    let form = use_state(|| None as Option<UserForm>);
    let form_error = use_state(|| None as Option<String>);
    let pending_delete = use_state(|| None as Option<UserDto>);
    let last_request: Rc<RefCell<LoadRequest>> = use_mut_ref(LoadRequest::default);

    let load = {
        let api = api.clone();
        let users = users.clone();
        let total = total.clone();
        let loading = loading.clone();
        let dispatch = dispatch.clone();
        let last_request = last_request.clone();
        Callback::from(move |request: LoadRequest| {
            *last_request.borrow_mut() = request.clone();
            let api = api.clone();
            let users = users.clone();
            let total = total.clone();
            let loading = loading.clone();
            let dispatch = dispatch.clone();
            loading.set(true);
            yew::platform::spawn_local(async move {
                match api.client.list_users(&request).await {
                    Ok(page) => {
                        total.set(page.total_count);
                        users.set(page.items);
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
            form.set(Some(UserForm::new()));
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
                    Some(id) => api.client.update_user(id, &input).await,
                    None => api.client.create_user(&input).await,
                };
                match result {
                    Ok(saved) => {
                        dispatch.reduce_mut(move |app| {
                            store::push_toast(
                                app,
                                ToastKind::Success,
                                format!("Saved user {}", saved.email),
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
            let Some(user) = (*pending_delete).clone() else {
                return;
            };
            let api = api.clone();
            let pending_delete = pending_delete.clone();
            let dispatch = dispatch.clone();
            let reload = reload.clone();
            yew::platform::spawn_local(async move {
                match api.client.delete_user(user.id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(move |app| {
                            store::push_toast(
                                app,
                                ToastKind::Success,
                                format!("Deleted user {}", user.email),
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

    let rows = users
        .iter()
        .map(|user| {
            let edit = {
                let form = form.clone();
                let form_error = form_error.clone();
                let user = user.clone();
                Callback::from(move |_| {
                    form_error.set(None);
                    form.set(Some(UserForm::from_dto(&user)));
                })
            };
            let request_delete = {
                let pending_delete = pending_delete.clone();
                let user = user.clone();
                Callback::from(move |_| pending_delete.set(Some(user.clone())))
            };
            let active = if user.is_active {
                html! { <Badge tone={DaisyColor::Success} size={DaisySize::Sm}>{"Active"}</Badge> }
            } else {
                html! { <Badge tone={DaisyColor::Neutral} size={DaisySize::Sm}>{"Inactive"}</Badge> }
            };
            html! {
                <tr key={user.id.to_string()}>
                    <td>{user.first_name.clone()}</td>
                    <td>{user.last_name.clone()}</td>
                    <td>{user.email.clone()}</td>
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
        let set = |apply: fn(&mut UserForm, String)| {
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
                    <FieldLabel text="First name">
                        <Input
                            value={current.first_name.clone()}
                            bordered=true
                            oninput={set(|form, value| form.first_name = value)}
                        />
                    </FieldLabel>
                    <FieldLabel text="Last name">
                        <Input
                            value={current.last_name.clone()}
                            bordered=true
                            oninput={set(|form, value| form.last_name = value)}
                        />
                    </FieldLabel>
                    <FieldLabel text="Email">
                        <Input
                            value={current.email.clone()}
                            r#type="email"
                            bordered=true
                            oninput={set(|form, value| form.email = value)}
                        />
                    </FieldLabel>
                    <FieldLabel text="Phone number" alt="Optional">
                        <Input
                            value={current.phone_number.clone()}
                            bordered=true
                            oninput={set(|form, value| form.phone_number = value)}
                        />
                    </FieldLabel>
                    <FieldLabel text="Roles" alt="Comma separated">
                        <Input
                            value={current.roles.clone()}
                            bordered=true
                            oninput={set(|form, value| form.roles = value)}
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

    let confirm = (*pending_delete).clone().map(|user| {
        let cancel = {
            let pending_delete = pending_delete.clone();
            Callback::from(move |()| pending_delete.set(None))
        };
        html! {
            <Modal open=true title="Delete user" on_close={cancel.clone()}>
                <p>{format!("Delete {}? This cannot be undone.", user.email)}</p>
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
                    {"Add user"}
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
