//! Root component: theme handling, routing, and the admin shell.

use crate::components::daisy::{Card, Stat, StatGroup};
use crate::components::shell::AppShell;
use crate::core::store::{self, AppStore};
use crate::core::theme::{self, ThemePreference};
use crate::features::roles::view::RolesPage;
use crate::features::tenants::view::TenantsPage;
use crate::features::users::view::UsersPage;
use crate::services::api::ApiClient;
use gloo::events::EventListener;
use preferences::{
    api_base_url, apply_theme, load_theme_preference, prefers_dark_query, store_theme_preference,
    system_prefers_dark,
};
pub(crate) use routes::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

mod preferences;
pub(crate) mod routes;

/// One [`ApiClient`] handed to every feature page through context, so the
/// whole app talks to the same backend base URL.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

// Context equality only needs to detect a replaced client, not compare state.
impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

#[function_component(TesseraApp)]
pub fn tessera_app() -> Html {
    let preference = use_state(load_theme_preference);
    let system_dark = use_state(system_prefers_dark);
    let api_ctx = use_memo(|()| ApiCtx::new(api_base_url()), ());

    {
        use_effect_with_deps(
            move |&(preference, system_dark): &(ThemePreference, bool)| {
                apply_theme(preference.resolve(system_dark));
                || ()
            },
            (*preference, *system_dark),
        );
    }

    // Follow system scheme changes; resolve() ignores them unless Auto.
    {
        let system_dark = system_dark.clone();
        use_effect_with_deps(
            move |()| {
                let listener = prefers_dark_query().map(|media| {
                    let tracked = media.clone();
                    EventListener::new(&media, "change", move |_| {
                        system_dark.set(tracked.matches());
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let on_theme_change = {
        let preference = preference.clone();
        Callback::from(move |next: ThemePreference| {
            store_theme_preference(next);
            preference.set(next);
        })
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <RoutedShell theme={*preference} on_theme_change={on_theme_change} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct RoutedShellProps {
    theme: ThemePreference,
    on_theme_change: Callback<ThemePreference>,
}

#[function_component(RoutedShell)]
fn routed_shell(props: &RoutedShellProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    {
        let dispatch = Dispatch::<AppStore>::new();
        use_effect_with_deps(
            move |&route: &Route| {
                dispatch.reduce_mut(move |app| store::set_page_title(app, route.title()));
                || ()
            },
            route,
        );
    }

    html! {
        <AppShell
            active={route}
            theme={props.theme}
            on_theme_change={props.on_theme_change.clone()}
        >
            <Switch<Route> render={render_route} />
        </AppShell>
    }
}

fn render_route(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::Roles => html! { <RolesPage /> },
        Route::Tenants => html! { <TenantsPage /> },
        Route::Appearance => html! { <AppearancePage /> },
        Route::NotFound => html! {
            <Card title="Not Found">
                <p>{"The page you were looking for does not exist."}</p>
            </Card>
        },
    }
}

#[function_component(DashboardPage)]
fn dashboard_page() -> Html {
    html! {
        <div class="flex flex-col gap-4">
            <Card title="Welcome">
                <p>{"Manage users, roles, and tenants from the sidebar."}</p>
            </Card>
            <StatGroup>
                <Stat title="Users" value="—" description="Active accounts" />
                <Stat title="Roles" value="—" description="Permission sets" />
                <Stat title="Tenants" value="—" description="Isolated workspaces" />
            </StatGroup>
        </div>
    }
}

#[function_component(AppearancePage)]
fn appearance_page() -> Html {
    html! {
        <div class="flex flex-col gap-4">
            <Card title="Color Palettes">
                {for [theme::PRIMARY, theme::ACCENT].iter().map(|palette| html! {
                    <div class="mb-4">
                        <h3 class="font-semibold capitalize mb-2">{palette.id}</h3>
                        <div class="flex gap-2">
                            {for palette.shades.iter().map(|token| html! {
                                <div class="flex flex-col items-center text-xs">
                                    <div
                                        class="w-12 h-12 rounded"
                                        style={format!("background-color: {}", token.hex)}
                                    />
                                    <span>{token.name}</span>
                                    <span class="opacity-60">{token.hex}</span>
                                </div>
                            })}
                        </div>
                    </div>
                })}
            </Card>
            <Card title="Spacing Scale">
                <div class="flex items-end gap-2">
                    {for theme::SPACING.iter().map(|step| html! {
                        <div class="flex flex-col items-center text-xs gap-1">
                            <div
                                class="bg-primary rounded"
                                style={format!("width: {step}px; height: {step}px")}
                            />
                            <span>{format!("{step}px")}</span>
                        </div>
                    })}
                </div>
            </Card>
            <Card title="Corner Radii">
                <div class="flex items-end gap-4">
                    {for theme::RADII.iter().map(|radius| html! {
                        <div class="flex flex-col items-center text-xs gap-1">
                            <div
                                class="w-16 h-16 bg-accent"
                                style={format!("border-radius: {radius}px")}
                            />
                            <span>{format!("{radius}px")}</span>
                        </div>
                    })}
                </div>
            </Card>
        </div>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<TesseraApp>::new().render();
}
