use crate::app::routes::Route;
use crate::components::daisy::{Footer, Navbar, Sidebar, SidebarItem};
use crate::components::toast::ToastHost;
use crate::core::store::AppStore;
use crate::core::theme::ThemePreference;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub children: Children,
    pub active: Route,
    pub theme: ThemePreference,
    pub on_theme_change: Callback<ThemePreference>,
}

const NAV: &[(Route, &str, &str)] = &[
    (Route::Dashboard, "Dashboard", "◧"),
    (Route::Users, "Users", "👤"),
    (Route::Roles, "Roles", "🛡"),
    (Route::Tenants, "Tenants", "🏢"),
    (Route::Appearance, "Appearance", "🎨"),
];

#[function_component(AppShell)]
pub fn app_shell(props: &ShellProps) -> Html {
    let navigator = use_navigator();
    let (app, _) = use_store::<AppStore>();

    let items = NAV
        .iter()
        .map(|&(route, label, icon)| {
            let navigator = navigator.clone();
            SidebarItem {
                label: AttrValue::Static(label),
                icon: AttrValue::Static(icon),
                active: props.active == route,
                onclick: Callback::from(move |_| {
                    if let Some(navigator) = &navigator {
                        navigator.push(&route);
                    }
                }),
            }
        })
        .collect::<Vec<_>>();

    let theme_switch = {
        let on_theme_change = props.on_theme_change.clone();
        let current = props.theme;
        html! {
            <div class="join">
                {ThemePreference::all().iter().map(|&preference| {
                    let on_theme_change = on_theme_change.clone();
                    let onclick = Callback::from(move |_| on_theme_change.emit(preference));
                    let active = (preference == current).then_some("btn-active");
                    html! {
                        <button
                            class={classes!("btn", "btn-xs", "join-item", active)}
                            {onclick}
                        >{preference.label()}</button>
                    }
                }).collect::<Html>()}
            </div>
        }
    };

    html! {
        <div class="flex min-h-screen bg-base-100">
            <Sidebar brand="Tessera" items={items} />
            <div class="flex flex-1 flex-col">
                <Navbar
                    title={app.page_title.clone()}
                    end={html! { {theme_switch} }}
                />
                <main class="flex-1 p-6">
                    {for props.children.iter()}
                </main>
                <Footer>
                    <span>{"Tessera Admin"}</span>
                </Footer>
            </div>
            <ToastHost />
        </div>
    }
}
