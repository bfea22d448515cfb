//! Routing definitions for the admin shell.
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Dashboard,
    #[at("/users")]
    Users,
    #[at("/roles")]
    Roles,
    #[at("/tenants")]
    Tenants,
    #[at("/appearance")]
    Appearance,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Title shown in the topbar for each page.
    pub(crate) const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Users => "Users",
            Self::Roles => "Roles",
            Self::Tenants => "Tenants",
            Self::Appearance => "Appearance",
            Self::NotFound => "Not Found",
        }
    }
}
