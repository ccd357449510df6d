pub mod admin;
pub mod admin_login;
pub mod buyer;
pub mod login;
pub mod not_found;
pub mod supplier;

use dioxus::prelude::*;
use shared_types::{guard_decision, GuardDecision, UserRole};

use crate::auth::{use_auth, use_user_role};
use crate::components::Header;

use admin::AdminDashboard;
use admin_login::AdminLogin;
use buyer::BuyerDashboard;
use login::Login;
use not_found::NotFound;
use supplier::SupplierDashboard;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/admin-login")]
    AdminLogin {},
    #[route("/")]
    Home {},
    #[route("/admin")]
    AdminHome {},
    #[route("/supplier")]
    SupplierHome {},
    #[route("/buyer")]
    BuyerHome {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// The dashboard route for a role. This is the routing-layer face of
/// [`UserRole::home_path`]; a test pins the two together.
pub fn role_home(role: UserRole) -> Route {
    match role {
        UserRole::Admin => Route::AdminHome {},
        UserRole::Supplier => Route::SupplierHome {},
        UserRole::Buyer => Route::BuyerHome {},
    }
}

/// Role gate wrapped around each dashboard route.
///
/// Signed-out visitors go to the login page with the attempted path in the
/// `redirect` query param. Signed-in users with the wrong role go to their
/// own dashboard instead.
#[component]
fn Protected(allowed: &'static [UserRole], children: Element) -> Element {
    let role = use_user_role();
    let current: Route = use_route();

    match guard_decision(role, allowed) {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::RedirectToLogin => {
            navigator().push(Route::Login {
                redirect: Some(current.to_string()),
            });
            rsx! {
                div { class: "route-guard-placeholder",
                    p { "Redirecting to login..." }
                }
            }
        }
        GuardDecision::RedirectToRoleHome(role) => {
            navigator().push(role_home(role));
            rsx! {
                div { class: "route-guard-placeholder",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// Chrome shared by all authenticated pages.
#[component]
fn AppShell(children: Element) -> Element {
    rsx! {
        Header {}
        main { class: "app-main", {children} }
    }
}

/// Root path: forward to the signed-in role's dashboard, or to login.
#[component]
fn Home() -> Element {
    let auth = use_auth();
    let role = auth.current_user.read().as_ref().map(|u| u.role);

    match role {
        Some(role) => {
            navigator().push(role_home(role));
        }
        None => {
            navigator().push(Route::Login { redirect: None });
        }
    }

    rsx! {
        div { class: "route-guard-placeholder",
            p { "Redirecting..." }
        }
    }
}

#[component]
fn AdminHome() -> Element {
    rsx! {
        Protected { allowed: &[UserRole::Admin],
            AppShell {
                AdminDashboard {}
            }
        }
    }
}

#[component]
fn SupplierHome() -> Element {
    rsx! {
        Protected { allowed: &[UserRole::Supplier],
            AppShell {
                SupplierDashboard {}
            }
        }
    }
}

#[component]
fn BuyerHome() -> Element {
    rsx! {
        Protected { allowed: &[UserRole::Buyer],
            AppShell {
                BuyerDashboard {}
            }
        }
    }
}
