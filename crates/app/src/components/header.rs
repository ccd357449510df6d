use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdPackage, LdShield, LdUser};
use dioxus_free_icons::Icon;
use shared_types::UserRole;

use crate::auth::use_auth;
use crate::routes::{role_home, Route};

/// Top navigation bar shown on every authenticated page.
///
/// Shows the brand, a link to the signed-in role's dashboard, the user's
/// identity with a role icon, and a sign-out button. Collapses behind a
/// menu toggle on narrow viewports.
#[component]
pub fn Header() -> Element {
    let mut auth = use_auth();
    let mut menu_open = use_signal(|| false);

    let user = auth.current_user.read().clone();

    let handle_logout = move |_| {
        auth.logout();
        menu_open.set(false);
        navigator().push(Route::Login { redirect: None });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./header.css") }

        header { class: "app-header",
            div { class: "app-header-brand",
                span { class: "app-header-title", "Reverse Auction Tool" }
                span { class: "app-header-tagline", "Reduce your product cost. Maximize profit" }
            }

            button {
                class: "app-header-menu-toggle",
                r#type: "button",
                aria_label: "Toggle menu",
                onclick: move |_| {
                    let open = *menu_open.read();
                    menu_open.set(!open);
                },
                "\u{2630}"
            }

            if let Some(user) = user {
                nav {
                    class: if *menu_open.read() { "app-header-nav open" } else { "app-header-nav" },
                    Link {
                        class: "app-header-link",
                        to: role_home(user.role),
                        "Dashboard"
                    }
                    div { class: "app-header-identity",
                        span { class: "app-header-role-icon",
                            match user.role {
                                UserRole::Admin => rsx! {
                                    Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                                },
                                UserRole::Supplier => rsx! {
                                    Icon::<LdPackage> { icon: LdPackage, width: 16, height: 16 }
                                },
                                UserRole::Buyer => rsx! {
                                    Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                                },
                            }
                        }
                        div { class: "app-header-who",
                            span { class: "app-header-name", "{user.display_name}" }
                            span { class: "app-header-role", "{user.role.as_str()}" }
                        }
                    }
                    button {
                        class: "app-header-logout",
                        r#type: "button",
                        onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }
        }
    }
}
