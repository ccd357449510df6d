use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form, Input,
};

use crate::auth::use_auth;
use crate::routes::{role_home, Route};

/// Separate login page for platform administrators.
///
/// Only accepts accounts with the admin role; valid buyer or supplier
/// credentials are rejected here.
#[component]
pub fn AdminLogin() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    if let Some(user) = auth.current_user.read().as_ref() {
        navigator().push(role_home(user.role));
    }

    let handle_login = move |_: FormEvent| {
        error_msg.set(None);
        match auth.login(&email(), &password(), UserRole::Admin) {
            Ok(user) => {
                navigator().push(role_home(user.role));
            }
            Err(_) => {
                error_msg.set(Some(
                    "Invalid admin credentials. Please check your email and password."
                        .to_string(),
                ));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin_login.css") }

        div { class: "auth-page admin-auth-page",
            div { class: "auth-card",
                Card {
                    CardHeader {
                        CardTitle { "Admin Portal" }
                        CardDescription { "Reverse Auction Management" }
                    }

                    CardContent {
                        div { class: "admin-access-banner",
                            Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
                            span { "Admin Access Only" }
                        }

                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        Form {
                            onsubmit: handle_login,

                            Input {
                                label: "Email",
                                id: "admin-email",
                                input_type: "email",
                                placeholder: "admin@company.com",
                                value: "{email}",
                                on_input: move |evt: FormEvent| email.set(evt.value()),
                            }

                            Input {
                                label: "Password",
                                id: "admin-password",
                                input_type: "password",
                                placeholder: "Admin password",
                                value: "{password}",
                                on_input: move |evt: FormEvent| password.set(evt.value()),
                            }

                            Button { button_type: "submit", "Sign In as Admin" }
                        }
                    }

                    CardFooter {
                        Link {
                            class: "auth-alt-link",
                            to: Route::Login { redirect: None },
                            "Go to standard login page"
                        }
                    }
                }
            }
        }
    }
}
