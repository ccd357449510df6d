use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Form,
    FormSelect, Input,
};

use crate::auth::use_auth;
use crate::routes::{role_home, Route};

/// Resolve a stored redirect path to an in-app route.
///
/// The session lives in a signal, so navigation has to stay inside the
/// router; a full browser navigation would drop the signed-in user and land
/// back on this page. Paths that do not name a page fall back to the role's
/// dashboard.
fn resolve_redirect(path: Option<&str>, role: UserRole) -> Route {
    match path.map(str::parse::<Route>) {
        Some(Ok(route)) if !matches!(route, Route::NotFound { .. }) => route,
        _ => role_home(role),
    }
}

/// Buyer/supplier login page.
///
/// Accepts an optional `redirect` query param: after a successful login the
/// user is sent there instead of their role's dashboard (set by the route
/// guard when a signed-out visitor hits a protected path).
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role_choice = use_signal(|| UserRole::Buyer);
    let mut error_msg = use_signal(|| Option::<String>::None);

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move |role: UserRole| {
        navigator().push(resolve_redirect(redirect_target.read().as_deref(), role));
    };

    // Already signed in: skip the form entirely
    if let Some(user) = auth.current_user.read().as_ref() {
        go_to_destination(user.role);
    }

    let handle_login = move |_: FormEvent| {
        error_msg.set(None);
        match auth.login(&email(), &password(), *role_choice.read()) {
            Ok(user) => go_to_destination(user.role),
            Err(_) => {
                error_msg.set(Some(
                    "Invalid credentials. Please check your email and password.".to_string(),
                ));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                Card {
                    CardHeader {
                        CardTitle { "Sign In" }
                        CardDescription { "Access your buyer or supplier dashboard" }
                    }

                    CardContent {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        Form {
                            onsubmit: handle_login,

                            FormSelect {
                                label: "I am a",
                                value: "{role_choice.read().as_str()}",
                                onchange: move |evt: Event<FormData>| {
                                    if let Some(role) = UserRole::parse_role(&evt.value()) {
                                        role_choice.set(role);
                                    }
                                },
                                option { value: "buyer", "Buyer" }
                                option { value: "supplier", "Supplier" }
                            }

                            Input {
                                label: "Email",
                                id: "login-email",
                                input_type: "email",
                                placeholder: "you@company.com",
                                value: "{email}",
                                on_input: move |evt: FormEvent| email.set(evt.value()),
                            }

                            Input {
                                label: "Password",
                                id: "login-password",
                                input_type: "password",
                                placeholder: "Your password",
                                value: "{password}",
                                on_input: move |evt: FormEvent| password.set(evt.value()),
                            }

                            Button { button_type: "submit", "Sign In" }
                        }
                    }

                    CardFooter {
                        Link {
                            class: "auth-alt-link",
                            to: Route::AdminLogin {},
                            "Administrator? Use the admin portal"
                        }
                    }
                }
            }
        }
    }
}
