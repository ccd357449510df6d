use dioxus::prelude::*;
use shared_types::{accounts, AppError, AuthUser, UserRole};
use tracing::{info, warn};

/// Global authentication state.
///
/// The whole session lives in memory. A page refresh clears it, which is
/// fine for demo accounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    /// Verify credentials against the demo account table and store the
    /// session on success.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<AuthUser, AppError> {
        match accounts::authenticate(email, password, role) {
            Ok(user) => {
                info!(user_id = user.id, role = user.role.as_str(), "login succeeded");
                self.current_user.set(Some(user.clone()));
                Ok(user)
            }
            Err(e) => {
                warn!(role = role.as_str(), "login rejected");
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.read().as_ref() {
            info!(user_id = user.id, "logout");
        }
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Role of the signed-in user, or `None` when signed out.
pub fn use_user_role() -> Option<UserRole> {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding.as_ref().map(|u| u.role)
}
