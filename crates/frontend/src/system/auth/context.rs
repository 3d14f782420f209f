use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub username: Option<String>,
}

impl AuthState {
    /// Restore whatever session localStorage still holds. The token is
    /// opaque; validity is only learned when the first scoped request
    /// comes back 401.
    pub fn from_storage() -> Self {
        Self {
            access_token: storage::get_access_token(),
            username: storage::get_username(),
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::from_storage());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Persist a fresh session and flip the app into the authenticated state.
pub fn store_session(
    set_auth_state: WriteSignal<AuthState>,
    access_token: &str,
    refresh_token: &str,
    username: &str,
) {
    storage::save_access_token(access_token);
    storage::save_refresh_token(refresh_token);
    storage::save_username(username);
    set_auth_state.set(AuthState {
        access_token: Some(access_token.to_string()),
        username: Some(username.to_string()),
    });
}

/// Forget the session locally (storage + state).
pub fn drop_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
