use leptos::prelude::*;

/// Client-side session marker.
///
/// The login response carries nothing the client keeps (no token is
/// extracted or stored, matching the backend contract as deployed), so
/// "logged in" is the entire session state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuthState {
    pub logged_in: bool,
}

/// Install the auth session signal; called once from `App`.
pub fn provide_auth() {
    let (auth_state, set_auth_state) = signal(AuthState::default());
    provide_context(auth_state);
    provide_context(set_auth_state);
}

/// Hook to access auth state.
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("provide_auth not called in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("provide_auth not called in component tree");

    (auth_state, set_auth_state)
}
