use crate::app_shell::AppShell;
use crate::system::auth::context::provide_auth;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the auth session signal to the whole app via context.
    provide_auth();

    view! {
        <AppShell />
    }
}
