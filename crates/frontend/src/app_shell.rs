//! Application shell: the auth gate that decides between the login page
//! and the sales screen.

use crate::domain::ventas::ui::list::VentasList;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Shows [`LoginPage`] until a login succeeds, then swaps in the sales
/// screen. There is no routing beyond this single switch.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().logged_in
            fallback=|| view! { <LoginPage /> }
        >
            <VentasList />
        </Show>
    }
}
