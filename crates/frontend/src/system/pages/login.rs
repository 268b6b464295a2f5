use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::remote::RemoteState;
use crate::system::auth::{api, context::use_auth, context::AuthState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let submission = RwSignal::new(RemoteState::<()>::Idle);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        submission.update(|s| s.begin());

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(body) => {
                    log::info!("Login exitoso: {}", body);
                    submission.update(|s| s.resolve(()));
                    // Flipping the session signal swaps the shell to the
                    // sales screen; nothing from the response is kept.
                    set_auth_state.set(AuthState { logged_in: true });
                }
                Err(message) => {
                    submission.update(|s| s.fail(message));
                }
            }
        });
    };

    let is_loading = move || submission.with(|s| s.is_loading());
    let error_message = move || submission.with(|s| s.error().map(str::to_string));

    view! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f0f2f5;">
            <div style="background: white; box-shadow: 0 2px 8px rgba(0,0,0,0.15); border-radius: 8px; padding: 32px; max-width: 400px; width: 100%;">
                <h2 style="text-align: center; color: #2d3748; margin-bottom: 24px;">"Iniciar Sesión"</h2>

                <form on:submit=on_submit>
                    <div style="margin-bottom: 16px;">
                        <label for="username" style="display: block; color: #4a5568; margin-bottom: 4px;">"Usuario"</label>
                        <input
                            type="text"
                            id="username"
                            style="width: 100%; padding: 8px 12px; border: 1px solid #cbd5e0; border-radius: 6px;"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div style="margin-bottom: 16px;">
                        <label for="password" style="display: block; color: #4a5568; margin-bottom: 4px;">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            style="width: 100%; padding: 8px 12px; border: 1px solid #cbd5e0; border-radius: 6px;"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    {move || error_message().map(|message| view! {
                        <p style="color: #c62828; font-size: 14px; text-align: center; margin-bottom: 12px;">{message}</p>
                    })}

                    <button
                        type="submit"
                        style="width: 100%; padding: 10px; border: none; border-radius: 6px; color: white; font-weight: 600; cursor: pointer; background: #3182ce;"
                        disabled=is_loading
                    >
                        {move || if is_loading() { "Iniciando..." } else { "Iniciar Sesión" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
