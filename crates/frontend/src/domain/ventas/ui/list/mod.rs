pub mod state;

use self::state::create_state;
use crate::domain::ventas::api;
use crate::domain::ventas::ui::details::VentasEdit;
use crate::shared::remote::RemoteState;
use contracts::domain::ventas::{EditTarget, Sale, SaleDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn VentasList() -> impl IntoView {
    let state = create_state();
    let (numero_venta, set_numero_venta) = signal(String::new());
    let (buscando, set_buscando) = signal(false);
    let draft = RwSignal::new(SaleDraft::default());
    let (edit_target, set_edit_target) = signal::<Option<Sale>>(None);

    let load_ventas = move || {
        state.update(|s| {
            s.list_fence.issue();
            s.collection.begin();
        });
        let seq = state.with_untracked(|s| s.list_fence.current());
        spawn_local(async move {
            let result = api::fetch_all().await;
            state.update(|s| {
                if !s.list_fence.admits(seq) {
                    return; // a newer refresh owns the slot
                }
                match result {
                    Ok(ventas) => s.collection.resolve(ventas),
                    Err(message) => {
                        // Rows already on screen stay visible.
                        s.collection.fail(message.clone());
                        s.banner = Some(message);
                    }
                }
            });
        });
    };

    // Load the collection once on mount.
    Effect::new(move |_| {
        if state.with_untracked(|s| matches!(s.collection, RemoteState::Idle)) {
            load_ventas();
        }
    });

    let buscar_venta = move || {
        let id_text = numero_venta.get_untracked().trim().to_string();
        if id_text.is_empty() {
            return; // guard clause: an empty id sends nothing
        }
        set_buscando.set(true);
        state.update(|s| {
            s.banner = None;
            s.detail_fence.issue();
            s.detail.begin();
        });
        let seq = state.with_untracked(|s| s.detail_fence.current());
        spawn_local(async move {
            let result = api::fetch_by_id(&id_text).await;
            state.update(|s| {
                if s.detail_fence.admits(seq) {
                    match result {
                        Ok(venta) => s.detail.resolve(venta),
                        Err(message) => {
                            // A previously shown detail stays on screen;
                            // the message lands in the banner.
                            s.detail.fail(message.clone());
                            s.banner = Some(message);
                        }
                    }
                }
            });
            // Cleared on every exit path, stale responses included.
            set_buscando.set(false);
        });
    };

    let crear_venta = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if !current.is_complete() {
            return; // mirrors the required form fields
        }
        state.update(|s| s.banner = None);
        spawn_local(async move {
            match api::create(&current).await {
                // Resync from the backend instead of appending locally so
                // backend-assigned fields are never guessed at. The form
                // keeps its values either way.
                Ok(()) => load_ventas(),
                Err(message) => state.update(|s| s.banner = Some(message)),
            }
        });
    };

    let handle_update = move |id: i64| {
        state.update(|s| s.banner = None);
        match state.with_untracked(|s| s.probe(id)) {
            EditTarget::Found(venta) => set_edit_target.set(Some(venta)),
            EditTarget::NotFoundLocally => state.update(|s| {
                s.banner = Some("La venta no está en la lista local".to_string());
            }),
        }
    };

    view! {
        <div style="padding: 24px; max-width: 960px; margin: 0 auto;">
            <h1 style="font-size: 1.5rem; font-weight: 700; color: #2d3748; margin-bottom: 16px;">
                "Gestión de Ventas"
            </h1>

            // Búsqueda por número
            <div style="margin-bottom: 24px;">
                <label style="display: block; color: #4a5568; margin-bottom: 4px;">
                    "Buscar venta por número:"
                </label>
                <div style="display: flex; gap: 8px; align-items: center;">
                    <input
                        type="text"
                        placeholder="Ingresa el No. de venta"
                        style="padding: 8px 12px; border: 1px solid #cbd5e0; border-radius: 6px;"
                        prop:value=move || numero_venta.get()
                        on:input=move |ev| set_numero_venta.set(event_target_value(&ev))
                    />
                    <button
                        style="background: #3182ce; color: white; padding: 8px 16px; border: none; border-radius: 6px; cursor: pointer;"
                        on:click=move |_| buscar_venta()
                        disabled=move || buscando.get()
                    >
                        {move || if buscando.get() { "Buscando..." } else { "Buscar" }}
                    </button>
                </div>
            </div>

            // Detalle de la venta buscada
            {move || state.with(|s| s.detail.data().cloned()).map(|venta| view! {
                <div style="margin-bottom: 24px; padding: 16px; border: 1px solid #e2e8f0; border-radius: 6px; background: #f7fafc;">
                    <h2 style="font-size: 1.1rem; font-weight: 600; margin-bottom: 8px;">"Detalle de la Venta"</h2>
                    <p><strong>"ID: "</strong>{venta.id}</p>
                    <p><strong>"Producto: "</strong>{venta.nombre_producto.clone()}</p>
                    <p><strong>"Cantidad: "</strong>{venta.cantidad}</p>
                    <p><strong>"Precio: "</strong>{format!("{:.2}", venta.precio)}</p>
                </div>
            })}

            // Alta de una venta nueva
            <form on:submit=crear_venta style="margin-bottom: 24px; display: flex; flex-direction: column; gap: 8px;">
                <h2 style="font-size: 1.1rem; font-weight: 600;">"Crear Nueva Venta"</h2>
                <input
                    type="text"
                    placeholder="Nombre del Producto"
                    style="padding: 8px 12px; border: 1px solid #cbd5e0; border-radius: 6px;"
                    prop:value=move || draft.get().nombre_producto
                    on:input=move |ev| draft.update(|d| d.nombre_producto = event_target_value(&ev))
                    required
                />
                <input
                    type="number"
                    placeholder="Cantidad"
                    style="padding: 8px 12px; border: 1px solid #cbd5e0; border-radius: 6px;"
                    prop:value=move || draft.get().cantidad
                    on:input=move |ev| draft.update(|d| d.cantidad = event_target_value(&ev))
                    required
                />
                <input
                    type="number"
                    step="0.01"
                    placeholder="Precio"
                    style="padding: 8px 12px; border: 1px solid #cbd5e0; border-radius: 6px;"
                    prop:value=move || draft.get().precio
                    on:input=move |ev| draft.update(|d| d.precio = event_target_value(&ev))
                    required
                />
                <button
                    type="submit"
                    style="background: #38a169; color: white; padding: 10px; border: none; border-radius: 6px; cursor: pointer; font-weight: 600;"
                >
                    "Crear Venta"
                </button>
            </form>

            // Edición (probe local -> fetch fresco -> patch)
            <VentasEdit
                target=edit_target.into()
                on_saved=Callback::new(move |_| {
                    set_edit_target.set(None);
                    load_ventas();
                })
                on_close=Callback::new(move |_| set_edit_target.set(None))
            />

            {move || state.with(|s| s.collection.is_loading()).then(|| view! {
                <div style="padding: 16px; color: #718096;">"Cargando ventas..."</div>
            })}

            // Tabla de ventas
            <table style="width: 100%; border-collapse: collapse; text-align: left;">
                <thead>
                    <tr style="border-bottom: 2px solid #e2e8f0;">
                        <th style="padding: 8px;">"ID"</th>
                        <th style="padding: 8px;">"Producto"</th>
                        <th style="padding: 8px;">"Cantidad"</th>
                        <th style="padding: 8px;">"Precio"</th>
                        <th style="padding: 8px;">"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || state.with(|s| s.items()).into_iter().map(|venta| {
                        let id = venta.id;
                        view! {
                            <tr style="border-bottom: 1px solid #e2e8f0;">
                                <td style="padding: 8px;">{id}</td>
                                <td style="padding: 8px;">{venta.nombre_producto.clone()}</td>
                                <td style="padding: 8px;">{venta.cantidad}</td>
                                <td style="padding: 8px;">{format!("{:.2}", venta.precio)}</td>
                                <td style="padding: 8px;">
                                    <button
                                        style="background: #d69e2e; color: white; padding: 6px 12px; border: none; border-radius: 6px; cursor: pointer;"
                                        on:click=move |_| handle_update(id)
                                    >
                                        "Actualizar"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>

            // Línea de error de la última operación
            {move || state.with(|s| s.banner.clone()).map(|message| view! {
                <p style="color: #c62828; margin-top: 16px;">{message}</p>
            })}
        </div>
    }
}
