use contracts::domain::ventas::Sale;
use leptos::prelude::*;

use super::view_model::VentasEditViewModel;

/// Inline edit card for the sale picked in the list. Mounted permanently;
/// renders only while a target is set.
#[component]
pub fn VentasEdit(
    target: Signal<Option<Sale>>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = VentasEditViewModel::new();

    // Refill the form whenever a new target is picked.
    Effect::new(move |_| {
        if let Some(venta) = target.get() {
            vm.load_from(&venta);
        }
    });

    let guardar = move |_| {
        if let Some(venta) = target.get_untracked() {
            vm.save_command(venta.id, on_saved, on_close);
        }
    };

    view! {
        <Show when=move || target.get().is_some()>
            <div style="margin-bottom: 24px; padding: 16px; border: 1px solid #d69e2e; border-radius: 6px; background: #fffaf0;">
                <h2 style="font-size: 1.1rem; font-weight: 600; margin-bottom: 8px;">
                    {move || {
                        let id = target.get().map(|v| v.id).unwrap_or_default();
                        format!("Actualizar Venta #{}", id)
                    }}
                </h2>

                <div style="display: flex; flex-direction: column; gap: 8px;">
                    <input
                        type="text"
                        placeholder="Nombre del Producto"
                        style="padding: 8px 12px; border: 1px solid #cbd5e0; border-radius: 6px;"
                        prop:value=move || vm.form.get().nombre_producto
                        on:input=move |ev| vm.form.update(|f| f.nombre_producto = event_target_value(&ev))
                        required
                    />
                    <input
                        type="number"
                        placeholder="Cantidad"
                        style="padding: 8px 12px; border: 1px solid #cbd5e0; border-radius: 6px;"
                        prop:value=move || vm.form.get().cantidad
                        on:input=move |ev| vm.form.update(|f| f.cantidad = event_target_value(&ev))
                        required
                    />
                    <input
                        type="number"
                        step="0.01"
                        placeholder="Precio"
                        style="padding: 8px 12px; border: 1px solid #cbd5e0; border-radius: 6px;"
                        prop:value=move || vm.form.get().precio
                        on:input=move |ev| vm.form.update(|f| f.precio = event_target_value(&ev))
                        required
                    />
                </div>

                {move || vm.error.get().map(|message| view! {
                    <p style="color: #c62828; margin-top: 8px;">{message}</p>
                })}

                <div style="display: flex; gap: 8px; margin-top: 12px;">
                    <button
                        style="background: #d69e2e; color: white; padding: 8px 16px; border: none; border-radius: 6px; cursor: pointer;"
                        on:click=guardar
                        disabled=move || vm.is_saving.get() || !vm.is_form_valid()
                    >
                        {move || if vm.is_saving.get() { "Guardando..." } else { "Guardar" }}
                    </button>
                    <button
                        style="background: #718096; color: white; padding: 8px 16px; border: none; border-radius: 6px; cursor: pointer;"
                        on:click=move |_| on_close.run(())
                        disabled=move || vm.is_saving.get()
                    >
                        "Cancelar"
                    </button>
                </div>
            </div>
        </Show>
    }
}
