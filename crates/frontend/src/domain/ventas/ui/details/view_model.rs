use contracts::domain::ventas::Sale;
use leptos::prelude::*;

use super::model::{self, EditForm};

/// ViewModel for the sale edit form.
///
/// Simplified MVVM: form data lives in one `RwSignal`, the save command
/// owns the async flow (fetch fresh, diff, send merged record).
#[derive(Clone, Copy)]
pub struct VentasEditViewModel {
    pub form: RwSignal<EditForm>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl VentasEditViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EditForm::default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    /// Prefill the form from the locally held record being edited.
    pub fn load_from(&self, sale: &Sale) {
        self.form.set(EditForm::from_sale(sale));
        self.error.set(None);
        self.is_saving.set(false);
    }

    pub fn is_form_valid(&self) -> bool {
        let form = self.form.get();
        !form.nombre_producto.trim().is_empty() && form.parsed().is_some()
    }

    /// Fetch the record fresh, diff the form against it and send the merged
    /// result. `on_saved` runs when the backend changed (the caller
    /// refetches the list), `on_close` when there was nothing to send.
    pub fn save_command(&self, id: i64, on_saved: Callback<()>, on_close: Callback<()>) {
        let current = self.form.get();
        let error = self.error;
        let is_saving = self.is_saving;

        is_saving.set(true);
        error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match model::save(id, &current).await {
                Ok(true) => {
                    is_saving.set(false);
                    on_saved.run(());
                }
                Ok(false) => {
                    is_saving.set(false);
                    on_close.run(());
                }
                Err(message) => {
                    error.set(Some(message));
                    is_saving.set(false);
                }
            }
        });
    }
}

impl Default for VentasEditViewModel {
    fn default() -> Self {
        Self::new()
    }
}
