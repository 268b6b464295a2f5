use crate::shared::remote::{RemoteState, RequestFence};
use contracts::domain::ventas::{EditTarget, Sale};
use leptos::prelude::*;

/// All remotely sourced state of the sales screen.
///
/// `collection` and `detail` are independent slots with their own fences;
/// the banner carries operation errors that must stay visible alongside
/// whatever data is already on screen.
#[derive(Clone, Debug, Default)]
pub struct VentasState {
    pub collection: RemoteState<Vec<Sale>>,
    pub detail: RemoteState<Sale>,
    pub banner: Option<String>,
    pub list_fence: RequestFence,
    pub detail_fence: RequestFence,
}

impl VentasState {
    /// Rows to render; an empty table until the first load lands.
    pub fn items(&self) -> Vec<Sale> {
        self.collection.data().cloned().unwrap_or_default()
    }

    /// Probe the held collection for an update target. No request leaves
    /// the client when this says the record is not held locally.
    pub fn probe(&self, id: i64) -> EditTarget {
        let held = self.collection.data().map(Vec::as_slice).unwrap_or(&[]);
        EditTarget::probe(held, id)
    }
}

pub fn create_state() -> RwSignal<VentasState> {
    RwSignal::new(VentasState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(id: i64) -> Sale {
        Sale {
            id,
            nombre_producto: "Widget".to_string(),
            cantidad: 3,
            precio: 9.99,
        }
    }

    #[test]
    fn items_empty_before_first_load() {
        let state = VentasState::default();
        assert!(state.items().is_empty());
        assert!(!state.collection.is_loading());
    }

    #[test]
    fn probe_before_any_load_finds_nothing() {
        let state = VentasState::default();
        assert_eq!(state.probe(7), EditTarget::NotFoundLocally);
    }

    #[test]
    fn probe_against_loaded_collection() {
        let mut state = VentasState::default();
        state.collection.resolve(vec![sale(1), sale(7)]);
        assert_eq!(state.probe(7), EditTarget::Found(sale(7)));
        assert_eq!(state.probe(42), EditTarget::NotFoundLocally);
    }

    #[test]
    fn failed_refresh_keeps_rows_and_sets_banner() {
        let mut state = VentasState::default();
        state.collection.resolve(vec![sale(1)]);
        state.collection.begin();
        state.collection.fail("Error al cargar las ventas");
        state.banner = Some("Error al cargar las ventas".to_string());
        assert_eq!(state.items(), vec![sale(1)]);
        assert!(state.banner.is_some());
    }
}
