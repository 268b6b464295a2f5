use contracts::domain::ventas::{Sale, SalePatch};

use crate::domain::ventas::api;

/// Edited field values as captured by the form. Numeric inputs arrive as
/// text and are parsed just before diffing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditForm {
    pub nombre_producto: String,
    pub cantidad: String,
    pub precio: String,
}

impl EditForm {
    pub fn from_sale(sale: &Sale) -> Self {
        Self {
            nombre_producto: sale.nombre_producto.clone(),
            cantidad: sale.cantidad.to_string(),
            precio: sale.precio.to_string(),
        }
    }

    /// Parse the numeric inputs. `None` when either does not parse, which
    /// with `type="number"` inputs only happens for an emptied field.
    pub fn parsed(&self) -> Option<(i64, f64)> {
        let cantidad = self.cantidad.trim().parse().ok()?;
        let precio = self.precio.trim().parse().ok()?;
        Some((cantidad, precio))
    }
}

/// What a save should do once the fresh record is in hand.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveAction {
    /// Nothing changed against the fetched record; no request goes out.
    Unchanged,
    /// Send the fetched record with the changed fields merged in.
    Send(Sale),
}

/// Diff the form against the freshly fetched record and plan the update.
pub fn plan_save(fetched: &Sale, nombre_producto: &str, cantidad: i64, precio: f64) -> SaveAction {
    let patch = SalePatch::diff(fetched, nombre_producto, cantidad, precio);
    if patch.is_empty() {
        return SaveAction::Unchanged;
    }
    let mut merged = fetched.clone();
    patch.apply(&mut merged);
    SaveAction::Send(merged)
}

/// Run the whole edit flow: fetch the record fresh, diff the form against
/// it, and PUT the merged result. `Ok(true)` means the backend changed and
/// the collection should be refetched; `Ok(false)` means there was nothing
/// to send.
pub async fn save(id: i64, form: &EditForm) -> Result<bool, String> {
    let (cantidad, precio) = form
        .parsed()
        .ok_or_else(|| "Cantidad o precio inválidos".to_string())?;

    let fetched = api::fetch_by_id(&id.to_string()).await?;

    match plan_save(&fetched, form.nombre_producto.trim(), cantidad, precio) {
        SaveAction::Unchanged => Ok(false),
        SaveAction::Send(merged) => {
            api::update(&merged).await?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale() -> Sale {
        Sale {
            id: 7,
            nombre_producto: "Widget".to_string(),
            cantidad: 3,
            precio: 9.99,
        }
    }

    #[test]
    fn form_round_trips_from_sale() {
        let form = EditForm::from_sale(&sale());
        assert_eq!(form.nombre_producto, "Widget");
        assert_eq!(form.parsed(), Some((3, 9.99)));
    }

    #[test]
    fn emptied_numeric_field_does_not_parse() {
        let mut form = EditForm::from_sale(&sale());
        form.precio = String::new();
        assert_eq!(form.parsed(), None);
    }

    #[test]
    fn untouched_form_plans_no_request() {
        assert_eq!(plan_save(&sale(), "Widget", 3, 9.99), SaveAction::Unchanged);
    }

    #[test]
    fn edited_fields_merge_over_fetched_record() {
        match plan_save(&sale(), "Widget", 5, 9.99) {
            SaveAction::Send(merged) => {
                assert_eq!(merged.id, 7);
                assert_eq!(merged.nombre_producto, "Widget");
                assert_eq!(merged.cantidad, 5);
                assert_eq!(merged.precio, 9.99);
            }
            SaveAction::Unchanged => panic!("expected a planned request"),
        }
    }
}
