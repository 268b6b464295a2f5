use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// A sales record as held by the backend. The id is backend-assigned; the
/// client only ever holds a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,

    #[serde(rename = "nombreProducto")]
    pub nombre_producto: String,

    pub cantidad: i64,
    pub precio: f64,
}

// ============================================================================
// DTOs
// ============================================================================

/// Create body. The numeric fields travel as the raw form-input strings;
/// the backend coerces them on its side and this client keeps that wire
/// shape unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleDraft {
    #[serde(rename = "nombreProducto")]
    pub nombre_producto: String,

    pub cantidad: String,
    pub precio: String,
}

impl SaleDraft {
    /// A draft is submittable once every mandatory field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.nombre_producto.trim().is_empty()
            && !self.cantidad.trim().is_empty()
            && !self.precio.trim().is_empty()
    }
}

/// Field-level difference between an edit form and a freshly fetched [`Sale`].
/// Only fields the user actually changed are carried; applying the patch onto
/// the fetched record yields the full body for the update call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalePatch {
    pub nombre_producto: Option<String>,
    pub cantidad: Option<i64>,
    pub precio: Option<f64>,
}

impl SalePatch {
    /// Diff the edited field values against the record they were loaded from.
    pub fn diff(base: &Sale, nombre_producto: &str, cantidad: i64, precio: f64) -> Self {
        Self {
            nombre_producto: (base.nombre_producto != nombre_producto)
                .then(|| nombre_producto.to_string()),
            cantidad: (base.cantidad != cantidad).then_some(cantidad),
            precio: (base.precio != precio).then_some(precio),
        }
    }

    /// True when the user changed nothing; callers skip the update call.
    pub fn is_empty(&self) -> bool {
        self.nombre_producto.is_none() && self.cantidad.is_none() && self.precio.is_none()
    }

    /// Merge the changed fields onto a record, leaving the rest untouched.
    pub fn apply(&self, base: &mut Sale) {
        if let Some(nombre) = &self.nombre_producto {
            base.nombre_producto = nombre.clone();
        }
        if let Some(cantidad) = self.cantidad {
            base.cantidad = cantidad;
        }
        if let Some(precio) = self.precio {
            base.precio = precio;
        }
    }
}

// ============================================================================
// Local collection probe
// ============================================================================

/// Outcome of probing the locally held collection before opening an update:
/// either the record is at hand, or nothing may be sent at all.
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
    NotFoundLocally,
    Found(Sale),
}

impl EditTarget {
    pub fn probe(collection: &[Sale], id: i64) -> Self {
        match collection.iter().find(|sale| sale.id == id) {
            Some(sale) => Self::Found(sale.clone()),
            None => Self::NotFoundLocally,
        }
    }
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
    fn sale_deserializes_backend_shape() {
        let json = r#"{"id":7,"nombreProducto":"Widget","cantidad":3,"precio":9.99}"#;
        let parsed: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, sale(7));
    }

    #[test]
    fn draft_serializes_numerics_as_raw_strings() {
        let draft = SaleDraft {
            nombre_producto: "Widget".to_string(),
            cantidad: "3".to_string(),
            precio: "9.99".to_string(),
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(
            json,
            r#"{"nombreProducto":"Widget","cantidad":"3","precio":"9.99"}"#
        );
    }

    #[test]
    fn draft_completeness_requires_every_field() {
        let mut draft = SaleDraft {
            nombre_producto: "Widget".to_string(),
            cantidad: "3".to_string(),
            precio: "9.99".to_string(),
        };
        assert!(draft.is_complete());
        draft.precio = "  ".to_string();
        assert!(!draft.is_complete());
    }

    #[test]
    fn patch_diff_carries_only_changed_fields() {
        let base = sale(7);
        let patch = SalePatch::diff(&base, "Widget", 5, 9.99);
        assert_eq!(
            patch,
            SalePatch {
                nombre_producto: None,
                cantidad: Some(5),
                precio: None,
            }
        );
        assert!(!patch.is_empty());
        assert!(SalePatch::diff(&base, "Widget", 3, 9.99).is_empty());
    }

    #[test]
    fn patch_apply_merges_onto_fetched_record() {
        let mut base = sale(7);
        let patch = SalePatch::diff(&base, "Gadget", 3, 12.5);
        patch.apply(&mut base);
        assert_eq!(base.nombre_producto, "Gadget");
        assert_eq!(base.cantidad, 3);
        assert_eq!(base.precio, 12.5);
        assert_eq!(base.id, 7);
    }

    #[test]
    fn probe_distinguishes_missing_from_found() {
        let collection = vec![sale(1), sale(7)];
        assert_eq!(EditTarget::probe(&collection, 7), EditTarget::Found(sale(7)));
        assert_eq!(EditTarget::probe(&collection, 42), EditTarget::NotFoundLocally);
    }
}
