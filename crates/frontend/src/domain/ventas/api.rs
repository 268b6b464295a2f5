//! Round-trips against the ventas backend.
//!
//! Each function maps its failure, whatever the cause, to the single
//! user-facing string its screen displays; the technical detail goes to the
//! console log. No retry, no timeout, no cancellation once sent.

use contracts::domain::ventas::{Sale, SaleDraft};
use gloo_net::http::{Request, RequestBuilder};

use crate::shared::api_utils::{ventas_url, VENTAS_API_IS_PUBLIC};

/// Single seam for request authorization. The ventas API is public in the
/// reference deployment and the client never holds a token, so this is a
/// pass-through; a header would land here if that ever changed.
fn authorize(request: RequestBuilder) -> RequestBuilder {
    debug_assert!(VENTAS_API_IS_PUBLIC);
    request
}

/// Fetch the full collection.
pub async fn fetch_all() -> Result<Vec<Sale>, String> {
    let response = authorize(Request::get(&ventas_url("/api/venta")))
        .send()
        .await
        .map_err(|e| {
            log::error!("Error al cargar las ventas: {}", e);
            "Error al cargar las ventas".to_string()
        })?;

    if !response.ok() {
        log::error!("Error al cargar las ventas: HTTP {}", response.status());
        return Err("Error al cargar las ventas".to_string());
    }

    response.json::<Vec<Sale>>().await.map_err(|e| {
        log::error!("Error al cargar las ventas: {}", e);
        "Error al cargar las ventas".to_string()
    })
}

/// Fetch one record. The id travels as the raw text the user typed; any
/// non-success status uniformly reads as "not found".
pub async fn fetch_by_id(id: &str) -> Result<Sale, String> {
    let response = authorize(Request::get(&ventas_url(&format!("/api/venta/{}", id))))
        .send()
        .await
        .map_err(|e| {
            log::error!("Error al buscar la venta {}: {}", id, e);
            "Error al buscar la venta".to_string()
        })?;

    if !response.ok() {
        log::error!("Venta {} no encontrada: HTTP {}", id, response.status());
        return Err("Venta no encontrada".to_string());
    }

    response.json::<Sale>().await.map_err(|e| {
        log::error!("Error al buscar la venta {}: {}", id, e);
        "Error al buscar la venta".to_string()
    })
}

/// Create a record from the form draft. The response body is ignored; the
/// caller refetches the collection so backend-assigned fields are never
/// guessed at.
pub async fn create(draft: &SaleDraft) -> Result<(), String> {
    let response = authorize(Request::post(&ventas_url("/api/venta")))
        .json(draft)
        .map_err(|e| {
            log::error!("Error al crear la venta: {}", e);
            "Error al crear la venta".to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("Error al crear la venta: {}", e);
            "Error al crear la venta".to_string()
        })?;

    if !response.ok() {
        log::error!("Error al crear la venta: HTTP {}", response.status());
        return Err("Error al crear la venta".to_string());
    }
    Ok(())
}

/// Send the full merged record to the id-scoped endpoint. The response body
/// is ignored for the same reason as [`create`].
pub async fn update(sale: &Sale) -> Result<(), String> {
    let response = authorize(Request::put(&ventas_url(&format!(
        "/api/venta/{}",
        sale.id
    ))))
    .json(sale)
    .map_err(|e| {
        log::error!("Error al actualizar la venta {}: {}", sale.id, e);
        "Error al actualizar la venta".to_string()
    })?
    .send()
    .await
    .map_err(|e| {
        log::error!("Error al actualizar la venta {}: {}", sale.id, e);
        "Error al actualizar la venta".to_string()
    })?;

    if !response.ok() {
        log::error!(
            "Error al actualizar la venta {}: HTTP {}",
            sale.id,
            response.status()
        );
        return Err("Error al actualizar la venta".to_string());
    }
    Ok(())
}
