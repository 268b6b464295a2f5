use contracts::system::auth::{LoginFailure, LoginRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::auth_url;

/// Fixed message shown when the backend rejects a login without saying why.
const FALLBACK_MESSAGE: &str = "Usuario o contraseña incorrectos";

/// Login with username and password.
///
/// A success body is backend-defined and only ever logged, so it comes back
/// as raw JSON. Every failure collapses to one displayable string: the
/// backend's `message` when present, the fixed fallback otherwise, or the
/// transport error verbatim when the request never completed.
pub async fn login(username: String, password: String) -> Result<serde_json::Value, String> {
    let request = LoginRequest {
        nombre_usuario: username,
        contrasena: password,
    };

    let response = Request::post(&auth_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| {
            log::error!("Error en autenticación: {}", e);
            e.to_string()
        })?;

    if !response.ok() {
        let body = response.json::<LoginFailure>().await.ok();
        let message = failure_message(body);
        log::error!("Error en autenticación: HTTP {}", response.status());
        return Err(message);
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Pick the message for a rejected login: the backend-provided one when the
/// error body carries it, the fixed fallback when it is absent or the body
/// did not parse at all.
fn failure_message(body: Option<LoginFailure>) -> String {
    body.and_then(|failure| failure.message)
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_preferred() {
        let body = Some(LoginFailure {
            message: Some("Cuenta bloqueada".to_string()),
        });
        assert_eq!(failure_message(body), "Cuenta bloqueada");
    }

    #[test]
    fn missing_message_falls_back() {
        assert_eq!(
            failure_message(Some(LoginFailure { message: None })),
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn unparsable_body_falls_back() {
        assert_eq!(failure_message(None), FALLBACK_MESSAGE);
    }
}
