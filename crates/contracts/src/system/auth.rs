use serde::{Deserialize, Serialize};

/// Body of the login call. Field names follow the auth backend contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "NombreUsuario")]
    pub nombre_usuario: String,
    #[serde(rename = "Contrasena")]
    pub contrasena: String,
}

/// Error body the auth backend returns on a rejected login. The backend is
/// not guaranteed to fill `message`; callers fall back to a fixed string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginFailure {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_backend_field_names() {
        let request = LoginRequest {
            nombre_usuario: "admin".to_string(),
            contrasena: "secret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"NombreUsuario":"admin","Contrasena":"secret"}"#);
    }

    #[test]
    fn login_failure_tolerates_missing_message() {
        let failure: LoginFailure = serde_json::from_str("{}").unwrap();
        assert!(failure.message.is_none());

        let failure: LoginFailure =
            serde_json::from_str(r#"{"message":"Usuario bloqueado"}"#).unwrap();
        assert_eq!(failure.message.as_deref(), Some("Usuario bloqueado"));
    }
}
