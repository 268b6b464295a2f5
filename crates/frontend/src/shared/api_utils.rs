//! API utilities for frontend-backend communication
//!
//! The reference deployment runs two independent backends: authentication
//! on port 7290 and the ventas resource on port 7208. Both bases are
//! derived from the current window location.

const AUTH_PORT: u16 = 7290;
const VENTAS_PORT: u16 = 7208;

/// Interface-layer decision, not an accident: the ventas backend serves
/// `/api/venta` without authentication, and the client never holds a token
/// to attach. Request construction funnels through `domain::ventas::api`,
/// so an Authorization header has a single place to land if this flips.
pub const VENTAS_API_IS_PUBLIC: bool = true;

fn base_for(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "https:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full auth-backend URL from a path starting with "/api/".
pub fn auth_url(path: &str) -> String {
    format!("{}{}", base_for(AUTH_PORT), path)
}

/// Build a full ventas-backend URL from a path starting with "/api/".
pub fn ventas_url(path: &str) -> String {
    format!("{}{}", base_for(VENTAS_PORT), path)
}
