pub mod administrativos;
pub mod auth;
pub mod citas;
pub mod consultas;
pub mod dashboard;
pub mod diagnostico;
pub mod notificaciones;
pub mod pacientes;
pub mod pagos;
pub mod stats;
pub mod usuarios;

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::routes::{self, Route, View};
use crate::session::Session;

/// Health check IPC command — verifies backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}

/// Current persisted session, if any.
#[tauri::command]
pub fn get_sesion(state: State<'_, Arc<CoreState>>) -> Option<Session> {
    state.store().load()
}

/// Route guard: which view to render for a path, given the session.
/// Protected routes fall back to the login view in place.
#[tauri::command]
pub fn resolver_vista(path: String, state: State<'_, Arc<CoreState>>) -> Result<View, String> {
    let route = Route::from_path(&path).ok_or_else(|| format!("Ruta desconocida: {path}"))?;
    let session = state.store().load();
    Ok(routes::resolve(route, session.as_ref()))
}
