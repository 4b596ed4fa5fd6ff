//! Notifications IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::models::Notificacion;
use crate::notificaciones;

#[tauri::command]
pub fn listar_notificaciones(
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<Notificacion>, String> {
    notificaciones::fetch_todas(&state.client(), state.endpoints()).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn registrar_notificacion(
    titulo: String,
    mensaje: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<(), String> {
    notificaciones::registrar(&state.client(), state.endpoints(), titulo, mensaje)
        .map_err(|e| e.to_string())
}

/// Title/body search over an in-memory list.
#[tauri::command]
pub fn buscar_notificaciones(
    notificaciones: Vec<Notificacion>,
    consulta: String,
) -> Vec<Notificacion> {
    crate::notificaciones::buscar(&notificaciones, &consulta)
}
