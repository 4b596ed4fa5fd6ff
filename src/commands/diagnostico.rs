//! Diagnosis screen IPC commands (treatments per consultation).

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::models::{Consulta, Tratamiento};
use crate::tratamientos;

#[tauri::command]
pub fn listar_tratamientos(
    id_consulta: i64,
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<Tratamiento>, String> {
    tratamientos::fetch_por_consulta(&state.client(), state.endpoints(), id_consulta)
        .map_err(|e| e.to_string())
}

/// Register a treatment; refuses a second treatment on the same
/// consultation before touching the backend.
#[tauri::command]
pub fn registrar_tratamiento(
    consulta: Consulta,
    descripcion: String,
    sesiones: i64,
    state: State<'_, Arc<CoreState>>,
) -> Result<(), String> {
    let client = state.client();
    let existentes =
        tratamientos::fetch_por_consulta(&client, state.endpoints(), consulta.id_consulta)
            .unwrap_or_default();
    tratamientos::registrar(
        &client,
        state.endpoints(),
        &consulta,
        &existentes,
        descripcion,
        sesiones,
    )
    .map_err(|e| e.to_string())
}
