//! Administrative staff IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::administrativos::{self, AdministrativoForm};
use crate::core_state::CoreState;
use crate::models::Administrativo;

#[tauri::command]
pub fn listar_administrativos(
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<Administrativo>, String> {
    administrativos::fetch_todos(&state.client(), state.endpoints()).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn registrar_administrativo(
    form: AdministrativoForm,
    state: State<'_, Arc<CoreState>>,
) -> Result<(), String> {
    let fecha_ingreso = chrono::Utc::now().to_rfc3339();
    administrativos::registrar(&state.client(), state.endpoints(), &form, fecha_ingreso)
        .map_err(|e| e.to_string())
}
