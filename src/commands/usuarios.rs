//! Account-administration IPC commands (admin dashboard).

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::medicos;
use crate::models::{Medico, MedicoUpsert, Usuario, UsuarioActualizacion, UsuarioUpsert};
use crate::usuarios;

#[tauri::command]
pub fn listar_usuarios(state: State<'_, Arc<CoreState>>) -> Result<Vec<Usuario>, String> {
    usuarios::fetch_todos(&state.client(), state.endpoints()).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn registrar_usuario(
    usuario: UsuarioUpsert,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    usuarios::registrar(&state.client(), state.endpoints(), &usuario).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn actualizar_usuario(
    usuario: UsuarioActualizacion,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    usuarios::actualizar(&state.client(), state.endpoints(), &usuario).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn listar_medicos(state: State<'_, Arc<CoreState>>) -> Result<Vec<Medico>, String> {
    medicos::fetch_todos(&state.client(), state.endpoints()).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn registrar_medico_admin(
    medico: MedicoUpsert,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    medicos::registrar(&state.client(), state.endpoints(), &medico).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn actualizar_medico(
    medico: MedicoUpsert,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    medicos::actualizar(&state.client(), state.endpoints(), &medico).map_err(|e| e.to_string())
}
