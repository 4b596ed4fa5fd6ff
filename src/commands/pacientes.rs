//! Patients IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::models::{Cita, Paciente, PacienteUpsert};
use crate::pacientes;

#[tauri::command]
pub fn listar_pacientes(state: State<'_, Arc<CoreState>>) -> Result<Vec<Paciente>, String> {
    pacientes::fetch_todos(&state.client(), state.endpoints()).map_err(|e| e.to_string())
}

/// Patients ordered most-recent first for the dashboard list.
#[tauri::command]
pub fn pacientes_recientes(state: State<'_, Arc<CoreState>>) -> Result<Vec<Paciente>, String> {
    let todos = pacientes::fetch_todos(&state.client(), state.endpoints())
        .map_err(|e| e.to_string())?;
    Ok(pacientes::ordenar_recientes(todos))
}

#[tauri::command]
pub fn registrar_paciente(
    paciente: PacienteUpsert,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    pacientes::registrar(&state.client(), state.endpoints(), &paciente)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn actualizar_paciente(
    paciente: PacienteUpsert,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    pacientes::actualizar(&state.client(), state.endpoints(), &paciente)
        .map_err(|e| e.to_string())
}

/// Appointment history of one patient.
#[tauri::command]
pub fn citas_de_paciente(
    cedula: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<Cita>, String> {
    crate::citas::fetch_por_cedula(&state.client(), state.endpoints(), &cedula)
        .map_err(|e| e.to_string())
}
