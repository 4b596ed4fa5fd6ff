//! Payments IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::models::{Pago, PagoRegistro};
use crate::pagos;

#[tauri::command]
pub fn listar_pagos(state: State<'_, Arc<CoreState>>) -> Result<Vec<Pago>, String> {
    pagos::fetch_todos(&state.client(), state.endpoints()).map_err(|e| e.to_string())
}

/// Payments of one patient.
#[tauri::command]
pub fn pagos_de_paciente(
    cedula: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<Pago>, String> {
    let todos = pagos::fetch_todos(&state.client(), state.endpoints())
        .map_err(|e| e.to_string())?;
    Ok(pagos::de_paciente(&todos, &cedula).into_iter().cloned().collect())
}

#[tauri::command]
pub fn registrar_pago(
    pago: PagoRegistro,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    pagos::registrar(&state.client(), state.endpoints(), &pago).map_err(|e| e.to_string())
}
