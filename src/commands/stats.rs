//! Statistics IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::consultas;
use crate::core_state::CoreState;
use crate::stats::{self, Estadisticas};

/// Chart data for the statistics page, optionally narrowed to a patient.
#[tauri::command]
pub fn get_estadisticas(
    paciente: Option<String>,
    state: State<'_, Arc<CoreState>>,
) -> Result<Estadisticas, String> {
    let todas = consultas::fetch_todas(&state.client(), state.endpoints())
        .map_err(|e| e.to_string())?;
    Ok(stats::estadisticas(&todas, paciente.as_deref()))
}
