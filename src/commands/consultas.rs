//! Consultations IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::consultas::{self, ConsultaConCita};
use crate::core_state::CoreState;
use crate::models::{Cita, Consulta};

#[tauri::command]
pub fn listar_consultas(state: State<'_, Arc<CoreState>>) -> Result<Vec<Consulta>, String> {
    consultas::fetch_todas(&state.client(), state.endpoints()).map_err(|e| e.to_string())
}

/// Consultations joined to their source appointments.
#[tauri::command]
pub fn consultas_con_cita(
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<ConsultaConCita>, String> {
    let client = state.client();
    let todas = consultas::fetch_todas(&client, state.endpoints()).map_err(|e| e.to_string())?;

    let cedula = state.store().load().map(|s| s.cedula).unwrap_or_default();
    let citas = if cedula.is_empty() {
        Vec::new()
    } else {
        crate::citas::fetch_por_cedula(&client, state.endpoints(), &cedula)
            .unwrap_or_default()
    };
    Ok(consultas::con_cita(&todas, &citas))
}

/// Appointments still eligible for a new consultation.
#[tauri::command]
pub fn citas_para_consulta(state: State<'_, Arc<CoreState>>) -> Result<Vec<Cita>, String> {
    let cedula = state
        .store()
        .load()
        .map(|s| s.cedula)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| "No se encontró la cédula del usuario.".to_string())?;
    let citas = crate::citas::fetch_por_cedula(&state.client(), state.endpoints(), &cedula)
        .map_err(|e| e.to_string())?;
    Ok(consultas::citas_programadas(&citas))
}

/// Register a consultation and mark its appointment completed.
#[tauri::command]
pub fn registrar_consulta(
    id_cita: i64,
    fecha: Option<String>,
    notas: String,
    precio_base: f64,
    state: State<'_, Arc<CoreState>>,
) -> Result<(), String> {
    let client = state.client();
    let ahora = chrono::Utc::now().to_rfc3339();
    consultas::registrar(&client, state.endpoints(), id_cita, fecha, notas, precio_base, ahora)
        .map_err(|e| e.to_string())?;
    consultas::completar_cita(&client, state.endpoints(), id_cita).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn actualizar_consulta(
    consulta: Consulta,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    consultas::actualizar(&state.client(), state.endpoints(), &consulta)
        .map_err(|e| e.to_string())
}

/// Toggle the treatment-acceptance flag of a consultation.
#[tauri::command]
pub fn marcar_acepto_tratamiento(
    consulta: Consulta,
    acepto: bool,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    consultas::marcar_acepto_tratamiento(&state.client(), state.endpoints(), &consulta, acepto)
        .map_err(|e| e.to_string())
}
