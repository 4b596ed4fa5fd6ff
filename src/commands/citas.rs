//! Appointments IPC commands.

use std::collections::BTreeMap;
use std::sync::Arc;

use tauri::State;

use crate::citas::{self, Pagina, CITAS_POR_PAGINA};
use crate::core_state::CoreState;
use crate::models::{Cita, CitaUpsert};

fn cedula_actual(state: &CoreState) -> Result<String, String> {
    state
        .store()
        .load()
        .map(|s| s.cedula)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| "No se encontró la cédula del usuario.".to_string())
}

/// Appointments of the logged-in account.
#[tauri::command]
pub fn listar_citas(state: State<'_, Arc<CoreState>>) -> Result<Vec<Cita>, String> {
    let cedula = cedula_actual(&state)?;
    citas::fetch_por_cedula(&state.client(), state.endpoints(), &cedula)
        .map_err(|e| e.to_string())
}

/// Every appointment in the system (admin dashboard).
#[tauri::command]
pub fn listar_todas_citas(state: State<'_, Arc<CoreState>>) -> Result<Vec<Cita>, String> {
    citas::fetch_todas(&state.client(), state.endpoints()).map_err(|e| e.to_string())
}

/// Admin table with patient and physician names resolved by cédula.
#[tauri::command]
pub fn listar_citas_admin(
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<citas::CitaAdmin>, String> {
    let client = state.client();
    let endpoints = state.endpoints();
    let todas = citas::fetch_todas(&client, endpoints).map_err(|e| e.to_string())?;
    let pacientes = crate::pacientes::fetch_todos(&client, endpoints).unwrap_or_default();
    let medicos = crate::medicos::fetch_todos(&client, endpoints).unwrap_or_default();
    Ok(citas::con_nombres(&todas, &pacientes, &medicos))
}

/// Calendar view: the account's appointments grouped by day.
#[tauri::command]
pub fn citas_agrupadas(
    state: State<'_, Arc<CoreState>>,
) -> Result<BTreeMap<String, Vec<Cita>>, String> {
    let cedula = cedula_actual(&state)?;
    let citas = citas::fetch_por_cedula(&state.client(), state.endpoints(), &cedula)
        .map_err(|e| e.to_string())?;
    Ok(citas::agrupar_por_dia(&citas))
}

/// One page of the appointments table.
#[tauri::command]
pub fn pagina_citas(pagina: usize, state: State<'_, Arc<CoreState>>) -> Result<Pagina, String> {
    let cedula = cedula_actual(&state)?;
    let citas = citas::fetch_por_cedula(&state.client(), state.endpoints(), &cedula)
        .map_err(|e| e.to_string())?;
    Ok(citas::paginar(&citas, pagina, CITAS_POR_PAGINA))
}

#[tauri::command]
pub fn registrar_cita(
    cita: CitaUpsert,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    citas::registrar(&state.client(), state.endpoints(), &cita).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn actualizar_cita(
    cita: CitaUpsert,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    citas::actualizar(&state.client(), state.endpoints(), &cita).map_err(|e| e.to_string())
}

/// Cancel an appointment (full update with status `Cancelada`).
#[tauri::command]
pub fn cancelar_cita(
    cita: Cita,
    state: State<'_, Arc<CoreState>>,
) -> Result<Option<String>, String> {
    let agendado_por = state.store().load().map(|s| s.cedula).unwrap_or_default();
    citas::cancelar(&state.client(), state.endpoints(), &cita, &agendado_por)
        .map_err(|e| e.to_string())
}
