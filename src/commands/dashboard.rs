//! Physician dashboard IPC commands.

use std::sync::Arc;

use serde::Serialize;
use tauri::State;

use crate::core_state::CoreState;
use crate::dashboard::{self, ResumenCitas};
use crate::models::Cita;
use crate::pacientes;

/// Everything the dashboard header renders in one round trip.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub nombre: String,
    pub iniciales: String,
    pub resumen: ResumenCitas,
    pub pacientes: usize,
    pub proximas_citas: Vec<Cita>,
}

#[tauri::command]
pub fn get_dashboard(state: State<'_, Arc<CoreState>>) -> Result<DashboardData, String> {
    let client = state.client();
    let endpoints = state.endpoints();
    let hoy = chrono::Local::now().date_naive();

    let nombre = dashboard::resolver_nombre(&client, endpoints, state.store())
        .map_err(|e| e.to_string())?;

    let cedula = state.store().load().map(|s| s.cedula).unwrap_or_default();
    let citas = if cedula.is_empty() {
        tracing::warn!("No hay cédula en la sesión; el dashboard queda en cero");
        Vec::new()
    } else {
        crate::citas::fetch_por_cedula(&client, endpoints, &cedula).unwrap_or_default()
    };

    let pacientes = pacientes::fetch_todos(&client, endpoints)
        .map(|p| p.len())
        .unwrap_or(0);

    Ok(DashboardData {
        iniciales: dashboard::iniciales(&nombre),
        resumen: dashboard::resumen_citas(&citas, hoy),
        proximas_citas: dashboard::proximas_citas(&citas, hoy),
        pacientes,
        nombre,
    })
}
