//! Physician dashboard: header identity and the four counters.

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::config::Endpoints;
use crate::medicos;
use crate::models::{Cita, Medico};
use crate::session::SessionStore;

/// The appointment counters shown on the dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumenCitas {
    /// Scheduled appointments happening today.
    pub citas_hoy: usize,
    /// Pending from today on, plus scheduled ones later than today.
    pub citas_pendientes: usize,
    /// Everything already completed.
    pub completadas: usize,
}

/// Count the dashboard buckets against a fixed "today".
///
/// Records whose date fails to parse fall out of the date-dependent
/// buckets, mirroring the screen's behavior with invalid dates.
pub fn resumen_citas(citas: &[Cita], hoy: NaiveDate) -> ResumenCitas {
    let mut resumen = ResumenCitas::default();
    for cita in citas {
        let estado = cita.estado_lower();
        let fecha = cita.fecha_dia();

        if estado == "completada" {
            resumen.completadas += 1;
        }
        if estado == "programada" && fecha == Some(hoy) {
            resumen.citas_hoy += 1;
        }
        match (estado.as_str(), fecha) {
            ("pendiente", Some(f)) if f >= hoy => resumen.citas_pendientes += 1,
            ("programada", Some(f)) if f > hoy => resumen.citas_pendientes += 1,
            _ => {}
        }
    }
    resumen
}

/// Today's scheduled appointments ordered by hour.
pub fn proximas_citas(citas: &[Cita], hoy: NaiveDate) -> Vec<Cita> {
    let mut del_dia: Vec<Cita> = citas
        .iter()
        .filter(|c| c.estado_lower() == "programada" && c.fecha_dia() == Some(hoy))
        .cloned()
        .collect();
    del_dia.sort_by(|a, b| a.hora_orden().cmp(b.hora_orden()));
    del_dia
}

/// Display name for the header: cached name first, else resolved from the
/// médicos list by the session's cédula and cached for the next mount.
/// "Usuario" when nothing can be resolved.
pub fn resolver_nombre(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    store: &SessionStore,
) -> Result<String, ApiError> {
    let Some(mut session) = store.load() else {
        return Ok("Usuario".to_string());
    };
    if let Some(nombre) = session.nombre.as_deref().filter(|n| !n.is_empty()) {
        return Ok(nombre.to_string());
    }

    let medicos = medicos::fetch_todos(client, endpoints)?;
    let nombre = medicos::por_cedula(&medicos, &session.cedula)
        .map(Medico::display_name)
        .filter(|n| n != "Sin nombre")
        .unwrap_or_else(|| "Usuario".to_string());

    if nombre != "Usuario" {
        session.nombre = Some(nombre.clone());
        if let Err(e) = store.save(&session) {
            tracing::warn!("No se pudo cachear el nombre del médico: {e}");
        }
    }
    Ok(nombre)
}

/// Avatar initials: first letter of the first two words, "US" fallback.
pub fn iniciales(nombre: &str) -> String {
    let mut letras: String = nombre
        .split_whitespace()
        .take(2)
        .filter_map(|palabra| palabra.chars().next())
        .collect();
    if letras.is_empty() {
        return "US".to_string();
    }
    letras = letras.to_uppercase();
    letras
}
