//! Consultations view operations.
//!
//! A consultation is created from a scheduled appointment; registering one
//! then flips the source appointment to `completada` through the dedicated
//! status endpoint. The list screen joins each consultation back to its
//! appointment by `idCita`, falling back to an empty record when the join
//! misses.

use serde::Serialize;

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::Endpoints;
use crate::models::{Cita, Consulta, ConsultaRegistro};

pub fn fetch_todas(client: &dyn ApiClient, endpoints: &Endpoints) -> Result<Vec<Consulta>, ApiError> {
    let response = client.get(&endpoints.listar_consultas())?;
    Envelope::from_value(response)?
        .valor_list("No se encontraron consultas o la respuesta no es válida.")
}

/// Appointments eligible for a new consultation: scheduled ones only
/// (the backend spells the status both ways).
pub fn citas_programadas(citas: &[Cita]) -> Vec<Cita> {
    citas
        .iter()
        .filter(|c| {
            let estado = c.estado_lower();
            estado == "programada" || estado == "programado"
        })
        .cloned()
        .collect()
}

/// Register a consultation. `fecha` defaults to `ahora` when the form
/// leaves it empty; `idCita` and a base price are mandatory.
pub fn registrar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    id_cita: i64,
    fecha: Option<String>,
    notas: String,
    precio_base: f64,
    ahora: String,
) -> Result<(), ApiError> {
    if id_cita <= 0 || precio_base <= 0.0 {
        return Err(ApiError::Rejected(
            "ID Cita y Precio Base son obligatorios".to_string(),
        ));
    }
    let dto = ConsultaRegistro::nueva(
        id_cita,
        fecha.filter(|f| !f.is_empty()).unwrap_or(ahora),
        notas,
        precio_base,
    );
    let body = serde_json::to_value(&dto).expect("consulta body serializes");
    let response = client.post(&endpoints.registrar_consulta(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al registrar consulta")?;
    Ok(())
}

/// Overwrite the status of one appointment (`{"estado": ...}` body).
pub fn actualizar_estado_cita(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    id_cita: i64,
    estado: &str,
) -> Result<(), ApiError> {
    let body = serde_json::json!({ "estado": estado });
    let response = client.put(&endpoints.actualizar_estado_cita(id_cita), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al actualizar estado")?;
    Ok(())
}

/// Mark the appointment behind a just-registered consultation as done.
pub fn completar_cita(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    id_cita: i64,
) -> Result<(), ApiError> {
    actualizar_estado_cita(client, endpoints, id_cita, "completada")
}

/// Full-record consultation update (acceptance toggle, notes, price).
pub fn actualizar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    consulta: &Consulta,
) -> Result<Option<String>, ApiError> {
    let body = serde_json::to_value(consulta).expect("consulta body serializes");
    let response = client.put(&endpoints.actualizar_consulta(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al actualizar consulta")
}

/// Toggle whether the patient accepted the proposed treatment.
pub fn marcar_acepto_tratamiento(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    consulta: &Consulta,
    acepto: bool,
) -> Result<Option<String>, ApiError> {
    let mut actualizada = consulta.clone();
    actualizada.acepto_tratamiento = acepto;
    actualizar(client, endpoints, &actualizada)
}

/// A consultation joined to its source appointment, when found.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultaConCita {
    #[serde(flatten)]
    pub consulta: Consulta,
    pub cita: Option<Cita>,
}

/// Best-effort join by `idCita`.
pub fn con_cita(consultas: &[Consulta], citas: &[Cita]) -> Vec<ConsultaConCita> {
    consultas
        .iter()
        .map(|consulta| ConsultaConCita {
            consulta: consulta.clone(),
            cita: citas.iter().find(|c| c.id_cita == consulta.id_cita).cloned(),
        })
        .collect()
}
