//! Appointments view operations: fetching, calendar grouping, pagination
//! and scheduling/cancelling through the admin form.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::Endpoints;
use crate::medicos;
use crate::models::{Cita, CitaUpsert, EstadoCita, Medico, Paciente};
use crate::pacientes;

/// Appointments per page in the table view.
pub const CITAS_POR_PAGINA: usize = 10;
/// Width of the page-number window under the table.
const MAX_PAGINAS_VISIBLES: usize = 5;

/// Appointments for one account, via `/Citas/ObtenerCitasxCedula/{cedula}`.
pub fn fetch_por_cedula(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    cedula: &str,
) -> Result<Vec<Cita>, ApiError> {
    if cedula.is_empty() {
        return Err(ApiError::Rejected(
            "No se encontró la cédula del usuario.".to_string(),
        ));
    }
    let response = client.get(&endpoints.citas_por_cedula(cedula))?;
    Envelope::from_value(response)?
        .valor_list("No se encontraron citas o la respuesta no es válida.")
}

/// Every appointment in the system (admin view).
pub fn fetch_todas(client: &dyn ApiClient, endpoints: &Endpoints) -> Result<Vec<Cita>, ApiError> {
    let response = client.get(&endpoints.listar_citas())?;
    Envelope::from_value(response)?.valor_or_empty()
}

/// Group appointments by calendar day (`fechaCita` date part).
/// Records without a date are skipped.
pub fn agrupar_por_dia(citas: &[Cita]) -> BTreeMap<String, Vec<Cita>> {
    let mut grupos: BTreeMap<String, Vec<Cita>> = BTreeMap::new();
    for cita in citas {
        if let Some(dia) = cita.dia_calendario() {
            grupos.entry(dia).or_default().push(cita.clone());
        }
    }
    grupos
}

/// One rendered row of the appointments table: the record plus the
/// display fallbacks the screen needs.
#[derive(Debug, Clone, Serialize)]
pub struct CitaFila {
    #[serde(flatten)]
    pub cita: Cita,
    pub estado_formateado: String,
    pub hora_formateada: String,
    pub puede_cancelar: bool,
}

/// Build a table row, applying the status and hour normalizations.
pub fn fila(cita: &Cita) -> CitaFila {
    CitaFila {
        estado_formateado: EstadoCita::label(cita.estado.as_deref()),
        hora_formateada: cita.hora_display().to_string(),
        puede_cancelar: puede_cancelarse(cita),
        cita: cita.clone(),
    }
}

/// One page of the appointments table.
#[derive(Debug, Clone, Serialize)]
pub struct Pagina {
    pub citas: Vec<CitaFila>,
    pub pagina_actual: usize,
    pub total_paginas: usize,
    pub numeros_visibles: Vec<usize>,
}

/// Slice out page `pagina` (1-based) of `citas`.
pub fn paginar(citas: &[Cita], pagina: usize, por_pagina: usize) -> Pagina {
    let total_paginas = citas.len().div_ceil(por_pagina).max(1);
    let pagina_actual = pagina.clamp(1, total_paginas);
    let inicio = (pagina_actual - 1) * por_pagina;
    let fin = (inicio + por_pagina).min(citas.len());
    let filas = if inicio < citas.len() {
        citas[inicio..fin].iter().map(fila).collect()
    } else {
        Vec::new()
    };
    Pagina {
        citas: filas,
        pagina_actual,
        total_paginas,
        numeros_visibles: numeros_de_pagina(total_paginas, pagina_actual),
    }
}

/// Page-number window centered on the current page, at most
/// `MAX_PAGINAS_VISIBLES` wide.
pub fn numeros_de_pagina(total: usize, actual: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let mut inicio = actual.saturating_sub(MAX_PAGINAS_VISIBLES / 2).max(1);
    let fin = (inicio + MAX_PAGINAS_VISIBLES - 1).min(total);
    if fin + 1 - inicio < MAX_PAGINAS_VISIBLES {
        inicio = fin.saturating_sub(MAX_PAGINAS_VISIBLES - 1).max(1);
    }
    (inicio..=fin).collect()
}

/// Schedule a new appointment.
pub fn registrar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    cita: &CitaUpsert,
) -> Result<Option<String>, ApiError> {
    let body = serde_json::to_value(cita).expect("cita body serializes");
    let response = client.post(&endpoints.registrar_cita(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al procesar la solicitud")
}

/// Update an existing appointment.
pub fn actualizar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    cita: &CitaUpsert,
) -> Result<Option<String>, ApiError> {
    let body = serde_json::to_value(cita).expect("cita body serializes");
    let response = client.put(&endpoints.actualizar_cita(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al procesar la solicitud")
}

/// Cancel an appointment: full update with status `Cancelada`.
pub fn cancelar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    cita: &Cita,
    agendado_por: &str,
) -> Result<Option<String>, ApiError> {
    let dto = CitaUpsert {
        id_cita: cita.id_cita,
        cedula_paciente: cita.cedula_paciente.clone().unwrap_or_default(),
        cedula_medico: cita.cedula_medico.clone().unwrap_or_default(),
        fecha_cita: cita.fecha_cita.clone().unwrap_or_default(),
        hora_cita: cita.hora_cita.clone().unwrap_or_else(|| "09:00".to_string()),
        motivo: cita.motivo.clone().unwrap_or_default(),
        estado: "Cancelada".to_string(),
        agendado_por: cita
            .agendado_por
            .clone()
            .unwrap_or_else(|| agendado_por.to_string()),
    };
    let body = serde_json::to_value(&dto).expect("cita body serializes");
    let response = client.put(&endpoints.actualizar_cita(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al cancelar la cita")
}

/// Whether the table offers the cancel action for this appointment.
pub fn puede_cancelarse(cita: &Cita) -> bool {
    let estado = cita.estado.as_deref().unwrap_or_default();
    estado != "Cancelada" && estado != "Completada"
}

/// Admin-table row: the appointment plus resolved participant names.
#[derive(Debug, Clone, Serialize)]
pub struct CitaAdmin {
    #[serde(flatten)]
    pub cita: Cita,
    pub paciente_nombre: String,
    pub medico_nombre: String,
}

/// Best-effort join against the patient and physician lists; a missing
/// participant shows as the raw cédula (or "-" when even that is absent).
pub fn con_nombres(
    citas: &[Cita],
    lista_pacientes: &[Paciente],
    lista_medicos: &[Medico],
) -> Vec<CitaAdmin> {
    citas
        .iter()
        .map(|cita| {
            let paciente_nombre = match cita.cedula_paciente.as_deref() {
                Some(cedula) => pacientes::nombre_por_cedula(lista_pacientes, cedula),
                None => "-".to_string(),
            };
            let medico_nombre = match cita.cedula_medico.as_deref() {
                Some(cedula) => medicos::por_cedula(lista_medicos, cedula)
                    .map(Medico::display_name)
                    .unwrap_or_else(|| cedula.to_string()),
                None => "-".to_string(),
            };
            CitaAdmin {
                cita: cita.clone(),
                paciente_nombre,
                medico_nombre,
            }
        })
        .collect()
}
