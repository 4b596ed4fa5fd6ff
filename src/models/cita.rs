use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fecha_dia;

/// Appointment record mirrored from backend JSON.
///
/// References patient and physician by cédula string; the date arrives as
/// `fechaCita` on most endpoints and as plain `fecha` on others, the hour
/// as `horaCita` or `hora`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cita {
    pub id_cita: i64,
    pub cedula_paciente: Option<String>,
    pub cedula_medico: Option<String>,
    pub fecha_cita: Option<String>,
    pub fecha: Option<String>,
    pub hora_cita: Option<String>,
    pub hora: Option<String>,
    pub motivo: Option<String>,
    pub estado: Option<String>,
    pub agendado_por: Option<String>,
}

impl Cita {
    /// Calendar-day key, from `fechaCita` only (the calendar view skips
    /// records without it).
    pub fn dia_calendario(&self) -> Option<String> {
        let raw = self.fecha_cita.as_deref()?;
        Some(raw.split('T').next().unwrap_or(raw).to_string())
    }

    /// Parsed day in `fecha` → `fechaCita` preference order.
    pub fn fecha_dia(&self) -> Option<NaiveDate> {
        self.fecha
            .as_deref()
            .and_then(fecha_dia)
            .or_else(|| self.fecha_cita.as_deref().and_then(fecha_dia))
    }

    /// Hour for display, with placeholder.
    pub fn hora_display(&self) -> &str {
        self.hora_cita.as_deref().filter(|h| !h.is_empty()).unwrap_or("Sin hora")
    }

    /// Hour for ordering: `hora` → `horaCita` → midnight.
    pub fn hora_orden(&self) -> &str {
        self.hora
            .as_deref()
            .filter(|h| !h.is_empty())
            .or_else(|| self.hora_cita.as_deref().filter(|h| !h.is_empty()))
            .unwrap_or("00:00")
    }

    /// Lowercased status for comparisons; empty when absent.
    pub fn estado_lower(&self) -> String {
        self.estado.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// Write DTO for scheduling/updating — this endpoint expects PascalCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CitaUpsert {
    pub id_cita: i64,
    pub cedula_paciente: String,
    pub cedula_medico: String,
    pub fecha_cita: String,
    pub hora_cita: String,
    pub motivo: String,
    pub estado: String,
    pub agendado_por: String,
}
