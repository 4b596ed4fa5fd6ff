use serde::{Deserialize, Serialize};

use super::full_name;

/// Physician record mirrored from backend JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Medico {
    pub cedula: String,
    pub cedula_medico: Option<String>,
    pub nombre: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub especialidad: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub fecha_ingreso: Option<String>,
}

impl Medico {
    pub fn display_name(&self) -> String {
        full_name(
            self.nombre.as_deref(),
            self.nombres.as_deref(),
            self.apellidos.as_deref(),
        )
        .unwrap_or_else(|| "Sin nombre".to_string())
    }

    /// Match against a cédula; some payloads carry it as `cedulaMedico`.
    pub fn tiene_cedula(&self, cedula: &str) -> bool {
        self.cedula == cedula || self.cedula_medico.as_deref() == Some(cedula)
    }
}

/// Self-service registration body (camelCase endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicoRegistro {
    pub cedula: String,
    pub nombres: String,
    pub apellidos: String,
    pub especialidad: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub fecha_ingreso: String,
}

/// Admin-form body — this path expects PascalCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicoUpsert {
    pub cedula: String,
    pub nombres: String,
    pub apellidos: String,
    pub especialidad: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub fecha_ingreso: String,
}
