use serde::{Deserialize, Serialize};

use super::full_name;

/// Administrative staff record (separate backend service).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Administrativo {
    pub cedula: String,
    pub nombre: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub fecha_ingreso: Option<String>,
}

impl Administrativo {
    pub fn display_name(&self) -> String {
        full_name(
            self.nombre.as_deref(),
            self.nombres.as_deref(),
            self.apellidos.as_deref(),
        )
        .unwrap_or_else(|| "Sin nombre".to_string())
    }
}

/// Registration body; `fechaIngreso` is stamped at submit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrativoRegistro {
    pub cedula: String,
    pub nombres: String,
    pub apellidos: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub fecha_ingreso: String,
}
