use serde::{Deserialize, Serialize};

/// Payment record for a patient, optionally tied to a consultation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pago {
    pub id_pago: i64,
    pub cedula_paciente: Option<String>,
    pub id_consulta: Option<i64>,
    pub monto: Option<f64>,
    pub fecha: Option<String>,
    pub metodo: Option<String>,
}

/// Registration body; the backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagoRegistro {
    pub id_pago: i64,
    pub cedula_paciente: String,
    pub monto: f64,
    pub fecha: String,
    pub metodo: String,
}
