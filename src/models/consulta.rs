use serde::{Deserialize, Serialize};

/// Consultation record, created from a completed appointment.
/// References its `Cita` by numeric id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consulta {
    pub id_consulta: i64,
    pub id_cita: i64,
    pub cedula_paciente: Option<String>,
    pub fecha: Option<String>,
    pub motivo: Option<String>,
    pub notas: Option<String>,
    pub precio_base: Option<f64>,
    pub acepto_tratamiento: bool,
}

/// Registration body. `idConsulta` is always 0 — the backend assigns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultaRegistro {
    pub id_consulta: i64,
    pub id_cita: i64,
    pub fecha: String,
    pub notas: String,
    pub precio_base: f64,
    pub acepto_tratamiento: bool,
}

impl ConsultaRegistro {
    pub fn nueva(id_cita: i64, fecha: String, notas: String, precio_base: f64) -> Self {
        Self {
            id_consulta: 0,
            id_cita,
            fecha,
            notas,
            precio_base,
            acepto_tratamiento: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registro_serializes_camel_case_with_zero_id() {
        let dto = ConsultaRegistro::nueva(9, "2026-08-06T10:00:00".into(), "ok".into(), 25.0);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["idConsulta"], 0);
        assert_eq!(json["idCita"], 9);
        assert_eq!(json["precioBase"], 25.0);
        assert_eq!(json["aceptoTratamiento"], false);
    }

    #[test]
    fn read_model_defaults_optional_fields() {
        let c: Consulta = serde_json::from_str(r#"{"idConsulta":3,"idCita":9}"#).unwrap();
        assert_eq!(c.id_consulta, 3);
        assert!(!c.acepto_tratamiento);
        assert!(c.precio_base.is_none());
    }
}
