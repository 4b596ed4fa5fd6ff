use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{fecha_dia, full_name};

/// Patient record mirrored from backend JSON.
///
/// The name arrives either as a single `nombre` or as `nombres`+`apellidos`
/// depending on the endpoint; every shape-varying field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paciente {
    pub cedula: String,
    pub nombre: Option<String>,
    pub nombres: Option<String>,
    pub apellidos: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub fecha_registro: Option<String>,
    pub fecha_creacion: Option<String>,
    pub sexo: Option<String>,
    pub edad: Option<u32>,
}

impl Paciente {
    /// Name in fixed preference order, with the standard placeholder.
    pub fn display_name(&self) -> String {
        full_name(
            self.nombre.as_deref(),
            self.nombres.as_deref(),
            self.apellidos.as_deref(),
        )
        .unwrap_or_else(|| "Sin nombre".to_string())
    }

    /// Age: backend-provided `edad`, else calendar-year difference from
    /// the birth date, else unknown.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        if let Some(edad) = self.edad {
            return Some(edad);
        }
        let nacimiento = fecha_dia(self.fecha_nacimiento.as_deref()?)?;
        let years = today.year() - nacimiento.year();
        u32::try_from(years).ok()
    }

    /// Date used to order patients by recency: creation date first,
    /// birth date as a stand-in when the backend omits it.
    pub fn fecha_alta(&self) -> Option<NaiveDate> {
        self.fecha_creacion
            .as_deref()
            .and_then(fecha_dia)
            .or_else(|| self.fecha_nacimiento.as_deref().and_then(fecha_dia))
    }
}

/// Write DTO for patient registration/update — this endpoint expects
/// PascalCase field names, unlike the camelCase read payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PacienteUpsert {
    pub cedula: String,
    pub nombres: String,
    pub apellidos: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub fecha_nacimiento: String,
    pub fecha_registro: String,
    pub sexo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_nombre() {
        let p = Paciente {
            nombre: Some("Luisa Paredes".into()),
            nombres: Some("X".into()),
            ..Default::default()
        };
        assert_eq!(p.display_name(), "Luisa Paredes");
    }

    #[test]
    fn display_name_concatenates_split_fields() {
        let p = Paciente {
            nombres: Some("Luisa".into()),
            apellidos: Some("Paredes".into()),
            ..Default::default()
        };
        assert_eq!(p.display_name(), "Luisa Paredes");
    }

    #[test]
    fn display_name_placeholder_when_absent() {
        assert_eq!(Paciente::default().display_name(), "Sin nombre");
    }

    #[test]
    fn age_prefers_backend_edad() {
        let p = Paciente {
            edad: Some(34),
            fecha_nacimiento: Some("1990-01-01".into()),
            ..Default::default()
        };
        let hoy = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(p.age_on(hoy), Some(34));
    }

    #[test]
    fn age_computed_from_birth_year() {
        let p = Paciente {
            fecha_nacimiento: Some("1990-12-31T00:00:00".into()),
            ..Default::default()
        };
        let hoy = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(p.age_on(hoy), Some(36));
    }

    #[test]
    fn age_unknown_without_data() {
        let hoy = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(Paciente::default().age_on(hoy), None);
    }

    #[test]
    fn upsert_serializes_pascal_case() {
        let dto = PacienteUpsert {
            cedula: "1234567890".into(),
            nombres: "Luisa".into(),
            apellidos: "Paredes".into(),
            telefono: "099".into(),
            email: "l@p.ec".into(),
            direccion: "Av. Quito".into(),
            fecha_nacimiento: "1990-01-01".into(),
            fecha_registro: "2026-08-06".into(),
            sexo: "Femenino".into(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("Cedula").is_some());
        assert!(json.get("FechaNacimiento").is_some());
        assert!(json.get("cedula").is_none());
    }

    #[test]
    fn read_model_accepts_camel_case() {
        let p: Paciente = serde_json::from_str(
            r#"{"cedula":"123","nombres":"Ana","fechaNacimiento":"1990-01-01"}"#,
        )
        .unwrap();
        assert_eq!(p.cedula, "123");
        assert_eq!(p.fecha_nacimiento.as_deref(), Some("1990-01-01"));
    }
}
