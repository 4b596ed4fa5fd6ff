//! Patients view operations.

use chrono::NaiveDate;

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::Endpoints;
use crate::models::{Paciente, PacienteUpsert};

/// All patients. The list screens render whatever arrives, so `valor`
/// is taken leniently (missing → empty).
pub fn fetch_todos(client: &dyn ApiClient, endpoints: &Endpoints) -> Result<Vec<Paciente>, ApiError> {
    let response = client.get(&endpoints.listar_pacientes())?;
    Envelope::from_value(response)?.valor_or_empty()
}

pub fn registrar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    paciente: &PacienteUpsert,
) -> Result<Option<String>, ApiError> {
    let body = serde_json::to_value(paciente).expect("paciente body serializes");
    let response = client.post(&endpoints.registrar_paciente(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al procesar la solicitud")
}

pub fn actualizar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    paciente: &PacienteUpsert,
) -> Result<Option<String>, ApiError> {
    let body = serde_json::to_value(paciente).expect("paciente body serializes");
    let response = client.put(&endpoints.actualizar_paciente(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al procesar la solicitud")
}

/// Best-effort join: display name for a cédula, the raw cédula when the
/// lookup misses.
pub fn nombre_por_cedula(pacientes: &[Paciente], cedula: &str) -> String {
    pacientes
        .iter()
        .find(|p| p.cedula == cedula)
        .map(Paciente::display_name)
        .unwrap_or_else(|| cedula.to_string())
}

/// Patients ordered most-recent first by registration-ish date
/// (`fechaCreacion`, falling back to `fechaNacimiento`).
pub fn ordenar_recientes(mut pacientes: Vec<Paciente>) -> Vec<Paciente> {
    let clave = |p: &Paciente| p.fecha_alta().unwrap_or(NaiveDate::MIN);
    pacientes.sort_by(|a, b| clave(b).cmp(&clave(a)));
    pacientes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClient;
    use serde_json::json;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://t/api", "http://t:7008/api/Administrativos", "http://t:7003/api")
    }

    #[test]
    fn fetch_todos_takes_valor_leniently() {
        let client = MockApiClient::new().with_response(
            "GET",
            "http://t/api/Pacientes/ListarTodosPacientes",
            json!({"valor": [{"cedula": "111", "nombres": "Ana"}]}),
        );
        let pacientes = fetch_todos(&client, &endpoints()).unwrap();
        assert_eq!(pacientes.len(), 1);
        assert_eq!(pacientes[0].cedula, "111");
    }

    #[test]
    fn fetch_todos_missing_valor_is_empty() {
        let client = MockApiClient::new().with_response(
            "GET",
            "http://t/api/Pacientes/ListarTodosPacientes",
            json!({"esCorrecto": false}),
        );
        assert!(fetch_todos(&client, &endpoints()).unwrap().is_empty());
    }

    #[test]
    fn join_falls_back_to_raw_cedula() {
        let pacientes = vec![Paciente {
            cedula: "111".into(),
            nombres: Some("Ana".into()),
            apellidos: Some("Suárez".into()),
            ..Default::default()
        }];
        assert_eq!(nombre_por_cedula(&pacientes, "111"), "Ana Suárez");
        assert_eq!(nombre_por_cedula(&pacientes, "999"), "999");
    }

    #[test]
    fn recientes_order_prefers_creation_date() {
        let viejo = Paciente {
            cedula: "1".into(),
            fecha_creacion: Some("2024-01-01".into()),
            ..Default::default()
        };
        let nuevo = Paciente {
            cedula: "2".into(),
            fecha_creacion: Some("2026-08-01".into()),
            ..Default::default()
        };
        let sin_fecha = Paciente { cedula: "3".into(), ..Default::default() };

        let ordenados = ordenar_recientes(vec![viejo, sin_fecha, nuevo]);
        assert_eq!(ordenados[0].cedula, "2");
        assert_eq!(ordenados[1].cedula, "1");
        assert_eq!(ordenados[2].cedula, "3");
    }

    #[test]
    fn registrar_sends_pascal_case_body() {
        let client = MockApiClient::new().with_response(
            "POST",
            "http://t/api/Pacientes/RegistrarPaciente",
            json!({"esCorrecto": true}),
        );
        let dto = PacienteUpsert {
            cedula: "111".into(),
            nombres: "Ana".into(),
            apellidos: "Suárez".into(),
            telefono: "099".into(),
            email: "a@s.ec".into(),
            direccion: "Quito".into(),
            fecha_nacimiento: "1990-01-01".into(),
            fecha_registro: "2026-08-06".into(),
            sexo: "Femenino".into(),
        };
        registrar(&client, &endpoints(), &dto).unwrap();
        let body = client.last_request().unwrap().body.unwrap();
        assert!(body.get("Cedula").is_some());
        assert!(body.get("Sexo").is_some());
    }
}
