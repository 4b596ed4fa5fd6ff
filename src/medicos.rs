//! Physician list and admin CRUD.

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::Endpoints;
use crate::models::{Medico, MedicoUpsert};

pub fn fetch_todos(client: &dyn ApiClient, endpoints: &Endpoints) -> Result<Vec<Medico>, ApiError> {
    let response = client.get(&endpoints.listar_medicos())?;
    Envelope::from_value(response)?.valor_or_empty()
}

/// Lookup by cédula, tolerating the `cedulaMedico` spelling.
pub fn por_cedula<'a>(medicos: &'a [Medico], cedula: &str) -> Option<&'a Medico> {
    medicos.iter().find(|m| m.tiene_cedula(cedula))
}

pub fn registrar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    medico: &MedicoUpsert,
) -> Result<Option<String>, ApiError> {
    let body = serde_json::to_value(medico).expect("medico body serializes");
    let response = client.post(&endpoints.registrar_medico(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al procesar la solicitud")
}

pub fn actualizar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    medico: &MedicoUpsert,
) -> Result<Option<String>, ApiError> {
    let body = serde_json::to_value(medico).expect("medico body serializes");
    let response = client.put(&endpoints.actualizar_medico(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al procesar la solicitud")
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
    fn fetch_todos_unwraps_valor() {
        let client = MockApiClient::new().with_response(
            "GET",
            "http://t/api/Medicos/ListarTodosMedicos",
            json!({"esCorrecto": true, "valor": [{"cedula": "1", "nombres": "Carlos"}]}),
        );
        let medicos = fetch_todos(&client, &endpoints()).unwrap();
        assert_eq!(medicos.len(), 1);
    }

    #[test]
    fn lookup_matches_either_cedula_field() {
        let medicos = vec![
            Medico { cedula: "111".into(), ..Default::default() },
            Medico {
                cedula: String::new(),
                cedula_medico: Some("222".into()),
                ..Default::default()
            },
        ];
        assert!(por_cedula(&medicos, "111").is_some());
        assert!(por_cedula(&medicos, "222").is_some());
        assert!(por_cedula(&medicos, "333").is_none());
    }

    #[test]
    fn admin_update_sends_pascal_case() {
        let client = MockApiClient::new().with_response(
            "PUT",
            "http://t/api/Medicos/ActualizarMedico",
            json!({"esCorrecto": true}),
        );
        let dto = MedicoUpsert {
            cedula: "1".into(),
            nombres: "Carlos".into(),
            apellidos: "Mena".into(),
            especialidad: "Pediatría".into(),
            telefono: "09".into(),
            email: "c@m.ec".into(),
            direccion: "x".into(),
            fecha_ingreso: "2026-08-06".into(),
        };
        actualizar(&client, &endpoints(), &dto).unwrap();
        let body = client.last_request().unwrap().body.unwrap();
        assert!(body.get("Especialidad").is_some());
        assert!(body.get("especialidad").is_none());
    }
}
