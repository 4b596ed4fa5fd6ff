//! Administrative staff (separate backend service, unauthenticated).

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::Endpoints;
use crate::models::{Administrativo, AdministrativoRegistro};

/// All staff. This service answers a bare array; an envelope is accepted
/// too for symmetry with the rest of the backend.
pub fn fetch_todos(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
) -> Result<Vec<Administrativo>, ApiError> {
    let response = client.get(&endpoints.listar_administrativos())?;
    match response {
        serde_json::Value::Array(items) => serde_json::from_value(serde_json::Value::Array(items))
            .map_err(|e| ApiError::Decode(crate::decode::DecodeError::Shape(e.to_string()))),
        other => Envelope::from_value(other)?.valor_or_empty(),
    }
}

/// Staff registration form; every field is mandatory.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AdministrativoForm {
    pub cedula: String,
    pub nombres: String,
    pub apellidos: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
}

/// Register a staff member, stamping `fechaIngreso` at submit time.
pub fn registrar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    form: &AdministrativoForm,
    fecha_ingreso: String,
) -> Result<(), ApiError> {
    let required = [
        &form.cedula,
        &form.nombres,
        &form.apellidos,
        &form.telefono,
        &form.email,
        &form.direccion,
    ];
    if required.iter().any(|f| f.trim().is_empty()) {
        return Err(ApiError::Rejected(
            "Todos los campos son obligatorios.".to_string(),
        ));
    }

    let dto = AdministrativoRegistro {
        cedula: form.cedula.clone(),
        nombres: form.nombres.clone(),
        apellidos: form.apellidos.clone(),
        telefono: form.telefono.clone(),
        email: form.email.clone(),
        direccion: form.direccion.clone(),
        fecha_ingreso,
    };
    let body = serde_json::to_value(&dto).expect("administrativo body serializes");
    client.post(&endpoints.registrar_administrativo(), &body)?;
    Ok(())
}

/// Case-insensitive search over the normalized display name and cédula.
pub fn buscar(staff: &[Administrativo], consulta: &str) -> Vec<Administrativo> {
    let consulta = consulta.to_lowercase();
    staff
        .iter()
        .filter(|a| {
            a.display_name().to_lowercase().contains(&consulta)
                || a.cedula.to_lowercase().contains(&consulta)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClient;
    use serde_json::json;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://t/api", "http://t:7008/api/Administrativos", "http://t:7003/api")
    }

    fn form() -> AdministrativoForm {
        AdministrativoForm {
            cedula: "1234567890".into(),
            nombres: "Rosa".into(),
            apellidos: "Vera".into(),
            telefono: "098".into(),
            email: "rosa@clinica.ec".into(),
            direccion: "Guayaquil".into(),
        }
    }

    #[test]
    fn fetch_todos_accepts_bare_array() {
        let client = MockApiClient::new().with_response(
            "GET",
            "http://t:7008/api/Administrativos/ListarTodosAdministrativos",
            json!([{"cedula": "1", "nombres": "Rosa"}]),
        );
        let staff = fetch_todos(&client, &endpoints()).unwrap();
        assert_eq!(staff.len(), 1);
    }

    #[test]
    fn registrar_stamps_fecha_ingreso() {
        let client = MockApiClient::new().with_response(
            "POST",
            "http://t:7008/api/Administrativos/RegistrarAdministrativo",
            json!({}),
        );
        registrar(&client, &endpoints(), &form(), "2026-08-06T09:00:00Z".into()).unwrap();

        let body = client.last_request().unwrap().body.unwrap();
        assert_eq!(body["fechaIngreso"], "2026-08-06T09:00:00Z");
        assert_eq!(body["cedula"], "1234567890");
    }

    #[test]
    fn registrar_requires_every_field() {
        let client = MockApiClient::new();
        let mut incompleto = form();
        incompleto.email = String::new();
        let err = registrar(&client, &endpoints(), &incompleto, "x".into()).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(msg) if msg == "Todos los campos son obligatorios."));
        assert!(client.requests().is_empty());
    }

    #[test]
    fn buscar_uses_normalized_name() {
        let staff = vec![
            Administrativo {
                cedula: "111".into(),
                nombres: Some("Rosa".into()),
                apellidos: Some("Vera".into()),
                ..Default::default()
            },
            Administrativo {
                cedula: "222".into(),
                nombre: Some("Luis Paz".into()),
                ..Default::default()
            },
        ];
        assert_eq!(buscar(&staff, "vera").len(), 1);
        assert_eq!(buscar(&staff, "luis").len(), 1);
        assert_eq!(buscar(&staff, "222").len(), 1);
        assert!(buscar(&staff, "nadie").is_empty());
    }
}
