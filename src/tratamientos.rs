//! Treatments for a consultation (diagnosis screen).

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::Endpoints;
use crate::models::{Consulta, Tratamiento, TratamientoRegistro};

/// Treatments attached to one consultation. Missing `valor` is an empty
/// list, matching the screen's silent fallback.
pub fn fetch_por_consulta(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    id_consulta: i64,
) -> Result<Vec<Tratamiento>, ApiError> {
    let response = client.get(&endpoints.tratamientos_por_consulta(id_consulta))?;
    Envelope::from_value(response)?.valor_or_empty()
}

/// Register a treatment for a consultation.
///
/// At most one treatment per consultation: `existentes` is the list already
/// on screen, and a duplicate is refused before touching the backend. The
/// cost always comes from the consultation's base price, not the form.
pub fn registrar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    consulta: &Consulta,
    existentes: &[Tratamiento],
    descripcion: String,
    sesiones: i64,
) -> Result<(), ApiError> {
    if existentes.iter().any(|t| t.id_consulta == consulta.id_consulta) {
        return Err(ApiError::Rejected(
            "Ya existe un tratamiento registrado para esta consulta.".to_string(),
        ));
    }

    let dto = TratamientoRegistro {
        id_tratamiento: 0,
        id_consulta: consulta.id_consulta,
        descripcion,
        costo: consulta.precio_base.unwrap_or(0.0),
        sesiones,
    };
    let body = serde_json::to_value(&dto).expect("tratamiento body serializes");
    let response = client.post(&endpoints.registrar_tratamiento(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al guardar el tratamiento")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClient;
    use serde_json::json;

    fn endpoints() -> Endpoints {
        Endpoints::new("http://t/api", "http://t:7008/api/Administrativos", "http://t:7003/api")
    }

    fn consulta() -> Consulta {
        Consulta {
            id_consulta: 12,
            id_cita: 4,
            precio_base: Some(30.0),
            ..Default::default()
        }
    }

    #[test]
    fn fetch_por_consulta_tolerates_missing_valor() {
        let client = MockApiClient::new().with_response(
            "GET",
            "http://t/api/Tratamientos/ObtenerTratamientosxIdConsulta/12",
            json!({"esCorrecto": true}),
        );
        assert!(fetch_por_consulta(&client, &endpoints(), 12).unwrap().is_empty());
    }

    #[test]
    fn registrar_posts_against_the_treatments_service() {
        let client = MockApiClient::new().with_response(
            "POST",
            "http://t:7003/api/Tratamientos/RegistrarTratamiento",
            json!({"esCorrecto": true}),
        );
        registrar(&client, &endpoints(), &consulta(), &[], "Fisioterapia".into(), 5).unwrap();

        let request = client.last_request().unwrap();
        assert!(request.url.starts_with("http://t:7003"));
        let body = request.body.unwrap();
        assert_eq!(body["idTratamiento"], 0);
        assert_eq!(body["idConsulta"], 12);
        // Cost mirrors the consultation's base price.
        assert_eq!(body["costo"], 30.0);
        assert_eq!(body["sesiones"], 5);
    }

    #[test]
    fn duplicate_treatment_is_refused_locally() {
        let client = MockApiClient::new();
        let existente = Tratamiento { id_consulta: 12, ..Default::default() };
        let err = registrar(&client, &endpoints(), &consulta(), &[existente], "x".into(), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Rejected(msg) if msg == "Ya existe un tratamiento registrado para esta consulta."
        ));
        assert!(client.requests().is_empty());
    }

    #[test]
    fn treatment_for_other_consulta_does_not_block() {
        let client = MockApiClient::new().with_response(
            "POST",
            "http://t:7003/api/Tratamientos/RegistrarTratamiento",
            json!({"esCorrecto": true}),
        );
        let ajeno = Tratamiento { id_consulta: 99, ..Default::default() };
        registrar(&client, &endpoints(), &consulta(), &[ajeno], "x".into(), 1).unwrap();
        assert_eq!(client.requests().len(), 1);
    }

    #[test]
    fn missing_precio_base_registers_zero_cost() {
        let client = MockApiClient::new().with_response(
            "POST",
            "http://t:7003/api/Tratamientos/RegistrarTratamiento",
            json!({"esCorrecto": true}),
        );
        let sin_precio = Consulta { id_consulta: 12, ..Default::default() };
        registrar(&client, &endpoints(), &sin_precio, &[], "x".into(), 1).unwrap();
        let body = client.last_request().unwrap().body.unwrap();
        assert_eq!(body["costo"], 0.0);
    }
}
