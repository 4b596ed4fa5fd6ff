//! Payments view operations.

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::Endpoints;
use crate::models::{Pago, PagoRegistro};

pub fn fetch_todos(client: &dyn ApiClient, endpoints: &Endpoints) -> Result<Vec<Pago>, ApiError> {
    let response = client.get(&endpoints.listar_pagos())?;
    Envelope::from_value(response)?.valor_or_empty()
}

/// Payments of one patient out of an already-fetched list.
pub fn de_paciente<'a>(pagos: &'a [Pago], cedula: &str) -> Vec<&'a Pago> {
    pagos
        .iter()
        .filter(|p| p.cedula_paciente.as_deref() == Some(cedula))
        .collect()
}

pub fn registrar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    pago: &PagoRegistro,
) -> Result<Option<String>, ApiError> {
    let body = serde_json::to_value(pago).expect("pago body serializes");
    let response = client.post(&endpoints.registrar_pago(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al registrar el pago")
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
            "http://t/api/Pagos/ListarTodosPagos",
            json!({"esCorrecto": true, "valor": [{"idPago": 1, "cedulaPaciente": "111"}]}),
        );
        let pagos = fetch_todos(&client, &endpoints()).unwrap();
        assert_eq!(pagos.len(), 1);
    }

    #[test]
    fn de_paciente_filters_by_cedula() {
        let pagos = vec![
            Pago { id_pago: 1, cedula_paciente: Some("111".into()), ..Default::default() },
            Pago { id_pago: 2, cedula_paciente: Some("222".into()), ..Default::default() },
        ];
        let mios = de_paciente(&pagos, "111");
        assert_eq!(mios.len(), 1);
        assert_eq!(mios[0].id_pago, 1);
    }

    #[test]
    fn registrar_surfaces_rejection() {
        let client = MockApiClient::new().with_response(
            "POST",
            "http://t/api/Pagos/RegistrarPago",
            json!({"esCorrecto": false}),
        );
        let dto = PagoRegistro {
            id_pago: 0,
            cedula_paciente: "111".into(),
            monto: 20.0,
            fecha: "2026-08-06".into(),
            metodo: "Efectivo".into(),
        };
        let err = registrar(&client, &endpoints(), &dto).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(msg) if msg == "Error al registrar el pago"));
    }
}
