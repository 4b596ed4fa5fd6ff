//! Notifications: listing, publishing, search.
//!
//! The list endpoint is the shape-shifting one: depending on the consumer
//! it answers either a bare JSON array or the standard envelope, and its
//! bodies are where the malformed trailing commas show up (the tolerant
//! decoder sits below this module, in the API client).

use serde_json::Value;

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::Endpoints;
use crate::models::{Notificacion, NotificacionRegistro};

/// All notifications, tolerating both payload shapes.
pub fn fetch_todas(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
) -> Result<Vec<Notificacion>, ApiError> {
    let response = client.get(&endpoints.listar_notificaciones())?;
    decodificar_lista(response)
}

/// Bare array or `{esCorrecto, valor}` envelope → list.
fn decodificar_lista(value: Value) -> Result<Vec<Notificacion>, ApiError> {
    match value {
        Value::Array(items) => serde_json::from_value(Value::Array(items)).map_err(|e| {
            ApiError::Decode(crate::decode::DecodeError::Shape(e.to_string()))
        }),
        other => Envelope::from_value(other)?.valor_or_empty(),
    }
}

/// Publish a notification and hand back nothing; callers re-fetch.
pub fn registrar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    titulo: String,
    mensaje: String,
) -> Result<(), ApiError> {
    let dto = NotificacionRegistro { titulo, mensaje };
    let body = serde_json::to_value(&dto).expect("notificacion body serializes");
    client.post(&endpoints.registrar_notificacion(), &body)?;
    Ok(())
}

/// Case-insensitive title/body search.
pub fn buscar(notificaciones: &[Notificacion], consulta: &str) -> Vec<Notificacion> {
    let consulta = consulta.to_lowercase();
    notificaciones
        .iter()
        .filter(|n| {
            n.titulo
                .as_deref()
                .map(|t| t.to_lowercase().contains(&consulta))
                .unwrap_or(false)
                || n.mensaje
                    .as_deref()
                    .map(|m| m.to_lowercase().contains(&consulta))
                    .unwrap_or(false)
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

    const URL: &str = "http://t/api/Notificaciones/ListarTodasNotificaciones";

    #[test]
    fn bare_array_payload_is_accepted() {
        let client = MockApiClient::new().with_response(
            "GET",
            URL,
            json!([{"titulo": "Aviso", "mensaje": "cierre temprano"}]),
        );
        let lista = fetch_todas(&client, &endpoints()).unwrap();
        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0].cuerpo(), "cierre temprano");
    }

    #[test]
    fn envelope_payload_is_accepted() {
        let client = MockApiClient::new().with_response(
            "GET",
            URL,
            json!({"esCorrecto": true, "valor": [{"titulo": "Aviso", "descripcion": "texto"}]}),
        );
        let lista = fetch_todas(&client, &endpoints()).unwrap();
        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0].cuerpo(), "texto");
    }

    #[test]
    fn envelope_without_valor_is_empty() {
        let client = MockApiClient::new().with_response("GET", URL, json!({"esCorrecto": false}));
        assert!(fetch_todas(&client, &endpoints()).unwrap().is_empty());
    }

    #[test]
    fn registrar_posts_titulo_and_mensaje() {
        let client = MockApiClient::new().with_response(
            "POST",
            "http://t/api/Notificaciones/RegistrarNotificacion",
            json!({"esCorrecto": true}),
        );
        registrar(&client, &endpoints(), "Aviso".into(), "texto".into()).unwrap();

        let body = client.last_request().unwrap().body.unwrap();
        assert_eq!(body, json!({"titulo": "Aviso", "mensaje": "texto"}));
    }

    #[test]
    fn buscar_matches_title_or_body() {
        let lista = vec![
            Notificacion { titulo: Some("Cierre".into()), ..Default::default() },
            Notificacion { mensaje: Some("nuevo HORARIO".into()), ..Default::default() },
            Notificacion { descripcion: Some("horario".into()), ..Default::default() },
        ];
        let encontradas = buscar(&lista, "horario");
        // `descripcion` is display fallback, not a search field.
        assert_eq!(encontradas.len(), 1);
        assert_eq!(encontradas[0].mensaje.as_deref(), Some("nuevo HORARIO"));
    }
}
