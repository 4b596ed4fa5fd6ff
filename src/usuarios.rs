//! Login-account administration (admin dashboard).

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::Endpoints;
use crate::models::{Usuario, UsuarioActualizacion, UsuarioUpsert};

pub fn fetch_todos(client: &dyn ApiClient, endpoints: &Endpoints) -> Result<Vec<Usuario>, ApiError> {
    let response = client.get(&endpoints.listar_usuarios())?;
    Envelope::from_value(response)?.valor_or_empty()
}

pub fn registrar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    usuario: &UsuarioUpsert,
) -> Result<Option<String>, ApiError> {
    let body = serde_json::to_value(usuario).expect("usuario body serializes");
    let response = client.post(&endpoints.registrar_usuario(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al procesar la solicitud")
}

/// Update account data; the password never travels on this path.
pub fn actualizar(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    usuario: &UsuarioActualizacion,
) -> Result<Option<String>, ApiError> {
    let body = serde_json::to_value(usuario).expect("usuario body serializes");
    let response = client.put(&endpoints.actualizar_usuario(), &body)?;
    Envelope::from_value(response)?.expect_ok("Error al procesar la solicitud")
}
