use serde::{Deserialize, Serialize};

/// Login account as listed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Usuario {
    pub cedula_usuario: String,
    pub nombre_usuario: Option<String>,
    pub activo: bool,
    pub rol: Option<String>,
    pub bloqueado_hasta: Option<String>,
}

/// Self-service registration body (camelCase endpoint), used by the
/// physician sign-up flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioRegistro {
    pub cedula_usuario: String,
    pub nombre_usuario: String,
    pub password_hash: String,
    pub activo: bool,
    pub bloqueado_hasta: Option<String>,
    pub rol: String,
}

/// Admin-form creation body — this path expects PascalCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsuarioUpsert {
    pub cedula_usuario: String,
    pub nombre_usuario: String,
    pub password_hash: String,
    pub activo: bool,
    pub rol: String,
}

/// Admin-form update body — the password is never sent on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsuarioActualizacion {
    pub cedula_usuario: String,
    pub nombre_usuario: String,
    pub activo: bool,
    pub rol: String,
}
