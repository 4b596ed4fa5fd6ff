use serde::{Deserialize, Serialize};

/// Notification record. The body text arrives as `mensaje` on some
/// payloads and `descripcion` on others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notificacion {
    pub id: Option<i64>,
    pub titulo: Option<String>,
    pub mensaje: Option<String>,
    pub descripcion: Option<String>,
    pub fecha: Option<String>,
}

impl Notificacion {
    /// Body text in fixed preference order with placeholder.
    pub fn cuerpo(&self) -> &str {
        self.mensaje
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.descripcion.as_deref().filter(|d| !d.is_empty()))
            .unwrap_or("Sin mensaje")
    }

    pub fn titulo_display(&self) -> &str {
        self.titulo
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Notificación")
    }
}

/// Publication body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificacionRegistro {
    pub titulo: String,
    pub mensaje: String,
}
