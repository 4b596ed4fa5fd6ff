//! Login, role dispatch, registration and password recovery.
//!
//! Login is two backend calls: `/Usuarios/Login` issues the token, then
//! `/Usuarios/ObtenerRolxCedula/{cedula}` decides the landing page. The
//! token is persisted as soon as the first call succeeds; a role-lookup
//! failure therefore aborts navigation but leaves the session stored
//! (long-standing backend-contract behavior, kept as-is).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::Endpoints;
use crate::session::{Session, SessionStore, SessionStoreError};

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Landing page after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// Standard physician dashboard.
    Dashboard,
    /// Administrator dashboard.
    DashboardAdmin,
}

/// Result of a completed login: where to go, and the stored session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub destination: Destination,
    pub session: Session,
}

/// Physician self-registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistroMedicoForm {
    pub cedula: String,
    pub nombres: String,
    pub apellidos: String,
    pub especialidad: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub password: String,
}

/// Errors surfaced by the auth flows, worded for direct display.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Por favor, completa todos los campos requeridos")]
    CamposIncompletos,
    #[error("Credenciales incorrectas. Verifica tu cédula y contraseña")]
    CredencialesInvalidas,
    #[error("Usuario no encontrado. Verifica tu cédula")]
    UsuarioNoEncontrado,
    #[error("Error interno del servidor. Intenta más tarde")]
    ErrorDelServidor,
    #[error("Error al verificar permisos de usuario")]
    VerificacionDeRol(#[source] ApiError),
    #[error("Completa todos los campos.")]
    RegistroIncompleto,
    #[error("Error al registrar médico.")]
    RegistroMedico(#[source] ApiError),
    #[error("Error al registrar usuario.")]
    RegistroUsuario(#[source] ApiError),
    #[error("{0}")]
    RecuperacionFallida(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Sesion(#[from] SessionStoreError),
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    cedula: &'a str,
    #[serde(rename = "contraseña")]
    contrasena: &'a str,
}

// ═══════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════

/// Keep only digits, capped at the 10 characters a cédula can hold.
pub fn sanitize_cedula(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(10).collect()
}

/// Case-insensitive role dispatch: "administrador" lands on the admin
/// dashboard, anything else on the physician dashboard.
pub fn destination_for_role(rol: &str) -> Destination {
    if rol.trim().eq_ignore_ascii_case("administrador") {
        Destination::DashboardAdmin
    } else {
        Destination::Dashboard
    }
}

/// Extract a backend `mensaje` out of a raw error body, if any.
fn mensaje_de_cuerpo(body: &str) -> Option<String> {
    let value: Value = crate::decode::parse_tolerant(body).ok()?;
    Envelope::from_value(value).ok()?.mensaje
}

// ═══════════════════════════════════════════════════════════
// Flows
// ═══════════════════════════════════════════════════════════

/// Authenticate and resolve the landing page.
pub fn login(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    store: &SessionStore,
    cedula: &str,
    contrasena: &str,
) -> Result<LoginOutcome, AuthError> {
    if cedula.is_empty() || contrasena.is_empty() {
        return Err(AuthError::CamposIncompletos);
    }

    let body = serde_json::to_value(LoginRequest { cedula, contrasena })
        .expect("login body serializes");
    let response = client.post(&endpoints.login(), &body).map_err(|e| match e {
        ApiError::Status { status: 401, .. } => AuthError::CredencialesInvalidas,
        ApiError::Status { status: 404, .. } => AuthError::UsuarioNoEncontrado,
        ApiError::Status { status, .. } if status >= 500 => AuthError::ErrorDelServidor,
        ApiError::Status { body, .. } => AuthError::Api(ApiError::Rejected(
            mensaje_de_cuerpo(&body).unwrap_or_else(|| "Error al iniciar sesión".to_string()),
        )),
        other => AuthError::Api(other),
    })?;

    // A 2xx without `mensaje` is still an auth failure.
    let token = Envelope::from_value(response)?
        .mensaje
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Rejected("Error al iniciar sesión".to_string()))?;

    // Persist immediately — the role lookup below may still fail.
    let mut session = Session::new(token, cedula);
    store.save(&session)?;
    tracing::info!("Sesión iniciada para cédula {cedula}");

    let rol = fetch_rol(client, endpoints, cedula).map_err(AuthError::VerificacionDeRol)?;
    let destination = destination_for_role(&rol);

    session.rol = Some(rol);
    store.save(&session)?;

    Ok(LoginOutcome { destination, session })
}

/// Role string for a cédula; empty when the backend omits `valor`.
fn fetch_rol(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    cedula: &str,
) -> Result<String, ApiError> {
    let response = client.get(&endpoints.rol_por_cedula(cedula))?;
    let envelope = Envelope::from_value(response)?;
    let rol = match envelope.valor {
        Some(Value::String(rol)) => rol,
        _ => String::new(),
    };
    Ok(rol)
}

/// Two-step physician registration: the Médico record first, then the
/// login account with role `medico`. The account step is only attempted
/// when the first call succeeds.
pub fn register_medico(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    form: &RegistroMedicoForm,
) -> Result<(), AuthError> {
    let required = [
        &form.cedula,
        &form.nombres,
        &form.apellidos,
        &form.especialidad,
        &form.telefono,
        &form.email,
        &form.direccion,
        &form.password,
    ];
    if required.iter().any(|f| f.trim().is_empty()) {
        return Err(AuthError::RegistroIncompleto);
    }

    let medico = crate::models::MedicoRegistro {
        cedula: form.cedula.clone(),
        nombres: form.nombres.clone(),
        apellidos: form.apellidos.clone(),
        especialidad: form.especialidad.clone(),
        telefono: form.telefono.clone(),
        email: form.email.clone(),
        direccion: form.direccion.clone(),
        fecha_ingreso: chrono::Utc::now().to_rfc3339(),
    };
    let body = serde_json::to_value(&medico).expect("medico body serializes");
    client
        .post(&endpoints.registrar_medico(), &body)
        .map_err(AuthError::RegistroMedico)?;

    let usuario = crate::models::UsuarioRegistro {
        cedula_usuario: form.cedula.clone(),
        nombre_usuario: format!("{} {}", form.nombres, form.apellidos),
        password_hash: form.password.clone(),
        activo: true,
        bloqueado_hasta: None,
        rol: "medico".to_string(),
    };
    let body = serde_json::to_value(&usuario).expect("usuario body serializes");
    client
        .post(&endpoints.registrar_usuario(), &body)
        .map_err(AuthError::RegistroUsuario)?;

    tracing::info!("Médico registrado: {}", form.cedula);
    Ok(())
}

/// Password recovery: the backend hands the password back in `valor`.
pub fn recover_password(
    client: &dyn ApiClient,
    endpoints: &Endpoints,
    cedula: &str,
) -> Result<String, AuthError> {
    if cedula.is_empty() {
        return Err(AuthError::RecuperacionFallida(
            "Por favor, ingresa la cédula.".to_string(),
        ));
    }

    let response = client.put_empty(&endpoints.recuperar_clave(cedula));
    let value = match response {
        Ok(value) => value,
        // The backend answers non-2xx but still ships a mensaje.
        Err(ApiError::Status { body, .. }) => {
            let msg = mensaje_de_cuerpo(&body)
                .unwrap_or_else(|| "No se pudo recuperar la contraseña.".to_string());
            return Err(AuthError::RecuperacionFallida(msg));
        }
        Err(_) => {
            return Err(AuthError::RecuperacionFallida(
                "Error al conectar con el servidor.".to_string(),
            ));
        }
    };

    let envelope = Envelope::from_value(value)?;
    match envelope.valor {
        Some(Value::String(clave)) if !clave.is_empty() => Ok(clave),
        _ => Err(AuthError::RecuperacionFallida(
            envelope
                .mensaje
                .unwrap_or_else(|| "No se pudo recuperar la contraseña.".to_string()),
        )),
    }
}

/// Destroy the persisted session.
pub fn logout(store: &SessionStore) -> Result<(), SessionStoreError> {
    tracing::info!("Sesión cerrada");
    store.clear()
}
