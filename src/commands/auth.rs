//! Login, registration and recovery IPC commands.

use std::sync::Arc;

use tauri::State;

use crate::auth::{self, LoginOutcome, RegistroMedicoForm};
use crate::core_state::CoreState;

/// Authenticate and resolve the landing dashboard.
#[tauri::command]
pub fn login_usuario(
    cedula: String,
    contrasena: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<LoginOutcome, String> {
    let cedula = auth::sanitize_cedula(&cedula);
    auth::login(
        &state.client(),
        state.endpoints(),
        state.store(),
        &cedula,
        &contrasena,
    )
    .map_err(|e| e.to_string())
}

/// Destroy the persisted session.
#[tauri::command]
pub fn logout_usuario(state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    auth::logout(state.store()).map_err(|e| e.to_string())
}

/// Two-step physician self-registration.
#[tauri::command]
pub fn registrar_medico(
    form: RegistroMedicoForm,
    state: State<'_, Arc<CoreState>>,
) -> Result<(), String> {
    auth::register_medico(&state.client(), state.endpoints(), &form).map_err(|e| e.to_string())
}

/// Password recovery; the recovered password is shown to the user.
#[tauri::command]
pub fn recuperar_contrasena(
    cedula: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<String, String> {
    let cedula = auth::sanitize_cedula(&cedula);
    auth::recover_password(&state.client(), state.endpoints(), &cedula)
        .map_err(|e| e.to_string())
}
