use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "MedAgenda";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "info,medagenda_lib=debug".to_string()
}

/// Get the application data directory
/// ~/MedAgenda/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("MedAgenda")
}

/// Path of the persisted session file.
///
/// One typed file replaces the browser's scattered localStorage keys
/// (token, auth flag, user blob, cached name, cached cédula).
pub fn session_file() -> PathBuf {
    app_data_dir().join("session.json")
}

// ═══════════════════════════════════════════════════════════
// Endpoints — backend URL table
// ═══════════════════════════════════════════════════════════

/// Default base of the main clinic API.
const DEFAULT_API_BASE: &str = "http://localhost:3000/api";
/// Administrative staff live on their own service.
const DEFAULT_ADMIN_BASE: &str = "http://localhost:7008/api/Administrativos";
/// Treatments are registered against a third service.
const DEFAULT_TRATAMIENTOS_BASE: &str = "http://localhost:7003/api";

/// Full URL table for every backend the front end talks to.
///
/// The deployment splits the API across three hosts/ports; each base is
/// overridable via environment so a dev instance can point anywhere.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
    admin_base: String,
    tratamientos_base: String,
}

impl Endpoints {
    pub fn new(base: &str, admin_base: &str, tratamientos_base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            admin_base: admin_base.trim_end_matches('/').to_string(),
            tratamientos_base: tratamientos_base.trim_end_matches('/').to_string(),
        }
    }

    /// Read bases from `MEDAGENDA_API_URL`, `MEDAGENDA_ADMIN_API_URL` and
    /// `MEDAGENDA_TRATAMIENTOS_API_URL`, with local defaults.
    pub fn from_env() -> Self {
        let base = std::env::var("MEDAGENDA_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let admin = std::env::var("MEDAGENDA_ADMIN_API_URL")
            .unwrap_or_else(|_| DEFAULT_ADMIN_BASE.to_string());
        let tratamientos = std::env::var("MEDAGENDA_TRATAMIENTOS_API_URL")
            .unwrap_or_else(|_| DEFAULT_TRATAMIENTOS_BASE.to_string());
        Self::new(&base, &admin, &tratamientos)
    }

    // ── Usuarios ────────────────────────────────────────────

    pub fn login(&self) -> String {
        format!("{}/Usuarios/Login", self.base)
    }

    pub fn rol_por_cedula(&self, cedula: &str) -> String {
        format!("{}/Usuarios/ObtenerRolxCedula/{cedula}", self.base)
    }

    pub fn recuperar_clave(&self, cedula: &str) -> String {
        format!("{}/Usuarios/ObtenerNuevaClave/{cedula}", self.base)
    }

    pub fn listar_usuarios(&self) -> String {
        format!("{}/Usuarios/ListarTodosUsuarios", self.base)
    }

    pub fn registrar_usuario(&self) -> String {
        format!("{}/Usuarios/RegistrarUsuario", self.base)
    }

    pub fn actualizar_usuario(&self) -> String {
        format!("{}/Usuarios/ActualizarUsuario", self.base)
    }

    // ── Pacientes ───────────────────────────────────────────

    pub fn listar_pacientes(&self) -> String {
        format!("{}/Pacientes/ListarTodosPacientes", self.base)
    }

    pub fn registrar_paciente(&self) -> String {
        format!("{}/Pacientes/RegistrarPaciente", self.base)
    }

    pub fn actualizar_paciente(&self) -> String {
        format!("{}/Pacientes/ActualizarPaciente", self.base)
    }

    // ── Medicos ─────────────────────────────────────────────

    pub fn listar_medicos(&self) -> String {
        format!("{}/Medicos/ListarTodosMedicos", self.base)
    }

    /// Backend route is lowercase-m "Registrarmedico".
    pub fn registrar_medico(&self) -> String {
        format!("{}/Medicos/Registrarmedico", self.base)
    }

    pub fn actualizar_medico(&self) -> String {
        format!("{}/Medicos/ActualizarMedico", self.base)
    }

    // ── Citas ───────────────────────────────────────────────

    pub fn listar_citas(&self) -> String {
        format!("{}/Citas/ListarTodasCitas", self.base)
    }

    pub fn citas_por_cedula(&self, cedula: &str) -> String {
        format!("{}/Citas/ObtenerCitasxCedula/{cedula}", self.base)
    }

    pub fn registrar_cita(&self) -> String {
        format!("{}/Citas/RegistrarCita", self.base)
    }

    pub fn actualizar_cita(&self) -> String {
        format!("{}/Citas/ActualizarCita", self.base)
    }

    pub fn actualizar_estado_cita(&self, id_cita: i64) -> String {
        format!("{}/Citas/ActualizarEstadoCitaxId/{id_cita}", self.base)
    }

    // ── Consultas ───────────────────────────────────────────

    /// Backend route is lowercase-c "ListarTodasconsultas".
    pub fn listar_consultas(&self) -> String {
        format!("{}/Consultas/ListarTodasconsultas", self.base)
    }

    pub fn registrar_consulta(&self) -> String {
        format!("{}/Consultas/RegistrarConsulta", self.base)
    }

    pub fn actualizar_consulta(&self) -> String {
        format!("{}/Consultas/ActualizarConsulta", self.base)
    }

    // ── Tratamientos ────────────────────────────────────────

    pub fn tratamientos_por_consulta(&self, id_consulta: i64) -> String {
        format!(
            "{}/Tratamientos/ObtenerTratamientosxIdConsulta/{id_consulta}",
            self.base
        )
    }

    pub fn registrar_tratamiento(&self) -> String {
        format!("{}/Tratamientos/RegistrarTratamiento", self.tratamientos_base)
    }

    // ── Notificaciones ──────────────────────────────────────

    pub fn listar_notificaciones(&self) -> String {
        format!("{}/Notificaciones/ListarTodasNotificaciones", self.base)
    }

    pub fn registrar_notificacion(&self) -> String {
        format!("{}/Notificaciones/RegistrarNotificacion", self.base)
    }

    // ── Administrativos (separate service) ──────────────────

    pub fn listar_administrativos(&self) -> String {
        format!("{}/ListarTodosAdministrativos", self.admin_base)
    }

    pub fn registrar_administrativo(&self) -> String {
        format!("{}/RegistrarAdministrativo", self.admin_base)
    }

    // ── Pagos ───────────────────────────────────────────────

    pub fn listar_pagos(&self) -> String {
        format!("{}/Pagos/ListarTodosPagos", self.base)
    }

    pub fn registrar_pago(&self) -> String {
        format!("{}/Pagos/RegistrarPago", self.base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> Endpoints {
        Endpoints::new(
            "http://clinic.test/api",
            "http://clinic.test:7008/api/Administrativos",
            "http://clinic.test:7003/api",
        )
    }

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("MedAgenda"));
    }

    #[test]
    fn session_file_under_app_data() {
        let file = session_file();
        assert!(file.starts_with(app_data_dir()));
        assert!(file.ends_with("session.json"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn endpoints_trim_trailing_slash() {
        let e = Endpoints::new("http://a/api/", "http://b/", "http://c/");
        assert_eq!(e.login(), "http://a/api/Usuarios/Login");
        assert_eq!(e.listar_administrativos(), "http://b/ListarTodosAdministrativos");
    }

    #[test]
    fn cedula_routes_embed_the_cedula() {
        let e = fixed();
        assert_eq!(
            e.rol_por_cedula("1234567890"),
            "http://clinic.test/api/Usuarios/ObtenerRolxCedula/1234567890"
        );
        assert_eq!(
            e.citas_por_cedula("0912345678"),
            "http://clinic.test/api/Citas/ObtenerCitasxCedula/0912345678"
        );
    }

    #[test]
    fn tratamiento_registration_uses_its_own_service() {
        let e = fixed();
        assert!(e.registrar_tratamiento().starts_with("http://clinic.test:7003/api"));
        assert!(e.tratamientos_por_consulta(7).starts_with("http://clinic.test/api"));
    }

    #[test]
    fn administrativos_use_their_own_service() {
        let e = fixed();
        assert!(e.registrar_administrativo().starts_with("http://clinic.test:7008"));
    }

    #[test]
    fn backend_route_casing_is_preserved() {
        let e = fixed();
        assert!(e.registrar_medico().ends_with("/Medicos/Registrarmedico"));
        assert!(e.listar_consultas().ends_with("/Consultas/ListarTodasconsultas"));
    }
}
