pub mod administrativos;
pub mod api;
pub mod auth;
pub mod citas;
pub mod commands;
pub mod config;
pub mod consultas;
pub mod core_state;
pub mod dashboard;
pub mod decode;
pub mod medicos;
pub mod models;
pub mod notificaciones;
pub mod pacientes;
pub mod pagos;
pub mod routes;
pub mod session;
pub mod stats;
pub mod tratamientos;
pub mod usuarios;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("MedAgenda starting v{}", config::APP_VERSION);

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(Arc::new(core_state::CoreState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::get_sesion,
            commands::resolver_vista,
            commands::auth::login_usuario,
            commands::auth::logout_usuario,
            commands::auth::registrar_medico,
            commands::auth::recuperar_contrasena,
            commands::dashboard::get_dashboard,
            commands::citas::listar_citas,
            commands::citas::listar_todas_citas,
            commands::citas::listar_citas_admin,
            commands::citas::citas_agrupadas,
            commands::citas::pagina_citas,
            commands::citas::registrar_cita,
            commands::citas::actualizar_cita,
            commands::citas::cancelar_cita,
            commands::pacientes::listar_pacientes,
            commands::pacientes::pacientes_recientes,
            commands::pacientes::registrar_paciente,
            commands::pacientes::actualizar_paciente,
            commands::pacientes::citas_de_paciente,
            commands::consultas::listar_consultas,
            commands::consultas::consultas_con_cita,
            commands::consultas::citas_para_consulta,
            commands::consultas::registrar_consulta,
            commands::consultas::actualizar_consulta,
            commands::consultas::marcar_acepto_tratamiento,
            commands::diagnostico::listar_tratamientos,
            commands::diagnostico::registrar_tratamiento,
            commands::notificaciones::listar_notificaciones,
            commands::notificaciones::registrar_notificacion,
            commands::notificaciones::buscar_notificaciones,
            commands::administrativos::listar_administrativos,
            commands::administrativos::registrar_administrativo,
            commands::usuarios::listar_usuarios,
            commands::usuarios::registrar_usuario,
            commands::usuarios::actualizar_usuario,
            commands::usuarios::listar_medicos,
            commands::usuarios::registrar_medico_admin,
            commands::usuarios::actualizar_medico,
            commands::pagos::listar_pagos,
            commands::pagos::pagos_de_paciente,
            commands::pagos::registrar_pago,
            commands::stats::get_estadisticas,
        ])
        .run(tauri::generate_context!())
        .expect("error while running MedAgenda");
}
