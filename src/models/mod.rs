pub mod administrativo;
pub mod cita;
pub mod consulta;
pub mod enums;
pub mod medico;
pub mod notificacion;
pub mod paciente;
pub mod pago;
pub mod tratamiento;
pub mod usuario;

pub use administrativo::{Administrativo, AdministrativoRegistro};
pub use cita::{Cita, CitaUpsert};
pub use consulta::{Consulta, ConsultaRegistro};
pub use enums::EstadoCita;
pub use medico::{Medico, MedicoRegistro, MedicoUpsert};
pub use notificacion::{Notificacion, NotificacionRegistro};
pub use paciente::{Paciente, PacienteUpsert};
pub use pago::{Pago, PagoRegistro};
pub use tratamiento::{Tratamiento, TratamientoRegistro};
pub use usuario::{Usuario, UsuarioActualizacion, UsuarioRegistro, UsuarioUpsert};

use chrono::NaiveDate;

/// First-present-field name normalization shared by people-shaped records:
/// single `nombre`, else `nombres apellidos` concatenated, else `None`.
pub(crate) fn full_name(
    nombre: Option<&str>,
    nombres: Option<&str>,
    apellidos: Option<&str>,
) -> Option<String> {
    if let Some(nombre) = nombre.filter(|n| !n.trim().is_empty()) {
        return Some(nombre.trim().to_string());
    }
    let joined = format!(
        "{} {}",
        nombres.unwrap_or_default().trim(),
        apellidos.unwrap_or_default().trim()
    );
    let joined = joined.trim();
    if joined.is_empty() {
        None
    } else {
        Some(joined.to_string())
    }
}

/// Day part of a backend date string (`2026-05-01T10:00:00` or bare date).
pub(crate) fn fecha_dia(raw: &str) -> Option<NaiveDate> {
    let day = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
