use serde::{Deserialize, Serialize};

/// Appointment lifecycle: Pendiente → Programada → Completada, with
/// Cancelada reachable from Pendiente/Programada. The backend stores the
/// status as a free-form string; classification is by case-insensitive
/// substring so "Realizada" and "Agendada" land in the right bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoCita {
    Pendiente,
    Programada,
    Completada,
    Cancelada,
}

impl EstadoCita {
    /// Classify a raw backend status string, or `None` when unrecognized.
    pub fn classify(raw: &str) -> Option<Self> {
        let lower = raw.to_lowercase();
        if lower.contains("completada") || lower.contains("realizada") {
            Some(Self::Completada)
        } else if lower.contains("programada") || lower.contains("agendada") {
            Some(Self::Programada)
        } else if lower.contains("cancelada") {
            Some(Self::Cancelada)
        } else if lower.contains("pendiente") {
            Some(Self::Pendiente)
        } else {
            None
        }
    }

    /// Canonical display label for a raw status: classified name,
    /// the raw string when unrecognized, "Sin estado" when absent.
    pub fn label(raw: Option<&str>) -> String {
        match raw {
            None => "Sin estado".to_string(),
            Some(s) if s.is_empty() => "Sin estado".to_string(),
            Some(s) => match Self::classify(s) {
                Some(estado) => estado.as_str().to_string(),
                None => s.to_string(),
            },
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Programada => "Programada",
            Self::Completada => "Completada",
            Self::Cancelada => "Cancelada",
        }
    }
}

impl std::fmt::Display for EstadoCita {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
