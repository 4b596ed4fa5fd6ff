//! Patient statistics: monthly consultation series and common motives,
//! clinic-wide or narrowed to one patient.

use serde::Serialize;

use crate::models::{fecha_dia, Consulta};
use chrono::Datelike;

/// Month labels for the charts.
pub const MESES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// One bar of the monthly series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MesConteo {
    pub mes: &'static str,
    pub consultas: u32,
}

/// One slice of the motives chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotivoConteo {
    pub name: String,
    pub value: u32,
}

/// Twelve buckets, January first; dateless records are skipped.
pub fn consultas_por_mes(consultas: &[Consulta]) -> Vec<MesConteo> {
    let mut cuentas = [0u32; 12];
    for consulta in consultas {
        let Some(fecha) = consulta.fecha.as_deref().and_then(fecha_dia) else {
            continue;
        };
        cuentas[fecha.month0() as usize] += 1;
    }
    MESES
        .iter()
        .copied()
        .zip(cuentas)
        .map(|(mes, consultas)| MesConteo { mes, consultas })
        .collect()
}

/// Motive frequencies in first-seen order; blank motives are skipped.
pub fn motivos_comunes(consultas: &[Consulta]) -> Vec<MotivoConteo> {
    let mut orden: Vec<MotivoConteo> = Vec::new();
    for consulta in consultas {
        let Some(motivo) = consulta.motivo.as_deref().filter(|m| !m.is_empty()) else {
            continue;
        };
        match orden.iter_mut().find(|m| m.name == motivo) {
            Some(existente) => existente.value += 1,
            None => orden.push(MotivoConteo { name: motivo.to_string(), value: 1 }),
        }
    }
    orden
}

/// Consultations of one patient.
pub fn consultas_de_paciente(consultas: &[Consulta], cedula: &str) -> Vec<Consulta> {
    consultas
        .iter()
        .filter(|c| c.cedula_paciente.as_deref() == Some(cedula))
        .cloned()
        .collect()
}

/// Everything the statistics page renders in one pass. With a selected
/// patient the series narrow to that patient; the evolution series is the
/// narrowed monthly curve.
#[derive(Debug, Clone, Serialize)]
pub struct Estadisticas {
    pub consultas_por_mes: Vec<MesConteo>,
    pub motivos_comunes: Vec<MotivoConteo>,
    pub evolucion: Vec<MesConteo>,
    pub total_consultas: usize,
}

pub fn estadisticas(consultas: &[Consulta], paciente: Option<&str>) -> Estadisticas {
    let filtradas: Vec<Consulta> = match paciente {
        Some(cedula) => consultas_de_paciente(consultas, cedula),
        None => consultas.to_vec(),
    };
    Estadisticas {
        consultas_por_mes: consultas_por_mes(&filtradas),
        motivos_comunes: motivos_comunes(&filtradas),
        evolucion: consultas_por_mes(&filtradas),
        total_consultas: filtradas.len(),
    }
}
