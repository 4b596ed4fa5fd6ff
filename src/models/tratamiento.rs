use serde::{Deserialize, Serialize};

/// Treatment plan attached to a consultation by numeric id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tratamiento {
    pub id_tratamiento: i64,
    pub id_consulta: i64,
    pub descripcion: Option<String>,
    pub costo: Option<f64>,
    pub sesiones: Option<i64>,
    pub notas: Option<String>,
}

/// Registration body. `idTratamiento` is 0 — the backend autogenerates it;
/// the cost is taken from the consultation's base price, not user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TratamientoRegistro {
    pub id_tratamiento: i64,
    pub id_consulta: i64,
    pub descripcion: String,
    pub costo: f64,
    pub sesiones: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registro_serializes_camel_case() {
        let dto = TratamientoRegistro {
            id_tratamiento: 0,
            id_consulta: 12,
            descripcion: "Fisioterapia".into(),
            costo: 30.0,
            sesiones: 5,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["idTratamiento"], 0);
        assert_eq!(json["idConsulta"], 12);
        assert_eq!(json["sesiones"], 5);
    }
}
