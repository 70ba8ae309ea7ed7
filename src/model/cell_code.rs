use crate::model::marker::{ComethDirection, SoloonColor};

/// What a single goal-map cell asks us to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellCode {
    Polyanet,
    Soloon(SoloonColor),
    Cometh(ComethDirection),
    /// Blank cell, nothing to draw.
    Space,
    /// Anything the decoder does not know, kept verbatim for logging.
    Unrecognized(String),
}

impl CellCode {
    pub fn decode(raw: &str) -> CellCode {
        let code = raw.trim();

        if code.is_empty() || code == "SPACE" {
            return CellCode::Space;
        }

        if code == "POLYANET" {
            return CellCode::Polyanet;
        }

        // RED_SOLOON
        if let Some(color) = code.strip_suffix("_SOLOON") {
            return match color.parse() {
                Ok(color) => CellCode::Soloon(color),
                Err(_) => CellCode::Unrecognized(raw.to_string()),
            };
        }

        // UP_COMETH
        if let Some(direction) = code.strip_suffix("_COMETH") {
            return match direction.parse() {
                Ok(direction) => CellCode::Cometh(direction),
                Err(_) => CellCode::Unrecognized(raw.to_string()),
            };
        }

        CellCode::Unrecognized(raw.to_string())
    }

    pub fn encode(&self) -> String {
        match self {
            CellCode::Polyanet => "POLYANET".to_string(),
            CellCode::Soloon(color) => format!("{}_SOLOON", color.as_str().to_uppercase()),
            CellCode::Cometh(direction) => {
                format!("{}_COMETH", direction.as_str().to_uppercase())
            }
            CellCode::Space => "SPACE".to_string(),
            CellCode::Unrecognized(raw) => raw.clone(),
        }
    }

    pub fn is_drawable(&self) -> bool {
        matches!(
            self,
            CellCode::Polyanet | CellCode::Soloon(_) | CellCode::Cometh(_)
        )
    }
}
