//! Identificador de step: posición ordinal + nombre estable.
//!
//! Internamente es un valor de dos campos. La forma codificada
//! `"<posición> - <nombre>"` sólo se usa en la frontera de render/display y
//! al aceptar destinos escritos por el host.
//!
//! Restricción documentada (no verificada): un nombre no debería empezar con
//! un patrón `"<dígitos> - "`, ya que la forma codificada resultaría ambigua
//! para un lector humano. El parseo sigue siendo determinista porque siempre
//! divide en el primer separador.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::IDENTIFIER_SEPARATOR;
use crate::errors::IdentifierParseError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepIdentifier {
    position: usize,
    name: String,
}

impl StepIdentifier {
    pub fn new(position: usize, name: impl Into<String>) -> Self {
        Self { position,
               name: name.into() }
    }

    /// Posición 1-based dentro del catálogo.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Nombre registrado del componente del step.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Forma codificada `"<posición> - <nombre>"`.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub fn parse(encoded: &str) -> Result<Self, IdentifierParseError> {
        encoded.parse()
    }
}

impl fmt::Display for StepIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.position, IDENTIFIER_SEPARATOR, self.name)
    }
}

impl FromStr for StepIdentifier {
    type Err = IdentifierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, name) = s.split_once(IDENTIFIER_SEPARATOR)
                            .ok_or_else(|| IdentifierParseError::MissingSeparator(s.to_string()))?;
        let position = head.trim()
                           .parse::<usize>()
                           .ok()
                           .filter(|p| *p >= 1)
                           .ok_or_else(|| IdentifierParseError::InvalidPosition(s.to_string()))?;
        if name.is_empty() {
            return Err(IdentifierParseError::EmptyName(s.to_string()));
        }
        Ok(Self::new(position, name))
    }
}

impl PartialOrd for StepIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Orden total por posición; el nombre sólo desempata (catálogos bien formados
// nunca repiten posición).
impl Ord for StepIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position
            .cmp(&other.position)
            .then_with(|| self.name.cmp(&other.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_position_and_name() {
        let id = StepIdentifier::new(2, "billing-step");
        assert_eq!(id.encode(), "2 - billing-step");
    }

    #[test]
    fn parse_splits_on_first_separator() {
        let id: StepIdentifier = "3 - review - final".parse().unwrap();
        assert_eq!(id.position(), 3);
        assert_eq!(id.name(), "review - final");
        assert_eq!(id.encode(), "3 - review - final");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(StepIdentifier::parse("billing"),
                   Err(IdentifierParseError::MissingSeparator("billing".into())));
        assert_eq!(StepIdentifier::parse("x - billing"),
                   Err(IdentifierParseError::InvalidPosition("x - billing".into())));
        assert_eq!(StepIdentifier::parse("0 - billing"),
                   Err(IdentifierParseError::InvalidPosition("0 - billing".into())));
        assert_eq!(StepIdentifier::parse("1 - "), Err(IdentifierParseError::EmptyName("1 - ".into())));
    }

    #[test]
    fn ordering_follows_position() {
        let mut ids = vec![StepIdentifier::new(3, "a"), StepIdentifier::new(1, "z"), StepIdentifier::new(2, "m")];
        ids.sort();
        let positions: Vec<usize> = ids.iter().map(StepIdentifier::position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
