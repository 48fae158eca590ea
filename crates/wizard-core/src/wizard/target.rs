use std::fmt;

use crate::catalog::StepCatalog;
use crate::errors::WizardError;
use crate::registry::ComponentRegistry;
use crate::step::{ComponentRef, StepIdentifier};

/// Forma en que un llamador señala un step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepRef {
    /// Nombre registrado (`"billing"`).
    Name(String),
    /// Posición 1-based ("mostrar step N").
    Position(usize),
    /// Identificador completo; debe coincidir en posición y nombre.
    Identifier(StepIdentifier),
    /// Tipo del componente, resuelto a su nombre vía registry.
    Component(ComponentRef),
}

impl StepRef {
    /// Resuelve contra `catalog`. Falla con `StepNotFound` si el step no forma
    /// parte del catálogo actual.
    pub fn resolve<'c, R>(&self, catalog: &'c StepCatalog, registry: &R) -> Result<&'c StepIdentifier, WizardError>
        where R: ComponentRegistry + ?Sized
    {
        let found = match self {
            Self::Name(name) => catalog.find_by_name(name),
            Self::Position(position) => catalog.find_by_position(*position),
            Self::Identifier(identifier) => catalog.find_by_name(identifier.name()).filter(|id| *id == identifier),
            Self::Component(component) => registry.resolve_name(component)
                                                  .and_then(|name| catalog.find_by_name(&name)),
        };
        found.ok_or_else(|| WizardError::StepNotFound { wizard: catalog.wizard().to_string(),
                                                        step: self.to_string() })
    }
}

impl fmt::Display for StepRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Position(position) => write!(f, "#{position}"),
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Component(component) => f.write_str(component.type_name()),
        }
    }
}

/// `"2 - billing"` se interpreta como identificador; cualquier otra cadena
/// como nombre.
impl From<&str> for StepRef {
    fn from(s: &str) -> Self {
        match StepIdentifier::parse(s) {
            Ok(identifier) => Self::Identifier(identifier),
            Err(_) => Self::Name(s.to_string()),
        }
    }
}

impl From<String> for StepRef {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for StepRef {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<usize> for StepRef {
    fn from(position: usize) -> Self {
        Self::Position(position)
    }
}

impl From<StepIdentifier> for StepRef {
    fn from(identifier: StepIdentifier) -> Self {
        Self::Identifier(identifier)
    }
}

impl From<&StepIdentifier> for StepRef {
    fn from(identifier: &StepIdentifier) -> Self {
        Self::Identifier(identifier.clone())
    }
}

impl From<ComponentRef> for StepRef {
    fn from(component: ComponentRef) -> Self {
        Self::Component(component)
    }
}
