//! Errores del core del wizard.
//!
//! Todas las variantes llevan la identidad del wizard y el step (o tipo)
//! ofensivo. Ninguna se reintenta internamente: se devuelven al llamador tal
//! cual.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Motivo por el que una declaración de step no es válida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidStepReason {
    /// El componente declarado no implementa la capacidad de step.
    NotAStepComponent,
    /// El componente no tiene un nombre registrado en el registry.
    NotRegistered,
}

impl std::fmt::Display for InvalidStepReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAStepComponent => f.write_str("does not implement the step component capability"),
            Self::NotRegistered => f.write_str("is not registered with the component registry"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum WizardError {
    #[error("wizard `{wizard}`: step `{component}` {reason}")]
    InvalidStepDefinition { wizard: String, component: String, reason: InvalidStepReason },
    #[error("wizard `{wizard}` does not declare any steps")]
    NoStepsDefined { wizard: String },
    #[error("wizard `{wizard}`: there is no step after `{current}`")]
    NoNextStep { wizard: String, current: String },
    #[error("wizard `{wizard}`: there is no step before `{current}`")]
    NoPreviousStep { wizard: String, current: String },
    #[error("wizard `{wizard}`: step `{step}` does not exist")]
    StepNotFound { wizard: String, step: String },
}

impl WizardError {
    /// Nombre del wizard que originó el error.
    pub fn wizard(&self) -> &str {
        match self {
            Self::InvalidStepDefinition { wizard, .. }
            | Self::NoStepsDefined { wizard }
            | Self::NoNextStep { wizard, .. }
            | Self::NoPreviousStep { wizard, .. }
            | Self::StepNotFound { wizard, .. } => wizard,
        }
    }

    /// Errores de declaración: indican un bug del programador, no input del
    /// usuario.
    pub fn is_declaration_error(&self) -> bool {
        matches!(self, Self::InvalidStepDefinition { .. } | Self::NoStepsDefined { .. })
    }
}

/// Fallo al parsear un identificador codificado como `"<posición> - <nombre>"`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum IdentifierParseError {
    #[error("missing ` - ` separator in `{0}`")]
    MissingSeparator(String),
    #[error("invalid step position in `{0}`")]
    InvalidPosition(String),
    #[error("empty step name in `{0}`")]
    EmptyName(String),
}
