use thiserror::Error;
use wizard_core::WizardError;

/// Error de la aplicación anfitriona (sesión, CLI y configuración).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error del wizard: {0}")]
    Wizard(#[from] WizardError),
    #[error("Acción inválida: {0}")]
    Action(#[from] serde_json::Error),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
}

impl AppError {
    /// Errores que invalidan la declaración del wizard: la sesión no puede
    /// continuar. El resto (p.ej. `NoNextStep`) se reporta y se sigue.
    pub fn is_fatal(&self) -> bool {
        match self {
            AppError::Wizard(e) => e.is_declaration_error(),
            AppError::Config(_) => true,
            AppError::Action(_) | AppError::Io(_) => false,
        }
    }

    /// Código de salida del binario para este error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::Wizard(_) => 3,
            AppError::Action(_) => 4,
            AppError::Io(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_variant_from() {
        let err: AppError = WizardError::NoStepsDefined { wizard: "vacío".into() }.into();
        assert!(err.to_string().starts_with("Error del wizard: "));
        assert!(err.is_fatal());
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_navigation_errors_are_recoverable() {
        let err: AppError = WizardError::NoNextStep { wizard: "w".into(),
                                                      current: "2 - b".into() }.into();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_io_variant_from() {
        let io_err = std::io::Error::other("falló IO");
        let err: AppError = io_err.into();
        assert_eq!(err.to_string(), "Error en IO: falló IO");
    }

    #[test]
    fn test_config_variant_format() {
        let err = AppError::Config("mala configuración".into());
        assert_eq!(err.to_string(), "Error de configuración: mala configuración");
        assert_eq!(err.exit_code(), 2);
    }
}
