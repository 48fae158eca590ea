//! StepWizard
//!
//! Capa anfitriona sobre `wizard-core`:
//! - Expone `config` para leer la configuración del entorno (.env).
//! - Expone `errors` con el error de aplicación (`AppError`).
//! - Expone `session` con la frontera de acciones JSON y la sesión de usuario.
//!
//! Puede usarse desde `main.rs` o por otros anfitriones.

pub mod config;
pub mod errors;
pub mod session;

pub use config::AppConfig;
pub use errors::AppError;
pub use session::{ActionTarget, Session, WizardAction};
