//! Wizard: declaración, estado mutable y controlador de navegación.
//!
//! - `Wizard`: lo que escribe el implementador (nombre + lista de steps).
//! - `WizardState`: todo lo que un host debe persistir entre interacciones.
//! - `WizardController`: navegación previous/next/show y snapshot para la vista.
//! - `WizardBuilder`: declaración ergonómica sin escribir un tipo propio.

pub mod builder;
pub mod controller;
mod snapshot;
mod state;
mod target;

pub use builder::{DeclaredWizard, WizardBuilder};
pub use controller::WizardController;
pub use snapshot::RenderSnapshot;
pub use state::WizardState;
pub use target::StepRef;

use crate::constants::DEFAULT_STATE_CLASS;
use crate::state::StepStateStore;
use crate::step::StepDefinition;

/// Declaración de un wizard.
pub trait Wizard {
    /// Identidad del wizard; aparece en todos los errores.
    fn name(&self) -> &str;

    /// Steps en el orden en que se recorren.
    fn steps(&self) -> Vec<StepDefinition>;

    /// Estado inicial usado por `mount` cuando el host no pasa uno.
    fn initial_state(&self) -> Option<StepStateStore> {
        None
    }

    /// Identificador del esquema de estado expuesto a la vista.
    fn state_class(&self) -> &str {
        DEFAULT_STATE_CLASS
    }
}
