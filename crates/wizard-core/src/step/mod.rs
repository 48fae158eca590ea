//! Definiciones relacionadas a Steps.
//!
//! Un step es una unidad de la secuencia del wizard, identificada por
//! posición + nombre estable y dueña de la forma de su propio estado. Este
//! módulo define:
//! - `StepIdentifier`: clave `(posición, nombre)` usada para navegar y guardar.
//! - `StepComponent` / `ComponentRef` / `StepDefinition`: la declaración que
//!   escribe el implementador del wizard.
//! - `StepStatus` y `StepSummary`: anotación Previous/Current/Next para la vista.

pub mod definition;
pub mod identifier;
pub mod macros;
mod status;
mod summary;

pub use definition::{Capability, ComponentRef, StepComponent, StepDefinition, StepInfo};
pub use identifier::StepIdentifier;
pub use status::StepStatus;
pub use summary::StepSummary;
