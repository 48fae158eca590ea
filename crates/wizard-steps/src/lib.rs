//! wizard-steps: componentes de step concretos y el wizard de alta de ejemplo.
//!
//! Este crate provee:
//! - `forms`: formularios tipados y el trait `StepStateEncoder` para
//!   convertirlos desde/hacia el payload opaco (`StepState`) del core.
//! - `steps`: `AccountStep`, `ProfileStep` y `ConfirmStep`.
//! - `signup`: `SignupWizard` (declaración) y `signup_registry` (alias).
//!
//! El core sólo conoce payloads JSON opacos; la forma de cada payload se
//! decide aquí.

pub mod forms;
pub mod signup;
pub mod steps;

pub use forms::{AccountForm, ProfileForm, StepStateEncoder};
pub use signup::{signup_registry, Banner, SignupWizard, SIGNUP_WIZARD};
pub use steps::{AccountStep, ConfirmStep, ProfileStep};
