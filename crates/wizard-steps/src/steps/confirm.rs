//! ConfirmStep: resumen final antes de enviar.
//!
//! No tiene formulario propio; la vista usa `allStepsState` del snapshot para
//! mostrar lo introducido en los steps anteriores.

use wizard_core::step_component;

step_component!(pub ConfirmStep { "title": "Confirmación" });
