//! Constantes del core.
//!
//! Las claves de metadata forman parte del contrato con la capa de render:
//! cambiarlas rompe las vistas existentes.

/// Separador entre posición y nombre en la forma codificada de un step.
pub const IDENTIFIER_SEPARATOR: &str = " - ";

/// Identificador de esquema de estado usado cuando el wizard no declara otro.
pub const DEFAULT_STATE_CLASS: &str = "wizard_core::state::StepState";

/// Lista de identificadores codificados del catálogo.
pub const KEY_ALL_STEP_NAMES: &str = "allStepNames";
/// Snapshot completo del store de estados.
pub const KEY_ALL_STEPS_STATE: &str = "allStepsState";
/// Esquema/clase de estado activo.
pub const KEY_STATE_CLASS_NAME: &str = "stateClassName";
/// Datos laterales (`activities`) reenviados a la vista.
pub const KEY_ACTIVITIES: &str = "activities";
/// Posición del step actual.
pub const KEY_CURRENT_STEP_NUMBER: &str = "currentStepNumber";

/// Clave añadida al `step_info` de cada resumen de step.
pub const KEY_STEP_NUMBER: &str = "step_number";
/// Clave con la etiqueta explícita de la declaración, si existe.
pub const KEY_LABEL: &str = "label";
