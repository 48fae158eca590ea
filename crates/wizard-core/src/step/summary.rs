use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{StepIdentifier, StepInfo, StepStatus};
use crate::constants::{KEY_LABEL, KEY_STEP_NUMBER};

/// Resumen de un step para la vista: identificador, metadata y estado relativo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSummary {
    pub identifier: StepIdentifier,
    pub info: StepInfo,
    pub status: StepStatus,
}

impl StepSummary {
    /// Construye el resumen enriqueciendo `info` con `step_number` (y `label`
    /// si la declaración tenía una). Las claves del core ganan a las del step.
    pub fn new(identifier: StepIdentifier,
               mut info: StepInfo,
               label: Option<&str>,
               current_step_number: usize)
               -> Self {
        info.insert(KEY_STEP_NUMBER.to_string(), Value::from(identifier.position()));
        if let Some(label) = label {
            info.insert(KEY_LABEL.to_string(), Value::from(label));
        }
        let status = StepStatus::for_position(identifier.position(), current_step_number);
        Self { identifier,
               info,
               status }
    }
}
