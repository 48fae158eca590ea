use serde::{Deserialize, Serialize};

use crate::state::StepState;
use crate::step::{StepIdentifier, StepSummary};

/// Lo que el core entrega a la función de render. Cómo se muestra es asunto
/// del host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSnapshot {
    /// Payload del step actual con la metadata del wizard encima.
    pub current_step_state: StepState,
    /// Nombre (sin posición) del step actual.
    pub current_step_name: String,
    /// Identificadores del catálogo en orden.
    pub steps: Vec<StepIdentifier>,
    /// Steps anotados Previous/Current/Next.
    pub step_summaries: Vec<StepSummary>,
}

impl RenderSnapshot {
    /// Resumen marcado como `Current`.
    pub fn current_summary(&self) -> Option<&StepSummary> {
        self.step_summaries.iter().find(|s| s.status.is_current())
    }
}
