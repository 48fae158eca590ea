use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::StepStateStore;
use crate::step::StepIdentifier;

/// Estado mutable completo de una instancia de wizard.
///
/// Es la unidad que un host debe serializar y restaurar tal cual entre
/// interacciones. El core no ofrece durabilidad propia.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardState {
    /// `None` hasta la primera navegación.
    pub current_step: Option<StepIdentifier>,
    pub current_step_number: usize,
    pub all_step_state: StepStateStore,
    /// Datos laterales reenviados a la vista sin interpretar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Value>,
}

impl WizardState {
    pub fn is_started(&self) -> bool {
        self.current_step.is_some()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self { current_step: None,
               current_step_number: 1,
               all_step_state: StepStateStore::new(),
               activities: None }
    }
}
