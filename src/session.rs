//! Frontera de acciones entre el anfitrión y el controlador.
//!
//! Cada interacción del usuario llega como una `WizardAction` serializada
//! (JSON con etiqueta `action`). La sesión la aplica sobre el
//! `WizardController` y devuelve el `RenderSnapshot` resultante.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wizard_core::{ComponentRegistry, RenderSnapshot, StepRef, StepState, Wizard, WizardController, WizardState};

use crate::errors::AppError;

/// Destino de `show_step` tal y como llega por el canal de acciones:
/// una posición numérica o un texto (nombre o `"N - nombre"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionTarget {
    Position(usize),
    Text(String),
}

impl From<ActionTarget> for StepRef {
    fn from(target: ActionTarget) -> Self {
        match target {
            ActionTarget::Position(p) => StepRef::from(p),
            ActionTarget::Text(s) => StepRef::from(s),
        }
    }
}

/// Acción de usuario. Todas llevan el estado saliente del step visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WizardAction {
    PreviousStep {
        #[serde(default)]
        state: StepState,
    },
    NextStep {
        #[serde(default)]
        state: StepState,
    },
    ShowStep {
        step: ActionTarget,
        #[serde(default)]
        state: StepState,
    },
}

impl WizardAction {
    pub fn kind(&self) -> &'static str {
        match self {
            WizardAction::PreviousStep { .. } => "previous_step",
            WizardAction::NextStep { .. } => "next_step",
            WizardAction::ShowStep { .. } => "show_step",
        }
    }
}

/// Sesión de un usuario sobre un wizard concreto.
pub struct Session<W, R>
    where W: Wizard,
          R: ComponentRegistry
{
    id: Uuid,
    controller: WizardController<W, R>,
}

impl<W, R> Session<W, R>
    where W: Wizard,
          R: ComponentRegistry
{
    /// Valida la declaración y monta el wizard (opcionalmente en `start`).
    pub fn open(wizard: W, registry: R, start: Option<StepRef>) -> Result<Self, AppError> {
        let mut controller = WizardController::try_new(wizard, registry)?;
        controller.mount(start, None)?;
        let id = Uuid::new_v4();
        info!("[session {id}] abierta en {:?}", controller.current_step_name());
        Ok(Self { id,
                  controller })
    }

    /// Reanuda una sesión a partir del estado persistido por el anfitrión.
    pub fn resume(id: Uuid, wizard: W, registry: R, state: WizardState) -> Result<Self, AppError> {
        let controller = WizardController::restore(wizard, registry, state)?;
        info!("[session {id}] reanudada en {:?}", controller.current_step_name());
        Ok(Self { id,
                  controller })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn controller(&self) -> &WizardController<W, R> {
        &self.controller
    }

    /// Estado a persistir entre peticiones.
    pub fn state(&self) -> &WizardState {
        self.controller.state()
    }

    pub fn into_state(self) -> WizardState {
        self.controller.into_state()
    }

    /// Aplica una acción y devuelve el snapshot resultante. Si la acción
    /// falla, el error se propaga y el puntero del wizard no se mueve.
    pub fn apply(&mut self, action: WizardAction) -> Result<RenderSnapshot, AppError> {
        let kind = action.kind();
        let outcome = match action {
            WizardAction::PreviousStep { state } => self.controller.previous_step(state),
            WizardAction::NextStep { state } => self.controller.next_step(state),
            WizardAction::ShowStep { step, state } => self.controller.show_step(step, state),
        };
        if let Err(e) = outcome {
            warn!("[session {}] {kind} rechazada: {e}", self.id);
            return Err(e.into());
        }
        self.render()
    }

    /// Decodifica una acción JSON y la aplica.
    pub fn apply_json(&mut self, raw: &str) -> Result<RenderSnapshot, AppError> {
        let action: WizardAction = serde_json::from_str(raw)?;
        self.apply(action)
    }

    pub fn render(&self) -> Result<RenderSnapshot, AppError> {
        Ok(self.controller.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn actions_decode_from_tagged_json() {
        let a: WizardAction = serde_json::from_value(json!({"action": "next_step", "state": {"x": 1}})).unwrap();
        assert_eq!(a.kind(), "next_step");

        let a: WizardAction = serde_json::from_value(json!({"action": "previous_step"})).unwrap();
        assert_eq!(a, WizardAction::PreviousStep { state: StepState::new() });

        let a: WizardAction = serde_json::from_value(json!({"action": "show_step", "step": 3})).unwrap();
        assert!(matches!(a, WizardAction::ShowStep { step: ActionTarget::Position(3), .. }));

        let a: WizardAction = serde_json::from_value(json!({"action": "show_step", "step": "2 - b"})).unwrap();
        assert!(matches!(a, WizardAction::ShowStep { step: ActionTarget::Text(ref s), .. } if s == "2 - b"));
    }

    #[test]
    fn unknown_action_is_rejected() {
        let r: Result<WizardAction, _> = serde_json::from_value(json!({"action": "jump"}));
        assert!(r.is_err());
    }

    #[test]
    fn text_targets_become_identifiers_or_names() {
        let by_id: StepRef = ActionTarget::Text("2 - b".into()).into();
        assert!(matches!(by_id, StepRef::Identifier(_)));
        let by_name: StepRef = ActionTarget::Text("b".into()).into();
        assert!(matches!(by_name, StepRef::Name(_)));
        let by_pos: StepRef = ActionTarget::Position(1).into();
        assert!(matches!(by_pos, StepRef::Position(1)));
    }
}
