//! Controlador del wizard: máquina de estados de navegación.
//!
//! Estados: uno por identificador del catálogo más un estado implícito
//! "sin empezar" (`current_step == None`).
//!
//! Invariantes de las transiciones:
//! - el estado del step saliente se guarda ANTES de resolver el destino, así
//!   un destino inválido nunca corrompe lo ya guardado;
//! - ante cualquier error el puntero al step actual no cambia;
//! - `next_step` / `previous_step` nunca recortan silenciosamente en los
//!   extremos: devuelven `NoNextStep` / `NoPreviousStep` sin guardar nada.
//!
//! El catálogo se reconstruye en cada operación pública.

use log::{debug, warn};
use serde_json::{Map, Value};

use super::{RenderSnapshot, StepRef, Wizard, WizardState};
use crate::catalog::StepCatalog;
use crate::constants::{KEY_ACTIVITIES, KEY_ALL_STEPS_STATE, KEY_ALL_STEP_NAMES, KEY_CURRENT_STEP_NUMBER,
                       KEY_STATE_CLASS_NAME};
use crate::errors::WizardError;
use crate::registry::ComponentRegistry;
use crate::state::merge::overlay;
use crate::state::{StepState, StepStateStore};
use crate::step::{StepIdentifier, StepSummary};

const UNSTARTED: &str = "(unstarted)";

#[derive(Debug)]
pub struct WizardController<W, R>
    where W: Wizard,
          R: ComponentRegistry
{
    wizard: W,
    registry: R,
    state: WizardState,
}

impl<W, R> WizardController<W, R>
    where W: Wizard,
          R: ComponentRegistry
{
    /// Crea un controlador sin empezar. No valida la declaración.
    pub fn new(wizard: W, registry: R) -> Self {
        Self { wizard,
               registry,
               state: WizardState::default() }
    }

    /// Como `new`, pero valida la declaración antes de cualquier navegación.
    pub fn try_new(wizard: W, registry: R) -> Result<Self, WizardError> {
        let controller = Self::new(wizard, registry);
        controller.catalog()?;
        Ok(controller)
    }

    /// Restaura un estado persistido por el host. El step actual y todas las
    /// entradas del store deben seguir existiendo en el catálogo vigente.
    /// `current_step_number` se recalcula a partir del step actual.
    pub fn restore(wizard: W, registry: R, mut state: WizardState) -> Result<Self, WizardError> {
        let controller = Self::new(wizard, registry);
        let catalog = controller.catalog()?;

        let mut store = StepStateStore::new();
        for name in state.all_step_state.step_names() {
            store.set(&catalog, name, state.all_step_state.get(name))?;
        }
        state.all_step_state = store;
        state.current_step_number = match &state.current_step {
            Some(current) => StepRef::from(current).resolve(&catalog, &controller.registry)?.position(),
            None => WizardState::default().current_step_number,
        };
        if !state.is_started() {
            debug!("wizard `{}`: restored before any navigation", controller.wizard.name());
        }
        Ok(Self { state,
                  ..controller })
    }

    /// Inicializa el wizard: siembra el store (estado explícito o
    /// `Wizard::initial_state`) y muestra `show_step` o el primer step, sin
    /// guardar ningún estado saliente.
    pub fn mount(&mut self, show_step: Option<StepRef>, initial_state: Option<StepStateStore>) -> Result<(), WizardError> {
        let catalog = self.catalog()?;

        let seeded = match initial_state.or_else(|| self.wizard.initial_state()) {
            Some(initial) => {
                let mut store = StepStateStore::new();
                for name in initial.step_names() {
                    store.set(&catalog, name, initial.get(name))?;
                }
                Some(store)
            }
            None => None,
        };

        let target = match show_step {
            Some(target) => target.resolve(&catalog, &self.registry)?.clone(),
            None => catalog.first()
                           .cloned()
                           .ok_or_else(|| WizardError::NoStepsDefined { wizard: self.wizard.name().to_string() })?,
        };

        if let Some(store) = seeded {
            self.state.all_step_state = store;
        }
        debug!("wizard `{}`: mounted at `{}`", self.wizard.name(), target);
        self.enter(target);
        Ok(())
    }

    pub fn wizard(&self) -> &W {
        &self.wizard
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Devuelve el estado para que el host lo persista.
    pub fn into_state(self) -> WizardState {
        self.state
    }

    /// Catálogo recién derivado de la declaración actual.
    pub fn catalog(&self) -> Result<StepCatalog, WizardError> {
        StepCatalog::build(self.wizard.name(), &self.wizard.steps(), &self.registry)
    }

    pub fn current_step(&self) -> Option<&StepIdentifier> {
        self.state.current_step.as_ref()
    }

    pub fn current_step_name(&self) -> Option<&str> {
        self.current_step().map(StepIdentifier::name)
    }

    pub fn current_step_number(&self) -> usize {
        self.state.current_step_number
    }

    pub fn activities(&self) -> Option<&Value> {
        self.state.activities.as_ref()
    }

    pub fn set_activities(&mut self, activities: Option<Value>) {
        self.state.activities = activities;
    }

    /// Acción "mostrar step N": guarda `outgoing` bajo el step actual y salta
    /// a `target`.
    pub fn show_step(&mut self, target: impl Into<StepRef>, outgoing: StepState) -> Result<(), WizardError> {
        let catalog = self.catalog()?;
        self.transition(&catalog, &target.into(), outgoing)
    }

    /// Acción "siguiente". Desde "sin empezar" el siguiente es el primero.
    pub fn next_step(&mut self, outgoing: StepState) -> Result<(), WizardError> {
        let catalog = self.catalog()?;
        let next = match &self.state.current_step {
            None => catalog.first(),
            Some(current) => catalog.after(current),
        };
        let Some(next) = next.cloned() else {
            warn!("wizard `{}`: no step after `{}`", self.wizard.name(), self.current_label());
            return Err(WizardError::NoNextStep { wizard: self.wizard.name().to_string(),
                                                 current: self.current_label() });
        };
        self.transition(&catalog, &StepRef::Identifier(next), outgoing)
    }

    /// Acción "anterior". Falla desde el primer step o sin empezar.
    pub fn previous_step(&mut self, outgoing: StepState) -> Result<(), WizardError> {
        let catalog = self.catalog()?;
        let previous = self.state
                           .current_step
                           .as_ref()
                           .and_then(|current| catalog.before(current))
                           .cloned();
        let Some(previous) = previous else {
            warn!("wizard `{}`: no step before `{}`", self.wizard.name(), self.current_label());
            return Err(WizardError::NoPreviousStep { wizard: self.wizard.name().to_string(),
                                                     current: self.current_label() });
        };
        self.transition(&catalog, &StepRef::Identifier(previous), outgoing)
    }

    /// Sobreescribe el estado guardado de `step` (debe existir en el catálogo).
    pub fn set_step_state(&mut self, step: &str, state: StepState) -> Result<(), WizardError> {
        let catalog = self.catalog()?;
        self.state.all_step_state.set(&catalog, step, state)
    }

    /// Payload guardado de `step`, sin metadata; vacío si nunca se escribió.
    pub fn step_state(&self, step: &str) -> StepState {
        self.state.all_step_state.get(step)
    }

    /// Payload de `target` (o del step actual) con la metadata del wizard
    /// encima. En colisión de claves gana siempre la metadata.
    pub fn current_step_state(&self, target: Option<StepRef>) -> Result<StepState, WizardError> {
        let catalog = self.catalog()?;
        let identifier = self.resolve_or_current(&catalog, target)?;
        Ok(overlay(&self.state.all_step_state.get(identifier.name()), self.metadata(&catalog)))
    }

    /// Steps del catálogo anotados Previous/Current/Next con su `step_info`.
    pub fn steps(&self) -> Result<Vec<StepSummary>, WizardError> {
        let catalog = self.catalog()?;
        Ok(self.summaries(&catalog))
    }

    /// Snapshot listo para la capa de render.
    pub fn render(&self) -> Result<RenderSnapshot, WizardError> {
        let catalog = self.catalog()?;
        let identifier = self.resolve_or_current(&catalog, None)?;
        let current_step_state = overlay(&self.state.all_step_state.get(identifier.name()), self.metadata(&catalog));
        Ok(RenderSnapshot { current_step_state,
                            current_step_name: identifier.name().to_string(),
                            steps: catalog.identifiers().cloned().collect(),
                            step_summaries: self.summaries(&catalog) })
    }

    fn transition(&mut self, catalog: &StepCatalog, target: &StepRef, outgoing: StepState) -> Result<(), WizardError> {
        if let Some(current) = &self.state.current_step {
            self.state.all_step_state.set(catalog, current.name(), outgoing)?;
        }
        let target = target.resolve(catalog, &self.registry)?.clone();
        debug!("wizard `{}`: `{}` -> `{}`", self.wizard.name(), self.current_label(), target);
        self.enter(target);
        Ok(())
    }

    fn enter(&mut self, target: StepIdentifier) {
        self.state.current_step_number = target.position();
        self.state.current_step = Some(target);
    }

    fn resolve_or_current<'c>(&self,
                              catalog: &'c StepCatalog,
                              target: Option<StepRef>)
                              -> Result<&'c StepIdentifier, WizardError> {
        match target {
            Some(target) => target.resolve(catalog, &self.registry),
            None => {
                let current = self.state
                                  .current_step
                                  .as_ref()
                                  .ok_or_else(|| WizardError::StepNotFound { wizard: self.wizard.name().to_string(),
                                                                             step: UNSTARTED.to_string() })?;
                StepRef::from(current).resolve(catalog, &self.registry)
            }
        }
    }

    fn metadata(&self, catalog: &StepCatalog) -> Map<String, Value> {
        let mut metadata = Map::new();
        metadata.insert(KEY_ALL_STEP_NAMES.to_string(), Value::from(catalog.encoded_names()));
        metadata.insert(KEY_ALL_STEPS_STATE.to_string(), self.state.all_step_state.snapshot());
        metadata.insert(KEY_STATE_CLASS_NAME.to_string(), Value::from(self.wizard.state_class()));
        if let Some(activities) = &self.state.activities {
            metadata.insert(KEY_ACTIVITIES.to_string(), activities.clone());
        }
        metadata.insert(KEY_CURRENT_STEP_NUMBER.to_string(), Value::from(self.state.current_step_number));
        metadata
    }

    fn summaries(&self, catalog: &StepCatalog) -> Vec<StepSummary> {
        catalog.entries()
               .iter()
               .map(|entry| {
                   let info = self.registry
                                  .instantiate(entry.identifier.name())
                                  .map(|step| step.step_info())
                                  .unwrap_or_default();
                   StepSummary::new(entry.identifier.clone(),
                                    info,
                                    entry.label.as_deref(),
                                    self.state.current_step_number)
               })
               .collect()
    }

    fn current_label(&self) -> String {
        self.state
            .current_step
            .as_ref()
            .map(StepIdentifier::encode)
            .unwrap_or_else(|| UNSTARTED.to_string())
    }
}
