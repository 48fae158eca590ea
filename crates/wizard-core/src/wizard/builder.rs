//! Builder para declarar wizards sin escribir un tipo propio.
//!
//! ```ignore
//! let mut controller = WizardBuilder::new("signup")
//!     .step::<AccountStep>()
//!     .labeled_step::<ProfileStep>("Tu perfil")
//!     .controller(registry);
//! controller.next_step(StepState::new())?;
//! ```
//!
//! El builder no valida nada: la validación ocurre al derivar el catálogo,
//! igual que para cualquier otro `Wizard`.

use super::{Wizard, WizardController};
use crate::constants::DEFAULT_STATE_CLASS;
use crate::registry::ComponentRegistry;
use crate::state::StepStateStore;
use crate::step::{ComponentRef, StepComponent, StepDefinition};

/// Wizard declarado mediante `WizardBuilder`.
#[derive(Debug, Clone)]
pub struct DeclaredWizard {
    name: String,
    steps: Vec<StepDefinition>,
    initial_state: Option<StepStateStore>,
    state_class: String,
}

impl Wizard for DeclaredWizard {
    fn name(&self) -> &str {
        &self.name
    }

    fn steps(&self) -> Vec<StepDefinition> {
        self.steps.clone()
    }

    fn initial_state(&self) -> Option<StepStateStore> {
        self.initial_state.clone()
    }

    fn state_class(&self) -> &str {
        &self.state_class
    }
}

#[derive(Debug, Clone)]
pub struct WizardBuilder {
    wizard: DeclaredWizard,
}

impl WizardBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { wizard: DeclaredWizard { name: name.into(),
                                        steps: Vec::new(),
                                        initial_state: None,
                                        state_class: DEFAULT_STATE_CLASS.to_string() } }
    }

    /// Añade un tipo de step al final de la secuencia.
    #[inline]
    pub fn step<T: StepComponent + 'static>(self) -> Self {
        self.definition(StepDefinition::of::<T>())
    }

    /// Añade un tipo de step con etiqueta de display.
    #[inline]
    pub fn labeled_step<T: StepComponent + 'static>(self, label: impl Into<String>) -> Self {
        self.definition(StepDefinition::of::<T>().with_label(label))
    }

    /// Añade una referencia arbitraria. Útil cuando la lista viene del host y
    /// la capacidad de step sólo se conoce en runtime.
    #[inline]
    pub fn component(self, component: ComponentRef) -> Self {
        self.definition(StepDefinition::new(component))
    }

    pub fn definition(mut self, definition: StepDefinition) -> Self {
        self.wizard.steps.push(definition);
        self
    }

    pub fn initial_state(mut self, state: StepStateStore) -> Self {
        self.wizard.initial_state = Some(state);
        self
    }

    pub fn state_class(mut self, state_class: impl Into<String>) -> Self {
        self.wizard.state_class = state_class.into();
        self
    }

    pub fn build(self) -> DeclaredWizard {
        self.wizard
    }

    /// Construye el wizard y lo envuelve en un controlador sin empezar.
    pub fn controller<R: ComponentRegistry>(self, registry: R) -> WizardController<DeclaredWizard, R> {
        WizardController::new(self.build(), registry)
    }
}
