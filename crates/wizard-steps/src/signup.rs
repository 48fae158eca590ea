//! SignupWizard: cuenta -> perfil -> confirmación.

use wizard_core::{InMemoryComponentRegistry, StepDefinition, StepStateStore, Wizard};

use crate::forms::{ProfileForm, StepStateEncoder};
use crate::steps::{AccountStep, ConfirmStep, ProfileStep};

/// Identidad del wizard de alta.
pub const SIGNUP_WIZARD: &str = "signup";

const DEFAULT_COUNTRIES: [&str; 3] = ["ES", "MX", "AR"];

/// Componente registrado que NO es un step (cabecera de la página). Sirve
/// para ejercitar declaraciones inválidas.
#[derive(Debug, Default)]
pub struct Banner;

/// Declaración del wizard de alta.
#[derive(Debug, Clone, Default)]
pub struct SignupWizard {
    /// País preseleccionado en el perfil al montar el wizard.
    pub default_country: Option<String>,
}

impl SignupWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_country(country: impl Into<String>) -> Self {
        Self { default_country: Some(country.into()) }
    }
}

impl Wizard for SignupWizard {
    fn name(&self) -> &str {
        SIGNUP_WIZARD
    }

    fn steps(&self) -> Vec<StepDefinition> {
        vec![StepDefinition::of::<AccountStep>(),
             StepDefinition::of::<ProfileStep>().with_label("Tu perfil"),
             StepDefinition::of::<ConfirmStep>(),]
    }

    fn initial_state(&self) -> Option<StepStateStore> {
        let country = self.default_country.clone()?;
        let profile = ProfileForm { country,
                                    ..ProfileForm::default() };
        let state = profile.to_step_state().ok()?;
        Some(StepStateStore::from_iter([("profile-step".to_string(), state)]))
    }

    fn state_class(&self) -> &str {
        "wizard_steps::forms::SignupForms"
    }
}

/// Registry con los alias del wizard de alta.
pub fn signup_registry() -> InMemoryComponentRegistry {
    let mut registry = InMemoryComponentRegistry::new();
    registry.register_step::<AccountStep>("account-step")
            .register_step_with("profile-step", || ProfileStep::new(DEFAULT_COUNTRIES))
            .register_step::<ConfirmStep>("confirm-step")
            .register::<Banner>("banner");
    registry
}
