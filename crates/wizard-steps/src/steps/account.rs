//! AccountStep: primer step del alta (email + newsletter).

use wizard_core::step_component;

step_component! {
    /// Recoge el email y la preferencia de newsletter (`AccountForm`).
    pub AccountStep {
        "title": "Cuenta",
        "description": "Email de acceso y preferencias de contacto",
        "fields": ["email", "newsletter"]
    }
}
