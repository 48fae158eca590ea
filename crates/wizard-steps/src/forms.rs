//! Formularios tipados ↔ payload neutral (`StepState`).
//!
//! Reglas:
//! - el payload de un step siempre es un objeto JSON; un formulario que no
//!   serializa a objeto es un error de programación y se reporta como
//!   `serde_json::Error`;
//! - al decodificar se ignoran las claves desconocidas, de modo que también
//!   se puede decodificar directamente la salida de `current_step_state`
//!   (payload + metadata del wizard).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wizard_core::StepState;

pub trait StepStateEncoder: Sized {
    fn to_step_state(&self) -> Result<StepState, serde_json::Error>;
    fn from_step_state(state: &StepState) -> Result<Self, serde_json::Error>;
}

impl<T> StepStateEncoder for T where T: Serialize + DeserializeOwned
{
    fn to_step_state(&self) -> Result<StepState, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!("step state must be a JSON object, got `{other}`"))),
        }
    }

    fn from_step_state(state: &StepState) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(state.clone()))
    }
}

/// Datos del step de cuenta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountForm {
    pub email: String,
    pub newsletter: bool,
}

/// Datos del step de perfil.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub display_name: String,
    pub country: String,
}
