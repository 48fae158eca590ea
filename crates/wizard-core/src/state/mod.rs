//! Store de estados por step.
//!
//! Mapea nombre de step -> payload opaco (objeto JSON). El core nunca
//! inspecciona el contenido: lo guarda y lo devuelve entero. Las entradas se
//! crean perezosamente en la primera escritura, se sobreescriben (no se
//! fusionan) y nunca se borran mientras viva la instancia del wizard.

pub mod merge;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::StepCatalog;
use crate::errors::WizardError;

/// Payload de un step: `campo -> valor`, propiedad de la implementación del step.
pub type StepState = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepStateStore {
    entries: IndexMap<String, StepState>,
}

impl StepStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarda `state` para `step`, que debe existir en `catalog`.
    pub fn set(&mut self, catalog: &StepCatalog, step: &str, state: StepState) -> Result<(), WizardError> {
        if !catalog.contains_name(step) {
            return Err(WizardError::StepNotFound { wizard: catalog.wizard().to_string(),
                                                   step: step.to_string() });
        }
        self.entries.insert(step.to_string(), state);
        Ok(())
    }

    /// Payload guardado o un objeto vacío si nunca se escribió.
    pub fn get(&self, step: &str) -> StepState {
        self.entries.get(step).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Todas las entradas como objeto JSON, en orden de primera escritura.
    pub fn snapshot(&self) -> Value {
        Value::Object(self.entries
                          .iter()
                          .map(|(k, v)| (k.clone(), Value::Object(v.clone())))
                          .collect())
    }
}

impl FromIterator<(String, StepState)> for StepStateStore {
    fn from_iter<I: IntoIterator<Item = (String, StepState)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
