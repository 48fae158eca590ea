//! ProfileStep: datos de perfil con la lista de países configurable.
//!
//! A diferencia de los otros steps no es unitario: se registra con una
//! factory (`register_step_with`) para inyectar los países disponibles.

use serde_json::json;
use wizard_core::{StepComponent, StepInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStep {
    countries: Vec<String>,
}

impl ProfileStep {
    pub fn new<I, S>(countries: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { countries: countries.into_iter().map(Into::into).collect() }
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }
}

impl StepComponent for ProfileStep {
    fn step_info(&self) -> StepInfo {
        let mut info = StepInfo::new();
        info.insert("title".to_string(), json!("Perfil"));
        info.insert("fields".to_string(), json!(["display_name", "country"]));
        info.insert("countries".to_string(), json!(self.countries));
        info
    }
}
