//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone `AppConfig`, que
//! decide el nivel de log, el step inicial y el formato de salida del binario.
use once_cell::sync::Lazy;
use std::env;

use crate::errors::AppError;

pub const ENV_LOG: &str = "STEPWIZARD_LOG";
pub const ENV_START_STEP: &str = "STEPWIZARD_START_STEP";
pub const ENV_PRETTY: &str = "STEPWIZARD_PRETTY";

const DEFAULT_LOG: &str = "info";

/// Carga perezosa del `.env`; evaluada como mucho una vez por proceso.
static DOTENV: Lazy<bool> = Lazy::new(|| dotenvy::dotenv().is_ok());

/// Configuración del anfitrión del wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Filtro de `env_logger` (p.ej. `info`, `debug`, `wizard_core=trace`).
    pub log_filter: String,
    /// Step a mostrar al montar el wizard (nombre, posición o `"N - nombre"`).
    pub start_step: Option<String>,
    /// Imprimir los snapshots como JSON indentado.
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { log_filter: DEFAULT_LOG.to_string(),
               start_step: None,
               pretty: true }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso (cargando `.env` si existe).
    pub fn from_env() -> Result<Self, AppError> {
        Lazy::force(&DOTENV);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let log_filter = match lookup(ENV_LOG) {
            Some(v) if v.trim().is_empty() => {
                return Err(AppError::Config(format!("{ENV_LOG} vacío")));
            }
            Some(v) => v.trim().to_string(),
            None => DEFAULT_LOG.to_string(),
        };
        let start_step = lookup(ENV_START_STEP).map(|v| v.trim().to_string())
                                               .filter(|v| !v.is_empty());
        let pretty = match lookup(ENV_PRETTY) {
            Some(v) => parse_flag(ENV_PRETTY, &v)?,
            None => true,
        };
        Ok(Self { log_filter,
                  start_step,
                  pretty })
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("{key}: valor booleano inválido `{other}`"))),
    }
}
