use serde::{Deserialize, Serialize};

/// Posición relativa de un step respecto al step actual.
///
/// Se deriva comparando la posición del step con `current_step_number`:
/// - posición menor -> `Previous`
/// - posición igual -> `Current` (exactamente uno por catálogo)
/// - posición mayor -> `Next`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step ya recorrido.
    Previous,
    /// Step mostrado actualmente.
    Current,
    /// Step aún por recorrer.
    Next,
}

impl StepStatus {
    pub fn for_position(position: usize, current_step_number: usize) -> Self {
        match position.cmp(&current_step_number) {
            std::cmp::Ordering::Less => Self::Previous,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Next,
        }
    }

    pub fn is_current(self) -> bool {
        matches!(self, Self::Current)
    }
}
