use std::any::{type_name, TypeId};
use std::fmt;

use serde_json::{Map, Value};

/// Metadata descriptiva de un step (título, icono, lo que la vista necesite).
/// El core nunca la interpreta: sólo la reenvía.
pub type StepInfo = Map<String, Value>;

/// Capacidad mínima que todo componente de step debe implementar.
pub trait StepComponent {
    /// Metadata para display/anotación de estado.
    fn step_info(&self) -> StepInfo {
        StepInfo::new()
    }
}

/// Capacidades que un tipo puede declarar ante el wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Implementa `StepComponent`.
    Step,
    /// Componente cualquiera (p. ej. un banner) sin capacidad de step.
    Plain,
}

/// Referencia a un tipo de componente: identidad del tipo + capacidad.
///
/// Es el equivalente de "nombre de clase" en la declaración de steps: no
/// instancia nada, sólo identifica.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentRef {
    type_id: TypeId,
    type_name: &'static str,
    capability: Capability,
}

impl ComponentRef {
    /// Referencia a un tipo con capacidad de step (verificada en compilación).
    pub fn step<T: StepComponent + 'static>() -> Self {
        Self { type_id: TypeId::of::<T>(),
               type_name: type_name::<T>(),
               capability: Capability::Step }
    }

    /// Referencia a un tipo sin capacidad de step.
    pub fn plain<T: 'static>() -> Self {
        Self { type_id: TypeId::of::<T>(),
               type_name: type_name::<T>(),
               capability: Capability::Plain }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn is_step(&self) -> bool {
        matches!(self.capability, Capability::Step)
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentRef({}, {:?})", self.type_name, self.capability)
    }
}

/// Declaración de un step tal como la escribe el implementador del wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub component: ComponentRef,
    /// Etiqueta opcional para display. No cambia el nombre del identificador.
    pub label: Option<String>,
}

impl StepDefinition {
    pub fn new(component: ComponentRef) -> Self {
        Self { component,
               label: None }
    }

    /// Atajo para declarar un tipo de step.
    pub fn of<T: StepComponent + 'static>() -> Self {
        Self::new(ComponentRef::step::<T>())
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl From<ComponentRef> for StepDefinition {
    fn from(component: ComponentRef) -> Self {
        Self::new(component)
    }
}
