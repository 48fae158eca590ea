use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use log::debug;

use super::{ComponentRegistry, StepFactory};
use crate::step::{ComponentRef, StepComponent};

struct Registration {
    component: ComponentRef,
    factory: Option<StepFactory>,
}

/// Registry en memoria. Un alias apunta a un único tipo y un tipo a un único
/// alias: registrar de nuevo cualquiera de los dos reemplaza la entrada previa.
#[derive(Default)]
pub struct InMemoryComponentRegistry {
    names: HashMap<TypeId, String>,
    entries: IndexMap<String, Registration>,
}

impl InMemoryComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un tipo de step construible con `Default`.
    pub fn register_step<T>(&mut self, alias: impl Into<String>) -> &mut Self
        where T: StepComponent + Default + 'static
    {
        self.register_step_with(alias, T::default)
    }

    /// Registra un tipo de step con una factory explícita.
    pub fn register_step_with<T, F>(&mut self, alias: impl Into<String>, factory: F) -> &mut Self
        where T: StepComponent + 'static,
              F: Fn() -> T + 'static
    {
        let factory: StepFactory = Box::new(move || Box::new(factory()) as Box<dyn StepComponent>);
        self.insert(alias.into(),
                    Registration { component: ComponentRef::step::<T>(),
                                   factory: Some(factory) })
    }

    /// Registra un componente sin capacidad de step.
    pub fn register<T: 'static>(&mut self, alias: impl Into<String>) -> &mut Self {
        self.insert(alias.into(),
                    Registration { component: ComponentRef::plain::<T>(),
                                   factory: None })
    }

    /// Variante encadenable de `register_step`.
    pub fn with_step<T>(mut self, alias: impl Into<String>) -> Self
        where T: StepComponent + Default + 'static
    {
        self.register_step::<T>(alias);
        self
    }

    /// Variante encadenable de `register`.
    pub fn with_component<T: 'static>(mut self, alias: impl Into<String>) -> Self {
        self.register::<T>(alias);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, alias: String, registration: Registration) -> &mut Self {
        let type_id = registration.component.type_id();
        if let Some(previous) = self.entries.get(&alias) {
            self.names.remove(&previous.component.type_id());
        }
        if let Some(old_alias) = self.names.get(&type_id).cloned() {
            self.entries.shift_remove(&old_alias);
        }
        debug!("registry: `{}` -> {}", alias, registration.component.type_name());
        self.names.insert(type_id, alias.clone());
        self.entries.insert(alias, registration);
        self
    }
}

impl ComponentRegistry for InMemoryComponentRegistry {
    fn resolve_name(&self, component: &ComponentRef) -> Option<String> {
        self.names.get(&component.type_id()).cloned()
    }

    fn resolve_component(&self, name: &str) -> Option<ComponentRef> {
        self.entries.get(name).map(|r| r.component)
    }

    fn instantiate(&self, name: &str) -> Option<Box<dyn StepComponent>> {
        self.entries
            .get(name)
            .and_then(|r| r.factory.as_ref())
            .map(|factory| factory())
    }
}

impl fmt::Debug for InMemoryComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
         .entries(self.entries.iter().map(|(alias, r)| (alias, r.component)))
         .finish()
    }
}
