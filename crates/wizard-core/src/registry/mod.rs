//! Registry tipo -> nombre (frontera externa).
//!
//! El catálogo no conoce ningún registro global: recibe un `ComponentRegistry`
//! explícito. Esto permite tests deterministas con registries falsos y deja
//! al host decidir de dónde salen los alias.
//!
//! Los tipos de step se registran junto a una factory; el core la invoca
//! explícitamente cuando necesita `step_info()` en lugar de instanciar el tipo
//! a partir de su nombre.

mod in_memory;

pub use in_memory::InMemoryComponentRegistry;

use crate::step::{ComponentRef, StepComponent};

/// Constructor registrado para un tipo de step.
pub type StepFactory = Box<dyn Fn() -> Box<dyn StepComponent>>;

pub trait ComponentRegistry {
    /// Nombre estable (alias) con el que está registrado el componente.
    fn resolve_name(&self, component: &ComponentRef) -> Option<String>;

    /// Componente registrado bajo `name`.
    fn resolve_component(&self, name: &str) -> Option<ComponentRef>;

    /// Instancia el step registrado bajo `name` mediante su factory. `None`
    /// si el nombre no existe o el componente no tiene capacidad de step.
    fn instantiate(&self, name: &str) -> Option<Box<dyn StepComponent>>;
}

impl<R: ComponentRegistry + ?Sized> ComponentRegistry for &R {
    fn resolve_name(&self, component: &ComponentRef) -> Option<String> {
        (**self).resolve_name(component)
    }

    fn resolve_component(&self, name: &str) -> Option<ComponentRef> {
        (**self).resolve_component(name)
    }

    fn instantiate(&self, name: &str) -> Option<Box<dyn StepComponent>> {
        (**self).instantiate(name)
    }
}
