//! Catálogo de steps: lista ordenada y validada de `StepIdentifier`.
//!
//! El catálogo se deriva de la declaración del wizard + el registry cada vez
//! que se necesita; nunca se cachea ni se persiste. Quien necesite estabilidad
//! dentro de una operación debe guardar el resultado de `build` y reutilizarlo.
//!
//! Validaciones (en este orden):
//! 1. la declaración no puede estar vacía (`NoStepsDefined`);
//! 2. todos los componentes declarados deben tener capacidad de step
//!    (`InvalidStepDefinition` / `NotAStepComponent`);
//! 3. todos deben resolver a un nombre registrado
//!    (`InvalidStepDefinition` / `NotRegistered`).
//!
//! La unicidad de nombres se asume por construcción y no se re-verifica aquí.

use log::debug;

use crate::errors::{InvalidStepReason, WizardError};
use crate::registry::ComponentRegistry;
use crate::step::{StepDefinition, StepIdentifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub identifier: StepIdentifier,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCatalog {
    wizard: String,
    entries: Vec<CatalogEntry>,
}

impl StepCatalog {
    pub fn build<R>(wizard: &str, declared: &[StepDefinition], registry: &R) -> Result<Self, WizardError>
        where R: ComponentRegistry + ?Sized
    {
        if declared.is_empty() {
            return Err(WizardError::NoStepsDefined { wizard: wizard.to_string() });
        }

        if let Some(def) = declared.iter().find(|d| !d.component.is_step()) {
            return Err(invalid(wizard, def, InvalidStepReason::NotAStepComponent));
        }

        let entries = declared.iter()
                              .enumerate()
                              .map(|(index, def)| -> Result<CatalogEntry, WizardError> {
                                  let name = registry.resolve_name(&def.component)
                                                     .ok_or_else(|| invalid(wizard, def, InvalidStepReason::NotRegistered))?;
                                  Ok(CatalogEntry { identifier: StepIdentifier::new(index + 1, name),
                                                    label: def.label.clone() })
                              })
                              .collect::<Result<Vec<_>, WizardError>>()?;

        debug!("catalog `{}`: {} steps", wizard, entries.len());
        Ok(Self { wizard: wizard.to_string(),
                  entries })
    }

    /// Nombre del wizard al que pertenece el catálogo.
    pub fn wizard(&self) -> &str {
        &self.wizard
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // Un catálogo construido con `build` nunca está vacío.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &StepIdentifier> {
        self.entries.iter().map(|e| &e.identifier)
    }

    /// Identificadores en su forma codificada `"<posición> - <nombre>"`.
    pub fn encoded_names(&self) -> Vec<String> {
        self.identifiers().map(StepIdentifier::encode).collect()
    }

    pub fn first(&self) -> Option<&StepIdentifier> {
        self.entries.first().map(|e| &e.identifier)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&StepIdentifier> {
        self.identifiers().find(|id| id.name() == name)
    }

    pub fn find_by_position(&self, position: usize) -> Option<&StepIdentifier> {
        position.checked_sub(1)
                .and_then(|i| self.entries.get(i))
                .map(|e| &e.identifier)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Step inmediatamente anterior a `identifier`.
    pub fn before(&self, identifier: &StepIdentifier) -> Option<&StepIdentifier> {
        let index = self.index_of(identifier)?;
        index.checked_sub(1).and_then(|i| self.entries.get(i)).map(|e| &e.identifier)
    }

    /// Step inmediatamente posterior a `identifier`.
    pub fn after(&self, identifier: &StepIdentifier) -> Option<&StepIdentifier> {
        let index = self.index_of(identifier)?;
        self.entries.get(index + 1).map(|e| &e.identifier)
    }

    fn index_of(&self, identifier: &StepIdentifier) -> Option<usize> {
        self.entries.iter().position(|e| &e.identifier == identifier)
    }
}

fn invalid(wizard: &str, def: &StepDefinition, reason: InvalidStepReason) -> WizardError {
    WizardError::InvalidStepDefinition { wizard: wizard.to_string(),
                                         component: def.component.type_name().to_string(),
                                         reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryComponentRegistry;
    use crate::step::{ComponentRef, StepComponent};

    #[derive(Default)]
    struct One;
    impl StepComponent for One {}
    #[derive(Default)]
    struct Two;
    impl StepComponent for Two {}

    fn registry() -> InMemoryComponentRegistry {
        InMemoryComponentRegistry::new().with_step::<One>("one")
                                        .with_step::<Two>("two")
    }

    #[test]
    fn before_and_after_follow_declaration_order() {
        let catalog = StepCatalog::build("w", &[StepDefinition::of::<One>(), StepDefinition::of::<Two>()], &registry()).unwrap();
        let one = catalog.find_by_name("one").unwrap().clone();
        let two = catalog.find_by_position(2).unwrap().clone();

        assert_eq!(catalog.after(&one), Some(&two));
        assert_eq!(catalog.before(&two), Some(&one));
        assert_eq!(catalog.before(&one), None);
        assert_eq!(catalog.after(&two), None);
        assert_eq!(catalog.find_by_position(0), None);
        assert_eq!(catalog.encoded_names(), vec!["1 - one".to_string(), "2 - two".to_string()]);
    }

    #[test]
    fn capability_is_checked_before_names() {
        struct Unregistered;
        let declared = [StepDefinition::new(ComponentRef::plain::<Unregistered>()), StepDefinition::of::<Two>()];
        let err = StepCatalog::build("w", &declared, &InMemoryComponentRegistry::new()).unwrap_err();
        assert!(matches!(err,
                         WizardError::InvalidStepDefinition { reason: InvalidStepReason::NotAStepComponent, .. }));
    }

    #[test]
    fn labels_are_kept_without_renaming() {
        let declared = [StepDefinition::of::<One>().with_label("Primero")];
        let catalog = StepCatalog::build("w", &declared, &registry()).unwrap();
        assert_eq!(catalog.first().map(StepIdentifier::name), Some("one"));
        assert_eq!(catalog.entries()[0].label.as_deref(), Some("Primero"));
    }
}
