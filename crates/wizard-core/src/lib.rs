//! wizard-core: navegación por steps y estado por step para wizards de formularios.
pub mod catalog;
pub mod constants;
pub mod errors;
pub mod registry;
pub mod state;
pub mod step;
pub mod wizard;

pub use catalog::{CatalogEntry, StepCatalog};
pub use errors::{IdentifierParseError, InvalidStepReason, WizardError};
pub use registry::{ComponentRegistry, InMemoryComponentRegistry, StepFactory};
pub use state::{StepState, StepStateStore};
pub use step::{Capability, ComponentRef, StepComponent, StepDefinition, StepIdentifier, StepInfo, StepStatus,
               StepSummary};
pub use wizard::{DeclaredWizard, RenderSnapshot, StepRef, Wizard, WizardBuilder, WizardController, WizardState};

// Usado por `step_component!`.
#[doc(hidden)]
pub use serde_json as __serde_json;

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	crate::step_component!(StepA { "title": "A" });
	crate::step_component!(StepB { "title": "B" });
	crate::step_component!(StepC { "title": "C" });

	fn abc() -> WizardController<DeclaredWizard, InMemoryComponentRegistry> {
		let registry = InMemoryComponentRegistry::new().with_step::<StepA>("a")
		                                               .with_step::<StepB>("b")
		                                               .with_step::<StepC>("c");
		WizardBuilder::new("abc").step::<StepA>()
		                         .step::<StepB>()
		                         .step::<StepC>()
		                         .controller(registry)
	}

	fn payload(v: serde_json::Value) -> StepState {
		v.as_object().cloned().unwrap_or_default()
	}

	#[test]
	fn walkthrough_saves_outgoing_state_and_tracks_step_number() {
		let mut wizard = abc();
		let catalog = wizard.catalog().expect("catalog");
		assert_eq!(catalog.encoded_names(), vec!["1 - a", "2 - b", "3 - c"]);

		// Sin empezar: el siguiente es el primero y no se guarda nada.
		wizard.next_step(payload(json!({}))).expect("to a");
		assert_eq!(wizard.current_step(), Some(&StepIdentifier::new(1, "a")));
		assert!(wizard.state().all_step_state.is_empty());

		wizard.next_step(payload(json!({"field": "x"}))).expect("to b");
		assert_eq!(wizard.current_step_number(), 2);

		let a = wizard.current_step_state(Some("a".into())).expect("state a");
		assert_eq!(a["field"], json!("x"));
		assert_eq!(a["currentStepNumber"], json!(2));
		assert_eq!(a["allStepNames"], json!(["1 - a", "2 - b", "3 - c"]));
		assert_eq!(a["allStepsState"], json!({"a": {"field": "x"}}));
		assert_eq!(a["stateClassName"], json!(constants::DEFAULT_STATE_CLASS));
	}

	#[test]
	fn render_annotates_exactly_one_current_step() {
		let mut wizard = abc();
		wizard.mount(Some(2usize.into()), None).expect("mount");

		let snapshot = wizard.render().expect("render");
		assert_eq!(snapshot.current_step_name, "b");
		let statuses: Vec<StepStatus> = snapshot.step_summaries.iter().map(|s| s.status).collect();
		assert_eq!(statuses, vec![StepStatus::Previous, StepStatus::Current, StepStatus::Next]);
		let current = snapshot.current_summary().expect("current");
		assert_eq!(current.info["title"], json!("B"));
		assert_eq!(current.info["step_number"], json!(2));
	}
}
