//! Pruebas del catálogo: orden, posiciones densas y validación de la declaración.

use wizard_core::{step_component, ComponentRef, InMemoryComponentRegistry, InvalidStepReason, StepCatalog,
                  StepDefinition, StepIdentifier, WizardBuilder, WizardController, WizardError};

step_component!(S1);
step_component!(S2);
step_component!(S3);
step_component!(S4);
step_component!(S5);
step_component!(S6);

struct NotAStep;

fn registry() -> InMemoryComponentRegistry {
    InMemoryComponentRegistry::new().with_step::<S1>("s1")
                                    .with_step::<S2>("s2")
                                    .with_step::<S3>("s3")
                                    .with_step::<S4>("s4")
                                    .with_step::<S5>("s5")
                                    .with_step::<S6>("s6")
                                    .with_component::<NotAStep>("not-a-step")
}

fn all_definitions() -> Vec<StepDefinition> {
    vec![StepDefinition::of::<S1>(),
         StepDefinition::of::<S2>(),
         StepDefinition::of::<S3>(),
         StepDefinition::of::<S4>(),
         StepDefinition::of::<S5>(),
         StepDefinition::of::<S6>(),]
}

#[test]
fn positions_are_dense_and_follow_declaration_order() {
    let registry = registry();
    let all = all_definitions();
    // todos los prefijos no vacíos y también el orden invertido
    for n in 1..=all.len() {
        let declared: Vec<StepDefinition> = all[..n].to_vec();
        let catalog = StepCatalog::build("w", &declared, &registry).expect("catalog");
        let positions: Vec<usize> = catalog.identifiers().map(StepIdentifier::position).collect();
        assert_eq!(positions, (1..=n).collect::<Vec<_>>());

        let reversed: Vec<StepDefinition> = declared.iter().rev().cloned().collect();
        let catalog = StepCatalog::build("w", &reversed, &registry).expect("catalog");
        let names: Vec<&str> = catalog.identifiers().map(StepIdentifier::name).collect();
        let expected: Vec<String> = (1..=n).rev().map(|i| format!("s{i}")).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn worked_example_abc() {
    step_component!(A);
    step_component!(B);
    step_component!(C);
    let registry = InMemoryComponentRegistry::new().with_step::<A>("a")
                                                   .with_step::<B>("b")
                                                   .with_step::<C>("c");
    let declared = [StepDefinition::of::<A>(), StepDefinition::of::<B>(), StepDefinition::of::<C>()];
    let catalog = StepCatalog::build("abc", &declared, &registry).expect("catalog");
    let ids: Vec<StepIdentifier> = catalog.identifiers().cloned().collect();
    assert_eq!(ids,
               vec![StepIdentifier::new(1, "a"), StepIdentifier::new(2, "b"), StepIdentifier::new(3, "c")]);
}

#[test]
fn empty_declaration_fails_with_no_steps_defined() {
    let err = StepCatalog::build("empty", &[], &registry()).unwrap_err();
    assert_eq!(err, WizardError::NoStepsDefined { wizard: "empty".into() });
}

#[test]
fn non_step_component_fails_construction_before_navigation() {
    let result = WizardBuilder::new("broken").step::<S1>()
                                             .component(ComponentRef::plain::<NotAStep>())
                                             .build();
    let err = WizardController::try_new(result, registry()).unwrap_err();
    match err {
        WizardError::InvalidStepDefinition { wizard, component, reason } => {
            assert_eq!(wizard, "broken");
            assert!(component.ends_with("NotAStep"), "component was {component}");
            assert_eq!(reason, InvalidStepReason::NotAStepComponent);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unregistered_step_fails_with_not_registered() {
    step_component!(Orphan);
    let declared = [StepDefinition::of::<S1>(), StepDefinition::of::<Orphan>()];
    let err = StepCatalog::build("w", &declared, &registry()).unwrap_err();
    assert!(matches!(err,
                     WizardError::InvalidStepDefinition { reason: InvalidStepReason::NotRegistered, .. }));
}

#[test]
fn catalog_is_rederived_on_every_call() {
    let mut registry = registry();
    let wizard = WizardBuilder::new("w").step::<S1>().step::<S2>().build();
    {
        let controller = WizardController::new(wizard.clone(), &registry);
        assert_eq!(controller.catalog().unwrap().encoded_names(), vec!["1 - s1", "2 - s2"]);
    }
    registry.register_step::<S2>("second");
    let controller = WizardController::new(wizard, &registry);
    assert_eq!(controller.catalog().unwrap().encoded_names(), vec!["1 - s1", "2 - second"]);
}
