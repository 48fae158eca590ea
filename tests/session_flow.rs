//! Sesión completa sobre el wizard de alta usando acciones JSON.

use serde_json::json;
use stepwizard::{AppError, Session, WizardAction};
use wizard_core::{StepStatus, WizardError};
use wizard_steps::{signup_registry, SignupWizard};

fn open() -> Session<SignupWizard, wizard_core::InMemoryComponentRegistry> {
    Session::open(SignupWizard::new(), signup_registry(), None).expect("signup wizard is valid")
}

#[test]
fn json_actions_walk_the_signup_wizard() {
    let mut session = open();
    assert_eq!(session.render().unwrap().current_step_name, "account-step");

    let snap = session.apply_json(r#"{"action":"next_step","state":{"email":"ada@example.org","newsletter":false}}"#)
                      .unwrap();
    assert_eq!(snap.current_step_name, "profile-step");
    assert_eq!(snap.current_step_state["currentStepNumber"], json!(2));

    let snap = session.apply_json(r#"{"action":"show_step","step":3,"state":{"display_name":"Ada"}}"#)
                      .unwrap();
    assert_eq!(snap.current_step_name, "confirm-step");
    assert_eq!(snap.current_step_state["allStepsState"]["profile-step"]["display_name"], json!("Ada"));
    let statuses: Vec<StepStatus> = snap.step_summaries.iter().map(|s| s.status).collect();
    assert_eq!(statuses, vec![StepStatus::Previous, StepStatus::Previous, StepStatus::Current]);

    let snap = session.apply_json(r#"{"action":"show_step","step":"1 - account-step"}"#).unwrap();
    assert_eq!(snap.current_step_state["email"], json!("ada@example.org"));
}

#[test]
fn rejected_action_keeps_pointer_and_is_recoverable() {
    let mut session = open();
    let err = session.apply(WizardAction::PreviousStep { state: Default::default() }).unwrap_err();
    assert!(matches!(err, AppError::Wizard(WizardError::NoPreviousStep { .. })));
    assert!(!err.is_fatal());
    assert_eq!(session.controller().current_step_name(), Some("account-step"));
}

#[test]
fn malformed_action_is_an_action_error() {
    let mut session = open();
    let err = session.apply_json(r#"{"action":"teleport"}"#).unwrap_err();
    assert!(matches!(err, AppError::Action(_)));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn session_resumes_from_persisted_state() {
    let mut session = open();
    session.apply_json(r#"{"action":"next_step","state":{"email":"x@y.z"}}"#).unwrap();
    let id = session.id();
    let blob = serde_json::to_string(&session.into_state()).unwrap();

    let state = serde_json::from_str(&blob).unwrap();
    let resumed = Session::resume(id, SignupWizard::new(), signup_registry(), state).unwrap();
    assert_eq!(resumed.id(), id);
    let snap = resumed.render().unwrap();
    assert_eq!(snap.current_step_name, "profile-step");
    assert_eq!(snap.current_step_state["allStepsState"]["account-step"]["email"], json!("x@y.z"));
}

#[test]
fn open_at_unknown_start_step_fails() {
    let err = Session::open(SignupWizard::new(), signup_registry(), Some("billing".into())).err()
                                                                                          .unwrap();
    assert!(matches!(err, AppError::Wizard(WizardError::StepNotFound { .. })));
}
