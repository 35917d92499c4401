//! Datasource wizard flow tests.

use lookout_test_utils::Recorder;
use lookout_wizard::{Datasource, DatasourceWizard, Transition};

fn custom() -> Datasource {
    Datasource {
        id: Some(42),
        name: "analytics".to_string(),
        ..Datasource::default()
    }
}

// ====================
// Navigation Tests
// ====================

#[test]
fn test_starts_on_configuration_step() {
    let wizard = DatasourceWizard::datasource(None).unwrap();
    let view = wizard.view();

    assert_eq!(wizard.current(), 0);
    assert_eq!(view.title_key, "label.datasource-configuration");
    assert_eq!(
        view.step_labels,
        vec!["label.datasource-configuration", "label.review-and-submit"]
    );
    assert_eq!(wizard.data(), &Datasource::default());
}

#[test]
fn test_invalid_json_blocks_and_sets_error() {
    let mut wizard = DatasourceWizard::datasource(None).unwrap();
    wizard.set_editor_text(r#"{"name": "broken""#);

    let transition = wizard.next();

    assert!(matches!(transition, Transition::Blocked(ref m) if !m.is_empty()));
    assert_eq!(wizard.current(), 0);
    assert!(wizard.error().is_some_and(|e| !e.is_empty()));
    assert!(wizard.view().show_error_banner);
}

#[test]
fn test_valid_json_advances_and_clears_error() {
    let mut wizard = DatasourceWizard::datasource(None).unwrap();
    wizard.set_editor_text("nope");
    wizard.next();

    wizard.set_editor_text(r#"{"name": "events", "type": "pinot", "properties": {"controllerPort": 9443}}"#);
    assert_eq!(wizard.next(), Transition::Advanced(1));

    assert_eq!(wizard.error(), None);
    assert_eq!(wizard.data().name, "events");
    assert_eq!(wizard.data().properties["controllerPort"], 9443);
    assert!(!wizard.view().show_error_banner);
}

#[test]
fn test_back_on_first_step_is_noop() {
    let mut wizard = DatasourceWizard::datasource(None).unwrap();
    assert_eq!(wizard.back(), Transition::Unchanged);
    assert_eq!(wizard.current(), 0);

    wizard.next();
    assert_eq!(wizard.back(), Transition::Retreated(0));
    assert_eq!(wizard.current(), 0);
}

#[test]
fn test_finish_runs_once_per_submit() {
    let finished = Recorder::new();
    let mut wizard = DatasourceWizard::datasource(Some(custom()))
        .unwrap()
        .on_finish(finished.sink());

    assert_eq!(wizard.next(), Transition::Advanced(1));
    assert_eq!(wizard.next(), Transition::Finished);
    assert!(wizard.is_finished());
    assert_eq!(finished.take(), vec![custom()]);

    // A failed create can be submitted again.
    assert_eq!(wizard.next(), Transition::Finished);
    assert_eq!(wizard.current(), 1);
    assert_eq!(finished.take(), vec![custom()]);
}

#[test]
fn test_back_and_reset_after_finish() {
    let finished = Recorder::new();
    let mut wizard = DatasourceWizard::datasource(None)
        .unwrap()
        .on_finish(finished.sink());
    wizard.next();
    wizard.next();

    assert_eq!(wizard.back(), Transition::Retreated(0));
    assert!(!wizard.is_finished());

    wizard.set_editor_text(r#"{"name": "edited", "type": "pinot"}"#);
    assert_eq!(wizard.next(), Transition::Advanced(1));
    assert_eq!(wizard.next(), Transition::Finished);

    wizard.reset().unwrap();
    assert!(!wizard.is_finished());
    assert_eq!(wizard.next(), Transition::Finished);

    let names: Vec<_> = finished.take().into_iter().map(|d| d.name).collect();
    assert_eq!(names, ["mypinot", "edited", "mypinot"]);
}

// ====================
// Reset and Cancel Tests
// ====================

#[test]
fn test_reset_restores_initial_datasource() {
    let mut wizard = DatasourceWizard::datasource(Some(custom())).unwrap();
    wizard.set_editor_text(r#"{"name": "edited", "type": "mysql"}"#);
    wizard.next();
    wizard.back();
    assert_eq!(wizard.data().name, "edited");

    wizard.reset().unwrap();

    assert_eq!(wizard.data(), &custom());
    let reparsed: Datasource = serde_json::from_str(wizard.editor_text()).unwrap();
    assert_eq!(reparsed, custom());
}

#[test]
fn test_reset_without_initial_uses_default() {
    let mut wizard = DatasourceWizard::datasource(None).unwrap();
    wizard.set_editor_text("{");
    wizard.next();

    wizard.reset().unwrap();

    assert_eq!(wizard.data(), &Datasource::default());
    assert_eq!(wizard.error(), None);
    assert_eq!(wizard.next(), Transition::Advanced(1));
}

#[test]
fn test_cancel_invokes_callback() {
    let cancelled = Recorder::new();
    let mut sink = cancelled.sink();
    let mut wizard = DatasourceWizard::datasource(None)
        .unwrap()
        .show_cancel(true)
        .on_cancel(move || sink(()));

    assert!(wizard.view().show_cancel);
    wizard.cancel();
    assert_eq!(cancelled.len(), 1);
}

#[test]
fn test_review_step_view() {
    let mut wizard = DatasourceWizard::datasource(None).unwrap();
    wizard.next();
    let view = wizard.view();

    assert_eq!(view.active_step, 1);
    assert_eq!(view.title_key, "label.review-and-submit");
    assert!(view.back_enabled);
    assert!(!view.reset_visible);
    assert!(view.read_only);
    assert_eq!(view.next_label_key, "label.finish");
    assert!(!view.show_cancel);
}
