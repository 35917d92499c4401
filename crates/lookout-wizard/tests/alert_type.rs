//! Alert-type selection tests.

use lookout_test_utils::Recorder;
use lookout_wizard::{
    AlertPropertyChange, AlertTypeSelection, TemplateRef, generate_available_algorithm_options,
    has_multidimension,
};

const TEMPLATES: [&str; 4] = [
    "startree-threshold",
    "startree-threshold-dx",
    "startree-mean-variance",
    "custom-template",
];

#[test]
fn test_only_installed_templates_are_offered() {
    let options = generate_available_algorithm_options(&TEMPLATES);
    let templates: Vec<_> = options
        .iter()
        .map(|o| o.algorithm_option.alert_template)
        .collect();

    assert_eq!(templates, vec!["startree-threshold", "startree-mean-variance"]);
    assert!(options.iter().all(|o| o.has_alert_template));
    assert!(options[0].has_multidimension_alert_template);
    assert!(!options[1].has_multidimension_alert_template);
}

#[test]
fn test_has_multidimension() {
    assert!(has_multidimension(&TEMPLATES));
    assert!(!has_multidimension(&["startree-mean-variance"]));
    // A lone multidimensional template does not make its option available.
    assert!(!has_multidimension(&["startree-ets-dx"]));
    assert!(!has_multidimension::<&str>(&[]));
}

#[test]
fn test_click_emits_template_then_completes() {
    let changes = Recorder::new();
    let completed = Recorder::new();
    let mut complete = completed.sink();

    let mut selection = AlertTypeSelection::new(&TEMPLATES)
        .on_alert_property_change(changes.sink())
        .on_selection_complete(move || complete(()));

    assert!(selection.select("Mean Variance"));

    assert_eq!(
        changes.take(),
        vec![AlertPropertyChange {
            template: TemplateRef {
                name: "startree-mean-variance".to_string(),
            },
        }]
    );
    assert_eq!(completed.len(), 1);
    assert_eq!(selection.selected(), Some("startree-mean-variance"));
}

#[test]
fn test_unknown_option_is_rejected() {
    let completed = Recorder::new();
    let mut complete = completed.sink();
    let mut selection =
        AlertTypeSelection::new(&TEMPLATES).on_selection_complete(move || complete(()));

    assert!(!selection.select("Exponential Smoothing"));
    assert!(completed.is_empty());
    assert_eq!(selection.selected(), None);
}
