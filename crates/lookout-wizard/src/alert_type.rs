//! Alert-type selection: the first step of the guided alert wizard.
//!
//! Offers the detection algorithms whose alert templates exist on the server
//! and records which of them also support multidimensional alerts.

use serde::Serialize;

/// A detection algorithm offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmOption {
    pub title: &'static str,
    pub description: &'static str,
    pub alert_template: &'static str,
    pub alert_template_for_multidimension: &'static str,
}

/// Every algorithm the selection step knows about.
pub static ALGORITHM_OPTIONS: &[AlgorithmOption] = &[
    AlgorithmOption {
        title: "Threshold",
        description: "Alert when the metric goes above or below fixed limits.",
        alert_template: "startree-threshold",
        alert_template_for_multidimension: "startree-threshold-dx",
    },
    AlgorithmOption {
        title: "Mean Variance",
        description: "Alert when the metric deviates from its recent mean by more than a few standard deviations.",
        alert_template: "startree-mean-variance",
        alert_template_for_multidimension: "startree-mean-variance-dx",
    },
    AlgorithmOption {
        title: "Percentage Change",
        description: "Alert when the metric changes by more than a percentage compared to a baseline.",
        alert_template: "startree-percentage-rule",
        alert_template_for_multidimension: "startree-percentage-rule-dx",
    },
    AlgorithmOption {
        title: "Absolute Change",
        description: "Alert when the metric changes by more than a fixed amount compared to a baseline.",
        alert_template: "startree-absolute-rule",
        alert_template_for_multidimension: "startree-absolute-rule-dx",
    },
    AlgorithmOption {
        title: "Exponential Smoothing",
        description: "Alert when the metric leaves the range forecast by a seasonal ETS model.",
        alert_template: "startree-ets",
        alert_template_for_multidimension: "startree-ets-dx",
    },
];

/// An algorithm whose alert template is installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableAlgorithmOption {
    pub algorithm_option: &'static AlgorithmOption,
    pub has_alert_template: bool,
    pub has_multidimension_alert_template: bool,
}

/// Options from [`ALGORITHM_OPTIONS`] whose template is among `template_names`.
pub fn generate_available_algorithm_options<S: AsRef<str>>(
    template_names: &[S],
) -> Vec<AvailableAlgorithmOption> {
    let has = |name: &str| template_names.iter().any(|t| t.as_ref() == name);

    ALGORITHM_OPTIONS
        .iter()
        .filter(|option| has(option.alert_template))
        .map(|option| AvailableAlgorithmOption {
            algorithm_option: option,
            has_alert_template: true,
            has_multidimension_alert_template: has(option.alert_template_for_multidimension),
        })
        .collect()
}

/// Whether any available option supports multidimensional alerts.
pub fn has_multidimension<S: AsRef<str>>(template_names: &[S]) -> bool {
    generate_available_algorithm_options(template_names)
        .iter()
        .any(|o| o.has_multidimension_alert_template)
}

/// Reference to an alert template by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRef {
    pub name: String,
}

/// Partial alert update emitted when an option is picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertPropertyChange {
    pub template: TemplateRef,
}

/// Selection step state and callbacks.
pub struct AlertTypeSelection {
    options: Vec<AvailableAlgorithmOption>,
    selected: Option<&'static str>,
    on_alert_property_change: Option<Box<dyn FnMut(AlertPropertyChange)>>,
    on_selection_complete: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for AlertTypeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertTypeSelection")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl AlertTypeSelection {
    pub fn new<S: AsRef<str>>(template_names: &[S]) -> Self {
        Self {
            options: generate_available_algorithm_options(template_names),
            selected: None,
            on_alert_property_change: None,
            on_selection_complete: None,
        }
    }

    pub fn on_alert_property_change(
        mut self,
        callback: impl FnMut(AlertPropertyChange) + 'static,
    ) -> Self {
        self.on_alert_property_change = Some(Box::new(callback));
        self
    }

    pub fn on_selection_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_selection_complete = Some(Box::new(callback));
        self
    }

    pub fn options(&self) -> &[AvailableAlgorithmOption] {
        &self.options
    }

    /// Template name of the last picked option.
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    /// Pick the option titled `title`. Returns `false` if it is not offered.
    pub fn select(&mut self, title: &str) -> bool {
        let Some(option) = self
            .options
            .iter()
            .find(|o| o.algorithm_option.title == title)
            .map(|o| o.algorithm_option)
        else {
            tracing::warn!(title, "unknown algorithm option");
            return false;
        };
        self.handle_algorithm_click(option);
        true
    }

    /// Emit the template change for `option`, then complete the selection.
    pub fn handle_algorithm_click(&mut self, option: &'static AlgorithmOption) {
        self.selected = Some(option.alert_template);
        tracing::debug!(template = option.alert_template, "alert type selected");

        if let Some(callback) = self.on_alert_property_change.as_mut() {
            callback(AlertPropertyChange {
                template: TemplateRef {
                    name: option.alert_template.to_string(),
                },
            });
        }
        if let Some(callback) = self.on_selection_complete.as_mut() {
            callback();
        }
    }
}
