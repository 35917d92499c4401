//! Linear multi-step flow with per-step validation gates.

use serde::Serialize;

use crate::error::{Result, WizardError};
use crate::step::StepDescriptor;

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Moved forward to the given step.
    Advanced(usize),
    /// Moved back to the given step.
    Retreated(usize),
    /// The current step's validator rejected the editor text.
    Blocked(String),
    /// The last step was confirmed and the finish callback ran.
    Finished,
    /// Nothing happened (back on the first step).
    Unchanged,
}

/// Snapshot of wizard state for a view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardView {
    /// Label keys of every step, in order.
    pub step_labels: Vec<&'static str>,
    pub active_step: usize,
    pub title_key: &'static str,
    pub editor_text: String,
    pub read_only: bool,
    pub back_enabled: bool,
    pub reset_visible: bool,
    pub next_label_key: &'static str,
    pub show_cancel: bool,
    /// Helper text under the editor.
    pub error: Option<String>,
    pub show_error_banner: bool,
}

/// Drives a fixed, ordered table of steps over working data of type `T`.
///
/// The working data is edited as JSON text. Leaving a step forward runs its
/// validator on that text; on success the decoded value replaces the working
/// data, on failure the wizard stays put and exposes the message. Confirming
/// the last step hands the data to the finish callback, once.
pub struct Wizard<T: 'static> {
    steps: &'static [StepDescriptor<T>],
    current: usize,
    initial: Option<T>,
    make_default: fn() -> T,
    data: T,
    editor_text: String,
    error: Option<String>,
    show_cancel: bool,
    finished: bool,
    on_finish: Option<Box<dyn FnMut(T)>>,
    on_cancel: Option<Box<dyn FnMut()>>,
}

impl<T> std::fmt::Debug for Wizard<T>
where
    T: std::fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("current", &self.current)
            .field("data", &self.data)
            .field("error", &self.error)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<T> Wizard<T>
where
    T: Serialize + Clone + 'static,
{
    /// Start on the first step with `initial`, or a fresh default.
    pub fn new(
        steps: &'static [StepDescriptor<T>],
        initial: Option<T>,
        make_default: fn() -> T,
    ) -> Result<Self> {
        if steps.is_empty() {
            return Err(WizardError::NoSteps);
        }
        let data = initial.clone().unwrap_or_else(make_default);
        let editor_text = serde_json::to_string(&data)?;
        Ok(Self {
            steps,
            current: 0,
            initial,
            make_default,
            data,
            editor_text,
            error: None,
            show_cancel: false,
            finished: false,
            on_finish: None,
            on_cancel: None,
        })
    }

    pub fn on_finish(mut self, callback: impl FnMut(T) + 'static) -> Self {
        self.on_finish = Some(Box::new(callback));
        self
    }

    pub fn on_cancel(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    pub fn show_cancel(mut self, show: bool) -> Self {
        self.show_cancel = show;
        self
    }

    pub fn steps(&self) -> &'static [StepDescriptor<T>] {
        self.steps
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &'static StepDescriptor<T> {
        &self.steps[self.current]
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Whether the last transition finished the wizard.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The working data as of the last successful validation.
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn editor_text(&self) -> &str {
        &self.editor_text
    }

    /// Replace the editor text. Validation happens on [`next`](Self::next).
    pub fn set_editor_text(&mut self, text: impl Into<String>) {
        self.editor_text = text.into();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate the current step and move forward, or finish on the last step.
    ///
    /// Every successful call on the last step hands the data to the finish
    /// callback once, so a failed submission can be retried.
    pub fn next(&mut self) -> Transition {
        let step = self.current_step();
        if let Some(validate) = step.validate {
            match validate(&self.editor_text) {
                Ok(data) => {
                    self.error = None;
                    self.data = data;
                }
                Err(err) => {
                    tracing::debug!(step = step.id, error = %err, "step validation failed");
                    self.error = Some(err.message.clone());
                    return Transition::Blocked(err.message);
                }
            }
        }

        if self.is_last_step() {
            self.finished = true;
            tracing::info!(step = step.id, "wizard finished");
            if let Some(callback) = self.on_finish.as_mut() {
                callback(self.data.clone());
            }
            return Transition::Finished;
        }

        self.current += 1;
        tracing::debug!(from = step.id, to = self.current_step().id, "wizard advanced");
        Transition::Advanced(self.current)
    }

    /// Move back one step. No-op on the first step.
    pub fn back(&mut self) -> Transition {
        if self.current == 0 {
            return Transition::Unchanged;
        }
        self.finished = false;
        self.current -= 1;
        Transition::Retreated(self.current)
    }

    /// Restore the initial data (or a fresh default) and its editor text.
    pub fn reset(&mut self) -> Result<()> {
        let data = self.initial.clone().unwrap_or_else(self.make_default);
        self.editor_text = serde_json::to_string(&data)?;
        self.data = data;
        self.error = None;
        self.finished = false;
        tracing::debug!(step = self.current_step().id, "wizard reset");
        Ok(())
    }

    pub fn cancel(&mut self) {
        tracing::debug!(step = self.current_step().id, "wizard cancelled");
        if let Some(callback) = self.on_cancel.as_mut() {
            callback();
        }
    }

    pub fn view(&self) -> WizardView {
        let step = self.current_step();
        WizardView {
            step_labels: self.steps.iter().map(|s| s.label_key).collect(),
            active_step: self.current,
            title_key: step.label_key,
            editor_text: self.editor_text.clone(),
            read_only: !step.editable,
            back_enabled: self.current > 0,
            reset_visible: step.editable,
            next_label_key: if self.is_last_step() {
                "label.finish"
            } else {
                "label.next"
            },
            show_cancel: self.show_cancel,
            error: self.error.clone(),
            show_error_banner: self.error.is_some(),
        }
    }
}
