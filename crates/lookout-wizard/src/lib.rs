//! Lookout Wizard - multi-step flows for the Lookout front end.
//!
//! This crate provides:
//! - A generic wizard engine over an ordered table of step descriptors
//!   ([`Wizard`], [`StepDescriptor`])
//! - The datasource creation wizard ([`DatasourceWizard`])
//! - Alert-type selection for the guided alert wizard ([`AlertTypeSelection`])
//! - JSON validation of editor text ([`validate_json`])
//!
//! # Example
//!
//! ```
//! use lookout_wizard::{DatasourceWizard, Transition};
//!
//! let mut wizard = DatasourceWizard::datasource(None)?;
//! wizard.set_editor_text("{ not json");
//! assert!(matches!(wizard.next(), Transition::Blocked(_)));
//!
//! wizard.reset()?;
//! assert_eq!(wizard.next(), Transition::Advanced(1));
//! assert_eq!(wizard.next(), Transition::Finished);
//! # Ok::<(), lookout_wizard::WizardError>(())
//! ```

pub mod alert_type;
pub mod datasource;
mod error;
mod step;
pub mod validation;
mod wizard;

pub use alert_type::{
    AlertPropertyChange, AlertTypeSelection, AlgorithmOption, AvailableAlgorithmOption,
    TemplateRef, generate_available_algorithm_options, has_multidimension,
};
pub use datasource::{DATASOURCE_STEPS, Datasource, DatasourceWizard};
pub use error::{Result, ValidationError, WizardError};
pub use step::{StepDescriptor, Validator};
pub use validation::{ValidationResult, validate_json};
pub use wizard::{Transition, Wizard, WizardView};
