//! The datasource creation wizard: edit the datasource as JSON, then review
//! and submit it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::{Result, ValidationError};
use crate::step::StepDescriptor;
use crate::validation::parse_json;
use crate::wizard::Wizard;

/// A datasource definition as edited in the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datasource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Default for Datasource {
    /// A local Pinot cluster.
    fn default() -> Self {
        let properties = json!({
            "zookeeperUrl": "localhost:2123",
            "clusterName": "QuickStartCluster",
            "controllerConnectionScheme": "http",
            "controllerHost": "localhost",
            "controllerPort": 9000,
        });
        Self {
            id: None,
            name: "mypinot".to_string(),
            kind: "pinot".to_string(),
            properties: match properties {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }
}

pub const DATASOURCE_CONFIGURATION: &str = "datasource-configuration";
pub const REVIEW_AND_SUBMIT: &str = "review-and-submit";

fn validate_configuration(text: &str) -> std::result::Result<Datasource, ValidationError> {
    parse_json(text)
}

/// Step table of the datasource wizard.
pub static DATASOURCE_STEPS: [StepDescriptor<Datasource>; 2] = [
    StepDescriptor::new(DATASOURCE_CONFIGURATION, "label.datasource-configuration")
        .with_validator(validate_configuration)
        .editable(),
    StepDescriptor::new(REVIEW_AND_SUBMIT, "label.review-and-submit"),
];

pub type DatasourceWizard = Wizard<Datasource>;

impl Wizard<Datasource> {
    /// Start a datasource wizard from an existing datasource, or the default.
    pub fn datasource(initial: Option<Datasource>) -> Result<Self> {
        Wizard::new(&DATASOURCE_STEPS, initial, Datasource::default)
    }
}
