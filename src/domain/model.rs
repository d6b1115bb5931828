use serde::{Deserialize, Serialize};

pub const DEFAULT_SIGNATURE: &str = "Jordan";

/// Form state the message is rendered from. Every field may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutreachInput {
    pub business_name: String,
    pub niche: String,
    pub city: String,
    pub owner_name: String,
    pub observations_text: String,
    pub signature: String,
}

impl Default for OutreachInput {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            niche: String::new(),
            city: String::new(),
            owner_name: String::new(),
            observations_text: String::new(),
            signature: DEFAULT_SIGNATURE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedMessage {
    pub message: String,
    pub observations: Vec<String>,
}
