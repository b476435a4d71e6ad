//! The closed set of assistant personas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OpError;

use super::prompts;

/// Assistant archetype shaping the drafting prompt.
///
/// The set is closed: each variant is exhaustively mapped to its wire label
/// and prompt template, so adding a persona is a single checked edit here
/// plus a template in `prompts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantPersona {
    Sales,
    Followup,
}

impl AssistantPersona {
    pub const ALL: [AssistantPersona; 2] = [AssistantPersona::Sales, AssistantPersona::Followup];

    /// Wire label used by the classification schema and the HTTP surface.
    pub fn as_str(self) -> &'static str {
        match self {
            AssistantPersona::Sales => "sales",
            AssistantPersona::Followup => "followup",
        }
    }

    /// Persona-specific system instruction for the drafting prompt.
    pub fn draft_system(self) -> &'static str {
        match self {
            AssistantPersona::Sales => prompts::SALES_SYSTEM,
            AssistantPersona::Followup => prompts::FOLLOWUP_SYSTEM,
        }
    }

    /// All wire labels, in declaration order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.as_str()).collect()
    }
}

impl FromStr for AssistantPersona {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sales" => Ok(AssistantPersona::Sales),
            "followup" => Ok(AssistantPersona::Followup),
            _ => Err(OpError::Domain("Invalid assistant type".to_string())),
        }
    }
}

impl fmt::Display for AssistantPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
