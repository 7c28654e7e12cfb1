use crate::{MatchTransformation, MatchValues};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// The code matches and its metadata contains the content hash.
    ExactMatch,
    Match,
    None,
}

/// How the result was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Using the compiler provided references and auxdata positions.
    Artifacts,
    /// Without any compiler artifacts.
    Heuristic,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BytecodeMatchResult {
    #[serde(rename = "match")]
    pub status: MatchStatus,
    pub transformations: Vec<MatchTransformation>,
    #[serde(rename = "transformationValues")]
    pub values: MatchValues,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_map: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub mode: MatchMode,
}

impl From<BytecodeMatchResult> for serde_json::Value {
    fn from(value: BytecodeMatchResult) -> Self {
        serde_json::to_value(value).expect("match result serialization must succeed")
    }
}

impl BytecodeMatchResult {
    pub fn new(status: MatchStatus, mode: MatchMode) -> Self {
        Self {
            status,
            transformations: vec![],
            values: MatchValues::default(),
            library_map: None,
            message: None,
            mode,
        }
    }

    pub fn no_match(mode: MatchMode, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(MatchStatus::None, mode)
        }
    }

    pub fn is_match(&self) -> bool {
        self.status != MatchStatus::None
    }
}
