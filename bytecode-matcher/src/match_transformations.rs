use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TransformationType {
    Insert,
    Replace,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TransformationReason {
    CallProtection,
    CborAuxdata,
    ConstructorArguments,
    Immutable,
    Library,
}

/// Audit record of a single substitution applied to the compiled code.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transformation {
    pub r#type: TransformationType,
    pub reason: TransformationReason,
    pub offset: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl From<Transformation> for serde_json::Value {
    fn from(value: Transformation) -> Self {
        serde_json::to_value(value).expect("transformations serialization must succeed")
    }
}

impl Transformation {
    pub fn call_protection(offset: usize) -> Self {
        Self {
            r#type: TransformationType::Replace,
            reason: TransformationReason::CallProtection,
            offset,
            id: None,
        }
    }

    pub fn cbor_auxdata(offset: usize, id: String) -> Self {
        Self {
            r#type: TransformationType::Replace,
            reason: TransformationReason::CborAuxdata,
            offset,
            id: Some(id),
        }
    }

    pub fn constructor_arguments(offset: usize) -> Self {
        Self {
            r#type: TransformationType::Insert,
            reason: TransformationReason::ConstructorArguments,
            offset,
            id: None,
        }
    }

    pub fn replace_immutable(offset: usize, id: String) -> Self {
        Self {
            r#type: TransformationType::Replace,
            reason: TransformationReason::Immutable,
            offset,
            id: Some(id),
        }
    }

    /// Immutable values appended after the end of the code (Vyper).
    pub fn insert_immutable(offset: usize, id: String) -> Self {
        Self {
            r#type: TransformationType::Insert,
            reason: TransformationReason::Immutable,
            offset,
            id: Some(id),
        }
    }

    pub fn library(offset: usize, id: String) -> Self {
        Self {
            r#type: TransformationType::Replace,
            reason: TransformationReason::Library,
            offset,
            id: Some(id),
        }
    }
}
