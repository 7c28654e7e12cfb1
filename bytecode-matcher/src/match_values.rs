use blockscout_display_bytes::Bytes as DisplayBytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Concrete values the transformations resolved to, grouped by transformation reason.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Values {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub cbor_auxdata: BTreeMap<String, DisplayBytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor_arguments: Option<DisplayBytes>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub libraries: BTreeMap<String, DisplayBytes>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub immutables: BTreeMap<String, DisplayBytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_protection: Option<DisplayBytes>,
}

impl From<Values> for serde_json::Value {
    fn from(value: Values) -> Self {
        serde_json::to_value(value).expect("values serialization must succeed")
    }
}

impl Values {
    pub fn add_cbor_auxdata(&mut self, key: impl Into<String>, value: &[u8]) -> &mut Self {
        self.cbor_auxdata
            .insert(key.into(), DisplayBytes::from(value.to_vec()));
        self
    }

    pub fn add_constructor_arguments(&mut self, value: &[u8]) -> &mut Self {
        self.constructor_arguments = Some(DisplayBytes::from(value.to_vec()));
        self
    }

    /// The value of a library is the same for all its references,
    /// so only the first inserted one is kept.
    pub fn add_library(&mut self, key: impl Into<String>, value: &[u8]) -> &mut Self {
        self.libraries
            .entry(key.into())
            .or_insert_with(|| DisplayBytes::from(value.to_vec()));
        self
    }

    /// The value of an immutable is the same for all its references,
    /// so only the first inserted one is kept.
    pub fn add_immutable(&mut self, key: impl Into<String>, value: &[u8]) -> &mut Self {
        self.immutables
            .entry(key.into())
            .or_insert_with(|| DisplayBytes::from(value.to_vec()));
        self
    }

    pub fn add_call_protection(&mut self, value: &[u8]) -> &mut Self {
        self.call_protection = Some(DisplayBytes::from(value.to_vec()));
        self
    }

    /// Fully qualified library names mapped to `0x` prefixed addresses.
    pub fn library_map(&self) -> BTreeMap<String, String> {
        self.libraries
            .iter()
            .map(|(fully_qualified_name, address)| {
                (fully_qualified_name.clone(), address.to_string())
            })
            .collect()
    }
}
