use crate::Error;
use blockscout_display_bytes::Bytes as DisplayBytes;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, ops::Range};

/// Byte range inside the code as emitted by the compiler.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Offset {
    pub start: u32,
    pub length: u32,
}

impl Offset {
    pub fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    pub fn range(&self) -> Range<usize> {
        let start = self.start as usize;
        start..start + self.length as usize
    }

    /// Returns the range if it lies inside the code of `code_length` bytes.
    pub(crate) fn checked_range(
        &self,
        kind: &'static str,
        id: &str,
        code_length: usize,
    ) -> Result<Range<usize>, Error> {
        let range = self.range();
        if range.end > code_length {
            return Err(Error::ReferenceOutOfBounds {
                kind,
                id: id.to_string(),
                start: range.start,
                end: range.end,
                code_length,
            });
        }
        Ok(range)
    }
}

/// `file -> library name -> offsets`
pub type LinkReferences = BTreeMap<String, BTreeMap<String, Vec<Offset>>>;

/// `ast id -> offsets`
pub type ImmutableReferences = BTreeMap<String, Vec<Offset>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CborAuxdataValue {
    pub value: DisplayBytes,
    pub offset: u32,
}

impl CborAuxdataValue {
    pub fn range(&self) -> Range<usize> {
        let start = self.offset as usize;
        start..start + self.value.len()
    }

    pub(crate) fn checked_range(
        &self,
        id: &str,
        code_length: usize,
    ) -> Result<Range<usize>, Error> {
        let range = self.range();
        if range.end > code_length {
            return Err(Error::ReferenceOutOfBounds {
                kind: "cbor auxdata",
                id: id.to_string(),
                start: range.start,
                end: range.end,
                code_length,
            });
        }
        Ok(range)
    }
}

/// `id -> metadata chunk`. Ids are "1", "2", ... in the order of chunk offsets.
pub type CborAuxdata = BTreeMap<String, CborAuxdataValue>;

/// Structural metadata emitted by the compiler for either creation or runtime code.
/// Immutable references are taken into account for runtime code only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeArtifacts {
    pub link_references: LinkReferences,
    pub immutable_references: ImmutableReferences,
    pub cbor_auxdata: CborAuxdata,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompilationArtifacts {
    pub abi: Option<serde_json::Value>,
}
