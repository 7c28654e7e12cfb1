use crate::settings::VyperAuxdataSettings;
use minicbor::Decoder;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Size of the big-endian length suffix following the CBOR encoded auxdata.
pub const LENGTH_SUFFIX_SIZE: usize = 2;
/// Vyper versions before v0.3.5 appended a fixed size auxdata without a length suffix.
pub const VYPER_LEGACY_AUXDATA_SIZE: usize = 11;

const CONTENT_HASH_KEYS: [&str; 3] = ["ipfs", "bzzr0", "bzzr1"];
/// Keys solc may put into the metadata map.
const SOLC_METADATA_KEYS: [&str; 5] = ["ipfs", "bzzr0", "bzzr1", "solc", "experimental"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Solidity,
    Yul,
    Vyper,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solidity => write!(f, "Solidity"),
            Self::Yul => write!(f, "Yul"),
            Self::Vyper => write!(f, "Vyper"),
        }
    }
}

/// Layout of the metadata appended to the end of the code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuxdataStyle {
    /// CBOR map followed by its length (which excludes the 2 length bytes).
    Solidity,
    /// CBOR array followed by its length (which includes the 2 length bytes).
    Vyper,
    /// CBOR map followed by its length (which excludes the 2 length bytes).
    VyperLt0_3_10,
    /// Fixed size CBOR map with no length suffix.
    VyperLt0_3_5,
}

impl AuxdataStyle {
    /// Selects the style for the given compiler. Vyper versions that cannot be parsed
    /// are considered to be the newest ones.
    pub fn for_compiler(
        language: Language,
        compiler_version: &str,
        settings: &VyperAuxdataSettings,
    ) -> Self {
        match language {
            Language::Solidity | Language::Yul => Self::Solidity,
            Language::Vyper => match parse_compiler_version(compiler_version) {
                Some(version) if version < settings.length_suffix_since => Self::VyperLt0_3_5,
                Some(version) if version < settings.self_inclusive_length_since => {
                    Self::VyperLt0_3_10
                }
                Some(_) => Self::Vyper,
                None => {
                    tracing::warn!(
                        compiler_version,
                        "vyper compiler version cannot be parsed; the newest auxdata style is used"
                    );
                    Self::Vyper
                }
            },
        }
    }

    fn is_vyper(&self) -> bool {
        !matches!(self, Self::Solidity)
    }

    /// Decodes a single auxdata item at the start of `encoded`
    /// and returns the number of bytes it occupies.
    fn decoded_size(&self, encoded: &[u8]) -> Option<usize> {
        if self.is_vyper() {
            return vyper_cbor_auxdata::Auxdata::from_cbor(encoded)
                .ok()
                .map(|(_, size)| size);
        }

        let (_, size) = solidity_metadata::MetadataHash::from_cbor(encoded).ok()?;
        let keys = map_keys(encoded.get(..size)?)?;
        keys.iter()
            .all(|key| SOLC_METADATA_KEYS.contains(key))
            .then_some(size)
    }

    /// Converts the value of the length suffix into the full size of the auxdata chunk.
    fn chunk_size(&self, encoded_length: usize) -> usize {
        match self {
            Self::Vyper => encoded_length,
            _ => encoded_length + LENGTH_SUFFIX_SIZE,
        }
    }
}

/// Strips `v` prefix and build metadata (`+commit.<hash>`) from the version.
fn parse_compiler_version(compiler_version: &str) -> Option<semver::Version> {
    let mut version = semver::Version::from_str(compiler_version.trim_start_matches('v')).ok()?;
    version.build = semver::BuildMetadata::EMPTY;
    Some(version)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitCode<'a> {
    pub execution_code: &'a [u8],
    /// The auxdata chunk including its length suffix.
    pub auxdata: Option<&'a [u8]>,
    /// The value of the length suffix. [`VYPER_LEGACY_AUXDATA_SIZE`] for
    /// [`AuxdataStyle::VyperLt0_3_5`]; 0 if there is no auxdata.
    pub cbor_length: usize,
}

impl<'a> SplitCode<'a> {
    fn without_auxdata(code: &'a [u8]) -> Self {
        Self {
            execution_code: code,
            auxdata: None,
            cbor_length: 0,
        }
    }
}

/// Splits the code into the execution part and the trailing auxdata.
/// If no valid auxdata is found, the whole code is returned as execution code.
pub fn split_auxdata(code: &[u8], style: AuxdataStyle) -> SplitCode<'_> {
    let (chunk_size, cbor_length) = match style {
        AuxdataStyle::VyperLt0_3_5 => (VYPER_LEGACY_AUXDATA_SIZE, VYPER_LEGACY_AUXDATA_SIZE),
        _ => {
            let Some(suffix) = code.len().checked_sub(LENGTH_SUFFIX_SIZE).map(|i| &code[i..])
            else {
                return SplitCode::without_auxdata(code);
            };
            let encoded_length = u16::from_be_bytes([suffix[0], suffix[1]]) as usize;
            (style.chunk_size(encoded_length), encoded_length)
        }
    };

    // Execution code must not be empty
    if chunk_size >= code.len() {
        return SplitCode::without_auxdata(code);
    }

    let start = code.len() - chunk_size;
    let auxdata = &code[start..];
    if !is_auxdata_chunk(auxdata, style) {
        return SplitCode::without_auxdata(code);
    }

    SplitCode {
        execution_code: &code[..start],
        auxdata: Some(auxdata),
        cbor_length,
    }
}

/// Checks that the chunk consists of exactly one CBOR item
/// followed by the length suffix consistent with the style.
pub fn is_auxdata_chunk(chunk: &[u8], style: AuxdataStyle) -> bool {
    let cbor = match style {
        AuxdataStyle::VyperLt0_3_5 => chunk,
        _ => {
            let Some(cbor_size) = chunk.len().checked_sub(LENGTH_SUFFIX_SIZE) else {
                return false;
            };
            let (cbor, suffix) = chunk.split_at(cbor_size);
            let encoded_length = u16::from_be_bytes([suffix[0], suffix[1]]) as usize;
            if style.chunk_size(encoded_length) != chunk.len() {
                return false;
            }
            cbor
        }
    };

    !cbor.is_empty() && style.decoded_size(cbor) == Some(cbor.len())
}

/// Returns the size of the auxdata chunk the code starts with, if any.
pub fn auxdata_chunk_size(code: &[u8], style: AuxdataStyle) -> Option<usize> {
    let cbor_size = style.decoded_size(code)?;
    let chunk_size = match style {
        AuxdataStyle::VyperLt0_3_5 => cbor_size,
        _ => cbor_size + LENGTH_SUFFIX_SIZE,
    };
    let chunk = code.get(..chunk_size)?;
    is_auxdata_chunk(chunk, style).then_some(chunk_size)
}

/// Returns `true` if the trailing auxdata is a CBOR map containing
/// an IPFS or Swarm hash of the contract metadata.
pub fn has_content_hash(code: &[u8], style: AuxdataStyle) -> bool {
    let Some(auxdata) = split_auxdata(code, style).auxdata else {
        return false;
    };
    let cbor = match style {
        AuxdataStyle::VyperLt0_3_5 => auxdata,
        _ => &auxdata[..auxdata.len() - LENGTH_SUFFIX_SIZE],
    };
    map_keys(cbor).is_some_and(|keys| keys.iter().any(|key| CONTENT_HASH_KEYS.contains(key)))
}

/// Top level keys of the CBOR map at the start of `cbor`.
/// Returns `None` if it is not a definite length map with string keys.
fn map_keys(cbor: &[u8]) -> Option<Vec<&str>> {
    let mut decoder = Decoder::new(cbor);
    let entries = decoder.map().ok()??;
    (0..entries)
        .map(|_| {
            let key = decoder.str().ok()?;
            decoder.skip().ok()?;
            Some(key)
        })
        .collect()
}
