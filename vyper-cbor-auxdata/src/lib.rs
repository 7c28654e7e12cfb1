//! Decoder of the CBOR auxdata the Vyper compiler appends to bytecode.
//!
//! Known layouts:
//! * before v0.3.10: `{"vyper": [major, minor, patch]}`;
//! * v0.3.10 - v0.4.0: `[runtime_size, [data_sizes..], immutables_size, {"vyper": [..]}]`;
//! * since v0.4.1: the same array prefixed with a 32-byte integrity hash.

use minicbor::{Decoder, data::Type};
use semver::Version;
use thiserror::Error;

pub const INTEGRITY_HASH_SIZE: usize = 32;

const COMPILER_KEY: &str = "vyper";

/// Sizes of the code sections recorded since v0.3.10.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodeLayout {
    pub runtime_code_length: u64,
    pub data_section_lengths: Vec<u64>,
    pub immutables_length: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Auxdata {
    pub integrity_hash: Option<[u8; INTEGRITY_HASH_SIZE]>,
    /// `None` for the map-only layout.
    pub layout: Option<CodeLayout>,
    pub version: Version,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuxdataError {
    #[error("{field}: expected {expected}, found {found}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
        found: Type,
    },
    #[error("{field}: expected {expected} elements, found {found}")]
    UnexpectedLength {
        field: &'static str,
        expected: &'static str,
        found: u64,
    },
    #[error("{0}: indefinite length items are not supported")]
    IndefiniteLength(&'static str),
    #[error("compiler key must be \"{COMPILER_KEY}\", found \"{0}\"")]
    UnknownCompiler(String),
}

impl From<AuxdataError> for minicbor::decode::Error {
    fn from(error: AuxdataError) -> Self {
        minicbor::decode::Error::custom(error)
    }
}

type DecodeResult<T> = Result<T, minicbor::decode::Error>;

impl Auxdata {
    /// Decodes one auxdata item from the start of `encoded`.
    ///
    /// Bytes after the item (e.g. the length suffix) are left untouched;
    /// the returned size is the number of bytes the item takes.
    pub fn from_cbor(encoded: &[u8]) -> DecodeResult<(Self, usize)> {
        let mut decoder = Decoder::new(encoded);
        let auxdata = match decoder.datatype()? {
            Type::Map => Self {
                integrity_hash: None,
                layout: None,
                version: read_compiler_version(&mut decoder)?,
            },
            Type::Array => read_sized_auxdata(&mut decoder)?,
            found => Err(AuxdataError::UnexpectedType {
                field: "auxdata",
                expected: "array or map",
                found,
            })?,
        };
        Ok((auxdata, decoder.position()))
    }

    pub fn immutables_length(&self) -> u64 {
        self.layout
            .as_ref()
            .map_or(0, |layout| layout.immutables_length)
    }
}

fn read_sized_auxdata(d: &mut Decoder) -> DecodeResult<Auxdata> {
    let integrity_hash = match definite_length(d.array()?, "auxdata")? {
        4 => None,
        5 => Some(read_integrity_hash(d)?),
        found => Err(AuxdataError::UnexpectedLength {
            field: "auxdata",
            expected: "4 or 5",
            found,
        })?,
    };

    let runtime_code_length = read_u64(d, "runtime code length")?;
    expect_type(d, "data section lengths", Type::Array)?;
    let sections = definite_length(d.array()?, "data section lengths")?;
    let data_section_lengths = (0..sections)
        .map(|_| read_u64(d, "data section length"))
        .collect::<DecodeResult<_>>()?;
    let immutables_length = read_u64(d, "immutables length")?;

    Ok(Auxdata {
        integrity_hash,
        layout: Some(CodeLayout {
            runtime_code_length,
            data_section_lengths,
            immutables_length,
        }),
        version: read_compiler_version(d)?,
    })
}

fn read_integrity_hash(d: &mut Decoder) -> DecodeResult<[u8; INTEGRITY_HASH_SIZE]> {
    expect_type(d, "integrity hash", Type::Bytes)?;
    let bytes = d.bytes()?;
    let hash = bytes
        .try_into()
        .map_err(|_| AuxdataError::UnexpectedLength {
            field: "integrity hash",
            expected: "32",
            found: bytes.len() as u64,
        })?;
    Ok(hash)
}

/// Reads `{"vyper": [major, minor, patch]}`.
fn read_compiler_version(d: &mut Decoder) -> DecodeResult<Version> {
    expect_type(d, "compiler", Type::Map)?;
    let entries = definite_length(d.map()?, "compiler")?;
    if entries != 1 {
        Err(AuxdataError::UnexpectedLength {
            field: "compiler",
            expected: "1",
            found: entries,
        })?;
    }

    expect_type(d, "compiler key", Type::String)?;
    let key = d.str()?;
    if key != COMPILER_KEY {
        Err(AuxdataError::UnknownCompiler(key.to_string()))?;
    }

    expect_type(d, "compiler version", Type::Array)?;
    let components = definite_length(d.array()?, "compiler version")?;
    if components != 3 {
        Err(AuxdataError::UnexpectedLength {
            field: "compiler version",
            expected: "3",
            found: components,
        })?;
    }
    Ok(Version::new(
        read_u64(d, "major version")?,
        read_u64(d, "minor version")?,
        read_u64(d, "patch version")?,
    ))
}

fn read_u64(d: &mut Decoder, field: &'static str) -> DecodeResult<u64> {
    match d.datatype()? {
        Type::U8 | Type::U16 | Type::U32 | Type::U64 => d.u64(),
        found => Err(AuxdataError::UnexpectedType {
            field,
            expected: "unsigned integer",
            found,
        })?,
    }
}

fn expect_type(d: &mut Decoder, field: &'static str, expected: Type) -> DecodeResult<()> {
    let found = d.datatype()?;
    if found != expected {
        Err(AuxdataError::UnexpectedType {
            field,
            expected: type_name(expected),
            found,
        })?;
    }
    Ok(())
}

fn definite_length(length: Option<u64>, field: &'static str) -> DecodeResult<u64> {
    Ok(length.ok_or(AuxdataError::IndefiniteLength(field))?)
}

fn type_name(ty: Type) -> &'static str {
    match ty {
        Type::Array => "array",
        Type::Map => "map",
        Type::Bytes => "bytes",
        Type::String => "string",
        _ => "other",
    }
}
