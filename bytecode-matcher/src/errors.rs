use mismatch::Mismatch;
use thiserror::Error;

/// Errors indicating that the provided inputs do not describe each other.
///
/// A bytecode that simply does not match is not an error,
/// but a [`MatchStatus::None`](crate::MatchStatus::None) result.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid compiled code: {0}")]
    InvalidCompiledCode(String),
    #[error("{kind} reference {id} [{start}..{end}) is out of code bounds (code length is {code_length})")]
    ReferenceOutOfBounds {
        kind: &'static str,
        id: String,
        start: usize,
        end: usize,
        code_length: usize,
    },
    #[error("invalid library placeholder for {id} at offset {offset}: {placeholder}")]
    InvalidLibraryPlaceholder {
        id: String,
        offset: usize,
        placeholder: String,
    },
    #[error("cannot parse contract abi: {0}")]
    InvalidAbi(String),
    #[error("code and code with modified metadata lengths mismatch: {0}")]
    CodeLengthMismatch(Mismatch<usize>),
    #[error("failed to parse cbor auxdata containing offset {0}")]
    CborAuxdataNotFound(usize),
}
