pub mod auxdata;
pub mod call_protection;
pub mod cbor_auxdata;
pub mod constructor_arguments;
pub mod immutables;
pub mod libraries;
pub mod settings;

mod code_artifact_types;
mod compiled_code;
mod errors;
mod match_engine;
mod match_result;
mod match_transformations;
mod match_values;
mod populated_code;
mod verification;

pub use auxdata::{AuxdataStyle, Language, SplitCode};
pub use code_artifact_types::{
    CborAuxdata, CborAuxdataValue, CodeArtifacts, CompilationArtifacts, ImmutableReferences,
    LinkReferences, Offset,
};
pub use compiled_code::{CompiledCode, LIBRARY_PLACEHOLDER_LENGTH};
pub use errors::Error;
pub use match_engine::{
    CodeType, MatchEngine, INVALID_CONSTRUCTOR_ARGUMENTS_MESSAGE, NO_MATCH_MESSAGE,
    STRIPPED_METADATA_MESSAGE,
};
pub use match_result::{BytecodeMatchResult, MatchMode, MatchStatus};
pub use match_transformations::{
    Transformation as MatchTransformation, TransformationReason, TransformationType,
};
pub use match_values::Values as MatchValues;
pub use populated_code::PopulatedCode;
pub use settings::{Settings, VyperAuxdataSettings};
pub use verification::{
    ContractArtifacts, ContractVerifier, OnChainCode, RecompiledCode, VerificationResult,
};
