use crate::{
    code_artifact_types::{CodeArtifacts, CompilationArtifacts},
    match_engine::{CodeType, MatchEngine},
    BytecodeMatchResult, CompiledCode, Error,
};

#[derive(Clone, Debug)]
pub struct OnChainCode {
    runtime: Option<Vec<u8>>,
    creation: Option<Vec<u8>>,
}

impl OnChainCode {
    pub fn runtime(runtime_code: Vec<u8>) -> Self {
        Self {
            runtime: Some(runtime_code),
            creation: None,
        }
    }

    pub fn creation(creation_code: Vec<u8>) -> Self {
        Self {
            runtime: None,
            creation: Some(creation_code),
        }
    }

    pub fn complete(runtime_code: Vec<u8>, creation_code: Vec<u8>) -> Self {
        Self {
            runtime: Some(runtime_code),
            creation: Some(creation_code),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecompiledCode {
    pub runtime: CompiledCode,
    pub creation: CompiledCode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationResult {
    Failure,
    RuntimeMatch {
        runtime_match: BytecodeMatchResult,
    },
    CreationMatch {
        creation_match: BytecodeMatchResult,
    },
    CompleteMatch {
        runtime_match: BytecodeMatchResult,
        creation_match: BytecodeMatchResult,
    },
}

/// Artifacts the compiler emitted for the contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractArtifacts {
    pub compilation: CompilationArtifacts,
    pub creation_code: CodeArtifacts,
    pub runtime_code: CodeArtifacts,
}

/// Verifies both the creation and the runtime code of a contract.
///
/// Errors raised while matching one of the codes are logged
/// and considered as that code not being matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContractVerifier {
    engine: MatchEngine,
}

impl ContractVerifier {
    pub fn new(engine: MatchEngine) -> Self {
        Self { engine }
    }

    pub fn verify_contract(
        &self,
        on_chain_code: &OnChainCode,
        recompiled_code: &RecompiledCode,
        artifacts: &ContractArtifacts,
    ) -> VerificationResult {
        if on_chain_code.runtime.is_none() && on_chain_code.creation.is_none() {
            unreachable!("OnChainCode constructors require at least one of the code values")
        }

        let mut runtime_match = None;
        if let Some(on_chain_runtime_code) = &on_chain_code.runtime {
            let match_result = self.engine.match_runtime_code(
                on_chain_runtime_code,
                &recompiled_code.runtime,
                &artifacts.runtime_code,
            );
            runtime_match = process_match_result(CodeType::Runtime, match_result);
        }

        let mut creation_match = None;
        if let Some(on_chain_creation_code) = &on_chain_code.creation {
            let match_result = self.engine.match_creation_code(
                on_chain_creation_code,
                &recompiled_code.creation,
                &artifacts.creation_code,
                &artifacts.compilation,
            );
            creation_match = process_match_result(CodeType::Creation, match_result);
        }

        matches_to_verification_result(runtime_match, creation_match)
    }
}

fn process_match_result(
    code_type: CodeType,
    match_result: Result<BytecodeMatchResult, Error>,
) -> Option<BytecodeMatchResult> {
    match match_result {
        Err(err) => {
            tracing::error!("({code_type} code) error while verifying: {err:#?}");
            None
        }
        Ok(result) if !result.is_match() => {
            tracing::debug!("({code_type} code) verification failed");
            None
        }
        Ok(result) => Some(result),
    }
}

fn matches_to_verification_result(
    runtime_match: Option<BytecodeMatchResult>,
    creation_match: Option<BytecodeMatchResult>,
) -> VerificationResult {
    match (runtime_match, creation_match) {
        (None, None) => VerificationResult::Failure,
        (Some(runtime_match), None) => VerificationResult::RuntimeMatch { runtime_match },
        (None, Some(creation_match)) => VerificationResult::CreationMatch { creation_match },
        (Some(runtime_match), Some(creation_match)) => VerificationResult::CompleteMatch {
            runtime_match,
            creation_match,
        },
    }
}
