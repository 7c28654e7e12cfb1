use crate::{
    auxdata::{has_content_hash, is_auxdata_chunk, split_auxdata, AuxdataStyle, Language},
    call_protection,
    code_artifact_types::{CborAuxdata, CodeArtifacts, CompilationArtifacts},
    constructor_arguments, immutables, libraries,
    match_result::{BytecodeMatchResult, MatchMode, MatchStatus},
    settings::VyperAuxdataSettings,
    CompiledCode, Error, MatchTransformation, PopulatedCode,
};
use std::fmt::{Display, Formatter};

pub const NO_MATCH_MESSAGE: &str = "bytecodes do not match";
pub const STRIPPED_METADATA_MESSAGE: &str = "matched after stripping metadata";
pub const INVALID_CONSTRUCTOR_ARGUMENTS_MESSAGE: &str =
    "trailing bytes cannot be decoded as constructor arguments";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeType {
    Creation,
    Runtime,
}

impl Display for CodeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Creation => write!(f, "creation"),
            Self::Runtime => write!(f, "runtime"),
        }
    }
}

impl CodeType {
    /// Creation code deployed on-chain is followed by the constructor arguments,
    /// so only its prefix is compared. Empty code never matches.
    fn matches(&self, code: &[u8], on_chain_code: &[u8]) -> bool {
        if code.is_empty() {
            return false;
        }
        match self {
            Self::Creation => on_chain_code.starts_with(code),
            Self::Runtime => code == on_chain_code,
        }
    }
}

/// Comparison strategies in the order they are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Strategy {
    Direct,
    AuxdataSubstituted,
    MetadataStripped,
}

const STRATEGIES: [Strategy; 3] = [
    Strategy::Direct,
    Strategy::AuxdataSubstituted,
    Strategy::MetadataStripped,
];

/// Compares the code compiled locally with the code deployed on-chain.
///
/// Created once per compilation; all the contracts of the compilation
/// share the same auxdata style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchEngine {
    style: AuxdataStyle,
}

struct MatchInput<'a> {
    code_type: CodeType,
    on_chain_code: &'a [u8],
    compiled_code: &'a CompiledCode,
    cbor_auxdata: &'a CborAuxdata,
    abi: Option<&'a serde_json::Value>,
}

impl MatchEngine {
    pub fn new(style: AuxdataStyle) -> Self {
        Self { style }
    }

    pub fn for_compiler(
        language: Language,
        compiler_version: &str,
        settings: &VyperAuxdataSettings,
    ) -> Self {
        Self::new(AuxdataStyle::for_compiler(
            language,
            compiler_version,
            settings,
        ))
    }

    pub fn style(&self) -> AuxdataStyle {
        self.style
    }

    pub fn match_runtime_code(
        &self,
        on_chain_code: &[u8],
        compiled_code: &CompiledCode,
        code_artifacts: &CodeArtifacts,
    ) -> Result<BytecodeMatchResult, Error> {
        let populated = PopulatedCode::new(compiled_code.code().to_vec());
        let populated = call_protection::resolve(populated, on_chain_code);
        let populated = immutables::resolve(
            populated,
            on_chain_code,
            &code_artifacts.immutable_references,
            self.style,
        )?;
        let populated = libraries::resolve(
            populated,
            compiled_code.placeholders(),
            on_chain_code,
            &code_artifacts.link_references,
        )?;

        let input = MatchInput {
            code_type: CodeType::Runtime,
            on_chain_code,
            compiled_code,
            cbor_auxdata: &code_artifacts.cbor_auxdata,
            abi: None,
        };
        self.compare(&input, populated)
    }

    pub fn match_creation_code(
        &self,
        on_chain_code: &[u8],
        compiled_code: &CompiledCode,
        code_artifacts: &CodeArtifacts,
        compilation_artifacts: &CompilationArtifacts,
    ) -> Result<BytecodeMatchResult, Error> {
        let populated = PopulatedCode::new(compiled_code.code().to_vec());
        let populated = libraries::resolve(
            populated,
            compiled_code.placeholders(),
            on_chain_code,
            &code_artifacts.link_references,
        )?;

        let input = MatchInput {
            code_type: CodeType::Creation,
            on_chain_code,
            compiled_code,
            cbor_auxdata: &code_artifacts.cbor_auxdata,
            abi: compilation_artifacts.abi.as_ref(),
        };
        self.compare(&input, populated)
    }

    pub fn match_code(
        &self,
        code_type: CodeType,
        on_chain_code: &[u8],
        compiled_code: &CompiledCode,
        code_artifacts: &CodeArtifacts,
        compilation_artifacts: &CompilationArtifacts,
    ) -> Result<BytecodeMatchResult, Error> {
        match code_type {
            CodeType::Creation => self.match_creation_code(
                on_chain_code,
                compiled_code,
                code_artifacts,
                compilation_artifacts,
            ),
            CodeType::Runtime => {
                self.match_runtime_code(on_chain_code, compiled_code, code_artifacts)
            }
        }
    }

    /// Compares the codes without any compiler artifacts: directly,
    /// and then with the auxdata stripped from both sides.
    pub fn match_bytecode_simple(
        &self,
        code_type: CodeType,
        on_chain_code: &[u8],
        compiled_code: &[u8],
    ) -> BytecodeMatchResult {
        if code_type.matches(compiled_code, on_chain_code) {
            let status = self.direct_match_status(compiled_code);
            return BytecodeMatchResult::new(status, MatchMode::Heuristic);
        }
        if self.matches_stripped(code_type, compiled_code, on_chain_code) {
            return BytecodeMatchResult {
                message: Some(STRIPPED_METADATA_MESSAGE.to_string()),
                ..BytecodeMatchResult::new(MatchStatus::Match, MatchMode::Heuristic)
            };
        }
        BytecodeMatchResult::no_match(MatchMode::Heuristic, NO_MATCH_MESSAGE)
    }

    fn compare(
        &self,
        input: &MatchInput,
        populated: PopulatedCode,
    ) -> Result<BytecodeMatchResult, Error> {
        for (id, chunk) in input.cbor_auxdata {
            chunk.checked_range(id, populated.code.len())?;
        }

        for strategy in STRATEGIES {
            if let Some(result) = self.try_strategy(strategy, input, &populated)? {
                tracing::debug!(
                    code_type = %input.code_type,
                    ?strategy,
                    status = ?result.status,
                    "bytecodes matched"
                );
                return Ok(result);
            }
        }

        tracing::debug!(code_type = %input.code_type, "{NO_MATCH_MESSAGE}");
        Ok(BytecodeMatchResult::no_match(
            MatchMode::Artifacts,
            NO_MATCH_MESSAGE,
        ))
    }

    fn try_strategy(
        &self,
        strategy: Strategy,
        input: &MatchInput,
        populated: &PopulatedCode,
    ) -> Result<Option<BytecodeMatchResult>, Error> {
        let result = match strategy {
            Strategy::Direct => {
                if !input.code_type.matches(&populated.code, input.on_chain_code) {
                    return Ok(None);
                }
                let status = self.direct_match_status(input.compiled_code.code());
                self.build_result(input, populated.clone(), status)?
            }
            Strategy::AuxdataSubstituted => {
                let Some(substituted) = self.substitute_auxdata(input, populated)? else {
                    return Ok(None);
                };
                if !input.code_type.matches(&substituted.code, input.on_chain_code) {
                    return Ok(None);
                }
                self.build_result(input, substituted, MatchStatus::Match)?
            }
            Strategy::MetadataStripped => {
                if !self.matches_stripped(input.code_type, &populated.code, input.on_chain_code) {
                    return Ok(None);
                }
                let mut result = self.finalize(populated.clone(), MatchStatus::Match);
                result.message = Some(STRIPPED_METADATA_MESSAGE.to_string());
                result
            }
        };

        Ok(Some(result))
    }

    fn direct_match_status(&self, compiled_code: &[u8]) -> MatchStatus {
        if has_content_hash(compiled_code, self.style) {
            MatchStatus::ExactMatch
        } else {
            MatchStatus::Match
        }
    }

    fn matches_stripped(&self, code_type: CodeType, code: &[u8], on_chain_code: &[u8]) -> bool {
        let code = split_auxdata(code, self.style).execution_code;
        match code_type {
            CodeType::Creation => code_type.matches(code, on_chain_code),
            CodeType::Runtime => {
                let on_chain_code = split_auxdata(on_chain_code, self.style).execution_code;
                code_type.matches(code, on_chain_code)
            }
        }
    }

    /// Replaces the registered auxdata chunks with the on-chain ones, or removes them
    /// if the on-chain code has no auxdata at the same place.
    /// Returns `None` if nothing has been changed.
    fn substitute_auxdata(
        &self,
        input: &MatchInput,
        populated: &PopulatedCode,
    ) -> Result<Option<PopulatedCode>, Error> {
        let mut chunks: Vec<_> = input.cbor_auxdata.iter().collect();
        chunks.sort_by_key(|(_, chunk)| std::cmp::Reverse(chunk.offset));

        let mut substituted = populated.clone();
        let mut applied = Vec::new();
        for (id, chunk) in chunks {
            let range = chunk.checked_range(id, substituted.code.len())?;
            match input.on_chain_code.get(range.clone()) {
                Some(on_chain_value) if is_auxdata_chunk(on_chain_value, self.style) => {
                    if substituted.code[range.clone()] == *on_chain_value {
                        continue;
                    }
                    substituted.splice(range.clone(), on_chain_value);
                    applied.push((range.start, id, on_chain_value));
                }
                _ => {
                    substituted.code.drain(range.clone());
                    applied.push((range.start, id, &[][..]));
                }
            }
        }

        if applied.is_empty() {
            return Ok(None);
        }

        for (offset, id, value) in applied.into_iter().rev() {
            substituted.push_transformation(MatchTransformation::cbor_auxdata(offset, id.clone()));
            substituted.values.add_cbor_auxdata(id.as_str(), value);
        }
        Ok(Some(substituted))
    }

    fn build_result(
        &self,
        input: &MatchInput,
        mut populated: PopulatedCode,
        status: MatchStatus,
    ) -> Result<BytecodeMatchResult, Error> {
        let mut message = None;
        if input.code_type == CodeType::Creation {
            let extracted =
                constructor_arguments::extract(&populated.code, input.on_chain_code, input.abi)?;
            match extracted.arguments {
                Some(arguments) if extracted.transformations.is_empty() => {
                    tracing::warn!(
                        arguments_length = arguments.len(),
                        "creation code matched, but constructor arguments are invalid"
                    );
                    message = Some(INVALID_CONSTRUCTOR_ARGUMENTS_MESSAGE.to_string());
                }
                Some(arguments) => {
                    populated.transformations.extend(extracted.transformations);
                    populated.values.add_constructor_arguments(&arguments);
                }
                None => {}
            }
        }

        let mut result = self.finalize(populated, status);
        result.message = message;
        Ok(result)
    }

    fn finalize(&self, populated: PopulatedCode, status: MatchStatus) -> BytecodeMatchResult {
        let library_map =
            (!populated.values.libraries.is_empty()).then(|| populated.values.library_map());
        BytecodeMatchResult {
            status,
            transformations: populated.transformations,
            values: populated.values,
            library_map,
            message: None,
            mode: MatchMode::Artifacts,
        }
    }
}
