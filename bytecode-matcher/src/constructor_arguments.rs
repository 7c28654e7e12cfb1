use crate::{Error, MatchTransformation};
use alloy_dyn_abi::JsonAbiExt;
use alloy_json_abi::{Constructor, JsonAbi};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedArguments {
    /// Bytes following the compiled creation code on chain.
    pub arguments: Option<Vec<u8>>,
    /// Contains the `constructorArguments` insertion if the arguments
    /// are valid for the constructor declared in the abi.
    pub transformations: Vec<MatchTransformation>,
}

impl ExtractedArguments {
    pub fn is_validated(&self) -> bool {
        !self.transformations.is_empty()
    }
}

/// Extracts constructor arguments appended to the creation code deployed on chain.
///
/// Arguments are considered valid only if decoding them with the constructor
/// parameter types and encoding back results in the same bytes.
pub fn extract(
    compiled_code: &[u8],
    on_chain_code: &[u8],
    abi: Option<&serde_json::Value>,
) -> Result<ExtractedArguments, Error> {
    let offset = compiled_code.len();
    let arguments = match on_chain_code.get(offset..) {
        Some(arguments) if !arguments.is_empty() => arguments,
        _ => return Ok(ExtractedArguments::default()),
    };

    let constructor = match abi {
        Some(abi) => {
            JsonAbi::from_json_str(&abi.to_string())
                .map_err(|err| Error::InvalidAbi(err.to_string()))?
                .constructor
        }
        None => None,
    };

    let is_valid = match constructor {
        Some(constructor) if !constructor.inputs.is_empty() => {
            is_round_trip_encoded(&constructor, arguments)
        }
        _ => false,
    };

    let transformations = if is_valid {
        vec![MatchTransformation::constructor_arguments(offset)]
    } else {
        tracing::debug!(
            arguments_length = arguments.len(),
            "trailing bytes are not valid constructor arguments"
        );
        vec![]
    };

    Ok(ExtractedArguments {
        arguments: Some(arguments.to_vec()),
        transformations,
    })
}

fn is_round_trip_encoded(constructor: &Constructor, arguments: &[u8]) -> bool {
    let Ok(values) = constructor.abi_decode_input(arguments, true) else {
        return false;
    };
    constructor
        .abi_encode_input(&values)
        .map(|encoded| encoded == arguments)
        .unwrap_or_default()
}
