use crate::{
    code_artifact_types::LinkReferences, compiled_code::LIBRARY_PLACEHOLDER_LENGTH, Error,
    MatchTransformation, PopulatedCode,
};
use alloy_core::primitives::keccak256;
use std::collections::BTreeMap;

const KIND: &str = "library";

/// Placeholder used since solidity v0.5.0: `__$<34 hex chars of keccak256(fqn)>$__`.
pub fn hash_placeholder(fully_qualified_name: &str) -> String {
    let hash = hex::encode(keccak256(fully_qualified_name.as_bytes()));
    format!("__${}$__", &hash[..34])
}

/// Placeholder used before solidity v0.5.0: `__<fqn>` padded with `_` up to 40 characters.
pub fn name_placeholder(fully_qualified_name: &str) -> String {
    let name: String = fully_qualified_name
        .chars()
        .take(LIBRARY_PLACEHOLDER_LENGTH - 2)
        .collect();
    format!("__{name:_<width$}", width = LIBRARY_PLACEHOLDER_LENGTH - 2)
}

fn is_valid_placeholder(placeholder: &str, fully_qualified_name: &str) -> bool {
    placeholder == hash_placeholder(fully_qualified_name)
        || placeholder == name_placeholder(fully_qualified_name)
}

/// Links the libraries by substituting the addresses deployed on-chain
/// at each referenced range.
///
/// `placeholders` are the unlinked placeholders of the compiled code by byte offset.
/// A range without a placeholder must contain either zeros or the on-chain address.
pub fn resolve(
    mut populated: PopulatedCode,
    placeholders: &BTreeMap<usize, String>,
    on_chain_code: &[u8],
    link_references: &LinkReferences,
) -> Result<PopulatedCode, Error> {
    for (file, libraries) in link_references {
        for (library, offsets) in libraries {
            let fully_qualified_name = format!("{file}:{library}");
            for offset in offsets {
                let range =
                    offset.checked_range(KIND, &fully_qualified_name, populated.code.len())?;
                let Some(address) = on_chain_code.get(range.clone()) else {
                    tracing::debug!(
                        library = %fully_qualified_name,
                        start = range.start,
                        "library address is missing on chain"
                    );
                    continue;
                };

                let current = &populated.code[range.clone()];
                match placeholders.get(&range.start) {
                    Some(placeholder)
                        if !is_valid_placeholder(placeholder, &fully_qualified_name) =>
                    {
                        return Err(Error::InvalidLibraryPlaceholder {
                            id: fully_qualified_name,
                            offset: range.start,
                            placeholder: placeholder.clone(),
                        })
                    }
                    Some(_) => {}
                    None if current == address => continue,
                    None if current.iter().all(|&byte| byte == 0) => {}
                    None => {
                        return Err(Error::InvalidLibraryPlaceholder {
                            id: fully_qualified_name,
                            offset: range.start,
                            placeholder: hex::encode(current),
                        })
                    }
                }

                populated.splice(range.clone(), address);
                populated.push_transformation(MatchTransformation::library(
                    range.start,
                    fully_qualified_name.clone(),
                ));
                populated
                    .values
                    .add_library(fully_qualified_name.as_str(), address);
            }
        }
    }

    Ok(populated)
}
