use crate::{
    auxdata::{split_auxdata, AuxdataStyle, LENGTH_SUFFIX_SIZE},
    code_artifact_types::{ImmutableReferences, Offset},
    Error, MatchTransformation, PopulatedCode,
};
use std::collections::BTreeMap;

const KIND: &str = "immutable";

/// Substitutes immutable values deployed on-chain into the runtime code.
///
/// Solidity reserves zero-filled slots for immutables inside the code, which are
/// replaced in place. Vyper stores immutables after the end of the runtime code,
/// so references starting at the end of the populated code are appended.
pub fn resolve(
    mut populated: PopulatedCode,
    on_chain_code: &[u8],
    immutable_references: &ImmutableReferences,
    style: AuxdataStyle,
) -> Result<PopulatedCode, Error> {
    let mut references: Vec<(&String, &Offset)> = immutable_references
        .iter()
        .flat_map(|(id, offsets)| offsets.iter().map(move |offset| (id, offset)))
        .collect();
    references.sort_by_key(|(_, offset)| offset.start);

    for (id, offset) in references {
        let range = offset.range();
        let Some(value) = on_chain_code.get(range.clone()) else {
            tracing::debug!(id = %id, start = range.start, "immutable value is missing on chain");
            continue;
        };

        let appends_value =
            !matches!(style, AuxdataStyle::Solidity) && range.start == populated.code.len();
        if appends_value {
            populated.code.extend_from_slice(value);
            populated.push_transformation(MatchTransformation::insert_immutable(
                range.start,
                id.clone(),
            ));
            populated.values.add_immutable(id, value);
            continue;
        }

        let range = offset.checked_range(KIND, id, populated.code.len())?;
        if populated.code[range.clone()] == *value {
            continue;
        }
        populated.splice(range.clone(), value);
        populated.push_transformation(MatchTransformation::replace_immutable(
            range.start,
            id.clone(),
        ));
        populated.values.add_immutable(id, value);
    }

    Ok(populated)
}

/// Builds runtime immutable references from the auxdata of Vyper (v0.3.10+) creation code.
/// The whole immutables section is referenced under the `"0"` id.
///
/// Returns `None` if the code does not end with such auxdata.
pub fn vyper_immutable_references(creation_code: &[u8]) -> Option<ImmutableReferences> {
    let auxdata = split_auxdata(creation_code, AuxdataStyle::Vyper).auxdata?;
    let cbor = &auxdata[..auxdata.len() - LENGTH_SUFFIX_SIZE];
    let (auxdata, _) = vyper_cbor_auxdata::Auxdata::from_cbor(cbor).ok()?;
    let layout = auxdata.layout?;

    let mut references = BTreeMap::new();
    if layout.immutables_length > 0 {
        let offset = Offset::new(
            u32::try_from(layout.runtime_code_length).ok()?,
            u32::try_from(layout.immutables_length).ok()?,
        );
        references.insert("0".to_string(), vec![offset]);
    }
    Some(references)
}
