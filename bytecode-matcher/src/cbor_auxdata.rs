use crate::{
    auxdata::{auxdata_chunk_size, AuxdataStyle},
    code_artifact_types::{CborAuxdata, CborAuxdataValue},
    Error,
};
use blockscout_display_bytes::Bytes as DisplayBytes;
use mismatch::Mismatch;

/// Locates the auxdata chunks by comparing the code with the code of the same
/// contract compiled with different metadata.
///
/// Each mismatching byte is expected to lie inside an auxdata chunk; the chunk
/// start is searched backwards from the mismatch.
pub fn retrieve_cbor_auxdata(
    style: AuxdataStyle,
    code: &[u8],
    modified_code: &[u8],
) -> Result<CborAuxdata, Error> {
    if code.len() != modified_code.len() {
        return Err(Error::CodeLengthMismatch(Mismatch::new(
            code.len(),
            modified_code.len(),
        )));
    }

    let mut cbor_auxdata = CborAuxdata::new();
    let mut already_processed = 0;
    while let Some(mismatch_index) = code
        .iter()
        .zip(modified_code)
        .skip(already_processed)
        .position(|(original, modified)| original != modified)
    {
        let mismatch_index = mismatch_index + already_processed;
        let value = next_cbor_auxdata_value(style, code, already_processed, mismatch_index)?;

        already_processed = value.range().end;
        let key = cbor_auxdata.len() + 1;
        cbor_auxdata.insert(key.to_string(), value);
    }

    Ok(cbor_auxdata)
}

fn next_cbor_auxdata_value(
    style: AuxdataStyle,
    code: &[u8],
    already_processed: usize,
    mismatch_index: usize,
) -> Result<CborAuxdataValue, Error> {
    (already_processed..=mismatch_index)
        .rev()
        .find_map(|start| {
            auxdata_chunk_size(&code[start..], style)
                .filter(|size| start + size > mismatch_index)
                .map(|size| CborAuxdataValue {
                    value: DisplayBytes::from(code[start..start + size].to_vec()),
                    offset: start as u32,
                })
        })
        .ok_or(Error::CborAuxdataNotFound(mismatch_index))
}
