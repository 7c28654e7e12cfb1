use crate::{MatchTransformation, PopulatedCode};

/// `PUSH20` opcode starting the self-address check of contracts deployable as libraries.
const PUSH20: u8 = 0x73;
const ADDRESS_LENGTH: usize = 20;

/// Replaces the zero address of the library call protection (`PUSH20 <address>`
/// at the start of runtime code) with the address deployed on-chain.
pub fn resolve(mut populated: PopulatedCode, on_chain_code: &[u8]) -> PopulatedCode {
    let range = 1..1 + ADDRESS_LENGTH;
    let has_call_protection = |code: &[u8]| code.len() >= range.end && code[0] == PUSH20;

    if !has_call_protection(&populated.code) || !has_call_protection(on_chain_code) {
        return populated;
    }
    if populated.code[range.clone()].iter().any(|&byte| byte != 0) {
        return populated;
    }

    let address = &on_chain_code[range.clone()];
    if populated.code[range.clone()] == *address {
        return populated;
    }

    populated.splice(range.clone(), address);
    populated.push_transformation(MatchTransformation::call_protection(range.start));
    populated.values.add_call_protection(address);

    populated
}
