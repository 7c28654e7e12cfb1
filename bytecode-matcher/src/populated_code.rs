use crate::{MatchTransformation, MatchValues};
use std::ops::Range;

/// A copy of the compiled code with on-chain values substituted into it,
/// together with the log of the substitutions made so far.
///
/// Resolvers take it by value and return the next state, so the order
/// in which they are applied is explicit at the call site.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopulatedCode {
    pub code: Vec<u8>,
    pub transformations: Vec<MatchTransformation>,
    pub values: MatchValues,
}

impl PopulatedCode {
    pub fn new(code: Vec<u8>) -> Self {
        Self {
            code,
            transformations: vec![],
            values: MatchValues::default(),
        }
    }

    pub(crate) fn splice(&mut self, range: Range<usize>, value: &[u8]) {
        self.code[range].copy_from_slice(value);
    }

    pub(crate) fn push_transformation(&mut self, transformation: MatchTransformation) {
        self.transformations.push(transformation);
    }
}
