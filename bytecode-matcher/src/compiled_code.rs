use crate::Error;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Length of a library placeholder in characters of the hex text.
pub const LIBRARY_PLACEHOLDER_LENGTH: usize = 40;

/// Code obtained as a result of local compilation.
///
/// Compilers leave unlinked library references as 40-character placeholders
/// inside the hex text (e.g. `__$<hash>$__`). Those are not valid hex, so they are
/// kept aside keyed by the byte offset they start at, while the decoded code
/// contains 20 zero bytes in their place.
#[derive(Clone, Debug, Default, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct CompiledCode {
    code: Vec<u8>,
    placeholders: BTreeMap<usize, String>,
}

impl CompiledCode {
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Unlinked library placeholders keyed by their byte offset.
    pub fn placeholders(&self) -> &BTreeMap<usize, String> {
        &self.placeholders
    }
}

impl From<Vec<u8>> for CompiledCode {
    fn from(code: Vec<u8>) -> Self {
        Self {
            code,
            placeholders: BTreeMap::new(),
        }
    }
}

impl FromStr for CompiledCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_text = s.strip_prefix("0x").unwrap_or(s);
        if !hex_text.is_ascii() {
            return Err(Error::InvalidCompiledCode("non-ascii characters".into()));
        }
        if hex_text.len() % 2 != 0 {
            return Err(Error::InvalidCompiledCode(format!(
                "odd number of hex characters: {}",
                hex_text.len()
            )));
        }

        let mut code = Vec::with_capacity(hex_text.len() / 2);
        let mut placeholders = BTreeMap::new();

        let decode_segment = |segment: &str, code: &mut Vec<u8>| {
            hex::decode(segment)
                .map(|decoded| code.extend(decoded))
                .map_err(|err| Error::InvalidCompiledCode(err.to_string()))
        };

        let mut segment_start = 0;
        let mut index = 0;
        while index < hex_text.len() {
            if !hex_text[index..].starts_with("__") {
                index += 2;
                continue;
            }

            let placeholder_end = index + LIBRARY_PLACEHOLDER_LENGTH;
            if placeholder_end > hex_text.len() {
                return Err(Error::InvalidCompiledCode(format!(
                    "truncated library placeholder at offset {}",
                    index / 2
                )));
            }

            decode_segment(&hex_text[segment_start..index], &mut code)?;
            placeholders.insert(index / 2, hex_text[index..placeholder_end].to_string());
            code.extend([0u8; LIBRARY_PLACEHOLDER_LENGTH / 2]);

            index = placeholder_end;
            segment_start = index;
        }
        decode_segment(&hex_text[segment_start..], &mut code)?;

        Ok(Self { code, placeholders })
    }
}

impl Display for CompiledCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x")?;
        let mut index = 0;
        for (&offset, placeholder) in &self.placeholders {
            write!(f, "{}{placeholder}", hex::encode(&self.code[index..offset]))?;
            index = offset + LIBRARY_PLACEHOLDER_LENGTH / 2;
        }
        write!(f, "{}", hex::encode(&self.code[index..]))
    }
}
