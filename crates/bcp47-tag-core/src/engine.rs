use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::canonicalizer::canonicalize;
use crate::classifier::classify;
use crate::registry::Registry;
use crate::results::Results;
use crate::tokenizer::tokenize;
use crate::validator::validate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ExtensionGroup {
    pub singleton: char,
    pub payload: String,
}

impl ExtensionGroup {
    pub(crate) fn formatted(&self) -> String {
        format!("{}-{}", self.singleton, self.payload)
    }
}

// All scratch state for one parse call; nothing here outlives the call.
#[derive(Clone, Debug)]
pub(crate) struct ParseContext {
    pub raw: String,
    pub tokens: Vec<String>,
    pub has_blank_tag: bool,
    pub out_of_order: bool,
    pub is_well_formed: bool,
    pub illegal_characters: Vec<String>,
    pub extensions: Vec<ExtensionGroup>,
    pub private_use: Vec<ExtensionGroup>,
}

impl ParseContext {
    pub(crate) fn new(input: &str) -> Self {
        let stream = tokenize(input);
        Self {
            raw: input.to_string(),
            tokens: stream.tokens,
            has_blank_tag: stream.has_blank,
            out_of_order: false,
            is_well_formed: true,
            illegal_characters: stream.illegal_characters,
            extensions: Vec::new(),
            private_use: Vec::new(),
        }
    }
}

pub fn parse(registry: &Registry, input: &str) -> Results {
    let mut results = Results::default();
    if input.is_empty() {
        results.canonicalize = Some(String::new());
        return results;
    }

    let mut ctx = ParseContext::new(input);
    let whole_tag_deprecated = registry.deprecated_tag(input).is_some();
    if ctx.illegal_characters.is_empty() && !whole_tag_deprecated {
        classify(&mut ctx, &mut results);
    }
    validate(registry, &mut ctx, &mut results);
    if ctx.is_well_formed {
        canonicalize(registry, &ctx, &mut results);
    }
    results.is_valid = results.canonicalize.is_some();
    results
}
