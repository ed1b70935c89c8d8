use bcp47_tag_core::Results;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub language: String,
    pub extended: Vec<String>,
    pub scripts: Vec<String>,
    pub regions: Vec<String>,
    pub variants: Vec<String>,
    pub extensions: Vec<String>,
    pub private_use: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ParseReport {
    pub fn from_results(results: &Results) -> Self {
        Self {
            language: results.language_tag.clone(),
            extended: results.extended_tags.clone(),
            scripts: results.script_tags.clone(),
            regions: results.region_tags.clone(),
            variants: results.variant_tags.clone(),
            extensions: results.extension_tags.clone(),
            private_use: results.private_use_tags.clone(),
            canonical: results.canonicalize.clone(),
            valid: results.is_valid,
            errors: results.error_messages.clone(),
        }
    }
}
