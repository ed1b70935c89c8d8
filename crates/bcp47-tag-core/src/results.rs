use alloc::string::String;
use alloc::vec::Vec;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Results {
    pub language_tag: String,
    pub extended_tags: Vec<String>,
    pub script_tags: Vec<String>,
    pub region_tags: Vec<String>,
    pub variant_tags: Vec<String>,
    pub extension_tags: Vec<String>,
    pub private_use_tags: Vec<String>,
    pub canonicalize: Option<String>,
    pub is_valid: bool,
    pub error_messages: Vec<String>,
}
