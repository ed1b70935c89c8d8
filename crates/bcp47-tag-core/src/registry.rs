use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubtagType {
    Language,
    Extlang,
    Script,
    Region,
    Variant,
    Grandfathered,
    Redundant,
}

impl SubtagType {
    fn from_field(value: &str) -> Option<Self> {
        match value {
            "language" => Some(SubtagType::Language),
            "extlang" => Some(SubtagType::Extlang),
            "script" => Some(SubtagType::Script),
            "region" => Some(SubtagType::Region),
            "variant" => Some(SubtagType::Variant),
            "grandfathered" => Some(SubtagType::Grandfathered),
            "redundant" => Some(SubtagType::Redundant),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrySubtag {
    pub subtag_type: SubtagType,
    pub tag_or_subtag: String,
    pub descriptions: Vec<String>,
    pub added: String,
    pub suppress_script: Option<String>,
    pub scope: Option<String>,
    pub macrolanguage: Option<String>,
    pub comments: Option<String>,
    pub deprecated: Option<String>,
    pub preferred_value: Option<String>,
    pub prefixes: Vec<String>,
}

#[derive(Clone, Debug, Default)]
struct RecordBuilder {
    subtag_type: Option<SubtagType>,
    tag_or_subtag: String,
    descriptions: Vec<String>,
    added: String,
    suppress_script: Option<String>,
    scope: Option<String>,
    macrolanguage: Option<String>,
    comments: Option<String>,
    deprecated: Option<String>,
    preferred_value: Option<String>,
    prefixes: Vec<String>,
}

impl RecordBuilder {
    fn finish(self) -> Option<RegistrySubtag> {
        let subtag_type = self.subtag_type?;
        if self.tag_or_subtag.is_empty() {
            return None;
        }
        Some(RegistrySubtag {
            subtag_type,
            tag_or_subtag: self.tag_or_subtag,
            descriptions: self.descriptions,
            added: self.added,
            suppress_script: self.suppress_script,
            scope: self.scope,
            macrolanguage: self.macrolanguage,
            comments: self.comments,
            deprecated: self.deprecated,
            preferred_value: self.preferred_value,
            prefixes: self.prefixes,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Continuation {
    None,
    Description,
    Comments,
}

#[derive(Clone, Debug, Default)]
pub struct Registry {
    languages: BTreeMap<String, RegistrySubtag>,
    extlangs: BTreeMap<String, RegistrySubtag>,
    scripts: BTreeMap<String, RegistrySubtag>,
    regions: BTreeMap<String, RegistrySubtag>,
    variants: BTreeMap<String, RegistrySubtag>,
    deprecated: BTreeMap<String, RegistrySubtag>,
    file_date: String,
}

impl Registry {
    pub fn from_text(text: &str) -> Self {
        let mut registry = Registry::default();
        let mut current = RecordBuilder::default();
        let mut continuation = Continuation::None;

        for line in text.lines() {
            if line == "%%" {
                registry.insert(core::mem::take(&mut current).finish());
                continuation = Continuation::None;
                continue;
            }

            if let Some(rest) = continuation_text(line) {
                match continuation {
                    Continuation::Description => {
                        if let Some(last) = current.descriptions.last_mut() {
                            last.push_str(rest);
                        }
                    }
                    Continuation::Comments => {
                        if let Some(comments) = current.comments.as_mut() {
                            comments.push_str(rest);
                        }
                    }
                    Continuation::None => {}
                }
                continue;
            }

            // The value runs from the first colon to the second; anything
            // after a second colon is dropped.
            let mut parts = line.split(':');
            let Some(name) = parts.next() else { continue };
            let Some(value) = parts.next() else { continue };
            let name = name.trim();
            let value = value.trim();
            continuation = Continuation::None;

            match name {
                "File-Date" => registry.file_date = value.to_string(),
                "Type" => current.subtag_type = SubtagType::from_field(value),
                "Subtag" | "Tag" => current.tag_or_subtag = value.to_string(),
                "Description" => {
                    current.descriptions.push(value.to_string());
                    continuation = Continuation::Description;
                }
                "Added" => current.added = value.to_string(),
                "Suppress-Script" => current.suppress_script = Some(value.to_string()),
                "Scope" => current.scope = Some(value.to_string()),
                "Macrolanguage" => current.macrolanguage = Some(value.to_string()),
                "Comments" => {
                    current.comments = Some(value.to_string());
                    continuation = Continuation::Comments;
                }
                "Deprecated" => current.deprecated = Some(value.to_string()),
                "Preferred-Value" => current.preferred_value = Some(value.to_string()),
                "Prefix" => current.prefixes.push(value.to_string()),
                _ => {}
            }
        }

        registry.insert(current.finish());
        registry
    }

    fn insert(&mut self, record: Option<RegistrySubtag>) {
        let Some(record) = record else { return };
        let key = record.tag_or_subtag.to_ascii_lowercase();
        let map = match record.subtag_type {
            SubtagType::Language => &mut self.languages,
            SubtagType::Extlang => &mut self.extlangs,
            SubtagType::Script => &mut self.scripts,
            SubtagType::Region => &mut self.regions,
            SubtagType::Variant => &mut self.variants,
            SubtagType::Grandfathered | SubtagType::Redundant => &mut self.deprecated,
        };
        map.insert(key, record);
    }

    pub fn file_date(&self) -> &str {
        &self.file_date
    }

    pub fn language(&self, subtag: &str) -> Option<&RegistrySubtag> {
        self.languages.get(&subtag.to_ascii_lowercase())
    }

    pub fn extlang(&self, subtag: &str) -> Option<&RegistrySubtag> {
        self.extlangs.get(&subtag.to_ascii_lowercase())
    }

    pub fn script(&self, subtag: &str) -> Option<&RegistrySubtag> {
        self.scripts.get(&subtag.to_ascii_lowercase())
    }

    pub fn region(&self, subtag: &str) -> Option<&RegistrySubtag> {
        self.regions.get(&subtag.to_ascii_lowercase())
    }

    pub fn variant(&self, subtag: &str) -> Option<&RegistrySubtag> {
        self.variants.get(&subtag.to_ascii_lowercase())
    }

    pub fn deprecated_tag(&self, tag: &str) -> Option<&RegistrySubtag> {
        self.deprecated.get(&tag.to_ascii_lowercase())
    }
}

fn continuation_text(line: &str) -> Option<&str> {
    let first = line.chars().next()?;
    if first == ' ' || first == '\t' {
        Some(&line[first.len_utf8()..])
    } else {
        None
    }
}
