use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::engine::{ExtensionGroup, ParseContext};
use crate::registry::Registry;
use crate::results::Results;

pub(crate) fn canonicalize(registry: &Registry, ctx: &ParseContext, results: &mut Results) {
    if let Some(record) = registry.deprecated_tag(&ctx.raw) {
        let canonical = match non_empty(&record.preferred_value) {
            Some(preferred) => preferred.to_string(),
            None => record.tag_or_subtag.clone(),
        };
        results.canonicalize = Some(canonical);
        return;
    }

    let mut language = results.language_tag.clone();
    if let Some(record) = registry.language(&language) {
        if let Some(preferred) = non_empty(&record.preferred_value) {
            language = preferred.to_string();
        }
    }
    if let Some(extended) = results.extended_tags.first() {
        if let Some(record) = registry.extlang(extended) {
            if let Some(preferred) = non_empty(&record.preferred_value) {
                let first_prefix_matches = record
                    .prefixes
                    .first()
                    .map(|prefix| prefix.eq_ignore_ascii_case(&language))
                    .unwrap_or(false);
                if first_prefix_matches {
                    language = preferred.to_string();
                }
            }
        }
    }

    let mut canonical = language.to_ascii_lowercase();

    if let Some(script) = results.script_tags.first() {
        let suppressed = registry
            .language(&results.language_tag)
            .and_then(|record| record.suppress_script.as_deref())
            .map(|suppress| suppress.eq_ignore_ascii_case(script))
            .unwrap_or(false);
        if !suppressed {
            canonical.push('-');
            canonical.push_str(&titlecase(script));
        }
    }

    if let Some(region) = results.region_tags.first() {
        canonical.push('-');
        match registry.region(region) {
            None => canonical.push_str(&region.to_ascii_uppercase()),
            Some(record) => match non_empty(&record.preferred_value) {
                Some(preferred) => canonical.push_str(preferred),
                None => canonical.push_str(&record.tag_or_subtag),
            },
        }
    }

    for variant in &results.variant_tags {
        canonical.push('-');
        match registry.variant(variant) {
            Some(record) => canonical.push_str(&record.tag_or_subtag),
            None => canonical.push_str(&variant.to_ascii_lowercase()),
        }
    }

    let mut extensions: Vec<&ExtensionGroup> = ctx.extensions.iter().collect();
    extensions.sort_by_key(|group| group.singleton.to_ascii_lowercase());
    for group in extensions {
        canonical.push('-');
        canonical.push_str(&group.formatted());
    }

    if let Some(group) = ctx.private_use.first() {
        canonical.push('-');
        canonical.push_str(&group.formatted());
    }

    results.canonicalize = Some(canonical);
}

pub(crate) fn titlecase(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut output = String::with_capacity(value.len());
    output.push(first.to_ascii_uppercase());
    for ch in chars {
        output.push(ch.to_ascii_lowercase());
    }
    output
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
