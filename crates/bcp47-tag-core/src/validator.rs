use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::canonicalizer::titlecase;
use crate::engine::ParseContext;
use crate::registry::Registry;
use crate::results::Results;

pub(crate) fn validate(registry: &Registry, ctx: &mut ParseContext, results: &mut Results) {
    if let Some(record) = registry.deprecated_tag(&ctx.raw) {
        let message = match non_empty(&record.preferred_value) {
            Some(preferred) => format!(
                "Deprecated language tag \"{}\" use \"{}\".",
                ctx.raw, preferred
            ),
            None => format!("Deprecated language tag \"{}\" do not use.", ctx.raw),
        };
        results.error_messages.push(message);
        return;
    }

    if !ctx.illegal_characters.is_empty() {
        results.error_messages.push(format!(
            "Found illegal characters:\" {}\" in language tag.",
            ctx.illegal_characters.join(", ")
        ));
        ctx.is_well_formed = false;
        return;
    }

    if ctx.out_of_order {
        let expected = expected_order(ctx, results);
        results.error_messages.push(format!(
            "Language sub tags incorrectly order. Should be \"{}\".",
            expected
        ));
        ctx.is_well_formed = false;
    }

    if ctx.has_blank_tag {
        results.error_messages.push(
            "Language tag has blank subtag(s) caused by more than one contiguous hyphen."
                .to_string(),
        );
        ctx.is_well_formed = false;
    }

    check_language(registry, ctx, results);
    check_regions(registry, ctx, results);
    check_extended(registry, ctx, results);
    check_scripts(registry, ctx, results);
    check_variants(registry, ctx, results);
    check_private_use(ctx, results);
}

fn expected_order(ctx: &ParseContext, results: &Results) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.push(results.language_tag.clone());
    parts.extend(results.extended_tags.iter().cloned());
    parts.extend(results.script_tags.iter().cloned());
    parts.extend(results.region_tags.iter().cloned());
    parts.extend(results.variant_tags.iter().cloned());
    parts.extend(ctx.extensions.iter().map(|group| group.formatted()));
    parts.extend(ctx.private_use.iter().map(|group| group.formatted()));
    parts.join("-")
}

fn check_language(registry: &Registry, ctx: &mut ParseContext, results: &mut Results) {
    let language = results.language_tag.clone();
    if registry.language(&language).is_none() && !is_private_language(&language) {
        results
            .error_messages
            .push(format!("Language subtag \"{}\" is not valid", language));
        ctx.is_well_formed = false;
    }
}

fn is_private_language(subtag: &str) -> bool {
    let lower = subtag.to_ascii_lowercase();
    ("qaa"..="qtz").contains(&lower.as_str())
}

fn check_regions(registry: &Registry, ctx: &mut ParseContext, results: &mut Results) {
    if results.region_tags.len() > 1 {
        results.error_messages.push(format!(
            "More than one region subtag found \"{}\", only one is allowed.",
            results.region_tags.join(", ")
        ));
        ctx.is_well_formed = false;
    }

    let invalid: Vec<String> = results
        .region_tags
        .iter()
        .filter(|region| registry.region(region).is_none() && !is_private_region(region))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        results.error_messages.push(format!(
            "Region subtag(s) \"{}\" are not valid.",
            invalid.join(", ")
        ));
        ctx.is_well_formed = false;
    }
}

fn is_private_region(subtag: &str) -> bool {
    let upper = subtag.to_ascii_uppercase();
    let upper = upper.as_str();
    upper == "AA"
        || upper == "ZZ"
        || ("QM"..="QZ").contains(&upper)
        || ("XA"..="XZ").contains(&upper)
}

fn check_extended(registry: &Registry, ctx: &mut ParseContext, results: &mut Results) {
    if results.extended_tags.len() > 1 {
        results.error_messages.push(format!(
            "More than one extended language subtag found \"{}\", only one is allowed.",
            results.extended_tags.join(", ")
        ));
        ctx.is_well_formed = false;
    }

    let mut invalid: Vec<String> = Vec::new();
    let mut mismatches: Vec<String> = Vec::new();
    for extended in &results.extended_tags {
        match registry.extlang(extended) {
            None => invalid.push(extended.clone()),
            Some(record) => {
                let language = &results.language_tag;
                let matched = record
                    .prefixes
                    .iter()
                    .any(|prefix| prefix.eq_ignore_ascii_case(language));
                if !matched {
                    mismatches.push(format!(
                        "Extended subtag \"{}\" should not be used with language subtag \"{}\".",
                        extended, language
                    ));
                }
            }
        }
    }
    for message in mismatches {
        results.error_messages.push(message);
        ctx.is_well_formed = false;
    }
    if !invalid.is_empty() {
        results.error_messages.push(format!(
            "Extended subtag(s) \"{}\" are not valid.",
            invalid.join(", ")
        ));
        ctx.is_well_formed = false;
    }
}

fn check_scripts(registry: &Registry, ctx: &mut ParseContext, results: &mut Results) {
    if results.script_tags.len() > 1 {
        results.error_messages.push(format!(
            "More than one script subtag found \"{}\", only one is allowed.",
            results.script_tags.join(", ")
        ));
        ctx.is_well_formed = false;
    }

    let invalid: Vec<String> = results
        .script_tags
        .iter()
        .filter(|script| registry.script(script).is_none() && !is_private_script(script))
        .cloned()
        .collect();
    if !invalid.is_empty() {
        results.error_messages.push(format!(
            "Script subtag(s) \"{}\" are not valid.",
            invalid.join(", ")
        ));
        ctx.is_well_formed = false;
    }
}

fn is_private_script(subtag: &str) -> bool {
    let cased = titlecase(subtag);
    ("Qaaa"..="Qabx").contains(&cased.as_str())
}

fn check_variants(registry: &Registry, ctx: &mut ParseContext, results: &mut Results) {
    let mut seen: Vec<String> = Vec::new();
    let mut duplicates = false;
    for variant in &results.variant_tags {
        let lower = variant.to_ascii_lowercase();
        if seen.contains(&lower) {
            results
                .error_messages
                .push(format!("Duplicate variant subtag: {}", variant));
            duplicates = true;
            ctx.is_well_formed = false;
        } else {
            seen.push(lower);
        }
    }

    let invalid: Vec<String> = results
        .variant_tags
        .iter()
        .filter(|variant| registry.variant(variant).is_none())
        .cloned()
        .collect();
    if !invalid.is_empty() {
        results.error_messages.push(format!(
            "Variant subtag(s) \"{}\" are not valid.",
            invalid.join(", ")
        ));
        ctx.is_well_formed = false;
    }

    if duplicates || !invalid.is_empty() {
        return;
    }

    let mut preceding = results.language_tag.clone();
    for variant in &results.variant_tags {
        if let Some(record) = registry.variant(variant) {
            let matched = record
                .prefixes
                .iter()
                .any(|prefix| prefix.eq_ignore_ascii_case(&preceding));
            if !matched {
                let patterns: Vec<String> = record
                    .prefixes
                    .iter()
                    .map(|prefix| format!("{}-{}", prefix, variant))
                    .collect();
                results.error_messages.push(format!(
                    "Sub tags preceding variant \"{}\" did not match one of the following pattern(s): {}.",
                    variant,
                    patterns.join(", ")
                ));
                ctx.is_well_formed = false;
            }
        }
        preceding.push('-');
        preceding.push_str(variant);
    }
}

fn check_private_use(ctx: &mut ParseContext, results: &mut Results) {
    if ctx.private_use.len() > 1 {
        let list: Vec<String> = ctx
            .private_use
            .iter()
            .map(|group| group.formatted())
            .collect();
        results.error_messages.push(format!(
            "More than one private use subtag found \"{}\", only one is allowed.",
            list.join(", ")
        ));
        ctx.is_well_formed = false;
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::{is_private_language, is_private_region, is_private_script};

    #[test]
    fn private_language_range_bounds() {
        assert!(is_private_language("qaa"));
        assert!(is_private_language("QIX"));
        assert!(is_private_language("qtz"));
        assert!(!is_private_language("qua"));
        assert!(!is_private_language("en"));
    }

    #[test]
    fn private_region_ranges() {
        assert!(is_private_region("AA"));
        assert!(is_private_region("zz"));
        assert!(is_private_region("QM"));
        assert!(is_private_region("qz"));
        assert!(is_private_region("XK"));
        assert!(!is_private_region("US"));
        assert!(!is_private_region("QL"));
    }

    #[test]
    fn private_script_range_uses_titlecase() {
        assert!(is_private_script("Qaaa"));
        assert!(is_private_script("qabx"));
        assert!(is_private_script("QAAB"));
        assert!(!is_private_script("Qaby"));
        assert!(!is_private_script("Latn"));
    }

    #[test]
    fn messages_collect_without_failing() {
        use crate::engine::ParseContext;
        use crate::registry::Registry;
        use crate::results::Results;

        let registry = Registry::from_text("File-Date: 2024-03-07\n");
        let mut ctx = ParseContext::new("xx-YY");
        let mut results = Results {
            language_tag: String::from("xx"),
            region_tags: vec![String::from("YY")],
            ..Results::default()
        };
        super::validate(&registry, &mut ctx, &mut results);
        assert!(!ctx.is_well_formed);
        assert_eq!(
            results.error_messages,
            vec![
                String::from("Language subtag \"xx\" is not valid"),
                String::from("Region subtag(s) \"YY\" are not valid.")
            ]
        );
    }
}
