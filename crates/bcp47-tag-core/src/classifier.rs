use alloc::string::String;

use crate::engine::{ExtensionGroup, ParseContext};
use crate::results::Results;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SubtagRole {
    Language,
    Extended,
    Script,
    Region,
    Variant,
    Extension,
    PrivateUse,
}

impl SubtagRole {
    pub(crate) fn rank(self) -> u8 {
        match self {
            SubtagRole::Language => 0,
            SubtagRole::Extended => 1,
            SubtagRole::Script => 2,
            SubtagRole::Region => 3,
            SubtagRole::Variant => 4,
            SubtagRole::Extension => 5,
            SubtagRole::PrivateUse => 6,
        }
    }
}

pub(crate) fn classify(ctx: &mut ParseContext, results: &mut Results) {
    let Some(first) = ctx.tokens.first() else {
        return;
    };
    results.language_tag = first.clone();

    let mut previous = SubtagRole::Language;
    let mut index = 1;
    while index < ctx.tokens.len() {
        let token = ctx.tokens[index].clone();

        if token.is_empty() {
            index += 1;
            continue;
        }

        let role = if token.len() == 1 {
            let Some(singleton) = token.chars().next() else {
                index += 1;
                continue;
            };
            // The singleton always owns the next token; a missing payload
            // counts as a blank subtag.
            let payload = match ctx.tokens.get(index + 1) {
                Some(next) => {
                    index += 1;
                    next.clone()
                }
                None => {
                    ctx.has_blank_tag = true;
                    String::new()
                }
            };
            let group = ExtensionGroup { singleton, payload };
            if singleton.eq_ignore_ascii_case(&'x') {
                results.private_use_tags.push(group.formatted());
                ctx.private_use.push(group);
                SubtagRole::PrivateUse
            } else {
                results.extension_tags.push(group.formatted());
                ctx.extensions.push(group);
                SubtagRole::Extension
            }
        } else {
            match token.len() {
                2 => {
                    results.region_tags.push(token.clone());
                    SubtagRole::Region
                }
                3 if is_alpha(&token) => {
                    results.extended_tags.push(token.clone());
                    SubtagRole::Extended
                }
                3 => {
                    results.region_tags.push(token.clone());
                    SubtagRole::Region
                }
                4 if is_alpha(&token) => {
                    results.script_tags.push(token.clone());
                    SubtagRole::Script
                }
                4 => {
                    results.variant_tags.push(token.clone());
                    SubtagRole::Variant
                }
                _ => {
                    results.variant_tags.push(token.clone());
                    SubtagRole::Variant
                }
            }
        };

        if role.rank() < previous.rank() {
            ctx.out_of_order = true;
        }
        previous = role;
        index += 1;
    }
}

pub(crate) fn is_alpha(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::classify;
    use crate::engine::ParseContext;
    use crate::results::Results;

    fn classified(input: &str) -> (ParseContext, Results) {
        let mut ctx = ParseContext::new(input);
        let mut results = Results::default();
        classify(&mut ctx, &mut results);
        (ctx, results)
    }

    #[test]
    fn first_token_is_the_language() {
        let (_, results) = classified("EN-us");
        assert_eq!(results.language_tag, "EN");
        assert_eq!(results.region_tags, vec![String::from("us")]);
    }

    #[test]
    fn assigns_roles_by_length() {
        let (_, results) = classified("zh-yue-Hans-419-1901-valencia");
        assert_eq!(results.extended_tags, vec![String::from("yue")]);
        assert_eq!(results.script_tags, vec![String::from("Hans")]);
        assert_eq!(results.region_tags, vec![String::from("419")]);
        assert_eq!(
            results.variant_tags,
            vec![String::from("1901"), String::from("valencia")]
        );
    }

    #[test]
    fn singleton_consumes_the_next_token() {
        let (ctx, results) = classified("en-a-ext1-x-private");
        assert_eq!(results.extension_tags, vec![String::from("a-ext1")]);
        assert_eq!(results.private_use_tags, vec![String::from("x-private")]);
        assert_eq!(ctx.extensions.len(), 1);
        assert_eq!(ctx.extensions[0].singleton, 'a');
        assert_eq!(ctx.extensions[0].payload, "ext1");
        assert_eq!(ctx.private_use.len(), 1);
    }

    #[test]
    fn private_use_singleton_is_case_insensitive() {
        let (ctx, results) = classified("en-X-abc");
        assert_eq!(results.private_use_tags, vec![String::from("X-abc")]);
        assert!(ctx.extensions.is_empty());
    }

    #[test]
    fn payload_is_not_reclassified() {
        let (_, results) = classified("en-b-1901");
        assert!(results.variant_tags.is_empty());
        assert_eq!(results.extension_tags, vec![String::from("b-1901")]);
    }

    #[test]
    fn dangling_singleton_counts_as_blank() {
        let (ctx, results) = classified("en-a");
        assert!(ctx.has_blank_tag);
        assert_eq!(results.extension_tags, vec![String::from("a-")]);
    }

    #[test]
    fn detects_role_regression() {
        let (ctx, _) = classified("en-US-Latn");
        assert!(ctx.out_of_order);
    }

    #[test]
    fn equal_roles_are_in_order() {
        let (ctx, results) = classified("en-b-bbb-a-aaa");
        assert!(!ctx.out_of_order);
        assert_eq!(
            results.extension_tags,
            vec![String::from("b-bbb"), String::from("a-aaa")]
        );
    }

    #[test]
    fn private_use_before_extension_is_out_of_order() {
        let (ctx, _) = classified("en-x-one-a-two");
        assert!(ctx.out_of_order);
    }

    #[test]
    fn blank_tokens_do_not_disturb_ordering() {
        let (ctx, results) = classified("en--US");
        assert!(!ctx.out_of_order);
        assert_eq!(results.region_tags, vec![String::from("US")]);
    }
}
