use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use bcp47_tag_core::{parse, Registry, Results};

use crate::error::CliError;
use crate::registry_source::{load_registry, DEFAULT_REGISTRY_PATH};
use crate::report::ParseReport;

#[derive(Debug, PartialEq, Eq)]
struct Options {
    registry_path: PathBuf,
    command: Command,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Interactive,
    Check { tag: String, json: bool },
}

pub fn run() -> Result<u8, CliError> {
    let options = parse_options(std::env::args().skip(1).collect())?;
    let registry = load_registry(&options.registry_path)?;
    match options.command {
        Command::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            interactive(&registry, &mut stdin.lock(), &mut stdout.lock())?;
            Ok(0)
        }
        Command::Check { tag, json } => {
            let results = parse(&registry, &tag);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                let report = ParseReport::from_results(&results);
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                print_results(&mut out, &results)?;
            }
            Ok(u8::from(!results.is_valid))
        }
    }
}

fn parse_options(args: Vec<String>) -> Result<Options, CliError> {
    let mut registry_path = PathBuf::from(DEFAULT_REGISTRY_PATH);
    let mut check = false;
    let mut tag = None;
    let mut json = false;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--registry" => registry_path = PathBuf::from(next_value("--registry", &mut iter)?),
            "--json" if check => json = true,
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "check" if !check => check = true,
            _ if check && tag.is_none() && !arg.starts_with('-') => tag = Some(arg),
            _ => return Err(CliError::Usage(usage())),
        }
    }

    let command = if check {
        let tag = tag.ok_or_else(|| CliError::Usage(usage()))?;
        Command::Check { tag, json }
    } else {
        Command::Interactive
    };

    Ok(Options {
        registry_path,
        command,
    })
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliError> {
    iter.next()
        .ok_or_else(|| CliError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: bcp47-tag [--registry <path>]\n       bcp47-tag check <tag> [--registry <path>] [--json]"
        .to_string()
}

fn interactive(
    registry: &Registry,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), CliError> {
    loop {
        writeln!(output, "1. Validate a language tag.")?;
        writeln!(output, "0. Quit.")?;
        output.flush()?;
        let Some(choice) = read_line(input)? else {
            break;
        };
        match choice.trim() {
            "1" => {
                let Some(tag) = read_line(input)? else {
                    break;
                };
                let results = parse(registry, &tag);
                print_results(output, &results)?;
            }
            "0" => break,
            _ => {}
        }
    }
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn print_results(output: &mut impl Write, results: &Results) -> Result<(), CliError> {
    writeln!(output, "language: {}", results.language_tag)?;
    writeln!(output, "Extended: {}", results.extended_tags.join(", "))?;
    writeln!(output, "Scripts: {}", results.script_tags.join(", "))?;
    writeln!(output, "Regions: {}", results.region_tags.join(", "))?;
    writeln!(output, "Variants: {}", results.variant_tags.join(", "))?;
    writeln!(output, "Extensions: {}", results.extension_tags.join(", "))?;
    writeln!(
        output,
        "Private Use: {}",
        results.private_use_tags.join(", ")
    )?;
    writeln!(
        output,
        "Canonicalize: {}",
        results.canonicalize.as_deref().unwrap_or("")
    )?;
    if results.error_messages.is_empty() {
        writeln!(output, "No Errors.")?;
    } else {
        writeln!(output, "Error List.")?;
        writeln!(output, "-----------")?;
        for message in &results.error_messages {
            writeln!(output, "{message}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use bcp47_tag_core::Registry;

    use super::{interactive, parse_options, print_results, Command};
    use crate::error::CliError;

    const SAMPLE: &str = "\
File-Date: 2024-03-07
%%
Type: language
Subtag: en
Description: English
Added: 2005-10-16
Suppress-Script: Latn
%%
Type: region
Subtag: US
Description: United States
Added: 2005-10-16
";

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn defaults_to_the_interactive_command() {
        let options = parse_options(args(&[])).expect("options");
        assert_eq!(options.command, Command::Interactive);
        assert_eq!(
            options.registry_path,
            PathBuf::from("language-subtag-registry")
        );
    }

    #[test]
    fn parses_check_with_flags() {
        let options =
            parse_options(args(&["check", "en-US", "--registry", "reg.txt", "--json"]))
                .expect("options");
        assert_eq!(options.registry_path, PathBuf::from("reg.txt"));
        assert_eq!(
            options.command,
            Command::Check {
                tag: "en-US".to_string(),
                json: true
            }
        );
    }

    #[test]
    fn check_requires_a_tag() {
        let err = parse_options(args(&["check"])).expect_err("missing tag should fail");
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn rejects_unknown_flags() {
        let err = parse_options(args(&["--wat"])).expect_err("unknown flag should fail");
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn prints_the_listing_with_no_errors() {
        let registry = Registry::from_text(SAMPLE);
        let results = bcp47_tag_core::parse(&registry, "en-US");
        let mut output = Vec::new();
        print_results(&mut output, &results).expect("print");
        let text = String::from_utf8(output).expect("utf8");
        assert_eq!(
            text,
            "language: en\nExtended: \nScripts: \nRegions: US\nVariants: \nExtensions: \n\
             Private Use: \nCanonicalize: en-US\nNo Errors.\n"
        );
    }

    #[test]
    fn prints_the_error_list() {
        let registry = Registry::from_text(SAMPLE);
        let results = bcp47_tag_core::parse(&registry, "xx");
        let mut output = Vec::new();
        print_results(&mut output, &results).expect("print");
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("Error List.\n-----------\n"));
        assert!(text.contains("Language subtag \"xx\" is not valid\n"));
    }

    #[test]
    fn interactive_loop_validates_then_quits() {
        let registry = Registry::from_text(SAMPLE);
        let mut input = Cursor::new("1\nen-US\n0\n");
        let mut output = Vec::new();
        interactive(&registry, &mut input, &mut output).expect("loop");
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("1. Validate a language tag.\n0. Quit.\n"));
        assert!(text.contains("Canonicalize: en-US\n"));
        assert!(text.contains("No Errors.\n"));
    }

    #[test]
    fn interactive_loop_ends_on_eof() {
        let registry = Registry::from_text(SAMPLE);
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        interactive(&registry, &mut input, &mut output).expect("loop");
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("0. Quit.\n"));
    }

    #[test]
    fn interactive_loop_ignores_unknown_choices() {
        let registry = Registry::from_text(SAMPLE);
        let mut input = Cursor::new("7\n0\n");
        let mut output = Vec::new();
        interactive(&registry, &mut input, &mut output).expect("loop");
        let text = String::from_utf8(output).expect("utf8");
        assert_eq!(text.matches("1. Validate a language tag.").count(), 2);
    }
}
