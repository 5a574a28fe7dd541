//! Tests for the strings module

use super::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use test_case::test_case;

// ============================================================================
// Segmentation
// ============================================================================

#[test_case("CamelCase", StringCase::Camel, &["Camel", "Case"])]
#[test_case("CamelPMDCase", StringCase::Camel, &["Camel", "P", "M", "D", "Case"])]
#[test_case("camelCase", StringCase::Camel, &["camel", "Case"])]
#[test_case("camelPMDCase", StringCase::Camel, &["camel", "P", "M", "D", "Case"])]
#[test_case("PascalCase", StringCase::Pascal, &["Pascal", "Case"])]
#[test_case("pascalPMDCase", StringCase::Pascal, &["pascal", "P", "M", "D", "Case"])]
#[test_case("snake_case", StringCase::Snake, &["snake", "case"])]
#[test_case("snake_Case", StringCase::Snake, &["snake", "Case"])]
#[test_case("snake__Case", StringCase::Snake, &["snake", "", "Case"])]
#[test_case("kebab-case", StringCase::Kebab, &["kebab", "case"])]
#[test_case("kebab--case", StringCase::Kebab, &["kebab", "", "case"])]
#[test_case("phrase case", StringCase::Phrase, &["phrase", "case"])]
#[test_case("phrase  case", StringCase::Phrase, &["phrase", "", "case"])]
#[test_case("dot.case", StringCase::Dot, &["dot", "case"])]
#[test_case("dot..case", StringCase::Dot, &["dot", "", "case"])]
#[test_case("slash/Case", StringCase::Slash, &["slash", "Case"])]
#[test_case("  padded_case ", StringCase::Snake, &["padded", "case"])]
#[test_case("", StringCase::Snake, &[""])]
fn test_segmentation(input: &str, case: StringCase, expected: &[&str]) {
    let cased = CasedString::new(case, input);
    assert_eq!(cased.segments(), expected);
}

// ============================================================================
// Conversion
// ============================================================================

#[test_case(StringCase::Camel, "camelCase", ["camelCase", "CamelCase", "camel_Case", "camel-Case", "camel Case", "camel.Case"])]
#[test_case(StringCase::Snake, "snake_case", ["snakeCase", "SnakeCase", "snake_case", "snake-case", "snake case", "snake.case"])]
#[test_case(StringCase::Kebab, "kebab-case", ["kebabCase", "KebabCase", "kebab_case", "kebab-case", "kebab case", "kebab.case"])]
#[test_case(StringCase::Phrase, "phrase case", ["phraseCase", "PhraseCase", "phrase_case", "phrase-case", "phrase case", "phrase.case"])]
#[test_case(StringCase::Dot, "dot.case", ["dotCase", "DotCase", "dot_case", "dot-case", "dot case", "dot.case"])]
#[test_case(StringCase::Pascal, "PascalCase", ["pascalCase", "PascalCase", "Pascal_Case", "Pascal-Case", "Pascal Case", "Pascal.Case"])]
#[test_case(StringCase::Dot, "one..two", ["oneTwo", "OneTwo", "one__two", "one--two", "one  two", "one..two"])]
fn test_to_case(case: StringCase, input: &str, expected: [&str; 6]) {
    let cased = CasedString::new(case, input);
    let targets = [
        StringCase::Camel,
        StringCase::Pascal,
        StringCase::Snake,
        StringCase::Kebab,
        StringCase::Phrase,
        StringCase::Dot,
    ];
    for (target, want) in targets.into_iter().zip(expected) {
        assert_eq!(cased.to_case(target), want, "{input} as {target}");
    }
}

#[test]
fn test_display_uses_own_case() {
    let cased = CasedString::new(StringCase::Kebab, "my-option-name");
    assert_eq!(cased.to_string(), "my-option-name");
    assert_eq!(cased.as_case(StringCase::Dot).to_string(), "my.option.name");
    assert_eq!(cased.as_case(StringCase::Dot).case(), StringCase::Dot);
}

#[test]
fn test_from_segments() {
    let cased = CasedString::from_segments(
        StringCase::Snake,
        vec!["max".to_string(), "tasks".to_string()],
    );
    assert_eq!(cased.to_case(StringCase::Camel), "maxTasks");
}

// ============================================================================
// Assembly
// ============================================================================

const EMPTY_FIRST: [Option<&str>; 3] = [Some(""), Some("one"), Some("two")];
const EMPTY_MIDDLE: [Option<&str>; 3] = [Some("one"), Some(""), Some("two")];
const EMPTY_END: [Option<&str>; 3] = [Some("one"), Some("two"), Some("")];
const NONE_FIRST: [Option<&str>; 3] = [None, Some("one"), Some("two")];
const NONE_MIDDLE: [Option<&str>; 3] = [Some("one"), None, Some("two")];
const NONE_END: [Option<&str>; 3] = [Some("one"), Some("two"), None];
const DOUBLE_EMPTY: [Option<&str>; 4] = [Some("one"), Some(""), Some(""), Some("two")];
const DOUBLE_NONE: [Option<&str>; 4] = [Some("one"), None, None, Some("two")];

fn assembled(case: StringCase) -> Vec<String> {
    vec![
        case.assemble(EMPTY_FIRST),
        case.assemble(EMPTY_MIDDLE),
        case.assemble(EMPTY_END),
        case.assemble(NONE_FIRST),
        case.assemble(NONE_MIDDLE),
        case.assemble(NONE_END),
        case.assemble(DOUBLE_EMPTY),
        case.assemble(DOUBLE_NONE),
    ]
}

#[test_case(StringCase::Camel, ["oneTwo", "oneTwo", "oneTwo", "oneTwo", "oneTwo", "oneTwo", "oneTwo", "oneTwo"])]
#[test_case(StringCase::Pascal, ["OneTwo", "OneTwo", "OneTwo", "OneTwo", "OneTwo", "OneTwo", "OneTwo", "OneTwo"])]
#[test_case(StringCase::Snake, ["_one_two", "one__two", "one_two_", "one_two", "one_two", "one_two", "one___two", "one_two"])]
#[test_case(StringCase::Kebab, ["-one-two", "one--two", "one-two-", "one-two", "one-two", "one-two", "one---two", "one-two"])]
#[test_case(StringCase::Phrase, [" one two", "one  two", "one two ", "one two", "one two", "one two", "one   two", "one two"])]
#[test_case(StringCase::Dot, [".one.two", "one..two", "one.two.", "one.two", "one.two", "one.two", "one...two", "one.two"])]
#[test_case(StringCase::Slash, ["/one/two", "one//two", "one/two/", "one/two", "one/two", "one/two", "one///two", "one/two"])]
fn test_assemble(case: StringCase, expected: [&str; 8]) {
    assert_eq!(assembled(case), expected.map(String::from).to_vec());
}

#[test]
fn test_string_case_from_str() {
    assert_eq!("camel".parse::<StringCase>().unwrap(), StringCase::Camel);
    assert_eq!("KEBAB".parse::<StringCase>().unwrap(), StringCase::Kebab);
    assert!("title".parse::<StringCase>().is_err());
}

// ============================================================================
// Version
// ============================================================================

#[test]
fn test_version_hand_coded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# versions").unwrap();
    writeln!(file, "loneliestNumber=1").unwrap();
    writeln!(file, "asBadAsOne: 2").unwrap();
    writeln!(file, "! another comment").unwrap();
    writeln!(file, "project-version = 1.0.3-SNAPSHOT").unwrap();

    let version = Version::load(file.path());
    assert!(version.is_loaded());
    assert_eq!(version.of("loneliestNumber"), "1");
    assert_eq!(version.of("asBadAsOne"), "2");
    assert_eq!(version.of(RECOMMENDED_PROPERTY), "1.0.3-SNAPSHOT");
    assert_eq!(version.of("notThere"), "unknown");
}

#[test]
fn test_version_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.properties");
    let version = Version::load(&path);

    assert!(!version.is_loaded());
    let message = version.of(RECOMMENDED_PROPERTY);
    assert!(message.starts_with(&format!("Error while loading {}: ", path.display())));
    assert_eq!(version.of("anything"), message);
}

#[test]
fn test_version_parse() {
    let version = Version::parse("a.b.c=value with spaces\nflag\n");
    assert_eq!(version.of("a.b.c"), "value with spaces");
    assert_eq!(version.of("flag"), "");
}

#[test_case("project-version 1.2.3" ; "space")]
#[test_case("project-version\t1.2.3" ; "tab")]
#[test_case("project-version\x0c1.2.3" ; "form feed")]
fn test_version_parse_whitespace_separator(line: &str) {
    let version = Version::parse(line);
    assert_eq!(version.of(RECOMMENDED_PROPERTY), "1.2.3");
}

#[test]
fn test_version_parse_multibyte_whitespace_is_part_of_key() {
    let version = Version::parse("project-version\u{00A0}1.2.3\nother\u{3000}value\n");
    assert_eq!(version.of(RECOMMENDED_PROPERTY), "unknown");
    assert_eq!(version.of("project-version\u{00A0}1.2.3"), "");
    assert_eq!(version.of("other\u{3000}value"), "");
}
