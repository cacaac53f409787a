use oxidized_skill_lint::config::Config;
use oxidized_skill_lint::document::split_frontmatter;
use oxidized_skill_lint::finding::{Category, Diagnostic, Severity};
use oxidized_skill_lint::rules::frontmatter;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const GOOD_DESCRIPTION: &str =
    "Extracts tables from PDF documents. Use when the user needs tabular data from a PDF.";

fn check_text(text: &str) -> Vec<Diagnostic> {
    let (header, _) = split_frontmatter(text);
    frontmatter::check(header.as_ref(), &Config::default())
}

fn check_fields(name: &str, description: &str) -> Vec<Diagnostic> {
    check_text(&format!(
        "---\nname: {name}\ndescription: {description}\n---\n"
    ))
}

fn ids(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.rule_id.as_str()).collect()
}

fn has(diagnostics: &[Diagnostic], rule_id: &str) -> bool {
    diagnostics.iter().any(|d| d.rule_id == rule_id)
}

// ---------------------------------------------------------------------------
// Header presence
// ---------------------------------------------------------------------------

#[test]
fn valid_header_produces_no_diagnostics() {
    let result = check_fields("pdf-tools", GOOD_DESCRIPTION);
    assert!(result.is_empty(), "unexpected: {result:?}");
}

#[test]
fn missing_header_yields_exactly_one_error() {
    for text in [
        "# Title\n\nname: pdf-tools\n",
        "",
        "--- \nname: x\n---\n",
        "---\nname: never-closed\n",
    ] {
        let result = check_text(text);
        assert_eq!(result.len(), 1, "text {text:?} gave {result:?}");
        let d = &result[0];
        assert_eq!(d.rule_id, "frontmatter/no-header");
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.category, Category::Frontmatter);
        assert!(d.message.starts_with("no header"));
    }
}

#[test]
fn empty_header_reports_both_missing_fields() {
    let result = check_text("---\n---\n");
    assert_eq!(
        ids(&result),
        vec!["frontmatter/missing-name", "frontmatter/missing-description"]
    );
    assert!(result.iter().all(|d| d.severity == Severity::Error));
}

#[test]
fn diagnostics_point_at_entry_file() {
    let result = check_fields("Bad Name", GOOD_DESCRIPTION);
    assert!(!result.is_empty());
    for d in &result {
        assert_eq!(d.file.as_deref(), Some(std::path::Path::new("SKILL.md")));
    }
}

// ---------------------------------------------------------------------------
// name
// ---------------------------------------------------------------------------

#[test]
fn empty_name_counts_as_missing() {
    let result = check_fields("\"\"", GOOD_DESCRIPTION);
    assert_eq!(ids(&result), vec!["frontmatter/missing-name"]);
    assert_eq!(result[0].message, "missing name field");
}

#[test]
fn name_of_64_chars_is_accepted() {
    let result = check_fields(&"a".repeat(64), GOOD_DESCRIPTION);
    assert!(!has(&result, "name/too-long"));
}

#[test]
fn name_of_65_chars_is_too_long_regardless_of_content() {
    for name in ["a".repeat(65), "A".repeat(65), "-".repeat(65), "é".repeat(65)] {
        let result = check_fields(&name, GOOD_DESCRIPTION);
        let d = result
            .iter()
            .find(|d| d.rule_id == "name/too-long")
            .unwrap_or_else(|| panic!("expected name/too-long for {name}"));
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.category, Category::Name);
        assert!(d.message.contains("too long"));
        assert!(d.message.contains("65"));
    }
}

#[test]
fn name_length_counts_characters_not_bytes() {
    // 40 two-byte characters: 80 bytes, 40 chars.
    let result = check_fields(&"é".repeat(40), GOOD_DESCRIPTION);
    assert!(!has(&result, "name/too-long"));
    assert!(has(&result, "name/invalid-shape"));
}

#[test]
fn quoted_name_with_space_and_punctuation_has_invalid_shape() {
    let result = check_fields("\"My Skill!\"", GOOD_DESCRIPTION);
    let d = result
        .iter()
        .find(|d| d.rule_id == "name/invalid-shape")
        .expect("expected name/invalid-shape");
    assert_eq!(d.severity, Severity::Error);
    assert!(d.message.contains("My Skill!"));
}

#[test]
fn name_shape_edge_cases() {
    for ok in ["a", "9", "pdf-tools", "v2-parser", "a--b"] {
        assert!(
            !has(&check_fields(ok, GOOD_DESCRIPTION), "name/invalid-shape"),
            "{ok} should be valid"
        );
    }
    for bad in ["-leading", "trailing-", "Upper", "snake_case", "dot.name"] {
        assert!(
            has(&check_fields(bad, GOOD_DESCRIPTION), "name/invalid-shape"),
            "{bad} should be invalid"
        );
    }
}

#[test]
fn forbidden_words_fire_once_per_word_case_insensitively() {
    let result = check_fields("claude-tools", GOOD_DESCRIPTION);
    assert_eq!(ids(&result), vec!["name/forbidden-word"]);

    let result = check_fields("AnthropicClaude", GOOD_DESCRIPTION);
    let words: Vec<_> = result
        .iter()
        .filter(|d| d.rule_id == "name/forbidden-word")
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(words.len(), 2);
    assert!(words[0].contains("anthropic"));
    assert!(words[1].contains("claude"));
}

#[test]
fn markup_in_name_is_an_error() {
    for name in ["<skill>", "a>b", "a<b"] {
        let result = check_fields(name, GOOD_DESCRIPTION);
        let d = result
            .iter()
            .find(|d| d.rule_id == "name/markup")
            .unwrap_or_else(|| panic!("expected name/markup for {name}"));
        assert_eq!(d.severity, Severity::Error);
        assert!(d.message.contains("markup characters disallowed"));
    }
}

#[test]
fn name_rules_fire_in_table_order() {
    let long_bad = format!("<Claude {}>", "x".repeat(70));
    let result = check_fields(&long_bad, GOOD_DESCRIPTION);
    assert_eq!(
        ids(&result),
        vec![
            "name/too-long",
            "name/invalid-shape",
            "name/forbidden-word",
            "name/markup"
        ]
    );
}

// ---------------------------------------------------------------------------
// description
// ---------------------------------------------------------------------------

#[test]
fn missing_description_is_a_frontmatter_error() {
    let result = check_text("---\nname: pdf-tools\n---\n");
    assert_eq!(ids(&result), vec!["frontmatter/missing-description"]);
    assert_eq!(result[0].category, Category::Frontmatter);
    assert_eq!(result[0].message, "missing description field");
}

#[test]
fn description_of_30_chars_is_not_too_short() {
    let desc = format!("Use when {}", "x".repeat(21));
    assert_eq!(desc.chars().count(), 30);
    let result = check_fields("pdf-tools", &desc);
    assert!(!has(&result, "description/too-short"), "{result:?}");
}

#[test]
fn description_of_29_chars_is_too_short_warning() {
    let desc = format!("Use when {}", "x".repeat(20));
    assert_eq!(desc.chars().count(), 29);
    let result = check_fields("pdf-tools", &desc);
    let d = result
        .iter()
        .find(|d| d.rule_id == "description/too-short")
        .expect("expected description/too-short");
    assert_eq!(d.severity, Severity::Warning);
    assert!(d.message.contains("too short"));
}

#[test]
fn description_over_1024_chars_is_an_error() {
    let at_limit = format!("Use when {}", "x".repeat(1015));
    assert!(!has(&check_fields("pdf-tools", &at_limit), "description/too-long"));

    let over = format!("Use when {}", "x".repeat(1016));
    let result = check_fields("pdf-tools", &over);
    let d = result
        .iter()
        .find(|d| d.rule_id == "description/too-long")
        .expect("expected description/too-long");
    assert_eq!(d.severity, Severity::Error);
}

#[test]
fn markup_requires_both_angle_brackets() {
    let both = check_fields("pdf-tools", "Use when handling <table> markup in PDF files");
    assert!(has(&both, "description/markup"));

    let one = check_fields("pdf-tools", "Use when page count > 10 in large PDF files");
    assert!(!has(&one, "description/markup"));
}

#[test]
fn block_scalar_indicators_are_errors() {
    for raw in [">-", "|", "|-", ">- continues here"] {
        let result = check_fields("pdf-tools", raw);
        let d = result
            .iter()
            .find(|d| d.rule_id == "description/block-scalar")
            .unwrap_or_else(|| panic!("expected block-scalar for {raw}"));
        assert_eq!(d.severity, Severity::Error);
        assert!(d.message.contains("block-scalar"));
    }
}

#[test]
fn quoted_indicator_is_not_a_block_scalar() {
    let result = check_fields("pdf-tools", "'| pipes are fine when quoted, use when needed'");
    assert!(!has(&result, "description/block-scalar"));
}

#[test]
fn first_person_descriptions_warn() {
    for desc in [
        "I extract tables from PDFs. Use when reading PDFs.",
        "This skill means I can extract tables. Use when reading PDFs.",
        "Tables? I will extract them all. Use when reading PDFs.",
    ] {
        let result = check_fields("pdf-tools", desc);
        let d = result
            .iter()
            .find(|d| d.rule_id == "description/first-person")
            .unwrap_or_else(|| panic!("expected first-person for {desc}"));
        assert_eq!(d.severity, Severity::Warning);
        assert!(d.message.contains("third person"));
    }
}

#[test]
fn second_person_descriptions_warn() {
    for desc in [
        "Extracts tables so you can analyse them. Use when reading PDFs.",
        "You should call this for PDF tables. Use when reading PDFs.",
    ] {
        let result = check_fields("pdf-tools", desc);
        assert!(has(&result, "description/second-person"), "{desc}");
        assert!(!has(&result, "description/first-person"), "{desc}");
    }
}

#[test]
fn trigger_language_is_case_insensitive() {
    for desc in [
        "Extracts tables from PDF documents. USE WHEN reading PDFs.",
        "Extracts tables from PDF documents. Use this for reports.",
    ] {
        assert!(!has(&check_fields("pdf-tools", desc), "description/no-trigger"));
    }

    let result = check_fields("pdf-tools", "Extracts tables from PDF documents quickly.");
    let d = result
        .iter()
        .find(|d| d.rule_id == "description/no-trigger")
        .expect("expected no-trigger");
    assert_eq!(d.severity, Severity::Warning);
    assert!(d.message.contains("usage-trigger"));
}

// ---------------------------------------------------------------------------
// unknown fields
// ---------------------------------------------------------------------------

#[test]
fn allowed_fields_are_silent() {
    let text = format!(
        "---\nname: pdf-tools\ndescription: {GOOD_DESCRIPTION}\nlicense: MIT\nallowed-tools:\nmodel: sonnet\nmetadata:\n---\n"
    );
    assert!(check_text(&text).is_empty());
}

#[test]
fn one_warning_per_unknown_field_in_header_order() {
    let text = format!(
        "---\nversion: 1\nname: pdf-tools\nauthor: me\ndescription: {GOOD_DESCRIPTION}\ntags: pdf\n---\n"
    );
    let result = check_text(&text);
    let messages: Vec<_> = result.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "unknown field 'version'",
            "unknown field 'author'",
            "unknown field 'tags'"
        ]
    );
    assert!(result
        .iter()
        .all(|d| d.severity == Severity::Warning && d.category == Category::Frontmatter));
}

#[test]
fn unknown_fields_come_after_field_rules() {
    let text = "---\nextra: 1\nname: Bad Name\ndescription: short\n---\n";
    let result = check_text(text);
    assert_eq!(result.last().unwrap().rule_id, "frontmatter/unknown-field");
    assert_eq!(result.first().unwrap().rule_id, "name/invalid-shape");
}
