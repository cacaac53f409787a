mod cli;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ValidateArgs};
use colored::Colorize;
use oxidized_skill_lint::contract::ENTRY_FILE;
use oxidized_skill_lint::finding::{ValidationReport, ValidationStatus};
use oxidized_skill_lint::{config, logging, output, rules, validate};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        None => run_validate(cli.validate),

        Some(Commands::ValidateAll {
            path,
            format,
            strict,
            config: config_path,
        }) => {
            if !path.is_dir() {
                println!("ERROR: Not a directory: {}", path.display());
                std::process::exit(1);
            }

            let skill_dirs = find_skill_dirs(&path);
            if skill_dirs.is_empty() {
                eprintln!(
                    "Error: no skill packages found in '{}' (no subdirectory contains a {ENTRY_FILE})",
                    path.display()
                );
                std::process::exit(2);
            }

            let config = load_config(config_path.as_deref(), strict);

            let mut reports: Vec<ValidationReport> = Vec::new();
            for skill_dir in &skill_dirs {
                match validate::run_validation(skill_dir, &config) {
                    Ok(report) => {
                        if let Err(e) = output::emit(&report, &format, None) {
                            eprintln!("Error writing output: {e}");
                            std::process::exit(2);
                        }
                        reports.push(report);
                    }
                    Err(e) => {
                        println!("ERROR: {e}");
                        std::process::exit(e.exit_code());
                    }
                }
            }

            if matches!(format, output::OutputFormat::Pretty) {
                print!("{}", format_collection_summary(&path, &reports));
            }

            let all_passed = reports.iter().all(|r| r.passed);
            std::process::exit(if all_passed { 0 } else { 1 });
        }

        Some(Commands::CheckTools {
            config: config_path,
        }) => {
            let config = load_config(config_path.as_deref(), false);

            println!("{}", "Interpreter Availability".bold().underline());
            println!();

            for checker in rules::scripts::checkers(&config) {
                let status = if checker.is_available() {
                    "READY".green().bold().to_string()
                } else {
                    "NOT AVAILABLE".red().to_string()
                };
                println!(
                    "  [{status}] {name:<10} {program:<12} *.{exts}",
                    name = checker.name(),
                    program = checker.program(),
                    exts = checker.extensions().join(", *."),
                );
            }

            println!();
            println!("Note: scripts whose interpreter is missing get a scripts/unchecked warning.");
        }

        Some(Commands::ListRules) => {
            let all = rules::all_rules();
            println!("{}", "Built-in Rules".bold().underline());
            println!();

            let mut current_category = None;
            for rule in &all {
                if current_category != Some(rule.category) {
                    if current_category.is_some() {
                        println!();
                    }
                    println!("  {}", rule.category.to_string().bold());
                    current_category = Some(rule.category);
                }

                let severity = match rule.severity {
                    oxidized_skill_lint::finding::Severity::Error => "ERROR".red().bold(),
                    oxidized_skill_lint::finding::Severity::Warning => " WARN".yellow().bold(),
                };

                println!(
                    "    [{severity}] {id:<36} {summary}",
                    id = rule.id,
                    summary = rule.summary,
                );
            }

            println!();
            println!("  Total: {} rules", all.len());
        }

        Some(Commands::Explain { rule_id }) => match rules::find_rule(&rule_id) {
            Some(rule) => {
                println!("{}", rule.id.bold());
                println!();
                println!("  Category:     {}", rule.category);
                println!("  Severity:     {}", rule.severity);
                println!("  Description:  {}", rule.summary);
                println!("  Remediation:  {}", rule.remediation);
            }
            None => {
                eprintln!("Unknown rule: {rule_id}");
                eprintln!("Use 'oxidized-skill-lint list-rules' to see all available rules.");
                std::process::exit(2);
            }
        },
    }
}

fn run_validate(args: ValidateArgs) {
    let ValidateArgs {
        path,
        format,
        output: output_path,
        strict,
        config: config_path,
    } = args;

    let Some(path) = path else {
        let _ = Cli::command().print_help();
        println!();
        std::process::exit(1);
    };

    // A collection directory would only ever report a missing SKILL.md;
    // point at validate-all instead.
    if path.is_dir() && !path.join(ENTRY_FILE).exists() {
        let children = find_skill_dirs(&path);
        if !children.is_empty() {
            eprintln!(
                "Hint: '{}' looks like a skills collection directory, not a single skill.",
                path.display()
            );
            eprintln!("To validate all skills at once:");
            eprintln!("  oxidized-skill-lint validate-all {}", path.display());
            eprintln!();
        }
    }

    let config = load_config(config_path.as_deref(), strict);

    let report = match validate::run_validation(&path, &config) {
        Ok(report) => report,
        Err(e) => {
            println!("ERROR: {e}");
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = output::emit(&report, &format, output_path.as_deref()) {
        eprintln!("Error writing output: {e}");
        std::process::exit(2);
    }
    if let Some(out_path) = &output_path {
        eprintln!("Output written to {}", out_path.display());
    }

    std::process::exit(report.exit_code());
}

fn load_config(path: Option<&Path>, strict: bool) -> config::Config {
    let mut config = config::Config::load(path).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    });
    if strict {
        config.strict.enabled = true;
    }
    config
}

/// Immediate subdirectories of `collection` holding an entry file, in name order.
fn find_skill_dirs(collection: &Path) -> Vec<PathBuf> {
    WalkDir::new(collection)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .filter(|dir| dir.join(ENTRY_FILE).is_file())
        .collect()
}

/// One line per package plus totals, printed after the individual reports.
fn format_collection_summary(collection: &Path, reports: &[ValidationReport]) -> String {
    let rule = "─".repeat(54).dimmed();
    let mut tally = [0usize; 3];
    let mut rows = String::new();

    for report in reports {
        let (slot, mark, label) = match report.status {
            ValidationStatus::Failed => (0, "✗".red(), "FAILED ".red().bold()),
            ValidationStatus::Warning => (1, "⚠".yellow(), "WARNING".yellow().bold()),
            ValidationStatus::Passed => (2, "✓".green(), "PASSED ".green().bold()),
        };
        tally[slot] += 1;
        let (errors, warnings) = report.count_by_severity();
        rows.push_str(&format!(
            "  {mark}  {:<22} {label}  {errors}e {warnings}w\n",
            report.skill
        ));
    }

    let heading = format!(
        "  Collection Summary: {}  ({} skills)",
        collection.display(),
        reports.len()
    );
    let [failed, warned, passed] = tally;
    format!(
        "\n{}\n{rule}\n{rows}{rule}\n  Total: {}  {}  {}\n",
        heading.bold().underline(),
        format!("{failed} failed").red().bold(),
        format!("{warned} warnings").yellow().bold(),
        format!("{passed} passed").green().bold(),
    )
}
