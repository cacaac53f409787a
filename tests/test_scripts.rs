use std::path::{Path, PathBuf};

use oxidized_skill_lint::config::Config;
use oxidized_skill_lint::finding::{Category, Diagnostic, Severity};
use oxidized_skill_lint::package::Package;
use oxidized_skill_lint::rules::scripts::{
    self, PythonChecker, ShellChecker, SyntaxChecker, SyntaxOutcome,
};

/// Helper: a package holding a valid SKILL.md plus the given scripts.
fn package_with_scripts(files: &[(&str, &str)]) -> (tempfile::TempDir, Package) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("SKILL.md"), "---\nname: x\n---\n").unwrap();
    std::fs::create_dir(dir.path().join("scripts")).unwrap();
    for (name, contents) in files {
        std::fs::write(dir.path().join("scripts").join(name), contents).unwrap();
    }
    let package = Package::load(dir.path()).unwrap();
    (dir, package)
}

fn check(files: &[(&str, &str)]) -> Vec<Diagnostic> {
    let (_dir, package) = package_with_scripts(files);
    scripts::check(&package, &Config::default())
}

fn python() -> PythonChecker {
    PythonChecker {
        interpreter: Config::default().interpreters.python,
    }
}

fn shell() -> ShellChecker {
    ShellChecker {
        interpreter: Config::default().interpreters.shell,
    }
}

// ── python ────────────────────────────────────────────────────────────────────

#[test]
fn valid_python_has_no_diagnostics() {
    if !python().is_available() {
        return;
    }
    let result = check(&[("ok.py", "def main():\n    return 1\n")]);
    assert!(result.is_empty(), "unexpected: {result:?}");
}

#[test]
fn broken_python_is_a_syntax_error() {
    if !python().is_available() {
        return;
    }
    let result = check(&[("broken.py", "def main(:\n    pass\n")]);
    assert_eq!(result.len(), 1);
    let d = &result[0];
    assert_eq!(d.rule_id, "scripts/syntax-error");
    assert_eq!(d.severity, Severity::Error);
    assert_eq!(d.category, Category::Scripts);
    assert!(d.message.starts_with("syntax error in broken.py"));
    assert_eq!(d.file, Some(Path::new("scripts").join("broken.py")));
}

#[test]
fn python_checker_never_executes_the_script() {
    if !python().is_available() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("ran");
    let script = dir.path().join("side_effect.py");
    std::fs::write(
        &script,
        format!("open({:?}, 'w').write('x')\n", marker.display().to_string()),
    )
    .unwrap();

    assert_eq!(python().check(&script, "side_effect.py"), SyntaxOutcome::Valid);
    assert!(!marker.exists());
}

#[test]
fn non_utf8_python_is_left_unchecked() {
    if !python().is_available() {
        return;
    }
    let (dir, _) = package_with_scripts(&[]);
    std::fs::write(dir.path().join("scripts").join("latin.py"), b"# caf\xe9\nprint(1\n").unwrap();
    let package = Package::load(dir.path()).unwrap();
    let result = scripts::check(&package, &Config::default());
    assert!(result.is_empty(), "unexpected: {result:?}");
}

// ── shell ─────────────────────────────────────────────────────────────────────

#[test]
fn valid_shell_has_no_diagnostics() {
    if !shell().is_available() {
        return;
    }
    let result = check(&[("setup.sh", "#!/bin/bash\nif true; then echo ok; fi\n")]);
    assert!(result.is_empty(), "unexpected: {result:?}");
}

#[test]
fn broken_shell_is_a_syntax_error() {
    if !shell().is_available() {
        return;
    }
    let result = check(&[("setup.sh", "#!/bin/bash\nif true; then\n  echo ok\n")]);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].rule_id, "scripts/syntax-error");
    assert!(result[0].message.starts_with("syntax error in setup.sh: "));
    assert!(!result[0].message.contains("/scripts/"));
}

// ── selection ─────────────────────────────────────────────────────────────────

#[test]
fn only_known_extensions_directly_in_scripts_are_checked() {
    let (dir, package) = package_with_scripts(&[("notes.txt", "def (:"), ("data.json", "{")]);
    let nested = dir.path().join("scripts").join("lib");
    std::fs::create_dir(&nested).unwrap();
    std::fs::write(nested.join("helper.py"), b"def (:").unwrap();
    std::fs::write(dir.path().join("root.py"), b"def (:").unwrap();

    let package = Package::load(&package.root).unwrap();
    assert!(scripts::check(&package, &Config::default()).is_empty());
}

#[test]
fn diagnostics_follow_file_name_order() {
    if !python().is_available() {
        return;
    }
    let result = check(&[
        ("b_broken.py", "def (:\n"),
        ("a_broken.py", "class :\n"),
        ("c_ok.py", "x = 1\n"),
    ]);
    let files: Vec<_> = result.iter().filter_map(|d| d.file.clone()).collect();
    assert_eq!(
        files,
        vec![
            PathBuf::from("scripts").join("a_broken.py"),
            PathBuf::from("scripts").join("b_broken.py"),
        ]
    );
}

// ── availability ──────────────────────────────────────────────────────────────

#[test]
fn missing_interpreter_warns_for_every_script_it_would_parse() {
    let (_dir, package) = package_with_scripts(&[("broken.py", "def (:"), ("bad.sh", "if")]);
    let mut config = Config::default();
    config.interpreters.python = "definitely-not-a-python-interpreter".to_string();
    config.interpreters.shell = "definitely-not-a-shell".to_string();

    let result = scripts::check(&package, &config);
    assert_eq!(result.len(), 2);
    assert!(result
        .iter()
        .all(|d| d.rule_id == "scripts/unchecked" && d.severity == Severity::Warning));
    assert_eq!(result[0].file, Some(Path::new("scripts").join("bad.sh")));
    assert!(result[0].message.contains("definitely-not-a-shell not found"));
    assert_eq!(result[1].file, Some(Path::new("scripts").join("broken.py")));
    assert!(result[1]
        .message
        .starts_with("script not checked: broken.py (definitely-not-a-python-interpreter"));
}

#[test]
fn missing_interpreter_fails_only_a_strict_run() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("SKILL.md"),
        "---\nname: py-tools\ndescription: Runs helper scripts for reports. Use when asked.\n---\n\n# Py Tools\n\na\nb\nc\n",
    )
    .unwrap();
    std::fs::write(dir.path().join(".gitignore"), ".venv/\n__pycache__/\n").unwrap();
    std::fs::create_dir(dir.path().join("scripts")).unwrap();
    std::fs::write(dir.path().join("scripts").join("broken.py"), "def (:").unwrap();

    let mut config = Config::default();
    config.interpreters.python = "definitely-not-a-python-interpreter".to_string();

    let report = oxidized_skill_lint::validate::run_validation(dir.path(), &config).unwrap();
    let fired: Vec<_> = report.diagnostics.iter().map(|d| d.rule_id.as_str()).collect();
    assert_eq!(fired, vec!["scripts/unchecked"]);
    assert!(report.passed);

    config.strict.enabled = true;
    let report = oxidized_skill_lint::validate::run_validation(dir.path(), &config).unwrap();
    assert!(!report.passed);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn missing_program_is_reported_unavailable() {
    let checker = PythonChecker {
        interpreter: "definitely-not-a-python-interpreter".to_string(),
    };
    assert!(!checker.is_available());
    assert!(!scripts::which_exists("definitely-not-a-python-interpreter"));
}

#[test]
fn spawn_failure_is_unchecked() {
    let checker = ShellChecker {
        interpreter: "/nonexistent/bin/bash".to_string(),
    };
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("x.sh");
    std::fs::write(&script, "if").unwrap();
    assert_eq!(checker.check(&script, "x.sh"), SyntaxOutcome::Unchecked);
}

#[test]
fn configured_interpreters_drive_the_checkers() {
    let mut config = Config::default();
    config.interpreters.python = "python3.12".to_string();
    let all = scripts::checkers(&config);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name(), "python");
    assert_eq!(all[0].program(), "python3.12");
    assert_eq!(all[1].name(), "shell");
    assert_eq!(all[1].program(), "bash");
}

#[test]
fn disabled_scripts_group_skips_syntax_checks() {
    if !python().is_available() {
        return;
    }
    let (_dir, package) = package_with_scripts(&[("broken.py", "def (:")]);
    let mut config = Config::default();
    config.checks.scripts = false;
    let result = oxidized_skill_lint::rules::structure::check(&package, &config);
    assert!(!result.iter().any(|d| d.rule_id == "scripts/syntax-error"));
}
