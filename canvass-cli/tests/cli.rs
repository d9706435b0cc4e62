//! End-to-end tests for the `canvass` binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn canvass() -> Result<assert_cmd::Command> {
    let mut cmd = assert_cmd::Command::cargo_bin("canvass")?;
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
}

fn write(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

fn feedback_survey(dir: &Path) -> Result<PathBuf> {
    let json = serde_json::to_string(&example_surveys::event_feedback())?;
    write(dir, "survey.json", &json)
}

#[test]
fn submit_accepts_when_follow_up_hidden() -> Result<()> {
    let dir = TempDir::new()?;
    let survey = feedback_survey(dir.path())?;
    let answers = write(dir.path(), "answers.json", r#"{ "attended": "No" }"#)?;

    let output = canvass()?.arg("submit").arg(&survey).arg(&answers).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        ["accepted (1 answers)", "Thanks for letting us know!"]
    );
    Ok(())
}

#[test]
fn submit_rejects_missing_follow_up() -> Result<()> {
    let dir = TempDir::new()?;
    let survey = feedback_survey(dir.path())?;
    let answers = write(dir.path(), "answers.json", r#"{ "attended": "Yes" }"#)?;

    let output = canvass()?.arg("submit").arg(&survey).arg(&answers).output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout.trim(),
        "rejected: Please answer the required question: \"What was the highlight?\""
    );
    Ok(())
}

#[test]
fn submit_reports_unreadable_answers() -> Result<()> {
    let dir = TempDir::new()?;
    let survey = feedback_survey(dir.path())?;
    let answers = write(dir.path(), "answers.json", "[1, 2")?;

    let output = canvass()?.arg("submit").arg(&survey).arg(&answers).output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("is not a valid answer document"), "{stderr}");
    Ok(())
}

#[test]
fn visible_marks_questions() -> Result<()> {
    let dir = TempDir::new()?;
    let survey = feedback_survey(dir.path())?;
    let answers = write(dir.path(), "answers.json", r#"{ "attended": "Yes" }"#)?;

    let output = canvass()?.arg("visible").arg(&survey).arg(&answers).output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        [
            "[x] attended  Did you attend the meetup?",
            "[ ] highlight  What was the highlight?",
            "progress: 1/2 answered (50%)",
        ]
    );
    Ok(())
}

#[test]
fn lint_flags_broken_survey() -> Result<()> {
    let dir = TempDir::new()?;
    let survey = write(
        dir.path(),
        "legacy.json",
        example_surveys::LEGACY_ONBOARDING_JSON,
    )?;

    let output = canvass()?.arg("lint").arg(&survey).output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("depends on 'department', which does not exist"));
    Ok(())
}

#[test]
fn lint_passes_clean_survey() -> Result<()> {
    let dir = TempDir::new()?;
    let survey = feedback_survey(dir.path())?;

    let output = canvass()?.arg("lint").arg(&survey).output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.ends_with("no issues\n"));
    Ok(())
}

#[test]
fn example_round_trips_through_lint() -> Result<()> {
    let dir = TempDir::new()?;

    let output = canvass()?.args(["example", "product-research"]).output()?;
    assert!(output.status.success());
    let survey = write(dir.path(), "survey.json", &String::from_utf8(output.stdout)?)?;

    let output = canvass()?.arg("lint").arg(&survey).output()?;
    assert!(output.status.success());
    Ok(())
}

#[test]
fn unknown_example_is_an_error() -> Result<()> {
    let output = canvass()?.args(["example", "nope"]).output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("unknown example 'nope'"), "{stderr}");
    Ok(())
}
