//! `shellcmd parse` specs

use crate::prelude::*;

#[test]
fn parse_prints_the_resolved_command() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["parse", "ext", "--file", "notes/a.md"])
        .passes()
        .stdout_eq("echo .md\n");
}

#[test]
fn parse_accepts_absolute_file_inside_the_root() {
    let workspace = Workspace::with_settings(SETTINGS);
    workspace.file("notes/a.md", "# a");
    let file = workspace.path().join("notes/a.md");
    workspace
        .shellcmd()
        .args(&["--root", workspace.path().to_str().unwrap()])
        .args(&["parse", "ext", "--file", file.to_str().unwrap()])
        .passes()
        .stdout_eq("echo .md\n");
}

#[test]
fn parse_without_active_file_fails() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["parse", "ext"])
        .fails()
        .exits_with(1)
        .stderr_has("Error: {{file_extension}}: no file is currently active");
}

#[test]
fn parse_reports_every_syntax_error() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["parse", "broken", "--file", "a.md"])
        .fails()
        .exits_with(1)
        .stderr_has("{{not_a_variable}} at position 5: unknown variable 'not_a_variable'")
        .stderr_has("'sideways' is not a valid dot");
}

#[test]
fn parse_reads_prompt_answers_from_stdin() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["parse", "copy", "--file", "notes/a.md"])
        .stdin("backup/\n")
        .passes()
        .stdout_eq("cp a.md backup/\n")
        .stderr_has("Copy target");
}

#[test]
fn closed_stdin_cancels() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["parse", "copy", "--file", "notes/a.md"])
        .fails()
        .exits_with(130)
        .stderr_has("Error: cancelled");
}

#[test]
fn empty_required_field_fails() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["parse", "copy", "--file", "notes/a.md"])
        .stdin("\n")
        .fails()
        .exits_with(1)
        .stderr_has("Error: Copy target: field 'Target' is required");
}

#[test]
fn first_pass_failure_does_not_prompt() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["parse", "copy"])
        .stdin("backup/\n")
        .fails()
        .stderr_has("{{file_name}}: no file is currently active");
}

#[test]
fn parse_json_prints_the_preparation() {
    let run = Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["-o", "json", "parse", "copy", "--file", "notes/a.md"])
        .stdin("out/\n")
        .passes();
    let json = run.json();
    assert_eq!(json["status"], "ready");
    assert_eq!(json["command"], "cp a.md out/");
    assert_eq!(json["alias"], "Copy a");
    assert_eq!(json["id"], "copy");
}

#[test]
fn parse_json_failure_keeps_messages_on_stdout() {
    let run = Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["-o", "json", "parse", "ext"])
        .fails()
        .exits_with(1);
    let json = run.json();
    assert_eq!(json["status"], "failed");
    assert_eq!(json["error_messages"].as_array().map(Vec::len), Some(1));
}

#[test]
fn event_variables_come_from_the_event() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&[
            "parse",
            "on-create",
            "--event",
            "file-created",
            "--subject",
            "inbox/new.md",
        ])
        .passes()
        .stdout_eq("echo file-created new.md\n");
}

#[test]
fn event_variables_fail_without_an_event() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["parse", "on-create"])
        .fails()
        .stderr_has("{{event_type}} is only available when triggered by an event");
}

#[test]
fn unknown_command_fails() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["parse", "nope"])
        .fails()
        .exits_with(1)
        .stderr_has("Error: shell command not found: nope");
}
