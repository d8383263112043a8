//! `shellcmd list` specs

use crate::prelude::*;

#[test]
fn list_shows_raw_titles() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["list"])
        .passes()
        .stdout_eq(
            "\
ID         TITLE                                                EVENTS
ext        echo {{file_extension:with-dot}}
copy       Copy {{title}}
broken     echo {{not_a_variable}} {{file_extension:sideways}}
on-create  echo {{event_type}} {{event_file_name}}              file-created
",
        );
}

#[test]
fn preview_resolves_titles_without_prompting() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["list", "--preview", "--file", "notes/a.md"])
        .passes()
        .stdout_has("ext        echo .md")
        .stdout_has("copy       Copy a")
        .stdout_has("echo {{not_a_variable}} {{file_extension:sideways}}");
}

#[test]
fn list_json_carries_shell_and_preactions() {
    let workspace = Workspace::with_settings(SETTINGS);
    let run = workspace.shellcmd().args(&["-o", "json", "list"]).passes();
    let json = run.json();
    let copy = &json[1];
    assert_eq!(copy["id"], "copy");
    assert_eq!(copy["preactions"], 1);
    assert_eq!(json[3]["events"][0], "file-created");
}

#[test]
fn missing_default_settings_mean_no_commands() {
    let home = tempfile::tempdir().unwrap();
    cli()
        .pwd(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args(&["list"])
        .passes()
        .stdout_eq("No shell commands configured\n");
}

#[test]
fn missing_explicit_settings_file_fails() {
    cli()
        .args(&["list", "--config", "/nonexistent/shellcmd.toml"])
        .fails()
        .exits_with(1)
        .stderr_has("Error: failed to read /nonexistent/shellcmd.toml");
}

#[test]
fn invalid_settings_fail() {
    Workspace::with_settings("[[shell_commands]]\nid = 3\n")
        .shellcmd()
        .args(&["list"])
        .fails()
        .stderr_has("invalid settings");
}
