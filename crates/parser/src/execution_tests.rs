// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_helpers::host;
use shellcmd_core::test_support::{
    custom_variable, empty_workspace, file_event, prompt, prompt_preaction, shell_command,
    workspace_with_file,
};
use shellcmd_core::{EventKind, Platform, Settings, ShellCommandConfig};

fn settings(command: ShellCommandConfig) -> Settings {
    Settings {
        custom_variables: vec![custom_variable("cv-target", "target")],
        prompts: vec![prompt("p-1", &["cv-target"])],
        shell_commands: vec![command],
        ..Settings::default()
    }
}

fn with_prompt(command: &str, alias: &str) -> ShellCommandConfig {
    let mut config = shell_command("c-1", command, alias);
    config.preactions = vec![prompt_preaction("p-1", true)];
    config
}

#[tokio::test]
async fn ready_command_carries_parsed_texts() {
    let mut config = with_prompt("cp {{file_name}} {{_target}}", "Copy {{title}}");
    config.confirm_execution = true;
    config.ignore_error_codes = vec![2];
    let (host, prompts) = host(settings(config), workspace_with_file("notes/a.md"));
    prompts.answer(&["/tmp/out"]);
    let command = host.command("c-1").unwrap();

    let preparation = prepare(&host, command, None).await.unwrap();

    let Preparation::Ready(prepared) = preparation else {
        panic!("expected a ready command, got {preparation:?}");
    };
    assert_eq!(prepared.command, "cp a.md /tmp/out");
    assert_eq!(prepared.alias, "Copy a");
    assert!(prepared.confirm_execution);
    assert_eq!(prepared.ignore_error_codes, vec![2]);
    assert_eq!(prepared.shell, Platform::current().fallback_shell());
    assert_eq!(prompts.asked().len(), 1);
}

#[tokio::test]
async fn cancelled_prompt_cancels_preparation() {
    let (host, prompts) = host(settings(with_prompt("echo {{_target}}", "")), empty_workspace());
    prompts.cancel();
    let command = host.command("c-1").unwrap();

    let preparation = prepare(&host, command, None).await.unwrap();
    assert_eq!(preparation, Preparation::Cancelled);
}

#[tokio::test]
async fn first_pass_failure_skips_preactions() {
    let (host, prompts) = host(
        settings(with_prompt("echo {{title}} {{_target}}", "")),
        empty_workspace(),
    );
    let command = host.command("c-1").unwrap();

    let preparation = prepare(&host, command, None).await.unwrap();
    assert_eq!(
        preparation,
        Preparation::Failed {
            error_messages: vec!["{{title}}: no file is currently active".to_string()],
        }
    );
    assert!(prompts.asked().is_empty());
}

#[tokio::test]
async fn preaction_error_fails_preparation() {
    let (host, prompts) = host(settings(with_prompt("echo {{_target}}", "")), empty_workspace());
    prompts.answer(&[""]);
    let command = host.command("c-1").unwrap();

    let preparation = prepare(&host, command, None).await.unwrap();
    assert_eq!(
        preparation,
        Preparation::Failed {
            error_messages: vec!["Prompt p-1: field 'Value for cv-target' is required".to_string()],
        }
    );
}

#[tokio::test]
async fn event_variables_resolve_from_the_event() {
    let config = shell_command("c-1", "echo {{event_file_name}} {{event_type}}", "");
    let (host, _) = host(settings(config), empty_workspace());
    let command = host.command("c-1").unwrap();
    let event = file_event(EventKind::FileRenamed, "inbox/new.md");

    let preparation = prepare(&host, command, Some(event)).await.unwrap();
    let Preparation::Ready(prepared) = preparation else {
        panic!("expected a ready command, got {preparation:?}");
    };
    assert_eq!(prepared.command, "echo new.md file-renamed");
}

#[tokio::test]
async fn preparation_serializes_with_status_tag() {
    let (host, prompts) = host(settings(with_prompt("echo {{_target}}", "")), empty_workspace());
    prompts.cancel();
    let command = host.command("c-1").unwrap();
    let preparation = prepare(&host, command, None).await.unwrap();
    let json = serde_json::to_value(&preparation).unwrap();
    assert_eq!(json["status"], "cancelled");
}
