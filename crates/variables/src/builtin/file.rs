// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variables describing the active file

use super::{extension_value, folder_name_value, path_value, DOT, MODE};
use crate::grammar::{Arguments, Parameter};
use crate::variable::{ResolveContext, Variable, VariableError};
use async_trait::async_trait;

/// `{{file_extension:with-dot|no-dot}}`
pub struct FileExtension;

#[async_trait]
impl Variable for FileExtension {
    fn name(&self) -> &str {
        "file_extension"
    }

    fn description(&self) -> &str {
        "The active file name's ending. with-dot adds a preceding dot unless the extension is empty; no-dot never does."
    }

    fn parameters(&self) -> &[Parameter] {
        &[DOT]
    }

    fn needs_active_file(&self) -> bool {
        true
    }

    async fn generate_value(
        &self,
        args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        let file = ctx.active_file(self.name())?;
        Ok(extension_value(file, args.get("dot") == Some("with-dot")))
    }
}

/// `{{file_name}}`
pub struct FileName;

#[async_trait]
impl Variable for FileName {
    fn name(&self) -> &str {
        "file_name"
    }

    fn description(&self) -> &str {
        "The active file name, including its extension."
    }

    fn needs_active_file(&self) -> bool {
        true
    }

    async fn generate_value(
        &self,
        _args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        Ok(ctx.active_file(self.name())?.name())
    }
}

/// `{{title}}`
pub struct Title;

#[async_trait]
impl Variable for Title {
    fn name(&self) -> &str {
        "title"
    }

    fn description(&self) -> &str {
        "The active file name without its extension."
    }

    fn needs_active_file(&self) -> bool {
        true
    }

    async fn generate_value(
        &self,
        _args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        Ok(ctx.active_file(self.name())?.stem())
    }
}

/// `{{file_path:absolute|relative}}`
pub struct FilePath;

#[async_trait]
impl Variable for FilePath {
    fn name(&self) -> &str {
        "file_path"
    }

    fn description(&self) -> &str {
        "Path to the active file, absolute or relative to the workspace root."
    }

    fn parameters(&self) -> &[Parameter] {
        &[MODE]
    }

    fn needs_active_file(&self) -> bool {
        true
    }

    async fn generate_value(
        &self,
        args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        let file = ctx.active_file(self.name())?;
        Ok(path_value(file, ctx.workspace().root(), args.get("mode")))
    }
}

/// `{{folder_name}}`
pub struct FolderName;

#[async_trait]
impl Variable for FolderName {
    fn name(&self) -> &str {
        "folder_name"
    }

    fn description(&self) -> &str {
        "Name of the folder containing the active file."
    }

    fn needs_active_file(&self) -> bool {
        true
    }

    async fn generate_value(
        &self,
        _args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        let folder = ctx.active_file(self.name())?.parent();
        Ok(folder_name_value(&folder, ctx.workspace().root()))
    }
}

/// `{{folder_path:absolute|relative}}`
pub struct FolderPath;

#[async_trait]
impl Variable for FolderPath {
    fn name(&self) -> &str {
        "folder_path"
    }

    fn description(&self) -> &str {
        "Path to the folder containing the active file."
    }

    fn parameters(&self) -> &[Parameter] {
        &[MODE]
    }

    fn needs_active_file(&self) -> bool {
        true
    }

    async fn generate_value(
        &self,
        args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        let folder = ctx.active_file(self.name())?.parent();
        Ok(path_value(&folder, ctx.workspace().root(), args.get("mode")))
    }
}

/// `{{workspace_path}}`
pub struct WorkspacePath;

#[async_trait]
impl Variable for WorkspacePath {
    fn name(&self) -> &str {
        "workspace_path"
    }

    fn description(&self) -> &str {
        "Absolute path of the workspace root."
    }

    async fn generate_value(
        &self,
        _args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        Ok(ctx.workspace().root().to_string_lossy().into_owned())
    }
}
