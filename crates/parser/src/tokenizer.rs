// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder scanning and validation.
//!
//! Placeholders look like `{{name}}`, `{{name:arg1:arg2}}` or, escaped,
//! `{{!name:arg}}`. Names are word characters. Arguments are separated by
//! `:` and may contain anything except an unescaped `:` or `}}`; inside an
//! argument `\:`, `\}` and `\\` stand for `:`, `}` and `\`. Text that starts
//! with `{{` but does not complete a placeholder is plain text.

use crate::span::Span;
use shellcmd_variables::{bind_arguments, ArgumentError, Arguments, Variable, VariableSet};
use std::sync::Arc;
use thiserror::Error;

/// One placeholder found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch {
    /// Written as `{{!name...}}`
    pub escaped: bool,
    pub variable_name: String,
    /// Arguments in order, with escapes removed and nothing trimmed
    pub raw_arguments: Vec<String>,
    pub span: Span,
    /// The placeholder exactly as written
    pub source: String,
}

impl PlaceholderMatch {
    /// The placeholder without its escape marker, e.g. `{{date:YYYY}}` for
    /// `{{!date:YYYY}}`.
    pub fn unescaped(&self) -> String {
        match self.source.strip_prefix("{{!") {
            Some(rest) if self.escaped => format!("{{{{{rest}"),
            _ => self.source.clone(),
        }
    }
}

/// Why a placeholder was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),
    #[error(transparent)]
    Arguments(#[from] ArgumentError),
}

/// A rejected placeholder and where it was found
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{text} at position {}: {kind}", span.start)]
pub struct SyntaxError {
    pub text: String,
    pub span: Span,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    /// The same error with its position moved `by` bytes to the right.
    pub fn shifted(mut self, by: usize) -> Self {
        self.span = self.span.shifted(by);
        self
    }
}

/// Scan `text` for placeholders, left to right.
///
/// The returned iterator is lazy and can be cloned to restart from the
/// current position.
pub fn scan(text: &str) -> Placeholders<'_> {
    Placeholders { text, pos: 0 }
}

/// Iterator over the placeholders of a template
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for Placeholders<'_> {
    type Item = PlaceholderMatch;

    fn next(&mut self) -> Option<PlaceholderMatch> {
        loop {
            let start = self.pos + self.text.get(self.pos..)?.find("{{")?;
            match parse_placeholder(self.text, start) {
                Attempt::Found(placeholder) => {
                    self.pos = placeholder.span.end;
                    return Some(placeholder);
                }
                // "{{" is two bytes, so start + 1 is a char boundary
                Attempt::Invalid => self.pos = start + 1,
                // Later candidates would read the same arguments and hit
                // the same end of text.
                Attempt::Unterminated => {
                    self.pos = self.text.len();
                    return None;
                }
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Outcome of reading one `{{` candidate.
enum Attempt {
    Found(PlaceholderMatch),
    /// Not a placeholder; scanning resumes right after the `{`.
    Invalid,
    /// An argument list ran to the end of the text without `}}`.
    Unterminated,
}

/// Parse a placeholder whose `{{` begins at byte `start`.
fn parse_placeholder(text: &str, start: usize) -> Attempt {
    let mut cursor = Cursor {
        text,
        pos: start + 2,
    };
    let escaped = cursor.eat("!");

    let name_start = cursor.pos;
    while cursor.peek().is_some_and(is_word_char) {
        cursor.bump();
    }
    let variable_name = match text.get(name_start..cursor.pos) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Attempt::Invalid,
    };

    let mut raw_arguments = Vec::new();
    loop {
        if cursor.eat("}}") {
            break;
        }
        if !cursor.eat(":") {
            return Attempt::Invalid;
        }
        match parse_argument(&mut cursor) {
            Some(argument) => raw_arguments.push(argument),
            None => return Attempt::Unterminated,
        }
    }

    let span = Span::new(start, cursor.pos);
    Attempt::Found(PlaceholderMatch {
        escaped,
        variable_name,
        raw_arguments,
        span,
        source: span.slice(text).to_string(),
    })
}

/// Read one argument, stopping before the next `:` or `}}`. `None` at the
/// end of the text.
fn parse_argument(cursor: &mut Cursor<'_>) -> Option<String> {
    let mut argument = String::new();
    loop {
        if cursor.at(":") || cursor.at("}}") {
            return Some(argument);
        }
        match cursor.bump()? {
            '\\' => match cursor.peek() {
                Some(c @ (':' | '}' | '\\')) => {
                    cursor.bump();
                    argument.push(c);
                }
                _ => argument.push('\\'),
            },
            c => argument.push(c),
        }
    }
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn rest(&self) -> &str {
        self.text.get(self.pos..).unwrap_or("")
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn at(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    fn eat(&mut self, s: &str) -> bool {
        if self.at(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }
}

/// A placeholder classified against the variables of one pass
#[derive(Clone)]
pub enum Token {
    /// Available now, arguments valid.
    Variable {
        placeholder: PlaceholderMatch,
        variable: Arc<dyn Variable>,
        arguments: Arguments,
    },
    /// Escaped; emitted as its literal unescaped form.
    Escaped(PlaceholderMatch),
    Invalid(SyntaxError),
}

impl Token {
    pub fn span(&self) -> Span {
        match self {
            Token::Variable { placeholder, .. } | Token::Escaped(placeholder) => placeholder.span,
            Token::Invalid(error) => error.span,
        }
    }
}

/// Validating tokenizer for one pass.
///
/// Placeholders naming a variable in `available` are validated against its
/// parameters. Names that are `known` but not available yet are skipped, so
/// a later pass can pick them up. Any other name is a syntax error. Escaped
/// placeholders are never validated.
#[derive(Clone)]
pub struct Tokenizer<'a> {
    placeholders: Placeholders<'a>,
    available: &'a VariableSet,
    known: &'a VariableSet,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str, available: &'a VariableSet, known: &'a VariableSet) -> Self {
        Self {
            placeholders: scan(text),
            available,
            known,
        }
    }

    fn classify(&self, placeholder: PlaceholderMatch) -> Option<Token> {
        if placeholder.escaped {
            return Some(Token::Escaped(placeholder));
        }
        let name = placeholder.variable_name.as_str();
        let Some(variable) = self.available.get(name) else {
            if self.known.contains(name) {
                return None;
            }
            return Some(Token::Invalid(SyntaxError {
                kind: SyntaxErrorKind::UnknownVariable(name.to_string()),
                text: placeholder.source,
                span: placeholder.span,
            }));
        };
        match bind_arguments(name, variable.parameters(), &placeholder.raw_arguments) {
            Ok(arguments) => Some(Token::Variable {
                variable: Arc::clone(variable),
                placeholder,
                arguments,
            }),
            Err(e) => Some(Token::Invalid(SyntaxError {
                kind: e.into(),
                text: placeholder.source,
                span: placeholder.span,
            })),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let placeholder = self.placeholders.next()?;
            if let Some(token) = self.classify(placeholder) {
                return Some(token);
            }
        }
    }
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
