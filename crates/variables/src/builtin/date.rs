// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `{{date:format}}` and moment-style date formatting

use crate::grammar::{Arguments, Parameter};
use crate::variable::{ResolveContext, Variable, VariableError};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// Moment-style format tokens, longest alternatives first.
///
/// `[...]` escapes literal text.
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[[^\]]*\]|YYYY|YY|MMMM|MMM|MM|M|DDDD|DDD|DD|Do|D|dddd|ddd|dd|d|HH|H|hh|h|mm|m|ss|s|SSS|A|a|ZZ|Z|X|x|Q|WW|W",
    )
    .expect("constant regex pattern is valid")
});

const FORMAT: Parameter = Parameter::text("format");

/// Current date and time in a user chosen format.
pub struct Date;

#[async_trait]
impl Variable for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn description(&self) -> &str {
        "A date/time stamp. The mandatory format uses moment-style tokens such as YYYY-MM-DD HH\\:mm."
    }

    fn parameters(&self) -> &[Parameter] {
        &[FORMAT]
    }

    async fn generate_value(
        &self,
        args: &Arguments,
        ctx: &ResolveContext<'_>,
    ) -> Result<String, VariableError> {
        let format = args.get("format").unwrap_or_default();
        Ok(format_moment(&ctx.clock().now(), format))
    }
}

/// Format `time` using moment.js token syntax.
///
/// Characters that are not tokens are copied through unchanged.
pub fn format_moment(time: &DateTime<FixedOffset>, format: &str) -> String {
    TOKEN_PATTERN
        .replace_all(format, |caps: &regex::Captures| render_token(time, &caps[0]))
        .into_owned()
}

fn render_token(time: &DateTime<FixedOffset>, token: &str) -> String {
    let strftime = |spec: &str| time.format(spec).to_string();
    match token {
        "YYYY" => strftime("%Y"),
        "YY" => strftime("%y"),
        "MMMM" => strftime("%B"),
        "MMM" => strftime("%b"),
        "MM" => strftime("%m"),
        "M" => time.month().to_string(),
        "DDDD" => strftime("%j"),
        "DDD" => time.ordinal().to_string(),
        "DD" => strftime("%d"),
        "Do" => ordinal(time.day()),
        "D" => time.day().to_string(),
        "dddd" => strftime("%A"),
        "ddd" => strftime("%a"),
        "dd" => strftime("%a").chars().take(2).collect(),
        "d" => time.weekday().num_days_from_sunday().to_string(),
        "HH" => strftime("%H"),
        "H" => time.hour().to_string(),
        "hh" => strftime("%I"),
        "h" => time.hour12().1.to_string(),
        "mm" => strftime("%M"),
        "m" => time.minute().to_string(),
        "ss" => strftime("%S"),
        "s" => time.second().to_string(),
        "SSS" => format!("{:03}", time.timestamp_subsec_millis()),
        "A" => strftime("%p"),
        "a" => strftime("%p").to_lowercase(),
        "ZZ" => strftime("%z"),
        "Z" => strftime("%:z"),
        "X" => time.timestamp().to_string(),
        "x" => time.timestamp_millis().to_string(),
        "Q" => (time.month0() / 3 + 1).to_string(),
        "WW" => format!("{:02}", time.iso_week().week()),
        "W" => time.iso_week().week().to_string(),
        literal => literal
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(literal)
            .to_string(),
    }
}

pub(super) fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
