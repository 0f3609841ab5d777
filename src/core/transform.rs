use crate::domain::model::{Document, TransformResult, TransformStats};
use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
pub const TARGET_YEAR: i32 = 2021;

// chrono 本身接受一位數的月份/日期，先用固定寬度檢查格式
static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}/[0-9]{2}/[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$")
        .expect("timestamp pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampParse {
    Parsed(NaiveDateTime),
    NotATimestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppliedRule {
    TimestampRewritten,
    TextReversed,
    ListDeduplicated,
    PassedThrough,
}

/// Parses `YYYY/MM/DD hh:mm:ss` with exact field widths.
///
/// Anything that does not have that shape, or names a date/time that does not
/// exist (month 13, Feb 30, second 60, year 0000), is `NotATimestamp`.
pub fn parse_timestamp(text: &str) -> TimestampParse {
    if !TIMESTAMP_SHAPE.is_match(text) {
        return TimestampParse::NotATimestamp;
    }

    match NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT) {
        // chrono 以 nanosecond >= 1e9 表示閏秒
        Ok(dt) if dt.year() >= 1 && dt.nanosecond() < 1_000_000_000 => TimestampParse::Parsed(dt),
        _ => TimestampParse::NotATimestamp,
    }
}

/// Removes every whitespace character, then reverses what is left.
pub fn strip_and_reverse(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).rev().collect()
}

/// Drops repeated elements, keeping the first occurrence of each.
///
/// Elements are compared with [`values_equal`], so `true` and `1` are kept
/// side by side while `1` and `1.0` collapse into one.
pub fn dedupe(values: Vec<Value>) -> Vec<Value> {
    let mut kept: Vec<Value> = Vec::with_capacity(values.len());
    for value in values {
        if !kept.iter().any(|existing| values_equal(existing, &value)) {
            kept.push(value);
        }
    }
    kept
}

/// Type-aware JSON equality: both sides must have the same JSON type and the
/// same value. Numbers compare by numeric value, objects ignore key order.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, l)| y.get(key).is_some_and(|r| values_equal(l, r)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (integer_of(a), integer_of(b)) {
        (Some(x), Some(y)) => x == y,
        (Some(int), None) => float_matches_integer(b, int),
        (None, Some(int)) => float_matches_integer(a, int),
        (None, None) => a.as_f64() == b.as_f64(),
    }
}

fn integer_of(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn float_matches_integer(float: &Number, int: i128) -> bool {
    match float.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => f as i128 == int,
        _ => false,
    }
}

fn rewrite_string(text: String) -> (Value, AppliedRule) {
    if let TimestampParse::Parsed(dt) = parse_timestamp(&text) {
        match dt.with_year(TARGET_YEAR) {
            Some(moved) => {
                return (
                    Value::String(moved.format(TIMESTAMP_FORMAT).to_string()),
                    AppliedRule::TimestampRewritten,
                );
            }
            None => {
                // 例如 2020/02/29 在 2021 年不存在，改走一般文字處理
                tracing::warn!(
                    "Timestamp '{}' has no counterpart in {}, treating it as plain text",
                    text,
                    TARGET_YEAR
                );
            }
        }
    }

    (
        Value::String(strip_and_reverse(&text)),
        AppliedRule::TextReversed,
    )
}

fn apply_rule(value: Value) -> (Value, AppliedRule) {
    match value {
        Value::String(text) => rewrite_string(text),
        Value::Array(items) => (Value::Array(dedupe(items)), AppliedRule::ListDeduplicated),
        other => (other, AppliedRule::PassedThrough),
    }
}

/// Applies the transform rule to a single top-level value.
///
/// Strings holding a `YYYY/MM/DD hh:mm:ss` timestamp get their year set to
/// 2021; any other string loses its whitespace and is reversed. Arrays are
/// deduplicated. Everything else, nested objects included, is returned as is.
pub fn transform_value(value: Value) -> Value {
    apply_rule(value).0
}

pub fn transform_document(document: Document) -> TransformResult {
    let mut stats = TransformStats::default();
    let mut transformed = Document::new();

    for (key, value) in document {
        let (value, rule) = apply_rule(value);
        match rule {
            AppliedRule::TimestampRewritten => stats.timestamps_rewritten += 1,
            AppliedRule::TextReversed => stats.strings_reversed += 1,
            AppliedRule::ListDeduplicated => stats.lists_deduplicated += 1,
            AppliedRule::PassedThrough => stats.passed_through += 1,
        }
        transformed.insert(key, value);
    }

    TransformResult {
        document: transformed,
        stats,
    }
}
