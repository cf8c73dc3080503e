//! Block-style YAML 1.1 emitter.
//!
//! `serde_yaml` decides quoting by YAML 1.2 core-schema rules, so strings such
//! as `2016-11-29`, `no` or `12:30` come out plain and a YAML 1.1 reader loads
//! them as a date, a boolean and an integer. This emitter walks a
//! [`serde_yaml::Value`] tree and single-quotes any string a YAML 1.1 implicit
//! resolver would claim.

use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::{Mapping, Value};

const INDENT: usize = 2;

/// YAML 1.1 implicit resolvers for non-string scalars (bool, null, int,
/// float, timestamp, merge, value).
static IMPLICIT_RESOLVERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // bool
        Regex::new(r"^(?i:y|n|yes|no|true|false|on|off)$").unwrap(),
        // null
        Regex::new(r"^(?:~|null|Null|NULL)$").unwrap(),
        // int (binary, octal, decimal, hex, sexagesimal)
        Regex::new(
            r"^[-+]?(?:0b[0-1_]+|0[0-7_]+|(?:0|[1-9][0-9_]*)|0x[0-9a-fA-F_]+|[1-9][0-9_]*(?::[0-5]?[0-9])+)$",
        )
        .unwrap(),
        // float
        Regex::new(
            r"^(?:[-+]?[0-9][0-9_]*\.[0-9_]*(?:[eE][-+][0-9]+)?|\.[0-9][0-9_]*(?:[eE][-+][0-9]+)?|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN))$",
        )
        .unwrap(),
        // timestamp
        Regex::new(
            r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}(?:(?:[Tt]|[ \t]+)[0-9]{1,2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]*)?(?:[ \t]*(?:Z|[-+][0-9]{1,2}(?::[0-9]{2})?))?)?$",
        )
        .unwrap(),
        // merge and value keys
        Regex::new(r"^(?:<<|=)$").unwrap(),
    ]
});

/// Characters that cannot start a plain scalar.
const LEADING_INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
];

/// Render `value` as a block-style YAML document body.
pub fn to_string(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Mapping(map) if !map.is_empty() => write_mapping(&mut out, map, 0),
        Value::Sequence(seq) if !seq.is_empty() => write_sequence(&mut out, seq, 0),
        other => {
            out.push_str(&inline(other));
            out.push('\n');
        }
    }
    out
}

fn write_mapping(out: &mut String, map: &Mapping, indent: usize) {
    for (key, value) in map {
        let _ = write!(out, "{:indent$}{}:", "", inline(key), indent = indent);
        write_nested(out, value, indent);
    }
}

fn write_sequence(out: &mut String, seq: &[Value], indent: usize) {
    for item in seq {
        let _ = write!(out, "{:indent$}-", "", indent = indent);
        match item {
            Value::Mapping(map) if !map.is_empty() => {
                // First entry shares the dash line.
                let mut nested = String::new();
                write_mapping(&mut nested, map, indent + INDENT);
                out.push(' ');
                out.push_str(&nested[indent + INDENT..]);
            }
            other => write_nested(out, other, indent),
        }
    }
}

/// Write the part after `key:` or `-`.
fn write_nested(out: &mut String, value: &Value, indent: usize) {
    match value {
        Value::Mapping(map) if !map.is_empty() => {
            out.push('\n');
            write_mapping(out, map, indent + INDENT);
        }
        Value::Sequence(seq) if !seq.is_empty() => {
            out.push('\n');
            write_sequence(out, seq, indent);
        }
        other => {
            out.push(' ');
            out.push_str(&inline(other));
            out.push('\n');
        }
    }
}

/// Render a scalar or an empty collection on one line.
fn inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => scalar(s),
        Value::Sequence(_) => "[]".to_string(),
        Value::Mapping(_) => "{}".to_string(),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, inline(&tagged.value)),
    }
}

/// Render a string scalar, quoting only when a plain scalar would not read
/// back as the same string.
pub fn scalar(s: &str) -> String {
    if s.chars().any(|c| c.is_control()) {
        double_quoted(s)
    } else if needs_quotes(s) {
        format!("'{}'", s.replace('\'', "''"))
    } else {
        s.to_string()
    }
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || IMPLICIT_RESOLVERS.iter().any(|re| re.is_match(s))
        || s.starts_with(LEADING_INDICATORS)
        || s.starts_with(' ')
        || s.ends_with(' ')
        || s.ends_with(':')
        || s.contains(": ")
        || s.contains(" #")
        || s.contains('\u{feff}')
}

fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
