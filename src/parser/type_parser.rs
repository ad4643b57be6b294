//! Data type syntax: `NAME[(params)] [qualifiers] [[]...]`.
//!
//! Reads the type off a column definition into a [`TypeSpec`] and hands it to
//! [`DataType::from_spec`] for dialect validation.

use std::sync::LazyLock;

use regex::Regex;

use super::cursor::{split_top_level, Cursor};
use crate::config::ParseOptions;
use crate::diagnostics::Diagnostics;
use crate::error::DdlError;
use crate::model::grammar::{self, composite_continuations};
use crate::model::{DataType, Dialect, IntervalRange, IntervalSpec, TimeZone, TypeSpec};

/// One numeric type parameter; `*` is Oracle's unspecified precision.
/// Oracle length semantics (`10 BYTE`, `10 CHAR`) are accepted and dropped.
static PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(-?\d+|\*)\s*(?:BYTE|CHAR)?\s*$").unwrap());

const INTERVAL_UNITS: &[&str] = &["YEAR", "MONTH", "DAY", "HOUR", "MINUTE", "SECOND"];

/// Parse a data type starting at the cursor.
pub(crate) fn parse_data_type(
    cursor: &mut Cursor,
    options: &ParseOptions,
    diagnostics: &mut Diagnostics,
) -> Result<DataType, DdlError> {
    let dialect = options.dialect;
    cursor.skip_whitespace();
    let offset = cursor.pos();
    let word = cursor.require_word_until("data type", b"[")?;

    let mut name = if word.starts_with(dialect.quote_char()) {
        word.to_string()
    } else {
        word.to_ascii_uppercase()
    };
    if let Some(rest) = read_continuation(cursor, &name) {
        name.push(' ');
        name.push_str(&rest);
    }
    if let Some(replacement) = options.type_overrides.get(&name) {
        tracing::debug!("type {} overridden to {}", name, replacement);
        name = replacement.to_string();
    }

    let mut spec = TypeSpec {
        name,
        offset,
        ..Default::default()
    };

    if spec.name == "INTERVAL" && is_interval_unit(cursor) {
        spec.interval = Some(parse_interval_fields(cursor, dialect)?);
    } else if cursor.check_byte(b'(') {
        parse_params(cursor, dialect, &mut spec)?;
    }

    if matches!(spec.name.as_str(), "TIME" | "TIMESTAMP") {
        spec.time_zone = parse_time_zone(cursor);
    }

    spec.array_dimensions = parse_array_suffix(cursor);

    if dialect == Dialect::Mysql {
        loop {
            if cursor.eat_word_ci("UNSIGNED") {
                spec.unsigned = true;
            } else if cursor.eat_word_ci("ZEROFILL") {
                spec.zerofill = true;
            } else if !cursor.eat_word_ci("SIGNED") {
                break;
            }
        }
    }

    DataType::from_spec(dialect, spec, diagnostics)
}

/// Words completing a multi-word type name such as `DOUBLE PRECISION`.
fn read_continuation(cursor: &mut Cursor, head: &str) -> Option<String> {
    for words in composite_continuations(head) {
        let mut probe = cursor.clone();
        if words.iter().all(|w| probe.eat_word_ci(w)) {
            *cursor = probe;
            return Some(words.join(" "));
        }
    }
    None
}

fn parse_params(cursor: &mut Cursor, dialect: Dialect, spec: &mut TypeSpec) -> Result<(), DdlError> {
    let (start, end) = cursor.parenthesized_span()?;
    let inner = cursor.slice(start, end);
    let items = split_top_level(cursor.source(), start, end, b',', dialect);

    if grammar::takes_literal_list(&spec.name) {
        spec.literals = items
            .iter()
            .map(|&(s, e)| cursor.slice(s, e).trim().to_string())
            .collect();
        return Ok(());
    }

    let known = grammar::category(dialect, &spec.name).is_some()
        || grammar::resolve_synonym(dialect, &spec.name).is_some();
    let mut params = Vec::with_capacity(items.len());
    let mut offsets = Vec::with_capacity(items.len());
    for &(s, e) in &items {
        let text = cursor.slice(s, e);
        match parse_param(text, s)? {
            Some(param) => {
                params.push(param);
                offsets.push(s + text.len() - text.trim_start().len());
            }
            None if known => {
                return Err(DdlError::syntax(
                    "numeric type parameter",
                    cursor.slice(s, e).trim(),
                    s,
                ))
            }
            None => {
                spec.raw_params = Some(inner.trim().to_string());
                return Ok(());
            }
        }
    }
    spec.params = params;
    spec.param_offsets = offsets;
    Ok(())
}

/// `Some(Some(n))` for a number, `Some(None)` for `*`, `None` if the text is not a parameter.
fn parse_param(text: &str, offset: usize) -> Result<Option<Option<i64>>, DdlError> {
    let Some(caps) = PARAM_RE.captures(text) else {
        return Ok(None);
    };
    let value = &caps[1];
    if value == "*" {
        return Ok(Some(None));
    }
    value
        .parse::<i64>()
        .map(|n| Some(Some(n)))
        .map_err(|_| DdlError::syntax("numeric type parameter", value, offset))
}

fn parse_single_param(cursor: &mut Cursor) -> Result<Option<i64>, DdlError> {
    if !cursor.check_byte(b'(') {
        return Ok(None);
    }
    let (start, end) = cursor.parenthesized_span()?;
    match parse_param(cursor.slice(start, end), start)? {
        Some(value) => Ok(value),
        None => Err(DdlError::syntax(
            "precision",
            cursor.slice(start, end).trim(),
            start,
        )),
    }
}

fn is_interval_unit(cursor: &Cursor) -> bool {
    cursor
        .peek_word()
        .is_some_and(|w| INTERVAL_UNITS.iter().any(|u| u.eq_ignore_ascii_case(w)))
}

/// `<unit>[(p)] TO <unit>[(p)]`, or a single `<unit>[(p)]` where the dialect allows it.
fn parse_interval_fields(cursor: &mut Cursor, dialect: Dialect) -> Result<IntervalSpec, DdlError> {
    cursor.skip_whitespace();
    let offset = cursor.pos();
    let from = cursor.require_word("interval unit")?;
    let leading_precision = parse_single_param(cursor)?;

    let single_field = matches!(dialect, Dialect::Postgres | Dialect::Standard);
    if single_field && !cursor.check_word_ci("TO") {
        let range = IntervalRange::from_unit(from)
            .ok_or_else(|| DdlError::syntax("interval unit", from, offset))?;
        // Postgres puts fractional seconds precision after a lone SECOND.
        if dialect == Dialect::Postgres && range == IntervalRange::Second {
            return Ok(IntervalSpec {
                range,
                leading_precision: None,
                fractional_precision: leading_precision,
            });
        }
        return Ok(IntervalSpec {
            range,
            leading_precision,
            fractional_precision: None,
        });
    }

    cursor.expect_word("TO")?;
    let to = cursor.require_word("interval unit")?;
    let fractional_precision = parse_single_param(cursor)?;
    let range = IntervalRange::from_units(from, to).ok_or_else(|| {
        DdlError::syntax("interval range", format!("{} TO {}", from, to), offset)
    })?;
    Ok(IntervalSpec {
        range,
        leading_precision,
        fractional_precision,
    })
}

/// `WITH TIME ZONE`, `WITH LOCAL TIME ZONE` or `WITHOUT TIME ZONE`.
fn parse_time_zone(cursor: &mut Cursor) -> Option<TimeZone> {
    let mut probe = cursor.clone();
    let zone = if probe.eat_word_ci("WITHOUT") {
        TimeZone::Without
    } else if probe.eat_word_ci("WITH") {
        if probe.eat_word_ci("LOCAL") {
            TimeZone::WithLocal
        } else {
            TimeZone::With
        }
    } else {
        return None;
    };
    if probe.eat_word_ci("TIME") && probe.eat_word_ci("ZONE") {
        *cursor = probe;
        Some(zone)
    } else {
        None
    }
}

/// Count `[]`/`[n]` suffixes and a trailing `ARRAY[...]` keyword.
fn parse_array_suffix(cursor: &mut Cursor) -> u32 {
    let mut dimensions = 0;
    let mut probe = cursor.clone();
    if probe
        .next_word_until(b"[")
        .is_some_and(|w| w.eq_ignore_ascii_case("ARRAY"))
    {
        *cursor = probe;
        dimensions += 1;
        if cursor.peek_byte() == Some(b'[') {
            skip_bracket(cursor);
        }
    }
    while cursor.peek_byte() == Some(b'[') {
        skip_bracket(cursor);
        dimensions += 1;
    }
    dimensions
}

fn skip_bracket(cursor: &mut Cursor) {
    cursor.eat_byte(b'[');
    cursor.next_word_until(b"]");
    cursor.eat_byte(b']');
}
