//! Display formatting for crop values and dashboard figures.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::DateTime;

use crate::state::form::format_number;

/// Group digits Indian style: last three, then pairs (`4,20,000`).
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Rupee amount as shown on summary tiles: `4,20,000/-`.
pub fn format_amount(value: u64) -> String {
    format!("{}/-", group_indian(value))
}

/// Table/detail rendering of a listing timestamp, `DD/MM/YYYY, HH:MM:SS`
/// in UTC. Unparseable values are shown verbatim.
pub fn display_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "—".to_owned();
    };
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => parsed.to_utc().format("%d/%m/%Y, %H:%M:%S").to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// Table/detail rendering of an optional numeric field.
pub fn display_number(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

pub fn display_integer(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
