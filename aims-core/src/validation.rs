//! Field-level checks for the details a customer types in at checkout.
//!
//! Every predicate takes the value as `Option<&str>` so a missing form field
//! and an empty one are rejected the same way. None of them panic.

use chrono::NaiveDateTime;

use crate::{CoreError, CoreResult};

/// Pattern a rush-order receive time must follow, e.g. `24-12-2023 18:30`.
pub const RECEIVE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Digit positions of `dd-MM-yyyy HH:mm`; `0` marks a digit, anything else a literal.
const RECEIVE_TIME_SHAPE: &str = "00-00-0000 00:00";

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Alphabetic but not a letter-like number such as `Ⅲ`.
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !ch.is_numeric()
}

/// Whitespace here means ASCII space, tab, newline, form feed or carriage return.
fn is_letter_or_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || is_letter(ch)
}

/// Letters and whitespace only, at least one character.
pub fn validate_address(address: Option<&str>) -> bool {
    non_empty(address).is_some_and(|s| s.chars().all(is_letter_or_space))
}

/// Letters only. Unlike an address, a name with a space is rejected.
pub fn validate_name(name: Option<&str>) -> bool {
    non_empty(name).is_some_and(|s| s.chars().all(is_letter))
}

/// Ten ASCII digits, the first of which is `0`.
pub fn validate_phone_number(phone_number: Option<&str>) -> bool {
    let Some(phone) = non_empty(phone_number) else {
        return false;
    };

    if !phone.starts_with('0') || phone.chars().count() != 10 {
        return false;
    }

    phone.chars().all(|ch| ch.is_ascii_digit())
}

/// Free text for rush-order info and instructions: letters and whitespace.
pub fn validate_basic_string(value: Option<&str>) -> bool {
    non_empty(value).is_some_and(|s| s.chars().all(is_letter_or_space))
}

/// Parse a receive time written as `dd-MM-yyyy HH:mm`.
///
/// The field widths are fixed: `1-12-2023 18:30` and `24-12-23 18:30` are
/// rejected even though chrono alone would accept some of them. Dates that do
/// not exist on the calendar (`31-02-2024`) are rejected too.
pub fn parse_receive_time(time: &str) -> CoreResult<NaiveDateTime> {
    let shape_ok = time.len() == RECEIVE_TIME_SHAPE.len()
        && time
            .bytes()
            .zip(RECEIVE_TIME_SHAPE.bytes())
            .all(|(actual, expected)| match expected {
                b'0' => actual.is_ascii_digit(),
                literal => actual == literal,
            });

    if !shape_ok {
        return Err(CoreError::InvalidReceiveTime(time.to_string()));
    }

    NaiveDateTime::parse_from_str(time, RECEIVE_TIME_FORMAT)
        .map_err(|e| CoreError::InvalidReceiveTime(format!("{}: {}", time, e)))
}

/// True when the value parses with [`parse_receive_time`].
pub fn validate_receive_time(time: Option<&str>) -> bool {
    time.is_some_and(|t| parse_receive_time(t).is_ok())
}
