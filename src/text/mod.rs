//! String formatting utilities
//!
//! Helpers for rendering iterables as strings and for reshaping
//! identifier-style names into readable labels.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{Display, Write};

/// Render every item back to back with no separator.
pub fn concatenated<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for item in items {
        // Writing into a String cannot fail
        let _ = write!(out, "{item}");
    }
    out
}

/// Render items separated by `separator`, optionally followed by a space.
pub fn separated<I>(items: I, separator: char, spaced: bool) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    let mut first = true;
    for item in items {
        if !first {
            out.push(separator);
            if spaced {
                out.push(' ');
            }
        }
        let _ = write!(out, "{item}");
        first = false;
    }
    out
}

/// Uppercase the first character, leaving the rest untouched.
pub fn with_upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn with_lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Drop every space character.
pub fn without_spaces(s: &str) -> String {
    s.replace(' ', "")
}

lazy_static! {
    static ref LOWER_THEN_UPPER: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    static ref UPPER_THEN_TITLE: Regex = Regex::new(r"([A-Z])([A-Z][a-z])").unwrap();
    static ref LETTER_THEN_DIGIT: Regex = Regex::new(r"([a-zA-Z])([0-9])").unwrap();
}

/// Insert a space before each word of an identifier-style name.
///
/// A word starts where a lowercase letter meets an uppercase one, where an
/// acronym run ends before a title-cased word, or where a digit follows a
/// letter.
pub fn with_spaces_between_words(s: &str) -> String {
    let spaced = LOWER_THEN_UPPER.replace_all(s, "$1 $2");
    let spaced = UPPER_THEN_TITLE.replace_all(&spaced, "$1 $2");
    LETTER_THEN_DIGIT.replace_all(&spaced, "$1 $2").into_owned()
}

/// Format an identifier for display: spaced words with a leading capital.
pub fn humanized(name: &str) -> String {
    with_upper_first(&with_spaces_between_words(name))
}
