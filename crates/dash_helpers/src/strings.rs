//! String helpers.
//!
//! Positions and lengths are counted in characters, not bytes.

use dash_foundation::{Error, Result, TypeHint, Value};

use crate::args::{opt_bool_arg, opt_int_arg, opt_str_arg, str_arg, str_list};
use crate::module::HelperModule;

/// Returns the character at `index`, or an empty string when out of range.
#[must_use]
pub fn char_at(s: &str, index: i64) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|i| s.chars().nth(i))
        .map(String::from)
        .unwrap_or_default()
}

/// Returns the code point of the character at `index`.
#[must_use]
pub fn char_code_at(s: &str, index: i64) -> Option<u32> {
    usize::try_from(index)
        .ok()
        .and_then(|i| s.chars().nth(i))
        .map(u32::from)
}

fn char_position(s: &str, byte_index: Option<usize>) -> i64 {
    byte_index
        .and_then(|b| i64::try_from(s[..b].chars().count()).ok())
        .unwrap_or(-1)
}

/// Returns the position of the first occurrence of `needle`, or -1.
#[must_use]
pub fn index_of(haystack: &str, needle: &str) -> i64 {
    char_position(haystack, haystack.find(needle))
}

/// Returns the position of the last occurrence of `needle`, or -1.
#[must_use]
pub fn last_index_of(haystack: &str, needle: &str) -> i64 {
    char_position(haystack, haystack.rfind(needle))
}

/// Returns true if every character of `s` appears in one of `chars`.
#[must_use]
pub fn contains_only(s: &str, chars: &[&str]) -> bool {
    s.chars().all(|c| chars.iter().any(|allowed| allowed.contains(c)))
}

/// Returns true if `s` contains at least one of `needles`.
#[must_use]
pub fn contains_any(s: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| s.contains(n))
}

/// Returns true if `s` contains none of `needles`.
#[must_use]
pub fn contains_none(s: &str, needles: &[&str]) -> bool {
    !contains_any(s, needles)
}

/// Cuts `s` to `limit` characters and appends `end`.
///
/// Strings that already fit are returned unchanged.
#[must_use]
pub fn truncate(s: &str, limit: usize, end: &str) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }
    let mut out: String = s.chars().take(limit).collect();
    out.push_str(end);
    out
}

/// Returns the length of `s` in characters.
#[must_use]
pub fn length(s: &str) -> usize {
    s.chars().count()
}

/// Parses `s` as an integer, or as a float when it has a decimal point or
/// exponent.
pub fn to_number(s: &str) -> Result<Value> {
    let trimmed = s.trim();
    let invalid = || Error::invalid_argument("toNumber", format!("{s:?} is not numeric"));
    if trimmed.contains(['.', 'e', 'E']) {
        trimmed.parse::<f64>().map(Value::Float).map_err(|_| invalid())
    } else {
        trimmed.parse::<i64>().map(Value::Int).map_err(|_| invalid())
    }
}

/// Returns the byte values of `s`.
#[must_use]
pub fn to_ascii(s: &str) -> Vec<i64> {
    s.bytes().map(i64::from).collect()
}

/// Converts `s` to `PascalCase`.
///
/// Underscores and dashes separate words; the first letter of each word is
/// uppercased and the separators removed.
#[must_use]
pub fn pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        match c {
            '_' | '-' | ' ' => at_word_start = true,
            c if c.is_whitespace() => {
                out.push(c);
                at_word_start = true;
            }
            c if at_word_start => {
                out.extend(c.to_uppercase());
                at_word_start = false;
            }
            c => out.push(c),
        }
    }
    out
}

/// Converts `s` to `camelCase`.
#[must_use]
pub fn camel_case(s: &str) -> String {
    let pascal = pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts `s` to `snake_case`.
///
/// An underscore is inserted before each ASCII uppercase letter that follows
/// a word character, then the whole string is lowercased.
#[must_use]
pub fn snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_alphanumeric() || p == '_') {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
        prev = Some(c);
    }
    out
}

fn replace_separators(s: &str, sep: char, trail: bool) -> String {
    let mut out: String = s
        .chars()
        .map(|c| if c == '\\' || c == '/' { sep } else { c })
        .collect();
    if trail {
        out.push(sep);
    }
    out
}

/// Normalizes path separators to `/`.
#[must_use]
pub fn url_sep(s: &str, trail: bool) -> String {
    replace_separators(s, '/', trail)
}

/// Normalizes path separators to the platform separator.
#[must_use]
pub fn dir_sep(s: &str, trail: bool) -> String {
    replace_separators(s, std::path::MAIN_SEPARATOR, trail)
}

// =============================================================================
// Registered functions
// =============================================================================

/// Returns the `Strings` helper module.
#[must_use]
pub fn module() -> HelperModule {
    HelperModule::new(TypeHint::STRINGS)
        .with_function("charAt", native_char_at)
        .with_function("charCodeAt", native_char_code_at)
        .with_function("indexOf", native_index_of)
        .with_function("lastIndexOf", native_last_index_of)
        .with_function("containsOnly", native_contains_only)
        .with_function("containsAny", native_contains_any)
        .with_function("containsNone", native_contains_none)
        .with_function("truncate", native_truncate)
        .with_function("length", native_length)
        .with_function("toNumber", native_to_number)
        .with_function("toASCII", native_to_ascii)
        .with_function("pascalCase", native_pascal_case)
        .with_function("camelCase", native_camel_case)
        .with_function("snakeCase", native_snake_case)
        .with_function("urlSep", native_url_sep)
        .with_function("dirSep", native_dir_sep)
}

fn usize_value(n: usize) -> Value {
    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
}

/// Strings: charAt
fn native_char_at(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "charAt")?;
    Ok(char_at(s, opt_int_arg(args, 1, 0)?).into())
}

/// Strings: charCodeAt (NaN when out of range)
fn native_char_code_at(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "charCodeAt")?;
    Ok(char_code_at(s, opt_int_arg(args, 1, 0)?)
        .map_or(Value::Float(f64::NAN), |c| Value::Int(i64::from(c))))
}

/// Strings: indexOf
fn native_index_of(args: &[Value]) -> Result<Value> {
    let haystack = str_arg(args, 0, "indexOf")?;
    let needle = str_arg(args, 1, "indexOf")?;
    Ok(Value::Int(index_of(haystack, needle)))
}

/// Strings: lastIndexOf
fn native_last_index_of(args: &[Value]) -> Result<Value> {
    let haystack = str_arg(args, 0, "lastIndexOf")?;
    let needle = str_arg(args, 1, "lastIndexOf")?;
    Ok(Value::Int(last_index_of(haystack, needle)))
}

/// Strings: containsOnly
fn native_contains_only(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "containsOnly")?;
    Ok(Value::Bool(contains_only(s, &str_list(args, 1)?)))
}

/// Strings: containsAny
fn native_contains_any(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "containsAny")?;
    Ok(Value::Bool(contains_any(s, &str_list(args, 1)?)))
}

/// Strings: containsNone
fn native_contains_none(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "containsNone")?;
    Ok(Value::Bool(contains_none(s, &str_list(args, 1)?)))
}

/// Strings: truncate
fn native_truncate(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "truncate")?;
    let limit = opt_int_arg(args, 1, 200)?;
    let limit = usize::try_from(limit)
        .map_err(|_| Error::invalid_argument("truncate", format!("negative limit {limit}")))?;
    let end = opt_str_arg(args, 2, "...")?;
    Ok(truncate(s, limit, end).into())
}

/// Strings: length
fn native_length(args: &[Value]) -> Result<Value> {
    Ok(usize_value(length(str_arg(args, 0, "length")?)))
}

/// Strings: toNumber
fn native_to_number(args: &[Value]) -> Result<Value> {
    to_number(str_arg(args, 0, "toNumber")?)
}

/// Strings: toASCII
fn native_to_ascii(args: &[Value]) -> Result<Value> {
    Ok(to_ascii(str_arg(args, 0, "toASCII")?).into())
}

/// Strings: pascalCase
fn native_pascal_case(args: &[Value]) -> Result<Value> {
    Ok(pascal_case(str_arg(args, 0, "pascalCase")?).into())
}

/// Strings: camelCase
fn native_camel_case(args: &[Value]) -> Result<Value> {
    Ok(camel_case(str_arg(args, 0, "camelCase")?).into())
}

/// Strings: snakeCase
fn native_snake_case(args: &[Value]) -> Result<Value> {
    Ok(snake_case(str_arg(args, 0, "snakeCase")?).into())
}

/// Strings: urlSep
fn native_url_sep(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "urlSep")?;
    Ok(url_sep(s, opt_bool_arg(args, 1, false)?).into())
}

/// Strings: dirSep
fn native_dir_sep(args: &[Value]) -> Result<Value> {
    let s = str_arg(args, 0, "dirSep")?;
    Ok(dir_sep(s, opt_bool_arg(args, 1, false)?).into())
}
