//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the URL of the content-hashed stylesheet.
///
/// The hash is computed at build time from the CSS file content. Falls back
/// to the unhashed file when the build could not produce one.
///
/// Usage in templates: `{{ ""|stylesheet }}`
#[askama::filter_fn]
pub fn stylesheet(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let hash = env!("CSS_HASH");
    Ok(if hash.is_empty() {
        "/static/css/main.css".to_string()
    } else {
        format!("/static/css/derived/main.{hash}.css")
    })
}

/// Zero-pads a countdown unit to two digits.
///
/// Usage in templates: `{{ countdown.hours|two_digits }}`
#[askama::filter_fn]
pub fn two_digits(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("{value:0>2}"))
}
