//! Server-rendered HTML.
//!
//! Every interpolated value goes through [`text`] or [`attr`].

pub mod error;
pub mod home;
pub mod layout;
pub mod post;

use chrono::{DateTime, Utc};

/// Escape for element content.
pub(crate) fn text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Escape for a double-quoted attribute value.
pub(crate) fn attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

pub(crate) fn date(value: &DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}
