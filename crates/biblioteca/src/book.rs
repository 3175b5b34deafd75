//! The [`Book`] record and the normalization of loosely-typed backend records into it.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::display;

/// A book as shown in the catalog.
///
/// Every field is always present, optional values use [`None`] (serialized as `null`) instead of
/// being left out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Identifier of the book, coerced to a string whatever its source type.
    pub id: String,
    /// Title of the book.
    pub title: Option<String>,
    /// Number of pages.
    pub page_count: Option<u32>,
    /// Year of publication.
    pub pub_year: Option<i32>,
    /// Authors in the order given by the backend.
    pub authors: Vec<String>,
}

impl Book {
    /// The authors joined for display, see [`display::pretty_authors`].
    #[must_use]
    pub fn authors_display(&self) -> Cow<'static, str> {
        display::pretty_authors(&self.authors)
    }

    /// Placeholder cover image derived from the id, see [`display::cover_for`].
    #[must_use]
    pub fn cover(&self) -> String {
        display::cover_for(&self.id)
    }
}

impl From<&Value> for Book {
    fn from(raw: &Value) -> Self {
        normalize(raw)
    }
}

/// Normalize a loosely-typed record into a [`Book`].
///
/// This never fails. Missing, `null`, empty or wrong-typed optional fields become [`None`] and
/// `authors` becomes empty unless it is an array, in which case only its string elements are
/// kept. `id` is coerced to a string:
///
/// - strings are used as they are
/// - numbers and booleans use their JSON text, e.g. `7` becomes `"7"`
/// - `null` or a missing id becomes `""`
/// - arrays and objects become their compact JSON text
///
/// This differs from JavaScript's `String(id)`: an absent id is `""` rather than `"null"` or
/// `"undefined"`, and arrays and objects keep their JSON text instead of `"1,2"` or
/// `"[object Object]"` so that different ids never collapse into the same string.
///
/// `page_count` and `pub_year` accept integers and whole-number floats such as `300.0`.
///
/// A value that is not an object has no fields and so normalizes to an empty [`Book`].
#[must_use]
pub fn normalize(raw: &Value) -> Book {
    Book {
        id: coerce_id(raw.get("id")),
        title: raw
            .get("title")
            .and_then(Value::as_str)
            .filter(|title| !title.is_empty())
            .map(ToOwned::to_owned),
        page_count: raw
            .get("page_count")
            .and_then(whole_number)
            .and_then(|pages| u32::try_from(pages).ok())
            .filter(|&pages| pages != 0),
        pub_year: raw
            .get("pub_year")
            .and_then(whole_number)
            .and_then(|year| i32::try_from(year).ok())
            .filter(|&year| year != 0),
        authors: match raw.get("authors") {
            Some(Value::Array(authors)) => authors
                .iter()
                .filter_map(Value::as_str)
                .map(ToOwned::to_owned)
                .collect(),
            _ => Vec::new(),
        },
    }
}

// integers, or floats without a fractional part that fit in an i64
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && n.abs() < 9.0e15)
            .map(|n| n as i64)
    })
}

fn coerce_id(id: Option<&Value>) -> String {
    match id {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
    }
}
