#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
pub mod book;
pub mod display;
mod encode;
mod error;

use std::time::Duration;

pub use api::{Client, Response};
pub use book::{normalize, Book};
pub use error::{Error, ErrorKind};

use log::trace;

type DefaultClient = reqwest::blocking::Client;

/// A handle on the books API at a given base URL.
///
/// The base URL is only checked when a request is about to be made, so a [`Catalog`] with an
/// empty base URL fails every load with [`ErrorKind::Config`] without touching the network.
#[derive(Debug)]
pub struct Catalog<C = DefaultClient> {
    base_url: String,
    client: C,
}

impl Catalog {
    /// Creates a [`Catalog`] using the default blocking HTTP client without a timeout.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the HTTP client cannot be initialised.
    pub fn new<S: Into<String>>(base_url: S) -> Result<Self, Error> {
        Self::with_timeout(base_url, None)
    }

    /// Creates a [`Catalog`] using the default blocking HTTP client where every request is
    /// aborted after `timeout`, or never when `timeout` is [`None`].
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the HTTP client cannot be initialised.
    pub fn with_timeout<S: Into<String>>(
        base_url: S,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        let client = DefaultClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::wrap(ErrorKind::Io, e))?;

        Ok(Self::with_client(base_url, client))
    }
}

impl<C: Client> Catalog<C> {
    /// Creates a [`Catalog`] that sends its requests through `client`.
    pub fn with_client<S: Into<String>>(base_url: S, client: C) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// The base URL of the books API.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Load every book from `{base_url}/books`, in the order the backend returns them.
    ///
    /// An empty list is a valid result and not an error.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the base URL is empty, before any request is made.
    /// An `Err` is returned when the request cannot be sent.
    /// An `Err` is returned when the response status is not a success, the message then contains
    /// the status code and the response body.
    /// An `Err` is returned when the response body is not a JSON array.
    pub fn books(&self) -> Result<Vec<Book>, Error> {
        trace!("Load all books from '{}'", self.base_url);
        api::books::get_books(&self.client, &self.base_url)
    }

    /// Load the book with `id` from `{base_url}/books/{id}`.
    ///
    /// # Errors
    ///
    /// An `Err` is returned when the base URL or `id` is empty, before any request is made.
    /// An `Err` is returned when the request cannot be sent.
    /// An `Err` is returned when the response status is not a success, e.g. no book has this id.
    /// An `Err` is returned when the response body is not a JSON object.
    pub fn book(&self, id: &str) -> Result<Book, Error> {
        trace!("Load book '{id}' from '{}'", self.base_url);
        api::books::get_book(&self.client, &self.base_url, id)
    }
}

/// Load every book from `{base_url}/books` using the default HTTP client.
///
/// See [`Catalog::books`].
///
/// # Errors
///
/// An `Err` is returned for the same reasons as [`Catalog::books`] or when the HTTP client cannot
/// be initialised.
#[inline]
pub fn fetch_books(base_url: &str) -> Result<Vec<Book>, Error> {
    api::books::books_url(base_url)?;
    Catalog::new(base_url)?.books()
}

/// Load the book with `id` from `{base_url}/books/{id}` using the default HTTP client.
///
/// See [`Catalog::book`].
///
/// # Errors
///
/// An `Err` is returned for the same reasons as [`Catalog::book`] or when the HTTP client cannot
/// be initialised.
#[inline]
pub fn fetch_book(base_url: &str, id: &str) -> Result<Book, Error> {
    api::books::book_url(base_url, id)?;
    Catalog::new(base_url)?.book(id)
}
