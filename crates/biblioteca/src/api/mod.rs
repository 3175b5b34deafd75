use log::debug;
use reqwest::header::{CACHE_CONTROL, PRAGMA};

pub(crate) mod books;

use crate::{Error, ErrorKind};

/// A raw HTTP response: the status code and the body read as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: String,
}

impl Response {
    /// Creates a new [`Response`].
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is in the `2xx` success range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// The response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    pub(crate) fn into_body(self) -> String {
        self.body
    }
}

/// The transport used to talk to the backend.
///
/// Implementations must bypass any cache so that every call reaches the live backend. When the
/// response status is a failure, reading the body is best-effort and an unreadable body should
/// be returned as an empty [`String`] rather than an error.
pub trait Client {
    /// Issue a single `GET` request to `url`.
    ///
    /// # Errors
    ///
    /// An [`Err`] with [`ErrorKind::Io`] is returned when the request cannot be sent or the body
    /// of a successful response cannot be read.
    fn get_response(&self, url: &str) -> Result<Response, Error>;
}

impl Client for reqwest::blocking::Client {
    fn get_response(&self, url: &str) -> Result<Response, Error> {
        let resp = uncached_get(self, url)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::Io, e))?;

        let status = resp.status();
        let body = if status.is_success() {
            resp.text().map_err(|e| Error::wrap(ErrorKind::Io, e))?
        } else {
            resp.text().unwrap_or_else(|e| {
                debug!("Could not read the body of the failed response: {e}");
                String::new()
            })
        };

        Ok(Response::new(status.as_u16(), body))
    }
}

fn uncached_get(client: &reqwest::blocking::Client, url: &str) -> reqwest::blocking::RequestBuilder {
    client
        .get(url)
        .header(CACHE_CONTROL, "no-cache, no-store")
        .header(PRAGMA, "no-cache")
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_response_producer, MockClient, NetworkErrorProducer, Producer, URL_SINK,
};
