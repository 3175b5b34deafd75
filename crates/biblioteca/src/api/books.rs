use log::{debug, info, trace};
use serde_json::Value;

use crate::{
    book::{self, Book},
    encode, Error, ErrorKind,
};

use super::Client;

const BOOKS_PATH: &str = "books";

/// The `{base_url}/books` endpoint, failing when no base URL is configured.
pub(crate) fn books_url(base_url: &str) -> Result<String, Error> {
    let base_url = base_url.trim();
    if base_url.is_empty() {
        return Err(Error::new(
            ErrorKind::Config,
            "no base URL configured for the books API",
        ));
    }

    Ok(format!("{}/{BOOKS_PATH}", base_url.trim_end_matches('/')))
}

pub(crate) fn get_books<C: Client>(client: &C, base_url: &str) -> Result<Vec<Book>, Error> {
    let url = books_url(base_url)?;
    info!("Loading books from '{url}'");

    match get_json(client, &url)? {
        Value::Array(records) => {
            trace!("Normalizing {} book records", records.len());
            Ok(records.iter().map(book::normalize).collect())
        }
        other => Err(Error::new(
            ErrorKind::Parse,
            format!("expected a JSON array of books but found {}", json_type(&other)),
        )),
    }
}

/// The `{base_url}/books/{id}` endpoint, failing when no base URL or id is given.
pub(crate) fn book_url(base_url: &str, id: &str) -> Result<String, Error> {
    if id.is_empty() {
        return Err(Error::new(ErrorKind::Config, "no book id given"));
    }

    Ok(format!("{}/{}", books_url(base_url)?, encode::uri_component(id)))
}

pub(crate) fn get_book<C: Client>(client: &C, base_url: &str, id: &str) -> Result<Book, Error> {
    let url = book_url(base_url, id)?;
    info!("Loading book '{id}' from '{url}'");

    match get_json(client, &url)? {
        record @ Value::Object(_) => Ok(book::normalize(&record)),
        other => Err(Error::new(
            ErrorKind::Parse,
            format!("expected a JSON object for a book but found {}", json_type(&other)),
        )),
    }
}

fn get_json<C: Client>(client: &C, url: &str) -> Result<Value, Error> {
    let response = client.get_response(url)?;

    if !response.is_success() {
        debug!("Request to '{url}' failed with status {}", response.status());
        return Err(Error::backend(response.status(), response.body()));
    }

    trace!("Request was successful");

    serde_json::from_str(&response.into_body()).map_err(|e| Error::wrap(ErrorKind::Parse, e))
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{assert_url, impl_response_producer, MockClient, NetworkErrorProducer, Response},
        Book, Error, ErrorKind,
    };

    const BOOKS_JSON: &str = include_str!("../../tests/data/books.json");

    impl_response_producer! {
        ValidJsonProducer => Ok(Response::new(200, BOOKS_JSON)),
        EmptyListProducer => Ok(Response::new(200, "[]")),
        ServerErrorProducer => Ok(Response::new(500, "boom")),
        NotFoundProducer => Ok(Response::new(404, r#"{"detail":"Livro não encontrado."}"#)),
        InvalidJsonProducer => Ok(Response::new(200, "<html>not json</html>")),
        ObjectProducer => Ok(Response::new(200, r#"{"id": 1, "title": "Single"}"#)),
        MalformedRecordsProducer => Ok(Response::new(
            200,
            r#"[{"id": 1}, "junk", {"id": "x", "authors": "nope", "title": ""}]"#,
        )),
    }

    fn kind_of<T>(res: &Result<T, Error>) -> Result<(), ErrorKind> {
        res.as_ref().map(|_| ()).map_err(Error::kind)
    }

    #[test]
    fn books_url_is_joined_with_and_without_trailing_slash() {
        assert_eq!(
            "http://localhost:8000/books",
            super::books_url("http://localhost:8000").unwrap()
        );
        assert_eq!(
            "http://localhost:8000/books",
            super::books_url("http://localhost:8000/").unwrap()
        );
        assert_eq!(
            "https://api.example.com/v1/books",
            super::books_url(" https://api.example.com/v1 ").unwrap()
        );
    }

    #[test]
    fn missing_base_url_fails_before_any_request() {
        let client = MockClient::<ValidJsonProducer>::default();

        for base_url in ["", "   "] {
            let res = super::get_books(&client, base_url);
            assert_eq!(Err(ErrorKind::Config), kind_of(&res));
        }

        let requested = crate::api::URL_SINK.with(|url| url.borrow().is_some());
        assert!(!requested, "No request should be made without a base URL");
    }

    #[test]
    fn books_are_loaded_in_source_order() {
        let client = MockClient::<ValidJsonProducer>::default();
        let books = super::get_books(&client, "http://localhost:8000").unwrap();

        assert_url!("http://localhost:8000/books");

        let ids = books.iter().map(|b| b.id.as_str()).collect::<Vec<_>>();
        assert_eq!(
            vec![
                "0d7c5f7e-1a2b-4c3d-9e8f-001122334455",
                "42",
                "9a1b2c3d-0000-4000-8000-123456789abc"
            ],
            ids
        );

        assert_eq!(
            Book {
                id: "0d7c5f7e-1a2b-4c3d-9e8f-001122334455".to_owned(),
                title: Some("Grande Sertão: Veredas".to_owned()),
                page_count: Some(624),
                pub_year: Some(1956),
                authors: vec!["João Guimarães Rosa".to_owned()],
            },
            books[0]
        );
        assert_eq!(None, books[1].title);
        assert!(books[1].authors.is_empty());
        assert_eq!(
            vec!["Neil Gaiman".to_owned(), "Terry Pratchett".to_owned()],
            books[2].authors
        );
    }

    #[test]
    fn empty_list_is_not_an_error() {
        let client = MockClient::<EmptyListProducer>::default();
        let books = super::get_books(&client, "http://localhost:8000").unwrap();

        assert!(books.is_empty());
    }

    #[test]
    fn failure_status_returns_backend_error_with_status_and_body() {
        let client = MockClient::<ServerErrorProducer>::default();
        let err = super::get_books(&client, "http://localhost:8000").unwrap_err();

        assert_eq!(ErrorKind::Backend, err.kind());
        assert_eq!(Some(500), err.status());

        let message = err.to_string();
        assert!(message.contains("500"), "{message}");
        assert!(message.contains("boom"), "{message}");
    }

    #[test]
    fn invalid_json_returns_parse_error() {
        let client = MockClient::<InvalidJsonProducer>::default();
        let res = super::get_books(&client, "http://localhost:8000");

        assert_eq!(Err(ErrorKind::Parse), kind_of(&res));
    }

    #[test]
    fn json_object_for_list_returns_parse_error() {
        let client = MockClient::<ObjectProducer>::default();
        let err = super::get_books(&client, "http://localhost:8000").unwrap_err();

        assert_eq!(ErrorKind::Parse, err.kind());
        assert!(err.to_string().contains("an object"), "{err}");
    }

    #[test]
    fn malformed_records_degrade_instead_of_failing() {
        let client = MockClient::<MalformedRecordsProducer>::default();
        let books = super::get_books(&client, "http://localhost:8000").unwrap();

        assert_eq!(3, books.len());
        assert_eq!("1", books[0].id);
        assert_eq!(Book::default(), books[1]);
        assert_eq!("x", books[2].id);
        assert_eq!(None, books[2].title);
        assert!(books[2].authors.is_empty());
    }

    #[test]
    fn network_error_is_propagated() {
        let client = MockClient::<NetworkErrorProducer>::default();
        let res = super::get_books(&client, "http://localhost:8000");

        assert_eq!(Err(ErrorKind::Io), kind_of(&res));
    }

    #[test]
    fn single_book_url_encodes_id() {
        let client = MockClient::<ObjectProducer>::default();
        let book = super::get_book(&client, "http://localhost:8000/", "a b/c").unwrap();

        assert_url!("http://localhost:8000/books/a%20b%2Fc");
        assert_eq!("1", book.id);
        assert_eq!(Some("Single".to_owned()), book.title);
    }

    #[test]
    fn single_book_not_found_is_backend_error() {
        let client = MockClient::<NotFoundProducer>::default();
        let err = super::get_book(&client, "http://localhost:8000", "missing").unwrap_err();

        assert_eq!(ErrorKind::Backend, err.kind());
        assert_eq!(Some(404), err.status());
        assert!(err.to_string().contains("Livro não encontrado."), "{err}");
    }

    #[test]
    fn single_book_rejects_array_body() {
        let client = MockClient::<ValidJsonProducer>::default();
        let res = super::get_book(&client, "http://localhost:8000", "42");

        assert_eq!(Err(ErrorKind::Parse), kind_of(&res));
    }

    #[test]
    fn single_book_requires_id_and_base_url() {
        let client = MockClient::<ObjectProducer>::default();

        assert_eq!(
            Err(ErrorKind::Config),
            kind_of(&super::get_book(&client, "http://localhost:8000", ""))
        );
        assert_eq!(
            Err(ErrorKind::Config),
            kind_of(&super::get_book(&client, "", "42"))
        );

        let requested = crate::api::URL_SINK.with(|url| url.borrow().is_some());
        assert!(!requested);
    }
}
