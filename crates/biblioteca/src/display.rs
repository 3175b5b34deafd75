//! Presentation of [`Book`]s as plain-text cards.

use std::{borrow::Cow, fmt};

use crate::{encode, Book};

/// Shown instead of the author list when a book has no authors.
pub const NO_AUTHORS: &str = "Autor(es) não informados";

/// Shown instead of the title when a book has none.
pub const UNTITLED: &str = "Sem título";

/// Shown by [`Shelf`] when there are no books to list.
pub const EMPTY_SHELF: &str = "Nenhum livro cadastrado ainda.";

const MISSING: &str = "—";
const COVER_SEED_URL: &str = "https://picsum.photos/seed";
const COVER_SIZE: (u16, u16) = (400, 600);

/// Join `authors` with `", "` keeping their order, or [`NO_AUTHORS`] when there are none.
#[must_use]
pub fn pretty_authors(authors: &[String]) -> Cow<'static, str> {
    if authors.is_empty() {
        Cow::Borrowed(NO_AUTHORS)
    } else {
        Cow::Owned(authors.join(", "))
    }
}

/// A placeholder cover image for the book with `id`.
///
/// No cover data is stored so the image is picked by using the id as a seed: the same id always
/// gives the same URL and different ids give different URLs.
#[must_use]
pub fn cover_for(id: &str) -> String {
    let (width, height) = COVER_SIZE;
    format!(
        "{COVER_SEED_URL}/{}/{width}/{height}",
        encode::uri_component(id)
    )
}

/// A single [`Book`] rendered as a card.
#[derive(Clone, Copy, Debug)]
pub struct Card<'a>(&'a Book);

impl<'a> Card<'a> {
    /// Creates a card for `book`.
    #[must_use]
    pub const fn new(book: &'a Book) -> Self {
        Self(book)
    }
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;

        writeln!(f, "{}", book.title.as_deref().unwrap_or(UNTITLED))?;
        writeln!(f, "  Autor(es): {}", book.authors_display())?;
        writeln!(f, "  Páginas: {}", or_missing(book.page_count))?;
        writeln!(f, "  Ano: {}", or_missing(book.pub_year))?;
        write!(f, "  Capa: {}", book.cover())
    }
}

/// The whole catalog: a heading followed by one [`Card`] per book, or [`EMPTY_SHELF`].
#[derive(Clone, Copy, Debug)]
pub struct Shelf<'a>(&'a [Book]);

impl<'a> Shelf<'a> {
    /// Creates a shelf listing `books` in order.
    #[must_use]
    pub const fn new(books: &'a [Book]) -> Self {
        Self(books)
    }
}

impl fmt::Display for Shelf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Biblioteca")?;
        writeln!(f, "Lista de livros cadastrados")?;

        if self.0.is_empty() {
            return write!(f, "\n{EMPTY_SHELF}");
        }

        for book in self.0 {
            write!(f, "\n{}\n", Card::new(book))?;
        }
        Ok(())
    }
}

fn or_missing<T: ToString>(value: Option<T>) -> Cow<'static, str> {
    value.map_or(Cow::Borrowed(MISSING), |v| Cow::Owned(v.to_string()))
}
