//! Integration tests driving the public library and dispatcher surfaces

mod catalog_tests;
mod lending_tests;

use shelfmark::{models::CreateBook, Library};

/// Library seeded with the given `(isbn, title, author)` rows
pub fn library_with(books: &[(&str, &str, &str)]) -> Library {
    let mut library = Library::default();
    for (isbn, title, author) in books {
        library
            .add_book(CreateBook::new(*isbn, *title, *author, "Programming"))
            .expect("seed book");
    }
    library
}
