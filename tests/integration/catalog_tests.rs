//! Catalog lookup and listing behaviour

use proptest::prelude::*;
use shelfmark::{config::CatalogConfig, models::CreateBook, AppError, Library};

use super::library_with;

#[test]
fn test_every_added_book_is_reachable() {
    let library = library_with(&[
        ("978-0134685991", "Effective Modern C++", "Scott Meyers"),
        ("978-0321563842", "The C++ Programming Language", "Bjarne Stroustrup"),
        ("978-0132350884", "Clean Code", "Robert C. Martin"),
    ]);

    for book in library.all_books() {
        assert_eq!(library.find_book_by_isbn(&book.isbn), Some(book));
        assert_eq!(library.find_book_by_title(&book.title), Some(book));
    }
    assert_eq!(library.all_books().len(), 3);
}

#[test]
fn test_duplicate_isbn_keeps_original() {
    let mut library = library_with(&[("A1", "Go Basics", "Ann")]);
    let before = library.find_book_by_isbn("A1").cloned();

    let err = library
        .add_book(CreateBook::new("A1", "Imposter", "Eve", "Fiction"))
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateBook(_)));
    assert_eq!(library.find_book_by_isbn("A1").cloned(), before);
    assert!(library.find_book_by_title("Imposter").is_none());
}

#[test]
fn test_empty_catalog_title_search() {
    let library = Library::default();
    assert!(library.find_book_by_title("Go Basics").is_none());
    assert!(library.find_book_by_title("").is_none());
    assert!(library.all_books_sorted().is_empty());
}

#[test]
fn test_sorted_listing_is_idempotent() {
    let library = library_with(&[
        ("3", "Moby Dick", "x"),
        ("1", "Algorithms", "x"),
        ("2", "Zen", "x"),
        ("4", "Algorithms", "y"),
    ]);
    let first: Vec<String> = library
        .all_books_sorted()
        .iter()
        .map(|b| b.isbn.clone())
        .collect();
    let second: Vec<String> = library
        .all_books_sorted()
        .iter()
        .map(|b| b.isbn.clone())
        .collect();
    assert_eq!(first, second);
    assert_eq!(first, vec!["1", "4", "3", "2"]);
}

#[test]
fn test_duplicate_titles_return_first_added() {
    let library = library_with(&[
        ("A1", "Same Title", "First"),
        ("B2", "Other", "x"),
        ("C3", "Same Title", "Second"),
    ]);
    assert_eq!(library.find_book_by_title("Same Title").unwrap().isbn, "A1");
}

#[test]
fn test_single_bucket_catalog() {
    let mut library = Library::new(&CatalogConfig { bucket_count: 1 });
    for i in 0..50 {
        library
            .add_book(CreateBook::new(format!("isbn-{i}"), format!("title-{i:02}"), "a", "g"))
            .unwrap();
    }
    assert_eq!(library.find_book_by_isbn("isbn-49").unwrap().title, "title-49");
    // single chain keeps insertion order
    assert_eq!(library.all_books()[0].isbn, "isbn-0");
    assert_eq!(library.all_books_sorted()[49].title, "title-49");
}

#[test]
fn test_remove_refused_while_on_loan() {
    let mut library = library_with(&[("A1", "Go Basics", "Ann")]);
    library.register_user("Alice", "alice@example.com");
    library.issue_book(1, "A1").unwrap();

    assert!(matches!(library.remove_book("A1"), Err(AppError::BookOnLoan(_))));
    assert!(library.find_book_by_title("Go Basics").is_some());

    library.return_book(1, "A1").unwrap();
    library.remove_book("A1").unwrap();
    assert!(library.find_book_by_isbn("A1").is_none());
    assert!(library.find_book_by_title("Go Basics").is_none());
    assert_eq!(library.book_count(), 0);
}

proptest! {
    #[test]
    fn prop_isbn_and_title_indices_agree(
        rows in proptest::collection::btree_map("[0-9]{1,6}", "[A-Z][a-z]{0,5}", 1..40),
        buckets in 1usize..16,
    ) {
        let mut library = Library::new(&CatalogConfig { bucket_count: buckets });
        for (isbn, title) in &rows {
            library.add_book(CreateBook::new(isbn.as_str(), title.as_str(), "a", "g")).unwrap();
        }

        prop_assert_eq!(library.all_books().len(), rows.len());
        prop_assert_eq!(library.all_books_sorted().len(), rows.len());
        for (isbn, title) in &rows {
            let book = library.find_book_by_isbn(isbn).unwrap();
            prop_assert_eq!(&book.title, title);
            prop_assert_eq!(&library.find_book_by_title(title).unwrap().title, title);
        }
        let sorted: Vec<&str> = library.all_books_sorted().iter().map(|b| b.title.as_str()).collect();
        let mut expected = sorted.clone();
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }
}
