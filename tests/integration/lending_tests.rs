//! Issue/return processing and the reports derived from it

use shelfmark::{models::LoanRequest, AppError, Library};

use super::library_with;

fn assert_loan_invariants(library: &Library) {
    let users = library.all_users();
    for book in library.all_books() {
        let holders: Vec<u32> = users
            .iter()
            .filter(|u| library.find_user(u.id).unwrap().has_borrowed(&book.isbn))
            .map(|u| u.id)
            .collect();
        assert!(holders.len() <= 1, "{} held by {:?}", book.isbn, holders);
        assert_eq!(holders.len() == 1, !book.is_available, "book {}", book.isbn);
    }
}

#[test]
fn test_issue_return_scenario() {
    let mut library = library_with(&[("A1", "Go Basics", "Ann")]);
    let alice = library.register_user("Alice", "alice@example.com");
    assert_eq!(alice.id, 1);

    library.issue_book(1, "A1").unwrap();
    assert!(!library.find_book_by_isbn("A1").unwrap().is_available);

    assert!(matches!(library.issue_book(1, "A1"), Err(AppError::BookUnavailable(_))));

    library.return_book(1, "A1").unwrap();
    assert!(library.find_book_by_isbn("A1").unwrap().is_available);

    assert!(matches!(
        library.return_book(1, "A1"),
        Err(AppError::NotBorrowedByUser { user_id: 1, .. })
    ));
    assert!(library.find_book_by_isbn("A1").unwrap().is_available);
    assert_eq!(library.find_book_by_isbn("A1").unwrap().borrow_count, 1);
    assert_loan_invariants(&library);
}

#[test]
fn test_issue_increments_count_and_tracks_user() {
    let mut library = library_with(&[("A1", "Go Basics", "Ann"), ("B2", "Rust", "Bob")]);
    library.register_user("Alice", "alice@example.com");

    for _ in 0..3 {
        library.issue_book(1, "A1").unwrap();
        library.return_book(1, "A1").unwrap();
    }
    library.issue_book(1, "A1").unwrap();

    let book = library.find_book_by_isbn("A1").unwrap();
    assert_eq!(book.borrow_count, 4);
    assert!(library.find_user(1).unwrap().has_borrowed("A1"));
    assert_eq!(library.times_borrowed("A1"), 4);
    assert_loan_invariants(&library);
}

#[test]
fn test_unavailable_issue_leaves_state_unchanged() {
    let mut library = library_with(&[("A1", "Go Basics", "Ann")]);
    library.register_user("Alice", "alice@example.com");
    library.register_user("Bob", "bob@example.com");
    library.issue_book(1, "A1").unwrap();

    let before = library.find_book_by_isbn("A1").cloned();
    assert!(matches!(library.issue_book(2, "A1"), Err(AppError::BookUnavailable(_))));
    assert_eq!(library.find_book_by_isbn("A1").cloned(), before);
    assert!(library.find_user(2).unwrap().borrowed.is_empty());
    assert_eq!(library.times_borrowed("A1"), 1);
}

#[test]
fn test_return_keeps_remaining_order() {
    let mut library = library_with(&[
        ("A1", "One", "x"),
        ("B2", "Two", "x"),
        ("C3", "Three", "x"),
        ("D4", "Four", "x"),
    ]);
    library.register_user("Alice", "alice@example.com");
    for isbn in ["A1", "B2", "C3", "D4"] {
        library.issue_book(1, isbn).unwrap();
    }

    library.return_book(1, "A1").unwrap();
    library.return_book(1, "C3").unwrap();
    assert_eq!(
        library.find_user(1).unwrap().borrowed,
        vec!["B2".to_string(), "D4".to_string()]
    );
    assert_loan_invariants(&library);
}

#[test]
fn test_batch_partial_failure() {
    let mut library = library_with(&[("A1", "One", "x"), ("B2", "Two", "x")]);
    library.register_user("Alice", "alice@example.com");
    library.register_user("Bob", "bob@example.com");

    let outcomes = library.issue_batch([
        LoanRequest::new(1, "A1"),
        LoanRequest::new(3, "B2"),
        LoanRequest::new(2, "missing"),
        LoanRequest::new(2, "A1"),
        LoanRequest::new(2, "B2"),
    ]);
    let ok: Vec<bool> = outcomes.iter().map(|o| o.is_success()).collect();
    assert_eq!(ok, vec![true, false, false, false, true]);
    assert!(matches!(outcomes[1].result, Err(AppError::UserNotFound(3))));
    assert!(matches!(outcomes[2].result, Err(AppError::BookNotFound(_))));
    assert!(matches!(outcomes[3].result, Err(AppError::BookUnavailable(_))));

    let outcomes = library.return_batch([
        LoanRequest::new(2, "A1"),
        LoanRequest::new(1, "A1"),
        LoanRequest::new(2, "B2"),
    ]);
    let ok: Vec<bool> = outcomes.iter().map(|o| o.is_success()).collect();
    assert_eq!(ok, vec![false, true, true]);
    assert!(library.currently_borrowed_books().is_empty());
    assert_loan_invariants(&library);
}

#[test]
fn test_reports() {
    let mut library = library_with(&[
        ("A1", "Go Basics", "Ann"),
        ("B2", "Rust", "Bob"),
        ("C3", "Zig", "Cy"),
    ]);
    library.register_user("Alice", "alice@example.com");
    library.register_user("Bob", "bob@example.com");
    library.register_user("Carol", "carol@example.com");

    library.issue_book(1, "C3").unwrap();
    library.return_book(1, "C3").unwrap();
    library.issue_book(3, "C3").unwrap();
    library.issue_book(1, "A1").unwrap();
    library.issue_book(3, "B2").unwrap();

    let ranking = library.most_borrowed_books();
    let rows: Vec<(&str, u32, &str)> = ranking
        .iter()
        .map(|r| (r.isbn.as_str(), r.count, r.title.as_str()))
        .collect();
    assert_eq!(rows, vec![("C3", 2, "Zig"), ("A1", 1, "Go Basics"), ("B2", 1, "Rust")]);

    let active = library.active_users();
    let ids: Vec<u32> = active.iter().map(|a| a.user.id).collect();
    assert_eq!(ids, vec![3, 1]);
    let carol_books: Vec<&str> = active[0].books.iter().map(|b| b.isbn.as_str()).collect();
    assert_eq!(carol_books, vec!["C3", "B2"]);

    assert_eq!(library.currently_borrowed_books().len(), 3);
    assert_loan_invariants(&library);
}

#[test]
fn test_return_unknown_user_or_book() {
    let mut library = library_with(&[("A1", "Go Basics", "Ann")]);
    library.register_user("Alice", "alice@example.com");
    library.issue_book(1, "A1").unwrap();

    assert!(matches!(library.return_book(9, "A1"), Err(AppError::UserNotFound(9))));
    assert!(matches!(library.return_book(1, "Z9"), Err(AppError::BookNotFound(_))));
    assert!(!library.find_book_by_isbn("A1").unwrap().is_available);

    let outcomes = library.return_batch([
        LoanRequest::new(5, "A1"),
        LoanRequest::new(1, "Z9"),
        LoanRequest::new(1, "A1"),
    ]);
    assert!(matches!(outcomes[0].result, Err(AppError::UserNotFound(5))));
    assert!(matches!(outcomes[1].result, Err(AppError::BookNotFound(_))));
    assert!(outcomes[2].is_success());
    assert!(library.find_book_by_isbn("A1").unwrap().is_available);
    assert!(library.find_user(1).unwrap().borrowed.is_empty());
    assert_loan_invariants(&library);
}
