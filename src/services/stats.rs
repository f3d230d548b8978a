//! Statistics service: borrow frequency table and lending reports

use std::collections::HashMap;

use crate::models::{
    book::Book,
    report::{ActiveUser, BorrowRanking},
};

use super::Library;

/// Cumulative successful issues per ISBN. Entries appear on the first issue and are
/// never decremented. Removing a book moves its count to the retired totals, so a
/// later book reusing the ISBN starts a fresh history.
#[derive(Debug, Default)]
pub struct BorrowFrequency {
    counts: HashMap<String, u32>,
    retired: HashMap<String, u32>,
}

impl BorrowFrequency {
    pub fn record(&mut self, isbn: &str) {
        *self.counts.entry(isbn.to_string()).or_insert(0) += 1;
    }

    /// Issues of the book currently catalogued under `isbn`
    pub fn count(&self, isbn: &str) -> u32 {
        self.counts.get(isbn).copied().unwrap_or(0)
    }

    /// Take `isbn` out of the ranking, keeping its issues in the retired totals
    pub fn retire(&mut self, isbn: &str) {
        if let Some(count) = self.counts.remove(isbn) {
            *self.retired.entry(isbn.to_string()).or_insert(0) += count;
        }
    }

    /// Issues of every removed book that was catalogued under `isbn`
    pub fn retired_count(&self, isbn: &str) -> u32 {
        self.retired.get(isbn).copied().unwrap_or(0)
    }

    /// Descending by count, ties broken by ISBN ascending
    pub fn ranking(&self) -> Vec<(&str, u32)> {
        let mut ranking: Vec<(&str, u32)> = self
            .counts
            .iter()
            .map(|(isbn, count)| (isbn.as_str(), *count))
            .collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranking
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Library {
    /// Books currently on loan, in catalog order
    pub fn currently_borrowed_books(&self) -> Vec<&Book> {
        self.repository
            .books_all()
            .into_iter()
            .filter(|book| !book.is_available)
            .collect()
    }

    /// Borrow ranking over the books currently in the catalog
    pub fn most_borrowed_books(&self) -> Vec<BorrowRanking> {
        self.frequency
            .ranking()
            .into_iter()
            .filter_map(|(isbn, count)| {
                let book = self.repository.books_get_by_isbn(isbn).ok()?;
                Some(BorrowRanking {
                    isbn: isbn.to_string(),
                    count,
                    title: book.title.clone(),
                })
            })
            .collect()
    }

    /// Users holding at least one book, most recently registered first, each with
    /// their books in issue order
    pub fn active_users(&self) -> Vec<ActiveUser> {
        self.repository
            .users_all()
            .into_iter()
            .filter(|user| !user.borrowed.is_empty())
            .map(|user| ActiveUser {
                user: user.clone(),
                books: user
                    .borrowed
                    .iter()
                    .filter_map(|isbn| self.repository.books_get_by_isbn(isbn).ok())
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Number of times the book catalogued under `isbn` has been issued
    pub fn times_borrowed(&self, isbn: &str) -> u32 {
        self.frequency.count(isbn)
    }

    /// Issues accumulated by removed books that were catalogued under `isbn`
    pub fn times_borrowed_before_removal(&self, isbn: &str) -> u32 {
        self.frequency.retired_count(isbn)
    }
}
