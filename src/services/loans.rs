//! Loan management service
//!
//! Issue and return requests go through FIFO queues. The single-request entry points
//! enqueue and then drain immediately, so between public calls both queues are empty
//! unless a caller staged requests with `submit_*` and has not processed them yet.
//! Every drained request is handled independently: a failure is logged, recorded in
//! its [`RequestOutcome`] and processing moves on to the next one.

use std::collections::VecDeque;

use crate::{
    error::{AppError, AppResult},
    models::loan::{LoanKind, LoanRequest, RequestOutcome},
};

use super::Library;

/// FIFO buffer of pending loan requests
#[derive(Debug, Default)]
pub struct RequestQueue {
    pending: VecDeque<LoanRequest>,
}

impl RequestQueue {
    pub fn push(&mut self, request: LoanRequest) {
        self.pending.push_back(request);
    }

    pub fn pop(&mut self) -> Option<LoanRequest> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Library {
    /// Issue a book to a user.
    ///
    /// Drains the whole issue queue, so requests staged earlier with `submit_issue`
    /// are processed first. Only this request's result is returned; failures of the
    /// staged ones are logged. Use `process_issue_queue` to get every outcome.
    pub fn issue_book(&mut self, user_id: u32, isbn: &str) -> AppResult<()> {
        self.submit_issue(LoanRequest::new(user_id, isbn));
        last_result(self.process_issue_queue())
    }

    /// Return a book borrowed by a user. Drains staged returns first, like `issue_book`.
    pub fn return_book(&mut self, user_id: u32, isbn: &str) -> AppResult<()> {
        self.submit_return(LoanRequest::new(user_id, isbn));
        last_result(self.process_return_queue())
    }

    /// Enqueue several issue requests and drain them in submission order
    pub fn issue_batch<I>(&mut self, requests: I) -> Vec<RequestOutcome>
    where
        I: IntoIterator<Item = LoanRequest>,
    {
        for request in requests {
            self.submit_issue(request);
        }
        self.process_issue_queue()
    }

    /// Enqueue several return requests and drain them in submission order
    pub fn return_batch<I>(&mut self, requests: I) -> Vec<RequestOutcome>
    where
        I: IntoIterator<Item = LoanRequest>,
    {
        for request in requests {
            self.submit_return(request);
        }
        self.process_return_queue()
    }

    /// Stage an issue request without processing it
    pub fn submit_issue(&mut self, request: LoanRequest) {
        self.issue_queue.push(request);
        tracing::debug!(pending = self.issue_queue.len(), "issue request queued");
    }

    /// Stage a return request without processing it
    pub fn submit_return(&mut self, request: LoanRequest) {
        self.return_queue.push(request);
        tracing::debug!(pending = self.return_queue.len(), "return request queued");
    }

    pub fn pending_issues(&self) -> usize {
        self.issue_queue.len()
    }

    pub fn pending_returns(&self) -> usize {
        self.return_queue.len()
    }

    /// Drain the issue queue, one outcome per request in FIFO order
    pub fn process_issue_queue(&mut self) -> Vec<RequestOutcome> {
        tracing::debug!(pending = self.issue_queue.len(), "draining issue queue");
        let mut outcomes = Vec::with_capacity(self.issue_queue.len());
        while let Some(request) = self.issue_queue.pop() {
            let result = self.issue_one(&request);
            outcomes.push(outcome(LoanKind::Issue, request, result));
        }
        outcomes
    }

    /// Drain the return queue, one outcome per request in FIFO order
    pub fn process_return_queue(&mut self) -> Vec<RequestOutcome> {
        tracing::debug!(pending = self.return_queue.len(), "draining return queue");
        let mut outcomes = Vec::with_capacity(self.return_queue.len());
        while let Some(request) = self.return_queue.pop() {
            let result = self.return_one(&request);
            outcomes.push(outcome(LoanKind::Return, request, result));
        }
        outcomes
    }

    fn issue_one(&mut self, request: &LoanRequest) -> AppResult<()> {
        let (user, book) = self
            .repository
            .loan_parties_mut(request.user_id, &request.isbn)?;

        // A user re-requesting a book they already hold lands here too.
        if !book.is_available {
            return Err(AppError::BookUnavailable(request.isbn.clone()));
        }

        book.is_available = false;
        book.borrow_count += 1;
        user.borrowed.push(request.isbn.clone());
        tracing::info!(
            user_id = user.id,
            isbn = %book.isbn,
            "Book '{}' issued to {}",
            book.title,
            user.name
        );

        self.frequency.record(&request.isbn);
        Ok(())
    }

    fn return_one(&mut self, request: &LoanRequest) -> AppResult<()> {
        let (user, book) = self
            .repository
            .loan_parties_mut(request.user_id, &request.isbn)?;

        if !user.take_borrowed(&request.isbn) {
            return Err(AppError::NotBorrowedByUser {
                user_id: request.user_id,
                isbn: request.isbn.clone(),
            });
        }

        book.is_available = true;
        tracing::info!(
            user_id = user.id,
            isbn = %book.isbn,
            "Book '{}' returned by {}",
            book.title,
            user.name
        );
        Ok(())
    }
}

fn outcome(kind: LoanKind, request: LoanRequest, result: AppResult<()>) -> RequestOutcome {
    if let Err(ref e) = result {
        tracing::warn!(
            kind = ?kind,
            user_id = request.user_id,
            isbn = %request.isbn,
            "request failed: {}",
            e
        );
    }
    RequestOutcome {
        kind,
        request,
        result,
    }
}

/// The caller's request was enqueued last, so its outcome is the last one drained.
fn last_result(mut outcomes: Vec<RequestOutcome>) -> AppResult<()> {
    match outcomes.pop() {
        Some(outcome) => outcome.result,
        None => Ok(()),
    }
}
