//! Composable list filters and pagination for the tickets table

use crate::core::{Priority, Status};
use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite};

/// Number of tickets on one list page
pub const PER_PAGE: u32 = 10;

/// A single condition on the tickets table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring of the title or the description
    ///
    /// Matched against the `*_search` columns, which hold [`search_key`]
    /// of each field.
    Search(String),
    Status(Status),
    Priority(Priority),
}

impl Predicate {
    /// Append this condition, with its values bound, to a query
    pub fn push_to(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        match self {
            Self::Search(term) => {
                let pattern = like_pattern(&search_key(term));
                qb.push("(title_search LIKE ")
                    .push_bind(pattern.clone())
                    .push(" ESCAPE '\\' OR description_search LIKE ")
                    .push_bind(pattern)
                    .push(" ESCAPE '\\')");
            },
            Self::Status(status) => {
                qb.push("status = ").push_bind(*status);
            },
            Self::Priority(priority) => {
                qb.push("priority = ").push_bind(*priority);
            },
        }
    }
}

/// Conjunction of predicates over the tickets table
///
/// Every builder method is a no-op for absent or blank input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    predicates: Vec<Predicate>,
}

impl TicketFilter {
    /// A filter matching every ticket
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to tickets whose title or description contains `term`
    #[must_use]
    pub fn search(mut self, term: Option<&str>) -> Self {
        if let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) {
            self.predicates.push(Predicate::Search(term.to_string()));
        }
        self
    }

    /// Restrict to one status
    #[must_use]
    pub fn status(mut self, status: Option<Status>) -> Self {
        if let Some(status) = status {
            self.predicates.push(Predicate::Status(status));
        }
        self
    }

    /// Restrict to one priority
    #[must_use]
    pub fn priority(mut self, priority: Option<Priority>) -> Self {
        if let Some(priority) = priority {
            self.predicates.push(Predicate::Priority(priority));
        }
        self
    }

    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Append a `WHERE` clause for all predicates, if there are any
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_to(qb);
        }
    }
}

/// Unicode lowercase fold stored alongside searchable text
#[must_use]
pub fn search_key(text: &str) -> String {
    text.to_lowercase()
}

/// Escape LIKE wildcards so the term matches literally
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// A 1-based page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Request a page; zero resolves to the first page
    #[must_use]
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: PER_PAGE,
        }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    #[must_use]
    pub const fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// One page of results plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub last_page: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        let per_page = u64::from(request.per_page());
        let last_page = u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX).max(1);
        Self {
            items,
            total,
            page: request.page(),
            per_page: request.per_page(),
            last_page,
        }
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.last_page
    }
}
