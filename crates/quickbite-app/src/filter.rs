// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;

use crate::record::{Field, Record};
use crate::{ListError, ListResult};

/// Categorical selector; `All` disables the predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    All,
    /// Trimmed, lowercased value to compare against.
    Only(String),
}

impl Selector {
    pub const ALL_LABEL: &'static str = "all";

    /// Empty input and `all` in any case both mean no filtering.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL_LABEL) {
            Self::All
        } else {
            Self::Only(trimmed.to_lowercase())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(value) => value,
        }
    }

    fn matches<R: Record>(&self, field: Option<R::Field>, record: &R) -> bool {
        match (self, field) {
            (Self::All, _) => true,
            (Self::Only(_), None) => false,
            (Self::Only(wanted), Some(field)) => record.get(field).search_text() == *wanted,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Field> SortSpec<F> {
    pub const fn asc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parses `field`, `field:asc` or `field:desc`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (name, direction) = match raw.trim().split_once(':') {
            Some((name, direction)) => (name, direction.trim()),
            None => (raw, "asc"),
        };
        let field = F::parse(name)?;
        if direction.eq_ignore_ascii_case("asc") {
            Some(Self::asc(field))
        } else if direction.eq_ignore_ascii_case("desc") {
            Some(Self::desc(field))
        } else {
            None
        }
    }
}

/// The narrowing criteria a user has picked for one view.
pub struct FilterState<R: Record> {
    query: String,
    category: Selector,
    status_tab: Selector,
    sort: Option<SortSpec<R::Field>>,
}

impl<R: Record> Default for FilterState<R> {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: Selector::All,
            status_tab: Selector::All,
            sort: None,
        }
    }
}

impl<R: Record> Clone for FilterState<R> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            category: self.category.clone(),
            status_tab: self.status_tab.clone(),
            sort: self.sort,
        }
    }
}

impl<R: Record> PartialEq for FilterState<R> {
    fn eq(&self, other: &Self) -> bool {
        self.query == other.query
            && self.category == other.category
            && self.status_tab == other.status_tab
            && self.sort == other.sort
    }
}

impl<R: Record> fmt::Debug for FilterState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterState")
            .field("query", &self.query)
            .field("category", &self.category)
            .field("status_tab", &self.status_tab)
            .field("sort", &self.sort)
            .finish()
    }
}

impl<R: Record> FilterState<R> {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &Selector {
        &self.category
    }

    pub fn status_tab(&self) -> &Selector {
        &self.status_tab
    }

    pub fn sort(&self) -> Option<SortSpec<R::Field>> {
        self.sort
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = text.trim().to_lowercase();
    }

    pub fn set_category(&mut self, value: &str) {
        self.category = Selector::parse(value);
    }

    /// Tab values must come from `R::TABS` when the view declares any.
    pub fn set_status_tab(&mut self, value: &str) -> ListResult<()> {
        let selector = Selector::parse(value);
        if let Selector::Only(tab) = &selector
            && !R::TABS.is_empty()
            && !R::TABS.iter().any(|allowed| *allowed == tab.as_str())
        {
            return Err(ListError::UnknownSelector {
                value: value.trim().to_owned(),
                allowed: R::TABS.to_vec(),
            });
        }
        self.status_tab = selector;
        Ok(())
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec<R::Field>>) {
        self.sort = sort;
    }

    /// AND across predicate kinds; the query matches when any search field
    /// contains it.
    pub fn evaluate(&self, record: &R) -> bool {
        self.matches_query(record)
            && self.category.matches(R::CATEGORY_FIELD, record)
            && self.status_tab.matches(R::TAB_FIELD, record)
    }

    fn matches_query(&self, record: &R) -> bool {
        self.query.is_empty()
            || R::SEARCH_FIELDS
                .iter()
                .any(|field| record.get(*field).search_text().contains(&self.query))
    }
}
