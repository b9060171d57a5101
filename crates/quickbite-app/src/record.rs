// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use time::Date;

use crate::{FieldValue, ListError, ListResult, ValueKind};

/// Named column of one record type.
pub trait Field: Copy + Eq + Hash + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    fn kind(self) -> ValueKind;

    fn parse(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(wanted))
    }
}

/// A typed row owned by one list view.
///
/// The associated constants describe how the generic filter predicates read
/// the record: which fields the free-text query scans and which single field
/// each categorical selector compares against.
pub trait Record: Clone + fmt::Debug {
    type Key: Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr;
    type Field: Field;

    /// Short view name, also used as the fixture file stem.
    const VIEW: &'static str;
    const KEY_FIELD: Self::Field;
    const SEARCH_FIELDS: &'static [Self::Field];
    const CATEGORY_FIELD: Option<Self::Field> = None;
    const TAB_FIELD: Option<Self::Field> = None;
    /// Values the tab selector may take; empty accepts any value.
    const TABS: &'static [&'static str] = &[];

    fn key(&self) -> Self::Key;

    fn get(&self, field: Self::Field) -> FieldValue;

    /// Writes one field. The record is left untouched when this fails.
    fn set(&mut self, field: Self::Field, value: FieldValue) -> ListResult<()>;

    /// Checks every stored field against the rules `set` enforces, so a
    /// record built outside `set` (a decoded fixture) holds only values a
    /// mutation could have written.
    fn validate(&self) -> ListResult<()> {
        let mut scratch = self.clone();
        for &field in <Self::Field as Field>::ALL {
            if field == Self::KEY_FIELD {
                continue;
            }
            scratch.set(field, self.get(field))?;
        }
        Ok(())
    }
}

pub(crate) fn read_only<F: Field>(field: F) -> ListError {
    ListError::ReadOnlyField {
        field: field.name(),
    }
}

pub(crate) fn text<F: Field>(field: F, value: FieldValue) -> ListResult<String> {
    match value {
        FieldValue::Text(value) => Ok(value),
        other => Err(ListError::type_mismatch(
            field.name(),
            ValueKind::Text,
            other.kind(),
        )),
    }
}

pub(crate) fn integer<F: Field>(field: F, value: FieldValue) -> ListResult<i64> {
    match value {
        FieldValue::Integer(value) => Ok(value),
        other => Err(ListError::type_mismatch(
            field.name(),
            ValueKind::Integer,
            other.kind(),
        )),
    }
}

pub(crate) fn boolean<F: Field>(field: F, value: FieldValue) -> ListResult<bool> {
    match value {
        FieldValue::Bool(value) => Ok(value),
        other => Err(ListError::type_mismatch(
            field.name(),
            ValueKind::Bool,
            other.kind(),
        )),
    }
}

pub(crate) fn date<F: Field>(field: F, value: FieldValue) -> ListResult<Date> {
    match value {
        FieldValue::Date(value) => Ok(value),
        other => Err(ListError::type_mismatch(
            field.name(),
            ValueKind::Date,
            other.kind(),
        )),
    }
}

/// Text value constrained to an enumerated set, parsed with `parse`.
pub(crate) fn choice<F: Field, T>(
    field: F,
    value: FieldValue,
    parse: impl FnOnce(&str) -> Option<T>,
) -> ListResult<T> {
    let raw = text(field, value)?;
    parse(raw.trim()).ok_or_else(|| ListError::invalid_value(field.name(), raw))
}
