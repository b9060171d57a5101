// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::record::{Field, Record};
use crate::{FieldValue, ListError, ListResult, ValueKind};

/// Ordered, key-unique snapshot of the records owned by one view.
///
/// Mutations never touch `self`; they return a new snapshot in which every
/// record they did not change is shared with the old one. Cloning a store is
/// a reference-count bump.
pub struct Store<R> {
    records: Arc<Vec<Arc<R>>>,
}

impl<R> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.records.iter().map(|record| &**record))
            .finish()
    }
}

impl<R: PartialEq> PartialEq for Store<R> {
    fn eq(&self, other: &Self) -> bool {
        self.records.len() == other.records.len()
            && self
                .records
                .iter()
                .zip(other.records.iter())
                .all(|(left, right)| **left == **right)
    }
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Self::from_rows(Vec::new())
    }
}

impl<R: Record> Store<R> {
    /// Builds a store from records in caller order. Fails on the first
    /// repeated key or the first record `Record::validate` rejects; nothing
    /// is kept from a failed build.
    pub fn initialize(records: impl IntoIterator<Item = R>) -> ListResult<Self> {
        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        for record in records {
            let key = record.key();
            if !seen.insert(key) {
                return Err(ListError::duplicate(key));
            }
            record
                .validate()
                .map_err(|cause| ListError::rejected(key, &cause))?;
            rows.push(Arc::new(record));
        }
        debug!(view = R::VIEW, records = rows.len(), "store initialized");
        Ok(Self::from_rows(rows))
    }

    fn from_rows(rows: Vec<Arc<R>>) -> Self {
        Self {
            records: Arc::new(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> + '_ {
        self.records.iter().map(|record| &**record)
    }

    pub(crate) fn rows(&self) -> &[Arc<R>] {
        &self.records
    }

    pub fn keys(&self) -> Vec<R::Key> {
        self.iter().map(Record::key).collect()
    }

    pub fn get(&self, key: R::Key) -> Option<&R> {
        self.position(key).map(|index| &*self.records[index])
    }

    pub fn require(&self, key: R::Key) -> ListResult<&R> {
        self.get(key).ok_or_else(|| ListError::not_found(key))
    }

    pub fn contains(&self, key: R::Key) -> bool {
        self.position(key).is_some()
    }

    /// True when both handles point at the same snapshot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }

    /// True when the record for `key` is the same allocation in both stores.
    pub fn shares_record(&self, other: &Self, key: R::Key) -> bool {
        match (self.position(key), other.position(key)) {
            (Some(left), Some(right)) => {
                Arc::ptr_eq(&self.records[left], &other.records[right])
            }
            _ => false,
        }
    }

    pub fn to_vec(&self) -> Vec<R> {
        self.iter().cloned().collect()
    }

    fn position(&self, key: R::Key) -> Option<usize> {
        self.records.iter().position(|record| record.key() == key)
    }

    /// Sets one field on the record matching `key`. An absent key returns
    /// this snapshot unchanged.
    pub fn replace_field(
        &self,
        key: R::Key,
        field: R::Field,
        value: FieldValue,
    ) -> ListResult<Self> {
        if field == R::KEY_FIELD {
            return Err(ListError::ReadOnlyField {
                field: field.name(),
            });
        }
        if value.kind() != field.kind() {
            return Err(ListError::type_mismatch(
                field.name(),
                field.kind(),
                value.kind(),
            ));
        }
        let Some(index) = self.position(key) else {
            debug!(view = R::VIEW, %key, field = field.name(), "replace skipped: key absent");
            return Ok(self.clone());
        };

        let mut updated = R::clone(&self.records[index]);
        updated.set(field, value)?;
        debug!(view = R::VIEW, %key, field = field.name(), "field replaced");
        Ok(self.with_row(index, updated))
    }

    pub fn toggle_field(&self, key: R::Key, field: R::Field) -> ListResult<Self> {
        require_bool(field)?;
        let Some(index) = self.position(key) else {
            debug!(view = R::VIEW, %key, field = field.name(), "toggle skipped: key absent");
            return Ok(self.clone());
        };

        let current = self.records[index].get(field);
        let Some(flag) = current.as_bool() else {
            return Err(ListError::type_mismatch(
                field.name(),
                ValueKind::Bool,
                current.kind(),
            ));
        };
        let mut updated = R::clone(&self.records[index]);
        updated.set(field, FieldValue::Bool(!flag))?;
        debug!(view = R::VIEW, %key, field = field.name(), value = !flag, "field toggled");
        Ok(self.with_row(index, updated))
    }

    pub fn remove(&self, key: R::Key) -> Self {
        let Some(index) = self.position(key) else {
            debug!(view = R::VIEW, %key, "remove skipped: key absent");
            return self.clone();
        };

        let rows = self
            .records
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, record)| Arc::clone(record))
            .collect();
        debug!(view = R::VIEW, %key, "record removed");
        Self::from_rows(rows)
    }

    /// Marks the record matching `key` and clears `field` on every other
    /// record. Records already holding the right value are shared untouched.
    pub fn set_exclusive_flag(&self, field: R::Field, key: R::Key) -> ListResult<Self> {
        require_bool(field)?;
        if !self.contains(key) {
            debug!(
                view = R::VIEW,
                %key,
                field = field.name(),
                "exclusive flag skipped: key absent"
            );
            return Ok(self.clone());
        }

        let mut rows = Vec::with_capacity(self.records.len());
        let mut changed = false;
        for record in self.records.iter() {
            let wanted = record.key() == key;
            if record.get(field).as_bool() == Some(wanted) {
                rows.push(Arc::clone(record));
                continue;
            }
            let mut updated = R::clone(record);
            updated.set(field, FieldValue::Bool(wanted))?;
            rows.push(Arc::new(updated));
            changed = true;
        }
        if !changed {
            debug!(view = R::VIEW, %key, field = field.name(), "exclusive flag already in place");
            return Ok(self.clone());
        }
        debug!(view = R::VIEW, %key, field = field.name(), "exclusive flag moved");
        Ok(Self::from_rows(rows))
    }

    fn with_row(&self, index: usize, record: R) -> Self {
        let mut rows: Vec<Arc<R>> = self.records.iter().map(Arc::clone).collect();
        rows[index] = Arc::new(record);
        Self::from_rows(rows)
    }
}

/// Flag operations write a bool, so the field itself must hold bools.
fn require_bool<F: Field>(field: F) -> ListResult<()> {
    if field.kind() != ValueKind::Bool {
        return Err(ListError::type_mismatch(
            field.name(),
            field.kind(),
            ValueKind::Bool,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Store;
    use crate::{
        FieldValue, ListError, Review, ReviewId, Shift, ShiftField, ShiftId, ValueKind,
        WithdrawMethod, WithdrawMethodField, WithdrawMethodId,
    };
    use time::macros::date;

    fn shift(id: i64, name: &str, status: bool) -> Shift {
        Shift {
            id: ShiftId::new(id),
            name: name.to_owned(),
            zone: "Downtown".to_owned(),
            starts_at: "09:00".to_owned(),
            ends_at: "17:00".to_owned(),
            status,
        }
    }

    fn shifts() -> anyhow::Result<Store<Shift>> {
        Ok(Store::initialize(vec![
            shift(1, "Morning", true),
            shift(2, "Evening", false),
            shift(3, "Night", false),
        ])?)
    }

    fn method(id: i64, default_method: bool) -> WithdrawMethod {
        WithdrawMethod {
            id: WithdrawMethodId::new(id),
            method_name: format!("Method {id}"),
            account_holder: "Riley Ward".to_owned(),
            account_number: format!("****{id:04}"),
            default_method,
            active: true,
        }
    }

    #[test]
    fn initialize_rejects_duplicate_keys() {
        let error = Store::initialize(vec![shift(1, "Morning", true), shift(1, "Again", false)])
            .expect_err("duplicate key");
        assert!(matches!(
            &error,
            ListError::InvalidRecord { key, reason }
                if key == "1" && reason.starts_with("duplicate key")
        ));
    }

    #[test]
    fn initialize_rejects_values_set_would_refuse() {
        let review = |id: i64, rating: i64| Review {
            id: ReviewId::new(id),
            customer_name: "Sam Ortiz".to_owned(),
            item_name: "Meat Pizza".to_owned(),
            rating,
            comment: "Hot and fast".to_owned(),
            visible: true,
            reviewed_on: date!(2026 - 03 - 14),
        };

        let error = Store::initialize(vec![review(1, 4), review(2, 9)])
            .expect_err("rating 9 is out of range");
        assert_eq!(
            error,
            ListError::InvalidRecord {
                key: "2".to_owned(),
                reason: ListError::invalid_value("rating", "9").to_string(),
            }
        );
        assert!(Store::initialize(vec![review(1, 1), review(2, 5)]).is_ok());
    }

    #[test]
    fn exclusive_flag_already_in_place_keeps_the_snapshot() -> anyhow::Result<()> {
        let store = Store::initialize(vec![method(1, true), method(2, false), method(3, false)])?;
        let same =
            store.set_exclusive_flag(WithdrawMethodField::DefaultMethod, WithdrawMethodId::new(1))?;
        assert!(same.ptr_eq(&store));
        Ok(())
    }

    #[test]
    fn replace_field_shares_untouched_records() -> anyhow::Result<()> {
        let store = shifts()?;
        let updated =
            store.replace_field(ShiftId::new(2), ShiftField::Name, FieldValue::text("Late"))?;

        assert_eq!(updated.require(ShiftId::new(2))?.name, "Late");
        assert_eq!(store.require(ShiftId::new(2))?.name, "Evening");
        assert!(updated.shares_record(&store, ShiftId::new(1)));
        assert!(updated.shares_record(&store, ShiftId::new(3)));
        assert!(!updated.shares_record(&store, ShiftId::new(2)));
        Ok(())
    }

    #[test]
    fn replace_field_rejects_key_and_kind_mismatch() -> anyhow::Result<()> {
        let store = shifts()?;
        assert_eq!(
            store
                .replace_field(ShiftId::new(1), ShiftField::Id, FieldValue::Integer(5))
                .expect_err("key is read only"),
            ListError::ReadOnlyField { field: "id" }
        );
        assert_eq!(
            store
                .replace_field(ShiftId::new(1), ShiftField::Status, FieldValue::text("yes"))
                .expect_err("status is bool"),
            ListError::type_mismatch("status", ValueKind::Bool, ValueKind::Text)
        );
        Ok(())
    }

    #[test]
    fn mutations_on_absent_key_keep_the_same_snapshot() -> anyhow::Result<()> {
        let store = shifts()?;
        let missing = ShiftId::new(99);

        assert!(store.toggle_field(missing, ShiftField::Status)?.ptr_eq(&store));
        assert!(
            store
                .replace_field(missing, ShiftField::Name, FieldValue::text("x"))?
                .ptr_eq(&store)
        );
        assert!(store.remove(missing).ptr_eq(&store));
        Ok(())
    }

    #[test]
    fn toggle_twice_restores_original() -> anyhow::Result<()> {
        let store = shifts()?;
        let once = store.toggle_field(ShiftId::new(2), ShiftField::Status)?;
        assert!(once.require(ShiftId::new(2))?.status);
        let twice = once.toggle_field(ShiftId::new(2), ShiftField::Status)?;
        assert_eq!(twice, store);
        Ok(())
    }

    #[test]
    fn toggle_rejects_non_boolean_field() -> anyhow::Result<()> {
        let store = shifts()?;
        let error = store
            .toggle_field(ShiftId::new(1), ShiftField::Name)
            .expect_err("name is text");
        assert_eq!(
            error,
            ListError::type_mismatch("name", ValueKind::Text, ValueKind::Bool)
        );
        Ok(())
    }

    #[test]
    fn remove_preserves_order_of_the_rest() -> anyhow::Result<()> {
        let store = shifts()?;
        let removed = store.remove(ShiftId::new(2));
        assert_eq!(removed.keys(), vec![ShiftId::new(1), ShiftId::new(3)]);
        assert_eq!(store.len(), 3);
        Ok(())
    }

    #[test]
    fn require_reports_missing_key() -> anyhow::Result<()> {
        let store = shifts()?;
        assert_eq!(
            store.require(ShiftId::new(42)).expect_err("missing"),
            ListError::NotFound {
                key: "42".to_owned()
            }
        );
        Ok(())
    }

    #[test]
    fn exclusive_flag_leaves_exactly_one_default() -> anyhow::Result<()> {
        let store = Store::initialize(vec![method(1, true), method(2, false), method(3, false)])?;
        let updated =
            store.set_exclusive_flag(WithdrawMethodField::DefaultMethod, WithdrawMethodId::new(3))?;

        let defaults: Vec<_> = updated
            .iter()
            .filter(|method| method.default_method)
            .map(|method| method.id)
            .collect();
        assert_eq!(defaults, vec![WithdrawMethodId::new(3)]);
        assert!(updated.shares_record(&store, WithdrawMethodId::new(2)));
        assert!(!updated.shares_record(&store, WithdrawMethodId::new(1)));
        Ok(())
    }

    #[test]
    fn exclusive_flag_requires_boolean_field() -> anyhow::Result<()> {
        let store = Store::initialize(vec![method(1, true)])?;
        assert!(
            store
                .set_exclusive_flag(WithdrawMethodField::MethodName, WithdrawMethodId::new(1))
                .is_err()
        );
        Ok(())
    }
}
