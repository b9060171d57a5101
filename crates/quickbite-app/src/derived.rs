// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;
use std::sync::Arc;
use tracing::trace;

use crate::record::Record;
use crate::{FilterState, SortDirection, Store};

/// Records currently visible in a view, in store order unless the filter
/// state asks for a sort.
pub struct DerivedView<R> {
    records: Vec<Arc<R>>,
}

impl<R> Clone for DerivedView<R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

impl<R: PartialEq> PartialEq for DerivedView<R> {
    fn eq(&self, other: &Self) -> bool {
        self.records.len() == other.records.len()
            && self
                .records
                .iter()
                .zip(other.records.iter())
                .all(|(left, right)| **left == **right)
    }
}

impl<R: fmt::Debug> fmt::Debug for DerivedView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.records.iter().map(|record| &**record))
            .finish()
    }
}

impl<R: Record> DerivedView<R> {
    pub fn records(&self) -> impl Iterator<Item = &R> + '_ {
        self.records.iter().map(|record| &**record)
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> Vec<R::Key> {
        self.records().map(Record::key).collect()
    }

    pub fn to_vec(&self) -> Vec<R> {
        self.records().cloned().collect()
    }
}

/// Computes the visible subset of `store`. Pure: the same inputs always give
/// the same records in the same order.
pub fn derive<R: Record>(store: &Store<R>, filters: &FilterState<R>) -> DerivedView<R> {
    let mut records: Vec<Arc<R>> = store
        .rows()
        .iter()
        .filter(|record| filters.evaluate(record))
        .cloned()
        .collect();

    if let Some(sort) = filters.sort() {
        records.sort_by(|left, right| {
            let ordering = left.get(sort.field).cmp_value(&right.get(sort.field));
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    DerivedView { records }
}

#[derive(Debug)]
struct CacheEntry<R: Record> {
    store: Store<R>,
    filters: FilterState<R>,
    view: DerivedView<R>,
}

impl<R: Record> CacheEntry<R> {
    fn is_for(&self, store: &Store<R>, filters: &FilterState<R>) -> bool {
        self.store.ptr_eq(store) && self.filters == *filters
    }
}

/// Single-slot memo over [`derive`], keyed on store snapshot identity and
/// filter state value.
#[derive(Debug)]
pub struct DerivedCache<R: Record> {
    last: Option<CacheEntry<R>>,
    recomputations: usize,
}

impl<R: Record> Default for DerivedCache<R> {
    fn default() -> Self {
        Self {
            last: None,
            recomputations: 0,
        }
    }
}

impl<R: Record> DerivedCache<R> {
    pub fn view(&mut self, store: &Store<R>, filters: &FilterState<R>) -> &DerivedView<R> {
        let cached = self
            .last
            .take()
            .filter(|entry| entry.is_for(store, filters));
        let entry = match cached {
            Some(entry) => {
                trace!(view = R::VIEW, "derived view cache hit");
                entry
            }
            None => {
                self.recomputations += 1;
                let view = derive(store, filters);
                trace!(
                    view = R::VIEW,
                    visible = view.count(),
                    total = store.len(),
                    "derived view recomputed"
                );
                CacheEntry {
                    store: store.clone(),
                    filters: filters.clone(),
                    view,
                }
            }
        };
        &self.last.insert(entry).view
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{DerivedCache, derive};
    use crate::{FilterState, Shift, ShiftField, ShiftId, SortSpec, Store};

    fn shift(id: i64, name: &str, zone: &str, status: bool) -> Shift {
        Shift {
            id: ShiftId::new(id),
            name: name.to_owned(),
            zone: zone.to_owned(),
            starts_at: "09:00".to_owned(),
            ends_at: "17:00".to_owned(),
            status,
        }
    }

    fn store() -> anyhow::Result<Store<Shift>> {
        Ok(Store::initialize(vec![
            shift(1, "Morning", "Harbor", true),
            shift(2, "Evening", "Downtown", false),
            shift(3, "Late Evening", "Airport", true),
        ])?)
    }

    #[test]
    fn default_filters_return_everything_in_order() -> anyhow::Result<()> {
        let store = store()?;
        let view = derive(&store, &FilterState::default());
        assert_eq!(view.keys(), store.keys());
        assert_eq!(view.count(), 3);
        Ok(())
    }

    #[test]
    fn zero_matches_is_an_empty_view() -> anyhow::Result<()> {
        let mut filters = FilterState::default();
        filters.set_query("brunch");
        let view = derive(&store()?, &filters);
        assert!(view.is_empty());
        assert_eq!(view.count(), 0);

        let empty = derive(&Store::<Shift>::default(), &FilterState::default());
        assert!(empty.is_empty());
        Ok(())
    }

    #[test]
    fn explicit_sort_is_stable() -> anyhow::Result<()> {
        let store = store()?;
        let mut filters = FilterState::default();
        filters.set_sort(Some(SortSpec::desc(ShiftField::Status)));
        let view = derive(&store, &filters);
        assert_eq!(
            view.keys(),
            vec![ShiftId::new(1), ShiftId::new(3), ShiftId::new(2)]
        );

        filters.set_sort(Some(SortSpec::asc(ShiftField::Name)));
        let view = derive(&store, &filters);
        assert_eq!(
            view.keys(),
            vec![ShiftId::new(2), ShiftId::new(3), ShiftId::new(1)]
        );
        Ok(())
    }

    #[test]
    fn cache_recomputes_only_on_store_or_filter_change() -> anyhow::Result<()> {
        let store = store()?;
        let mut filters = FilterState::default();
        let mut cache = DerivedCache::default();

        let first = cache.view(&store, &filters).clone();
        let second = cache.view(&store.clone(), &filters).clone();
        assert_eq!(first, second);
        assert_eq!(cache.recomputations(), 1);

        filters.set_query("evening");
        assert_eq!(cache.view(&store, &filters).count(), 2);
        assert_eq!(cache.recomputations(), 2);

        let toggled = store.toggle_field(ShiftId::new(2), ShiftField::Status)?;
        assert_eq!(cache.view(&toggled, &filters).count(), 2);
        assert_eq!(cache.recomputations(), 3);

        cache.clear();
        cache.view(&toggled, &filters);
        assert_eq!(cache.recomputations(), 4);
        Ok(())
    }
}
