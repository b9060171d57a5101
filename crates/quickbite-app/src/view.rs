// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use tracing::debug;

use crate::record::{Field, Record};
use crate::{
    DerivedCache, DerivedView, FieldValue, FilterState, ListResult, RecordProvider, Selector,
    SortSpec, Store,
};

/// User intents a presentation surface sends to a list view.
#[derive(Debug, Clone)]
pub enum ViewIntent<R: Record> {
    QueryChanged(String),
    CategorySelected(String),
    TabSelected(String),
    SortRequested(Option<SortSpec<R::Field>>),
    FiltersCleared,
    ToggleRequested {
        key: R::Key,
        field: R::Field,
    },
    FieldSetRequested {
        key: R::Key,
        field: R::Field,
        value: FieldValue,
    },
    /// Sent only after the user said yes; the view removes unconditionally.
    RemoveConfirmed(R::Key),
    ExclusiveFlagRequested {
        field: R::Field,
        key: R::Key,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent<K> {
    QueryChanged(String),
    CategoryChanged(Selector),
    TabChanged(Selector),
    SortChanged,
    FiltersReset,
    RecordUpdated(K),
    RecordRemoved(K),
    ExclusiveFlagMoved { field: &'static str, key: K },
    /// The intent named a key the store no longer holds.
    NoEffect(K),
}

/// One page's list: its store, the user's filters, and the memoized
/// derived view.
#[derive(Debug)]
pub struct ListView<R: Record> {
    store: Store<R>,
    filters: FilterState<R>,
    cache: DerivedCache<R>,
}

impl<R: Record> ListView<R> {
    pub fn new(store: Store<R>) -> Self {
        Self {
            store,
            filters: FilterState::default(),
            cache: DerivedCache::default(),
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = R>) -> ListResult<Self> {
        Store::initialize(records).map(Self::new)
    }

    pub fn load<P: RecordProvider<R> + ?Sized>(provider: &P) -> Result<Self> {
        let records = provider.load()?;
        let view = Self::from_records(records)
            .with_context(|| format!("seed {} view from {}", R::VIEW, provider.describe()))?;
        Ok(view)
    }

    pub fn store(&self) -> &Store<R> {
        &self.store
    }

    pub fn filter_state(&self) -> &FilterState<R> {
        &self.filters
    }

    pub fn derived_view(&mut self) -> &DerivedView<R> {
        self.cache.view(&self.store, &self.filters)
    }

    pub fn derived_count(&mut self) -> usize {
        self.derived_view().count()
    }

    /// Applies one intent. On error neither the store nor the filters change.
    pub fn dispatch(&mut self, intent: ViewIntent<R>) -> ListResult<Vec<ViewEvent<R::Key>>> {
        match intent {
            ViewIntent::QueryChanged(text) => {
                self.filters.set_query(&text);
                Ok(vec![ViewEvent::QueryChanged(self.filters.query().to_owned())])
            }
            ViewIntent::CategorySelected(value) => {
                self.filters.set_category(&value);
                Ok(vec![ViewEvent::CategoryChanged(
                    self.filters.category().clone(),
                )])
            }
            ViewIntent::TabSelected(value) => {
                self.filters.set_status_tab(&value)?;
                Ok(vec![ViewEvent::TabChanged(self.filters.status_tab().clone())])
            }
            ViewIntent::SortRequested(sort) => {
                self.filters.set_sort(sort);
                Ok(vec![ViewEvent::SortChanged])
            }
            ViewIntent::FiltersCleared => {
                self.filters = FilterState::default();
                Ok(vec![ViewEvent::FiltersReset])
            }
            ViewIntent::ToggleRequested { key, field } => {
                let next = self.store.toggle_field(key, field)?;
                Ok(self.commit(next, key, ViewEvent::RecordUpdated(key)))
            }
            ViewIntent::FieldSetRequested { key, field, value } => {
                let next = self.store.replace_field(key, field, value)?;
                Ok(self.commit(next, key, ViewEvent::RecordUpdated(key)))
            }
            ViewIntent::RemoveConfirmed(key) => {
                let next = self.store.remove(key);
                Ok(self.commit(next, key, ViewEvent::RecordRemoved(key)))
            }
            ViewIntent::ExclusiveFlagRequested { field, key } => {
                let next = self.store.set_exclusive_flag(field, key)?;
                let event = ViewEvent::ExclusiveFlagMoved {
                    field: field.name(),
                    key,
                };
                Ok(self.commit(next, key, event))
            }
        }
    }

    fn commit(
        &mut self,
        next: Store<R>,
        key: R::Key,
        event: ViewEvent<R::Key>,
    ) -> Vec<ViewEvent<R::Key>> {
        if next.ptr_eq(&self.store) {
            debug!(view = R::VIEW, %key, "intent had no effect");
            return vec![ViewEvent::NoEffect(key)];
        }
        self.store = next;
        vec![event]
    }
}

#[cfg(test)]
mod tests {
    use super::{ListView, ViewEvent, ViewIntent};
    use crate::{
        FieldValue, ListError, Selector, Shift, ShiftField, ShiftId, SortSpec, WithdrawMethod,
        WithdrawMethodField, WithdrawMethodId,
    };

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

    fn shifts_view() -> anyhow::Result<ListView<Shift>> {
        Ok(ListView::from_records(vec![
            shift(1, "Morning", true),
            shift(2, "Evening", false),
        ])?)
    }

    #[test]
    fn query_narrows_to_matching_shift() -> anyhow::Result<()> {
        let mut view = shifts_view()?;
        let events = view.dispatch(ViewIntent::QueryChanged("even".to_owned()))?;
        assert_eq!(events, vec![ViewEvent::QueryChanged("even".to_owned())]);
        assert_eq!(view.derived_view().keys(), vec![ShiftId::new(2)]);
        assert_eq!(view.derived_count(), 1);
        Ok(())
    }

    #[test]
    fn toggle_then_clear_filters_shows_both_in_order() -> anyhow::Result<()> {
        let mut view = shifts_view()?;
        view.dispatch(ViewIntent::QueryChanged("even".to_owned()))?;

        let events = view.dispatch(ViewIntent::ToggleRequested {
            key: ShiftId::new(2),
            field: ShiftField::Status,
        })?;
        assert_eq!(events, vec![ViewEvent::RecordUpdated(ShiftId::new(2))]);
        assert_eq!(view.filter_state().query(), "even");

        view.dispatch(ViewIntent::FiltersCleared)?;
        let records = view.derived_view().to_vec();
        assert_eq!(records, vec![shift(1, "Morning", true), shift(2, "Evening", true)]);
        Ok(())
    }

    #[test]
    fn failed_intent_leaves_view_untouched() -> anyhow::Result<()> {
        let mut view = shifts_view()?;
        let before = view.store().clone();
        let error = view
            .dispatch(ViewIntent::ToggleRequested {
                key: ShiftId::new(1),
                field: ShiftField::Name,
            })
            .expect_err("name is not boolean");
        assert!(matches!(error, ListError::TypeMismatch { .. }));
        assert!(view.store().ptr_eq(&before));
        Ok(())
    }

    #[test]
    fn missing_key_reports_no_effect() -> anyhow::Result<()> {
        let mut view = shifts_view()?;
        let events = view.dispatch(ViewIntent::RemoveConfirmed(ShiftId::new(7)))?;
        assert_eq!(events, vec![ViewEvent::NoEffect(ShiftId::new(7))]);
        assert_eq!(view.store().len(), 2);

        let events = view.dispatch(ViewIntent::FieldSetRequested {
            key: ShiftId::new(7),
            field: ShiftField::Name,
            value: FieldValue::text("Graveyard"),
        })?;
        assert_eq!(events, vec![ViewEvent::NoEffect(ShiftId::new(7))]);
        Ok(())
    }

    #[test]
    fn remove_updates_derived_count() -> anyhow::Result<()> {
        let mut view = shifts_view()?;
        assert_eq!(view.derived_count(), 2);
        let events = view.dispatch(ViewIntent::RemoveConfirmed(ShiftId::new(1)))?;
        assert_eq!(events, vec![ViewEvent::RecordRemoved(ShiftId::new(1))]);
        assert_eq!(view.derived_count(), 1);
        Ok(())
    }

    #[test]
    fn filter_intents_never_touch_the_store() -> anyhow::Result<()> {
        let mut view = shifts_view()?;
        let before = view.store().clone();
        view.dispatch(ViewIntent::QueryChanged("morning".to_owned()))?;
        view.dispatch(ViewIntent::CategorySelected("Downtown".to_owned()))?;
        view.dispatch(ViewIntent::SortRequested(Some(SortSpec::desc(ShiftField::Name))))?;
        assert!(view.store().ptr_eq(&before));
        assert_eq!(
            view.filter_state().category(),
            &Selector::Only("downtown".to_owned())
        );
        Ok(())
    }

    #[test]
    fn exclusive_flag_moves_default_method() -> anyhow::Result<()> {
        let method = |id: i64, default_method: bool| WithdrawMethod {
            id: WithdrawMethodId::new(id),
            method_name: format!("Bank {id}"),
            account_holder: "Quinn Price".to_owned(),
            account_number: format!("****{id:04}"),
            default_method,
            active: true,
        };
        let mut view = ListView::from_records(vec![method(1, true), method(2, false)])?;
        let events = view.dispatch(ViewIntent::ExclusiveFlagRequested {
            field: WithdrawMethodField::DefaultMethod,
            key: WithdrawMethodId::new(2),
        })?;
        assert_eq!(
            events,
            vec![ViewEvent::ExclusiveFlagMoved {
                field: "default_method",
                key: WithdrawMethodId::new(2),
            }]
        );
        let defaults: Vec<_> = view
            .store()
            .iter()
            .filter(|method| method.default_method)
            .map(|method| method.id)
            .collect();
        assert_eq!(defaults, vec![WithdrawMethodId::new(2)]);

        let before = view.store().clone();
        let repeated = view.dispatch(ViewIntent::ExclusiveFlagRequested {
            field: WithdrawMethodField::DefaultMethod,
            key: WithdrawMethodId::new(2),
        })?;
        assert_eq!(repeated, vec![ViewEvent::NoEffect(WithdrawMethodId::new(2))]);
        assert!(view.store().ptr_eq(&before));
        Ok(())
    }
}
