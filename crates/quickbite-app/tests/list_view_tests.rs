// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use quickbite_app::{
    FieldValue, FilterState, JsonFileProvider, ListError, ListView, Order, OrderField, OrderId,
    Record, Review, Shift, ShiftField, ShiftId, SortSpec, Store, ViewEvent, ViewIntent,
    WithdrawMethod, WithdrawMethodField, derive,
};
use quickbite_testkit::{DeliveryFaker, temp_data_dir, write_json_fixture};

const SEEDS: [u64; 6] = [1, 2, 3, 17, 42, 1_337];

fn is_subsequence<K: PartialEq>(needle: &[K], haystack: &[K]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|key| rest.any(|candidate| candidate == key))
}

fn random_filters(faker: &mut DeliveryFaker) -> Result<FilterState<Order>> {
    let mut filters = FilterState::default();
    filters.set_query(&faker.query());
    if faker.bool() {
        filters.set_category(["card", "cash", "wallet", "all"][faker.int_n(4)]);
    }
    if faker.bool() {
        let tab = Order::TABS[faker.int_n(Order::TABS.len())];
        filters.set_status_tab(tab)?;
    }
    Ok(filters)
}

#[test]
fn derivation_is_pure() -> Result<()> {
    for seed in SEEDS {
        let mut faker = DeliveryFaker::new(seed);
        let store = Store::initialize(faker.orders(30))?;
        let filters = random_filters(&mut faker)?;
        assert_eq!(derive(&store, &filters), derive(&store, &filters), "seed {seed}");
    }
    Ok(())
}

#[test]
fn default_filters_are_identity() -> Result<()> {
    for seed in SEEDS {
        let mut faker = DeliveryFaker::new(seed);
        let store = Store::initialize(faker.menu(25))?;
        let view = derive(&store, &FilterState::default());
        assert_eq!(view.to_vec(), store.to_vec(), "seed {seed}");
    }
    Ok(())
}

#[test]
fn query_case_does_not_change_the_view() -> Result<()> {
    for seed in SEEDS {
        let mut faker = DeliveryFaker::new(seed);
        let store = Store::initialize(faker.orders(30))?;
        let mut queries = vec![faker.query(), faker.query()];
        if let Some(first) = store.iter().next() {
            queries.push(first.restaurant_name.clone());
        }
        for query in queries {
            let mut upper = FilterState::<Order>::default();
            upper.set_query(&query.to_uppercase());
            let mut lower = FilterState::<Order>::default();
            lower.set_query(&query.to_lowercase());
            assert_eq!(
                derive(&store, &upper),
                derive(&store, &lower),
                "seed {seed}, query {query:?}"
            );
        }
    }
    Ok(())
}

#[test]
fn derived_view_is_ordered_subset_of_store() -> Result<()> {
    for seed in SEEDS {
        let mut faker = DeliveryFaker::new(seed);
        let store = Store::initialize(faker.orders(40))?;
        for _ in 0..10 {
            let filters = random_filters(&mut faker)?;
            let view = derive(&store, &filters);
            assert!(view.count() <= store.len());
            assert!(is_subsequence(&view.keys(), &store.keys()), "seed {seed}");
            for order in view.records() {
                assert!(filters.evaluate(order));
            }
        }
    }
    Ok(())
}

#[test]
fn adding_a_predicate_never_grows_the_view() -> Result<()> {
    for seed in SEEDS {
        let mut faker = DeliveryFaker::new(seed);
        let store = Store::initialize(faker.orders(40))?;
        let mut filters = FilterState::default();
        let unfiltered = derive(&store, &filters).count();

        filters.set_query(&faker.query());
        let with_query = derive(&store, &filters).count();
        filters.set_category("card");
        let with_category = derive(&store, &filters).count();
        filters.set_status_tab("delivered")?;
        let with_tab = derive(&store, &filters).count();

        assert!(unfiltered >= with_query, "seed {seed}");
        assert!(with_query >= with_category, "seed {seed}");
        assert!(with_category >= with_tab, "seed {seed}");
    }
    Ok(())
}

#[test]
fn mutation_touches_only_the_target_record() -> Result<()> {
    for seed in SEEDS {
        let mut faker = DeliveryFaker::new(seed);
        let store = Store::initialize(faker.shifts(20))?;
        let target = ShiftId::new(faker.int_n(20) as i64 + 1);

        let toggled = store.toggle_field(target, ShiftField::Status)?;
        let renamed = store.replace_field(target, ShiftField::Zone, FieldValue::text("Harbor"))?;
        for next in [&toggled, &renamed] {
            assert_eq!(next.keys(), store.keys());
            for key in store.keys().into_iter().filter(|key| *key != target) {
                assert!(next.shares_record(&store, key), "seed {seed} key {key}");
            }
        }

        let before = store.require(target)?;
        let after = toggled.require(target)?;
        assert_eq!(after.status, !before.status);
        assert_eq!(after.name, before.name);
    }
    Ok(())
}

#[test]
fn removal_drops_exactly_one_record() -> Result<()> {
    for seed in SEEDS {
        let mut faker = DeliveryFaker::new(seed);
        let store = Store::initialize(faker.orders(15))?;
        let target = OrderId::new(faker.int_n(15) as i64 + 1);

        let next = store.remove(target);
        assert_eq!(next.len(), store.len() - 1);
        assert!(!next.contains(target));
        assert!(store.contains(target));

        let mut filters = FilterState::default();
        filters.set_query(&target.to_string());
        assert!(!derive(&next, &filters).keys().contains(&target));
    }
    Ok(())
}

#[test]
fn exclusive_flag_leaves_exactly_one_set() -> Result<()> {
    for seed in SEEDS {
        let mut faker = DeliveryFaker::new(seed);
        let methods = faker.withdraw_methods(8);
        let store = Store::initialize(methods)?;
        for key in store.keys() {
            let next = store.set_exclusive_flag(WithdrawMethodField::DefaultMethod, key)?;
            let defaults: Vec<_> = next
                .iter()
                .filter(|method: &&WithdrawMethod| method.default_method)
                .map(Record::key)
                .collect();
            assert_eq!(defaults, vec![key], "seed {seed}");
        }
    }
    Ok(())
}

#[test]
fn filter_changes_never_mutate_the_store() -> Result<()> {
    let mut faker = DeliveryFaker::new(99);
    let mut view = ListView::from_records(faker.orders(20))?;
    let before = view.store().clone();
    for _ in 0..25 {
        view.dispatch(ViewIntent::QueryChanged(faker.query()))?;
        view.dispatch(ViewIntent::CategorySelected("cash".to_owned()))?;
        view.dispatch(ViewIntent::SortRequested(Some(SortSpec::desc(
            OrderField::TotalCents,
        ))))?;
        view.derived_count();
    }
    assert!(view.store().ptr_eq(&before));
    Ok(())
}

#[test]
fn toggle_scenario_keeps_filters_and_order() -> Result<()> {
    let shifts = vec![
        Shift {
            id: ShiftId::new(1),
            name: "Morning".to_owned(),
            zone: "Downtown".to_owned(),
            starts_at: "06:00".to_owned(),
            ends_at: "12:00".to_owned(),
            status: true,
        },
        Shift {
            id: ShiftId::new(2),
            name: "Evening".to_owned(),
            zone: "Downtown".to_owned(),
            starts_at: "17:00".to_owned(),
            ends_at: "23:00".to_owned(),
            status: false,
        },
    ];
    let mut view = ListView::from_records(shifts)?;
    view.dispatch(ViewIntent::QueryChanged("even".to_owned()))?;
    assert_eq!(view.derived_view().keys(), vec![ShiftId::new(2)]);

    view.dispatch(ViewIntent::ToggleRequested {
        key: ShiftId::new(2),
        field: ShiftField::Status,
    })?;
    assert_eq!(view.filter_state().query(), "even");
    assert_eq!(view.derived_count(), 1);

    view.dispatch(ViewIntent::QueryChanged(String::new()))?;
    let statuses: Vec<_> = view
        .derived_view()
        .records()
        .map(|shift| (shift.id, shift.status))
        .collect();
    assert_eq!(
        statuses,
        vec![(ShiftId::new(1), true), (ShiftId::new(2), true)]
    );
    Ok(())
}

#[test]
fn unknown_status_tab_is_rejected_through_the_view() -> Result<()> {
    let mut faker = DeliveryFaker::new(4);
    let mut view = ListView::from_records(faker.orders(5))?;
    let error = view
        .dispatch(ViewIntent::TabSelected("shipped".to_owned()))
        .expect_err("orders have no shipped tab");
    assert!(matches!(error, ListError::UnknownSelector { .. }));
    assert!(view.filter_state().status_tab().is_all());

    let events = view.dispatch(ViewIntent::TabSelected("On_The_Way".to_owned()))?;
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], ViewEvent::TabChanged(tab) if tab.as_str() == "on_the_way"));
    Ok(())
}

#[test]
fn view_loads_from_json_fixture() -> Result<()> {
    let dir = temp_data_dir()?;
    let mut faker = DeliveryFaker::new(21);
    let orders = faker.orders(12);
    write_json_fixture(dir.path(), &orders)?;

    let provider = JsonFileProvider::for_view::<Order>(dir.path());
    let mut view = ListView::<Order>::load(&provider)?;
    assert_eq!(view.store().to_vec(), orders);
    assert_eq!(view.derived_count(), 12);
    Ok(())
}

#[test]
fn json_fixture_with_out_of_range_rating_is_rejected() -> Result<()> {
    let dir = temp_data_dir()?;
    let mut faker = DeliveryFaker::new(8);
    let mut reviews = faker.reviews(5);
    reviews[3].rating = 9;
    let bad_key = reviews[3].id;
    write_json_fixture(dir.path(), &reviews)?;

    let provider = JsonFileProvider::for_view::<Review>(dir.path());
    let error = ListView::<Review>::load(&provider).expect_err("rating 9 is out of range");
    assert!(format!("{error:#}").contains("seed reviews view from"));
    let cause = error
        .downcast_ref::<ListError>()
        .expect("core error in the chain");
    assert_eq!(
        cause,
        &ListError::InvalidRecord {
            key: bad_key.to_string(),
            reason: ListError::invalid_value("rating", "9").to_string(),
        }
    );
    Ok(())
}
