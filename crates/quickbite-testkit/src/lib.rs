// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use quickbite_app::{
    AdStatus, Advertisement, AdvertisementId, FoodItem, FoodItemId, Order, OrderId, OrderStatus,
    Record, Review, ReviewId, Shift, ShiftId, Vehicle, VehicleId, VehicleType, WithdrawMethod,
    WithdrawMethodId,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use time::{Date, Duration, Month};

const FIRST_NAMES: [&str; 16] = [
    "Ava", "Noah", "Mia", "Liam", "Emma", "Lucas", "Zoe", "Omar", "Priya", "Jordan", "Sofia",
    "Mateo", "Hana", "Kofi", "Ines", "Theo",
];
const LAST_NAMES: [&str; 14] = [
    "Thompson", "Patel", "Chen", "Garcia", "Brooks", "Reed", "Nair", "Haddad", "Rossi", "Miles",
    "Okafor", "Silva", "Novak", "Kim",
];
const RESTAURANTS: [&str; 8] = [
    "Luigi's",
    "Taco Town",
    "Grill House",
    "Sushi Bar",
    "Curry Corner",
    "Green Bowl",
    "Noodle Nook",
    "Bakery 21",
];
const DISHES: [(&str, &str); 14] = [
    ("Meat Pizza", "Pizza"),
    ("Veggie Pizza", "Pizza"),
    ("Margherita", "Pizza"),
    ("Fish Tacos", "Tacos"),
    ("Carnitas Tacos", "Tacos"),
    ("Smash Burger", "Burgers"),
    ("Chicken Burger", "Burgers"),
    ("Salmon Roll", "Sushi"),
    ("Tuna Nigiri", "Sushi"),
    ("Butter Chicken", "Curry"),
    ("Chana Masala", "Curry"),
    ("Pad Thai", "Noodles"),
    ("Caesar Salad", "Salads"),
    ("Lava Cake", "Desserts"),
];
const PAYMENT_METHODS: [&str; 4] = ["Card", "Cash", "Wallet", "Voucher"];
const ZONES: [&str; 6] = ["Downtown", "Harbor", "Airport", "Old Town", "University", "Riverside"];
const SHIFT_NAMES: [(&str, &str, &str); 5] = [
    ("Morning", "06:00", "12:00"),
    ("Lunch Rush", "11:00", "15:00"),
    ("Afternoon", "12:00", "18:00"),
    ("Evening", "17:00", "23:00"),
    ("Late Night", "22:00", "04:00"),
];
const VEHICLE_MODELS: [(VehicleType, &str); 6] = [
    (VehicleType::Bike, "Trek FX 2"),
    (VehicleType::Bike, "Giant Escape"),
    (VehicleType::Scooter, "Vespa Primavera"),
    (VehicleType::Scooter, "Honda PCX"),
    (VehicleType::Car, "Toyota Prius"),
    (VehicleType::Car, "Kia Niro"),
];
const AD_TITLES: [&str; 6] = [
    "Two-for-one Tuesdays",
    "Free Delivery Weekend",
    "Lunch Combo Deal",
    "New Menu Launch",
    "Family Bundle",
    "Late Night Bites",
];
const PLACEMENTS: [&str; 3] = ["Home Banner", "Search Results", "Category Page"];
const REVIEW_COMMENTS: [&str; 8] = [
    "Hot and fresh.",
    "Arrived cold.",
    "Great flavor, a little late.",
    "Portion was small.",
    "Beautifully packed.",
    "Driver was friendly.",
    "Missing a side.",
    "Would order again.",
];
const WITHDRAW_METHODS: [&str; 4] = ["Bank Transfer", "PayPal", "Mobile Wallet", "Debit Card"];
const ORDER_STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Preparing,
    OrderStatus::OnTheWay,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];
const AD_STATUSES: [AdStatus; 3] = [AdStatus::Running, AdStatus::Paused, AdStatus::Expired];
const REFERENCE_YEAR: i32 = 2026;

/// Words that appear in generated records, for building search queries.
const QUERY_WORDS: [&str; 12] = [
    "pizza", "taco", "burger", "luigi", "town", "ava", "chen", "harbor", "night", "card", "bank",
    "zz-no-match",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator for delivery back-office records. The same seed always
/// yields the same records.
#[derive(Debug, Clone)]
pub struct DeliveryFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl DeliveryFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn bool(&mut self) -> bool {
        self.rng.bool()
    }

    pub fn order(&mut self, id: i64) -> Order {
        let (dish, _) = self.pick_pair(&DISHES);
        let (side, _) = self.pick_pair(&DISHES);
        let items = if self.rng.bool() {
            dish.to_owned()
        } else {
            format!("{dish}, {side}")
        };
        Order {
            id: OrderId::new(id),
            customer_name: self.person(),
            restaurant_name: self.pick(&RESTAURANTS).to_owned(),
            items,
            total_cents: self.int_range_i64(500, 9_000),
            payment_method: self.pick(&PAYMENT_METHODS).to_owned(),
            status: ORDER_STATUSES[self.rng.int_n(ORDER_STATUSES.len())],
            placed_on: self.date_in_reference_year(),
        }
    }

    pub fn shift(&mut self, id: i64) -> Shift {
        let (name, starts_at, ends_at) = SHIFT_NAMES[self.rng.int_n(SHIFT_NAMES.len())];
        Shift {
            id: ShiftId::new(id),
            name: name.to_owned(),
            zone: self.pick(&ZONES).to_owned(),
            starts_at: starts_at.to_owned(),
            ends_at: ends_at.to_owned(),
            status: self.rng.bool(),
        }
    }

    pub fn vehicle(&mut self, id: i64) -> Vehicle {
        let (vehicle_type, model) = VEHICLE_MODELS[self.rng.int_n(VEHICLE_MODELS.len())];
        let prefix = match vehicle_type {
            VehicleType::Bike => 'B',
            VehicleType::Scooter => 'S',
            VehicleType::Car => 'C',
        };
        Vehicle {
            id: VehicleId::new(id),
            owner_name: self.person(),
            vehicle_type,
            model: model.to_owned(),
            plate_number: format!("{prefix}-{:04}", self.int_range_i64(0, 9_999)),
            verified: self.rng.bool(),
            active: self.rng.bool(),
        }
    }

    pub fn advertisement(&mut self, id: i64) -> Advertisement {
        let starts_on = self.date_in_reference_year();
        let ends_on = starts_on + Duration::days(self.int_range_i64(0, 60));
        Advertisement {
            id: AdvertisementId::new(id),
            title: self.pick(&AD_TITLES).to_owned(),
            restaurant_name: self.pick(&RESTAURANTS).to_owned(),
            placement: self.pick(&PLACEMENTS).to_owned(),
            status: AD_STATUSES[self.rng.int_n(AD_STATUSES.len())],
            starts_on,
            ends_on,
            enabled: self.rng.bool(),
        }
    }

    pub fn review(&mut self, id: i64) -> Review {
        let (item, _) = self.pick_pair(&DISHES);
        Review {
            id: ReviewId::new(id),
            customer_name: self.person(),
            item_name: item.to_owned(),
            rating: self.int_range_i64(1, 5),
            comment: self.pick(&REVIEW_COMMENTS).to_owned(),
            visible: self.rng.bool(),
            reviewed_on: self.date_in_reference_year(),
        }
    }

    /// Never marks the method as default; callers pick which one is.
    pub fn withdraw_method(&mut self, id: i64) -> WithdrawMethod {
        WithdrawMethod {
            id: WithdrawMethodId::new(id),
            method_name: self.pick(&WITHDRAW_METHODS).to_owned(),
            account_holder: self.person(),
            account_number: format!("****{:04}", self.int_range_i64(0, 9_999)),
            default_method: false,
            active: self.rng.bool(),
        }
    }

    pub fn food_item(&mut self, id: i64) -> FoodItem {
        let (name, category) = self.pick_pair(&DISHES);
        FoodItem {
            id: FoodItemId::new(id),
            name: name.to_owned(),
            restaurant_name: self.pick(&RESTAURANTS).to_owned(),
            category: category.to_owned(),
            price_cents: self.int_range_i64(250, 3_500),
            available: self.rng.bool(),
        }
    }

    pub fn orders(&mut self, count: usize) -> Vec<Order> {
        (1..=count as i64).map(|id| self.order(id)).collect()
    }

    pub fn shifts(&mut self, count: usize) -> Vec<Shift> {
        (1..=count as i64).map(|id| self.shift(id)).collect()
    }

    pub fn vehicles(&mut self, count: usize) -> Vec<Vehicle> {
        (1..=count as i64).map(|id| self.vehicle(id)).collect()
    }

    pub fn advertisements(&mut self, count: usize) -> Vec<Advertisement> {
        (1..=count as i64).map(|id| self.advertisement(id)).collect()
    }

    pub fn reviews(&mut self, count: usize) -> Vec<Review> {
        (1..=count as i64).map(|id| self.review(id)).collect()
    }

    /// `count` methods with exactly one default, unless `count` is zero.
    pub fn withdraw_methods(&mut self, count: usize) -> Vec<WithdrawMethod> {
        let mut methods: Vec<_> = (1..=count as i64)
            .map(|id| self.withdraw_method(id))
            .collect();
        let default_index = self.rng.int_n(methods.len());
        if let Some(method) = methods.get_mut(default_index) {
            method.default_method = true;
        }
        methods
    }

    pub fn menu(&mut self, count: usize) -> Vec<FoodItem> {
        (1..=count as i64).map(|id| self.food_item(id)).collect()
    }

    /// A search query, sometimes shouted, sometimes padded, sometimes empty.
    pub fn query(&mut self) -> String {
        let word = self.pick(&QUERY_WORDS);
        match self.rng.int_n(4) {
            0 => String::new(),
            1 => word.to_ascii_uppercase(),
            2 => format!("  {word} "),
            _ => word.to_owned(),
        }
    }

    pub fn zone(&mut self) -> &'static str {
        self.pick(&ZONES)
    }

    pub fn restaurant(&mut self) -> &'static str {
        self.pick(&RESTAURANTS)
    }

    fn person(&mut self) -> String {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        format!("{first} {last}")
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn pick_pair<'a>(&mut self, items: &'a [(&'a str, &'a str)]) -> (&'a str, &'a str) {
        items[self.rng.int_n(items.len())]
    }

    fn int_range_i64(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + (self.rng.next_u64() % (span as u64)) as i64
    }

    fn date_in_reference_year(&mut self) -> Date {
        let offset = self.int_range_i64(0, 364);
        reference_date() + Duration::days(offset)
    }
}

/// Writes `records` as `<dir>/<view>.json`, the layout the CLI reads from
/// `[data].dir`.
pub fn write_json_fixture<R: Record + Serialize>(dir: &Path, records: &[R]) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", R::VIEW));
    let body = serde_json::to_string_pretty(records)
        .with_context(|| format!("encode {} fixture", R::VIEW))?;
    fs::write(&path, body).with_context(|| format!("write fixture {}", path.display()))?;
    Ok(path)
}

pub fn temp_data_dir() -> Result<tempfile::TempDir> {
    tempfile::tempdir().context("create temp data dir")
}

pub fn reference_date() -> Date {
    Date::from_calendar_date(REFERENCE_YEAR, Month::January, 1).unwrap_or(Date::MIN)
}
