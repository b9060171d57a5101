// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Hand-written records used when no data directory is configured.

use time::Date;
use time::macros::date;

use crate::{
    AdStatus, Advertisement, AdvertisementId, FixtureProvider, FoodItem, FoodItemId, Order,
    OrderId, OrderStatus, Review, ReviewId, Shift, ShiftId, Vehicle, VehicleId, VehicleType,
    WithdrawMethod, WithdrawMethodId,
};

pub fn orders() -> Vec<Order> {
    let order = |id: i64,
                 customer: &str,
                 restaurant: &str,
                 items: &str,
                 total_cents: i64,
                 payment: &str,
                 status: OrderStatus,
                 placed_on: Date| Order {
        id: OrderId::new(id),
        customer_name: customer.to_owned(),
        restaurant_name: restaurant.to_owned(),
        items: items.to_owned(),
        total_cents,
        payment_method: payment.to_owned(),
        status,
        placed_on,
    };
    vec![
        order(
            1001,
            "Ava Thompson",
            "Luigi's",
            "Meat Pizza, Garlic Knots",
            2_450,
            "Card",
            OrderStatus::Pending,
            date!(2026 - 03 - 02),
        ),
        order(
            1002,
            "Noah Patel",
            "Taco Town",
            "Fish Tacos",
            1_850,
            "Cash",
            OrderStatus::Preparing,
            date!(2026 - 03 - 02),
        ),
        order(
            1003,
            "Mia Chen",
            "Grill House",
            "Smash Burger, Fries",
            1_725,
            "Wallet",
            OrderStatus::OnTheWay,
            date!(2026 - 03 - 01),
        ),
        order(
            1004,
            "Liam Garcia",
            "Luigi's",
            "Veggie Pizza",
            1_399,
            "Card",
            OrderStatus::Delivered,
            date!(2026 - 02 - 28),
        ),
        order(
            1005,
            "Emma Brooks",
            "Sushi Bar",
            "Salmon Roll, Miso Soup",
            3_120,
            "Card",
            OrderStatus::Cancelled,
            date!(2026 - 02 - 27),
        ),
        order(
            1006,
            "Lucas Reed",
            "Taco Town",
            "Burrito Bowl",
            1_275,
            "Cash",
            OrderStatus::Delivered,
            date!(2026 - 02 - 27),
        ),
    ]
}

pub fn shifts() -> Vec<Shift> {
    let shift = |id: i64, name: &str, zone: &str, starts_at: &str, ends_at: &str, status: bool| {
        Shift {
            id: ShiftId::new(id),
            name: name.to_owned(),
            zone: zone.to_owned(),
            starts_at: starts_at.to_owned(),
            ends_at: ends_at.to_owned(),
            status,
        }
    };
    vec![
        shift(1, "Morning", "Downtown", "06:00", "12:00", true),
        shift(2, "Evening", "Downtown", "17:00", "23:00", false),
        shift(3, "Lunch Rush", "Harbor", "11:00", "15:00", true),
        shift(4, "Late Night", "Airport", "22:00", "04:00", false),
    ]
}

pub fn vehicles() -> Vec<Vehicle> {
    let vehicle = |id: i64,
                   owner: &str,
                   vehicle_type: VehicleType,
                   model: &str,
                   plate: &str,
                   verified: bool,
                   active: bool| Vehicle {
        id: VehicleId::new(id),
        owner_name: owner.to_owned(),
        vehicle_type,
        model: model.to_owned(),
        plate_number: plate.to_owned(),
        verified,
        active,
    };
    vec![
        vehicle(1, "Jordan Miles", VehicleType::Bike, "Trek FX 2", "B-1021", true, true),
        vehicle(2, "Priya Nair", VehicleType::Scooter, "Vespa Primavera", "S-4410", true, false),
        vehicle(3, "Omar Haddad", VehicleType::Car, "Toyota Prius", "C-7788", false, true),
        vehicle(4, "Sofia Rossi", VehicleType::Scooter, "Honda PCX", "S-1203", false, false),
    ]
}

pub fn advertisements() -> Vec<Advertisement> {
    let ad = |id: i64,
              title: &str,
              restaurant: &str,
              placement: &str,
              status: AdStatus,
              starts_on: Date,
              ends_on: Date,
              enabled: bool| Advertisement {
        id: AdvertisementId::new(id),
        title: title.to_owned(),
        restaurant_name: restaurant.to_owned(),
        placement: placement.to_owned(),
        status,
        starts_on,
        ends_on,
        enabled,
    };
    vec![
        ad(
            1,
            "Two-for-one Pizza Tuesdays",
            "Luigi's",
            "Home Banner",
            AdStatus::Running,
            date!(2026 - 03 - 01),
            date!(2026 - 03 - 31),
            true,
        ),
        ad(
            2,
            "Free Delivery Weekend",
            "Taco Town",
            "Search Results",
            AdStatus::Paused,
            date!(2026 - 02 - 14),
            date!(2026 - 03 - 15),
            false,
        ),
        ad(
            3,
            "Winter Ramen Specials",
            "Sushi Bar",
            "Home Banner",
            AdStatus::Expired,
            date!(2026 - 01 - 01),
            date!(2026 - 02 - 01),
            false,
        ),
    ]
}

pub fn reviews() -> Vec<Review> {
    let review = |id: i64,
                  customer: &str,
                  item: &str,
                  rating: i64,
                  comment: &str,
                  visible: bool,
                  reviewed_on: Date| Review {
        id: ReviewId::new(id),
        customer_name: customer.to_owned(),
        item_name: item.to_owned(),
        rating,
        comment: comment.to_owned(),
        visible,
        reviewed_on,
    };
    vec![
        review(
            1,
            "Ava Thompson",
            "Meat Pizza",
            5,
            "Crispy crust and loads of toppings.",
            true,
            date!(2026 - 03 - 02),
        ),
        review(
            2,
            "Noah Patel",
            "Fish Tacos",
            4,
            "Great flavor, a little late.",
            true,
            date!(2026 - 03 - 01),
        ),
        review(
            3,
            "Mia Chen",
            "Smash Burger",
            2,
            "Arrived cold.",
            false,
            date!(2026 - 02 - 28),
        ),
        review(
            4,
            "Emma Brooks",
            "Salmon Roll",
            5,
            "Fresh and beautifully packed.",
            true,
            date!(2026 - 02 - 26),
        ),
    ]
}

pub fn withdraw_methods() -> Vec<WithdrawMethod> {
    let method = |id: i64, name: &str, holder: &str, number: &str, default_method: bool, active: bool| {
        WithdrawMethod {
            id: WithdrawMethodId::new(id),
            method_name: name.to_owned(),
            account_holder: holder.to_owned(),
            account_number: number.to_owned(),
            default_method,
            active,
        }
    };
    vec![
        method(1, "Bank Transfer", "Jordan Miles", "****4821", true, true),
        method(2, "PayPal", "Jordan Miles", "jordan@mail.test", false, true),
        method(3, "Mobile Wallet", "Jordan Miles", "+1 555 0134", false, false),
    ]
}

pub fn menu() -> Vec<FoodItem> {
    let item = |id: i64, name: &str, restaurant: &str, category: &str, price_cents: i64, available: bool| {
        FoodItem {
            id: FoodItemId::new(id),
            name: name.to_owned(),
            restaurant_name: restaurant.to_owned(),
            category: category.to_owned(),
            price_cents,
            available,
        }
    };
    vec![
        item(1, "Meat Pizza", "Luigi's", "Pizza", 1_499, true),
        item(2, "Veggie Pizza", "Luigi's", "Pizza", 1_399, true),
        item(3, "Garlic Knots", "Luigi's", "Sides", 599, false),
        item(4, "Smash Burger", "Grill House", "Burgers", 1_150, true),
        item(5, "Fish Tacos", "Taco Town", "Tacos", 1_050, true),
        item(6, "Chocolate Lava Cake", "Grill House", "Desserts", 725, false),
    ]
}

pub fn order_provider() -> FixtureProvider<Order> {
    FixtureProvider::new(orders())
}

pub fn shift_provider() -> FixtureProvider<Shift> {
    FixtureProvider::new(shifts())
}

pub fn vehicle_provider() -> FixtureProvider<Vehicle> {
    FixtureProvider::new(vehicles())
}

pub fn advertisement_provider() -> FixtureProvider<Advertisement> {
    FixtureProvider::new(advertisements())
}

pub fn review_provider() -> FixtureProvider<Review> {
    FixtureProvider::new(reviews())
}

pub fn withdraw_method_provider() -> FixtureProvider<WithdrawMethod> {
    FixtureProvider::new(withdraw_methods())
}

pub fn menu_provider() -> FixtureProvider<FoodItem> {
    FixtureProvider::new(menu())
}
