// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::Date;

use crate::ids::*;
use crate::record::{self, Field, Record};
use crate::value::iso_date;
use crate::{FieldValue, ListError, ListResult, ValueKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewKind {
    Orders,
    Shifts,
    Vehicles,
    Advertisements,
    Reviews,
    WithdrawMethods,
    Menu,
}

impl ViewKind {
    pub const ALL: [Self; 7] = [
        Self::Orders,
        Self::Shifts,
        Self::Vehicles,
        Self::Advertisements,
        Self::Reviews,
        Self::WithdrawMethods,
        Self::Menu,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Orders => Order::VIEW,
            Self::Shifts => Shift::VIEW,
            Self::Vehicles => Vehicle::VIEW,
            Self::Advertisements => Advertisement::VIEW,
            Self::Reviews => Review::VIEW,
            Self::WithdrawMethods => WithdrawMethod::VIEW,
            Self::Menu => FoodItem::VIEW,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|view| view.label().eq_ignore_ascii_case(wanted))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const LABELS: [&'static str; 5] =
        ["pending", "preparing", "on_the_way", "delivered", "cancelled"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::OnTheWay => "on_the_way",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "preparing" => Some(Self::Preparing),
            "on_the_way" => Some(Self::OnTheWay),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdStatus {
    Running,
    Paused,
    Expired,
}

impl AdStatus {
    pub const LABELS: [&'static str; 3] = ["running", "paused", "expired"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Expired => "expired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "running" => Some(Self::Running),
            "paused" => Some(Self::Paused),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Bike,
    Scooter,
    Car,
}

impl VehicleType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bike => "bike",
            Self::Scooter => "scooter",
            Self::Car => "car",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "bike" => Some(Self::Bike),
            "scooter" => Some(Self::Scooter),
            "car" => Some(Self::Car),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub restaurant_name: String,
    pub items: String,
    pub total_cents: i64,
    pub payment_method: String,
    pub status: OrderStatus,
    #[serde(with = "iso_date")]
    pub placed_on: Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Id,
    Customer,
    Restaurant,
    Items,
    TotalCents,
    PaymentMethod,
    Status,
    PlacedOn,
}

impl Field for OrderField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Customer,
        Self::Restaurant,
        Self::Items,
        Self::TotalCents,
        Self::PaymentMethod,
        Self::Status,
        Self::PlacedOn,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Customer => "customer",
            Self::Restaurant => "restaurant",
            Self::Items => "items",
            Self::TotalCents => "total_cents",
            Self::PaymentMethod => "payment_method",
            Self::Status => "status",
            Self::PlacedOn => "placed_on",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            Self::Id | Self::TotalCents => ValueKind::Integer,
            Self::PlacedOn => ValueKind::Date,
            Self::Customer | Self::Restaurant | Self::Items | Self::PaymentMethod | Self::Status => {
                ValueKind::Text
            }
        }
    }
}

impl Record for Order {
    type Key = OrderId;
    type Field = OrderField;

    const VIEW: &'static str = "orders";
    const KEY_FIELD: OrderField = OrderField::Id;
    const SEARCH_FIELDS: &'static [OrderField] = &[
        OrderField::Id,
        OrderField::Customer,
        OrderField::Restaurant,
        OrderField::Items,
    ];
    const CATEGORY_FIELD: Option<OrderField> = Some(OrderField::PaymentMethod);
    const TAB_FIELD: Option<OrderField> = Some(OrderField::Status);
    const TABS: &'static [&'static str] = &OrderStatus::LABELS;

    fn key(&self) -> OrderId {
        self.id
    }

    fn get(&self, field: OrderField) -> FieldValue {
        match field {
            OrderField::Id => FieldValue::Integer(self.id.get()),
            OrderField::Customer => FieldValue::text(&self.customer_name),
            OrderField::Restaurant => FieldValue::text(&self.restaurant_name),
            OrderField::Items => FieldValue::text(&self.items),
            OrderField::TotalCents => FieldValue::Integer(self.total_cents),
            OrderField::PaymentMethod => FieldValue::text(&self.payment_method),
            OrderField::Status => FieldValue::text(self.status.as_str()),
            OrderField::PlacedOn => FieldValue::Date(self.placed_on),
        }
    }

    fn set(&mut self, field: OrderField, value: FieldValue) -> ListResult<()> {
        match field {
            OrderField::Id => return Err(record::read_only(field)),
            OrderField::Customer => self.customer_name = record::text(field, value)?,
            OrderField::Restaurant => self.restaurant_name = record::text(field, value)?,
            OrderField::Items => self.items = record::text(field, value)?,
            OrderField::TotalCents => {
                self.total_cents = non_negative(field, record::integer(field, value)?)?;
            }
            OrderField::PaymentMethod => self.payment_method = record::text(field, value)?,
            OrderField::Status => self.status = record::choice(field, value, OrderStatus::parse)?,
            OrderField::PlacedOn => self.placed_on = record::date(field, value)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub name: String,
    pub zone: String,
    pub starts_at: String,
    pub ends_at: String,
    pub status: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftField {
    Id,
    Name,
    Zone,
    StartsAt,
    EndsAt,
    Status,
}

impl Field for ShiftField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Zone,
        Self::StartsAt,
        Self::EndsAt,
        Self::Status,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Zone => "zone",
            Self::StartsAt => "starts_at",
            Self::EndsAt => "ends_at",
            Self::Status => "status",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            Self::Id => ValueKind::Integer,
            Self::Status => ValueKind::Bool,
            Self::Name | Self::Zone | Self::StartsAt | Self::EndsAt => ValueKind::Text,
        }
    }
}

impl Record for Shift {
    type Key = ShiftId;
    type Field = ShiftField;

    const VIEW: &'static str = "shifts";
    const KEY_FIELD: ShiftField = ShiftField::Id;
    const SEARCH_FIELDS: &'static [ShiftField] = &[ShiftField::Name, ShiftField::Zone];
    const CATEGORY_FIELD: Option<ShiftField> = Some(ShiftField::Zone);

    fn key(&self) -> ShiftId {
        self.id
    }

    fn get(&self, field: ShiftField) -> FieldValue {
        match field {
            ShiftField::Id => FieldValue::Integer(self.id.get()),
            ShiftField::Name => FieldValue::text(&self.name),
            ShiftField::Zone => FieldValue::text(&self.zone),
            ShiftField::StartsAt => FieldValue::text(&self.starts_at),
            ShiftField::EndsAt => FieldValue::text(&self.ends_at),
            ShiftField::Status => FieldValue::Bool(self.status),
        }
    }

    fn set(&mut self, field: ShiftField, value: FieldValue) -> ListResult<()> {
        match field {
            ShiftField::Id => return Err(record::read_only(field)),
            ShiftField::Name => self.name = record::text(field, value)?,
            ShiftField::Zone => self.zone = record::text(field, value)?,
            ShiftField::StartsAt => self.starts_at = record::text(field, value)?,
            ShiftField::EndsAt => self.ends_at = record::text(field, value)?,
            ShiftField::Status => self.status = record::boolean(field, value)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub owner_name: String,
    pub vehicle_type: VehicleType,
    pub model: String,
    pub plate_number: String,
    pub verified: bool,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleField {
    Id,
    Owner,
    VehicleType,
    Model,
    PlateNumber,
    Verified,
    Active,
}

impl Field for VehicleField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Owner,
        Self::VehicleType,
        Self::Model,
        Self::PlateNumber,
        Self::Verified,
        Self::Active,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Owner => "owner",
            Self::VehicleType => "vehicle_type",
            Self::Model => "model",
            Self::PlateNumber => "plate_number",
            Self::Verified => "verified",
            Self::Active => "active",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            Self::Id => ValueKind::Integer,
            Self::Verified | Self::Active => ValueKind::Bool,
            Self::Owner | Self::VehicleType | Self::Model | Self::PlateNumber => ValueKind::Text,
        }
    }
}

impl Record for Vehicle {
    type Key = VehicleId;
    type Field = VehicleField;

    const VIEW: &'static str = "vehicles";
    const KEY_FIELD: VehicleField = VehicleField::Id;
    const SEARCH_FIELDS: &'static [VehicleField] = &[
        VehicleField::Owner,
        VehicleField::PlateNumber,
        VehicleField::Model,
    ];
    const CATEGORY_FIELD: Option<VehicleField> = Some(VehicleField::VehicleType);

    fn key(&self) -> VehicleId {
        self.id
    }

    fn get(&self, field: VehicleField) -> FieldValue {
        match field {
            VehicleField::Id => FieldValue::Integer(self.id.get()),
            VehicleField::Owner => FieldValue::text(&self.owner_name),
            VehicleField::VehicleType => FieldValue::text(self.vehicle_type.as_str()),
            VehicleField::Model => FieldValue::text(&self.model),
            VehicleField::PlateNumber => FieldValue::text(&self.plate_number),
            VehicleField::Verified => FieldValue::Bool(self.verified),
            VehicleField::Active => FieldValue::Bool(self.active),
        }
    }

    fn set(&mut self, field: VehicleField, value: FieldValue) -> ListResult<()> {
        match field {
            VehicleField::Id => return Err(record::read_only(field)),
            VehicleField::Owner => self.owner_name = record::text(field, value)?,
            VehicleField::VehicleType => {
                self.vehicle_type = record::choice(field, value, VehicleType::parse)?;
            }
            VehicleField::Model => self.model = record::text(field, value)?,
            VehicleField::PlateNumber => self.plate_number = record::text(field, value)?,
            VehicleField::Verified => self.verified = record::boolean(field, value)?,
            VehicleField::Active => self.active = record::boolean(field, value)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertisement {
    pub id: AdvertisementId,
    pub title: String,
    pub restaurant_name: String,
    pub placement: String,
    pub status: AdStatus,
    #[serde(with = "iso_date")]
    pub starts_on: Date,
    #[serde(with = "iso_date")]
    pub ends_on: Date,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvertisementField {
    Id,
    Title,
    Restaurant,
    Placement,
    Status,
    StartsOn,
    EndsOn,
    Enabled,
}

impl Field for AdvertisementField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Title,
        Self::Restaurant,
        Self::Placement,
        Self::Status,
        Self::StartsOn,
        Self::EndsOn,
        Self::Enabled,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Restaurant => "restaurant",
            Self::Placement => "placement",
            Self::Status => "status",
            Self::StartsOn => "starts_on",
            Self::EndsOn => "ends_on",
            Self::Enabled => "enabled",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            Self::Id => ValueKind::Integer,
            Self::StartsOn | Self::EndsOn => ValueKind::Date,
            Self::Enabled => ValueKind::Bool,
            Self::Title | Self::Restaurant | Self::Placement | Self::Status => ValueKind::Text,
        }
    }
}

impl Record for Advertisement {
    type Key = AdvertisementId;
    type Field = AdvertisementField;

    const VIEW: &'static str = "ads";
    const KEY_FIELD: AdvertisementField = AdvertisementField::Id;
    const SEARCH_FIELDS: &'static [AdvertisementField] = &[
        AdvertisementField::Id,
        AdvertisementField::Title,
        AdvertisementField::Restaurant,
    ];
    const CATEGORY_FIELD: Option<AdvertisementField> = Some(AdvertisementField::Placement);
    const TAB_FIELD: Option<AdvertisementField> = Some(AdvertisementField::Status);
    const TABS: &'static [&'static str] = &AdStatus::LABELS;

    fn key(&self) -> AdvertisementId {
        self.id
    }

    fn get(&self, field: AdvertisementField) -> FieldValue {
        match field {
            AdvertisementField::Id => FieldValue::Integer(self.id.get()),
            AdvertisementField::Title => FieldValue::text(&self.title),
            AdvertisementField::Restaurant => FieldValue::text(&self.restaurant_name),
            AdvertisementField::Placement => FieldValue::text(&self.placement),
            AdvertisementField::Status => FieldValue::text(self.status.as_str()),
            AdvertisementField::StartsOn => FieldValue::Date(self.starts_on),
            AdvertisementField::EndsOn => FieldValue::Date(self.ends_on),
            AdvertisementField::Enabled => FieldValue::Bool(self.enabled),
        }
    }

    fn set(&mut self, field: AdvertisementField, value: FieldValue) -> ListResult<()> {
        match field {
            AdvertisementField::Id => return Err(record::read_only(field)),
            AdvertisementField::Title => self.title = record::text(field, value)?,
            AdvertisementField::Restaurant => self.restaurant_name = record::text(field, value)?,
            AdvertisementField::Placement => self.placement = record::text(field, value)?,
            AdvertisementField::Status => {
                self.status = record::choice(field, value, AdStatus::parse)?;
            }
            AdvertisementField::StartsOn => {
                let starts_on = record::date(field, value)?;
                if starts_on > self.ends_on {
                    return Err(ListError::invalid_value(
                        field.name(),
                        FieldValue::Date(starts_on).display(),
                    ));
                }
                self.starts_on = starts_on;
            }
            AdvertisementField::EndsOn => {
                let ends_on = record::date(field, value)?;
                if ends_on < self.starts_on {
                    return Err(ListError::invalid_value(
                        field.name(),
                        FieldValue::Date(ends_on).display(),
                    ));
                }
                self.ends_on = ends_on;
            }
            AdvertisementField::Enabled => self.enabled = record::boolean(field, value)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub customer_name: String,
    pub item_name: String,
    pub rating: i64,
    pub comment: String,
    pub visible: bool,
    #[serde(with = "iso_date")]
    pub reviewed_on: Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewField {
    Id,
    Customer,
    Item,
    Rating,
    Comment,
    Visible,
    ReviewedOn,
}

impl Field for ReviewField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Customer,
        Self::Item,
        Self::Rating,
        Self::Comment,
        Self::Visible,
        Self::ReviewedOn,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Customer => "customer",
            Self::Item => "item",
            Self::Rating => "rating",
            Self::Comment => "comment",
            Self::Visible => "visible",
            Self::ReviewedOn => "reviewed_on",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            Self::Id | Self::Rating => ValueKind::Integer,
            Self::Visible => ValueKind::Bool,
            Self::ReviewedOn => ValueKind::Date,
            Self::Customer | Self::Item | Self::Comment => ValueKind::Text,
        }
    }
}

impl Record for Review {
    type Key = ReviewId;
    type Field = ReviewField;

    const VIEW: &'static str = "reviews";
    const KEY_FIELD: ReviewField = ReviewField::Id;
    const SEARCH_FIELDS: &'static [ReviewField] = &[
        ReviewField::Customer,
        ReviewField::Item,
        ReviewField::Comment,
    ];
    const CATEGORY_FIELD: Option<ReviewField> = Some(ReviewField::Rating);

    fn key(&self) -> ReviewId {
        self.id
    }

    fn get(&self, field: ReviewField) -> FieldValue {
        match field {
            ReviewField::Id => FieldValue::Integer(self.id.get()),
            ReviewField::Customer => FieldValue::text(&self.customer_name),
            ReviewField::Item => FieldValue::text(&self.item_name),
            ReviewField::Rating => FieldValue::Integer(self.rating),
            ReviewField::Comment => FieldValue::text(&self.comment),
            ReviewField::Visible => FieldValue::Bool(self.visible),
            ReviewField::ReviewedOn => FieldValue::Date(self.reviewed_on),
        }
    }

    fn set(&mut self, field: ReviewField, value: FieldValue) -> ListResult<()> {
        match field {
            ReviewField::Id => return Err(record::read_only(field)),
            ReviewField::Customer => self.customer_name = record::text(field, value)?,
            ReviewField::Item => self.item_name = record::text(field, value)?,
            ReviewField::Rating => {
                let rating = record::integer(field, value)?;
                if !(1..=5).contains(&rating) {
                    return Err(ListError::invalid_value(field.name(), rating.to_string()));
                }
                self.rating = rating;
            }
            ReviewField::Comment => self.comment = record::text(field, value)?,
            ReviewField::Visible => self.visible = record::boolean(field, value)?,
            ReviewField::ReviewedOn => self.reviewed_on = record::date(field, value)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawMethod {
    pub id: WithdrawMethodId,
    pub method_name: String,
    pub account_holder: String,
    pub account_number: String,
    pub default_method: bool,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WithdrawMethodField {
    Id,
    MethodName,
    AccountHolder,
    AccountNumber,
    DefaultMethod,
    Active,
}

impl Field for WithdrawMethodField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::MethodName,
        Self::AccountHolder,
        Self::AccountNumber,
        Self::DefaultMethod,
        Self::Active,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::MethodName => "method_name",
            Self::AccountHolder => "account_holder",
            Self::AccountNumber => "account_number",
            Self::DefaultMethod => "default_method",
            Self::Active => "active",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            Self::Id => ValueKind::Integer,
            Self::DefaultMethod | Self::Active => ValueKind::Bool,
            Self::MethodName | Self::AccountHolder | Self::AccountNumber => ValueKind::Text,
        }
    }
}

impl Record for WithdrawMethod {
    type Key = WithdrawMethodId;
    type Field = WithdrawMethodField;

    const VIEW: &'static str = "withdraw-methods";
    const KEY_FIELD: WithdrawMethodField = WithdrawMethodField::Id;
    const SEARCH_FIELDS: &'static [WithdrawMethodField] = &[
        WithdrawMethodField::MethodName,
        WithdrawMethodField::AccountHolder,
    ];

    fn key(&self) -> WithdrawMethodId {
        self.id
    }

    fn get(&self, field: WithdrawMethodField) -> FieldValue {
        match field {
            WithdrawMethodField::Id => FieldValue::Integer(self.id.get()),
            WithdrawMethodField::MethodName => FieldValue::text(&self.method_name),
            WithdrawMethodField::AccountHolder => FieldValue::text(&self.account_holder),
            WithdrawMethodField::AccountNumber => FieldValue::text(&self.account_number),
            WithdrawMethodField::DefaultMethod => FieldValue::Bool(self.default_method),
            WithdrawMethodField::Active => FieldValue::Bool(self.active),
        }
    }

    fn set(&mut self, field: WithdrawMethodField, value: FieldValue) -> ListResult<()> {
        match field {
            WithdrawMethodField::Id => return Err(record::read_only(field)),
            WithdrawMethodField::MethodName => self.method_name = record::text(field, value)?,
            WithdrawMethodField::AccountHolder => {
                self.account_holder = record::text(field, value)?;
            }
            WithdrawMethodField::AccountNumber => {
                self.account_number = record::text(field, value)?;
            }
            WithdrawMethodField::DefaultMethod => {
                self.default_method = record::boolean(field, value)?;
            }
            WithdrawMethodField::Active => self.active = record::boolean(field, value)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodItemId,
    pub name: String,
    pub restaurant_name: String,
    pub category: String,
    pub price_cents: i64,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodItemField {
    Id,
    Name,
    Restaurant,
    Category,
    PriceCents,
    Available,
}

impl Field for FoodItemField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Restaurant,
        Self::Category,
        Self::PriceCents,
        Self::Available,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Restaurant => "restaurant",
            Self::Category => "category",
            Self::PriceCents => "price_cents",
            Self::Available => "available",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            Self::Id | Self::PriceCents => ValueKind::Integer,
            Self::Available => ValueKind::Bool,
            Self::Name | Self::Restaurant | Self::Category => ValueKind::Text,
        }
    }
}

impl Record for FoodItem {
    type Key = FoodItemId;
    type Field = FoodItemField;

    const VIEW: &'static str = "menu";
    const KEY_FIELD: FoodItemField = FoodItemField::Id;
    const SEARCH_FIELDS: &'static [FoodItemField] =
        &[FoodItemField::Name, FoodItemField::Restaurant];
    const CATEGORY_FIELD: Option<FoodItemField> = Some(FoodItemField::Category);

    fn key(&self) -> FoodItemId {
        self.id
    }

    fn get(&self, field: FoodItemField) -> FieldValue {
        match field {
            FoodItemField::Id => FieldValue::Integer(self.id.get()),
            FoodItemField::Name => FieldValue::text(&self.name),
            FoodItemField::Restaurant => FieldValue::text(&self.restaurant_name),
            FoodItemField::Category => FieldValue::text(&self.category),
            FoodItemField::PriceCents => FieldValue::Integer(self.price_cents),
            FoodItemField::Available => FieldValue::Bool(self.available),
        }
    }

    fn set(&mut self, field: FoodItemField, value: FieldValue) -> ListResult<()> {
        match field {
            FoodItemField::Id => return Err(record::read_only(field)),
            FoodItemField::Name => self.name = record::text(field, value)?,
            FoodItemField::Restaurant => self.restaurant_name = record::text(field, value)?,
            FoodItemField::Category => self.category = record::text(field, value)?,
            FoodItemField::PriceCents => {
                self.price_cents = non_negative(field, record::integer(field, value)?)?;
            }
            FoodItemField::Available => self.available = record::boolean(field, value)?,
        }
        Ok(())
    }
}

fn non_negative<F: Field>(field: F, cents: i64) -> ListResult<i64> {
    if cents < 0 {
        return Err(ListError::invalid_value(field.name(), cents.to_string()));
    }
    Ok(cents)
}
