// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod demo;
pub mod derived;
pub mod error;
pub mod filter;
pub mod ids;
pub mod model;
pub mod provider;
pub mod record;
pub mod session;
pub mod store;
pub mod value;
pub mod view;

pub use derived::*;
pub use error::*;
pub use filter::*;
pub use ids::*;
pub use model::*;
pub use provider::*;
pub use record::{Field, Record};
pub use session::*;
pub use store::*;
pub use value::{FieldValue, ValueKind, format_date, iso_date, parse_date};
pub use view::*;
