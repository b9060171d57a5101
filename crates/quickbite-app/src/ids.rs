// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                raw.trim().parse().map(Self)
            }
        }
    };
}

entity_id!(OrderId);
entity_id!(ShiftId);
entity_id!(VehicleId);
entity_id!(AdvertisementId);
entity_id!(ReviewId);
entity_id!(WithdrawMethodId);
entity_id!(FoodItemId);

#[cfg(test)]
mod tests {
    use super::OrderId;

    #[test]
    fn ids_parse_with_surrounding_whitespace() {
        assert_eq!(" 42 ".parse::<OrderId>(), Ok(OrderId::new(42)));
        assert!("forty-two".parse::<OrderId>().is_err());
    }

    #[test]
    fn ids_serialize_as_bare_integers() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&OrderId::new(7))?, "7");
        let parsed: OrderId = serde_json::from_str("7")?;
        assert_eq!(parsed, OrderId::new(7));
        Ok(())
    }
}
