// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use crate::ViewKind;

/// The three back-office front ends. Each exposes its own subset of views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Console {
    Admin,
    DeliveryPartner,
    Restaurant,
}

impl Console {
    pub const ALL: [Self; 3] = [Self::Admin, Self::DeliveryPartner, Self::Restaurant];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::DeliveryPartner => "delivery-partner",
            Self::Restaurant => "restaurant",
        }
    }

    /// Accepts `partner` as shorthand for the delivery-partner console.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("partner") {
            return Some(Self::DeliveryPartner);
        }
        Self::ALL
            .into_iter()
            .find(|console| console.as_str().eq_ignore_ascii_case(value))
    }

    pub const fn views(self) -> &'static [ViewKind] {
        match self {
            Self::Admin => &[
                ViewKind::Orders,
                ViewKind::Shifts,
                ViewKind::Vehicles,
                ViewKind::Advertisements,
                ViewKind::Reviews,
            ],
            Self::DeliveryPartner => &[
                ViewKind::Orders,
                ViewKind::Shifts,
                ViewKind::Vehicles,
                ViewKind::WithdrawMethods,
            ],
            Self::Restaurant => &[
                ViewKind::Orders,
                ViewKind::Menu,
                ViewKind::Advertisements,
                ViewKind::Reviews,
                ViewKind::WithdrawMethods,
            ],
        }
    }

    pub fn exposes(self, view: ViewKind) -> bool {
        self.views().contains(&view)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
    pub console: Console,
    pub signed_in_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("sign-in rejected for {email:?} -- use an email address and a non-empty password")]
    InvalidCredentials { email: String },
    #[error("not signed in -- sign in to a console first")]
    SignedOut,
    #[error("the {console} console has no {view} view")]
    ViewNotAvailable {
        console: &'static str,
        view: &'static str,
    },
}

/// Who is using the back office right now. Passed explicitly to whatever
/// needs it; there is no process-wide sign-in flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    /// Mock check: any address with an `@` and any non-empty password pass.
    pub fn sign_in(
        &mut self,
        console: Console,
        credentials: Credentials,
    ) -> Result<&SessionUser, SessionError> {
        let email = credentials.email.trim();
        if !email.contains('@') || credentials.password.is_empty() {
            return Err(SessionError::InvalidCredentials {
                email: email.to_owned(),
            });
        }

        info!(console = console.as_str(), email, "signed in");
        Ok(self.user.insert(SessionUser {
            email: email.to_owned(),
            console,
            signed_in_at: OffsetDateTime::now_utc(),
        }))
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(console = user.console.as_str(), email = %user.email, "signed out");
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn require(&self) -> Result<&SessionUser, SessionError> {
        self.user.as_ref().ok_or(SessionError::SignedOut)
    }

    pub fn open(&self, view: ViewKind) -> Result<ViewKind, SessionError> {
        let user = self.require()?;
        if user.console.exposes(view) {
            Ok(view)
        } else {
            Err(SessionError::ViewNotAvailable {
                console: user.console.as_str(),
                view: view.label(),
            })
        }
    }
}
