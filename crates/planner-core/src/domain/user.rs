//! User and Credentials
//!
//! The profile is read once per session; registration and login only
//! exchange credentials for a bearer token.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::draft::{self, timestamp};
use super::entity::{DomainResult, Entity};

/// The signed-in user (`GET /me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub partner_name: Option<String>,
    #[serde(default, with = "timestamp")]
    pub wedding_date: Option<NaiveDateTime>,
}

impl Entity for User {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Wedding countdown shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    DaysToGo(i64),
    TheDay,
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::DaysToGo(days) => write!(f, "{} days to go!", days),
            Countdown::TheDay => write!(f, "Your special day is here!"),
        }
    }
}

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

impl User {
    /// Days left until the wedding, rounded up. `None` without a date.
    pub fn countdown(&self, now: NaiveDateTime) -> Option<Countdown> {
        let wedding = self.wedding_date?;
        let millis = (wedding - now).num_milliseconds();
        // Ceiling division; integer division already rounds negatives up.
        let days = if millis > 0 {
            (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
        } else {
            millis / MILLIS_PER_DAY
        };
        Some(if days > 0 { Countdown::DaysToGo(days) } else { Countdown::TheDay })
    }
}

/// `POST /login` body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /register` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub partner_name: Option<String>,
    pub wedding_date: Option<NaiveDate>,
}

/// Token issued by login and register
#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Auth page form values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialsDraft {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub partner_name: String,
    pub wedding_date: String,
}

impl CredentialsDraft {
    pub fn to_login(&self) -> DomainResult<LoginRequest> {
        Ok(LoginRequest {
            email: draft::required_text("email", &self.email)?,
            password: required_password(&self.password)?,
        })
    }

    pub fn to_register(&self) -> DomainResult<RegisterRequest> {
        Ok(RegisterRequest {
            email: draft::required_text("email", &self.email)?,
            password: required_password(&self.password)?,
            full_name: draft::required_text("full_name", &self.full_name)?,
            partner_name: draft::optional_text(&self.partner_name),
            wedding_date: draft::optional_date("wedding_date", &self.wedding_date)?,
        })
    }
}

// Passwords are sent verbatim; only emptiness is checked.
fn required_password(value: &str) -> DomainResult<String> {
    if value.is_empty() {
        Err(super::entity::DomainError::MissingField("password"))
    } else {
        Ok(value.to_string())
    }
}
