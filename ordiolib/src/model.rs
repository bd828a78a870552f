//! The order record and the helpers shared by every format.

use crate::error::{OrdioError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One order. Field order here is the field order of every written file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "Id")]
    pub id: i32,
    #[serde(alias = "Client")]
    pub client: String,
    #[serde(alias = "OrderDate", with = "date_format")]
    pub order_date: NaiveDate,
    #[serde(alias = "Amount", with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    #[serde(alias = "Status")]
    pub status: String,
}

impl Order {
    pub fn new(
        id: i32,
        client: impl Into<String>,
        order_date: NaiveDate,
        amount: Decimal,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            client: client.into(),
            order_date,
            amount,
            status: status.into(),
        }
    }

    /// Applies every field present in `patch`. The id is never touched.
    pub fn apply(&mut self, patch: &OrderPatch) {
        if let Some(client) = &patch.client {
            self.client = client.clone();
        }
        if let Some(date) = patch.order_date {
            self.order_date = date;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(status) = &patch.status {
            self.status = status.clone();
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Client: {}, Date: {}, Amount: {:.2}, Status: {}",
            self.id,
            self.client,
            self.order_date.format(DATE_FORMAT),
            self.amount,
            self.status
        )
    }
}

/// New values for an existing order; `None` keeps the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderPatch {
    pub client: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub status: Option<String>,
}

impl OrderPatch {
    /// Builds a patch from raw answers, treating blank input as "keep".
    pub fn from_input(client: &str, order_date: &str, amount: &str, status: &str) -> Result<Self> {
        Ok(Self {
            client: non_blank(client).map(str::to_string),
            order_date: non_blank(order_date).map(parse_date).transpose()?,
            amount: non_blank(amount).map(parse_amount).transpose()?,
            status: non_blank(status).map(str::to_string),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.client.is_none()
            && self.order_date.is_none()
            && self.amount.is_none()
            && self.status.is_none()
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Accepts `yyyy-MM-dd`, or a date-time whose date part is kept
/// (`2024-01-05T00:00:00`, RFC 3339).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| OrdioError::Parse(format!("invalid date {s:?}")))
}

pub fn parse_amount(s: &str) -> Result<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|e| OrdioError::Parse(format!("invalid amount {s:?}: {e}")))
}

pub fn parse_id(s: &str) -> Result<i32> {
    let s = s.trim();
    s.parse()
        .map_err(|e| OrdioError::Parse(format!("invalid id {s:?}: {e}")))
}

/// serde adapter: writes `yyyy-MM-dd`, reads anything `parse_date` accepts.
pub(crate) mod date_format {
    use super::{parse_date, DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_date(&raw).map_err(de::Error::custom)
    }
}
