//! In-memory order collection and the file operations around it.

use crate::{
    convert::{self, FileFormat},
    error::{OrdioError, Result},
    model::{Order, OrderPatch, DATE_FORMAT},
};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Field an order list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Client,
    Date,
    Amount,
    Status,
}

impl SortKey {
    /// Menu numbering: 1 id, 2 client, 3 date, 4 amount, 5 status.
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Id),
            2 => Some(Self::Client),
            3 => Some(Self::Date),
            4 => Some(Self::Amount),
            5 => Some(Self::Status),
            _ => None,
        }
    }
}

impl FromStr for SortKey {
    type Err = OrdioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "client" => Ok(Self::Client),
            "date" | "orderdate" | "order_date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "status" => Ok(Self::Status),
            other => Err(OrdioError::Parse(format!("unknown sort key {other:?}"))),
        }
    }
}

/// What `save` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SaveOutcome {
    Saved(usize),
    /// The collection was empty; no file was written.
    NothingToSave,
}

#[derive(Debug, Default, Clone)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Replaces the collection with the file's content and returns the
    /// number of orders read. On error the collection is left as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OrdioError::FileNotFound(path.to_path_buf()));
        }
        let format = FileFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        let orders = convert::decode(format, &text)?;

        tracing::debug!(path = %path.display(), %format, count = orders.len(), "orders loaded");
        self.orders = orders;
        Ok(self.orders.len())
    }

    /// Writes the collection to `path`, creating or overwriting it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<SaveOutcome> {
        if self.orders.is_empty() {
            return Ok(SaveOutcome::NothingToSave);
        }
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let text = convert::encode(format, &self.orders)?;
        fs::write(path, text)?;

        tracing::debug!(path = %path.display(), %format, count = self.orders.len(), "orders saved");
        Ok(SaveOutcome::Saved(self.orders.len()))
    }

    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Ascending, stable copy; the stored order is not changed.
    pub fn sorted_by(&self, key: SortKey) -> Vec<Order> {
        let mut sorted = self.orders.clone();
        match key {
            SortKey::Id => sorted.sort_by_key(|o| o.id),
            SortKey::Client => sorted.sort_by(|a, b| a.client.cmp(&b.client)),
            SortKey::Date => sorted.sort_by_key(|o| o.order_date),
            SortKey::Amount => sorted.sort_by_key(|o| o.amount),
            SortKey::Status => sorted.sort_by(|a, b| a.status.cmp(&b.status)),
        }
        sorted
    }

    /// Like `sorted_by`, but an unknown key name yields the current order.
    pub fn sorted_by_name(&self, key: &str) -> Vec<Order> {
        match key.parse::<SortKey>() {
            Ok(key) => self.sorted_by(key),
            Err(_) => self.orders.clone(),
        }
    }

    /// Case-insensitive substring search over every field's text form.
    pub fn search(&self, term: &str) -> Vec<Order> {
        let term = term.to_lowercase();
        self.orders
            .iter()
            .filter(|o| matches(o, &term))
            .cloned()
            .collect()
    }

    /// Appends; ids are not checked for uniqueness.
    pub fn add(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn get(&self, id: i32) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Removes the first order with `id`.
    #[must_use]
    pub fn remove(&mut self, id: i32) -> Option<Order> {
        let pos = self.orders.iter().position(|o| o.id == id)?;
        Some(self.orders.remove(pos))
    }

    /// Applies `patch` to the first order with `id`.
    pub fn edit(&mut self, id: i32, patch: &OrderPatch) -> Option<&Order> {
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        order.apply(patch);
        Some(order)
    }
}

// `term` is already lower-cased.
fn matches(o: &Order, term: &str) -> bool {
    o.id.to_string().contains(term)
        || o.client.to_lowercase().contains(term)
        || o.order_date.format(DATE_FORMAT).to_string().contains(term)
        || o.amount.to_string().contains(term)
        || o.status.to_lowercase().contains(term)
}
