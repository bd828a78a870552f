//! ordiolib — order records persisted as JSON, XML or CSV files.

pub mod convert;
pub mod error;
pub mod error_log;
pub mod model;
pub mod store;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod json;
    pub mod xml;
}

pub use convert::FileFormat;
pub use error::{OrdioError, Result};
pub use model::{Order, OrderPatch};
pub use store::{OrderStore, SaveOutcome, SortKey};
