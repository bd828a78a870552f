//! JSON array of order objects, pretty-printed with two-space indent.
//! `amount` is written as a bare number with its scale kept (`99.50`).

use crate::{
    error::{OrdioError, Result},
    model::Order,
};
use std::io::{BufRead, Write};

pub struct Json;

impl crate::traits::ReadFormat for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<Order>> {
        serde_json::from_reader(r).map_err(|e| match e.classify() {
            serde_json::error::Category::Io => OrdioError::Json(e),
            _ => OrdioError::Parse(format!("json: {e}")),
        })
    }
}

impl crate::traits::WriteFormat for Json {
    fn write<W: Write>(mut w: W, orders: &[Order]) -> Result<()> {
        serde_json::to_writer_pretty(&mut w, orders)?;
        w.write_all(b"\n")?;
        Ok(())
    }
}
