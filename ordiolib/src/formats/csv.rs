//! Plain CSV, one order per line:
//! Id,Client,OrderDate,Amount,Status
//!
//! No quoting or escaping in either direction, so a comma inside a value
//! does not survive a round trip.

use crate::{
    error::{OrdioError, Result},
    model::{parse_amount, parse_date, parse_id, Order, DATE_FORMAT},
};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::io::{BufRead, Write};

pub const HEADER: [&str; 5] = ["Id", "Client", "OrderDate", "Amount", "Status"];

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<Order>> {
        // The header line is dropped without looking at it.
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(r);

        let mut orders = Vec::new();
        for rec in rdr.records() {
            let rec = rec.map_err(|e| match e.kind() {
                csv::ErrorKind::Utf8 { .. } => OrdioError::Parse(format!("csv: {e}")),
                _ => OrdioError::Csv(e),
            })?;
            if rec.len() != HEADER.len() {
                tracing::debug!(
                    line = rec.position().map(|p| p.line()),
                    fields = rec.len(),
                    "skipping malformed CSV line"
                );
                continue;
            }
            orders.push(parse_row(&rec)?);
        }
        Ok(orders)
    }
}

fn parse_row(rec: &StringRecord) -> Result<Order> {
    Ok(Order {
        id: parse_id(&rec[0])?,
        client: rec[1].to_string(),
        order_date: parse_date(&rec[2])?,
        amount: parse_amount(&rec[3])?,
        status: rec[4].to_string(),
    })
}

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, orders: &[Order]) -> Result<()> {
        let mut wrt = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut w);

        wrt.write_record(HEADER)?;
        for o in orders {
            wrt.write_record([
                o.id.to_string(),
                o.client.clone(),
                o.order_date.format(DATE_FORMAT).to_string(),
                o.amount.to_string(),
                o.status.clone(),
            ])?;
        }
        wrt.flush()?;
        Ok(())
    }
}
