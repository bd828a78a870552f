//! Serialized order list:
//! <ArrayOfOrder><Order><Id/><Client/><OrderDate/><Amount/><Status/></Order>...</ArrayOfOrder>
//!
//! Same shape the .NET XmlSerializer produces for a list of orders, so its
//! files (declaration, xmlns attributes, date-times) read back unchanged.
//! Text content is kept as written, edge whitespace included.

use crate::{
    error::{OrdioError, Result},
    model::{parse_date, Order},
};
use quick_xml::de::from_reader;
use quick_xml::se::Serializer;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

// xs:dateTime at midnight, as the legacy serializer writes a date.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT00:00:00";

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct XmlOrder {
    id: i32,
    #[serde(default)]
    client: String,
    order_date: String,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    #[serde(default)]
    status: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename = "ArrayOfOrder")]
struct XmlOrderList {
    #[serde(rename = "Order", default)]
    orders: Vec<XmlOrder>,
}

pub struct Xml;

impl crate::traits::ReadFormat for Xml {
    fn read<R: BufRead>(r: R) -> Result<Vec<Order>> {
        let x: XmlOrderList = from_reader(r).map_err(|e| OrdioError::Parse(format!("xml: {e}")))?;

        let mut orders = Vec::with_capacity(x.orders.len());
        for o in x.orders {
            orders.push(Order {
                id: o.id,
                client: o.client,
                order_date: parse_date(&o.order_date)?,
                amount: o.amount,
                status: o.status,
            });
        }
        Ok(orders)
    }
}

impl crate::traits::WriteFormat for Xml {
    fn write<W: Write>(mut w: W, orders: &[Order]) -> Result<()> {
        let x = XmlOrderList {
            orders: orders
                .iter()
                .map(|o| XmlOrder {
                    id: o.id,
                    client: o.client.clone(),
                    order_date: o.order_date.format(DATE_TIME_FORMAT).to_string(),
                    amount: o.amount,
                    status: o.status.clone(),
                })
                .collect(),
        };

        let mut body = String::new();
        let mut ser = Serializer::new(&mut body);
        ser.indent(' ', 2);
        x.serialize(ser).map_err(|e| OrdioError::Xml(e.to_string()))?;

        writeln!(w, "{DECLARATION}")?;
        w.write_all(body.as_bytes())?;
        writeln!(w)?;
        Ok(())
    }
}
