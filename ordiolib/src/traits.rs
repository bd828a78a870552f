//! Uniform read/write traits over std::io::{BufRead, Write}.

use crate::{error::Result, model::Order};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<Order>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, orders: &[Order]) -> Result<()>;
}
