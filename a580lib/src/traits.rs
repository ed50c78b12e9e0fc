//! Унифицированный трэйт чтения наборов полей на основе std::io::BufRead.

use crate::{error::Result, model::FieldMap};
use std::io::BufRead;

pub trait ReadFields {
    /// Все наборы полей из источника, в порядке следования.
    fn read<R: BufRead>(r: R) -> Result<Vec<FieldMap>>;
}
