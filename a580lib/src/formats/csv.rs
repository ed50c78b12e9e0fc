//! CSV: первая строка — имена полей (CD_UNI_DES,CD_UNI_ORI,NR_COMP,...),
//! каждая следующая — один документ. Пустые ячейки считаются отсутствующими.

use crate::{error::Result, model::FieldMap, traits::ReadFields};
use csv::{ReaderBuilder, Trim};
use std::collections::BTreeMap;
use std::io::BufRead;

pub struct Csv;

impl ReadFields for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<FieldMap>> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(r);

        let mut out = Vec::new();
        for rec in rdr.deserialize::<BTreeMap<String, String>>() {
            let row = rec?;
            out.push(row.into_iter().filter(|(_, v)| !v.is_empty()).collect());
        }
        Ok(out)
    }
}
