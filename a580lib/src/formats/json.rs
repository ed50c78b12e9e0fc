//! JSON: объект документа или массив объектов; значения — строки или числа.

use crate::{
    error::{A580Error, Result},
    model::FieldMap,
    traits::ReadFields,
};
use serde_json::{Map, Value};
use std::io::BufRead;

pub struct Json;

impl ReadFields for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<FieldMap>> {
        let value: Value = serde_json::from_reader(r)?;
        match value {
            Value::Object(obj) => Ok(vec![to_fields(obj)?]),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(obj) => to_fields(obj),
                    other => Err(A580Error::Parse(format!("expected object, got {other}"))),
                })
                .collect(),
            other => Err(A580Error::Parse(format!(
                "expected object or array, got {other}"
            ))),
        }
    }
}

fn to_fields(obj: Map<String, Value>) -> Result<FieldMap> {
    let mut fields = FieldMap::new();
    for (key, value) in obj {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(A580Error::Parse(format!("{key}: unsupported value {other}")));
            }
        };
        fields.insert(key, text);
    }
    Ok(fields)
}
