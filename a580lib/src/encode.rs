//! Кодирование документа в двухстрочную запись A580: регистр 581 и хеш-трейлер 998.

use crate::{
    error::Result,
    layout::{build_line, fit, Align, HEADER_581},
    model::{Document, FieldMap},
    numeric::parse_amount,
};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

pub const TRAILER_PREFIX: &str = "00000002998";
pub const DIGEST_WIDTH: usize = 32;

/// Сумма в целых центах без знака; `None`, если умножение переполняется.
/// Половина цента округляется от нуля: 1.005 -> 101.
pub fn cents_digits(value: Decimal) -> Option<String> {
    let cents = value
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .abs()
        .normalize();
    Some(cents.to_string())
}

/// Центы, дополненные нулями слева до `width`. Нечисловой вход даёт ноль.
pub fn to_fixed_cents(value: &str, width: usize) -> String {
    let digits = cents_digits(parse_amount(value)).unwrap_or_else(|| "0".to_string());
    if digits.len() >= width {
        return digits;
    }
    format!("{digits:0>width$}")
}

pub fn to_fixed_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Трейлер 998: префикс и MD5 строки 581 в нижнем регистре.
pub fn hash_trailer(header: &str) -> String {
    let digest = format!("{:x}", md5::compute(header.as_bytes()));
    format!(
        "{TRAILER_PREFIX}{}",
        fit(&digest, DIGEST_WIDTH, ' ', Align::Left)
    )
}

impl Document {
    /// Запись целиком. Обе даты формирования берутся из `emitted`.
    pub fn encode(&self, emitted: NaiveDate) -> String {
        let header = build_line(HEADER_581, self, emitted);
        let trailer = hash_trailer(&header);
        debug!(
            header_len = header.chars().count(),
            trailer_len = trailer.len(),
            "encoded A580 record"
        );
        format!("{header}\n{trailer}")
    }
}

/// Проверяет набор полей и кодирует его; ошибки проверки возвращаются списком.
pub fn encode(fields: &FieldMap, emitted: NaiveDate) -> Result<String> {
    let doc = Document::from_fields(fields)?;
    Ok(doc.encode(emitted))
}
