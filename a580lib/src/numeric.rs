//! Разбор чисел из «сырых» строковых полей.
//!
//! Два режима: строгая проверка всего значения ([`parse_number`]) и
//! снисходительный разбор денежной суммы по префиксу ([`parse_amount`]),
//! который никогда не падает и возвращает ноль на мусоре.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Причина, по которой значение не принято.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// Поле отсутствует или пустое после trim.
    Absent,
    NotNumeric,
}

pub type ParseResult<T> = std::result::Result<T, ParseFailure>;

static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").expect("decimal literal regex")
});

static RADIX_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$").expect("radix literal regex")
});

static DECIMAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("decimal prefix regex")
});

/// Значение поля, если оно есть и не пустое после trim.
pub fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.trim().is_empty())
}

/// Строгий разбор: всё значение (после trim) должно быть числовым литералом.
pub fn parse_number(raw: &str) -> ParseResult<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ParseFailure::Absent);
    }
    if DECIMAL_LITERAL.is_match(s) {
        return s
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(ParseFailure::NotNumeric);
    }
    if RADIX_LITERAL.is_match(s) {
        let radix = match s.as_bytes()[1] {
            b'x' | b'X' => 16,
            b'o' | b'O' => 8,
            _ => 2,
        };
        return u64::from_str_radix(&s[2..], radix)
            .map(|v| v as f64)
            .map_err(|_| ParseFailure::NotNumeric);
    }
    Err(ParseFailure::NotNumeric)
}

/// Непустое значение, числовое целиком; строка из одних пробелов читается как ноль.
pub fn is_numeric(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| {
        !v.is_empty() && matches!(parse_number(v), Ok(_) | Err(ParseFailure::Absent))
    })
}

/// Денежная сумма по самому длинному числовому префиксу; ноль, если префикса нет.
pub fn parse_amount(raw: &str) -> Decimal {
    DECIMAL_PREFIX
        .find(raw.trim_start())
        .and_then(|m| decimal_from_literal(m.as_str()))
        .unwrap_or(Decimal::ZERO)
}

/// Целое по префиксу: пробелы, знак, цифры. `None`, если цифр нет.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

const MAX_SCALE: i64 = 28;

fn decimal_from_literal(lit: &str) -> Option<Decimal> {
    let (mantissa, exponent) = match lit.find(['e', 'E']) {
        Some(pos) => (&lit[..pos], lit[pos + 1..].parse::<i32>().ok()?),
        None => (lit, 0),
    };

    let (negative, digits) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };
    let digits = digits.strip_suffix('.').unwrap_or(digits);
    let digits = if digits.starts_with('.') {
        format!("0{digits}")
    } else {
        digits.to_string()
    };

    let parsed = Decimal::from_str(&digits).ok()?;
    if parsed.is_zero() {
        return Some(Decimal::ZERO);
    }

    // Порядок переносится в масштаб: mantissa * 10^-scale.
    let mantissa = parsed.mantissa();
    let scale = i64::from(parsed.scale()) - i64::from(exponent);
    let value = if scale < 0 {
        // Ненулевая мантисса уже при 10^29 выходит за пределы Decimal.
        if scale < -MAX_SCALE {
            return None;
        }
        Decimal::try_from_i128_with_scale(mantissa, 0)
            .ok()?
            .checked_mul(Decimal::from_i128_with_scale(10i128.pow(scale.unsigned_abs() as u32), 0))?
    } else if scale <= MAX_SCALE {
        Decimal::try_from_i128_with_scale(mantissa, scale as u32).ok()?
    } else {
        // Лишние знаки после 28-го отбрасываются.
        let excess = scale - MAX_SCALE;
        if excess > 38 {
            return Some(Decimal::ZERO);
        }
        Decimal::try_from_i128_with_scale(mantissa / 10i128.pow(excess as u32), MAX_SCALE as u32)
            .ok()?
    };
    Some(if negative { -value } else { value })
}
