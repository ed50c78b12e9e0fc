//! Проверка набора полей перед кодированием.
//!
//! Все проверки независимы и выполняются в фиксированном порядке; порядок
//! сообщений стабилен. Пустой список означает, что набор можно кодировать.

use crate::{
    encode::cents_digits,
    model::*,
    numeric::{is_numeric, parse_amount, parse_int_prefix, parse_number},
};
use rust_decimal::Decimal;
use tracing::debug;

pub const AMOUNT_WIDTH: usize = 14;

/// Коды и обязательные «флаги» проверяются по сырому значению: строка из
/// пробелов считается заполненной. Номера документов и AAMM — после trim.
pub fn validate(fields: &FieldMap) -> Vec<String> {
    let mut errors = Vec::new();
    let mut check = |ok: bool, message: &str| {
        if !ok {
            errors.push(message.to_string());
        }
    };

    let tipo_ptu = field(fields, TIPO_PTU);
    let ptu_one = tipo_ptu == Some("1");
    let ptu_two = tipo_ptu == Some("2");

    check(
        is_numeric(raw(fields, CD_UNI_DES)),
        "Código Unimed Destino deve ser numérico",
    );
    check(
        is_numeric(raw(fields, CD_UNI_ORI)),
        "Código Unimed Origem deve ser numérico",
    );
    check(
        is_competencia(field(fields, NR_COMP)),
        "Competência (AAMM) é obrigatória e deve ter 4 dígitos numéricos",
    );
    check(
        is_valid_yyyymmdd(field(fields, DT_VEN_DOC)),
        "Data Vencimento inválida (formato AAAAMMDD)",
    );
    check(
        field(fields, VL_TOT_DOC)
            .is_some_and(|v| parse_number(v).is_ok() && parse_amount(v) > Decimal::ZERO),
        "Valor Total deve ser numérico e maior que zero",
    );
    check(
        field(fields, NR_DOCUMENTO).is_some(),
        "Número do Documento é obrigatório",
    );
    check(
        raw(fields, TP_DOC_A580).is_some(),
        "Tipo de Documento é obrigatório",
    );
    check(raw(fields, ID_COBRANCA).is_some(), "ID Cobrança é obrigatório");

    check(
        !ptu_one || field(fields, NR_DOC_COB).is_some(),
        "Número Doc. Cobrança obrigatório quando Tipo PTU = 1",
    );
    check(
        !ptu_two || field(fields, NR_NDC).is_some(),
        "Número NDC obrigatório quando Tipo PTU = 2",
    );
    check(
        !ptu_two || field(fields, NR_ORIG_COB).is_some(),
        "Número Orig. Cobrança obrigatório quando Tipo PTU = 2",
    );
    check(
        !(ptu_one || ptu_two) || raw(fields, VAL_PAGO).is_some(),
        "Valor Pago obrigatório quando Tipo PTU = 1 ou 2",
    );

    // Ширина позиций: без этих проверок строка 581 может «поехать».
    check(
        fits(raw(fields, CD_UNI_DES), 4),
        "Código Unimed Destino deve ter no máximo 4 dígitos",
    );
    check(
        fits(raw(fields, CD_UNI_ORI), 4),
        "Código Unimed Origem deve ter no máximo 4 dígitos",
    );
    check(
        amount_fits(field(fields, VL_TOT_DOC)),
        "Valor Total excede 14 dígitos",
    );
    check(amount_fits(raw(fields, VL_IR)), "Valor IR excede 14 dígitos");
    check(
        raw(fields, TP_DOC_A580).is_none_or(|v| v.chars().count() == 1),
        "Tipo de Documento deve ter 1 caractere",
    );
    check(
        fits(raw(fields, ID_COBRANCA), 2),
        "ID Cobrança deve ter no máximo 2 caracteres",
    );
    check(
        TipoPtu::parse(tipo_ptu).is_some(),
        "Tipo PTU deve ser vazio, 1 ou 2",
    );
    check(
        amount_fits(raw(fields, VAL_PAGO)),
        "Valor Pago excede 14 dígitos",
    );

    debug!(errors = errors.len(), "validated field set");
    errors
}

/// AAMM: ровно 4 символа после trim, всё значение числовое.
fn is_competencia(raw: Option<&str>) -> bool {
    raw.map(str::trim)
        .is_some_and(|v| v.chars().count() == 4 && parse_number(v).is_ok())
}

/// Структурная проверка AAAAMMDD. Длина месяца не проверяется: 20250231 проходит.
pub fn is_valid_yyyymmdd(raw: Option<&str>) -> bool {
    let Some(v) = raw else {
        return false;
    };
    if v.chars().count() != 8 || parse_number(v).is_err() {
        return false;
    }
    let part = |start: usize, len: usize| {
        let s: String = v.chars().skip(start).take(len).collect();
        parse_int_prefix(&s)
    };
    match (part(0, 4), part(4, 2), part(6, 2)) {
        (Some(year), Some(month), Some(day)) => {
            (1900..=2100).contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day)
        }
        _ => false,
    }
}

fn fits(raw: Option<&str>, width: usize) -> bool {
    raw.is_none_or(|v| v.chars().count() <= width)
}

fn amount_fits(raw: Option<&str>) -> bool {
    raw.is_none_or(|v| cents_digits(parse_amount(v)).is_some_and(|d| d.len() <= AMOUNT_WIDTH))
}
