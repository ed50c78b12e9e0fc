//! Позиционная раскладка регистра 581: таблица полей и сборщик строки.
//!
//! Разделителей нет, потребители режут строку по смещениям, поэтому
//! порядок, ширина и символ заполнения каждого поля фиксированы.

use crate::{
    encode::{cents_digits, to_fixed_date},
    model::Document,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Значение слева, заполнение справа.
    Left,
    /// Заполнение слева, значение справа.
    Right,
}

#[derive(Clone, Copy)]
pub enum Source {
    Literal(&'static str),
    /// Дата формирования записи (AAAAMMDD).
    EmissionDate,
    Text(fn(&Document) -> &str),
    Code(fn(&Document) -> char),
    /// Сумма в центах; `None` даёт поле из пробелов.
    Cents(fn(&Document) -> Option<Decimal>),
}

#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: usize,
    pub pad: char,
    pub align: Align,
    pub source: Source,
}

const fn spec(name: &'static str, width: usize, pad: char, align: Align, source: Source) -> FieldSpec {
    FieldSpec {
        name,
        width,
        pad,
        align,
        source,
    }
}

pub const HEADER_LEN: usize = 197;
pub const TRAILER_LEN: usize = 43;

pub const HEADER_581: &[FieldSpec] = &[
    spec("SEQUENCIA", 8, '0', Align::Right, Source::Literal("00000001")),
    spec("TP_REG", 3, ' ', Align::Left, Source::Literal("581")),
    spec("CD_UNI_DES", 4, '0', Align::Right, Source::Text(|d| d.cd_uni_des.as_str())),
    spec("CD_UNI_ORI", 4, '0', Align::Right, Source::Text(|d| d.cd_uni_ori.as_str())),
    spec("DT_GERACAO", 8, ' ', Align::Left, Source::EmissionDate),
    spec("NR_COMP", 4, ' ', Align::Right, Source::Text(|d| d.nr_comp.as_str())),
    spec("FILLER", 11, ' ', Align::Left, Source::Literal("")),
    spec("DT_VEN_DOC", 8, ' ', Align::Left, Source::Text(|d| d.dt_ven_doc.as_str())),
    spec("DT_EMISSAO", 8, ' ', Align::Left, Source::EmissionDate),
    spec("VL_TOT_DOC", 14, '0', Align::Right, Source::Cents(|d| Some(d.vl_tot_doc))),
    spec("LITERAL_09", 2, ' ', Align::Left, Source::Literal("09")),
    spec("VL_IR", 14, '0', Align::Right, Source::Cents(|d| Some(d.vl_ir))),
    spec("NR_DOCUMENTO", 20, ' ', Align::Left, Source::Text(|d| d.nr_documento.as_str())),
    spec("DOC_FISCAL", 20, ' ', Align::Left, Source::Text(|d| d.doc_fiscal.as_str())),
    spec("TP_DOC_A580", 1, ' ', Align::Left, Source::Text(|d| d.tp_doc_a580.as_str())),
    spec("ID_COBRANCA", 2, '0', Align::Right, Source::Text(|d| d.id_cobranca.as_str())),
    spec("TIPO_PTU", 1, ' ', Align::Left, Source::Code(|d| d.tipo_ptu.code())),
    spec("NR_DOC_COB", 20, ' ', Align::Left, Source::Text(|d| d.nr_doc_cob.as_str())),
    // Выравнивание вправо повторяет то, что уже читают потребители; для
    // текстового номера это похоже на ошибку, но менять смещения нельзя.
    spec("NR_NDC", 11, ' ', Align::Right, Source::Text(|d| d.nr_ndc.as_str())),
    spec("NR_ORIG_COB", 20, ' ', Align::Left, Source::Text(|d| d.nr_orig_cob.as_str())),
    spec("VAL_PAGO", 14, '0', Align::Right, Source::Cents(|d| d.val_pago)),
];

/// Дополняет значение до `width` и оставляет первые `width` символов.
pub fn fit(value: &str, width: usize, pad: char, align: Align) -> String {
    let len = value.chars().count();
    let filler: String = std::iter::repeat(pad).take(width.saturating_sub(len)).collect();
    let padded = match align {
        Align::Left => format!("{value}{filler}"),
        Align::Right => format!("{filler}{value}"),
    };
    padded.chars().take(width).collect()
}

pub fn build_line(layout: &[FieldSpec], doc: &Document, emitted: NaiveDate) -> String {
    let mut line = String::with_capacity(line_width(layout));
    for f in layout {
        let value: Cow<'_, str> = match f.source {
            Source::Literal(s) => Cow::Borrowed(s),
            Source::EmissionDate => Cow::Owned(to_fixed_date(emitted)),
            Source::Text(get) => Cow::Borrowed(get(doc)),
            Source::Code(get) => Cow::Owned(get(doc).to_string()),
            Source::Cents(get) => match get(doc).and_then(cents_digits) {
                Some(digits) => Cow::Owned(digits),
                None => {
                    line.push_str(&" ".repeat(f.width));
                    continue;
                }
            },
        };
        line.push_str(&fit(&value, f.width, f.pad, f.align));
    }
    line
}

pub fn line_width(layout: &[FieldSpec]) -> usize {
    layout.iter().map(|f| f.width).sum()
}

/// Смещение поля в строке (0-based), если оно есть в раскладке.
pub fn offset_of(layout: &[FieldSpec], name: &str) -> Option<usize> {
    let idx = layout.iter().position(|f| f.name == name)?;
    Some(layout[..idx].iter().map(|f| f.width).sum())
}
