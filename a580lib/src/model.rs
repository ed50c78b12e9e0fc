//! Доменные модели: сырой набор полей, типизированный документ и строки анализа.

use crate::{
    error::{A580Error, Result},
    numeric::{parse_amount, present},
    validate::validate,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Сырой набор полей одного документа, как его прислал вызывающий.
pub type FieldMap = BTreeMap<String, String>;

pub const CD_UNI_DES: &str = "CD_UNI_DES";
pub const CD_UNI_ORI: &str = "CD_UNI_ORI";
pub const NR_COMP: &str = "NR_COMP";
pub const DT_VEN_DOC: &str = "DT_VEN_DOC";
pub const VL_TOT_DOC: &str = "VL_TOT_DOC";
pub const NR_DOCUMENTO: &str = "NR_DOCUMENTO";
pub const TP_DOC_A580: &str = "TP_DOC_A580";
pub const ID_COBRANCA: &str = "ID_COBRANCA";
pub const TIPO_PTU: &str = "TIPO_PTU";
pub const NR_DOC_COB: &str = "NR_DOC_COB";
pub const NR_NDC: &str = "NR_NDC";
pub const NR_ORIG_COB: &str = "NR_ORIG_COB";
pub const VAL_PAGO: &str = "VAL_PAGO";
pub const VL_IR: &str = "VL_IR";
pub const DOC_FISCAL: &str = "DOC_FISCAL";

/// Значение поля; пустое после trim считается отсутствующим.
pub fn field<'a>(fields: &'a FieldMap, name: &str) -> Option<&'a str> {
    present(raw(fields, name))
}

/// Значение поля как есть; отсутствует только пустая строка. Пробелы — значение.
pub fn raw<'a>(fields: &'a FieldMap, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TipoPtu {
    #[default]
    Blank,
    /// Документ с номером документа cobrança.
    One,
    /// Нота дебита/кредита (NDC).
    Two,
}

impl TipoPtu {
    pub fn parse(raw: Option<&str>) -> Option<TipoPtu> {
        match raw {
            None => Some(TipoPtu::Blank),
            Some("1") => Some(TipoPtu::One),
            Some("2") => Some(TipoPtu::Two),
            Some(_) => None,
        }
    }

    /// Символ для позиции TIPO_PTU в записи.
    pub fn code(self) -> char {
        match self {
            TipoPtu::Blank => ' ',
            TipoPtu::One => '1',
            TipoPtu::Two => '2',
        }
    }
}

/// Проверенный документ, готовый к кодированию.
///
/// Строки хранятся как пришли (без trim): раскладка записи работает с
/// исходными значениями. `val_pago` из одних пробелов даёт ноль, а не `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub cd_uni_des: String,
    pub cd_uni_ori: String,
    pub nr_comp: String,
    pub dt_ven_doc: String,
    pub vl_tot_doc: Decimal,
    pub vl_ir: Decimal,
    pub nr_documento: String,
    pub doc_fiscal: String,
    pub tp_doc_a580: String,
    pub id_cobranca: String,
    pub tipo_ptu: TipoPtu,
    pub nr_doc_cob: String,
    pub nr_ndc: String,
    pub nr_orig_cob: String,
    pub val_pago: Option<Decimal>,
}

impl Document {
    /// Проверка и разбор за один шаг: либо документ, либо полный список ошибок.
    pub fn from_fields(fields: &FieldMap) -> Result<Document> {
        let errors = validate(fields);
        if !errors.is_empty() {
            return Err(A580Error::Validation(errors));
        }

        let text = |name: &str| raw(fields, name).unwrap_or_default().to_string();
        let tipo_ptu = TipoPtu::parse(field(fields, TIPO_PTU))
            .ok_or_else(|| A580Error::Parse(format!("{TIPO_PTU}: unexpected value")))?;

        Ok(Document {
            cd_uni_des: text(CD_UNI_DES),
            cd_uni_ori: text(CD_UNI_ORI),
            nr_comp: text(NR_COMP),
            dt_ven_doc: text(DT_VEN_DOC),
            vl_tot_doc: parse_amount(&text(VL_TOT_DOC)),
            vl_ir: raw(fields, VL_IR).map(parse_amount).unwrap_or(Decimal::ZERO),
            nr_documento: text(NR_DOCUMENTO),
            doc_fiscal: text(DOC_FISCAL),
            tp_doc_a580: text(TP_DOC_A580),
            id_cobranca: text(ID_COBRANCA),
            tipo_ptu,
            nr_doc_cob: text(NR_DOC_COB),
            nr_ndc: text(NR_NDC),
            nr_orig_cob: text(NR_ORIG_COB),
            val_pago: raw(fields, VAL_PAGO).map(parse_amount),
        })
    }
}

/// Классификация строки записи по типу регистра (позиции 8..11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Hash,
    Unknown,
}

impl LineKind {
    pub fn label(self) -> &'static str {
        match self {
            LineKind::Header => "R581 - HEADER",
            LineKind::Hash => "R998 - HASH",
            LineKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for LineKind {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(self.label())
    }
}

/// Одна строка в разборе записи для предпросмотра.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineInfo {
    #[serde(rename = "numero")]
    pub number: usize,
    #[serde(rename = "tipo")]
    pub kind: LineKind,
    #[serde(rename = "tamanho")]
    pub length: usize,
    #[serde(rename = "conteudo")]
    pub content: String,
}
