//! Имена выходных файлов.

use crate::{
    layout::{fit, Align},
    model::{FieldMap, CD_UNI_DES, CD_UNI_ORI, NR_DOCUMENTO},
};
use tracing::debug;

/// `F` + последние 7 символов номера документа (или `_`-дополнение слева) + `.988`.
pub fn derive_filename(nr_documento: &str) -> String {
    let doc = nr_documento.trim();
    let len = doc.chars().count();
    let tail: String = if len >= 7 {
        doc.chars().skip(len - 7).collect()
    } else {
        fit(doc, 7, '_', Align::Right)
    };
    format!("F{tail}.988")
}

/// Имя архива, в который упаковывается файл записи.
pub fn derive_archive_name(nr_documento: &str) -> String {
    format!("{}.zip", derive_filename(nr_documento))
}

/// Подсказка имени PDF для внешней системы:
/// `F{CD_UNI_ORI:3}{NR_DOCUMENTO:20}{CD_UNI_DES:3}01.pdf`,
/// например `F988999999______________06401.pdf`.
pub fn derive_suggested_external_name(fields: &FieldMap) -> String {
    let get = |name: &str| fields.get(name).map(String::as_str).unwrap_or_default();
    let uni_ori = zero_pad(get(CD_UNI_ORI), 3);
    let uni_des = zero_pad(get(CD_UNI_DES), 3);
    let nr_doc = fit(get(NR_DOCUMENTO).trim(), 20, '_', Align::Left);

    let name = format!("F{uni_ori}{nr_doc}{uni_des}01.pdf");
    debug!(%name, "suggested external document name");
    name
}

// Только дополнение: длинный код не обрезается.
fn zero_pad(value: &str, width: usize) -> String {
    if value.chars().count() >= width {
        value.to_string()
    } else {
        fit(value, width, '0', Align::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_short_and_long() {
        assert_eq!(derive_filename("0000123"), "F0000123.988");
        assert_eq!(derive_filename("12"), "F_____12.988");
        assert_eq!(derive_filename("  ABC123456789  "), "F3456789.988");
        assert_eq!(derive_filename(""), "F_______.988");
    }

    #[test]
    fn archive_name() {
        assert_eq!(derive_archive_name("999999"), "F_999999.988.zip");
    }

    #[test]
    fn suggested_name() {
        let fields: FieldMap = [
            (CD_UNI_ORI, "988"),
            (CD_UNI_DES, "64"),
            (NR_DOCUMENTO, " 999999 "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(
            derive_suggested_external_name(&fields),
            "F988999999______________06401.pdf"
        );
    }

    #[test]
    fn suggested_name_keeps_long_codes() {
        let fields: FieldMap = [(CD_UNI_ORI, "1234"), (CD_UNI_DES, "5"), (NR_DOCUMENTO, "X")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            derive_suggested_external_name(&fields),
            "F1234X___________________00501.pdf"
        );
    }
}
