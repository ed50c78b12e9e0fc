use a580lib::{model::FieldMap, validate};

fn fields(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn valid() -> FieldMap {
    fields(&[
        ("CD_UNI_DES", "64"),
        ("CD_UNI_ORI", "988"),
        ("NR_COMP", "2501"),
        ("DT_VEN_DOC", "20250115"),
        ("VL_TOT_DOC", "150.50"),
        ("NR_DOCUMENTO", "999999"),
        ("TP_DOC_A580", "1"),
        ("ID_COBRANCA", "5"),
    ])
}

#[test]
fn valid_set_has_no_errors() {
    assert!(validate(&valid()).is_empty());
}

#[test]
fn empty_set_reports_required_fields_in_order() {
    let errors = validate(&FieldMap::new());
    assert_eq!(
        errors,
        vec![
            "Código Unimed Destino deve ser numérico",
            "Código Unimed Origem deve ser numérico",
            "Competência (AAMM) é obrigatória e deve ter 4 dígitos numéricos",
            "Data Vencimento inválida (formato AAAAMMDD)",
            "Valor Total deve ser numérico e maior que zero",
            "Número do Documento é obrigatório",
            "Tipo de Documento é obrigatório",
            "ID Cobrança é obrigatório",
        ]
    );
}

#[test]
fn each_missing_field_reports_its_own_message() {
    let cases = [
        ("CD_UNI_DES", "Código Unimed Destino deve ser numérico"),
        ("CD_UNI_ORI", "Código Unimed Origem deve ser numérico"),
        ("NR_COMP", "Competência (AAMM) é obrigatória e deve ter 4 dígitos numéricos"),
        ("DT_VEN_DOC", "Data Vencimento inválida (formato AAAAMMDD)"),
        ("VL_TOT_DOC", "Valor Total deve ser numérico e maior que zero"),
        ("NR_DOCUMENTO", "Número do Documento é obrigatório"),
        ("TP_DOC_A580", "Tipo de Documento é obrigatório"),
        ("ID_COBRANCA", "ID Cobrança é obrigatório"),
    ];
    for (key, message) in cases {
        let mut f = valid();
        f.remove(key);
        assert_eq!(validate(&f), vec![message.to_string()], "missing {key}");
    }
}

#[test]
fn non_numeric_and_non_positive_values() {
    let mut f = valid();
    f.insert("CD_UNI_DES".into(), "6a".into());
    f.insert("VL_TOT_DOC".into(), "0".into());
    assert_eq!(
        validate(&f),
        vec![
            "Código Unimed Destino deve ser numérico",
            "Valor Total deve ser numérico e maior que zero",
        ]
    );

    f.insert("CD_UNI_DES".into(), "64".into());
    f.insert("VL_TOT_DOC".into(), "-10".into());
    assert_eq!(validate(&f).len(), 1);

    f.insert("VL_TOT_DOC".into(), "10,50".into());
    assert_eq!(validate(&f).len(), 1);
}

#[test]
fn blank_document_number_is_missing() {
    let mut f = valid();
    f.insert("NR_DOCUMENTO".into(), "   ".into());
    assert_eq!(validate(&f), vec!["Número do Documento é obrigatório"]);
}

#[test]
fn competencia_must_have_four_digits() {
    for bad in ["250", "25011", "25a1", ""] {
        let mut f = valid();
        f.insert("NR_COMP".into(), bad.into());
        assert_eq!(
            validate(&f),
            vec!["Competência (AAMM) é obrigatória e deve ter 4 dígitos numéricos"],
            "NR_COMP={bad:?}"
        );
    }
}

#[test]
fn due_date_structure_only() {
    let mut f = valid();
    f.insert("DT_VEN_DOC".into(), "20250230".into());
    assert!(validate(&f).is_empty());

    for bad in ["2025-01-15", "18991231", "20251301", "20250132", "2025011"] {
        f.insert("DT_VEN_DOC".into(), bad.into());
        assert_eq!(
            validate(&f),
            vec!["Data Vencimento inválida (formato AAAAMMDD)"],
            "DT_VEN_DOC={bad}"
        );
    }
}

#[test]
fn tipo_ptu_one_requires_doc_cob_and_paid_value() {
    let mut f = valid();
    f.insert("TIPO_PTU".into(), "1".into());
    assert_eq!(
        validate(&f),
        vec![
            "Número Doc. Cobrança obrigatório quando Tipo PTU = 1",
            "Valor Pago obrigatório quando Tipo PTU = 1 ou 2",
        ]
    );

    f.insert("NR_DOC_COB".into(), "COB-1".into());
    f.insert("VAL_PAGO".into(), "10".into());
    assert!(validate(&f).is_empty());
}

#[test]
fn tipo_ptu_two_requires_ndc_fields() {
    let mut f = valid();
    f.insert("TIPO_PTU".into(), "2".into());
    f.insert("NR_NDC".into(), " ".into());
    assert_eq!(
        validate(&f),
        vec![
            "Número NDC obrigatório quando Tipo PTU = 2",
            "Número Orig. Cobrança obrigatório quando Tipo PTU = 2",
            "Valor Pago obrigatório quando Tipo PTU = 1 ou 2",
        ]
    );
}

#[test]
fn conditional_fields_ignored_without_tipo_ptu() {
    let mut f = valid();
    f.insert("TIPO_PTU".into(), "".into());
    f.insert("NR_NDC".into(), "".into());
    assert!(validate(&f).is_empty());
}

#[test]
fn width_checks_follow_required_checks() {
    let mut f = valid();
    f.remove("NR_DOCUMENTO");
    f.insert("CD_UNI_DES".into(), "12345".into());
    f.insert("TP_DOC_A580".into(), "12".into());
    f.insert("ID_COBRANCA".into(), "123".into());
    f.insert("TIPO_PTU".into(), "3".into());
    f.insert("VL_IR".into(), "1000000000000".into());
    assert_eq!(
        validate(&f),
        vec![
            "Número do Documento é obrigatório",
            "Código Unimed Destino deve ter no máximo 4 dígitos",
            "Valor IR excede 14 dígitos",
            "Tipo de Documento deve ter 1 caractere",
            "ID Cobrança deve ter no máximo 2 caracteres",
            "Tipo PTU deve ser vazio, 1 ou 2",
        ]
    );
}

#[test]
fn largest_amount_that_fits() {
    let mut f = valid();
    f.insert("VL_TOT_DOC".into(), "999999999999.99".into());
    assert!(validate(&f).is_empty());

    f.insert("VL_TOT_DOC".into(), "1000000000000".into());
    assert_eq!(validate(&f), vec!["Valor Total excede 14 dígitos"]);
}

#[test]
fn validation_does_not_touch_input() {
    let f = valid();
    let before = f.clone();
    let _ = validate(&f);
    assert_eq!(f, before);
}

#[test]
fn whitespace_counts_as_filled_for_flag_fields() {
    let mut f = valid();
    f.insert("TP_DOC_A580".into(), " ".into());
    assert!(validate(&f).is_empty());

    let mut f = valid();
    f.insert("ID_COBRANCA".into(), " ".into());
    assert!(validate(&f).is_empty());

    let mut f = valid();
    f.insert("CD_UNI_DES".into(), "  ".into());
    f.insert("CD_UNI_ORI".into(), " ".into());
    assert!(validate(&f).is_empty());
}

#[test]
fn whitespace_paid_value_satisfies_tipo_ptu() {
    let mut f = valid();
    f.insert("TIPO_PTU".into(), "1".into());
    f.insert("NR_DOC_COB".into(), "X".into());
    f.insert("VAL_PAGO".into(), " ".into());
    assert!(validate(&f).is_empty());

    f.insert("VAL_PAGO".into(), "".into());
    assert_eq!(validate(&f), vec!["Valor Pago obrigatório quando Tipo PTU = 1 ou 2"]);
}

#[test]
fn empty_flag_fields_are_still_missing() {
    let mut f = valid();
    f.insert("TP_DOC_A580".into(), "".into());
    f.insert("ID_COBRANCA".into(), "".into());
    f.insert("CD_UNI_DES".into(), "".into());
    assert_eq!(
        validate(&f),
        vec![
            "Código Unimed Destino deve ser numérico",
            "Tipo de Documento é obrigatório",
            "ID Cobrança é obrigatório",
        ]
    );
}

#[test]
fn huge_exponent_amounts_validate_quickly() {
    let mut f = valid();
    f.insert("VL_IR".into(), "0e2147483647".into());
    f.insert("VL_TOT_DOC".into(), "1e2147483647".into());
    assert_eq!(validate(&f), vec!["Valor Total deve ser numérico e maior que zero"]);
}
