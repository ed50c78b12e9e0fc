//! Разбор готовой записи по строкам для предпросмотра.

use crate::model::{LineInfo, LineKind};

pub fn analyze(record: &str) -> Vec<LineInfo> {
    record
        .split('\n')
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(idx, line)| LineInfo {
            number: idx + 1,
            kind: classify(line),
            length: line.chars().count(),
            content: line.to_string(),
        })
        .collect()
}

/// Тип регистра — три символа начиная со смещения 8.
pub fn classify(line: &str) -> LineKind {
    let tp_reg: String = line.chars().skip(8).take(3).collect();
    match tp_reg.as_str() {
        "581" => LineKind::Header,
        "998" => LineKind::Hash,
        _ => LineKind::Unknown,
    }
}
