//! Упаковка файла записи в ZIP (Deflate, уровень 9) — так файл уходит потребителям.

use crate::error::Result;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Готовый архив на диске.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    /// `F???????.988.zip`
    pub name: String,
    pub path: PathBuf,
    /// Размер архива в байтах.
    pub size: u64,
}

/// Пишет `<out_dir>/<entry_name>.zip` с единственным файлом `entry_name`.
pub fn write_archive(out_dir: &Path, entry_name: &str, content: &str) -> Result<Archive> {
    let name = format!("{entry_name}.zip");
    let path = out_dir.join(&name);

    let mut zip = ZipWriter::new(File::create(&path)?);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));
    zip.start_file(entry_name, options)?;
    zip.write_all(content.as_bytes())?;
    zip.finish()?;

    let size = fs::metadata(&path)?.len();
    info!(file = %path.display(), bytes = size, "archive written");
    Ok(Archive { name, path, size })
}
