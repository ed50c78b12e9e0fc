use a580lib::{
    analyze, derive_archive_name, derive_filename, derive_suggested_external_name,
    error::{A580Error, Result},
    formats::{csv::Csv, json::Json},
    model::{Document, FieldMap},
    traits::ReadFields,
    validate, write_archive,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "a580", version, about = "Проверка и генерация записей PTU A580")]
struct Cli {
    /// Подробность логов: -v debug, -vv trace (RUST_LOG имеет приоритет)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Input {
    /// Входной файл (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Формат входа
    #[arg(long = "in-format", value_enum, default_value = "csv")]
    in_format: Fmt,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Проверить наборы полей
    Validate {
        #[command(flatten)]
        input: Input,
    },
    /// Показать запись, имена файлов и разбор строк
    Preview {
        #[command(flatten)]
        input: Input,

        /// Дата формирования AAAAMMDD (по умолчанию сегодня)
        #[arg(long = "date")]
        date: Option<String>,
    },
    /// Упаковать записи в архивы F???????.988.zip
    Generate {
        #[command(flatten)]
        input: Input,

        #[arg(long = "date")]
        date: Option<String>,

        /// Каталог для готовых файлов
        #[arg(short = 'o', long = "out-dir", default_value = "arquivos_gerados")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    let mut out = io::stdout().lock();
    let all_ok = match cli.command {
        Command::Validate { input } => run_validate(&read_input(&input)?, &mut out)?,
        Command::Preview { input, date } => {
            run_preview(&read_input(&input)?, emission_date(date.as_deref())?, &mut out)?
        }
        Command::Generate {
            input,
            date,
            out_dir,
        } => run_generate(
            &read_input(&input)?,
            emission_date(date.as_deref())?,
            &out_dir,
            &mut out,
        )?,
    };
    out.flush()?;

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_input(input: &Input) -> Result<Vec<FieldMap>> {
    let reader: Box<dyn io::Read> = match &input.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let sets = match input.in_format {
        Fmt::Csv => Csv::read(br),
        Fmt::Json => Json::read(br),
    }?;
    debug!(count = sets.len(), "read field sets");
    Ok(sets)
}

/// Часы для даты формирования: явная дата из аргумента или локальная сегодняшняя.
fn emission_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y%m%d")
            .map_err(|e| A580Error::Parse(format!("--date {s}: {e}"))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn run_validate<W: Write>(sets: &[FieldMap], out: &mut W) -> Result<bool> {
    let mut all_ok = true;
    for fields in sets {
        let erros = validate(fields);
        all_ok &= erros.is_empty();
        writeln!(out, "{}", json!({ "valido": erros.is_empty(), "erros": erros }))?;
    }
    Ok(all_ok)
}

fn run_preview<W: Write>(sets: &[FieldMap], emitted: NaiveDate, out: &mut W) -> Result<bool> {
    let mut all_ok = true;
    for fields in sets {
        let Some(doc) = accept(fields, out)? else {
            all_ok = false;
            continue;
        };
        let conteudo = doc.encode(emitted);
        let analise = analyze(&conteudo);
        let preview = json!({
            "success": true,
            "nomeArquivo": derive_archive_name(&doc.nr_documento),
            "nomePdfSugerido": derive_suggested_external_name(fields),
            "conteudo": conteudo,
            "analise": analise,
        });
        writeln!(out, "{preview}")?;
    }
    Ok(all_ok)
}

fn run_generate<W: Write>(
    sets: &[FieldMap],
    emitted: NaiveDate,
    out_dir: &Path,
    out: &mut W,
) -> Result<bool> {
    fs::create_dir_all(out_dir)?;

    let mut all_ok = true;
    for fields in sets {
        let Some(doc) = accept(fields, out)? else {
            all_ok = false;
            continue;
        };
        let conteudo = doc.encode(emitted);
        let zip = write_archive(out_dir, &derive_filename(&doc.nr_documento), &conteudo)?;

        info!(archive = %zip.name, bytes = zip.size, "record packaged");
        writeln!(
            out,
            "{}",
            json!({
                "success": true,
                "nomeArquivo": zip.name,
                "caminho": zip.path.display().to_string(),
                "tamanho": zip.size,
            })
        )?;
    }
    Ok(all_ok)
}

/// Документ, если набор полей прошёл проверку; иначе печатает ошибки.
fn accept<W: Write>(fields: &FieldMap, out: &mut W) -> Result<Option<Document>> {
    match Document::from_fields(fields) {
        Ok(doc) => Ok(Some(doc)),
        Err(A580Error::Validation(erros)) => {
            warn!(errors = erros.len(), "field set rejected");
            writeln!(out, "{}", json!({ "success": false, "erros": erros }))?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
