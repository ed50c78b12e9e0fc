use a580lib::{analyze, derive_filename, formats::csv::Csv, model::Document, traits::ReadFields};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: CSV из stdin -> запись A580 и разбор строк в stdout
    let today = chrono::Local::now().date_naive();
    for fields in Csv::read(std::io::BufReader::new(std::io::stdin()))? {
        let doc = Document::from_fields(&fields)?;
        let record = doc.encode(today);
        println!("# {}", derive_filename(&doc.nr_documento));
        println!("{record}");
        for line in analyze(&record) {
            println!("#{} {} ({} chars)", line.number, line.kind, line.length);
        }
    }
    Ok(())
}
