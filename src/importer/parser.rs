use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::models::StockRecord;

#[derive(Debug, Default)]
pub struct ParsedCsv {
    pub records: Vec<StockRecord>,
    /// Non-blank data lines that were not a valid symbol/company pair.
    pub skipped: usize,
}

/// Parses `symbol,company_name` lines. Blank lines are ignored and the first
/// remaining line is a header, dropped without looking at it. Every other
/// line is tokenized on its own, so a bad line never affects its neighbours.
pub fn parse_stock_csv(csv: &str) -> ParsedCsv {
    let mut parsed = ParsedCsv::default();

    let data_lines = csv
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .skip(1);

    for (index, line) in data_lines {
        match stock_from_line(line) {
            Some(stock) => parsed.records.push(stock),
            None => {
                debug!("Skipping malformed CSV row at line {}: {:?}", index + 1, line);
                parsed.skipped += 1;
            }
        }
    }

    parsed
}

fn stock_from_line(line: &str) -> Option<StockRecord> {
    let (symbol, company_name) = match tokenize_line(line) {
        Some(record) if record.len() >= 2 => {
            // Unquoted company names may themselves contain commas.
            let name = record.iter().skip(1).collect::<Vec<_>>().join(",");
            (unquote(record.get(0)?).to_string(), unquote(&name).to_string())
        }
        // An unbalanced quote swallows the separator; fall back to the first comma.
        _ => {
            let (symbol, name) = line.split_once(',')?;
            (strip_stray_quotes(symbol).to_string(), strip_stray_quotes(name).to_string())
        }
    };

    if symbol.is_empty() || company_name.is_empty() || symbol.contains([',', '"']) {
        return None;
    }

    Some(StockRecord::new(symbol.to_uppercase(), company_name))
}

fn tokenize_line(line: &str) -> Option<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    reader.records().next()?.ok()
}

/// Trims a field and removes a quote pair the tokenizer left in place, which
/// happens when whitespace precedes the opening quote.
fn unquote(field: &str) -> &str {
    let field = field.trim();
    match field.strip_prefix('"').and_then(|f| f.strip_suffix('"')) {
        Some(inner) => inner.trim(),
        None => field,
    }
}

fn strip_stray_quotes(field: &str) -> &str {
    let field = field.trim();
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field).trim()
}
