use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::LoadError;
use crate::graph_builder::MovieRecord;

fn record_reader<R: Read>(reader: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false) // every line is a movie, no column titles
        .flexible(true) // cast sizes differ per line
        .quoting(false) // titles contain bare quotes
        .terminator(csv::Terminator::Any(b'\n')) // a stray \r stays inside the line
        .delimiter(delimiter)
        .from_reader(reader)
}

/// Turns the fields of one line into a record. Empty fields are dropped, so
/// doubled or trailing delimiters never produce blank names.
fn tokens_to_record<'a>(fields: impl Iterator<Item = &'a str>) -> Option<MovieRecord> {
    let mut tokens = fields.filter(|field| !field.is_empty());
    let name = tokens.next()?;
    Some(MovieRecord::new(name, tokens))
}

/// Decodes the fields of one line, dropping the `\r` a CRLF ending leaves
/// on the last field. Non-UTF-8 bytes are replaced; the flag reports
/// whether any field needed that.
fn decode_fields(raw: &csv::ByteRecord) -> (Vec<String>, bool) {
    let last = raw.len().saturating_sub(1);
    let mut lossy = false;
    let fields = raw
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let field = match field.strip_suffix(b"\r") {
                Some(trimmed) if i == last => trimmed,
                _ => field,
            };
            let text = String::from_utf8_lossy(field);
            lossy |= matches!(text, Cow::Owned(_)); // borrowed means valid UTF-8
            text.into_owned()
        })
        .collect();
    (fields, lossy)
}

/// Reads one movie per line from `reader`. Blank lines are skipped.
pub fn parse_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<MovieRecord>, LoadError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in record_reader(reader, delimiter).byte_records() {
        let raw = result?;
        let (fields, lossy) = decode_fields(&raw);
        if lossy {
            tracing::warn!(
                line = ?raw.position().map(|p| p.line()),
                "non-UTF-8 bytes in dataset line, replacing"
            );
        }

        match tokens_to_record(fields.iter().map(String::as_str)) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    tracing::debug!(records = records.len(), skipped, "dataset tokenized");
    Ok(records)
}

/// Reads the dataset at `path`.
pub fn parse_file(path: impl AsRef<Path>, delimiter: u8) -> Result<Vec<MovieRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(file), delimiter)
}

/// Tokenizes a single dataset line. Returns `None` for a blank line.
pub fn parse_line(line: &str, delimiter: u8) -> Option<MovieRecord> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    tokens_to_record(line.split(delimiter as char))
}
