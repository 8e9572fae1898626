use crate::domain::model::{FieldAttributes, MetadataRecord};
use crate::utils::error::{MigrateError, Result};
use std::path::Path;

pub const DEFAULT_HEADER_MARKER: &str = "Field API Name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    pub header_marker: String,
    pub delimiter: u8,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            header_marker: DEFAULT_HEADER_MARKER.to_string(),
            delimiter: b',',
        }
    }
}

impl ParserOptions {
    pub fn tab_delimited() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }
}

/// 讀取檔案並解析成 MetadataRecord
pub fn parse_metadata_file<P: AsRef<Path>>(path: P, options: &ParserOptions) -> Result<MetadataRecord> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_metadata_bytes(&bytes, options)
}

pub fn parse_metadata_bytes(bytes: &[u8], options: &ParserOptions) -> Result<MetadataRecord> {
    let content = match std::str::from_utf8(bytes) {
        Ok(text) => std::borrow::Cow::Borrowed(text),
        Err(e) => {
            tracing::warn!(
                "⚠️ Input is not valid UTF-8 (first bad byte at {}), decoding lossily",
                e.valid_up_to()
            );
            String::from_utf8_lossy(bytes)
        }
    };
    parse_metadata_str(&content, options)
}

/// Parses a schema export whose header row sits somewhere in the file.
///
/// The first line containing `options.header_marker` is the header; everything
/// above it is ignored. Every later non-blank line whose first cell is non-empty
/// becomes one [`FieldAttributes`] grouped under that first cell. Short rows are
/// padded with empty strings and long rows are cut to the header width.
pub fn parse_metadata_str(content: &str, options: &ParserOptions) -> Result<MetadataRecord> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines
        .by_ref()
        .find(|line| line.contains(options.header_marker.as_str()))
        .ok_or_else(|| MigrateError::header_not_found(&options.header_marker))?;

    let headers = split_row(header_line, options.delimiter)?;
    tracing::debug!("Detected header row with {} columns: {:?}", headers.len(), headers);

    let mut record = MetadataRecord::new();
    let mut skipped_rows = 0usize;

    for line in lines {
        let cells = split_row(line, options.delimiter)?;

        let key = match cells.first() {
            Some(first) if !first.is_empty() => first.clone(),
            _ => {
                skipped_rows += 1;
                continue;
            }
        };

        let attributes: FieldAttributes = headers
            .iter()
            .enumerate()
            .map(|(index, header)| (header.clone(), cells.get(index).cloned().unwrap_or_default()))
            .collect();

        record.push(key, attributes);
    }

    tracing::debug!(
        "Parsed {} records into {} groups ({} rows without a key skipped)",
        record.record_count(),
        record.group_count(),
        skipped_rows
    );

    Ok(record)
}

// 以 csv crate 拆單一行，處理引號內的分隔符號
fn split_row(line: &str, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let mut row = csv::StringRecord::new();
    if reader.read_record(&mut row)? {
        Ok(row.iter().map(str::to_string).collect())
    } else {
        Ok(Vec::new())
    }
}
