//! CSV decoding of bank exports and encoding of FreeAgent import files.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use fabridge_core::{ConvertError, NormalizedRecord, RawRecord, SourceFormat};

use crate::normalize::normalize;

/// Suffix appended to the input's file stem for converted output.
pub const OUTPUT_SUFFIX: &str = "_freeagent";

fn clean_header(h: &str) -> String {
    h.trim_start_matches('\u{feff}').trim().to_string()
}

fn header_names(headers: &StringRecord) -> Vec<String> {
    headers.iter().map(clean_header).collect()
}

/// Decode CSV into rows keyed by header name.
///
/// Bank formats read their header row. The headerless FreeAgent format gets
/// its canonical column names by position. Short rows are padded with empty
/// cells; extra cells beyond the header are dropped.
pub fn read_records<R: Read>(
    reader: R,
    format: SourceFormat,
) -> Result<Vec<RawRecord>, ConvertError> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .has_headers(format.has_header_row())
        .from_reader(reader);

    let headers: Vec<String> = if format.has_header_row() {
        header_names(rdr.headers()?)
    } else {
        format.required_columns().iter().map(|c| c.to_string()).collect()
    };

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() != headers.len() {
            tracing::warn!(
                row = i + 1,
                fields = record.len(),
                expected = headers.len(),
                "row has a different field count than the header"
            );
        }

        let raw: RawRecord = headers
            .iter()
            .enumerate()
            .map(|(idx, h)| (h.clone(), record.get(idx).unwrap_or("").to_string()))
            .collect();
        out.push(raw);
    }

    tracing::debug!(rows = out.len(), columns = headers.len(), "decoded csv");
    Ok(out)
}

/// Encode records as `date,amount,description` lines: no header, no quoting.
pub fn write_records<W: Write>(
    writer: W,
    records: &[NormalizedRecord],
) -> Result<(), ConvertError> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for r in records {
        wtr.write_record([&r.date, &r.amount, &r.description])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn records_to_string(records: &[NormalizedRecord]) -> Result<String, ConvertError> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    // Every cell we write is already a Rust string.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Decode and normalize in one step.
pub fn convert_reader<R: Read>(
    reader: R,
    format: SourceFormat,
) -> Result<Vec<NormalizedRecord>, ConvertError> {
    let records = read_records(reader, format)?;
    normalize(&records, format)
}

pub fn convert_file(
    path: impl AsRef<Path>,
    format: SourceFormat,
) -> Result<Vec<NormalizedRecord>, ConvertError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), format = %format, "converting statement");
    convert_reader(File::open(path)?, format)
}

/// Guess a file's format from its header row.
pub fn detect_file_format(path: impl AsRef<Path>) -> Result<SourceFormat, ConvertError> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_reader(File::open(path.as_ref())?);
    let found = header_names(rdr.headers()?);

    SourceFormat::detect(found.iter().map(String::as_str))
        .ok_or(ConvertError::Undetected { found })
}

/// `<dir>/<stem>_freeagent.csv`, next to the input unless `out_dir` is given.
pub fn output_path_for(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "statement".to_string());
    let file_name = format!("{stem}{OUTPUT_SUFFIX}.csv");

    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}
