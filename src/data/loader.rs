use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use arrow::array::{Array, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Column names and errors
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

/// Reasons a dataset cannot be loaded. Loading is all-or-nothing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("malformed source: {0}")]
    Format(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}, column '{column}': {message}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        message: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

pub type Result<T> = std::result::Result<T, LoadError>;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming the four required columns (others ignored)
/// * `.json`    – `[{ "Launch Site": "...", "Payload Mass (kg)": 0.0, ... }, ...]`
/// * `.parquet` – one column per field, string or numeric
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(open(path)?),
        "json" => load_json(open(path)?),
        "parquet" | "pq" => load_parquet(open(path)?),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }?;

    log::info!(
        "Loaded {} launches from {} ({} sites)",
        dataset.len(),
        path.display(),
        dataset.all_sites().len()
    );
    Ok(dataset)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Cell parsing shared by all formats
// ---------------------------------------------------------------------------

fn invalid(row: usize, column: &'static str, message: impl Into<String>) -> LoadError {
    LoadError::InvalidValue {
        row,
        column,
        message: message.into(),
    }
}

fn parse_label(s: &str, row: usize, column: &'static str) -> Result<String> {
    let s = s.trim();
    if s.is_empty() {
        return Err(invalid(row, column, "missing value"));
    }
    Ok(s.to_string())
}

fn check_payload(v: f64, row: usize) -> Result<f64> {
    if !v.is_finite() || v < 0.0 {
        return Err(invalid(row, COL_PAYLOAD, format!("{v} is not a valid payload mass")));
    }
    Ok(v)
}

fn parse_payload(s: &str, row: usize) -> Result<f64> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(row, COL_PAYLOAD, format!("'{s}' is not a number")))?;
    check_payload(v, row)
}

/// Integer class from a float cell; `1.0` is accepted, `0.5` is not.
fn class_from_f64(v: f64, row: usize) -> Result<Outcome> {
    if v.fract() == 0.0 {
        if let Some(outcome) = Outcome::from_class(v as i64) {
            return Ok(outcome);
        }
    }
    Err(invalid(row, COL_CLASS, format!("{v} is not 0 or 1")))
}

fn parse_class(s: &str, row: usize) -> Result<Outcome> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(row, COL_CLASS, format!("'{s}' is not 0 or 1")))?;
    class_from_f64(v, row)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV launch data. Required columns are located by header name.
pub fn load_csv<R: Read>(source: R) -> Result<LaunchDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);
    let headers = reader.headers()?.clone();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let site_idx = column(COL_SITE)?;
    let payload_idx = column(COL_PAYLOAD)?;
    let booster_idx = column(COL_BOOSTER)?;
    let class_idx = column(COL_CLASS)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        records.push(LaunchRecord {
            site: parse_label(cell(site_idx), row, COL_SITE)?,
            payload_kg: parse_payload(cell(payload_idx), row)?,
            booster: parse_label(cell(booster_idx), row, COL_BOOSTER)?,
            outcome: parse_class(cell(class_idx), row)?,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "Booster Version Category": "v1.0",
///     "class": 0
///   },
///   ...
/// ]
/// ```
pub fn load_json<R: Read>(source: R) -> Result<LaunchDataset> {
    let root: JsonValue = serde_json::from_reader(source)?;
    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::Format("expected a top-level JSON array".to_string()))?;

    let mut records = Vec::with_capacity(rows.len());
    for (row, value) in rows.iter().enumerate() {
        let obj = value
            .as_object()
            .ok_or_else(|| LoadError::Format(format!("row {row} is not a JSON object")))?;
        let field = |name: &'static str| obj.get(name).ok_or(LoadError::MissingColumn(name));

        let payload_kg = match field(COL_PAYLOAD)? {
            JsonValue::Number(n) => check_payload(n.as_f64().unwrap_or(f64::NAN), row)?,
            JsonValue::String(s) => parse_payload(s, row)?,
            other => return Err(invalid(row, COL_PAYLOAD, format!("{other} is not a number"))),
        };
        let outcome = match field(COL_CLASS)? {
            JsonValue::Number(n) => class_from_f64(n.as_f64().unwrap_or(f64::NAN), row)?,
            JsonValue::String(s) => parse_class(s, row)?,
            other => return Err(invalid(row, COL_CLASS, format!("{other} is not 0 or 1"))),
        };

        records.push(LaunchRecord {
            site: json_label(field(COL_SITE)?, row, COL_SITE)?,
            payload_kg,
            booster: json_label(field(COL_BOOSTER)?, row, COL_BOOSTER)?,
            outcome,
        });
    }

    Ok(LaunchDataset::from_records(records))
}

fn json_label(val: &JsonValue, row: usize, column: &'static str) -> Result<String> {
    match val {
        JsonValue::String(s) => parse_label(s, row, column),
        JsonValue::Null => Err(invalid(row, column, "missing value")),
        other => parse_label(&other.to_string(), row, column),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per field.
///
/// Site and booster columns may be any type castable to Utf8; payload and
/// class columns any numeric type. Works with files written by **Pandas**
/// (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
pub fn load_parquet(file: File) -> Result<LaunchDataset> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    // Checked on the file schema so a file with no row groups is still rejected.
    for name in [COL_SITE, COL_PAYLOAD, COL_BOOSTER, COL_CLASS] {
        if builder.schema().index_of(name).is_err() {
            return Err(LoadError::MissingColumn(name));
        }
    }
    let reader = builder.build()?;

    let mut records = Vec::new();
    let mut offset = 0;

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();
        let column = |name: &'static str| {
            schema
                .index_of(name)
                .map(|idx| batch.column(idx))
                .map_err(|_| LoadError::MissingColumn(name))
        };

        let sites = cast(column(COL_SITE)?, &DataType::Utf8)?;
        let boosters = cast(column(COL_BOOSTER)?, &DataType::Utf8)?;
        let payloads = cast(column(COL_PAYLOAD)?, &DataType::Float64)?;
        let classes = cast(column(COL_CLASS)?, &DataType::Float64)?;

        let sites = sites.as_string::<i32>();
        let boosters = boosters.as_string::<i32>();
        let payloads = payloads.as_primitive::<Float64Type>();
        let classes = classes.as_primitive::<Float64Type>();

        for i in 0..batch.num_rows() {
            let row = offset + i;
            require_value(sites, i, row, COL_SITE)?;
            require_value(boosters, i, row, COL_BOOSTER)?;
            require_value(payloads, i, row, COL_PAYLOAD)?;
            require_value(classes, i, row, COL_CLASS)?;

            records.push(LaunchRecord {
                site: parse_label(sites.value(i), row, COL_SITE)?,
                payload_kg: check_payload(payloads.value(i), row)?,
                booster: parse_label(boosters.value(i), row, COL_BOOSTER)?,
                outcome: class_from_f64(classes.value(i), row)?,
            });
        }
        offset += batch.num_rows();
    }

    Ok(LaunchDataset::from_records(records))
}

/// Nulls (and values the cast could not convert) are missing values.
fn require_value(array: &dyn Array, i: usize, row: usize, column: &'static str) -> Result<()> {
    if array.is_null(i) {
        return Err(invalid(row, column, "missing or unreadable value"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use super::*;

    const CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
6,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
34,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";

    #[test]
    fn test_csv_loads_required_columns() {
        let ds = load_csv(CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.all_sites(), ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(ds.payload_bounds(), (0.0, 2490.0));

        let last = &ds.records[3];
        assert_eq!(last.booster, "FT");
        assert_eq!(last.outcome, Outcome::Success);
        assert_eq!(last.payload_kg, 2490.0);
    }

    #[test]
    fn test_csv_missing_column() {
        let text = "Launch Site,Payload Mass (kg),class\nA,100,1\n";
        let err = load_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(COL_BOOSTER)));
    }

    #[test]
    fn test_csv_header_only_is_empty_dataset() {
        let text = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";
        let ds = load_csv(text.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_csv_rejects_bad_values() {
        let header = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";

        let bad_class = format!("{header}A,100,FT,2\n");
        let err = load_csv(bad_class.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { row: 0, column: COL_CLASS, .. }));

        let negative = format!("{header}A,100,FT,1\nA,-5,FT,1\n");
        let err = load_csv(negative.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { row: 1, column: COL_PAYLOAD, .. }));

        let empty_site = format!("{header},100,FT,1\n");
        let err = load_csv(empty_site.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { column: COL_SITE, .. }));
    }

    #[test]
    fn test_json_records() {
        let text = r#"[
            {"Launch Site": "A", "Payload Mass (kg)": 3000, "Booster Version Category": "FT", "class": 1},
            {"Launch Site": "B", "Payload Mass (kg)": "4500.5", "Booster Version Category": "B4", "class": 0.0}
        ]"#;
        let ds = load_json(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].payload_kg, 4500.5);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
    }

    #[test]
    fn test_json_missing_key() {
        let text = r#"[{"Launch Site": "A", "Payload Mass (kg)": 1, "class": 1}]"#;
        let err = load_json(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(COL_BOOSTER)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_file(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_file(Path::new("launches.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "xlsx"));
    }

    #[test]
    fn test_parquet_round_trip_from_disk() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD, DataType::Float64, false),
            Field::new(COL_BOOSTER, DataType::Utf8, false),
            Field::new(COL_CLASS, DataType::Int64, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["A", "B"])),
                Arc::new(Float64Array::from(vec![3000.0, 9000.0])),
                Arc::new(StringArray::from(vec!["FT", "B4"])),
                Arc::new(Int64Array::from(vec![1, 0])),
            ],
        )
        .unwrap();

        let path = std::env::temp_dir().join(format!(
            "launch-dashboard-loader-{}.parquet",
            std::process::id()
        ));
        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.all_sites(), ["A", "B"]);
        assert_eq!(ds.payload_bounds(), (3000.0, 9000.0));
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
    }

    #[test]
    fn test_parquet_without_rows_still_needs_columns() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD, DataType::Float64, false),
            Field::new(COL_CLASS, DataType::Int64, false),
        ]));

        let path = std::env::temp_dir().join(format!(
            "launch-dashboard-loader-empty-{}.parquet",
            std::process::id()
        ));
        let file = File::create(&path).unwrap();
        let writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.close().unwrap();

        let result = load_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(LoadError::MissingColumn(COL_BOOSTER))));
    }

    #[test]
    fn test_json_shape_errors_are_format_errors() {
        let err = load_json(r#"{"Launch Site": "A"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Format(_)));

        let err = load_json("[42]".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Format(msg) if msg.contains("row 0")));
    }
}
