use std::path::Path;

use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{
    LaunchDataset, LaunchRecord, Outcome, COL_BOOSTER_CATEGORY, COL_BOOSTER_VERSION, COL_CLASS,
    COL_FLIGHT_NUMBER, COL_PAYLOAD, COL_SITE,
};
use super::DataError;

/// Columns every source file must provide.
const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER_CATEGORY];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming the launch columns (the original layout)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat columns with the same names
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(DataError::UnsupportedExtension(other.to_string()).into()),
    };

    let dataset = LaunchDataset::from_records(records)
        .with_context(|| format!("validating {}", path.display()))?;
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per row.
/// Unknown columns (e.g. the unnamed pandas index) are ignored.
fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataError::MissingColumn(col).into());
        }
    }

    reader
        .deserialize::<LaunchRecord>()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "KSC LC-39A",
///     "Payload Mass (kg)": 2490.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<LaunchRecord> =
        serde_json::from_str(&text).context("parsing JSON launch records")?;
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one launch per row.
///
/// Expected schema:
/// - `Launch Site`, `Booster Version Category`: Utf8 / LargeUtf8
/// - `Payload Mass (kg)`: any float or integer type
/// - `class`: integer (0 / 1) or boolean
/// - optional `Flight Number` (integer) and `Booster Version` (string)
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let site_col = required_column(&batch, COL_SITE)?;
        let payload_col = required_column(&batch, COL_PAYLOAD)?;
        let class_col = required_column(&batch, COL_CLASS)?;
        let category_col = required_column(&batch, COL_BOOSTER_CATEGORY)?;
        let flight_col = batch.column_by_name(COL_FLIGHT_NUMBER);
        let version_col = batch.column_by_name(COL_BOOSTER_VERSION);

        for row in 0..batch.num_rows() {
            let global_row = records.len();
            let site = non_null(string_value(site_col, row, COL_SITE)?, global_row, COL_SITE)?;
            let payload_mass_kg =
                non_null(f64_value(payload_col, row, COL_PAYLOAD)?, global_row, COL_PAYLOAD)?;
            let class = non_null(i64_value(class_col, row, COL_CLASS)?, global_row, COL_CLASS)?;
            let booster_category = non_null(
                string_value(category_col, row, COL_BOOSTER_CATEGORY)?,
                global_row,
                COL_BOOSTER_CATEGORY,
            )?;

            let flight_number = match flight_col {
                Some(col) => i64_value(col, row, COL_FLIGHT_NUMBER)?
                    .and_then(|n| u32::try_from(n).ok()),
                None => None,
            };
            let booster_version = match version_col {
                Some(col) => string_value(col, row, COL_BOOSTER_VERSION)?,
                None => None,
            };

            records.push(LaunchRecord {
                site,
                payload_mass_kg,
                outcome: Outcome::try_from(class)?,
                booster_category,
                flight_number,
                booster_version,
            });
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn required_column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .ok_or_else(|| DataError::MissingColumn(name).into())
}

fn non_null<T>(value: Option<T>, row: usize, column: &'static str) -> Result<T, DataError> {
    value.ok_or(DataError::NullValue { row, column })
}

fn column_type_error(column: &'static str, col: &ArrayRef) -> DataError {
    DataError::ColumnType {
        column,
        found: format!("{:?}", col.data_type()),
    }
}

/// Read a string cell; `Ok(None)` for null.
fn string_value(col: &ArrayRef, row: usize, column: &'static str) -> Result<Option<String>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(row).to_string(),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row).to_string(),
        _ => return Err(column_type_error(column, col).into()),
    };
    Ok(Some(value))
}

/// Read a numeric cell as `f64`; `Ok(None)` for null.
fn f64_value(col: &ArrayRef, row: usize, column: &'static str) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Float64 => col.as_primitive::<Float64Type>().value(row),
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row) as f64,
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as f64,
        _ => return Err(column_type_error(column, col).into()),
    };
    Ok(Some(value))
}

/// Read an integer (or boolean) cell as `i64`; `Ok(None)` for null.
fn i64_value(col: &ArrayRef, row: usize, column: &'static str) -> Result<Option<i64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row),
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as i64,
        DataType::Boolean => col.as_boolean().value(row) as i64,
        _ => return Err(column_type_error(column, col).into()),
    };
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    use super::*;

    const HEADER: &str =
        ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

    fn write_csv(path: &Path, header: &str, rows: &[&str]) {
        let mut out = String::new();
        out.push_str(header);
        out.push('\n');
        for row in rows {
            out.push_str(row);
            out.push('\n');
        }
        fs::write(path, out).unwrap();
    }

    #[test]
    fn loads_original_csv_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.csv");
        write_csv(
            &path,
            HEADER,
            &[
                "0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0",
                "1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0004,v1.0",
                "2,3,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT",
            ],
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.payload_min, 0.0);
        assert_eq!(ds.payload_max, 9600.0);
        let last = ds.record(2).unwrap();
        assert_eq!(last.site, "VAFB SLC-4E");
        assert_eq!(last.outcome, Outcome::Success);
        assert_eq!(last.flight_number, Some(3));
        assert_eq!(last.booster_version.as_deref(), Some("F9 FT B1029.1"));
        assert_eq!(last.booster_category, "FT");
    }

    #[test]
    fn csv_optional_columns_may_be_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("minimal.csv");
        write_csv(
            &path,
            "Launch Site,Payload Mass (kg),class,Booster Version Category",
            &["KSC LC-39A,2490,1,FT"],
        );

        let ds = load_file(&path).unwrap();
        let rec = ds.record(0).unwrap();
        assert_eq!(rec.payload_mass_kg, 2490.0);
        assert_eq!(rec.flight_number, None);
        assert_eq!(rec.booster_version, None);
    }

    #[test]
    fn csv_missing_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.csv");
        write_csv(&path, "Launch Site,class", &["KSC LC-39A,1"]);

        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::MissingColumn(COL_PAYLOAD))
        ));
    }

    #[test]
    fn csv_bad_outcome_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad_class.csv");
        write_csv(
            &path,
            "Launch Site,Payload Mass (kg),class,Booster Version Category",
            &["KSC LC-39A,2490,7,FT"],
        );
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        assert!(load_file(&dir.path().join("nope.csv")).is_err());
    }

    #[test]
    fn unsupported_extension() {
        let err = load_file(Path::new("launches.xlsx")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::UnsupportedExtension(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn loads_json_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.json");
        fs::write(
            &path,
            r#"[
                {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 2490, "class": 1,
                 "Booster Version Category": "FT"},
                {"Launch Site": "CCAFS SLC-40", "Payload Mass (kg)": 4400.5, "class": 0,
                 "Booster Version Category": "B4", "Flight Number": 12}
            ]"#,
        )
        .unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.payload_max, 4400.5);
        assert_eq!(ds.record(1).unwrap().flight_number, Some(12));
        assert_eq!(ds.record(1).unwrap().outcome, Outcome::Failure);
    }

    #[test]
    fn loads_parquet_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("launches.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD, DataType::Float64, false),
            Field::new(COL_CLASS, DataType::Int64, false),
            Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["KSC LC-39A", "VAFB SLC-4E"])),
                Arc::new(Float64Array::from(vec![5300.0, 500.0])),
                Arc::new(Int64Array::from(vec![1, 0])),
                Arc::new(StringArray::from(vec!["FT", "v1.1"])),
            ],
        )
        .unwrap();
        let file = fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.payload_min, 500.0);
        assert_eq!(ds.record(0).unwrap().outcome, Outcome::Success);
        assert_eq!(ds.record(1).unwrap().booster_category, "v1.1");
        assert_eq!(ds.record(1).unwrap().flight_number, None);
    }
}
