use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{TradeDataset, TradeRecord};

/// Canonical column names of the trade table.
const COL_COUNTRY: &str = "COUNTRY_NAME";
const COL_INDICATOR: &str = "INDICATOR_NAME";
const COL_REGION: &str = "REGION";
const COL_INCOME: &str = "INCOME_GROUP";
const COL_YEAR: &str = "YEAR";
const COL_VALUE: &str = "TRADE_VALUE";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the trade table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – Parquet file with one row per observation
/// * `.json`    – `[{ "COUNTRY_NAME": "...", "YEAR": 1995, ... }, ...]`
/// * `.csv`     – header row with the canonical column names
///
/// An empty `TRADE_VALUE` cell means the observation is missing. Columns
/// beyond the canonical set (such as a pre-computed `DECADE`) are ignored;
/// the decade is derived from `YEAR`.
pub fn load_file(path: &Path) -> Result<TradeDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<TradeDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))
    };
    let country_idx = column(COL_COUNTRY)?;
    let indicator_idx = column(COL_INDICATOR)?;
    let region_idx = column(COL_REGION)?;
    let income_idx = column(COL_INCOME)?;
    let year_idx = column(COL_YEAR)?;
    let value_idx = column(COL_VALUE)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |idx: usize| row.get(idx).unwrap_or("").trim();

        let year: i64 = field(year_idx)
            .parse()
            .with_context(|| format!("Row {row_no}: '{}' is not a year", field(year_idx)))?;

        let raw_value = field(value_idx);
        let value = if raw_value.is_empty() {
            None
        } else {
            Some(raw_value.parse::<f64>().with_context(|| {
                format!("Row {row_no}: '{raw_value}' is not a trade value")
            })?)
        };

        records.push(TradeRecord {
            country: field(country_idx).to_string(),
            indicator: field(indicator_idx).to_string(),
            region: field(region_idx).to_string(),
            income_group: field(income_idx).to_string(),
            year,
            value,
        });
    }

    Ok(TradeDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, one object per observation):
///
/// ```json
/// [
///   {
///     "COUNTRY_NAME": "Chile",
///     "INDICATOR_NAME": "Trade (% of GDP)",
///     "REGION": "Latin America & Caribbean",
///     "INCOME_GROUP": "High income",
///     "YEAR": 1995,
///     "TRADE_VALUE": 54.3
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<TradeDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let string_field = |key: &str| {
            obj.get(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .with_context(|| format!("Row {i}: missing or invalid '{key}'"))
        };

        let year = obj
            .get(COL_YEAR)
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .with_context(|| format!("Row {i}: missing or invalid '{COL_YEAR}'"))?;

        let value = match obj.get(COL_VALUE) {
            None | Some(JsonValue::Null) => None,
            Some(v) => Some(
                v.as_f64()
                    .with_context(|| format!("Row {i}: '{COL_VALUE}' is not a number"))?,
            ),
        };

        records.push(TradeRecord {
            country: string_field(COL_COUNTRY)?,
            indicator: string_field(COL_INDICATOR)?,
            region: string_field(COL_REGION)?,
            income_group: string_field(COL_INCOME)?,
            year,
            value,
        });
    }

    Ok(TradeDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing the trade table.
///
/// Expected schema: Utf8 dimension columns, an integer `YEAR` and a nullable
/// float `TRADE_VALUE`.  Works with files written by both **Pandas**
/// (`df.to_parquet()`) and **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<TradeDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let column = |name: &str| {
            schema
                .index_of(name)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))
        };
        let country_col = batch.column(column(COL_COUNTRY)?);
        let indicator_col = batch.column(column(COL_INDICATOR)?);
        let region_col = batch.column(column(COL_REGION)?);
        let income_col = batch.column(column(COL_INCOME)?);
        let year_col = batch.column(column(COL_YEAR)?);
        let value_col = batch.column(column(COL_VALUE)?);

        for row in 0..batch.num_rows() {
            records.push(TradeRecord {
                country: string_at(country_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_COUNTRY}'"))?,
                indicator: string_at(indicator_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_INDICATOR}'"))?,
                region: string_at(region_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_REGION}'"))?,
                income_group: string_at(income_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_INCOME}'"))?,
                year: int_at(year_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_YEAR}'"))?,
                value: float_at(value_col, row)
                    .with_context(|| format!("Row {row}: failed to read '{COL_VALUE}'"))?,
            });
        }
    }

    Ok(TradeDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

/// Extract a string from a Utf8 or LargeUtf8 column at the given row.
fn string_at(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

/// Extract an integer from an Int32 or Int64 column at the given row.
fn int_at(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        other => bail!("Expected Int32 or Int64 column, got {other:?}"),
    }
}

/// Extract an optional float from a Float32 or Float64 column at the given row.
fn float_at(col: &Arc<dyn Array>, row: usize) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    match col.data_type() {
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(Some(arr.value(row) as f64))
        }
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(Some(arr.value(row)))
        }
        other => bail!("Expected Float32 or Float64 column, got {other:?}"),
    }
}
