//! Persisted model record.
//!
//! A trained model is stored as a two-line CSV file:
//! ```text
//! theta0,theta1,min,max,price_min,price_max
//! 0.0275,-0.9783,22899.0,240000.0,3650.0,8290.0
//! ```
//! `theta0`/`theta1` are fitted in normalized space; the four bounds map a raw
//! mileage into that space and a normalized price back out of it.

use crate::error::{ModelLoadError, Result};
use crate::model::linear::LinearParams;
use crate::preprocessing::MinMaxBounds;
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;

/// Column names of the record file, in order.
pub const RECORD_FIELDS: [&str; 6] = ["theta0", "theta1", "min", "max", "price_min", "price_max"];

/// Coefficients plus the normalization bounds needed to reproduce predictions
/// without retraining.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ModelRecord {
    pub theta0: f64,
    pub theta1: f64,
    #[serde(rename = "min")]
    pub mileage_min: f64,
    #[serde(rename = "max")]
    pub mileage_max: f64,
    pub price_min: f64,
    pub price_max: f64,
}

/// The fallback record `{0, 0, 0, 1, 0, 1}`, which predicts 0 for every
/// mileage.
impl Default for ModelRecord {
    fn default() -> Self {
        Self {
            theta0: 0.0,
            theta1: 0.0,
            mileage_min: 0.0,
            mileage_max: 1.0,
            price_min: 0.0,
            price_max: 1.0,
        }
    }
}

impl ModelRecord {
    pub fn new(params: LinearParams, mileage: MinMaxBounds, price: MinMaxBounds) -> Self {
        Self {
            theta0: params.theta0,
            theta1: params.theta1,
            mileage_min: mileage.min,
            mileage_max: mileage.max,
            price_min: price.min,
            price_max: price.max,
        }
    }

    pub fn params(&self) -> LinearParams {
        LinearParams::new(self.theta0, self.theta1)
    }

    pub fn mileage_bounds(&self) -> MinMaxBounds {
        MinMaxBounds {
            min: self.mileage_min,
            max: self.mileage_max,
        }
    }

    pub fn price_bounds(&self) -> MinMaxBounds {
        MinMaxBounds {
            min: self.price_min,
            max: self.price_max,
        }
    }

    /// Writes the header row and the data row.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.serialize(self)?;
        wtr.flush()?;
        Ok(())
    }

    /// Saves the record, truncating any previous file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_to(file)?;
        tracing::debug!(path = %path.as_ref().display(), "model record saved");
        Ok(())
    }

    /// Reads a record from CSV text.
    ///
    /// Columns are looked up by name, so extra columns and a different
    /// column order are accepted. Only the first data row is used.
    pub fn read_from<R: io::Read>(reader: R) -> Result<Self, ModelLoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut indices = [0usize; 6];
        for (slot, name) in indices.iter_mut().zip(RECORD_FIELDS) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ModelLoadError::MissingField(name.to_string()))?;
        }

        let row = rdr.records().next().ok_or(ModelLoadError::Empty)??;
        let mut values = [0f64; 6];
        for ((value, &index), name) in values.iter_mut().zip(indices.iter()).zip(RECORD_FIELDS) {
            let raw = row
                .get(index)
                .ok_or_else(|| ModelLoadError::MissingField(name.to_string()))?;
            *value = parse_field(name, raw)?;
        }

        let [theta0, theta1, mileage_min, mileage_max, price_min, price_max] = values;
        Ok(Self {
            theta0,
            theta1,
            mileage_min,
            mileage_max,
            price_min,
            price_max,
        })
    }

    /// Loads a record from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ModelLoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ModelLoadError::Io(e),
        })?;
        Self::read_from(file)
    }
}

fn parse_field(field: &str, raw: &str) -> Result<f64, ModelLoadError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ModelLoadError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ModelRecord {
        ModelRecord {
            theta0: 0.9512,
            theta1: -0.8807,
            mileage_min: 22_899.0,
            mileage_max: 240_000.0,
            price_min: 3_650.0,
            price_max: 8_290.0,
        }
    }

    #[test]
    fn test_default_is_documented_fallback() {
        let record = ModelRecord::default();
        assert_eq!(
            [
                record.theta0,
                record.theta1,
                record.mileage_min,
                record.mileage_max,
                record.price_min,
                record.price_max
            ],
            [0.0, 0.0, 0.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_write_header_is_exact() {
        let mut buf = Vec::new();
        sample_record().write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("theta0,theta1,min,max,price_min,price_max"));
        assert_eq!(lines.next().map(|l| l.split(',').count()), Some(6));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_read_roundtrip() {
        let mut buf = Vec::new();
        sample_record().write_to(&mut buf).unwrap();
        let restored = ModelRecord::read_from(buf.as_slice()).unwrap();
        assert_eq!(restored, sample_record());
    }

    #[test]
    fn test_read_integer_literals() {
        let text = "theta0,theta1,min,max,price_min,price_max\n0,1,2,3,4,5\n";
        let record = ModelRecord::read_from(text.as_bytes()).unwrap();
        assert_eq!(record.mileage_max, 3.0);
        assert_eq!(record.price_max, 5.0);
    }

    #[test]
    fn test_read_reordered_and_extra_columns() {
        let text = "note,price_max,price_min,max,min,theta1,theta0\nx,5,4,3,2,1,0\n";
        let record = ModelRecord::read_from(text.as_bytes()).unwrap();
        assert_eq!(record.params(), LinearParams::new(0.0, 1.0));
        assert_eq!(record.mileage_bounds(), MinMaxBounds { min: 2.0, max: 3.0 });
        assert_eq!(record.price_bounds(), MinMaxBounds { min: 4.0, max: 5.0 });
    }

    #[test]
    fn test_read_missing_field() {
        let text = "theta0,theta1,min,max,price_min\n0,0,0,1,0\n";
        let err = ModelRecord::read_from(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ModelLoadError::MissingField(ref f) if f == "price_max"));
    }

    #[test]
    fn test_read_invalid_number() {
        let text = "theta0,theta1,min,max,price_min,price_max\n0,abc,0,1,0,1\n";
        let err = ModelRecord::read_from(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ModelLoadError::InvalidNumber { ref field, .. } if field == "theta1"));
    }

    #[test]
    fn test_read_rejects_non_finite() {
        let text = "theta0,theta1,min,max,price_min,price_max\nNaN,0,0,1,0,1\n";
        let err = ModelRecord::read_from(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ModelLoadError::InvalidNumber { .. }));
    }

    #[test]
    fn test_read_header_only() {
        let text = "theta0,theta1,min,max,price_min,price_max\n";
        let err = ModelRecord::read_from(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Empty));
    }

    #[test]
    fn test_read_empty_input() {
        let err = ModelRecord::read_from("".as_bytes()).unwrap_err();
        assert!(matches!(err, ModelLoadError::MissingField(_)));
    }

    #[test]
    fn test_save_load_file() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("values.csv");

        ModelRecord::default().save(&path)?;
        sample_record().save(&path)?;

        let loaded = ModelRecord::load(&path)?;
        assert_eq!(loaded, sample_record());
        assert_eq!(std::fs::read_to_string(&path)?.lines().count(), 2);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ModelRecord::load(tmp.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ModelLoadError::NotFound { .. }));
    }
}
