//! Training data: aligned mileage/price columns and their CSV loader.
//!
//! # Example
//!
//! ```rust
//! use carprice_rs::dataset::SampleSet;
//!
//! let csv = "km,price\n240000,3650\n139800,3800\n";
//! let samples = SampleSet::from_csv_reader(csv.as_bytes()).unwrap();
//! assert_eq!(samples.len(), 2);
//! assert_eq!(samples.mileage(), &[240000.0, 139800.0]);
//! ```

use crate::backend::{Backend, Tensor1D};
use crate::error::{RegressionError, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Header of the mileage column.
pub const MILEAGE_COLUMN: &str = "km";
/// Header of the price column.
pub const PRICE_COLUMN: &str = "price";

/// Ordered `(mileage, price)` samples stored as two aligned columns.
///
/// Every value is finite and every mileage is non-negative. The set may be
/// empty; training on it fails with [`RegressionError::InvalidInput`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleSet {
    mileage: Vec<f64>,
    price: Vec<f64>,
}

impl SampleSet {
    /// Builds a sample set from two columns of equal length.
    pub fn new(mileage: Vec<f64>, price: Vec<f64>) -> Result<Self> {
        if mileage.len() != price.len() {
            return Err(RegressionError::InvalidInput(format!(
                "mileage and price must have the same length, got {} and {}",
                mileage.len(),
                price.len()
            )));
        }
        for (i, (&km, &p)) in mileage.iter().zip(price.iter()).enumerate() {
            if !km.is_finite() || !p.is_finite() {
                return Err(RegressionError::InvalidInput(format!(
                    "sample {i} contains a non-finite value ({km}, {p})"
                )));
            }
            if km < 0.0 {
                return Err(RegressionError::InvalidInput(format!(
                    "sample {i} has negative mileage {km}"
                )));
            }
        }
        Ok(Self { mileage, price })
    }

    /// Builds a sample set from `(mileage, price)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (mileage, price) = pairs.into_iter().unzip();
        Self::new(mileage, price)
    }

    pub fn len(&self) -> usize {
        self.mileage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mileage.is_empty()
    }

    pub fn mileage(&self) -> &[f64] {
        &self.mileage
    }

    pub fn price(&self) -> &[f64] {
        &self.price
    }

    /// Copies both columns into backend tensors: `(mileage, price)`.
    pub fn tensors<B: Backend>(&self) -> (Tensor1D<B>, Tensor1D<B>) {
        (
            Tensor1D::from_slice(&self.mileage),
            Tensor1D::from_slice(&self.price),
        )
    }

    /// Parses CSV data with a header row containing `km` and `price`.
    ///
    /// Other columns are ignored and surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// - [`RegressionError::MissingColumn`] listing every absent column,
    ///   before any row is read.
    /// - [`RegressionError::InvalidValue`] for an empty or non-numeric cell
    ///   (rows are numbered from 1, header excluded).
    /// - [`RegressionError::Csv`] for malformed CSV.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let position = |name: &str| headers.iter().position(|h| h == name);
        let (km_idx, price_idx) = match (position(MILEAGE_COLUMN), position(PRICE_COLUMN)) {
            (Some(km), Some(price)) => (km, price),
            (km, price) => {
                let missing = [(MILEAGE_COLUMN, km), (PRICE_COLUMN, price)]
                    .into_iter()
                    .filter(|(_, idx)| idx.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect();
                return Err(RegressionError::MissingColumn(missing));
            }
        };

        let mut mileage = Vec::new();
        let mut price = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let row = i + 1;
            mileage.push(parse_cell(&record, km_idx, MILEAGE_COLUMN, row)?);
            price.push(parse_cell(&record, price_idx, PRICE_COLUMN, row)?);
        }

        tracing::debug!(samples = mileage.len(), "training data loaded");
        Self::new(mileage, price)
    }

    /// Loads a CSV file, see [`from_csv_reader`](Self::from_csv_reader).
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }
}

fn parse_cell(record: &csv::StringRecord, index: usize, column: &str, row: usize) -> Result<f64> {
    let raw = record.get(index).unwrap_or_default();
    raw.parse::<f64>()
        .map_err(|_| RegressionError::InvalidValue {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_new_aligned_columns() {
        let samples = SampleSet::new(vec![0.0, 50_000.0], vec![100.0, 50.0]).unwrap();
        assert_eq!(samples.len(), 2);
        assert!(!samples.is_empty());
        assert_eq!(samples.mileage(), &[0.0, 50_000.0]);
        assert_eq!(samples.price(), &[100.0, 50.0]);
    }

    #[test]
    fn test_new_rejects_misaligned_columns() {
        let err = SampleSet::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidInput(_)));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(SampleSet::new(vec![f64::NAN], vec![1.0]).is_err());
        assert!(SampleSet::new(vec![1.0], vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_new_rejects_negative_mileage() {
        let err = SampleSet::from_pairs([(-1.0, 10.0)]).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_set_is_constructible() {
        let samples = SampleSet::from_pairs(std::iter::empty()).unwrap();
        assert!(samples.is_empty());
        assert_eq!(samples, SampleSet::default());
    }

    #[test]
    fn test_tensors() {
        let samples = SampleSet::from_pairs([(1.0, 2.0), (3.0, 4.0)]).unwrap();
        let (km, price) = samples.tensors::<CpuBackend>();
        assert_eq!(km.to_vec(), vec![1.0, 3.0]);
        assert_eq!(price.to_vec(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_csv_basic() {
        let csv = "km,price\n240000,3650\n139800,3800\n150500,4400\n";
        let samples = SampleSet::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(samples.mileage(), &[240_000.0, 139_800.0, 150_500.0]);
        assert_eq!(samples.price(), &[3_650.0, 3_800.0, 4_400.0]);
    }

    #[test]
    fn test_csv_column_order_extra_columns_and_whitespace() {
        let csv = "model, price , km\nclio, 5000 , 12000.5\n";
        let samples = SampleSet::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(samples.mileage(), &[12_000.5]);
        assert_eq!(samples.price(), &[5_000.0]);
    }

    #[test]
    fn test_csv_missing_price_column() {
        let csv = "km,cost\n1,2\n";
        let err = SampleSet::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RegressionError::MissingColumn(ref cols) if cols == &["price"]));
    }

    #[test]
    fn test_csv_missing_both_columns() {
        let csv = "a,b\n1,2\n";
        let err = SampleSet::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RegressionError::MissingColumn(ref cols) if cols.len() == 2));
    }

    #[test]
    fn test_csv_invalid_value() {
        let csv = "km,price\n100,200\nabc,300\n";
        let err = SampleSet::from_csv_reader(csv.as_bytes()).unwrap_err();
        match err {
            RegressionError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "km");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_csv_empty_cell() {
        let csv = "km,price\n100,\n";
        let err = SampleSet::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidValue { ref column, .. } if column == "price"));
    }

    #[test]
    fn test_csv_header_only_is_empty_set() {
        let samples = SampleSet::from_csv_reader("km,price\n".as_bytes()).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_csv_path() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("data.csv");
        std::fs::write(&path, "km,price\n0,100\n100000,0\n")?;

        let samples = SampleSet::from_csv_path(&path)?;
        assert_eq!(samples.len(), 2);
        Ok(())
    }

    #[test]
    fn test_csv_path_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SampleSet::from_csv_path(tmp.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, RegressionError::Io(_)));
    }
}
