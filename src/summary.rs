//! Quick statistics over a derivative field
//!
//! Border cells are NaN by construction and pole rows can be infinite, so the
//! counts are reported separately and min/max/mean only cover finite cells.

use ndarray::Array2;
use serde_json::{json, Value};

/// Cell counts and finite-value statistics for a 2-D field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    pub shape: (usize, usize),
    pub total: usize,
    pub valid: usize,
    pub nan: usize,
    pub infinite: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl FieldSummary {
    #[must_use]
    pub fn from_field(field: &Array2<f64>) -> Self {
        let mut valid = 0;
        let mut nan = 0;
        let mut infinite = 0;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for &x in field {
            if x.is_nan() {
                nan += 1;
            } else if x.is_infinite() {
                infinite += 1;
            } else {
                valid += 1;
                sum += x;
                min = min.min(x);
                max = max.max(x);
            }
        }

        let has_valid = valid > 0;
        Self {
            shape: field.dim(),
            total: field.len(),
            valid,
            nan,
            infinite,
            min: has_valid.then_some(min),
            max: has_valid.then_some(max),
            mean: has_valid.then(|| sum / valid as f64),
        }
    }

    /// Print the summary under a heading
    pub fn print(&self, title: &str) {
        println!("\n Summary for: {}", title);
        println!("={}", "=".repeat(title.len() + 14));
        println!(" Shape: ({} × {})", self.shape.0, self.shape.1);
        println!(
            " Valid cells: {} / {} (NaN: {}, infinite: {})",
            self.valid, self.total, self.nan, self.infinite
        );

        match (self.min, self.max, self.mean) {
            (Some(min), Some(max), Some(mean)) => {
                println!("    Min: {:.6e}", min);
                println!("    Max: {:.6e}", max);
                println!("    Mean: {:.6e}", mean);
            }
            _ => println!("\n⚠ No valid (finite) data in field"),
        }
    }

    /// JSON form; statistics are `null` when there are no finite cells
    #[must_use]
    pub fn to_json(&self, title: &str) -> Value {
        json!({
            "variable": title,
            "shape": [self.shape.0, self.shape.1],
            "total": self.total,
            "valid": self.valid,
            "nan": self.nan,
            "infinite": self.infinite,
            "min": self.min,
            "max": self.max,
            "mean": self.mean,
        })
    }
}
