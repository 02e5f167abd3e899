// File: crates/plot-sync/src/data.rs
// Summary: Identity tokens and the column-oriented aligned dataset.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Identity token handed out once per constructed value.
/// Contract: tokens are never reused; equal tokens mean the same immutable
/// value, so comparing tokens replaces comparing structure contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Revision(u64);

impl Revision {
    pub(crate) fn next() -> Self {
        Self(NEXT_REVISION.fetch_add(1, Ordering::Relaxed))
    }
}

/// Column-oriented series data sharing one x column.
/// Every value column is exactly as long as `x`; `f64::NAN` marks gaps.
/// Immutable after construction.
#[derive(Debug)]
pub struct AlignedData {
    revision: Revision,
    x: Vec<f64>,
    ys: Vec<Vec<f64>>,
}

impl AlignedData {
    /// Build a dataset, rejecting ragged value columns.
    pub fn try_new(x: Vec<f64>, ys: Vec<Vec<f64>>) -> Result<Self, &'static str> {
        for col in &ys {
            if col.len() != x.len() {
                return Err("value column length differs from x column");
            }
        }
        Ok(Self { revision: Revision::next(), x, ys })
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Value column at `idx`, if present.
    pub fn y(&self, idx: usize) -> Option<&[f64]> {
        self.ys.get(idx).map(Vec::as_slice)
    }

    pub fn series_count(&self) -> usize {
        self.ys.len()
    }

    pub fn point_count(&self) -> usize {
        self.x.len()
    }
}
