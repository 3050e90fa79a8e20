// crates/ports/src/source.rs
use std::path::PathBuf;

use mailtally_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Which file and which column to read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRequest {
    pub path: PathBuf,
    pub column: usize,
}

impl ColumnRequest {
    pub fn new(path: impl Into<PathBuf>, column: usize) -> Self {
        Self { path: path.into(), column }
    }
}

/// Port for pulling a single column out of a headed tabular source.
///
/// Implementations skip exactly one header row and yield the remaining rows in order.
pub trait ColumnSource: Send + Sync {
    /// Hand every data-row value to `visit`, top to bottom.
    fn for_each_value(&self, request: &ColumnRequest, visit: &mut dyn FnMut(&str)) -> Result<()>;

    /// Collect the whole column. Nothing is returned if any row fails.
    fn extract_column(&self, request: &ColumnRequest) -> Result<Vec<String>> {
        let mut values = Vec::new();
        self.for_each_value(request, &mut |value| values.push(value.to_owned()))?;
        Ok(values)
    }
}
