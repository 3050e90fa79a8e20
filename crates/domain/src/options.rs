// crates/domain/src/options.rs
use serde::{Deserialize, Serialize};

/// Which split results count as a valid email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmailShapePolicy {
    /// Exactly one `@`; either side may be empty. `"user@"` counts under the empty domain.
    #[default]
    Literal,
    /// Exactly one `@` with text on both sides.
    RequireNonEmptyParts,
}

/// How the column is fed to the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMode {
    /// Materialise the whole column, then aggregate.
    #[default]
    Buffered,
    /// Aggregate each row as it is read; the column is never held in memory.
    Streaming,
}
