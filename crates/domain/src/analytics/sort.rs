// domain analytics sorting utilities
use std::{cmp::Ordering, fmt, str::FromStr};

use mailtally_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

use crate::model::DomainCount;

/// ソート順序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc { Self::Descending } else { Self::Ascending }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(DomainError::InvalidSortOrder { spec: s.to_string() }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        })
    }
}

/// 件数でソート（インプレース、安定ソート）
///
/// Equal counts keep their incoming relative order; no secondary key is applied.
pub fn sort_domains(items: &mut [DomainCount], order: SortOrder) {
    items.sort_by(|a, b| order.apply(a.count.cmp(&b.count)));
}

/// ソートされた新しいベクタを返す
pub fn sorted(mut items: Vec<DomainCount>, order: SortOrder) -> Vec<DomainCount> {
    sort_domains(&mut items, order);
    items
}
