use tracing::debug;

use crate::error::Result;
use crate::models::CatalogItem;

/// Catalog item paired with its efficiency ratio.
#[derive(Debug, Clone, Copy)]
pub struct RankedItem<'a> {
    pub item: &'a CatalogItem,
    pub ratio: f64,
    /// Index in the original catalog.
    pub position: usize,
}

/// Order items by `ratio_of`, highest first.
///
/// Every price is validated before any ratio is computed, so a zero or
/// negative price fails the whole call with `InvalidItem`. Equal ratios keep
/// their catalog order (`sort_by` is stable).
pub fn rank<'a, F>(items: &'a [CatalogItem], ratio_of: F) -> Result<Vec<RankedItem<'a>>>
where
    F: Fn(&CatalogItem) -> f64,
{
    for item in items {
        item.validate()?;
    }

    let mut ranked: Vec<RankedItem<'a>> = items
        .iter()
        .enumerate()
        .map(|(position, item)| RankedItem {
            item,
            ratio: ratio_of(item),
            position,
        })
        .collect();

    ranked.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

    debug!(count = ranked.len(), "ranked catalog");
    Ok(ranked)
}

/// Re-rank an already ranked view, keeping the original positions.
pub fn rerank<'a, F>(ranked: &[RankedItem<'a>], ratio_of: F) -> Vec<RankedItem<'a>>
where
    F: Fn(&CatalogItem) -> f64,
{
    let mut out: Vec<RankedItem<'a>> = ranked
        .iter()
        .map(|r| RankedItem {
            ratio: ratio_of(r.item),
            ..*r
        })
        .collect();
    out.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    out
}
