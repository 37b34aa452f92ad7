//! Copy calculation
//!
//! The track renders the item sequence several times back to back. Enough
//! copies must exist to cover the container plus headroom, so the seam at
//! the wrap point is always off screen.

use smallvec::SmallVec;

use crate::item::LoopItem;

/// Copies rendered before anything has been measured
pub const MIN_COPIES: usize = 2;
/// Extra copies beyond those needed to cover the container
pub const COPY_HEADROOM: usize = 2;
/// Upper bound on rendered copies, reached only by degenerate measurements
pub const MAX_COPIES: usize = 1024;

/// Number of copies needed to cover `container_extent`
///
/// `max(MIN_COPIES, ceil(container / sequence) + COPY_HEADROOM)`. Returns
/// [`MIN_COPIES`] when the sequence has not been measured (non-positive) or
/// either input is not finite, and never more than [`MAX_COPIES`].
pub fn copy_count(container_extent: f32, sequence_extent: f32) -> usize {
    if !(sequence_extent.is_finite() && sequence_extent > 0.0) || !container_extent.is_finite() {
        return MIN_COPIES;
    }
    let covering = (container_extent.max(0.0) / sequence_extent).ceil();
    let needed = (covering + COPY_HEADROOM as f32).min(MAX_COPIES as f32);
    (needed as usize).max(MIN_COPIES)
}

/// One item as rendered inside a copy
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<'a> {
    /// Stable key: `{copy}-{item}`
    pub key: String,
    pub item: &'a LoopItem,
    /// Label on the wrapping link, when linked
    pub link_label: Option<&'a str>,
    /// Visual hidden from assistive technology
    pub visual_hidden: bool,
}

/// One rendered copy of the sequence
#[derive(Clone, Debug, PartialEq)]
pub struct LoopCopy<'a> {
    pub index: usize,
    /// Copies after the first are duplicates for assistive technology
    pub aria_hidden: bool,
    pub items: Vec<RenderedItem<'a>>,
}

impl LoopCopy<'_> {
    /// The first copy is the one the host measures
    pub fn is_measured(&self) -> bool {
        self.index == 0
    }
}

/// Describe `count` contiguous copies of `items`
pub fn render_copies(items: &[LoopItem], count: usize) -> SmallVec<[LoopCopy<'_>; 4]> {
    (0..count)
        .map(|copy_index| LoopCopy {
            index: copy_index,
            aria_hidden: copy_index > 0,
            items: items
                .iter()
                .enumerate()
                .map(|(item_index, item)| RenderedItem {
                    key: format!("{copy_index}-{item_index}"),
                    item,
                    link_label: item.link_label(),
                    visual_hidden: item.is_visual_hidden(),
                })
                .collect(),
        })
        .collect()
}
