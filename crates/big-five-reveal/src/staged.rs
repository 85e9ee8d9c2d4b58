//! Staged display projection
//!
//! Picks the first `count` items of a list and assigns each a side of the timeline.
//! The side comes from the item's index in the full list, so revealing more items
//! never moves the ones already on screen.

/// Side of the timeline an item is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Left,
    Right,
}

impl Placement {
    /// Even indices go left, odd indices go right
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// An item selected for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedItem<'a, T> {
    /// Position in the full list
    pub index: usize,
    pub placement: Placement,
    pub item: &'a T,
}

/// The first `count` items of `items`, in order, with their placements
///
/// A `count` larger than the list is clamped.
pub fn stage<T>(items: &[T], count: usize) -> Vec<StagedItem<'_, T>> {
    items
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, item)| StagedItem {
            index,
            placement: Placement::for_index(index),
            item,
        })
        .collect()
}
