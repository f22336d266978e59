use enum_map::{Enum, EnumMap};

use crate::column::ColumnId;

/// The edge a column is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enum)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PinSide {
    Left,
    Right,
}

/// Columns pinned to the left and right edge of the grid.
///
/// Pinned columns keep their screen position while the rest of the grid scrolls
/// horizontally. Within one side they are laid out in the order they were pinned,
/// regardless of the order the columns were defined in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ColumnPinningState {
    sides: EnumMap<PinSide, Vec<ColumnId>>,
}

impl ColumnPinningState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin these columns to the left, in this order.
    pub fn left<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColumnId>,
    {
        let mut state = Self::default();
        for column in columns {
            state.pin(column.into(), Some(PinSide::Left));
        }
        state
    }

    /// Also pin these columns to the right, in this order.
    pub fn with_right<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColumnId>,
    {
        for column in columns {
            self.pin(column.into(), Some(PinSide::Right));
        }
        self
    }

    /// Move a column to the end of the given side, or unpin it with `None`.
    pub fn pin(&mut self, column: ColumnId, side: Option<PinSide>) {
        for pinned in self.sides.values_mut() {
            pinned.retain(|c| c != &column);
        }
        if let Some(side) = side {
            self.sides[side].push(column);
        }
    }

    #[inline]
    pub fn unpin(&mut self, column: &ColumnId) {
        self.pin(column.clone(), None);
    }

    pub fn side_of(&self, column: &ColumnId) -> Option<PinSide> {
        self.sides
            .iter()
            .find(|(_, pinned)| pinned.contains(column))
            .map(|(side, _)| side)
    }

    #[inline]
    pub fn is_pinned(&self, column: &ColumnId) -> bool {
        self.side_of(column).is_some()
    }

    /// Pinned columns of one side, in layout order.
    ///
    /// For [`PinSide::Right`] the last entry is the one touching the right edge.
    #[inline]
    pub fn columns(&self, side: PinSide) -> &[ColumnId] {
        &self.sides[side]
    }

    /// Distance from the pinned edge to the near edge of `column`,
    /// given a way to look up column widths.
    ///
    /// For a left-pinned column this is the sum of the widths of the left-pinned
    /// columns before it, for a right-pinned column the sum of those after it.
    /// Pinned ids for which `size_of` returns `None` (no such column) take no space.
    pub fn offset(
        &self,
        column: &ColumnId,
        mut size_of: impl FnMut(&ColumnId) -> Option<f32>,
    ) -> Option<f32> {
        let side = self.side_of(column)?;
        let pinned = &self.sides[side];
        let position = pinned.iter().position(|c| c == column)?;
        let others = match side {
            PinSide::Left => &pinned[..position],
            PinSide::Right => &pinned[position + 1..],
        };
        Some(others.iter().filter_map(&mut size_of).sum())
    }
}
