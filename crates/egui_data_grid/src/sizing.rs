//! Column widths and the resize drag.

use egui::Rangef;

use crate::column::ColumnId;

/// When a resize drag changes the column width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ColumnResizeMode {
    /// The width follows the pointer on every frame of the drag.
    Live,

    /// Only the handle follows the pointer; the width is committed on release.
    #[default]
    Deferred,
}

/// A resize drag in progress.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeDrag {
    pub column: ColumnId,

    /// Pointer x when the drag started.
    pub start_pointer_x: f32,

    /// Column width when the drag started.
    pub start_size: f32,

    /// How far the pointer moved since the drag started. Not clamped.
    pub delta: f32,
}

impl ResizeDrag {
    /// The width the column would get if the drag ended now.
    #[inline]
    pub fn pending_size(&self, range: Rangef) -> f32 {
        range.clamp(self.start_size + self.delta)
    }
}

/// Committed column widths, plus the drag currently resizing one of them.
///
/// Columns without an entry use [`crate::ColumnDef::default_size`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ColumnSizingState {
    sizes: ahash::HashMap<ColumnId, f32>,

    #[cfg_attr(feature = "serde", serde(skip))]
    drag: Option<ResizeDrag>,
}

impl ColumnSizingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The width a column is laid out with: its committed width, else `default_size`,
    /// clamped to `range`.
    pub fn size(&self, column: &ColumnId, default_size: f32, range: Rangef) -> f32 {
        range.clamp(self.sizes.get(column).copied().unwrap_or(default_size))
    }

    /// The committed width, if the user ever resized this column.
    #[inline]
    pub fn committed(&self, column: &ColumnId) -> Option<f32> {
        self.sizes.get(column).copied()
    }

    pub fn set_size(&mut self, column: ColumnId, size: f32) {
        self.sizes.insert(column, size);
    }

    /// Forget the committed width of one column.
    pub fn reset(&mut self, column: &ColumnId) {
        self.sizes.remove(column);
    }

    pub fn reset_all(&mut self) {
        self.sizes.clear();
        self.drag = None;
    }

    #[inline]
    pub fn drag(&self) -> Option<&ResizeDrag> {
        self.drag.as_ref()
    }

    #[inline]
    pub fn is_resizing(&self, column: &ColumnId) -> bool {
        self.drag.as_ref().is_some_and(|drag| &drag.column == column)
    }

    /// Current pointer offset of the handle of `column`, `0.0` unless it is being dragged.
    pub fn delta(&self, column: &ColumnId) -> f32 {
        match &self.drag {
            Some(drag) if &drag.column == column => drag.delta,
            _ => 0.0,
        }
    }

    /// Start dragging the handle of `column`, which is currently `current_size` wide.
    ///
    /// Replaces any drag already in progress without committing it.
    pub fn begin(&mut self, column: ColumnId, pointer_x: f32, current_size: f32) {
        self.drag = Some(ResizeDrag {
            column,
            start_pointer_x: pointer_x,
            start_size: current_size,
            delta: 0.0,
        });
    }

    /// Move the dragged handle to `pointer_x`.
    ///
    /// In [`ColumnResizeMode::Live`] the width is committed right away.
    pub fn update(&mut self, pointer_x: f32, mode: ColumnResizeMode, range: Rangef) {
        let Some(drag) = &mut self.drag else {
            return;
        };
        drag.delta = pointer_x - drag.start_pointer_x;
        if mode == ColumnResizeMode::Live {
            let size = drag.pending_size(range);
            self.sizes.insert(drag.column.clone(), size);
        }
    }

    /// End the drag and commit the width. Returns the column and its new width.
    pub fn finish(&mut self, range: Rangef) -> Option<(ColumnId, f32)> {
        let drag = self.drag.take()?;
        let size = drag.pending_size(range);
        self.sizes.insert(drag.column.clone(), size);
        Some((drag.column, size))
    }

    /// End the drag and restore the width the column had when it started.
    pub fn cancel(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.sizes.insert(drag.column, drag.start_size);
        }
    }
}
