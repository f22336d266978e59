use egui::{Color32, Stroke, Visuals};

/// Colors and strokes of a [`crate::DataGrid`].
///
/// Every field left at `None` is taken from `ui.visuals()` each frame.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct GridStyle {
    /// Background color for selected rows.
    /// Falls back to `ui.visuals().selection.bg_fill`.
    pub selection_bg_color: Option<Color32>,

    /// Background color for hovered rows.
    /// Falls back to `ui.visuals().widgets.hovered.weak_bg_fill`.
    pub hovered_bg_color: Option<Color32>,

    /// Background of pinned cells. Must be opaque so scrolled cells don't show through.
    /// Falls back to `ui.visuals().panel_fill`.
    pub pinned_bg_color: Option<Color32>,

    /// Header background color.
    /// When `None`, the header uses the pinned background for pinned cells and nothing otherwise.
    pub header_bg_color: Option<Color32>,

    /// Stroke for the outer frame and the lines between rows.
    /// Falls back to `ui.visuals().widgets.noninteractive.bg_stroke`.
    pub border_stroke: Option<Stroke>,

    /// Stroke of a resize handle while hovered or dragged.
    /// Falls back to `ui.visuals().widgets.active.bg_stroke`.
    pub resize_handle_stroke: Option<Stroke>,

    /// Text color of the "No results." row.
    /// Falls back to `ui.visuals().weak_text_color()`.
    pub empty_text_color: Option<Color32>,
}

impl GridStyle {
    /// Create a new empty style (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection background color.
    #[inline]
    pub fn selection_bg_color(mut self, color: Color32) -> Self {
        self.selection_bg_color = Some(color);
        self
    }

    /// Set the hovered row background color.
    #[inline]
    pub fn hovered_bg_color(mut self, color: Color32) -> Self {
        self.hovered_bg_color = Some(color);
        self
    }

    /// Set the pinned cell background color.
    #[inline]
    pub fn pinned_bg_color(mut self, color: Color32) -> Self {
        self.pinned_bg_color = Some(color);
        self
    }

    /// Set the header background color.
    #[inline]
    pub fn header_bg_color(mut self, color: Color32) -> Self {
        self.header_bg_color = Some(color);
        self
    }

    /// Set the border stroke.
    #[inline]
    pub fn border_stroke(mut self, stroke: impl Into<Stroke>) -> Self {
        self.border_stroke = Some(stroke.into());
        self
    }

    /// Set the active resize handle stroke.
    #[inline]
    pub fn resize_handle_stroke(mut self, stroke: impl Into<Stroke>) -> Self {
        self.resize_handle_stroke = Some(stroke.into());
        self
    }

    #[inline]
    pub fn empty_text_color(mut self, color: Color32) -> Self {
        self.empty_text_color = Some(color);
        self
    }

    pub(crate) fn resolve(&self, visuals: &Visuals) -> ResolvedStyle {
        let pinned_bg = self.pinned_bg_color.unwrap_or(visuals.panel_fill);
        ResolvedStyle {
            selection_bg: self.selection_bg_color.unwrap_or(visuals.selection.bg_fill),
            hovered_bg: self
                .hovered_bg_color
                .unwrap_or(visuals.widgets.hovered.weak_bg_fill),
            pinned_bg,
            header_bg: self.header_bg_color,
            border: self
                .border_stroke
                .unwrap_or(visuals.widgets.noninteractive.bg_stroke),
            handle_idle: visuals.widgets.noninteractive.bg_stroke,
            handle_hovered: visuals.widgets.hovered.bg_stroke,
            handle_active: self
                .resize_handle_stroke
                .unwrap_or(visuals.widgets.active.bg_stroke),
            empty_text: self
                .empty_text_color
                .unwrap_or_else(|| visuals.weak_text_color()),
        }
    }
}

/// [`GridStyle`] with every fallback filled in for the current frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ResolvedStyle {
    pub selection_bg: Color32,
    pub hovered_bg: Color32,
    pub pinned_bg: Color32,
    pub header_bg: Option<Color32>,
    pub border: Stroke,
    pub handle_idle: Stroke,
    pub handle_hovered: Stroke,
    pub handle_active: Stroke,
    pub empty_text: Color32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_fall_back_to_visuals() {
        let visuals = Visuals::light();
        let resolved = GridStyle::new().resolve(&visuals);
        assert_eq!(resolved.selection_bg, visuals.selection.bg_fill);
        assert_eq!(resolved.pinned_bg, visuals.panel_fill);
        assert_eq!(resolved.border, visuals.widgets.noninteractive.bg_stroke);
        assert_eq!(resolved.header_bg, None);
    }

    #[test]
    fn overrides_win() {
        let resolved = GridStyle::new()
            .pinned_bg_color(Color32::WHITE)
            .border_stroke((2.0, Color32::RED))
            .resolve(&Visuals::dark());
        assert_eq!(resolved.pinned_bg, Color32::WHITE);
        assert_eq!(resolved.border, Stroke::new(2.0, Color32::RED));
    }
}
