use ratatui::layout::Rect;

/// UI components a screen position can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchInput,
    SuggestionsPanel,
    PriceMin,
    PriceMax,
    ActivityPane,
}

/// Where each component was rendered in the last frame
///
/// Updated during rendering; `None` means the component was not drawn
/// (e.g. the suggestions panel while hidden, or a disabled filter pane).
#[derive(Debug, Default, Clone)]
pub struct LayoutRegions {
    pub search_input: Option<Rect>,
    pub suggestions_panel: Option<Rect>,
    pub price_min: Option<Rect>,
    pub price_max: Option<Rect>,
    pub activity_pane: Option<Rect>,
}

impl LayoutRegions {
    /// Forget everything from the previous frame
    pub fn reset(&mut self) {
        *self = LayoutRegions::default();
    }
}

/// Whether a position falls inside a rect
pub(super) fn contains(rect: Option<Rect>, x: u16, y: u16) -> bool {
    match rect {
        Some(rect) => {
            x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
        }
        None => false,
    }
}
