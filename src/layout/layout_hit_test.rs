use super::layout_regions::{LayoutRegions, Region, contains};

/// Determine which component is at a screen position
///
/// The suggestions panel is checked first: it overlays the panes below it,
/// so a click on a suggestion row must not be attributed to the pane
/// underneath.
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    if contains(regions.suggestions_panel, x, y) {
        return Some(Region::SuggestionsPanel);
    }
    if contains(regions.search_input, x, y) {
        return Some(Region::SearchInput);
    }
    if contains(regions.price_min, x, y) {
        return Some(Region::PriceMin);
    }
    if contains(regions.price_max, x, y) {
        return Some(Region::PriceMax);
    }
    if contains(regions.activity_pane, x, y) {
        return Some(Region::ActivityPane);
    }
    None
}
