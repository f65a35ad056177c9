//! Mouse hit regions recorded while a frame is drawn.

use ratatui::layout::{Position, Rect};

/// Clickable regions in terminal cells, keyed by item id.
///
/// Regions are kept in draw order; when they overlap, the one drawn last
/// (on top) wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, String)>,
}

impl HitMap {
    /// Map with no regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every region.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Record a region. Empty rectangles are ignored.
    pub fn push(&mut self, area: Rect, id: impl Into<String>) {
        if !area.is_empty() {
            self.regions.push((area, id.into()));
        }
    }

    /// Id of the topmost region containing the cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<&str> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, id)| id.as_str())
    }

    /// Area recorded for `id`, if drawn this frame.
    pub fn area_of(&self, id: &str) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, region)| region == id)
            .map(|(area, _)| *area)
    }

    /// Number of regions recorded.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// No regions recorded.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_outside_every_region() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(2, 2, 4, 1), "a");

        assert_eq!(hits.hit(0, 0), None);
        assert_eq!(hits.hit(6, 2), None);
    }

    #[test]
    fn hit_inside_region() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(2, 2, 4, 1), "a");

        assert_eq!(hits.hit(2, 2), Some("a"));
        assert_eq!(hits.hit(5, 2), Some("a"));
    }

    #[test]
    fn last_drawn_region_wins() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 10, 10), "window");
        hits.push(Rect::new(3, 3, 2, 1), "button");

        assert_eq!(hits.hit(3, 3), Some("button"));
        assert_eq!(hits.hit(1, 1), Some("window"));
    }

    #[test]
    fn empty_regions_are_dropped() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 0, 3), "nothing");

        assert!(hits.is_empty());
    }

    #[test]
    fn area_of_returns_latest_region() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 1, 1), "x");
        hits.push(Rect::new(5, 5, 1, 1), "x");

        assert_eq!(hits.area_of("x"), Some(Rect::new(5, 5, 1, 1)));
        assert_eq!(hits.len(), 2);
        hits.clear();
        assert_eq!(hits.area_of("x"), None);
    }
}
