use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Stacked card layout
pub struct CardLayout {
    pub trigger_area: Rect,
    pub detail_area: Rect,
    pub status_area: Rect,
}

impl CardLayout {
    /// Create stacked layout:
    /// - Trigger: 3 rows (bordered single line), hover target
    /// - Detail: remaining rows, label + timezone list when open
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Trigger
                Constraint::Min(0),    // Detail
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { trigger_area: chunks[0], detail_area: chunks[1], status_area: chunks[2] }
    }
}

/// Whether a terminal cell lies inside `area`
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
