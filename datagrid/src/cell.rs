//! Rendered cells and interaction zones.

/// Whether a cell claims clicks for itself.
///
/// A click inside an [`Interactive`](InteractionZone::Interactive) cell is
/// handled by whatever the cell embeds (a button, a toggle) and never
/// reaches the grid's row-click callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionZone {
    /// Clicks fall through to the row.
    #[default]
    Passive,
    /// Clicks stop at the cell.
    Interactive,
}

/// Render-ready content of one cell.
///
/// # Example
///
/// ```
/// use datagrid::{Cell, InteractionZone};
///
/// let label = Cell::text("Ocean Breeze");
/// let actions = Cell::text("Edit | Delete").stop_row_click();
///
/// assert_eq!(label.zone, InteractionZone::Passive);
/// assert!(actions.is_interactive());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Display text.
    pub text: String,
    /// Click handling zone.
    pub zone: InteractionZone,
}

impl Cell {
    /// Create a passive cell with the given text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            zone: InteractionZone::Passive,
        }
    }

    /// Create an empty passive cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mark this cell as interactive so clicks on it do not trigger the row click.
    pub fn stop_row_click(mut self) -> Self {
        self.zone = InteractionZone::Interactive;
        self
    }

    /// Check if this cell claims its clicks.
    pub fn is_interactive(&self) -> bool {
        self.zone == InteractionZone::Interactive
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::text(text)
    }
}
