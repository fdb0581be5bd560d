/// Rows moved by a page up/down.
pub const PAGE_ROWS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

/// Selection within a collection laid out as a grid of `columns` cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    first_row: usize,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn first_row(&self) -> usize {
        self.first_row
    }

    pub fn apply(&mut self, movement: Movement, len: usize, columns: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        let columns = columns.max(1);
        let last = len - 1;

        self.index = match movement {
            Movement::Up if self.index >= columns => self.index - columns,
            Movement::Down if self.index + columns <= last => self.index + columns,
            Movement::Left => self.index.saturating_sub(1),
            Movement::Right => (self.index + 1).min(last),
            Movement::PageUp => self.index.saturating_sub(columns * PAGE_ROWS),
            Movement::PageDown => (self.index + columns * PAGE_ROWS).min(last),
            _ => self.index,
        };
    }

    /// Keep the index inside a collection that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Adjust the first visible row so the selected card is on screen.
    pub fn scroll_into_view(&mut self, columns: usize, visible_rows: usize) {
        let row = self.index / columns.max(1);
        let visible_rows = visible_rows.max(1);
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + visible_rows {
            self.first_row = row + 1 - visible_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_movement() {
        let mut cursor = Cursor::default();
        cursor.apply(Movement::Right, 5, 2);
        assert_eq!(cursor.index(), 1);
        cursor.apply(Movement::Down, 5, 2);
        assert_eq!(cursor.index(), 3);
        // No card below index 3 in a 5-card, 2-column grid.
        cursor.apply(Movement::Down, 5, 2);
        assert_eq!(cursor.index(), 3);
        cursor.apply(Movement::Up, 5, 2);
        assert_eq!(cursor.index(), 1);
        cursor.apply(Movement::Up, 5, 2);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_bounds() {
        let mut cursor = Cursor::default();
        cursor.apply(Movement::Left, 3, 1);
        assert_eq!(cursor.index(), 0);
        cursor.apply(Movement::PageDown, 3, 1);
        assert_eq!(cursor.index(), 2);
        cursor.apply(Movement::Right, 3, 1);
        assert_eq!(cursor.index(), 2);
        cursor.apply(Movement::PageUp, 3, 1);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_empty_collection_pins_to_zero() {
        let mut cursor = Cursor::default();
        cursor.apply(Movement::Down, 0, 3);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut cursor = Cursor::default();
        cursor.apply(Movement::PageDown, 20, 1);
        cursor.clamp(2);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_scroll_into_view() {
        let mut cursor = Cursor::default();
        cursor.apply(Movement::PageDown, 30, 2);
        cursor.scroll_into_view(2, 3);
        assert_eq!(cursor.index(), 8);
        assert_eq!(cursor.first_row(), 2);
        cursor.apply(Movement::PageUp, 30, 2);
        cursor.scroll_into_view(2, 3);
        assert_eq!(cursor.first_row(), 0);
    }
}
