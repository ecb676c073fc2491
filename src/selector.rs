//! Single-choice clip menu
//!
//! The terminal implementation lays the options out in a grid:
//! - Arrow keys / Tab: move the highlight
//! - Enter: choose the highlighted clip
//! - Esc, Ctrl+C or any other key: cancel

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveToColumn, MoveToPreviousLine, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};

/// Outcome of a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(String),
    Cancelled,
}

/// Presents options and returns the user's pick
pub trait Selector: Send + Sync {
    fn select(&self, options: &[String]) -> io::Result<Selection>;
}

/// Grid navigation state, independent of rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGrid {
    len: usize,
    columns: usize,
    selected: usize,
}

impl MenuGrid {
    pub fn new(len: usize, columns: usize) -> Self {
        Self {
            len,
            columns: columns.max(1),
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    pub fn left(&mut self) {
        if self.selected % self.columns > 0 {
            self.selected -= 1;
        }
    }

    pub fn right(&mut self) {
        let next = self.selected + 1;
        if next < self.len && next % self.columns != 0 {
            self.selected = next;
        }
    }

    pub fn up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    pub fn down(&mut self) {
        if self.selected + self.columns < self.len {
            self.selected += self.columns;
        }
    }

    /// Advance in reading order, wrapping at the end
    pub fn next(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + 1) % self.len;
        }
    }

    pub fn step(&mut self, step: Step) {
        match step {
            Step::Left => self.left(),
            Step::Right => self.right(),
            Step::Up => self.up(),
            Step::Down => self.down(),
            Step::Next => self.next(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Left,
    Right,
    Up,
    Down,
    Next,
}

/// What a key press does to an open menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuKey {
    Move(Step),
    Submit,
    Cancel,
    Ignore,
}

// Anything unexpected, Ctrl+C included, closes the menu
fn classify(key: &KeyEvent) -> MenuKey {
    if key.kind != KeyEventKind::Press {
        return MenuKey::Ignore;
    }
    match key.code {
        KeyCode::Left => MenuKey::Move(Step::Left),
        KeyCode::Right => MenuKey::Move(Step::Right),
        KeyCode::Up => MenuKey::Move(Step::Up),
        KeyCode::Down => MenuKey::Move(Step::Down),
        KeyCode::Tab => MenuKey::Move(Step::Next),
        KeyCode::Enter => MenuKey::Submit,
        _ => MenuKey::Cancel,
    }
}

/// Menu drawn inline in the controlling terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSelector;

/// Leaves raw mode and restores the cursor however the menu exits
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show);
        let _ = terminal::disable_raw_mode();
    }
}

impl Selector for TerminalSelector {
    fn select(&self, options: &[String]) -> io::Result<Selection> {
        if options.is_empty() {
            return Ok(Selection::Cancelled);
        }

        let (term_width, _) = terminal::size().unwrap_or((80, 24));
        let widest = options.iter().map(|o| o.chars().count()).max().unwrap_or(0);
        let cell_width = (widest + 2).min(term_width.max(1) as usize);
        let mut grid = MenuGrid::new(options.len(), term_width as usize / cell_width);

        let _guard = RawModeGuard::enter()?;
        let mut out = io::stdout();
        let mut drawn = render(&mut out, &grid, options, cell_width, 0)?;

        loop {
            match event::read()? {
                Event::Key(key) => match classify(&key) {
                    MenuKey::Move(step) => grid.step(step),
                    MenuKey::Submit => {
                        return Ok(Selection::Chosen(options[grid.selected()].clone()))
                    }
                    MenuKey::Cancel => return Ok(Selection::Cancelled),
                    MenuKey::Ignore => continue,
                },
                Event::Resize(..) => {}
                _ => continue,
            }
            drawn = render(&mut out, &grid, options, cell_width, drawn)?;
        }
    }
}

/// Draw the grid, replacing the previous `drawn` lines. Returns lines drawn.
fn render(
    out: &mut impl Write,
    grid: &MenuGrid,
    options: &[String],
    cell_width: usize,
    drawn: u16,
) -> io::Result<u16> {
    if drawn > 0 {
        queue!(out, MoveToPreviousLine(drawn))?;
    }
    queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let idx = row * grid.columns() + col;
            let Some(option) = options.get(idx) else {
                break;
            };
            let label: String = option.chars().take(cell_width.saturating_sub(1)).collect();
            let cell = format!("{:<width$}", label, width = cell_width);
            if idx == grid.selected() {
                queue!(out, PrintStyledContent(cell.reverse()))?;
            } else {
                queue!(out, Print(cell))?;
            }
        }
        queue!(out, Print("\r\n"))?;
    }

    out.flush()?;
    Ok(grid.rows() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rows() {
        assert_eq!(MenuGrid::new(7, 3).rows(), 3);
        assert_eq!(MenuGrid::new(6, 3).rows(), 2);
        assert_eq!(MenuGrid::new(0, 3).rows(), 0);
    }

    #[test]
    fn test_zero_columns_clamped_to_one() {
        let grid = MenuGrid::new(4, 0);
        assert_eq!(grid.columns(), 1);
        assert_eq!(grid.rows(), 4);
    }

    #[test]
    fn test_horizontal_moves_stay_in_row() {
        let mut grid = MenuGrid::new(7, 3);
        grid.left();
        assert_eq!(grid.selected(), 0);

        grid.right();
        grid.right();
        assert_eq!(grid.selected(), 2);
        grid.right();
        assert_eq!(grid.selected(), 2, "right edge of the row");
    }

    #[test]
    fn test_vertical_moves_respect_ragged_last_row() {
        let mut grid = MenuGrid::new(7, 3);
        grid.right();
        grid.down();
        assert_eq!(grid.selected(), 4);
        grid.down();
        assert_eq!(grid.selected(), 4, "no item below in the last row");
        grid.up();
        assert_eq!(grid.selected(), 1);
    }

    #[test]
    fn test_next_wraps() {
        let mut grid = MenuGrid::new(2, 2);
        grid.next();
        grid.next();
        assert_eq!(grid.selected(), 0);
    }

    #[test]
    fn test_classify_keys() {
        use crossterm::event::KeyModifiers;

        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(classify(&press(KeyCode::Enter)), MenuKey::Submit);
        assert_eq!(classify(&press(KeyCode::Esc)), MenuKey::Cancel);
        assert_eq!(classify(&press(KeyCode::Char('x'))), MenuKey::Cancel);
        assert_eq!(
            classify(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            MenuKey::Cancel
        );
        assert_eq!(classify(&press(KeyCode::Down)), MenuKey::Move(Step::Down));
    }

    #[test]
    fn test_render_marks_rows() {
        let options = vec!["kick.wav".to_string(), "snare.wav".to_string()];
        let grid = MenuGrid::new(options.len(), 1);
        let mut out = Vec::new();

        let drawn = render(&mut out, &grid, &options, 11, 0).unwrap();

        assert_eq!(drawn, 2);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("kick.wav"));
        assert!(text.contains("snare.wav"));
    }

    #[test]
    fn test_empty_options_cancel_without_terminal() {
        assert_eq!(TerminalSelector.select(&[]).unwrap(), Selection::Cancelled);
    }
}
