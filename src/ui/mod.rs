mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::{screen_height, screen_width};

use crate::domain::Pattern;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Map a screen position to a (row, col) cell coordinate. The result may
/// lie outside the grid; the engine reports that as OutOfBounds.
pub fn screen_to_cell(mouse_pos: (f32, f32), cell_size: f32) -> (isize, isize) {
    let row = (mouse_pos.1 / cell_size).floor() as isize;
    let col = (mouse_pos.0 / cell_size).floor() as isize;
    (row, col)
}

/// One panel line per preset, numbered by its hotkey
pub fn preset_key_labels(patterns: &[Pattern]) -> Vec<String> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, pattern)| format!("{}: {} - {}", i + 1, pattern.name, pattern.description))
        .collect()
}

/// Create panel buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    [
        ("Start/Pause", ButtonAction::StartPause),
        ("Step", ButtonAction::Step),
        ("Stop", ButtonAction::Stop),
        ("Random", ButtonAction::Random),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action))| {
        Button::new(px, 20.0 + i as f32 * 50.0, PANEL_WIDTH, BUTTON_HEIGHT, label, action)
    })
    .collect()
}
