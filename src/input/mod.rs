use log::debug;
use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Pattern;
use crate::ui::{Button, ButtonAction, grid_area_width, screen_to_cell};

/// Remembers the cell under a held pointer so a drag toggles each cell
/// once on entry instead of on every frame.
#[derive(Default)]
pub struct DragTracker {
    last_cell: Option<(isize, isize)>,
}

impl DragTracker {
    /// Report the cell under the held pointer (None when released or off
    /// the grid area). Returns the cell to toggle, if it was just entered.
    pub fn enter(&mut self, cell: Option<(isize, isize)>) -> Option<(isize, isize)> {
        let entered = cell.filter(|&c| self.last_cell != Some(c));
        self.last_cell = cell;
        entered
    }
}

/// Toggle cells under the left mouse button
pub fn handle_mouse_toggle(
    sim: &mut Simulation,
    drag: &mut DragTracker,
    mouse_pos: (f32, f32),
    cell_size: f32,
) {
    let held = is_mouse_button_down(MouseButton::Left) && mouse_pos.0 < grid_area_width();
    let cell = held.then(|| screen_to_cell(mouse_pos, cell_size));

    if let Some((row, col)) = drag.enter(cell) {
        if let Err(err) = sim.toggle_cell(row, col) {
            debug!("ignoring pointer: {err}");
        }
    }
}

/// Place the preset bound to keys 1..=9 with its top-left under the pointer
pub fn handle_pattern_keys(
    sim: &mut Simulation,
    patterns: &[Pattern],
    mouse_pos: (f32, f32),
    cell_size: f32,
) {
    const KEYS: [KeyCode; 9] = [
        KeyCode::Key1, KeyCode::Key2, KeyCode::Key3,
        KeyCode::Key4, KeyCode::Key5, KeyCode::Key6,
        KeyCode::Key7, KeyCode::Key8, KeyCode::Key9,
    ];

    let Some(pattern) = KEYS
        .iter()
        .zip(patterns)
        .find_map(|(key, pattern)| is_key_pressed(*key).then_some(pattern))
    else {
        return;
    };

    let (row, col) = screen_to_cell(mouse_pos, cell_size);
    if let Err(err) = sim.place_pattern(pattern, row, col) {
        debug!("{} does not fit: {err}", pattern.name);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::N, Simulation::step),
        (KeyCode::C, Simulation::stop),
        (KeyCode::R, Simulation::randomize),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(sim: Simulation, buttons: &[Button], mouse_pos: (f32, f32)) -> Simulation {
    buttons.iter().fold(sim, |s, btn| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match btn.action {
            ButtonAction::StartPause => s.toggle_running(),
            ButtonAction::Step => s.step(),
            ButtonAction::Stop => s.stop(),
            ButtonAction::Random => s.randomize(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_toggles_each_cell_once() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.enter(Some((1, 1))), Some((1, 1)));
        assert_eq!(drag.enter(Some((1, 1))), None);
        assert_eq!(drag.enter(Some((1, 2))), Some((1, 2)));
    }

    #[test]
    fn test_release_rearms_same_cell() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.enter(Some((0, 0))), Some((0, 0)));
        assert_eq!(drag.enter(None), None);
        assert_eq!(drag.enter(Some((0, 0))), Some((0, 0)));
    }
}
