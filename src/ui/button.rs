use macroquad::prelude::*;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    StartPause,
    Step,
    Stop,
    Random,
}

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    bounds: Rect,
    label: &'static str,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: &'static str, action: ButtonAction) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            label,
            action,
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.bounds.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        let Rect { x, y, w, h } = self.bounds;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(self.label, None, 20, 1.0);
        draw_text(
            self.label,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
