use macroquad::prelude::*;

use crate::application::{Settings, Simulation};
use crate::domain::{Cell, GridEngine, Pattern};
use crate::ui::{Button, grid_area_height, grid_area_width, panel_x, preset_key_labels, PANEL_WIDTH};

fn rgb(color: [u8; 3]) -> Color {
    Color::from_rgba(color[0], color[1], color[2], 255)
}

/// Paint every cell of the current generation
pub fn draw_grid(engine: &GridEngine, settings: &Settings) {
    let size = settings.cell_size;
    let alive_color = rgb(settings.alive_color);
    let dead_color = rgb(settings.dead_color);
    let line_color = Color::from_rgba(200, 200, 200, 255);
    let (area_width, area_height) = (grid_area_width(), grid_area_height());
    let draw_lines = size >= 4.0;

    for (row, col, cell) in engine.cells() {
        let (x, y) = (col as f32 * size, row as f32 * size);
        // Skip cells hidden under the panel or below the window
        if x > area_width || y > area_height {
            continue;
        }

        let color = match cell {
            Cell::Alive => alive_color,
            Cell::Dead => dead_color,
        };
        draw_rectangle(x, y, size, size, color);
        if draw_lines {
            draw_rectangle_lines(x, y, size, size, 1.0, line_color);
        }
    }
}

/// Draw the control panel with buttons and status
pub fn draw_controls(sim: &Simulation, buttons: &[Button], patterns: &[Pattern], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let engine = &sim.engine;
    let status_color = if sim.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let grid_info = format!("Grid: {}x{}", engine.rows(), engine.columns());
    let timing = format!("Advance: {:.1}ms", sim.last_advance_time_ms);
    let generation = engine.generation().to_string();
    let population = engine.population().to_string();

    let labels: [(&str, f32, f32, Color); 13] = [
        ("Controls:", 240.0, 14.0, WHITE),
        ("LMB: Toggle cell", 255.0, 12.0, GRAY),
        ("Space: Start/Pause", 268.0, 12.0, GRAY),
        ("N: Step  C: Stop", 281.0, 12.0, GRAY),
        ("R: Random", 294.0, 12.0, GRAY),
        ("Presets (key at pointer):", 312.0, 12.0, WHITE),
        (grid_info.as_str(), 400.0, 12.0, GRAY),
        (timing.as_str(), 415.0, 12.0, GRAY),
        ("Generation:", 445.0, 16.0, WHITE),
        (generation.as_str(), 465.0, 20.0, Color::from_rgba(255, 80, 80, 255)),
        ("Population:", 495.0, 16.0, WHITE),
        (population.as_str(), 515.0, 20.0, Color::from_rgba(180, 180, 180, 255)),
        ("Status:", 550.0, 16.0, WHITE),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    preset_key_labels(patterns).iter().enumerate().for_each(|(i, text)| {
        draw_text(text, px, 326.0 + i as f32 * 13.0, 11.0, GRAY);
    });

    let status = if sim.is_running { "Running" } else { "Paused" };
    draw_text(status, px, 570.0, 16.0, status_color);
}
