use macroquad::prelude::*;
use conway_grid::{
    Settings, Simulation, presets,
    input::{self, DragTracker},
    rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Settings from the JSON file named by the first argument, or defaults
fn load_settings() -> Settings {
    let Some(arg) = std::env::args().nth(1) else {
        return Settings::default();
    };

    if arg == "--example" {
        match serde_json::to_string_pretty(&Settings::default()) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing settings: {e}"),
        }
        std::process::exit(0);
    }

    Settings::load(&arg).unwrap_or_else(|e| {
        eprintln!("Error loading {arg}: {e}");
        std::process::exit(1);
    })
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = load_settings();
    log::info!(
        "starting {}x{} grid, {}ms per generation",
        settings.rows,
        settings.columns,
        settings.tick_interval_ms
    );

    let mut sim = Simulation::new(&settings);
    let mut drag = DragTracker::default();
    let patterns = presets::all_patterns();

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        // Process input
        sim = input::process_button_clicks(sim, &buttons, mouse_pos);
        input::handle_mouse_toggle(&mut sim, &mut drag, mouse_pos, settings.cell_size);
        input::handle_pattern_keys(&mut sim, &patterns, mouse_pos, settings.cell_size);
        sim = input::process_keyboard_input(sim);

        // Update simulation
        sim = sim.tick(get_frame_time());

        // Render
        clear_background(BLACK);
        rendering::draw_grid(&sim.engine, &settings);
        rendering::draw_controls(&sim, &buttons, &patterns, mouse_pos);

        next_frame().await;
    }
}
