//! Serial vs parallel advance timing

use std::time::Instant;

use conway_grid::GridEngine;
use rand::{SeedableRng, rngs::StdRng};

fn seeded_engine(size: usize) -> GridEngine {
    let mut engine = GridEngine::new(size, size);
    engine.randomize(&mut StdRng::seed_from_u64(42), 0.3);
    engine
}

fn benchmark(size: usize, iterations: u32, advance: fn(&mut GridEngine)) -> f64 {
    let mut engine = seeded_engine(size);

    let start = Instant::now();
    for _ in 0..iterations {
        advance(&mut engine);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();

    println!("=== Game of Life Advance Benchmark ===\n");

    let sizes = [50, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, GridEngine::advance);
        let parallel_ms = benchmark(size, iterations, GridEngine::advance_parallel);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let cells = 2000 * 2000;
    let ms = benchmark(2000, iterations, GridEngine::advance_parallel);
    println!(
        "\nParallel at 2000x2000: {:.2} ms/gen, {:.1}M cells/sec",
        ms,
        cells as f64 / (ms / 1000.0) / 1_000_000.0
    );
}
