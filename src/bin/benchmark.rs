//! Serial vs parallel generation timing

use std::time::Instant;
use portfolio_core::domain::{Algorithm, ConwayRule, Grid};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(algorithm: Algorithm, rows: usize, cols: usize, iterations: u32) -> f64 {
    let rule = ConwayRule;
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut grid = Grid::random(rows, cols, 0.2, &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.step(&grid, &rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life step benchmark ===\n");

    // Hero sections at 15px cells, then a few stress sizes
    let sizes = [(48, 85), (72, 128), (144, 256), (500, 500), (1000, 1000), (2000, 2000)];
    let iterations = 20;

    println!("{:>12} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<50}", "");

    for (rows, cols) in sizes {
        let serial_ms = benchmark(Algorithm::Serial, rows, cols, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, rows, cols, iterations);

        println!(
            "{:>12} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", rows, cols),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let auto = Algorithm::auto(72, 128);
    println!("\nA 1080p hero ({}x{}) steps with: {}", 72, 128, auto.name());
}
