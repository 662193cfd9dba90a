//! # Headless Climb Simulation Binary
//!
//! Golden path for the level engine: a simulated climber ascends for N
//! ticks while the void chases, then the engine is torn down. Exercises
//! generation, scheduling, and destruction exactly as the game loop would.
//!
//! Usage: `skywell_sim [ticks]` (default 1800 = 30 seconds at 60 FPS)

use std::time::Instant;

use skywell::{ClimbSim, SimConfig};
use skywell_level::LevelConfig;

fn main() {
    let ticks = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1800);

    let sim_config = SimConfig {
        ticks,
        ..SimConfig::default()
    };

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                    SKYWELL HEADLESS CLIMB                        ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  Climber ascends, void chases, engine generates and destroys.    ║");
    println!("║  Ticks: {ticks:>8}                                               ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let sim = match ClimbSim::new(LevelConfig::default(), sim_config) {
        Ok(sim) => sim,
        Err(error) => {
            eprintln!("config rejected: {error}");
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let report = sim.run();
    let elapsed = start.elapsed();

    let ticks_per_sec = f64::from(report.ticks) / elapsed.as_secs_f64();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                         RUN SUMMARY                              ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║ Ticks:              {:>12}                                 ║", report.ticks);
    println!("║ Wall Time:          {:>12.3} ms                              ║", elapsed.as_secs_f64() * 1000.0);
    println!("║ Rate:               {:>12.0} ticks/sec                       ║", ticks_per_sec);
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║ Chunks Generated:   {:>12}                                 ║", report.final_stats.chunks_generated);
    println!("║ Peak Live:          {:>12}                                 ║", report.peak_live);
    println!("║ Live At End:        {:>12}                                 ║", report.final_stats.total_platforms);
    println!("║ Light Emitters:     {:>12}                                 ║", report.final_stats.light_emitter_count);
    println!("║ Frontier Y:         {:>12.1}                                 ║", report.final_stats.last_generated_y);
    if let Some(top) = report.highest_platform {
        println!("║ Topmost Platform:   ({:>7.1}, {:>8.1})                         ║", top.x, top.y);
    }
    println!("╚══════════════════════════════════════════════════════════════════╝");
}
