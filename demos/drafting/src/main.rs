//! drafting — one full barge loading session with a man-overboard drill.
//!
//! Runs the six-phase sequence at a fixed 30 Hz step, triggers the MOB drill
//! at a seeded random moment during `CargoLoad`, records the session to
//! `output/drafting/{ticks,events}.csv` plus a `summary.json` of the final barge
//! state, and prints the draft survey.
//!
//! Usage: `drafting [config.json]`.  `RUST_LOG` controls log verbosity.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use freq_core::{Phase, SimConfig};
use freq_output::{CsvWriter, SimOutputObserver};
use freq_sim::{SimBuilder, SimObserver, SimSnapshot};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64 = 42;
const TICK_HZ:    f32 = 30.0;
const MAX_TICKS:  u64 = 1_000_000;
const OUTPUT_DIR: &str = "output/drafting";

// ── Phase log ─────────────────────────────────────────────────────────────────

/// Remembers when each phase began, for the summary table.
#[derive(Default)]
struct PhaseLog {
    last_elapsed: f32,
    entries:      Vec<(Phase, f32)>,
    mob_drills:   u32,
}

impl SimObserver for PhaseLog {
    fn on_phase_changed(&mut self, phase: Phase) {
        self.entries.push((phase, self.last_elapsed));
    }

    fn on_mob_state_changed(&mut self, active: bool) {
        if active {
            self.mob_drills += 1;
        }
    }

    fn on_tick_end(&mut self, snapshot: &SimSnapshot) {
        self.last_elapsed = snapshot.simulation_elapsed_secs;
    }
}

fn load_config() -> Result<SimConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            let config = SimConfig::from_json_str(&text)
                .with_context(|| format!("parsing config {path}"))?;
            info!(%path, "loaded config");
            Ok(config)
        }
        None => Ok(SimConfig::default()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let dt     = 1.0 / TICK_HZ;

    // MOB fires somewhere in the first two thirds of CargoLoad.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mob_at  = rng.gen_range(0.0..=config.phases.cargo_load.max(0.0) * 2.0 / 3.0);

    println!("=== drafting — barge loading session ===");
    println!(
        "Barge: {:.0} × {:.0} × {:.0} ft  |  Capacity: {:.0} t  |  Step: {TICK_HZ} Hz",
        config.barge.length_ft(),
        config.barge.beam_ft(),
        config.barge.depth_ft(),
        config.barge.max_cargo_tons,
    );
    println!(
        "Nominal duration: {:.0} s  |  MOB drill at CargoLoad + {mob_at:.1} s (seed {SEED})",
        config.phases.total()
    );
    println!();

    // 1. Build sim.
    let mut sim = SimBuilder::equipped(config).build()?;

    // 2. Set up output.
    let writer   = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let recorder = Rc::new(RefCell::new(SimOutputObserver::new(writer)));
    let log      = Rc::new(RefCell::new(PhaseLog::default()));
    sim.subscribe(Box::new(Rc::clone(&recorder)));
    sim.subscribe(Box::new(Rc::clone(&log)));

    // 3. Run.
    let t0 = Instant::now();
    sim.start();
    let mut ticks   = 0u64;
    let mut drilled = false;
    while !sim.is_complete() {
        if ticks >= MAX_TICKS {
            bail!("session still in {} after {ticks} ticks", sim.phase());
        }
        if !drilled && sim.phase() == Phase::CargoLoad && sim.phase_elapsed_secs() >= mob_at {
            sim.trigger_mob();
            drilled = true;
        }
        sim.tick(dt);
        ticks += 1;
    }
    let wall = t0.elapsed();

    if let Err(e) = recorder.borrow_mut().finish() {
        eprintln!("output error: {e}");
    }
    if let Some(barge) = sim.barge() {
        let summary = serde_json::json!({
            "barge":          barge,
            "waterline_pose": barge.waterline_pose(),
            "ticks":          ticks,
            "mob_drill_at":   mob_at,
        });
        std::fs::write(
            Path::new(OUTPUT_DIR).join("summary.json"),
            serde_json::to_string_pretty(&summary)?,
        )?;
    }

    // 4. Summary.
    println!(
        "Session complete: {ticks} ticks, simulated {} in {:.3} s",
        sim.clock(),
        wall.as_secs_f64()
    );
    println!("  {OUTPUT_DIR}/ticks.csv  : {} rows", recorder.borrow().ticks_recorded());
    println!("  {OUTPUT_DIR}/summary.json : final barge state");
    println!("  MOB drills           : {}", log.borrow().mob_drills);
    println!();

    println!("{:<4} {:<14} {:>10}", "#", "Phase", "Entered");
    println!("{}", "-".repeat(30));
    for (phase, at) in &log.borrow().entries {
        println!("{:<4} {:<14} {:>9.1}s", phase.ordinal(), phase.display_name(), at);
    }
    println!();

    let draft = sim.draft_readings();
    let stab  = sim.stability_metrics();
    println!("Final survey");
    println!(
        "  Draft (ft)  fore {:.2}  aft {:.2}  port {:.2}  stbd {:.2}  mean {:.2}",
        draft.fore, draft.aft, draft.port, draft.starboard, draft.mean()
    );
    println!(
        "  GM {:.2} m  |  trim {:.2}°  |  heel {:.3}°",
        stab.gm_m, stab.trim_deg, stab.heel_deg
    );
    if let Some(barge) = sim.barge() {
        let pose = barge.waterline_pose();
        println!(
            "  Cargo {:.0} t  |  hull sinks {:.1} cm",
            barge.cargo_tons(),
            -pose.z_offset_cm
        );
    }

    Ok(())
}
