//! xsmall — smallest runnable scenario for the swarm coordination framework.
//!
//! Eight agents share six targets and ten resources on a 40 × 40 field.
//! Couriers compete for targets through the coordinator, explorers compete
//! for resources through the claim registry, and the conflict monitor
//! arbitrates any double assignment between agents in range.  Halfway
//! through, the scenario is reset and every agent starts over with full
//! energy.
//!
//! ```text
//! RUST_LOG=debug cargo run -p xsmall -- [config.json]
//! ```

mod policy;
mod scenario;


use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sc_agent::{AgentStore, AgentStoreBuilder};
use sc_coord::AssignmentTable;
use sc_core::{CoordinationConfig, ResourceId, SimConfig, SimRng, TargetId, Tick};
use sc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use sc_sim::{SimBuilder, SimObserver, TickReport};

use policy::FieldPolicy;
use scenario::{build_world, spawn_points};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:           usize = 8;
const SEED:                  u64   = 42;
const TICK_DURATION_SECS:    f32   = 0.1;
const TOTAL_TICKS:           u64   = 600;
const OUTPUT_INTERVAL_TICKS: u64   = 10;

// ── Observer wrapper to count rows and conflicts ──────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    conflicts:     usize,
    reassignments: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, conflicts: 0, reassignments: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        self.summary_rows += 1;
        self.conflicts += report.conflicts.len();
        self.reassignments += report.reassignments.len();
        self.inner.on_tick_end(tick, report);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, assignments: &AssignmentTable) {
        self.snapshot_rows += agents.count;
        self.inner.on_snapshot(tick, agents, assignments);
    }

    fn on_scenario_reset(&mut self, tick: Tick) {
        info!(%tick, "scenario restarted");
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

fn default_config() -> SimConfig {
    SimConfig {
        tick_duration_secs:    TICK_DURATION_SECS,
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        num_threads:           None, // all logical cores
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        coordination:          CoordinationConfig::default(),
    }
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

#[cfg(feature = "parallel")]
fn configure_threads(config: &SimConfig) -> Result<()> {
    if let Some(n) = config.num_threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn configure_threads(_config: &SimConfig) -> Result<()> {
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Config: JSON file from the first argument, or built-in defaults.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => default_config(),
    };
    configure_threads(&config)?;
    info!(
        agents = AGENT_COUNT,
        ticks = config.total_ticks,
        seed = config.seed,
        range = config.coordination.communication_range,
        "starting xsmall"
    );

    // 2. World and agents.
    let mut rng = SimRng::new(config.seed);
    let world = build_world(&mut rng);
    let (positions, headings) = spawn_points(&mut rng, AGENT_COUNT);
    let (store, rngs) = AgentStoreBuilder::new(AGENT_COUNT, config.seed)
        .positions(positions)
        .headings(headings)
        .build();
    info!(
        targets = world.target_count(),
        resources = world.resource_count(),
        "world built"
    );

    // 3. Sim.
    let mut sim = SimBuilder::new(config.clone(), store, rngs, world, FieldPolicy::default())
        .build()?;

    // 4. Output.
    let out_dir = Path::new("output/xsmall");
    std::fs::create_dir_all(out_dir)?;
    let writer = CsvWriter::new(out_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 5. Run the first half, restart the scenario, run the rest.
    let t0 = Instant::now();
    sim.run_ticks(config.total_ticks / 2, &mut obs)?;
    let first_half = (sim.policy.arrivals(), sim.policy.deliveries());
    sim.reset_scenario(&mut obs);
    sim.agents.refill_energy();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output error");
    }
    sim.coordinator.check_invariants()?;

    // 6. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  courier arrivals    : {} (first half {})", sim.policy.arrivals(), first_half.0);
    println!("  explorer deliveries : {} (first half {})", sim.policy.deliveries(), first_half.1);
    println!("  conflicts detected  : {}", obs.conflicts);
    println!("  reassignments       : {}", obs.reassignments);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    // 7. Final agent table.
    println!(
        "{:<6} {:<9} {:>8} {:>8} {:>7} {:<12} {:<14}",
        "Agent", "Role", "x", "z", "Energy", "Target", "Resource"
    );
    println!("{}", "-".repeat(70));
    for agent in sim.agents.agent_ids() {
        let i = agent.index();
        let p = sim.agents.position[i];
        let target = sim.coordinator.assignment_of(agent).unwrap_or(TargetId::INVALID);
        let resource = sim.agents.held_resource[i]
            .or(sim.agents.cargo[i])
            .unwrap_or(ResourceId::INVALID);
        println!(
            "{:<6} {:<9} {:>8.2} {:>8.2} {:>7.1} {:<12} {:<14}",
            agent.0,
            if agent.0 % 2 == 0 { "courier" } else { "explorer" },
            p.x,
            p.z,
            sim.agents.energy[i],
            if target.is_valid() { target.to_string() } else { "-".into() },
            if resource.is_valid() { resource.to_string() } else { "-".into() },
        );
    }

    Ok(())
}
