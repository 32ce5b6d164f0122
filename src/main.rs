use anyhow::{bail, Result};
use clap::Parser;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use parking_garage::garage::{Facility, FacilityConfig, ReleasePolicy, Vehicle};

/// Tokens handed to the garage when a valid vehicle arrives
const VEHICLE_TOKENS: [&str; 3] = ["motorcycle", "car", "bus"];
/// Token used to simulate a malformed arrival
const INVALID_TOKEN: &str = "truck";

#[derive(Parser)]
#[command(name = "parking_garage")]
#[command(about = "Headless parking garage simulation")]
struct Cli {
    /// Number of arrival/departure events to simulate
    #[arg(long, default_value = "1000")]
    steps: u32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Chance that a step releases a parked vehicle instead of admitting one
    #[arg(long, default_value = "0.3")]
    departure_chance: f64,

    /// Chance that an arriving vehicle has an unrecognised type
    #[arg(long, default_value = "0.02")]
    invalid_chance: f64,

    /// Credit the tier granted at admission when a vehicle leaves
    #[arg(long)]
    strict_release: bool,

    /// Total capacity units
    #[arg(long)]
    total_units: Option<i64>,

    /// Capacity units per spot tier
    #[arg(long)]
    units_per_tier: Option<i64>,

    /// Total rows
    #[arg(long)]
    total_rows: Option<i64>,

    /// Total levels
    #[arg(long)]
    total_levels: Option<i64>,
}

impl Cli {
    fn facility_config(&self) -> FacilityConfig {
        let mut config = FacilityConfig::default();
        if let Some(total_units) = self.total_units {
            config.total_units = total_units;
        }
        if let Some(units_per_tier) = self.units_per_tier {
            config.units_per_tier = units_per_tier;
        }
        if let Some(total_rows) = self.total_rows {
            config.total_rows = total_rows;
        }
        if let Some(total_levels) = self.total_levels {
            config.total_levels = total_levels;
        }
        config
    }
}

/// Running totals for one simulation
#[derive(Debug, Default)]
struct SimStats {
    admitted: usize,
    rejected: usize,
    released: usize,
}

/// Drives a facility with random arrivals and departures
struct Simulation {
    facility: Facility,
    /// The callers' own vehicle records, kept so they can be released later
    parked: Vec<Vehicle>,
    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,
    stats: SimStats,
}

impl Simulation {
    fn new(facility: Facility, seed: Option<u64>) -> Self {
        Self {
            facility,
            parked: Vec::new(),
            rng: seed.map(StdRng::seed_from_u64),
            stats: SimStats::default(),
        }
    }

    /// Roll a probability, using seeded RNG if available
    fn random_bool(&mut self, chance: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(chance),
            None => rand::rng().random_bool(chance),
        }
    }

    /// Get a random index below `len`, using seeded RNG if available
    fn random_index(&mut self, len: usize) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..len),
            None => rand::rng().random_range(0..len),
        }
    }

    fn random_token(&mut self) -> &'static str {
        let token = match &mut self.rng {
            Some(rng) => VEHICLE_TOKENS.choose(rng),
            None => VEHICLE_TOKENS.choose(&mut rand::rng()),
        };
        token.copied().unwrap_or(VEHICLE_TOKENS[1])
    }

    fn step(&mut self, departure_chance: f64, invalid_chance: f64) {
        if !self.parked.is_empty() && self.random_bool(departure_chance) {
            let len = self.parked.len();
            let index = self.random_index(len);
            let mut vehicle = self.parked.swap_remove(index);
            self.facility.release(&mut vehicle);
            self.stats.released += 1;
            return;
        }

        let token = if self.random_bool(invalid_chance) {
            INVALID_TOKEN
        } else {
            self.random_token()
        };

        let mut vehicle = self.facility.create_vehicle(token);
        self.facility.clear_last_error();
        self.facility.admit(&mut vehicle);

        if vehicle.is_parked() {
            debug!("{} parked at location {:?}", token, vehicle.location_id());
            self.parked.push(vehicle);
            self.stats.admitted += 1;
        } else {
            if let Some(error) = self.facility.last_error() {
                debug!("{} turned away: {}", token, error);
            }
            self.stats.rejected += 1;
        }
    }

    fn log_stats(&self) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Admitted: {}", self.stats.admitted);
        info!("Rejected: {}", self.stats.rejected);
        info!("Released: {}", self.stats.released);
        info!("Still parked: {}", self.facility.parked_count());
        if self.facility.is_full() {
            warn!("Facility reported full during the run");
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run_headless(&cli)
}

/// Run the simulation in headless mode
fn run_headless(cli: &Cli) -> Result<()> {
    for (name, chance) in [
        ("departure-chance", cli.departure_chance),
        ("invalid-chance", cli.invalid_chance),
    ] {
        if !(0.0..=1.0).contains(&chance) {
            bail!("--{} must be between 0 and 1 (got {})", name, chance);
        }
    }

    let release_policy = if cli.strict_release {
        ReleasePolicy::GrantedTier
    } else {
        ReleasePolicy::RecomputeByAvailability
    };
    let facility = Facility::with_config(cli.facility_config())?.with_release_policy(release_policy);

    info!("Running parking garage simulation in headless mode...");
    info!("Steps: {}, release policy: {:?}", cli.steps, release_policy);

    let mut sim = Simulation::new(facility, cli.seed);

    println!("Initial state:");
    sim.facility.print_summary();
    println!();

    for step in 1..=cli.steps {
        sim.step(cli.departure_chance, cli.invalid_chance);
        if step % 100 == 0 {
            info!("After step {}: {}", step, sim.facility.summary());
        }
    }

    println!("=== Final State ===");
    sim.facility.print_summary();
    sim.log_stats();

    Ok(())
}
