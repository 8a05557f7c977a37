//! CLI command implementations.

use serde::Serialize;

use pbd2d_solver::SimulationConfig;
use pbd2d_world::World;

use pbd2d_cli::ScenarioKind;

/// Final positions of one body.
#[derive(Serialize)]
struct BodySnapshot<'a> {
    id: u32,
    name: &'a str,
    positions: Vec<[f32; 2]>,
}

/// Everything `simulate --output` writes.
#[derive(Serialize)]
struct SimulationSnapshot<'a> {
    scenario: &'a str,
    steps: u32,
    simulated_time: f32,
    config: &'a SimulationConfig,
    bodies: Vec<BodySnapshot<'a>>,
}

/// Run a scenario for `steps` world steps.
pub fn simulate(
    scenario_name: &str,
    config_path: Option<&str>,
    steps: u32,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind = ScenarioKind::from_name(scenario_name).ok_or_else(|| {
        let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
        format!(
            "Unknown scenario: '{scenario_name}'. Available: {}",
            available.join(", ")
        )
    })?;

    let config = match config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    println!("pbd2d Simulation");
    println!("────────────────");
    println!("Scenario:   {} ({})", kind.name(), kind.description());
    println!(
        "Config:     {} steps × {} sub-steps × {:.4}s",
        config.steps_count, config.substeps_count, config.delta_time
    );

    let mut world = kind.build(config)?;
    println!("Bodies:     {}", world.bodies().len());
    println!("Records:    {}", world.registry().len());
    println!();

    let mut total_contacts = 0u64;
    let mut max_penetration = 0.0_f32;
    for step in 0..steps {
        let report = world.step()?;
        total_contacts += u64::from(report.contacts.resolved_count);
        max_penetration = max_penetration.max(report.contacts.max_penetration);
        tracing::debug!(
            step,
            contacts = report.contacts.resolved_count,
            kinetic_energy = report.kinetic_energy,
            "step"
        );
    }

    let simulated_time = steps as f32 * world.config().step_duration();
    println!("  Sim time:      {simulated_time:.3}s");
    println!("  Contacts:      {total_contacts}");
    println!("  Max penetr.:   {max_penetration:.5}");
    println!("  Final KE:      {:.6e}", world.kinetic_energy());

    if let Some(path) = output_path {
        let json = snapshot_json(&world, kind, steps, simulated_time)?;
        std::fs::write(path, json)?;
        println!();
        println!("Positions written to: {path}");
    }

    Ok(())
}

fn snapshot_json(
    world: &World,
    kind: ScenarioKind,
    steps: u32,
    simulated_time: f32,
) -> Result<String, serde_json::Error> {
    let bodies = world
        .bodies()
        .iter()
        .filter_map(|(id, body)| {
            let state = body.state()?;
            Some(BodySnapshot {
                id: id.0,
                name: body.name(),
                positions: state.positions.iter().map(|p| p.to_array()).collect(),
            })
        })
        .collect();

    let snapshot = SimulationSnapshot {
        scenario: kind.name(),
        steps,
        simulated_time,
        config: world.config(),
        bodies,
    };
    serde_json::to_string_pretty(&snapshot)
}

/// Print the default configuration.
pub fn print_config() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&SimulationConfig::default())?;
    println!("{json}");
    Ok(())
}

/// List the canned scenarios.
pub fn list_scenarios() -> Result<(), Box<dyn std::error::Error>> {
    for kind in ScenarioKind::all() {
        println!("{:<16} {}", kind.name(), kind.description());
    }
    Ok(())
}
