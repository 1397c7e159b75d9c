//! ai-sim - run one assembled agent against a scripted opponent in the headless arena.
//!
//! ```text
//! ai-sim --archetype melee --ticks 600 --seed 7
//! ai-sim --archetype hybrid --config agent.json --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use ai::behaviors::arena::Arena;
use ai::behaviors::{assemble, AgentConfig, Archetype, DamageOutcome};
use ai::core::TickContext;
use ai::nav::{NavBody, Vec3};
use ai::perception::Sensors;

const AGENT: u64 = 1;
const OPPONENT: u64 = 2;

#[derive(Parser)]
#[command(name = "ai-sim")]
#[command(about = "Headless combat agent simulation", version)]
struct Cli {
    /// Agent kind to assemble
    #[arg(short, long, value_enum, default_value_t = Kind::Melee)]
    archetype: Kind,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 30.0)]
    dt: f32,

    /// Run seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Agent config (JSON). Missing fields take their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Damage the opponent deals per hit on the agent
    #[arg(long, default_value_t = 15.0)]
    opponent_damage: f32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Melee,
    Hybrid,
    Turret,
}

impl From<Kind> for Archetype {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Melee => Archetype::Melee,
            Kind::Hybrid => Archetype::Hybrid,
            Kind::Turret => Archetype::Turret,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    if cli.json {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).with_target(false).init();
    }

    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            AgentConfig::from_json_str(&text)
                .with_context(|| format!("invalid agent config in {}", path.display()))?
        }
        None => AgentConfig::default(),
    };

    run(&cli, &config)
}

/// Opponent walking back and forth across the agent's patrol area.
fn opponent_position(t: f32) -> Vec3 {
    let phase = (t / 12.0).fract();
    let x = if phase < 0.5 {
        -20.0 + 80.0 * phase
    } else {
        60.0 - 80.0 * phase
    };
    Vec3::ground(x, 3.0)
}

fn run(cli: &Cli, config: &AgentConfig) -> Result<()> {
    let archetype = Archetype::from(cli.archetype);

    let mut arena = Arena::default();
    arena.insert_body(AGENT, NavBody::new(Vec3::ZERO, 3.5, 1.0));
    arena.insert_body(OPPONENT, NavBody::new(opponent_position(0.0), 0.0, 0.0));

    let mut sensors = Sensors::tracking(OPPONENT);
    let mut agent = assemble::<Arena>(archetype, AGENT, OPPONENT, &mut sensors, config)
        .context("failed to assemble agent")?;
    arena.attach_sensors(AGENT, sensors, &config.perception);

    let mut ctx = TickContext::new(0, cli.dt, cli.seed);
    let mut dealt = 0.0;
    let mut shots = 0usize;
    let mut ignored = 0u32;
    let mut since_opponent_swing = 0.0;

    for _ in 0..cli.ticks {
        ctx = ctx.next();
        let t = ctx.tick as f32 * cli.dt;

        if let Some(body) = arena.body_mut(OPPONENT) {
            body.position = opponent_position(t);
        }

        agent.tick(&ctx, &mut arena);
        arena.step(cli.dt);

        dealt += arena.drain_damage().iter().map(|hit| hit.amount).sum::<f32>();
        shots += arena.drain_projectiles().len();

        since_opponent_swing += cli.dt;
        let distance = match (arena.body(AGENT), arena.body(OPPONENT)) {
            (Some(a), Some(b)) => a.position.distance(b.position),
            _ => f32::INFINITY,
        };
        if distance <= 2.0 && since_opponent_swing >= 1.0 {
            since_opponent_swing = 0.0;
            match agent.receive_damage(cli.opponent_damage) {
                DamageOutcome::Ignored => ignored += 1,
                DamageOutcome::Applied { remaining } => {
                    tracing::debug!(tick = ctx.tick, remaining, "agent hit");
                }
                DamageOutcome::Depleted => {
                    tracing::info!(tick = ctx.tick, "agent defeated");
                    arena.remove_body(AGENT);
                    break;
                }
            }
        }
    }

    tracing::info!(
        archetype = %archetype,
        ticks = ctx.tick,
        melee_damage = dealt,
        projectiles = shots,
        ignored_hits = ignored,
        health = agent.health().current(),
        "simulation finished"
    );

    println!("{archetype}: {} ticks", ctx.tick);
    println!("  melee damage dealt : {dealt}");
    println!("  projectiles fired  : {shots}");
    println!("  hits ignored       : {ignored}");
    println!(
        "  health remaining   : {}/{}",
        agent.health().current(),
        agent.health().max()
    );

    Ok(())
}
