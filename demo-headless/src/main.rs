use clap::Parser;
use ember_field_core::{
    FieldSynthesizer, Particle, ParticleClass, ParticleSimulator, RiskLevel,
    SimulationParameters, Source, TerrainProfile,
};

/// Wildfire visualization demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "ember-field-demo")]
#[command(about = "Headless wildfire dashboard demo", long_about = None)]
struct Args {
    /// Grid rows for the intensity field
    #[arg(long, default_value_t = 50)]
    rows: usize,

    /// Grid columns for the intensity field
    #[arg(long, default_value_t = 50)]
    cols: usize,

    /// Heat source row
    #[arg(long, default_value_t = 25)]
    source_row: i32,

    /// Heat source column
    #[arg(long, default_value_t = 25)]
    source_col: i32,

    /// Heat source intensity (0-1)
    #[arg(long, default_value_t = 0.9)]
    intensity: f32,

    /// Per-cell jitter amplitude
    #[arg(long, default_value_t = 0.05)]
    jitter: f32,

    /// RNG seed (omit for a random run)
    #[arg(long)]
    seed: Option<u64>,

    /// Burning area in hectares
    #[arg(short, long, default_value_t = 100.0)]
    area: f32,

    /// Base flame temperature in degrees C
    #[arg(short, long, default_value_t = 800.0)]
    temperature: f32,

    /// Wind speed in m/s
    #[arg(short, long, default_value_t = 10.0)]
    wind_speed: f32,

    /// Wind direction in degrees (0 = +x, 90 = +y)
    #[arg(long, default_value_t = 0.0)]
    wind_direction: f32,

    /// Terrain preset (flat, mountainous, valley)
    #[arg(long, default_value = "flat")]
    terrain: String,

    /// Simulation duration in seconds
    #[arg(short, long, default_value_t = 10.0)]
    duration: f32,

    /// Ticks per second
    #[arg(long, default_value_t = 60.0)]
    tick_rate: f32,

    /// Report interval in seconds
    #[arg(short, long, default_value_t = 1.0)]
    report_interval: f32,

    /// Reverse the wind direction at this time, in seconds
    #[arg(long)]
    flip_wind_at: Option<f32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Ember Field Demo ===\n");

    // Rasterize the configured hotspot into an intensity field.
    let mut synthesizer = match args.seed {
        Some(seed) => FieldSynthesizer::with_seed(seed),
        None => FieldSynthesizer::new(),
    };
    let sources = [Source {
        row: args.source_row,
        col: args.source_col,
        intensity: args.intensity,
    }];
    let field = synthesizer.synthesize(args.rows, args.cols, &sources, args.jitter)?;
    let (peak_row, peak_col, peak_value) = field.peak();
    let risk = RiskLevel::classify(&field);
    println!(
        "Field: {}x{}, peak {:.3} at ({}, {}), risk {}",
        args.rows, args.cols, peak_value, peak_row, peak_col, risk
    );

    let terrain_profile = match args.terrain.to_lowercase().as_str() {
        "mountainous" | "mountain" => TerrainProfile::Mountainous,
        "valley" => TerrainProfile::Valley,
        _ => TerrainProfile::Flat,
    };

    let params = SimulationParameters {
        area: args.area,
        temperature: args.temperature,
        wind_speed: args.wind_speed,
        wind_direction: args.wind_direction,
        terrain_profile,
    };
    println!(
        "Conditions: area {:.0} ha, temp {:.0} C, wind {:.1} m/s @ {:.0} deg, terrain {:?}",
        params.area,
        params.temperature,
        params.wind_speed,
        params.wind_direction,
        params.terrain_profile
    );

    let mut sim = match args.seed {
        Some(seed) => ParticleSimulator::with_seed(params, seed)?,
        None => ParticleSimulator::new(params)?,
    };
    println!(
        "Pool: {} fire + {} embers, spawn radius {:.1}\n",
        sim.fire_count(),
        sim.ember_count(),
        sim.spawn_radius()
    );

    println!("Time(s) | Fire height | Ember drift | Fire resp | Ember resp");
    println!("--------|-------------|-------------|-----------|-----------");

    let dt = 1.0 / args.tick_rate;
    let mut time = 0.0;
    let mut next_report = 0.0;
    let mut flipped = false;

    while time < args.duration {
        if let Some(flip_at) = args.flip_wind_at {
            if !flipped && time >= flip_at {
                let mut reversed = sim.params().clone();
                reversed.wind_direction += 180.0;
                sim.set_parameters(reversed)?;
                println!("  >> wind reversed at {time:.1}s");
                flipped = true;
            }
        }

        sim.advance(dt);
        time += dt;

        if time >= next_report {
            println!(
                "{:7.1} | {:11.2} | {:11.2} | {:9} | {:10}",
                time,
                mean_fire_height(&sim),
                mean_ember_drift(&sim),
                sim.fire_respawns(),
                sim.ember_respawns()
            );
            next_report += args.report_interval;
        }
    }

    println!("\n=== Run Complete ===");
    println!("Ticks: {}", sim.ticks());
    println!("Fire respawns: {}", sim.fire_respawns());
    println!("Ember respawns: {}", sim.ember_respawns());
    println!("Risk level: {risk}");
    Ok(())
}

fn mean_fire_height(sim: &ParticleSimulator) -> f32 {
    mean_over(sim, ParticleClass::Fire, |p| p.position.z)
}

fn mean_ember_drift(sim: &ParticleSimulator) -> f32 {
    mean_over(sim, ParticleClass::Ember, |p| {
        p.position.x.hypot(p.position.y)
    })
}

fn mean_over(
    sim: &ParticleSimulator,
    class: ParticleClass,
    value: impl Fn(&Particle) -> f32,
) -> f32 {
    let mut total = 0.0;
    let mut count = 0;
    for particle in sim.particles() {
        if particle.class == class {
            total += value(particle);
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        total / count as f32
    }
}
