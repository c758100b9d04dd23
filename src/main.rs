use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rgb_evolve::prelude::*;

/// Evolve a population of 24-bit chromosomes toward a target RGB color
///
/// The target is written as 24 binary digits: eight for red, eight for green and
/// eight for blue. For example 111111111111111111111111 is white (255, 255, 255).
#[derive(Parser, Debug)]
#[command(name = "rgb-evolve")]
#[command(about = "Guess an RGB color with a genetic algorithm", long_about = None)]
#[command(version)]
struct Args {
    /// Target color as a 24-bit string of 0s and 1s
    target: Target,

    /// Number of chromosomes in the population
    #[arg(short, long, default_value_t = 50)]
    population: usize,

    /// Retention steps per generation
    #[arg(short, long, default_value_t = 10)]
    selection: usize,

    /// Single-bit mutations per generation
    #[arg(short, long, default_value_t = 10)]
    mutation: usize,

    /// New-blood (full complement) applications per generation
    #[arg(short, long, default_value_t = 2)]
    new_blood: usize,

    /// Crossover pairs per generation
    #[arg(short, long, default_value_t = 10)]
    crossover: usize,

    /// Number of generations
    #[arg(short, long, default_value_t = 100)]
    generations: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the final result
    #[arg(short, long)]
    quiet: bool,

    /// Print the run statistics as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let ga = ColorGA::builder()
        .target(args.target)
        .population_size(args.population)
        .counts(OperatorCounts::new(
            args.selection,
            args.mutation,
            args.new_blood,
            args.crossover,
        ))
        .generations(args.generations)
        .build()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let text = !args.json;
    if text {
        println!("Your RGB value is: {}", args.target.color());
    }

    let report_each = text && !args.quiet;
    let result = ga.run_with(&mut rng, |generation, population| {
        if report_each && generation < args.generations {
            if let Some(best) = population.get(0) {
                println!(
                    "The best fit chromosome of generation {} is {}",
                    generation,
                    best.genome()
                );
            }
        }
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.stats)?);
        return Ok(());
    }

    println!("Done...");
    match result.best {
        Some(best) => {
            println!(
                "The best fit chromosome after {} generations is {}",
                result.generations,
                best.genome()
            );
            println!("Which has an RGB value of: {}", best.rgb());
            println!("Distance from target: {:.4}", best.fitness());
        }
        None => println!("The population is empty"),
    }
    if !args.quiet {
        println!("\n{}", result.stats.summary());
    }

    Ok(())
}
