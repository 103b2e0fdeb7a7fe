use anyhow::{Context, Result};
use clap::Parser;
use mathgen::{ExpressionGenerator, GeneratorConfig, RandomSource, UniformSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "mathgen",
    version,
    about = "Generate random arithmetic expressions of bounded nesting depth"
)]
struct Cli {
    /// Maximum nesting depth (positive integer).
    #[arg(value_name = "DEPTH", value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of expressions to generate.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
    /// Print each tree before it is folded.
    #[arg(long)]
    tree: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = GeneratorConfig::new(cli.depth as usize)
        .context("invalid generator configuration")?
        .with_tree_dump(cli.tree);

    println!("Maximum depth: {}\n", config.max_depth());

    match cli.seed {
        Some(seed) => {
            info!(seed, "using seeded generator");
            run(ExpressionGenerator::new(config, UniformSource::seeded(seed)), cli.count)
        }
        None => run(ExpressionGenerator::from_entropy(config), cli.count),
    }

    Ok(())
}

fn run<R: RandomSource>(mut generator: ExpressionGenerator<R>, count: u32) {
    for idx in 0..count {
        let generated = generator.generate();
        info!(index = idx + 1, "generated expression");

        if let Some(dump) = generated.tree_dump {
            println!("{}\n", dump);
        }
        println!("Resulting expression:\n{}\n", generated.expression);
    }
}
