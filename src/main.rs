use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use kcolor_tree::{
    fixture,
    render::{render_colors, render_counts},
    tree::height,
    ColoringConfig, Tree, TreeColorer,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "kcolor",
    about = "Proper K-coloring of a tree maximizing one primary color"
)]
struct Cli {
    #[command(flatten)]
    options: ColorOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct ColorOptions {
    /// Number of colors K.
    #[arg(short = 'k', long = "colors", global = true, default_value_t = 3)]
    colors: usize,
    /// Color index whose usage is maximized.
    #[arg(long, global = true, default_value_t = 0)]
    primary: usize,
    /// Print every node's aggregation table after coloring.
    #[arg(long, global = true)]
    show_counts: bool,
    /// Log pass-level progress (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Color the built-in 10-node sample tree.
    Sample,
    /// Color a complete tree.
    Complete {
        /// Children per interior node (M).
        #[arg(long, default_value_t = 3)]
        branching: usize,
        /// Levels below the root.
        #[arg(long, default_value_t = 2)]
        depth: usize,
    },
    /// Color a path.
    Path {
        /// Number of nodes.
        #[arg(long, default_value_t = 8)]
        length: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.options.verbose);

    let tree = match cli.command {
        Commands::Sample => fixture::sample_tree().context("failed to build sample tree")?,
        Commands::Complete { branching, depth } => fixture::complete_tree(branching, depth)
            .with_context(|| format!("failed to build complete tree M={} depth={}", branching, depth))?,
        Commands::Path { length } => {
            fixture::path_tree(length).with_context(|| format!("failed to build path of {}", length))?
        }
    };

    run_coloring(tree, &cli.options)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_coloring(mut tree: Tree, options: &ColorOptions) -> Result<()> {
    let config = ColoringConfig::new(options.colors)
        .and_then(|config| config.with_primary(options.primary))
        .context("invalid coloring options")?;

    println!("K = {}", config.num_colors());
    println!("M = {}", tree.max_branching());
    println!("V = {}", tree.len());
    println!("height = {}", height(&tree));

    println!("\nAggregating and assigning...");
    let coloring = TreeColorer::new(config)
        .run(&mut tree)
        .context("coloring failed")?;
    println!("Completed.");

    println!(
        "primary color {} used {} times (optimum {})",
        coloring.primary, coloring.primary_count, coloring.optimum
    );
    println!("fingerprint {}", coloring.fingerprint().to_hex());
    print!("{}", render_colors(&tree).context("failed to render colors")?);

    if options.show_counts {
        println!();
        print!("{}", render_counts(&tree).context("failed to render count tables")?);
    }

    Ok(())
}
