use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use velograph::{Category, Palette, RunOptions, all_jobs, run_jobs};

#[derive(Parser, Debug)]
#[command(name = "velograph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render placeholder assets into the output directory.
    Generate(GenerateArgs),
    /// Print the catalog file names without rendering anything.
    List(ListArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output asset directory (created if missing).
    #[arg(long, default_value = "public/assets")]
    out_dir: PathBuf,

    /// Asset family to render.
    #[arg(long, value_enum, default_value_t = CategoryArg::All)]
    category: CategoryArg,

    /// Built-in color theme.
    #[arg(long, value_enum, default_value_t = ThemeArg::Classic)]
    theme: ThemeArg,

    /// JSON palette overrides (an object of role: "#rrggbb").
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Seed for grain, sparkles, and other procedural variation.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Render independent jobs in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Asset family to list.
    #[arg(long, value_enum, default_value_t = CategoryArg::All)]
    category: CategoryArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CategoryArg {
    All,
    Bikes,
    Avatars,
    Insta,
    Hero,
    Extra,
}

impl CategoryArg {
    fn jobs(
        self,
        palette: &Palette,
        seed: u64,
    ) -> velograph::VeloResult<Vec<velograph::Job>> {
        match self {
            CategoryArg::All => all_jobs(palette, seed),
            CategoryArg::Bikes => Category::Bikes.jobs(palette, seed),
            CategoryArg::Avatars => Category::Avatars.jobs(palette, seed),
            CategoryArg::Insta => Category::Insta.jobs(palette, seed),
            CategoryArg::Hero => Category::Hero.jobs(palette, seed),
            CategoryArg::Extra => Category::Extra.jobs(palette, seed),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Classic,
    Luxury,
}

impl ThemeArg {
    fn palette(self) -> Palette {
        match self {
            ThemeArg::Classic => Palette::classic(),
            ThemeArg::Luxury => Palette::luxury(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::List(args) => cmd_list(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut palette = args.theme.palette();
    if let Some(path) = &args.palette {
        palette.merge_from_path(path)?;
    }

    let jobs = args.category.jobs(&palette, args.seed)?;
    let fonts = velograph::FontBook::load_default();

    let opts = RunOptions {
        out_dir: args.out_dir,
        parallel: args.parallel,
        threads: args.threads,
    };
    let stats = run_jobs(&jobs, &fonts, &opts)?;
    println!(
        "wrote {} of {} assets to {}",
        stats.jobs_written,
        stats.jobs_total,
        opts.out_dir.display()
    );
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let palette = Palette::classic();
    for job in args.category.jobs(&palette, 0)? {
        println!("{} ({}x{})", job.file_name, job.width, job.height);
    }
    Ok(())
}
