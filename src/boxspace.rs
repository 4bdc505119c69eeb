use std::{ io, path::PathBuf };
use anyhow::Context;
use clap::Parser;
use boxspace::{
    config::{ Config, ReportOptions },
    eigen::DenseSolver,
    report,
    solve::BoxSystem,
};

// solve for the spectrum of a particle in a box with a potential read from a
// file, one sample per line

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// File holding the potential, one number per line.
    #[arg(default_value = "potential.txt")]
    potential: PathBuf,

    /// Number of box eigenstates in the basis.
    #[arg(short = 'n', long, default_value_t = 100)]
    num_basis: usize,

    /// Length of the box.
    #[arg(short = 'L', long, default_value_t = 1.0)]
    box_length: f64,

    /// Particle mass.
    #[arg(short, long, default_value_t = 1.0)]
    mass: f64,

    /// Reduced Planck constant.
    #[arg(long, default_value_t = 1.0)]
    hbar: f64,

    /// Number of energies and ground-state components to print.
    #[arg(short, long, default_value_t = 10)]
    limit: usize,

    /// Print `psi` instead of `ψ`.
    #[arg(long)]
    ascii: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::default()
        .with_num_basis(cli.num_basis)
        .with_box_length(cli.box_length)
        .with_mass(cli.mass)
        .with_hbar(cli.hbar);
    let sys = BoxSystem::from_file(config, &cli.potential)
        .with_context(|| format!("loading {:?}", cli.potential))?;
    log::info!(
        "{} potential samples, dx = {:e}, {} basis states",
        sys.get_v().len(),
        sys.get_dx(),
        config.num_basis,
    );
    let res = sys.solve_with(&DenseSolver::default())
        .context("solving for the spectrum")?;

    let opts = ReportOptions { limit: cli.limit, ascii: cli.ascii };
    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &res, &opts)?;
    Ok(())
}
