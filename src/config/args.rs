//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Generate NWChem and MC_MPn_Direct counterpoise jobs from dimer XYZ files
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Dimer XYZ files, each named <name>_dimer.xyz
    #[arg(value_name = "DIMER_XYZ")]
    pub inputs: Vec<PathBuf>,

    /// Optional YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of MPI processes per job
    #[arg(short = 'n', long)]
    pub threads: Option<usize>,

    /// Number of Monte Carlo steps (MC_TRIAL)
    #[arg(long)]
    pub mc_trials: Option<usize>,

    /// Number of walkers for the electron sampler (ELECTRONS)
    #[arg(long)]
    pub electrons: Option<usize>,

    /// Number of walkers for the electron-pair sampler (ELECTRON_PAIRS)
    #[arg(long)]
    pub electron_pairs: Option<usize>,

    /// Basis set name, e.g. aug-cc-pvdz
    #[arg(short, long)]
    pub basis: Option<String>,

    /// Memory per thread in MB
    #[arg(short, long)]
    pub memory: Option<usize>,

    /// Mail address for queue notifications
    #[arg(long)]
    pub mail: Option<String>,

    /// Directory that receives the molecule directories and run-all scripts
    #[arg(short, long)]
    pub output_root: Option<PathBuf>,

    /// Override the molecule directory name (single input only)
    #[arg(long)]
    pub name: Option<String>,

    /// Append basis and thread count to the molecule directory name
    #[arg(long)]
    pub dir_info: bool,

    /// Tee program output into log files
    #[arg(long)]
    pub log: bool,

    /// Write Slurm queue scripts
    #[arg(long)]
    pub queue: bool,

    /// Disable automatic symmetry detection in NWChem
    #[arg(long)]
    pub noautosym: bool,

    /// Disable automatic z-matrix generation in NWChem
    #[arg(long)]
    pub noautoz: bool,

    /// Store movecs files in a shared <root>/movecs directory
    #[arg(long)]
    pub shared_movecs: bool,

    /// Print debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}
