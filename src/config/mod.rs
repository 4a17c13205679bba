//! Configuration management
//!
//! Options come from three layers: built-in defaults, an optional YAML file
//! and the command line. [`RunConfig::resolve`] flattens them into the single
//! immutable configuration used by every generation step.

mod args;

pub use args::Args;

use crate::error::{GenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of the optional YAML configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub threads: Option<usize>,

    #[serde(default)]
    pub mc_trials: Option<usize>,

    #[serde(default)]
    pub electrons: Option<usize>,

    #[serde(default)]
    pub electron_pairs: Option<usize>,

    #[serde(default)]
    pub basis: Option<String>,

    /// Memory per thread in MB
    #[serde(default)]
    pub memory: Option<usize>,

    #[serde(default)]
    pub mail: Option<String>,

    #[serde(default)]
    pub dir_info: Option<bool>,

    #[serde(default)]
    pub log: Option<bool>,

    #[serde(default)]
    pub queue: Option<bool>,

    #[serde(default)]
    pub noautosym: Option<bool>,

    #[serde(default)]
    pub noautoz: Option<bool>,

    #[serde(default)]
    pub shared_movecs: Option<bool>,

    /// MPI launcher used in the run scripts
    #[serde(default)]
    pub launcher: Option<String>,

    /// NWChem executable
    #[serde(default)]
    pub nwchem_cmd: Option<String>,

    /// Monte Carlo executable
    #[serde(default)]
    pub mc_cmd: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| GenError::UnreadableInput {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yml::from_str(&content)
            .map_err(|e| GenError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Flags appended to the NWChem `geometry` directive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeometryFlags {
    pub noautosym: bool,
    pub noautoz: bool,
}

/// Fully resolved options for one invocation. Its `Default` holds the
/// built-in value of every option.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub threads: usize,
    pub mc_trials: usize,
    pub electrons: usize,
    pub electron_pairs: usize,
    pub basis: String,
    pub memory: Option<usize>,
    pub mail: Option<String>,
    pub output_root: PathBuf,
    pub name: Option<String>,
    pub dir_info: bool,
    pub log: bool,
    pub queue: bool,
    pub geometry: GeometryFlags,
    pub shared_movecs: bool,
    pub launcher: String,
    pub nwchem_cmd: String,
    pub mc_cmd: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            threads: 8,
            mc_trials: 1_048_576,
            electrons: 64,
            electron_pairs: 128,
            basis: "aug-cc-pvdz".to_string(),
            memory: None,
            mail: None,
            output_root: PathBuf::from("."),
            name: None,
            dir_info: false,
            log: false,
            queue: false,
            geometry: GeometryFlags::default(),
            shared_movecs: false,
            launcher: "mpirun".to_string(),
            nwchem_cmd: "nwchem".to_string(),
            mc_cmd: "MC_MPn_Direct".to_string(),
        }
    }
}

impl RunConfig {
    /// Merge command-line arguments over the file configuration, falling
    /// back to [`RunConfig::default`] for anything neither sets.
    pub fn resolve(args: &Args, config: Config) -> Result<Self> {
        let d = RunConfig::default();
        let flag = |cli: bool, file: Option<bool>, default: bool| cli || file.unwrap_or(default);

        let run = RunConfig {
            threads: args.threads.or(config.threads).unwrap_or(d.threads),
            mc_trials: args.mc_trials.or(config.mc_trials).unwrap_or(d.mc_trials),
            electrons: args.electrons.or(config.electrons).unwrap_or(d.electrons),
            electron_pairs: args
                .electron_pairs
                .or(config.electron_pairs)
                .unwrap_or(d.electron_pairs),
            basis: args.basis.clone().or(config.basis).unwrap_or(d.basis),
            memory: args.memory.or(config.memory).or(d.memory),
            mail: args.mail.clone().or(config.mail).or(d.mail),
            output_root: args.output_root.clone().unwrap_or(d.output_root),
            name: args.name.clone().or(d.name),
            dir_info: flag(args.dir_info, config.dir_info, d.dir_info),
            log: flag(args.log, config.log, d.log),
            queue: flag(args.queue, config.queue, d.queue),
            geometry: GeometryFlags {
                noautosym: flag(args.noautosym, config.noautosym, d.geometry.noautosym),
                noautoz: flag(args.noautoz, config.noautoz, d.geometry.noautoz),
            },
            shared_movecs: flag(args.shared_movecs, config.shared_movecs, d.shared_movecs),
            launcher: config.launcher.unwrap_or(d.launcher),
            nwchem_cmd: config.nwchem_cmd.unwrap_or(d.nwchem_cmd),
            mc_cmd: config.mc_cmd.unwrap_or(d.mc_cmd),
        };
        run.validate()?;
        Ok(run)
    }

    fn validate(&self) -> Result<()> {
        let positive = [
            ("threads", self.threads),
            ("mc_trials", self.mc_trials),
            ("electrons", self.electrons),
            ("electron_pairs", self.electron_pairs),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(GenError::Config(format!("{key} must be at least 1")));
            }
        }
        if self.memory == Some(0) {
            return Err(GenError::Config("memory must be at least 1 MB".to_string()));
        }
        if self.basis.trim().is_empty() || self.basis.contains(char::is_whitespace) {
            return Err(GenError::Config(format!(
                "basis name '{}' must be a single word",
                self.basis
            )));
        }
        Ok(())
    }
}
