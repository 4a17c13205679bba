mod molecule;
mod workspace;

pub use molecule::{generate_molecule, JobFileSet};
pub use workspace::{molecule_name, MoleculeWorkspace, DIMER_SUFFIX};

use crate::config::{Args, Config, RunConfig};
use crate::deck::SHARED_MOVECS_DIR;
use crate::error::GenError;
use crate::geometry::Geometry;
use crate::io::{append_file, create_dir, setup_output, write_script};
use crate::scripts::{queue_all_entry, run_all_entry, Program, QUEUE_ALL_SCRIPT, SHEBANG};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;

pub struct DimerApplication {
    inputs: Vec<PathBuf>,
    verbose: bool,
    config: RunConfig,
}

impl DimerApplication {
    pub fn from_cli() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let file_config = match &args.config {
            Some(path) => Config::load(path)
                .wrap_err_with(|| format!("Unable to load configuration file: {}", path.display()))?,
            None => Config::default(),
        };
        let config = RunConfig::resolve(&args, file_config)?;
        Ok(Self {
            inputs: args.inputs,
            verbose: args.verbose,
            config,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Generate every molecule, then rewrite the aggregate scripts in input
    /// order. Returns the file sets in input order.
    pub fn run(self) -> Result<Vec<JobFileSet>> {
        setup_output(self.verbose);
        let workspaces = self.workspaces()?;
        let config = &self.config;

        create_dir(&config.output_root)?;
        if config.shared_movecs {
            create_dir(&config.output_root.join(SHARED_MOVECS_DIR))?;
        }

        info!(
            "Generating {} molecule(s) into {}",
            workspaces.len(),
            config.output_root.display()
        );
        let sets = workspaces
            .par_iter()
            .map(|ws| {
                let geometry = Geometry::from_file(&ws.input)?;
                generate_molecule(ws, &geometry, config)
            })
            .collect::<Result<Vec<_>, GenError>>()?;

        self.write_aggregates(&workspaces)?;
        Ok(sets)
    }

    fn workspaces(&self) -> Result<Vec<MoleculeWorkspace>, GenError> {
        if self.inputs.is_empty() {
            return Err(GenError::MissingArgument(
                "at least one dimer XYZ file (<name>_dimer.xyz) is required".to_string(),
            ));
        }
        if self.config.name.is_some() && self.inputs.len() > 1 {
            return Err(GenError::ConflictingArguments(
                "--name can only be used with a single input file".to_string(),
            ));
        }

        let workspaces = self
            .inputs
            .iter()
            .map(|input| MoleculeWorkspace::new(input, &self.config))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        for ws in &workspaces {
            if !seen.insert(ws.dir_name.as_str()) {
                return Err(GenError::ConflictingArguments(format!(
                    "more than one input maps to directory '{}'",
                    ws.dir_name
                )));
            }
        }
        Ok(workspaces)
    }

    /// Clear-then-append: each aggregate is truncated to its header and then
    /// receives one entry per molecule.
    fn write_aggregates(&self, workspaces: &[MoleculeWorkspace]) -> Result<(), GenError> {
        let root = &self.config.output_root;

        for program in Program::ALL {
            let path = root.join(program.run_all_script());
            write_script(&path, SHEBANG)?;
            for ws in workspaces {
                append_file(&path, &run_all_entry(&ws.dir_name, program))?;
            }
        }

        if self.config.queue {
            let path = root.join(QUEUE_ALL_SCRIPT);
            write_script(&path, SHEBANG)?;
            for ws in workspaces {
                append_file(&path, &queue_all_entry(&ws.dir_name))?;
            }
        }
        Ok(())
    }
}
