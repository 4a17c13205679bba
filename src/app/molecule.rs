use crate::app::workspace::MoleculeWorkspace;
use crate::config::RunConfig;
use crate::deck::{format_mc_deck, format_nwchem_deck, format_xyz, movecs_path};
use crate::error::Result;
use crate::fragment::partition;
use crate::geometry::Geometry;
use crate::io::{create_dir, write_file, write_script};
use crate::scripts::{format_queue_script, format_run_script, Program, QUEUE_SCRIPT};
use std::path::PathBuf;
use tracing::{debug, info};

/// Everything written for one molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct JobFileSet {
    pub dir: PathBuf,
    /// Input files in fragment order, three per fragment (xyz, nwin, mcin)
    pub decks: Vec<PathBuf>,
    pub scripts: Vec<PathBuf>,
}

impl JobFileSet {
    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.decks.iter().chain(self.scripts.iter())
    }
}

/// Write the decks and per-molecule scripts for one dimer geometry.
pub fn generate_molecule(
    workspace: &MoleculeWorkspace,
    geometry: &Geometry,
    config: &RunConfig,
) -> Result<JobFileSet> {
    create_dir(&workspace.dir)?;
    let mut decks = Vec::with_capacity(9);

    for view in partition(geometry) {
        let job = workspace.job(view.fragment);
        let movecs = movecs_path(&job, config.shared_movecs);
        debug!(
            "{}: {} atoms, {} ghosts",
            job,
            view.len(),
            view.ghost_count()
        );

        let files = [
            (format!("{job}.xyz"), format_xyz(&view)),
            (
                format!("{job}.nwin"),
                format_nwchem_deck(&job, &view, config, &movecs),
            ),
            (
                format!("{job}.mcin"),
                format_mc_deck(&workspace.molecule, view.fragment, config, &movecs),
            ),
        ];
        for (name, contents) in files {
            let path = workspace.file(&name);
            write_file(&path, &contents)?;
            decks.push(path);
        }
    }

    let jobs = workspace.jobs();
    let mut scripts = Vec::with_capacity(3);
    for program in Program::ALL {
        let path = workspace.file(program.run_script());
        write_script(&path, &format_run_script(program, &jobs, config))?;
        scripts.push(path);
    }
    if config.queue {
        let path = workspace.file(QUEUE_SCRIPT);
        write_script(&path, &format_queue_script(&workspace.molecule, config))?;
        scripts.push(path);
    }

    info!(
        "{} -> {} ({} files)",
        workspace.input.display(),
        workspace.dir.display(),
        decks.len() + scripts.len()
    );

    Ok(JobFileSet {
        dir: workspace.dir.clone(),
        decks,
        scripts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_generate_molecule_files() {
        let root = TempDir::new().unwrap();
        let config = RunConfig {
            output_root: root.path().to_path_buf(),
            queue: true,
            ..RunConfig::default()
        };
        let geom = Geometry::parse(
            "4\nC 0 0 0\nC 0 0 1.5\nO 2 0 0\nO 2 0 1.5\n",
            Path::new("co_dimer.xyz"),
        )
        .unwrap();
        let ws = MoleculeWorkspace::new(Path::new("co_dimer.xyz"), &config).unwrap();

        let set = generate_molecule(&ws, &geom, &config).unwrap();
        assert_eq!(set.decks.len(), 9);
        assert_eq!(set.scripts.len(), 3);
        assert!(set.files().all(|p| p.is_file()));

        let xyz = fs::read_to_string(root.path().join("co/co_monomer_a.xyz")).unwrap();
        assert_eq!(xyz.lines().filter(|l| l.starts_with("xO")).count(), 2);
        assert_eq!(xyz.lines().filter(|l| l.starts_with("C ")).count(), 2);

        let nwin = fs::read_to_string(root.path().join("co/co_monomer_b.nwin")).unwrap();
        assert!(nwin.contains("    xC library c aug-cc-pvdz\n    O library aug-cc-pvdz\n"));

        let run = fs::read_to_string(root.path().join("co/run-nw.sh")).unwrap();
        let order: Vec<&str> = run
            .lines()
            .filter_map(|l| l.split_whitespace().nth(4))
            .collect();
        assert_eq!(order, ["co_dimer.nwin", "co_monomer_a.nwin", "co_monomer_b.nwin"]);
    }
}
