use crate::config::RunConfig;
use crate::deck::job_name;
use crate::error::{GenError, Result};
use crate::fragment::Fragment;
use crate::scripts::is_shell_word;
use std::path::{Path, PathBuf};

/// Required suffix of every input geometry file.
pub const DIMER_SUFFIX: &str = "_dimer.xyz";

/// Output locations and job names for one input geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeWorkspace {
    pub input: PathBuf,
    /// Base of every job name, e.g. `water` for `water_dimer.nwin`
    pub molecule: String,
    /// Directory name relative to the output root
    pub dir_name: String,
    pub dir: PathBuf,
}

impl MoleculeWorkspace {
    pub fn new(input: &Path, config: &RunConfig) -> Result<Self> {
        let molecule = match &config.name {
            Some(name) => validate_name(name)?,
            None => molecule_name(input)?,
        };
        let dir_name = if config.dir_info {
            format!("{}_{}_n{}", molecule, config.basis, config.threads)
        } else {
            molecule.clone()
        };
        let dir = config.output_root.join(&dir_name);

        Ok(Self {
            input: input.to_path_buf(),
            molecule,
            dir_name,
            dir,
        })
    }

    pub fn job(&self, fragment: Fragment) -> String {
        job_name(&self.molecule, fragment)
    }

    /// Job names in script order: dimer, monomer A, monomer B.
    pub fn jobs(&self) -> Vec<String> {
        Fragment::ALL.iter().map(|&f| self.job(f)).collect()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

/// `path/to/water_dimer.xyz` gives `water`. The molecule name ends up in
/// job names, deck titles and Slurm headers, so it must be a plain shell
/// word.
pub fn molecule_name(input: &Path) -> Result<String> {
    input
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(DIMER_SUFFIX))
        .filter(|stem| is_shell_word(stem))
        .map(str::to_string)
        .ok_or_else(|| GenError::InvalidInputName(input.to_path_buf()))
}

fn validate_name(name: &str) -> Result<String> {
    if !is_shell_word(name) || name.contains('/') || name == "." || name == ".." {
        return Err(GenError::Config(format!(
            "'{name}' is not usable as a directory name"
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_molecule_name() {
        assert_eq!(
            molecule_name(Path::new("geoms/water_dimer.xyz")).unwrap(),
            "water"
        );
        assert_eq!(
            molecule_name(Path::new("benzene_2.5A_dimer.xyz")).unwrap(),
            "benzene_2.5A"
        );
        assert!(molecule_name(Path::new("water.xyz")).is_err());
        assert!(molecule_name(Path::new("_dimer.xyz")).is_err());
    }

    #[test]
    fn test_molecule_name_must_be_plain() {
        for name in ["my hf_dimer.xyz", "hf's_dimer.xyz", "hf;rm_dimer.xyz"] {
            assert!(
                matches!(
                    molecule_name(Path::new(name)),
                    Err(GenError::InvalidInputName(_))
                ),
                "{name}"
            );
        }

        let spaced = RunConfig {
            name: Some("my hf".to_string()),
            ..RunConfig::default()
        };
        assert!(MoleculeWorkspace::new(Path::new("hf_dimer.xyz"), &spaced).is_err());
    }

    #[test]
    fn test_workspace_paths() {
        let config = RunConfig {
            output_root: PathBuf::from("/scratch/jobs"),
            ..RunConfig::default()
        };
        let ws = MoleculeWorkspace::new(Path::new("in/water_dimer.xyz"), &config).unwrap();
        assert_eq!(ws.dir, PathBuf::from("/scratch/jobs/water"));
        assert_eq!(ws.file("run-nw.sh"), PathBuf::from("/scratch/jobs/water/run-nw.sh"));
        assert_eq!(
            ws.jobs(),
            ["water_dimer", "water_monomer_a", "water_monomer_b"]
        );
    }

    #[test]
    fn test_dir_info_and_name_override() {
        let config = RunConfig {
            name: Some("h2o".to_string()),
            dir_info: true,
            threads: 16,
            ..RunConfig::default()
        };
        let ws = MoleculeWorkspace::new(Path::new("water_dimer.xyz"), &config).unwrap();
        assert_eq!(ws.molecule, "h2o");
        assert_eq!(ws.dir_name, "h2o_aug-cc-pvdz_n16");
        assert_eq!(ws.job(Fragment::MonomerA), "h2o_monomer_a");

        let bad = RunConfig {
            name: Some("a/b".to_string()),
            ..RunConfig::default()
        };
        assert!(MoleculeWorkspace::new(Path::new("water_dimer.xyz"), &bad).is_err());
    }
}
