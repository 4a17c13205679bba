//! Shell scripts that run or queue the generated jobs.

use crate::config::RunConfig;
use std::fmt::Write;

pub const SHEBANG: &str = "#!/usr/bin/env bash\n\n";

pub const QUEUE_SCRIPT: &str = "queue.sh";
pub const QUEUE_ALL_SCRIPT: &str = "queue-all.sh";

/// The two external programs driven by the run scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    NwChem,
    MonteCarlo,
}

impl Program {
    pub const ALL: [Program; 2] = [Program::NwChem, Program::MonteCarlo];

    /// Per-molecule run script
    pub fn run_script(self) -> &'static str {
        match self {
            Program::NwChem => "run-nw.sh",
            Program::MonteCarlo => "run-mc.sh",
        }
    }

    /// Aggregate script at the output root
    pub fn run_all_script(self) -> &'static str {
        match self {
            Program::NwChem => "run-all-nw.sh",
            Program::MonteCarlo => "run-all-mc.sh",
        }
    }

    pub fn deck_extension(self) -> &'static str {
        match self {
            Program::NwChem => "nwin",
            Program::MonteCarlo => "mcin",
        }
    }

    pub fn log_extension(self) -> &'static str {
        match self {
            Program::NwChem => "nwout",
            Program::MonteCarlo => "mcout",
        }
    }

    fn executable(self, config: &RunConfig) -> &str {
        match self {
            Program::NwChem => config.nwchem_cmd.as_str(),
            Program::MonteCarlo => config.mc_cmd.as_str(),
        }
    }
}

/// Run script executing `program` on every job in order.
pub fn format_run_script(program: Program, jobs: &[String], config: &RunConfig) -> String {
    let mut out = String::from(SHEBANG);
    for job in jobs {
        let _ = write!(
            out,
            "{} -np {} {} {}",
            config.launcher,
            config.threads,
            program.executable(config),
            shell_quote(&format!("{job}.{}", program.deck_extension()))
        );
        if config.log {
            let log = format!("{job}.{}", program.log_extension());
            let _ = write!(out, " 2>&1 | tee {}", shell_quote(&log));
        }
        out.push('\n');
    }
    out
}

/// Slurm batch script running both run scripts of a molecule.
pub fn format_queue_script(molecule: &str, config: &RunConfig) -> String {
    let mut out = String::from("#!/usr/bin/env bash\n");
    let _ = writeln!(out, "#SBATCH --job-name={molecule}");
    let _ = writeln!(out, "#SBATCH --ntasks={}", config.threads);
    let _ = writeln!(out, "#SBATCH --output={molecule}.slurm.out");
    if let Some(mb) = config.memory {
        let _ = writeln!(out, "#SBATCH --mem-per-cpu={mb}M");
    }
    if let Some(mail) = &config.mail {
        out.push_str("#SBATCH --mail-type=END,FAIL\n");
        let _ = writeln!(out, "#SBATCH --mail-user={mail}");
    }
    out.push('\n');
    for program in Program::ALL {
        let _ = writeln!(out, "./{}", program.run_script());
    }
    out
}

/// Line appended to an aggregate run script for one molecule directory.
pub fn run_all_entry(dir: &str, program: Program) -> String {
    format!("(cd {} && ./{})\n", shell_quote(dir), program.run_script())
}

/// Line appended to the aggregate queue script for one molecule directory.
pub fn queue_all_entry(dir: &str) -> String {
    format!("(cd {} && sbatch {})\n", shell_quote(dir), QUEUE_SCRIPT)
}

/// True when `word` needs no quoting anywhere in a shell command line.
pub fn is_shell_word(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._-/+=,".contains(c))
}

fn shell_quote(word: &str) -> String {
    if is_shell_word(word) {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
