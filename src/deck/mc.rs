use super::job_name;
use crate::config::RunConfig;
use crate::fragment::Fragment;

/// Suffix MC_MPn_Direct runs carry in their job names.
pub const MC_JOB_SUFFIX: &str = "MP2_F12_VBX.cv_TRUE";

/// JOBNAME of a fragment's Monte Carlo run. The dimer's job name doubles as
/// the seed file of all three fragments.
pub fn mc_job_name(molecule: &str, fragment: Fragment) -> String {
    format!("{}.{MC_JOB_SUFFIX}", job_name(molecule, fragment))
}

/// MC_MPn_Direct deck for one fragment.
///
/// All three fragments read the dimer run's seed file so the monomers are
/// sampled with the same random stream as the dimer.
pub fn format_mc_deck(
    molecule: &str,
    fragment: Fragment,
    config: &RunConfig,
    movecs: &str,
) -> String {
    let job = job_name(molecule, fragment);
    let seed = mc_job_name(molecule, Fragment::Dimer);
    let debug = if fragment.is_dimer() { 0 } else { 2 };
    let basis = &config.basis;

    let keys: [(&str, String); 17] = [
        ("JOBNAME", mc_job_name(molecule, fragment)),
        ("JOBTYPE", "ENERGY".to_string()),
        ("TASK", "MP2".to_string()),
        ("TASK", "MP2_F12_VBX".to_string()),
        ("MP2CV_LEVEL", "2".to_string()),
        ("MC_TRIAL", config.mc_trials.to_string()),
        ("ELECTRON_PAIRS", config.electron_pairs.to_string()),
        ("ELECTRONS", config.electrons.to_string()),
        ("SEED_FILE", seed),
        ("DEBUG", debug.to_string()),
        ("SPHERICAL", "0".to_string()),
        ("SAMPLER", "DIRECT".to_string()),
        ("TAU_INTEGRATION", "STOCHASTIC".to_string()),
        ("GEOM", format!("{job}.xyz")),
        ("BASIS", format!("../basis/{basis}.basis")),
        ("MC_BASIS", format!("../basis/{basis}.mc_basis")),
        ("MOVECS", movecs.to_string()),
    ];

    keys.iter()
        .map(|(key, value)| format!("{key} {value}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monomer_deck() {
        let config = RunConfig {
            mc_trials: 4096,
            electrons: 32,
            electron_pairs: 16,
            basis: "cc-pvdz".to_string(),
            ..RunConfig::default()
        };
        let deck = format_mc_deck("water", Fragment::MonomerB, &config, "water_monomer_b.movecs");
        let want = "\
JOBNAME water_monomer_b.MP2_F12_VBX.cv_TRUE
JOBTYPE ENERGY
TASK MP2
TASK MP2_F12_VBX
MP2CV_LEVEL 2
MC_TRIAL 4096
ELECTRON_PAIRS 16
ELECTRONS 32
SEED_FILE water_dimer.MP2_F12_VBX.cv_TRUE
DEBUG 2
SPHERICAL 0
SAMPLER DIRECT
TAU_INTEGRATION STOCHASTIC
GEOM water_monomer_b.xyz
BASIS ../basis/cc-pvdz.basis
MC_BASIS ../basis/cc-pvdz.mc_basis
MOVECS water_monomer_b.movecs
";
        assert_eq!(deck, want);
    }

    #[test]
    fn test_dimer_deck_defaults() {
        let deck = format_mc_deck(
            "water",
            Fragment::Dimer,
            &RunConfig::default(),
            "../movecs/water_dimer.movecs",
        );
        assert!(deck.contains("MC_TRIAL 1048576\n"));
        assert!(deck.contains("ELECTRON_PAIRS 128\nELECTRONS 64\n"));
        assert!(deck.contains("JOBNAME water_dimer.MP2_F12_VBX.cv_TRUE\n"));
        assert!(deck.contains("SEED_FILE water_dimer.MP2_F12_VBX.cv_TRUE\nDEBUG 0\n"));
        assert!(deck.ends_with("MOVECS ../movecs/water_dimer.movecs\n"));
    }

    fn value<'a>(deck: &'a str, key: &str) -> &'a str {
        deck.lines()
            .find_map(|l| l.strip_prefix(key).and_then(|v| v.strip_prefix(' ')))
            .unwrap()
    }

    #[test]
    fn test_seed_file_is_dimer_jobname() {
        let config = RunConfig::default();
        let dimer = format_mc_deck("hf", Fragment::Dimer, &config, "hf_dimer.movecs");
        let dimer_job = value(&dimer, "JOBNAME");
        assert_eq!(value(&dimer, "SEED_FILE"), dimer_job);

        for fragment in [Fragment::MonomerA, Fragment::MonomerB] {
            let job = job_name("hf", fragment);
            let deck = format_mc_deck("hf", fragment, &config, &format!("{job}.movecs"));
            assert_eq!(value(&deck, "SEED_FILE"), dimer_job, "{fragment}");
            assert_ne!(value(&deck, "JOBNAME"), dimer_job);
            assert_eq!(value(&deck, "GEOM"), format!("{job}.xyz"));
        }
    }
}
