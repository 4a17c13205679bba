//! Dimer job generator command-line interface
//!
//! Reads `<name>_dimer.xyz` files and writes NWChem / MC_MPn_Direct inputs
//! and run scripts for the dimer and both ghosted monomers.

use color_eyre::eyre::{Result, WrapErr};
use dimer_nwgen::DimerApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    let app = DimerApplication::from_cli()?;
    app.run().wrap_err("Failed to generate dimer jobs")?;
    Ok(())
}
