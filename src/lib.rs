//! Counterpoise job generation for molecular dimers.
//!
//! A dimer geometry is split into the full dimer and two monomers in which
//! the partner's atoms are kept as ghost atoms. For every fragment an NWChem
//! deck and an MC_MPn_Direct deck are written, together with scripts that run
//! or queue the jobs.

pub mod app;
pub mod config;
pub mod deck;
pub mod error;
pub mod fragment;
pub mod geometry;
pub mod io;
pub mod scripts;

pub use app::{DimerApplication, JobFileSet};
pub use config::{Args, RunConfig};
pub use error::GenError;
pub use fragment::{partition, Fragment, FragmentView};
pub use geometry::{Atom, Geometry};
