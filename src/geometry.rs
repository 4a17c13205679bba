//! XYZ geometry reader.
//!
//! The accepted layout is an atom count followed by one `Element x y z` line
//! per atom. Blank lines are ignored anywhere in the file and an optional
//! comment line may follow the count, as in standard XYZ files.

use crate::error::{GenError, Result};
use nalgebra::Vector3;
use periodic_table_on_an_enum::Element;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A single atom of the dimer, positions in Angstrom.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub symbol: String,
    pub position: Vector3<f64>,
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: Vector3<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            position,
        }
    }
}

/// Immutable list of atoms read from a dimer XYZ file.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    atoms: Vec<Atom>,
}

impl Geometry {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| GenError::UnreadableInput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse XYZ text. `path` is only used to label errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| GenError::geometry(path, "file is empty"))?;
        let count: usize = header.parse().map_err(|_| {
            GenError::geometry(
                path,
                format!("line {header_line}: atom count '{header}' is not a number"),
            )
        })?;
        if count == 0 {
            return Err(GenError::geometry(path, "atom count is zero"));
        }

        let mut body: Vec<(usize, &str)> = lines.collect();
        if body.len() == count + 1 && parse_atom(body[0].1).is_err() {
            debug!("Skipping comment line: {}", body[0].1);
            body.remove(0);
        }
        if body.len() != count {
            return Err(GenError::geometry(
                path,
                format!(
                    "header declares {} atoms but {} atom lines were found",
                    count,
                    body.len()
                ),
            ));
        }

        let atoms = body
            .into_iter()
            .map(|(lineno, line)| {
                parse_atom(line)
                    .map_err(|reason| GenError::geometry(path, format!("line {lineno}: {reason}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { atoms })
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Number of atoms that belong to the first monomer, `floor(n / 2)`.
    pub fn split_index(&self) -> usize {
        self.atoms.len() / 2
    }
}

fn parse_atom(line: &str) -> std::result::Result<Atom, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(format!("expected 'Element x y z', found '{line}'"));
    }

    let symbol = normalize_symbol(fields[0]);
    let element = Element::from_symbol(&symbol)
        .ok_or_else(|| format!("unknown element symbol '{}'", fields[0]))?;

    let mut coords = [0.0; 3];
    for (coord, field) in coords.iter_mut().zip(&fields[1..4]) {
        *coord = field
            .parse::<f64>()
            .map_err(|_| format!("coordinate '{field}' is not a number"))?;
    }

    Ok(Atom::new(
        element.get_symbol(),
        Vector3::new(coords[0], coords[1], coords[2]),
    ))
}

/// "CL" and "cl" both become "Cl".
fn normalize_symbol(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
