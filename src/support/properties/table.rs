use std::{fs, path::Path};

use tracing::debug;
use uom::si::{
    f64::{MolarMass, ThermodynamicTemperature},
    molar_mass::kilogram_per_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::StrictlyPositive;

use super::{Compound, HeatCapacityCoefficients, TableError};

/// Perry's liquid heat-capacity data for a handful of common liquids.
const BUNDLED: &str = include_str!("../../../data/cp_data.csv");

/// Heat-capacity correlations keyed by compound name.
///
/// The table is comma-delimited with a header row. Columns are located by
/// header name, so their order does not matter:
///
/// | Column              | Meaning                              |
/// |---------------------|--------------------------------------|
/// | `Name`              | Compound name used for lookups       |
/// | `Mol. wt.`          | Molecular weight, kg/kmol            |
/// | `Tmin, K`/`Tmin K`  | Lower bound of the correlation       |
/// | `Tmax, K`/`Tmax K`  | Upper bound of the correlation       |
/// | `C1` .. `C5`        | Coefficients, J/(kmol·K)             |
///
/// Fields may be double-quoted. Empty or missing numeric cells are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    compounds: Vec<Compound>,
}

impl PropertyTable {
    /// Parses the table shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if the bundled data is malformed.
    pub fn bundled() -> Result<Self, TableError> {
        Self::parse(BUNDLED)
    }

    /// Reads and parses a table from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Io`] if the file cannot be read, or any parse
    /// error from [`PropertyTable::parse`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parses a table from delimited text.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if the header is missing a required column, a
    /// row has too many fields, a number cannot be parsed, or a molecular
    /// weight is not strictly positive.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let mut lines = text
            .trim_start_matches('\u{feff}')
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines.next().ok_or(TableError::Empty)?;
        let header = split_fields(header);
        let columns = Columns::locate(&header)?;

        let compounds = lines
            .map(|(line, text)| {
                let fields = split_fields(text);
                if fields.len() > header.len() {
                    return Err(TableError::FieldCount {
                        line,
                        expected: header.len(),
                        found: fields.len(),
                    });
                }
                columns.compound(line, &fields)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(compounds = compounds.len(), "parsed property table");

        Ok(Self { compounds })
    }

    /// Returns all compounds in table order.
    #[must_use]
    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    /// Looks up a compound by exact name.
    ///
    /// If the name appears more than once, the first row wins.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownCompound`] if no row has this name.
    pub fn compound(&self, name: &str) -> Result<Compound, TableError> {
        self.compounds
            .iter()
            .find(|compound| compound.name() == name)
            .cloned()
            .ok_or_else(|| TableError::UnknownCompound {
                name: name.to_owned(),
            })
    }

    /// Looks up the hot-side and cold-side compounds.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownCompound`] if either name is missing.
    pub fn pair(&self, hot: &str, cold: &str) -> Result<(Compound, Compound), TableError> {
        Ok((self.compound(hot)?, self.compound(cold)?))
    }
}

const NAME: &str = "Name";
const MOL_WT: &str = "Mol. wt.";
const T_MIN: &str = "Tmin, K";
const T_MAX: &str = "Tmax, K";
const COEFFICIENTS: [&str; 5] = ["C1", "C2", "C3", "C4", "C5"];

/// Header positions of the columns we read.
struct Columns {
    name: usize,
    mol_wt: usize,
    t_min: usize,
    t_max: usize,
    coefficients: [usize; 5],
}

impl Columns {
    fn locate(header: &[String]) -> Result<Self, TableError> {
        let find = |column: &'static str| {
            let key = normalize(column);
            header
                .iter()
                .position(|field| normalize(field) == key)
                .ok_or(TableError::MissingColumn { column })
        };

        let mut coefficients = [0; 5];
        for (slot, column) in coefficients.iter_mut().zip(COEFFICIENTS) {
            *slot = find(column)?;
        }

        Ok(Self {
            name: find(NAME)?,
            mol_wt: find(MOL_WT)?,
            t_min: find(T_MIN)?,
            t_max: find(T_MAX)?,
            coefficients,
        })
    }

    fn compound(&self, line: usize, fields: &[String]) -> Result<Compound, TableError> {
        let name = fields.get(self.name).cloned().unwrap_or_default();
        let cell = |index: usize, column: &'static str| number(fields, index, line, column);

        // kg/kmol and g/mol are numerically equal.
        let mol_wt = MolarMass::new::<kilogram_per_mole>(cell(self.mol_wt, MOL_WT)? / 1000.0);
        let molar_mass =
            StrictlyPositive::new(mol_wt).map_err(|source| TableError::InvalidMolarMass {
                line,
                name: name.clone(),
                source,
            })?;

        let mut coefficients = [0.0; 5];
        for ((slot, &index), column) in coefficients
            .iter_mut()
            .zip(&self.coefficients)
            .zip(COEFFICIENTS)
        {
            *slot = cell(index, column)?;
        }

        Ok(Compound::new(
            name,
            molar_mass,
            ThermodynamicTemperature::new::<kelvin>(cell(self.t_min, T_MIN)?),
            ThermodynamicTemperature::new::<kelvin>(cell(self.t_max, T_MAX)?),
            HeatCapacityCoefficients(coefficients),
        ))
    }
}

/// Parses a numeric cell, treating empty or missing cells as zero.
fn number(
    fields: &[String],
    index: usize,
    line: usize,
    column: &'static str,
) -> Result<f64, TableError> {
    match fields.get(index).map(String::as_str) {
        None | Some("") => Ok(0.0),
        Some(value) => value.parse().map_err(|_| TableError::InvalidNumber {
            line,
            column,
            value: value.to_owned(),
        }),
    }
}

/// Header key used for matching: lowercase alphanumerics and dots only.
///
/// This makes `Tmin, K` and `Tmin K` the same column.
fn normalize(field: &str) -> String {
    field
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '.')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits a delimited line into trimmed fields, honoring double quotes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields.into_iter().map(|f| f.trim().to_owned()).collect()
}
