use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

/// Chemical attributes of a residue type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResidueProperties {
    pub hydrophobicity: f64,
    #[serde(default)]
    pub charge: i32,
}

impl ResidueProperties {
    pub const fn new(hydrophobicity: f64, charge: i32) -> Self {
        Self {
            hydrophobicity,
            charge,
        }
    }

    #[inline]
    pub fn is_hydrophobic(&self) -> bool {
        self.hydrophobicity > 0.0
    }

    #[inline]
    pub fn is_polar(&self) -> bool {
        self.hydrophobicity < 0.0
    }

    #[inline]
    pub fn is_charged(&self) -> bool {
        self.charge != 0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResiduePropertyTable {
    entries: BTreeMap<char, ResidueProperties>,
}

impl ResiduePropertyTable {
    /// The HP(Q) toy alphabet: hydrophobic `H`, polar `P`, neutral `N`, and the charged polar
    /// residues `K` (+1) and `E` (-1).
    pub fn hpq() -> Self {
        Self::from_entries([
            ('H', ResidueProperties::new(1.0, 0)),
            ('P', ResidueProperties::new(-1.0, 0)),
            ('N', ResidueProperties::new(0.0, 0)),
            ('K', ResidueProperties::new(-1.0, 1)),
            ('E', ResidueProperties::new(-1.0, -1)),
        ])
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (char, ResidueProperties)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Loads a table from a TOML file of the form
    ///
    /// ```toml
    /// [A]
    /// hydrophobicity = 0.4
    /// charge = 0
    /// ```
    pub fn load(path: &Path) -> Result<Self, PropertyLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| PropertyLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            PropertyLoadError::Toml { source, .. } => PropertyLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PropertyLoadError> {
        let raw: HashMap<String, ResidueProperties> =
            toml::from_str(content).map_err(|e| PropertyLoadError::Toml {
                path: "<inline>".to_string(),
                source: e,
            })?;

        let mut entries = BTreeMap::new();
        for (key, properties) in raw {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_ascii_uppercase(),
                _ => return Err(PropertyLoadError::InvalidSymbol(key)),
            };
            if !properties.hydrophobicity.is_finite() {
                return Err(PropertyLoadError::NonFiniteHydrophobicity(symbol));
            }
            entries.insert(symbol, properties);
        }
        Ok(Self { entries })
    }

    #[inline]
    pub fn get(&self, symbol: char) -> Option<&ResidueProperties> {
        self.entries.get(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.entries.contains_key(&symbol)
    }

    /// Symbols of `sequence` missing from the table, sorted and deduplicated.
    pub fn unknown_symbols(&self, sequence: &str) -> Vec<char> {
        let mut unknown: Vec<char> = sequence.chars().filter(|c| !self.contains(*c)).collect();
        unknown.sort_unstable();
        unknown.dedup();
        unknown
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum PropertyLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Residue symbol '{0}' must be a single character")]
    InvalidSymbol(String),
    #[error("Hydrophobicity of residue '{0}' must be a finite number")]
    NonFiniteHydrophobicity(char),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn hpq_table_contains_toy_alphabet() {
        let table = ResiduePropertyTable::hpq();
        assert_eq!(table.len(), 5);
        assert!(table.get('H').unwrap().is_hydrophobic());
        assert!(table.get('P').unwrap().is_polar());
        assert_eq!(table.get('K').unwrap().charge, 1);
        assert_eq!(table.get('E').unwrap().charge, -1);
        assert!(table.get('X').is_none());
    }

    #[test]
    fn unknown_symbols_are_sorted_and_unique() {
        let table = ResiduePropertyTable::hpq();
        assert_eq!(table.unknown_symbols("HZPAZH"), vec!['A', 'Z']);
        assert!(table.unknown_symbols("HHPP").is_empty());
    }

    #[test]
    fn from_toml_str_parses_entries_and_defaults_charge() {
        let toml = r#"
            [a]
            hydrophobicity = 0.4

            [D]
            hydrophobicity = -0.78
            charge = -1
        "#;
        let table = ResiduePropertyTable::from_toml_str(toml).unwrap();
        assert_eq!(table.get('A'), Some(&ResidueProperties::new(0.4, 0)));
        assert_eq!(table.get('D'), Some(&ResidueProperties::new(-0.78, -1)));
    }

    #[test]
    fn from_toml_str_rejects_multi_character_symbols() {
        let toml = r#"
            [ALA]
            hydrophobicity = 0.4
        "#;
        let err = ResiduePropertyTable::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, PropertyLoadError::InvalidSymbol(s) if s == "ALA"));
    }

    #[test]
    fn from_toml_str_rejects_unknown_fields() {
        let toml = r#"
            [A]
            hydrophobicity = 0.4
            mass = 71.0
        "#;
        assert!(matches!(
            ResiduePropertyTable::from_toml_str(toml),
            Err(PropertyLoadError::Toml { .. })
        ));
    }

    #[test]
    fn load_reads_table_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[H]\nhydrophobicity = 2.0\n[Q]\nhydrophobicity = -1.0\ncharge = 1").unwrap();
        let table = ResiduePropertyTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get('H').unwrap().hydrophobicity, 2.0);
    }

    #[test]
    fn load_reports_missing_file_path() {
        let err = ResiduePropertyTable::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        match err {
            PropertyLoadError::Io { path, .. } => assert!(path.contains("not/here.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bundled_amino_acid_table_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/amino-acids.toml");
        let table = ResiduePropertyTable::load(&path).unwrap();
        assert_eq!(table.len(), 20);
        assert!(table.get('I').unwrap().is_hydrophobic());
        assert_eq!(table.get('R').unwrap().charge, 1);
        assert_eq!(table.get('D').unwrap().charge, -1);
    }
}
