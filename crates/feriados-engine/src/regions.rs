//! State-to-town jurisdiction hierarchy.
//!
//! The mutation engine needs to know which towns sit under a state in order
//! to fan a state-level write out to them. That hierarchy is reference data,
//! loaded once at startup and immutable afterwards: either the bundled table
//! of federative units or a CSV file with the full town list.

use std::collections::BTreeMap;
use std::path::Path;

use feriados_core::errors::{Error, Result};
use feriados_core::JurisdictionCode;

/// Read-only view of the state-to-town hierarchy.
pub trait RegionProvider {
    /// Codes of the towns under `state`, or `None` when the state code is
    /// unknown to the provider.
    fn towns_of(&self, state: &str) -> Option<Vec<String>>;
}

/// A federative unit and the towns administratively under it.
#[derive(Debug, Clone, Copy)]
pub struct StateRegion {
    /// Two-digit state code.
    pub code: &'static str,
    /// Two-letter postal abbreviation.
    pub uf: &'static str,
    /// Seven-digit codes of the state's towns.
    pub towns: &'static [&'static str],
}

/// The 27 federative units, each with its capital and largest towns.
///
/// This bundled table keeps the service usable out of the box; deployments
/// that need every municipality load the full list through
/// [`RegionTable::from_csv_path`].
pub static BUILTIN_REGIONS: [StateRegion; 27] = [
    StateRegion { code: "11", uf: "RO", towns: &["1100205", "1100122", "1100023"] },
    StateRegion { code: "12", uf: "AC", towns: &["1200401", "1200203"] },
    StateRegion { code: "13", uf: "AM", towns: &["1302603", "1303403"] },
    StateRegion { code: "14", uf: "RR", towns: &["1400100", "1400472"] },
    StateRegion { code: "15", uf: "PA", towns: &["1501402", "1506807", "1504208"] },
    StateRegion { code: "16", uf: "AP", towns: &["1600303", "1600600"] },
    StateRegion { code: "17", uf: "TO", towns: &["1721000", "1702109"] },
    StateRegion { code: "21", uf: "MA", towns: &["2111300", "2105302"] },
    StateRegion { code: "22", uf: "PI", towns: &["2211001", "2207702"] },
    StateRegion { code: "23", uf: "CE", towns: &["2304400", "2307304", "2312908"] },
    StateRegion { code: "24", uf: "RN", towns: &["2408102", "2408003"] },
    StateRegion { code: "25", uf: "PB", towns: &["2507507", "2504009"] },
    StateRegion { code: "26", uf: "PE", towns: &["2611606", "2609600", "2604106"] },
    StateRegion { code: "27", uf: "AL", towns: &["2704302", "2700300"] },
    StateRegion { code: "28", uf: "SE", towns: &["2800308", "2804805"] },
    StateRegion { code: "29", uf: "BA", towns: &["2927408", "2910800", "2933307"] },
    StateRegion { code: "31", uf: "MG", towns: &["3106200", "3170206", "3136702", "3118601"] },
    StateRegion { code: "32", uf: "ES", towns: &["3205309", "3205200", "3205002"] },
    StateRegion { code: "33", uf: "RJ", towns: &["3304557", "3303302", "3301702", "3303500"] },
    StateRegion {
        code: "35",
        uf: "SP",
        towns: &["3550308", "3509502", "3518800", "3534401", "3548500"],
    },
    StateRegion { code: "41", uf: "PR", towns: &["4106902", "4113700", "4115200"] },
    StateRegion { code: "42", uf: "SC", towns: &["4205407", "4209102", "4202404"] },
    StateRegion { code: "43", uf: "RS", towns: &["4314902", "4305108", "4314407"] },
    StateRegion { code: "50", uf: "MS", towns: &["5002704", "5003702"] },
    StateRegion { code: "51", uf: "MT", towns: &["5103403", "5108402"] },
    StateRegion { code: "52", uf: "GO", towns: &["5208707", "5201108", "5201405"] },
    StateRegion { code: "53", uf: "DF", towns: &["5300108"] },
];

/// Region hierarchy held in memory, loaded once at startup.
#[derive(Debug, Clone)]
pub struct RegionTable {
    states: BTreeMap<String, Vec<String>>,
}

impl RegionTable {
    /// The table bundled with the crate, built from [`BUILTIN_REGIONS`].
    pub fn builtin() -> Self {
        let mut states = BTreeMap::new();
        for region in &BUILTIN_REGIONS {
            let towns = region.towns.iter().map(|t| (*t).to_owned()).collect();
            states.insert(region.code.to_owned(), towns);
        }
        RegionTable { states }
    }

    /// Loads a table from a CSV file of town codes.
    ///
    /// The file must carry a header row; the first column of every following
    /// row is a seven-digit town code, attached to the state its two-digit
    /// prefix names. Further columns (town name and the like) are ignored.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            Error::Repository(format!("cannot open region file {}: {e}", path.display()))
        })?;
        let mut states: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (row, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                Error::Repository(format!("region file {}: {e}", path.display()))
            })?;
            let code = record.get(0).unwrap_or("").trim();
            match JurisdictionCode::parse(code) {
                Ok(JurisdictionCode::Town(town)) => {
                    let state = town[..2].to_owned();
                    states.entry(state).or_default().push(town);
                }
                _ => {
                    return Err(Error::Repository(format!(
                        "region file {}, row {}: {code:?} is not a town code",
                        path.display(),
                        row + 2,
                    )));
                }
            }
        }
        Ok(RegionTable { states })
    }

    /// Number of states the table knows.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

impl RegionProvider for RegionTable {
    fn towns_of(&self, state: &str) -> Option<Vec<String>> {
        self.states.get(state).cloned()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
