use std::io::Read;
use std::sync::OnceLock;

use fano_data::{MaterialRecord, PhotoionizationDatabase};
use tracing::{debug, error, warn};

use crate::error::DataLoadError;
use crate::subshell::{Shell, Subshell};
use crate::table::CrossSectionTable;

const COMPRESSED_DATA: &[u8] = include_bytes!("../data/photoionization.bin.zst");

static DATASET: OnceLock<Result<ReferenceDataset, DataLoadError>> = OnceLock::new();

/// The process-wide reference dataset, decoded from the embedded blob on
/// first use.
///
/// Concurrent first calls decode once. A load failure is cached as well and
/// returned from every later call.
pub fn dataset() -> Result<&'static ReferenceDataset, DataLoadError> {
    load_cached(&DATASET, COMPRESSED_DATA)
}

/// Decode `bytes` into `cell` unless it already holds a result, then hand
/// out the cached outcome.
fn load_cached<'a>(
    cell: &'a OnceLock<Result<ReferenceDataset, DataLoadError>>,
    bytes: &[u8],
) -> Result<&'a ReferenceDataset, DataLoadError> {
    cell.get_or_init(|| {
        let loaded = ReferenceDataset::from_compressed(bytes);
        match &loaded {
            Ok(ds) => debug!(
                library = ds.library(),
                material = %ds.material().symbol,
                points = ds.tables().iter().map(CrossSectionTable::len).sum::<usize>(),
                "decoded photoionization reference data"
            ),
            Err(e) => error!(error = %e, "failed to load photoionization reference data"),
        }
        loaded
    })
    .as_ref()
    .map_err(Clone::clone)
}

/// The embedded, zstd-compressed postcard blob.
pub fn embedded_data() -> &'static [u8] {
    COMPRESSED_DATA
}

/// Cross-section tables of all seven subshells of one material.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    library: String,
    material: MaterialRecord,
    /// Indexed by `Subshell::index`.
    tables: Vec<CrossSectionTable>,
}

impl ReferenceDataset {
    /// Decompress and decode a blob in the format of the embedded data.
    pub fn from_compressed(bytes: &[u8]) -> Result<Self, DataLoadError> {
        let mut decoder = ruzstd::decoding::StreamingDecoder::new(bytes)
            .map_err(|e| DataLoadError::Decompress(e.to_string()))?;
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| DataLoadError::Decompress(e.to_string()))?;

        Self::from_postcard(&decompressed)
    }

    /// Decode an uncompressed postcard-encoded [`PhotoionizationDatabase`].
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, DataLoadError> {
        let data: PhotoionizationDatabase =
            postcard::from_bytes(bytes).map_err(|e| DataLoadError::Decode(e.to_string()))?;
        Self::from_database(data)
    }

    /// Validate raw records and index them by subshell.
    ///
    /// Every subshell needs exactly one section, matched by its ENDF
    /// reaction number. Sections for other reactions are ignored.
    pub fn from_database(data: PhotoionizationDatabase) -> Result<Self, DataLoadError> {
        let mut slots: Vec<Option<CrossSectionTable>> = vec![None; Subshell::ALL.len()];

        for record in data.subshells {
            let Some(subshell) = Subshell::from_mt(record.mt) else {
                warn!(mt = record.mt, label = %record.label, "ignoring unknown section");
                continue;
            };
            if record.label != subshell.label() {
                warn!(
                    mt = record.mt,
                    label = %record.label,
                    expected = subshell.label(),
                    "section label does not match its reaction number"
                );
            }
            let slot = &mut slots[subshell.index()];
            if slot.is_some() {
                return Err(DataLoadError::DuplicateSubshell(subshell));
            }
            let table = CrossSectionTable::from_record(subshell, record)?;
            debug!(
                subshell = %subshell,
                points = table.len(),
                binding_energy = table.binding_energy(),
                "loaded subshell table"
            );
            *slot = Some(table);
        }

        let tables = Subshell::ALL
            .into_iter()
            .zip(slots)
            .map(|(subshell, slot)| slot.ok_or(DataLoadError::MissingSubshell(subshell)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReferenceDataset {
            library: data.library,
            material: data.material,
            tables,
        })
    }

    /// Identification of the source evaluation.
    pub fn library(&self) -> &str {
        &self.library
    }

    pub fn material(&self) -> &MaterialRecord {
        &self.material
    }

    pub fn table(&self, subshell: Subshell) -> &CrossSectionTable {
        &self.tables[subshell.index()]
    }

    /// All tables in [`Subshell::ALL`] order.
    pub fn tables(&self) -> &[CrossSectionTable] {
        &self.tables
    }

    /// Cross-section of one subshell at a photon energy in eV.
    #[inline]
    pub fn area(&self, subshell: Subshell, energy: f64) -> f64 {
        self.table(subshell).interpolate(energy)
    }

    /// Sum over the subshells of one shell at a photon energy in eV.
    pub fn shell_area(&self, shell: Shell, energy: f64) -> f64 {
        shell
            .subshells()
            .iter()
            .map(|&s| self.area(s, energy))
            .sum()
    }

    /// Total photoionization cross-section at a photon energy in eV: the sum
    /// of all subshells, K1 first.
    pub fn total_area(&self, energy: f64) -> f64 {
        self.tables.iter().map(|t| t.interpolate(energy)).sum()
    }
}
