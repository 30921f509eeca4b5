use std::io::Read;
use std::thread;

use approx::assert_relative_eq;
use fano::db::embedded_data;
use fano::fano_data::PhotoionizationDatabase;
use fano::{DataLoadError, Quantity, ReferenceDataset, Subshell, Unit, dataset};
use ruzstd::encoding::{CompressionLevel, compress_to_vec};

fn embedded_database() -> PhotoionizationDatabase {
    let mut decoder = ruzstd::decoding::StreamingDecoder::new(embedded_data()).unwrap();
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes).unwrap();
    postcard::from_bytes(&bytes).unwrap()
}

fn compress(data: &PhotoionizationDatabase) -> Vec<u8> {
    let bytes = postcard::to_allocvec(data).unwrap();
    compress_to_vec(&bytes[..], CompressionLevel::Fastest)
}

#[test]
fn test_material_metadata() {
    let ds = dataset().unwrap();
    let material = ds.material();
    assert_eq!(material.symbol, "Si");
    assert_eq!(material.atomic_number, 14);
    assert_eq!(material.mat, 1400);
    assert_relative_eq!(material.za, 14000.0);
    assert!(!ds.library().is_empty());
}

#[test]
fn test_all_subshells_present_and_valid() {
    let ds = dataset().unwrap();
    for subshell in Subshell::ALL {
        let table = ds.table(subshell);
        assert_eq!(table.subshell(), subshell);
        assert!(table.len() >= 2);
        assert!(table.energies().windows(2).all(|w| w[0] < w[1]));
        assert!(table.areas().iter().all(|&a| a >= 0.0));
        // tables start at the binding energy
        assert_eq!(table.energy_range().0, table.binding_energy());
    }
}

#[test]
fn test_binding_energies_are_ordered_by_shell() {
    let ds = dataset().unwrap();
    let k1 = ds.table(Subshell::K1).binding_energy();
    let l1 = ds.table(Subshell::L1).binding_energy();
    let l3 = ds.table(Subshell::L3).binding_energy();
    let m1 = ds.table(Subshell::M1).binding_energy();
    let m3 = ds.table(Subshell::M3).binding_energy();
    assert!(k1 > l1 && l1 > l3 && l3 > m1 && m1 > m3);
}

#[test]
fn test_recompressed_database_loads_identically() {
    let data = embedded_database();
    let ds = ReferenceDataset::from_compressed(&compress(&data)).unwrap();
    let reference = dataset().unwrap();
    for subshell in Subshell::ALL {
        assert_eq!(ds.table(subshell), reference.table(subshell));
    }

    let q = Quantity::new(vec![7.0, 70.0, 700.0, 7000.0], Unit::ElectronVolt);
    assert_eq!(
        ds.evaluate_total(&q).unwrap(),
        fano::evaluate_total(&q).unwrap()
    );
}

#[test]
fn test_truncated_resource_fails() {
    let bytes = embedded_data();
    for len in [0, 3, 12, bytes.len() / 2, bytes.len() - 1] {
        let result = ReferenceDataset::from_compressed(&bytes[..len]);
        assert!(
            matches!(
                result,
                Err(DataLoadError::Decompress(_) | DataLoadError::Decode(_))
            ),
            "truncated to {len} bytes: {result:?}"
        );
    }
}

#[test]
fn test_missing_section_fails() {
    let mut data = embedded_database();
    data.subshells.retain(|s| s.mt != Subshell::M2.mt());
    assert_eq!(
        ReferenceDataset::from_compressed(&compress(&data)).unwrap_err(),
        DataLoadError::MissingSubshell(Subshell::M2)
    );

    let mut data = embedded_database();
    data.subshells.clear();
    assert_eq!(
        ReferenceDataset::from_database(data).unwrap_err(),
        DataLoadError::MissingSubshell(Subshell::K1)
    );
}

#[test]
fn test_duplicate_section_fails() {
    let mut data = embedded_database();
    let extra = data.subshells[2].clone();
    data.subshells.push(extra);
    assert_eq!(
        ReferenceDataset::from_database(data).unwrap_err(),
        DataLoadError::DuplicateSubshell(Subshell::L2)
    );
}

#[test]
fn test_empty_section_fails() {
    let mut data = embedded_database();
    let l1 = data
        .subshells
        .iter_mut()
        .find(|s| s.mt == Subshell::L1.mt())
        .unwrap();
    l1.energy.clear();
    l1.cross_section.clear();
    assert_eq!(
        ReferenceDataset::from_database(data).unwrap_err(),
        DataLoadError::TooFewPoints {
            subshell: Subshell::L1,
            len: 0
        }
    );
}

#[test]
fn test_non_monotonic_section_fails() {
    let mut data = embedded_database();
    let k1 = data
        .subshells
        .iter_mut()
        .find(|s| s.mt == Subshell::K1.mt())
        .unwrap();
    k1.energy.swap(4, 5);
    assert!(matches!(
        ReferenceDataset::from_database(data),
        Err(DataLoadError::NotIncreasing {
            subshell: Subshell::K1,
            index: 5,
            ..
        })
    ));
}

#[test]
fn test_unknown_sections_are_ignored() {
    let mut data = embedded_database();
    let mut extra = data.subshells[0].clone();
    extra.mt = 541;
    extra.label = "M4".to_string();
    data.subshells.push(extra);
    assert!(ReferenceDataset::from_database(data).is_ok());
}

#[test]
fn test_concurrent_first_use() {
    let mut handles = Vec::new();
    for _ in 0..8 {
        handles.push(thread::spawn(|| {
            let ds = dataset().unwrap();
            ds as *const ReferenceDataset as usize
        }));
    }

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}
