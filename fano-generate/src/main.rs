mod endf;

use std::io::Write;
use std::path::{Path, PathBuf};

use fano_data::PhotoionizationDatabase;

fn main() {
    let workspace = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf();

    let input = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace.join("data_sources").join("epdl-silicon.endf"));

    if !input.exists() {
        eprintln!("Error: photo-atomic ENDF file not found at {:?}", input);
        eprintln!("Pass the path of an ENDF-6 photo-atomic evaluation as the first argument.");
        std::process::exit(1);
    }

    println!("Parsing {:?}...", input);

    let file = endf::parse_photoatomic(&input);
    println!("  Library: {}", file.library);
    println!(
        "  Material: {} (Z={}, MAT={})",
        file.material.symbol, file.material.atomic_number, file.material.mat
    );
    for s in &file.subshells {
        println!(
            "  {} (MT={}): {} points, binding energy {} eV",
            s.label,
            s.mt,
            s.energy.len(),
            s.binding_energy
        );
    }

    let db = PhotoionizationDatabase {
        library: file.library,
        material: file.material,
        subshells: file.subshells,
    };

    println!("\nSerializing with postcard...");
    let serialized = postcard::to_allocvec(&db).expect("postcard serialization failed");
    println!("  Serialized size: {} bytes", serialized.len());

    println!("Compressing with zstd (level 19)...");
    let compressed = zstd::encode_all(&serialized[..], 19).expect("zstd compression failed");
    println!("  Compressed size: {} bytes", compressed.len());
    println!(
        "  Compression ratio: {:.1}x",
        serialized.len() as f64 / compressed.len() as f64
    );

    let out_path = workspace
        .join("fano-lib")
        .join("data")
        .join("photoionization.bin.zst");

    std::fs::create_dir_all(out_path.parent().unwrap()).unwrap();
    let mut f = std::fs::File::create(&out_path).expect("failed to create output file");
    f.write_all(&compressed)
        .expect("failed to write compressed data");

    println!("\nWrote {:?}", out_path);

    println!("Verifying round-trip deserialization...");
    let decompressed = zstd::decode_all(&compressed[..]).expect("zstd decompression failed");
    assert_eq!(decompressed.len(), serialized.len());
    let db2: PhotoionizationDatabase =
        postcard::from_bytes(&decompressed).expect("postcard deserialization failed");
    assert_eq!(db2.subshells.len(), db.subshells.len());
    println!("  Round-trip OK!");
}
