use std::collections::BTreeMap;
use std::path::Path;

use fano_data::{MaterialRecord, SubshellRecord};

/// Photo-atomic file of the evaluation holding subshell photoionization.
const MF_PHOTOIONIZATION: u16 = 23;

/// Reaction numbers of the subshell sections (K1 through M3) with labels.
const SUBSHELL_SECTIONS: [(u16, &str); 7] = [
    (534, "K1"),
    (535, "L1"),
    (536, "L2"),
    (537, "L3"),
    (538, "M1"),
    (539, "M2"),
    (540, "M3"),
];

/// Contents of an ENDF-6 photo-atomic file relevant to photoionization.
pub struct PhotoatomicFile {
    pub library: String,
    pub material: MaterialRecord,
    pub subshells: Vec<SubshellRecord>,
}

/// One 80-column ENDF-6 record.
struct Record<'a> {
    data: &'a str,
    mat: i32,
    mf: u16,
    mt: u16,
}

impl<'a> Record<'a> {
    /// `None` for lines too short to carry the control columns, or whose
    /// columns do not fall on character boundaries.
    fn parse(line: &'a str) -> Option<Self> {
        Some(Record {
            data: line.get(..66)?,
            mat: line.get(66..70)?.trim().parse().ok()?,
            mf: line.get(70..72)?.trim().parse().ok()?,
            mt: line.get(72..75)?.trim().parse().ok()?,
        })
    }

    /// The `i`-th of the six 11-column fields.
    fn field(&self, i: usize) -> &'a str {
        self.data.get(i * 11..(i + 1) * 11).unwrap_or("")
    }

    fn float(&self, i: usize) -> f64 {
        parse_endf_float(self.field(i))
            .unwrap_or_else(|| panic!("bad ENDF float {:?}", self.field(i)))
    }

    fn int(&self, i: usize) -> usize {
        let s = self.field(i).trim();
        if s.is_empty() {
            return 0;
        }
        s.parse()
            .unwrap_or_else(|_| panic!("bad ENDF integer {s:?}"))
    }
}

/// Parse a number in ENDF notation.
///
/// ENDF drops the exponent letter (`1.838900+3`, `-2.5-12`); plain Fortran
/// and Rust notations are accepted too. A blank field reads as zero.
pub fn parse_endf_float(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    let bytes = s.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E' | b'd' | b'D'));
    match split {
        Some(i) => format!("{}e{}", &s[..i], &s[i..]).parse().ok(),
        None => s.replace(['d', 'D'], "e").parse().ok(),
    }
}

/// Parse the MF=23 subshell sections of an ENDF-6 photo-atomic evaluation.
pub fn parse_photoatomic(path: &Path) -> PhotoatomicFile {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    parse_photoatomic_str(&content)
}

pub fn parse_photoatomic_str(content: &str) -> PhotoatomicFile {
    let mut lines = content.lines();

    // TPID: free text in the data columns
    let library = lines
        .next()
        .map(|l| l.get(..66).unwrap_or(l).trim().to_string())
        .unwrap_or_default();

    let records: Vec<Record> = lines.filter_map(Record::parse).collect();

    let mat = records
        .iter()
        .find(|r| r.mat > 0)
        .map(|r| r.mat)
        .expect("no material records in ENDF file");

    let symbol = records
        .iter()
        .filter(|r| r.mf == 1 && r.mt == 451)
        .find_map(|r| zsymam_symbol(r.data))
        .expect("no ZSYMAM text record in MF=1 MT=451");

    let mut sections: BTreeMap<u16, Vec<&Record>> = BTreeMap::new();
    for r in records
        .iter()
        .filter(|r| r.mat == mat && r.mf == MF_PHOTOIONIZATION && r.mt != 0)
    {
        sections.entry(r.mt).or_default().push(r);
    }

    let mut za = 0.0;
    let mut awr = 0.0;
    let mut subshells = Vec::new();
    for (mt, label) in SUBSHELL_SECTIONS {
        let Some(section) = sections.get(&mt) else {
            eprintln!("  warning: MF={MF_PHOTOIONIZATION} MT={mt} ({label}) not present");
            continue;
        };
        let (head_za, head_awr, record) = parse_tab1_section(mt, label, section);
        za = head_za;
        awr = head_awr;
        subshells.push(record);
    }

    PhotoatomicFile {
        library,
        material: MaterialRecord {
            symbol,
            atomic_number: (za / 1000.0) as u16,
            mat: mat as u16,
            za,
            awr,
        },
        subshells,
    }
}

/// HEAD record, then TAB1 (`EPE EFL 0 0 NR NP`, interpolation table, pairs).
fn parse_tab1_section(mt: u16, label: &str, section: &[&Record]) -> (f64, f64, SubshellRecord) {
    assert!(section.len() >= 3, "MT={mt}: truncated section");
    let head = section[0];
    let cont = section[1];

    let nr = cont.int(4);
    let np = cont.int(5);
    let data_start = 2 + nr.div_ceil(3);

    let values: Vec<f64> = section[data_start..]
        .iter()
        .flat_map(|r| (0..6).map(move |i| (*r, i)))
        .take(2 * np)
        .map(|(r, i)| r.float(i))
        .collect();
    assert_eq!(values.len(), 2 * np, "MT={mt}: expected {np} points");

    let energy = values.iter().step_by(2).copied().collect();
    let cross_section = values.iter().skip(1).step_by(2).copied().collect();

    let record = SubshellRecord {
        label: label.to_string(),
        mt,
        binding_energy: cont.float(0),
        fluorescence_yield: cont.float(1),
        energy,
        cross_section,
    };
    (head.float(0), head.float(1), record)
}

/// Element symbol from a ZSYMAM field such as ` 14-Si-  0 `.
fn zsymam_symbol(data: &str) -> Option<String> {
    let mut parts = data.get(..11)?.trim().split('-');
    let z = parts.next()?.trim();
    let sym = parts.next()?.trim();
    if z.is_empty() || !z.bytes().all(|b| b.is_ascii_digit()) || sym.is_empty() {
        return None;
    }
    Some(sym.to_string())
}
