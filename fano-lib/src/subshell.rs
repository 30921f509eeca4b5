use std::fmt;
use std::str::FromStr;

use crate::error::ParseSubshellError;

/// Atomic subshells of silicon with a tabulated photoionization cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subshell {
    K1,
    L1,
    L2,
    L3,
    M1,
    M2,
    M3,
}

/// Principal shells, grouping the subshells by quantum number n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shell {
    K,
    L,
    M,
}

impl Subshell {
    /// All subshells, innermost first. Totals are summed in this order.
    pub const ALL: [Subshell; 7] = [
        Subshell::K1,
        Subshell::L1,
        Subshell::L2,
        Subshell::L3,
        Subshell::M1,
        Subshell::M2,
        Subshell::M3,
    ];

    /// ENDF-6 reaction number of the subshell's photoionization section (MF=23).
    pub const fn mt(self) -> u16 {
        match self {
            Subshell::K1 => 534,
            Subshell::L1 => 535,
            Subshell::L2 => 536,
            Subshell::L3 => 537,
            Subshell::M1 => 538,
            Subshell::M2 => 539,
            Subshell::M3 => 540,
        }
    }

    pub fn from_mt(mt: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.mt() == mt)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Subshell::K1 => "K1",
            Subshell::L1 => "L1",
            Subshell::L2 => "L2",
            Subshell::L3 => "L3",
            Subshell::M1 => "M1",
            Subshell::M2 => "M2",
            Subshell::M3 => "M3",
        }
    }

    pub const fn shell(self) -> Shell {
        match self {
            Subshell::K1 => Shell::K,
            Subshell::L1 | Subshell::L2 | Subshell::L3 => Shell::L,
            Subshell::M1 | Subshell::M2 | Subshell::M3 => Shell::M,
        }
    }

    /// Position in [`Subshell::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl Shell {
    pub const ALL: [Shell; 3] = [Shell::K, Shell::L, Shell::M];

    pub const fn subshells(self) -> &'static [Subshell] {
        match self {
            Shell::K => &[Subshell::K1],
            Shell::L => &[Subshell::L1, Subshell::L2, Subshell::L3],
            Shell::M => &[Subshell::M1, Subshell::M2, Subshell::M3],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Shell::K => "K",
            Shell::L => "L",
            Shell::M => "M",
        }
    }
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subshell {
    type Err = ParseSubshellError;

    /// Parses a label case-insensitively; a bare `K` means K1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_uppercase();
        if label == "K" {
            return Ok(Subshell::K1);
        }
        Self::ALL
            .into_iter()
            .find(|sub| sub.label() == label)
            .ok_or_else(|| ParseSubshellError(s.to_string()))
    }
}

impl FromStr for Shell {
    type Err = ParseSubshellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "K" => Ok(Shell::K),
            "L" => Ok(Shell::L),
            "M" => Ok(Shell::M),
            _ => Err(ParseSubshellError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mt_numbers_are_consecutive() {
        for (i, sub) in Subshell::ALL.iter().enumerate() {
            assert_eq!(sub.mt(), 534 + i as u16);
            assert_eq!(sub.index(), i);
            assert_eq!(Subshell::from_mt(sub.mt()), Some(*sub));
        }
        assert_eq!(Subshell::from_mt(533), None);
        assert_eq!(Subshell::from_mt(541), None);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("K1".parse::<Subshell>().unwrap(), Subshell::K1);
        assert_eq!("k".parse::<Subshell>().unwrap(), Subshell::K1);
        assert_eq!(" l3 ".parse::<Subshell>().unwrap(), Subshell::L3);
        assert_eq!("M2".parse::<Subshell>().unwrap(), Subshell::M2);
        assert!("N1".parse::<Subshell>().is_err());
        assert_eq!("m".parse::<Shell>().unwrap(), Shell::M);
        assert!("N".parse::<Shell>().is_err());
    }

    #[test]
    fn test_shells_partition_subshells() {
        let flattened: Vec<Subshell> = Shell::ALL
            .iter()
            .flat_map(|shell| shell.subshells().iter().copied())
            .collect();
        assert_eq!(flattened, Subshell::ALL);
        for sub in Subshell::ALL {
            assert!(sub.shell().subshells().contains(&sub));
        }
    }
}
