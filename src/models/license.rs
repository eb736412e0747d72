//! Clases de licencia de conducir
//!
//! Enumeración cerrada y ordenada A < B < C < D < E. Cada clase mapea a un
//! rango entero estrictamente creciente; la compatibilidad con un camión es
//! "rango del conductor >= rango mínimo del camión".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Valor fuera de la enumeración cerrada de clases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown license class")]
pub struct UnknownLicenseClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LicenseClass {
    A,
    B,
    C,
    D,
    E,
}

impl LicenseClass {
    pub const ALL: [LicenseClass; 5] = [
        LicenseClass::A,
        LicenseClass::B,
        LicenseClass::C,
        LicenseClass::D,
        LicenseClass::E,
    ];

    /// Rango entero de la clase, 1..=5
    pub fn rank(self) -> u8 {
        match self {
            LicenseClass::A => 1,
            LicenseClass::B => 2,
            LicenseClass::C => 3,
            LicenseClass::D => 4,
            LicenseClass::E => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LicenseClass::A => "A",
            LicenseClass::B => "B",
            LicenseClass::C => "C",
            LicenseClass::D => "D",
            LicenseClass::E => "E",
        }
    }
}

impl FromStr for LicenseClass {
    type Err = UnknownLicenseClass;

    // Solo letras mayúsculas exactas; "a" o "AB" no son clases válidas
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(LicenseClass::A),
            "B" => Ok(LicenseClass::B),
            "C" => Ok(LicenseClass::C),
            "D" => Ok(LicenseClass::D),
            "E" => Ok(LicenseClass::E),
            _ => Err(UnknownLicenseClass),
        }
    }
}

impl fmt::Display for LicenseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_strictly_increasing() {
        let ranks: Vec<u8> = LicenseClass::ALL.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_from_str_accepts_exact_uppercase() {
        for class in LicenseClass::ALL {
            assert_eq!(class.as_str().parse::<LicenseClass>(), Ok(class));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("F".parse::<LicenseClass>().is_err());
        assert!("a".parse::<LicenseClass>().is_err());
        assert!("AB".parse::<LicenseClass>().is_err());
        assert!("".parse::<LicenseClass>().is_err());
    }

    #[test]
    fn test_ordering_matches_rank() {
        assert!(LicenseClass::A < LicenseClass::E);
        assert!(LicenseClass::C > LicenseClass::B);
    }
}
