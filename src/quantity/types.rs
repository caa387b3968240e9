//! Core types for the quantity vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::error::{CapacitorError, Result};

/// Number of distinct quantities the calculator knows about.
pub const QUANTITY_COUNT: usize = 8;

/// A named physical variable of a parallel-plate capacitor.
///
/// The declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quantity {
    /// Plate area
    Area,
    /// Distance between the plates
    Separation,
    /// Charge held on one plate
    Charge,
    Capacitance,
    /// Potential difference across the plates
    Voltage,
    SurfaceChargeDensity,
    /// Field strength between the plates
    ElectricField,
    StoredEnergy,
}

impl Quantity {
    /// All quantities in canonical order.
    pub const ALL: [Quantity; QUANTITY_COUNT] = [
        Quantity::Area,
        Quantity::Separation,
        Quantity::Charge,
        Quantity::Capacitance,
        Quantity::Voltage,
        Quantity::SurfaceChargeDensity,
        Quantity::ElectricField,
        Quantity::StoredEnergy,
    ];

    /// Short symbol used at the prompt.
    pub fn symbol(&self) -> &'static str {
        match self {
            Quantity::Area => "A",
            Quantity::Separation => "d",
            Quantity::Charge => "Q",
            Quantity::Capacitance => "C",
            Quantity::Voltage => "V",
            Quantity::SurfaceChargeDensity => "Sigma",
            Quantity::ElectricField => "E",
            Quantity::StoredEnergy => "U",
        }
    }

    /// Long name used when rendering results.
    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Area => "Area",
            Quantity::Separation => "Separation",
            Quantity::Charge => "Charge",
            Quantity::Capacitance => "Capacitance",
            Quantity::Voltage => "Voltage",
            Quantity::SurfaceChargeDensity => "SurfaceChargeDensity",
            Quantity::ElectricField => "ElectricField",
            Quantity::StoredEnergy => "StoredEnergy",
        }
    }

    /// SI display unit.
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::Area => "m^2",
            Quantity::Separation => "m",
            Quantity::Charge => "C",
            Quantity::Capacitance => "F",
            Quantity::Voltage => "V",
            Quantity::SurfaceChargeDensity => "C/m^2",
            Quantity::ElectricField => "V/m",
            Quantity::StoredEnergy => "J",
        }
    }

    /// Check if this quantity is recomputed from the base inputs when a
    /// scenario perturbs them.
    ///
    /// Area, Charge and Separation are the base inputs; everything else is derived.
    pub fn is_derived(&self) -> bool {
        !matches!(
            self,
            Quantity::Area | Quantity::Separation | Quantity::Charge
        )
    }

    /// Look up a quantity by symbol (case-sensitive) or long name
    /// (case-insensitive).
    pub fn lookup(name: &str) -> Option<Quantity> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.symbol() == name)
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|q| q.name().eq_ignore_ascii_case(name))
            })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantity {
    type Err = CapacitorError;

    fn from_str(s: &str) -> Result<Self> {
        Quantity::lookup(s).ok_or_else(|| CapacitorError::unknown_quantity(s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_case_sensitive() {
        assert_eq!("C".parse::<Quantity>().unwrap(), Quantity::Capacitance);
        assert_eq!("Q".parse::<Quantity>().unwrap(), Quantity::Charge);
        assert_eq!("d".parse::<Quantity>().unwrap(), Quantity::Separation);
        assert!("D".parse::<Quantity>().is_err());
        assert!("sigma".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_long_names_ignore_case() {
        assert_eq!(
            "surfacechargedensity".parse::<Quantity>().unwrap(),
            Quantity::SurfaceChargeDensity
        );
        assert_eq!(" StoredEnergy ".parse::<Quantity>().unwrap(), Quantity::StoredEnergy);
    }

    #[test]
    fn test_unknown_name() {
        let err = "Flux".parse::<Quantity>().unwrap_err();
        assert!(matches!(err, CapacitorError::UnknownQuantity { ref name } if name == "Flux"));
    }

    #[test]
    fn test_derived_quantities() {
        let derived: Vec<_> = Quantity::ALL.iter().filter(|q| q.is_derived()).collect();
        assert_eq!(derived.len(), 5);
        assert!(!Quantity::Separation.is_derived());
    }

    #[test]
    fn test_units() {
        assert_eq!(Quantity::SurfaceChargeDensity.unit(), "C/m^2");
        assert_eq!(Quantity::ElectricField.unit(), "V/m");
        assert_eq!(Quantity::Capacitance.unit(), "F");
    }
}
