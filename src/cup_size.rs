//! Tamaños de vaso que sirve la maquina y cuanto cafe lleva cada uno
use std::{fmt, str::FromStr};

use crate::{
    constants::{LARGE_CUP_COFFEE, MEDIUM_CUP_COFFEE, SMALL_CUP_COFFEE},
    errors::CoffeeMakerError,
};

pub const TOTAL_CUP_SIZES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CupSize {
    Small,
    Medium,
    Large,
}

impl CupSize {
    pub const ALL: [CupSize; TOTAL_CUP_SIZES] = [CupSize::Small, CupSize::Medium, CupSize::Large];

    /// Cafe (en Oz) necesario para llenar un vaso de este tamaño
    pub fn coffee_required(&self) -> u64 {
        match self {
            CupSize::Small => SMALL_CUP_COFFEE,
            CupSize::Medium => MEDIUM_CUP_COFFEE,
            CupSize::Large => LARGE_CUP_COFFEE,
        }
    }
}

impl fmt::Display for CupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CupSize::Small => "Small",
            CupSize::Medium => "Medium",
            CupSize::Large => "Large",
        };
        write!(f, "{}", name)
    }
}

/// Solo acepta los nombres tal cual se muestran: `Small`, `Medium` o `Large`
impl FromStr for CupSize {
    type Err = CoffeeMakerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Small" => Ok(CupSize::Small),
            "Medium" => Ok(CupSize::Medium),
            "Large" => Ok(CupSize::Large),
            _ => Err(CoffeeMakerError::InvalidCup(name.to_string())),
        }
    }
}
