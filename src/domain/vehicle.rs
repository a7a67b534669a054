//! Vehicle classes served by the charging and swap network

use crate::domain::values::KilowattHours;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Micro-mobility vehicle class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum VehicleClass {
    /// Two-wheelers (scooters, motorcycles)
    #[serde(rename = "2W")]
    #[display("2W")]
    TwoWheeler,
    /// Three-wheelers (auto-rickshaws, cargo trikes)
    #[serde(rename = "3W")]
    #[display("3W")]
    ThreeWheeler,
    /// Light four-wheel vehicles
    #[serde(rename = "Light")]
    #[display("Light")]
    Light,
}

impl VehicleClass {
    pub const ALL: [Self; 3] = [Self::TwoWheeler, Self::ThreeWheeler, Self::Light];

    /// Typical pack capacity for the class
    pub fn nominal_capacity(&self) -> KilowattHours {
        let kwh = match self {
            Self::TwoWheeler => 2.5,
            Self::ThreeWheeler => 5.0,
            Self::Light => 15.0,
        };
        KilowattHours::try_new(kwh).expect("Nominal capacities are valid")
    }
}
