//! Validated scalar inputs for the formula library
//!
//! Every physical or financial quantity a formula consumes is wrapped in a
//! newtype whose range is checked at construction. Formulas therefore never
//! re-validate their inputs; they only guard genuine zero denominators.

use nutype::nutype;

/// A unitless fraction in [0.0, 1.0]
///
/// Used for ratios, efficiencies, probabilities and normalised scores.
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct Fraction(f64);

impl Fraction {
    /// Zero (0.0)
    pub fn zero() -> Self {
        Self::try_new(0.0).expect("0.0 is a valid fraction")
    }

    /// One (1.0)
    pub fn one() -> Self {
        Self::try_new(1.0).expect("1.0 is a valid fraction")
    }

    /// `1 - self`
    pub fn complement(&self) -> f64 {
        1.0 - self.into_inner()
    }
}

/// Battery state of health as a fraction of as-new capacity
///
/// The canonical unit is a fraction in [0.0, 1.0]. Call sites that think in
/// percent go through [`StateOfHealth::from_percent`].
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct StateOfHealth(f64);

impl StateOfHealth {
    /// A brand new pack (1.0)
    pub fn new_pack() -> Self {
        Self::try_new(1.0).expect("1.0 is a valid state of health")
    }

    /// Build from a percentage in [0, 100]
    pub fn from_percent(percent: f64) -> Result<Self, StateOfHealthError> {
        Self::try_new(percent / 100.0)
    }

    /// Express as a percentage in [0, 100]
    pub fn as_percent(&self) -> f64 {
        self.into_inner() * 100.0
    }
}

/// A percentage in [0, 100], e.g. a target state of charge
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 100.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct Percentage(f64);

impl Percentage {
    /// Convert to a fraction in [0.0, 1.0]
    pub fn as_fraction(&self) -> f64 {
        self.into_inner() / 100.0
    }
}

/// Energy or capacity in kilowatt-hours (>= 0)
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct KilowattHours(f64);

impl KilowattHours {
    /// No energy
    pub fn zero() -> Self {
        Self::try_new(0.0).expect("0.0 kWh is valid")
    }
}

/// Temperature in degrees Celsius (not below absolute zero)
#[nutype(
    validate(finite, greater_or_equal = -273.15),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct Celsius(f64);

impl Celsius {
    /// Reference temperature for degradation models (25 °C)
    pub fn reference() -> Self {
        Self::try_new(25.0).expect("25 °C is valid")
    }
}

/// A non-negative amount of money in US dollars
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct Usd(f64);

/// Price of one kilowatt-hour of cell capacity in US dollars (> 0)
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct UsdPerKwh(f64);

/// Carbon price in US dollars per tonne of CO2e (>= 0)
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct UsdPerTonne(f64);

/// Grid carbon intensity in kg CO2e per kWh (>= 0)
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct GridIntensity(f64);

/// Credits issued per kWh of effective energy (>= 0)
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct CreditRate(f64);

/// Expected annual yield; -1.0 is a total loss
#[nutype(
    validate(finite, greater_or_equal = -1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct AnnualYield(f64);

/// Data volume in gigabytes (>= 0)
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct Gigabytes(f64);

/// A strictly positive duration in hours
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct Hours(f64);

/// A strictly positive duration in seconds
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct Seconds(f64);

/// Number of legal jurisdictions a data flow crosses (at least one)
#[nutype(
    validate(greater_or_equal = 1),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize
    )
)]
pub struct JurisdictionCount(u32);

impl JurisdictionCount {
    /// A purely domestic flow
    pub fn domestic() -> Self {
        Self::try_new(1).expect("1 jurisdiction is valid")
    }

    /// Jurisdictions beyond the first
    pub fn additional(&self) -> f64 {
        f64::from(self.into_inner() - 1)
    }
}
