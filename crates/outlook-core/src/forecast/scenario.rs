//! Scenario and horizon definitions
//!
//! Both are closed enumerations. String or numeric input is validated at the
//! call boundary through `FromStr` / `TryFrom` and never coerced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Named multiplier profile applied to a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Conservative,
    Realistic,
    Optimistic,
}

/// Multipliers a scenario applies to historical averages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMultipliers {
    pub income: f64,
    pub expenses: f64,
    /// Annual growth rate, compounded monthly as `1 + growth_rate / 12`
    pub growth_rate: f64,
}

impl ScenarioMultipliers {
    /// Growth applied to net worth each projected month
    pub fn monthly_growth_factor(&self) -> f64 {
        1.0 + self.growth_rate / 12.0
    }
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Realistic => "realistic",
            Self::Optimistic => "optimistic",
        }
    }

    /// All scenarios, most pessimistic first
    pub fn all() -> &'static [Scenario] {
        &[Self::Conservative, Self::Realistic, Self::Optimistic]
    }

    pub fn multipliers(&self) -> ScenarioMultipliers {
        match self {
            Self::Conservative => ScenarioMultipliers {
                income: 0.95,
                expenses: 1.10,
                growth_rate: -0.02,
            },
            Self::Realistic => ScenarioMultipliers {
                income: 1.0,
                expenses: 1.0,
                growth_rate: 0.01,
            },
            Self::Optimistic => ScenarioMultipliers {
                income: 1.05,
                expenses: 0.95,
                growth_rate: 0.03,
            },
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "realistic" => Ok(Self::Realistic),
            "optimistic" => Ok(Self::Optimistic),
            _ => Err(Error::InvalidScenario(s.to_string())),
        }
    }
}

/// Number of months to project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Horizon {
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl Horizon {
    pub fn months(&self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }

    pub fn all() -> &'static [Horizon] {
        &[
            Self::OneMonth,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::TwelveMonths,
        ]
    }
}

impl TryFrom<u32> for Horizon {
    type Error = Error;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            1 => Ok(Self::OneMonth),
            3 => Ok(Self::ThreeMonths),
            6 => Ok(Self::SixMonths),
            12 => Ok(Self::TwelveMonths),
            other => Err(Error::InvalidHorizon(other)),
        }
    }
}

impl From<Horizon> for u32 {
    fn from(horizon: Horizon) -> Self {
        horizon.months()
    }
}

impl FromStr for Horizon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let months: u32 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidData(format!("Horizon must be a number of months: {}", s)))?;
        Horizon::try_from(months)
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.months())
    }
}
