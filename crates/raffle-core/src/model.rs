//! Raffle data model: attendees, prize tiers, winner records

use serde::{Deserialize, Serialize};

use crate::error::{RaffleError, RaffleResult};

// ═══════════════════════════════════════════════════════════════════════════════
// ATTENDEE
// ═══════════════════════════════════════════════════════════════════════════════

/// Largest attendance count accepted for one attendee
pub const MAX_ATTENDANCE: u32 = 10_000;

/// One roster entry. Each unit of attendance is one ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub attendance: u32,
}

impl Attendee {
    /// Create an attendee, rejecting blank names and attendance outside
    /// `1..=MAX_ATTENDANCE`
    pub fn new(name: impl Into<String>, attendance: i64) -> RaffleResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(RaffleError::EmptyName);
        }
        if attendance <= 0 || attendance > i64::from(MAX_ATTENDANCE) {
            return Err(RaffleError::InvalidAttendance { name, attendance });
        }
        Ok(Self {
            name,
            attendance: attendance as u32,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PRIZE TIER
// ═══════════════════════════════════════════════════════════════════════════════

/// A prize denomination with a limited quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrizeTier {
    /// Prize value in whole currency units
    pub value: u64,
    /// Remaining quantity
    pub quantity: u32,
}

impl PrizeTier {
    pub fn new(value: u64, quantity: u32) -> Self {
        Self { value, quantity }
    }

    /// Parse operator input. Both fields must be positive whole numbers;
    /// a leading `$` on the value is accepted.
    pub fn parse(value: &str, quantity: &str) -> RaffleResult<Self> {
        let value = value.trim();
        let quantity = quantity.trim();

        if value.is_empty() {
            return Err(RaffleError::MissingValue);
        }
        if quantity.is_empty() {
            return Err(RaffleError::MissingQuantity);
        }

        let parsed_value = value
            .strip_prefix('$')
            .unwrap_or(value)
            .trim()
            .parse::<u64>()
            .map_err(|_| RaffleError::InvalidValue(value.to_string()))?;

        let parsed_quantity = quantity
            .parse::<u32>()
            .map_err(|_| RaffleError::InvalidQuantity(quantity.to_string()))?;

        let tier = Self::new(parsed_value, parsed_quantity);
        tier.validate()?;
        Ok(tier)
    }

    /// Check that value and quantity are both positive
    pub fn validate(&self) -> RaffleResult<()> {
        if self.value == 0 {
            return Err(RaffleError::InvalidValue(self.value.to_string()));
        }
        if self.quantity == 0 {
            return Err(RaffleError::InvalidQuantity(self.quantity.to_string()));
        }
        Ok(())
    }

    pub fn is_depleted(&self) -> bool {
        self.quantity == 0
    }
}

/// Total number of prize slots across all tiers
pub fn total_prize_slots(tiers: &[PrizeTier]) -> u64 {
    tiers.iter().map(|t| t.quantity as u64).sum()
}

// ═══════════════════════════════════════════════════════════════════════════════
// WINNER RECORD
// ═══════════════════════════════════════════════════════════════════════════════

/// A drawn winner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerRecord {
    pub name: String,
    /// Value of the tier this winner was drawn for
    pub prize: u64,
    /// Set once the winner has been announced
    #[serde(default)]
    pub revealed: bool,
    /// Operator has handed out the prize
    #[serde(default)]
    pub acknowledged: bool,
}

impl WinnerRecord {
    pub fn new(name: impl Into<String>, prize: u64) -> Self {
        Self {
            name: name.into(),
            prize,
            revealed: false,
            acknowledged: false,
        }
    }
}
