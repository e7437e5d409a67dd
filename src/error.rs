use crate::Chips;
use crate::Multiplier;

/// Every way an operation on the machine, or the loading of its
/// configuration, can be refused. Each one leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("money already deposited")]
    AlreadyDeposited,
    #[error("the amount {amount} is below the minimum play {minimum}")]
    BelowMinimum { amount: Chips, minimum: Chips },
    #[error("cannot withdraw {} from reserves of {reserves}", .delta.unsigned_abs())]
    InsufficientReserves { reserves: Chips, delta: i64 },
    #[error("reserves of {reserves} cannot absorb {delta} more")]
    ReserveOverflow { reserves: Chips, delta: Chips },
    #[error("insert money prior to playing")]
    NoDeposit,
    #[error("insufficient reserves of {reserves} for maximum payout of {stake} at {multiplier}x")]
    InsufficientReservesForMaxPayout {
        stake: Chips,
        multiplier: Multiplier,
        reserves: Chips,
    },
    #[error("a stake of {stake} at {multiplier}x would not pay whole chips")]
    FractionalPayout {
        stake: Chips,
        multiplier: Multiplier,
    },
    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(String),
}
