use super::config::Configuration;
use super::paytable::PayTable;
use crate::Chips;
use crate::Multiplier;
use crate::Reels;
use crate::SlotError;
use crate::Spinner;
use crate::Weighted;
use crate::Wheel;

/// A single-player slot machine.
///
/// Holds at most one stake at a time, settles every play against a house
/// reserve, and refuses any play the reserve could not cover in the worst
/// case. Every precondition is checked before any state is written, so a
/// refused operation leaves the machine exactly as it was.
#[derive(Debug)]
pub struct SlotMachine<S = Weighted> {
    config: Configuration,
    wheel: Wheel,
    spinner: S,
    deposited: Chips,
    reserves: Chips,
    reels: Reels,
}

impl SlotMachine<Weighted> {
    pub fn new(config: Configuration) -> Result<Self, SlotError> {
        Self::with_spinner(config, Weighted::default())
    }
}

impl TryFrom<Configuration> for SlotMachine<Weighted> {
    type Error = SlotError;
    fn try_from(config: Configuration) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl<S> SlotMachine<S>
where
    S: Spinner,
{
    pub fn with_spinner(config: Configuration, spinner: S) -> Result<Self, SlotError> {
        config.validate()?;
        let wheel = Wheel::try_from(&config.weights)?;
        let reels = Reels::new(config.reels);
        Ok(Self {
            config,
            wheel,
            spinner,
            deposited: 0,
            reserves: 0,
            reels,
        })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }
    pub fn spinner_mut(&mut self) -> &mut S {
        &mut self.spinner
    }
    pub fn deposited(&self) -> Chips {
        self.deposited
    }
    pub fn reserves(&self) -> Chips {
        self.reserves
    }
    /// outcome of the last successful play
    pub fn reel_state(&self) -> Reels {
        self.reels.clone()
    }

    pub fn insert_money(&mut self, amount: Chips) -> Result<(), SlotError> {
        if self.deposited > 0 {
            return Err(SlotError::AlreadyDeposited);
        }
        if amount < self.config.minimum_play {
            return Err(SlotError::BelowMinimum {
                amount,
                minimum: self.config.minimum_play,
            });
        }
        self.deposited = amount;
        Ok(())
    }

    pub fn return_money(&mut self) -> Chips {
        std::mem::take(&mut self.deposited)
    }

    /// positive deltas fund the house, negative deltas withdraw from it
    pub fn adjust_reserves(&mut self, delta: i64) -> Result<(), SlotError> {
        let reserves = self.reserves;
        self.reserves = reserves
            .checked_add_signed(delta)
            .ok_or_else(|| match delta.is_negative() {
                true => SlotError::InsufficientReserves { reserves, delta },
                false => SlotError::ReserveOverflow {
                    reserves,
                    delta: delta.unsigned_abs(),
                },
            })?;
        log::info!("reserves adjusted by {} to {}", delta, self.reserves);
        Ok(())
    }

    /// spin the reels for the deposited stake and settle the result,
    /// returning the winnings paid out to the player
    pub fn play(&mut self) -> Result<Chips, SlotError> {
        let stake = self.deposited;
        let reserves = self.reserves;
        let table = &self.config.pay_table;
        if stake == 0 {
            return Err(SlotError::NoDeposit);
        }
        let multiplier = table.ceiling();
        match Multiplier::from(stake).checked_mul(multiplier) {
            Some(exposure) if exposure <= Multiplier::from(reserves) => {}
            _ => {
                return Err(SlotError::InsufficientReservesForMaxPayout {
                    stake,
                    multiplier,
                    reserves,
                });
            }
        }
        if let Some(multiplier) = table.fractional(stake) {
            return Err(SlotError::FractionalPayout { stake, multiplier });
        }
        let reels = self.spinner.spin(&self.wheel, self.config.reels);
        let multiplier = table.resolve(&reels);
        // whole and bounded by the exposure checked above
        let winnings = PayTable::payout(stake, multiplier)
            .ok_or(SlotError::FractionalPayout { stake, multiplier })?;
        let settled = (reserves - winnings)
            .checked_add(stake)
            .ok_or(SlotError::ReserveOverflow {
                reserves: reserves - winnings,
                delta: stake,
            })?;
        log::debug!("spun {} on {} at {}x for {}", reels, stake, multiplier, winnings);
        self.reels = reels;
        self.reserves = settled;
        self.deposited = 0;
        Ok(winnings)
    }
}
