use crate::Chips;
use colored::Colorize;

/// Running totals for one console session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub plays: usize,
    pub staked: Chips,
    pub won: Chips,
}

impl Tally {
    pub fn record(&mut self, stake: Chips, winnings: Chips) {
        self.plays += 1;
        self.staked += stake;
        self.won += winnings;
    }

    /// player's net result, positive when ahead of the house
    pub fn pnl(&self) -> i128 {
        self.won as i128 - self.staked as i128
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let pnl = match self.pnl() {
            n if n > 0 => format!("+{}", n).green(),
            n if n < 0 => format!("{}", n).red(),
            n => format!("{}", n).normal(),
        };
        write!(
            f,
            "{} plays, staked {}, won {} ({})",
            self.plays, self.staked, self.won, pnl
        )
    }
}
