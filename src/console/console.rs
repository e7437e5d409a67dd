use super::command::Command;
use super::tally::Tally;
use crate::Chips;
use crate::Reels;
use crate::SlotError;
use crate::SlotMachine;
use crate::Spinner;
use crate::Symbol;
use crate::Weighted;
use colored::ColoredString;
use colored::Colorize;
use dialoguer::Input;

/// Interactive front end: prompts for a bet, plays it, shows the reels.
pub struct Console<S = Weighted> {
    machine: SlotMachine<S>,
    tally: Tally,
}

impl<S> From<SlotMachine<S>> for Console<S> {
    fn from(machine: SlotMachine<S>) -> Self {
        Self {
            machine,
            tally: Tally::default(),
        }
    }
}

impl<S> Console<S>
where
    S: Spinner,
{
    pub fn machine(&self) -> &SlotMachine<S> {
        &self.machine
    }
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// prompt and play until the player quits
    pub fn run(mut self) -> anyhow::Result<Tally> {
        println!("{}", self.machine.configuration().pay_table);
        loop {
            match self.prompt()? {
                Command::Quit => break,
                Command::Bet(bet) => self.round(bet),
            }
        }
        println!("{}", self.tally);
        println!("reserves {}", self.machine.reserves());
        Ok(self.tally)
    }

    /// insert the bet and play it. a refused play hands the stake straight
    /// back, so the machine is idle again whatever happens
    pub fn wager(&mut self, bet: Chips) -> Result<Chips, SlotError> {
        self.machine.insert_money(bet)?;
        match self.machine.play() {
            Ok(winnings) => {
                self.tally.record(bet, winnings);
                Ok(winnings)
            }
            Err(e) => {
                let refund = self.machine.return_money();
                log::warn!("refunded {} after refused play: {}", refund, e);
                Err(e)
            }
        }
    }

    fn round(&mut self, bet: Chips) {
        match self.wager(bet) {
            Ok(winnings) => println!(
                "{}  {}",
                Self::paint(&self.machine.reel_state()),
                match winnings {
                    0 => "no win".dimmed(),
                    w => format!("+{}", w).green().bold(),
                }
            ),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    fn prompt(&self) -> anyhow::Result<Command> {
        let input = Input::<String>::new()
            .with_prompt(format!(
                "Bet [min {}]",
                self.machine.configuration().minimum_play
            ))
            .allow_empty(true)
            .validate_with(|i: &String| -> Result<(), String> {
                Command::try_from(i.as_str()).map(|_| ())
            })
            .report(false)
            .interact_text()?;
        Command::try_from(input.as_str()).map_err(|e| anyhow::anyhow!(e))
    }

    fn paint(reels: &Reels) -> String {
        reels
            .iter()
            .map(|symbol| Self::color(symbol).to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }

    fn color(symbol: &Symbol) -> ColoredString {
        match symbol {
            Symbol::Horseshoes => symbol.name().cyan(),
            Symbol::Diamonds => symbol.name().red(),
            Symbol::Spades => symbol.name().white(),
            Symbol::Hearts => symbol.name().bright_red(),
            Symbol::Bell => symbol.name().yellow().bold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Configuration;
    use crate::Rigged;

    fn console(outcome: &str, reserves: i64) -> Console<Rigged> {
        let script = Rigged::from(Reels::try_from(outcome).unwrap());
        let mut machine = SlotMachine::with_spinner(Configuration::default(), script).unwrap();
        machine.adjust_reserves(reserves).unwrap();
        Console::from(machine)
    }

    #[test]
    fn wager_settles_and_tallies() {
        let mut console = console("Bell Bell Bell", 1000);
        assert_eq!(console.wager(25), Ok(400));
        assert_eq!(console.tally().plays, 1);
        assert_eq!(console.tally().won, 400);
        assert_eq!(console.machine().reserves(), 625);
        assert_eq!(console.machine().deposited(), 0);
    }

    #[test]
    fn refused_insert_changes_nothing() {
        let mut console = console("Bell Bell Bell", 1000);
        assert!(matches!(console.wager(10), Err(SlotError::BelowMinimum { .. })));
        assert_eq!(console.tally(), Tally::default());
        assert_eq!(console.machine().reserves(), 1000);
    }

    #[test]
    fn refused_play_returns_stake() {
        let mut console = console("Bell Bell Bell", 100);
        assert!(matches!(
            console.wager(25),
            Err(SlotError::InsufficientReservesForMaxPayout { .. })
        ));
        assert_eq!(console.machine().deposited(), 0);
        assert_eq!(console.machine().reserves(), 100);
        assert_eq!(console.tally(), Tally::default());
        assert_eq!(
            console.wager(6),
            Err(SlotError::BelowMinimum {
                amount: 6,
                minimum: 25
            })
        );
    }

    #[test]
    fn paint_keeps_symbol_order() {
        colored::control::set_override(false);
        let reels = Reels::try_from("Hearts Bell Spades").unwrap();
        assert_eq!(Console::<Rigged>::paint(&reels), "Hearts Bell Spades");
    }
}
