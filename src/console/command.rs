use crate::Chips;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Bet(Chips),
    Quit,
}

/// str isomorphism
impl TryFrom<&str> for Command {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "" | "q" | "Q" | "quit" => Ok(Command::Quit),
            bet => bet
                .parse::<Chips>()
                .map(Command::Bet)
                .map_err(|_| String::from("Enter a positive integer, or q to quit")),
        }
    }
}
