use serde::Deserialize;
use serde::Serialize;

/// A face that can land on a reel.
///
/// Variant names double as display names, so the serialized form, the
/// `Display` form and the tokens used in pay-table keys all agree.
#[derive(
    Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Symbol {
    Horseshoes = 0,
    Diamonds = 1,
    Spades = 2,
    Hearts = 3,
    #[default]
    Bell = 4,
}

impl Symbol {
    pub const ALL: [Self; 5] = [
        Symbol::Horseshoes,
        Symbol::Diamonds,
        Symbol::Spades,
        Symbol::Hearts,
        Symbol::Bell,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Symbol::Horseshoes => "Horseshoes",
            Symbol::Diamonds => "Diamonds",
            Symbol::Spades => "Spades",
            Symbol::Hearts => "Hearts",
            Symbol::Bell => "Bell",
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Symbol {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown symbol: {:?}", s))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
