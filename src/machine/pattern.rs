use crate::Reels;
use crate::SlotError;

/// A parsed pay-table key.
///
/// Keys are single-space separated tokens, either all symbol names
/// (`"Bell Bell Bell"`) or all wildcards (`"* *"`). A wildcard key of n
/// tokens stands for any n identical symbols, whichever symbol that is.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pattern {
    Exact(Reels),
    Wildcard(usize),
}

impl Pattern {
    pub const WILDCARD: &'static str = "*";

    /// number of tokens in the key
    pub fn len(&self) -> usize {
        match self {
            Pattern::Exact(reels) => reels.len(),
            Pattern::Wildcard(n) => *n,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&Reels> for Pattern {
    fn from(reels: &Reels) -> Self {
        Pattern::Exact(reels.clone())
    }
}

/// str isomorphism
impl TryFrom<&str> for Pattern {
    type Error = SlotError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| {
            SlotError::ConfigurationInvalid(format!("pay table key {:?}: {}", s, reason))
        };
        let tokens = s.split(' ').collect::<Vec<&str>>();
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(invalid("tokens must be separated by single spaces"));
        }
        let wilds = tokens.iter().filter(|t| **t == Self::WILDCARD).count();
        match wilds {
            0 => Reels::try_from(s)
                .map(Pattern::Exact)
                .map_err(|e| invalid(&e.to_string())),
            n if n == tokens.len() => Ok(Pattern::Wildcard(n)),
            _ => Err(invalid("cannot mix wildcards with symbols")),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Pattern::Exact(reels) => write!(f, "{}", reels),
            Pattern::Wildcard(n) => write!(f, "{}", vec![Self::WILDCARD; *n].join(" ")),
        }
    }
}
