use super::symbol::Symbol;
use std::collections::HashMap;

/// An ordered spin outcome, one symbol per reel.
///
/// Rendered as the symbols' display names joined by single spaces, which is
/// also the exact-match key format of a pay table.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reels(Vec<Symbol>);

impl Reels {
    /// n reels all resting on the default symbol
    pub fn new(n: usize) -> Self {
        Self(vec![Symbol::default(); n])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.0.iter()
    }

    /// size of the biggest group of identical symbols,
    /// regardless of where they sit on the reels
    pub fn most_common(&self) -> usize {
        self.0
            .iter()
            .fold(HashMap::<Symbol, usize>::new(), |mut counts, symbol| {
                *counts.entry(*symbol).or_default() += 1;
                counts
            })
            .into_values()
            .max()
            .unwrap_or(0)
    }
}

impl From<Vec<Symbol>> for Reels {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}
impl From<Reels> for Vec<Symbol> {
    fn from(reels: Reels) -> Self {
        reels.0
    }
}

impl FromIterator<Symbol> for Reels {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Reels {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// str isomorphism
impl TryFrom<&str> for Reels {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split(' ').map(Symbol::try_from).collect()
    }
}

impl std::fmt::Display for Reels {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
