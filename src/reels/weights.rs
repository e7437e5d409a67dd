use super::symbol::Symbol;
use crate::SlotError;
use crate::Weight;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Relative likelihood of each symbol landing on a reel.
///
/// Weights are positive and need not sum to anything in particular. A symbol
/// missing from the mapping is never drawn, but at least one symbol must be
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Symbol, Weight>",
    into = "BTreeMap<Symbol, Weight>"
)]
pub struct Weights(BTreeMap<Symbol, Weight>);

impl Weights {
    /// weight of a symbol, zero when absent
    pub fn weight(&self, symbol: &Symbol) -> Weight {
        self.0.get(symbol).copied().unwrap_or(0)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Weight)> + '_ {
        self.0.iter()
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self(BTreeMap::from([
            (Symbol::Horseshoes, 10),
            (Symbol::Diamonds, 5),
            (Symbol::Spades, 5),
            (Symbol::Hearts, 3),
            (Symbol::Bell, 1),
        ]))
    }
}

impl TryFrom<BTreeMap<Symbol, Weight>> for Weights {
    type Error = SlotError;
    fn try_from(map: BTreeMap<Symbol, Weight>) -> Result<Self, Self::Error> {
        if map.is_empty() {
            return Err(SlotError::ConfigurationInvalid(
                "weights must name at least one symbol".into(),
            ));
        }
        if let Some((symbol, _)) = map.iter().find(|(_, w)| **w == 0) {
            return Err(SlotError::ConfigurationInvalid(format!(
                "weight of {} must be positive",
                symbol
            )));
        }
        if map.values().try_fold(0 as Weight, |sum, w| sum.checked_add(*w)).is_none() {
            return Err(SlotError::ConfigurationInvalid(format!(
                "weights must sum to at most {}",
                Weight::MAX
            )));
        }
        Ok(Self(map))
    }
}

impl<const N: usize> TryFrom<[(Symbol, Weight); N]> for Weights {
    type Error = SlotError;
    fn try_from(pairs: [(Symbol, Weight); N]) -> Result<Self, Self::Error> {
        Self::try_from(BTreeMap::from(pairs))
    }
}

impl From<Weights> for BTreeMap<Symbol, Weight> {
    fn from(weights: Weights) -> Self {
        weights.0
    }
}
