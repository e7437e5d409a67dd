use super::pattern::Pattern;
use crate::Chips;
use crate::Multiplier;
use crate::Reels;
use crate::SlotError;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Payout multipliers keyed by outcome pattern.
///
/// Resolution is two-tier: an exact symbol sequence takes precedence, and
/// otherwise the longest wildcard run not exceeding the biggest group of
/// identical symbols pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Multiplier>",
    into = "BTreeMap<String, Multiplier>"
)]
pub struct PayTable(BTreeMap<Pattern, Multiplier>);

impl PayTable {
    /// multiplier earned by an outcome, zero when nothing matches
    pub fn resolve(&self, reels: &Reels) -> Multiplier {
        self.0
            .get(&Pattern::from(reels))
            .copied()
            .or_else(|| {
                (1..=reels.most_common())
                    .rev()
                    .find_map(|n| self.0.get(&Pattern::Wildcard(n)).copied())
            })
            .unwrap_or(Multiplier::ZERO)
    }

    /// largest multiplier anywhere in the table, whether or not the
    /// configured reel count could ever reach it
    pub fn ceiling(&self) -> Multiplier {
        self.0.values().copied().max().unwrap_or(Multiplier::ZERO)
    }

    /// stake times multiplier, when that is a whole number of chips
    pub fn payout(stake: Chips, multiplier: Multiplier) -> Option<Chips> {
        Multiplier::from(stake)
            .checked_mul(multiplier)
            .filter(|winnings| winnings.fract().is_zero())
            .and_then(|winnings| winnings.to_u64())
    }

    /// first multiplier in the table that would pay this stake a
    /// fraction of a chip
    pub fn fractional(&self, stake: Chips) -> Option<Multiplier> {
        self.0
            .values()
            .copied()
            .find(|m| Self::payout(stake, *m).is_none())
    }

    pub fn get(&self, pattern: &Pattern) -> Option<Multiplier> {
        self.0.get(pattern).copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PayTable {
    fn default() -> Self {
        use crate::Symbol::*;
        [
            (Pattern::Wildcard(2), 1u64),
            (Pattern::Wildcard(3), 2),
            (Pattern::Exact(Reels::from(vec![Diamonds, Spades, Hearts])), 4),
            (Pattern::Exact(Reels::from(vec![Hearts, Hearts, Hearts])), 8),
            (Pattern::Exact(Reels::from(vec![Bell, Bell, Bell])), 16),
        ]
        .into_iter()
        .map(|(pattern, multiplier)| (pattern, Multiplier::from(multiplier)))
        .collect()
    }
}

/// zero-length patterns can never match and are dropped
impl FromIterator<(Pattern, Multiplier)> for PayTable {
    fn from_iter<I: IntoIterator<Item = (Pattern, Multiplier)>>(iter: I) -> Self {
        Self(iter.into_iter().filter(|(p, _)| !p.is_empty()).collect())
    }
}

impl TryFrom<BTreeMap<String, Multiplier>> for PayTable {
    type Error = SlotError;
    fn try_from(map: BTreeMap<String, Multiplier>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(key, multiplier)| match multiplier < Multiplier::ZERO {
                true => Err(SlotError::ConfigurationInvalid(format!(
                    "multiplier of {:?} must not be negative",
                    key
                ))),
                false => Ok((Pattern::try_from(key.as_str())?, multiplier.normalize())),
            })
            .collect()
    }
}

impl From<PayTable> for BTreeMap<String, Multiplier> {
    fn from(table: PayTable) -> Self {
        table
            .0
            .into_iter()
            .map(|(pattern, multiplier)| (pattern.to_string(), multiplier))
            .collect()
    }
}

impl std::fmt::Display for PayTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut rows = self.0.iter().collect::<Vec<_>>();
        rows.sort_by(|a, b| b.1.cmp(a.1));
        for (pattern, multiplier) in rows {
            writeln!(f, "{:>5}x  {}", multiplier.to_string(), pattern)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> PayTable {
        serde_json::from_str(json).unwrap()
    }
    fn reels(s: &str) -> Reels {
        Reels::try_from(s).unwrap()
    }
    fn x(n: i64) -> Multiplier {
        Multiplier::from(n)
    }

    #[test]
    fn standard_table() {
        let standard = PayTable::default();
        assert_eq!(standard.len(), 5);
        assert_eq!(standard.ceiling(), x(16));
        assert_eq!(standard.get(&Pattern::Wildcard(2)), Some(x(1)));
    }

    #[test]
    fn exact_key_takes_precedence() {
        let standard = PayTable::default();
        assert_eq!(standard.resolve(&reels("Bell Bell Bell")), x(16));
        assert_eq!(standard.resolve(&reels("Hearts Hearts Hearts")), x(8));
        assert_eq!(standard.resolve(&reels("Diamonds Spades Hearts")), x(4));
    }

    #[test]
    fn wildcards_fill_in() {
        let standard = PayTable::default();
        assert_eq!(standard.resolve(&reels("Bell Bell Hearts")), x(1));
        assert_eq!(standard.resolve(&reels("Spades Spades Spades")), x(2));
        assert_eq!(standard.resolve(&reels("Hearts Spades Diamonds")), x(0));
    }

    #[test]
    fn wildcard_search_descends() {
        let both = table(r#"{"* *": 1, "* * *": 2}"#);
        let pair = table(r#"{"* *": 1}"#);
        let none = table(r#"{"Bell Bell Bell": 16}"#);
        let three = reels("Horseshoes Horseshoes Horseshoes");
        assert_eq!(both.resolve(&three), x(2));
        assert_eq!(pair.resolve(&three), x(1));
        assert_eq!(none.resolve(&three), x(0));
    }

    #[test]
    fn wildcard_needs_no_adjacency() {
        let pair = table(r#"{"* *": 3}"#);
        assert_eq!(pair.resolve(&reels("Spades Bell Spades")), x(3));
        assert_eq!(pair.resolve(&reels("Spades Bell Hearts")), x(0));
    }

    #[test]
    fn single_wildcard_pays_anything() {
        let any = table(r#"{"*": 1, "* * * *": 9}"#);
        assert_eq!(any.resolve(&reels("Spades Bell Hearts")), x(1));
        assert_eq!(any.resolve(&reels("Spades Spades Spades Hearts")), x(1));
        assert_eq!(any.resolve(&reels("Spades Spades Spades Spades")), x(9));
    }

    #[test]
    fn exact_keys_of_other_lengths_never_match() {
        let long = table(r#"{"Bell Bell Bell Bell": 50}"#);
        assert_eq!(long.resolve(&reels("Bell Bell Bell")), x(0));
        assert_eq!(long.ceiling(), x(50));
    }

    #[test]
    fn empty_table_pays_nothing() {
        let empty = PayTable::from_iter(std::iter::empty());
        assert_eq!(empty.ceiling(), x(0));
        assert_eq!(empty.resolve(&reels("Bell Bell Bell")), x(0));
    }

    #[test]
    fn rejects_invalid_entries() {
        assert!(serde_json::from_str::<PayTable>(r#"{"Cherry Cherry": 3}"#).is_err());
        assert!(serde_json::from_str::<PayTable>(r#"{"Bell * *": 3}"#).is_err());
        assert!(serde_json::from_str::<PayTable>(r#"{"* *": -1}"#).is_err());
        assert!(serde_json::from_str::<PayTable>(r#"{"": 1}"#).is_err());
    }

    #[test]
    fn serializes_back_to_keys() {
        let json = serde_json::to_value(PayTable::default()).unwrap();
        assert_eq!(json["Bell Bell Bell"], "16");
        assert_eq!(json["* *"], "1");
        let table = serde_json::from_value::<PayTable>(json).unwrap();
        assert_eq!(table, PayTable::default());
    }

    #[test]
    fn fractional_multipliers() {
        let half = table(r#"{"* *": 0.5, "Bell Bell Bell": 1.25}"#);
        assert_eq!(half.resolve(&reels("Spades Spades Hearts")), Multiplier::new(5, 1));
        assert_eq!(half.resolve(&reels("Bell Bell Bell")), Multiplier::new(125, 2));
        assert_eq!(half.ceiling(), Multiplier::new(125, 2));
        assert_eq!(PayTable::payout(40, Multiplier::new(125, 2)), Some(50));
        assert_eq!(PayTable::payout(25, Multiplier::new(5, 1)), None);
        assert_eq!(PayTable::payout(25, x(0)), Some(0));
        assert_eq!(half.fractional(40), None);
        assert_eq!(half.fractional(25), Some(Multiplier::new(5, 1)));
    }

    #[test]
    fn decimal_multipliers_are_exact() {
        let tenth = table(r#"{"* *": 0.1}"#);
        assert_eq!(tenth.ceiling(), Multiplier::new(1, 1));
        assert_eq!(PayTable::payout(30, tenth.ceiling()), Some(3));
    }
}
