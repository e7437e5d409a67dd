use super::symbol::Symbol;
use super::weights::Weights;
use crate::SlotError;
use crate::Weight;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Weighted distribution over the drawable symbols.
///
/// Built once from `Weights` so each draw is a single sample rather than a
/// fresh scan of the weight mapping.
#[derive(Debug, Clone)]
pub struct Wheel {
    faces: Vec<Symbol>,
    index: WeightedIndex<Weight>,
}

impl TryFrom<&Weights> for Wheel {
    type Error = SlotError;
    fn try_from(weights: &Weights) -> Result<Self, Self::Error> {
        let faces = weights.iter().map(|(s, _)| *s).collect::<Vec<Symbol>>();
        let index = WeightedIndex::new(weights.iter().map(|(_, w)| *w))
            .map_err(|e| SlotError::ConfigurationInvalid(format!("weights: {}", e)))?;
        Ok(Self { faces, index })
    }
}

impl Distribution<Symbol> for Wheel {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        self.faces[self.index.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn only_weighted_faces_are_drawn() {
        let weights = Weights::try_from([(Symbol::Spades, 1), (Symbol::Hearts, 1)]).unwrap();
        let wheel = Wheel::try_from(&weights).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(wheel.faces, vec![Symbol::Spades, Symbol::Hearts]);
        assert!(
            (0..1000)
                .map(|_| wheel.sample(rng))
                .all(|s| s == Symbol::Spades || s == Symbol::Hearts)
        );
    }

    #[test]
    fn single_face_always_lands() {
        let weights = Weights::try_from([(Symbol::Bell, 7)]).unwrap();
        let wheel = Wheel::try_from(&weights).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(1);
        assert!((0..100).all(|_| wheel.sample(rng) == Symbol::Bell));
    }
}
