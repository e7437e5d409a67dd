use super::reels::Reels;
use super::symbol::Symbol;
use super::wheel::Wheel;
use rand::Rng;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::rngs::SmallRng;
use rand::rngs::ThreadRng;

/// Source of reel outcomes.
///
/// The machine never touches an RNG directly; it asks its spinner for one
/// symbol per reel. Swapping the spinner is how tests pin outcomes.
pub trait Spinner {
    /// draw the symbol for a single reel
    fn draw(&mut self, wheel: &Wheel) -> Symbol;

    /// draw a full outcome, reels in order
    fn spin(&mut self, wheel: &Wheel, reels: usize) -> Reels {
        (0..reels).map(|_| self.draw(wheel)).collect()
    }
}

/// Draws independently from the wheel's weighted distribution.
#[derive(Debug, Clone)]
pub struct Weighted<R = ThreadRng>(R);

impl Default for Weighted<ThreadRng> {
    fn default() -> Self {
        Self(rand::rng())
    }
}

impl Weighted<SmallRng> {
    /// reproducible spinner for simulations and replays
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> From<R> for Weighted<R> {
    fn from(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> Spinner for Weighted<R> {
    fn draw(&mut self, wheel: &Wheel) -> Symbol {
        wheel.sample(&mut self.0)
    }
}

/// Replays a fixed script of symbols, wrapping around when exhausted.
///
/// Weights are ignored entirely. A script as long as the reel count yields the
/// same outcome on every spin.
#[derive(Debug, Clone, Default)]
pub struct Rigged {
    script: Vec<Symbol>,
    cursor: usize,
}

impl Rigged {
    /// replace the script and start again from its first symbol
    pub fn load(&mut self, script: impl Into<Vec<Symbol>>) {
        self.script = script.into();
        self.cursor = 0;
    }
}

impl From<Vec<Symbol>> for Rigged {
    fn from(script: Vec<Symbol>) -> Self {
        Self { script, cursor: 0 }
    }
}
impl From<Reels> for Rigged {
    fn from(reels: Reels) -> Self {
        Self::from(Vec::from(reels))
    }
}

impl Spinner for Rigged {
    fn draw(&mut self, _: &Wheel) -> Symbol {
        match self.script.len() {
            0 => Symbol::default(),
            n => {
                let symbol = self.script[self.cursor % n];
                self.cursor = self.cursor.wrapping_add(1);
                symbol
            }
        }
    }
}
