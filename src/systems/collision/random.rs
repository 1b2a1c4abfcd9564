/// Source of uniform samples in `[0, 1)` for the corner tie-break.
///
/// Injected into the world so tests can pin which axis a corner hit bounces on.
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f32,
{
    fn next_f32(&mut self) -> f32 {
        self()
    }
}

pub const DEFAULT_SEED: u32 = 12345;

/// Seeded xorshift32 generator
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed 0 would lock the generator at 0, so it is remapped to 1.
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { 1 } else { seed } }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits keep the result strictly below 1.0.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}
