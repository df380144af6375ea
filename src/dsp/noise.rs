//! White noise source and seed mixing.

/*
Xorshift Noise
==============

Snares, hats and cymbals all start from white noise. We use a 32-bit
xorshift generator: three shift-and-xor steps over the state.

    s ^= s << 13
    s ^= s >> 17
    s ^= s << 5

Each step is linear over GF(2), so the whole update is a 32x32 bit matrix.
With exactly these shift amounts and directions that matrix has order
2^32 - 1: every non-zero state walks through every other non-zero state
before repeating, and zero is never reached. Zero is a fixed point, so the
state must start non-zero. Voices get an odd seed, which guarantees that.

Output is the new state scaled into [0, 1), or stretched to [-1, 1).


Seeding
-------

Voices must not share noise, or two snares hit together would sum into one
louder snare. Each spawn mixes an engine seed with a spawn counter through
a 64-bit avalanche finalizer (the MurmurHash3 `fmix64` constants), keeps
the low 32 bits and sets the lowest bit. Output depends only on the engine
seed and the order of spawns.
*/

const INV_2_32: f64 = 1.0 / 4_294_967_296.0;
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseGenerator {
    state: u32,
}

impl NoiseGenerator {
    /// Create a generator. A zero seed is replaced by 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Derive the generator for the `index`-th spawn of an engine.
    pub fn for_spawn(engine_seed: u64, index: u64) -> Self {
        let mixed = avalanche(engine_seed ^ index.wrapping_mul(GOLDEN_GAMMA));
        Self::new((mixed as u32) | 1)
    }

    #[inline]
    pub fn step(&mut self) -> u32 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.state = s;
        s
    }

    /// Next sample in `[0, 1)`.
    #[inline]
    pub fn next01(&mut self) -> f64 {
        self.step() as f64 * INV_2_32
    }

    /// Next sample in `[-1, 1)`.
    #[inline]
    pub fn next11(&mut self) -> f64 {
        2.0 * self.next01() - 1.0
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 64-bit avalanche finalizer.
#[inline]
pub fn avalanche(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    x ^= x >> 33;
    x
}
