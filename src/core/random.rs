use rand::Rng;
use rand::seq::index;

/// Source of the random draws consumed by the simulator and goal generator.
///
/// Every `rand::Rng` is a `RandomSource`; tests can supply scripted sources
/// to pin individual draws.
pub trait RandomSource {
    /// Real number in `[lo, hi]`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// Real number in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Integer in `[lo, hi]`.
    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32;

    /// `amount` distinct values from `0..len`, in draw order.
    fn sample_distinct(&mut self, len: u32, amount: u32) -> Vec<u32>;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.gen_range(lo..=hi)
    }

    fn unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }

    fn int_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.gen_range(lo..=hi)
    }

    fn sample_distinct(&mut self, len: u32, amount: u32) -> Vec<u32> {
        let amount = amount.min(len);
        index::sample(self, len as usize, amount as usize)
            .into_iter()
            .map(|i| i as u32)
            .collect()
    }
}

/// Mixes a run's base seed with a goal's position so each goal gets its own
/// reproducible stream.
pub fn derive_seed(base_seed: u64, bucket_index: u32, goal_index: u32) -> u64 {
    let mixed = base_seed ^ ((bucket_index as u64) << 32) ^ goal_index as u64;
    splitmix64(mixed)
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
