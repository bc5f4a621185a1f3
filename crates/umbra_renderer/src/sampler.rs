//! Sub-pixel sample patterns for antialiasing.
//!
//! Every sampler precomputes a fixed number of sample sets at construction
//! and never mutates afterwards. The bundle for a pixel is a pure function
//! of the pixel's row-major index, so a sequential render that walks
//! [`Bundles`] and a parallel render that calls [`Sampler::bundle`] per
//! pixel see exactly the same samples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use umbra_core::SamplerKind;
use umbra_math::Point2;

/// Number of sets precomputed by the random sampling patterns.
pub const NUM_SETS: usize = 83;

const ONE_MINUS_EPSILON: f64 = 1.0 - f64::EPSILON;

/// Precomputed sample sets shared by every sampler.
#[derive(Debug, Clone)]
pub struct SampleSets {
    bundle_size: usize,
    sets: Vec<Vec<Point2>>,
}

impl SampleSets {
    /// Wrap precomputed sets. All sets must have the same length.
    ///
    /// No sets, or empty sets, fall back to a single centered sample.
    pub fn new(sets: Vec<Vec<Point2>>) -> Self {
        let sets: Vec<Vec<Point2>> = sets.into_iter().filter(|set| !set.is_empty()).collect();
        if sets.is_empty() {
            return Self {
                bundle_size: 1,
                sets: vec![vec![Point2::splat(0.5)]],
            };
        }

        let bundle_size = sets[0].len();
        debug_assert!(sets.iter().all(|set| set.len() == bundle_size));
        Self { bundle_size, sets }
    }

    pub fn bundle_size(&self) -> usize {
        self.bundle_size
    }

    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    /// Bundle for the pixel with the given row-major index.
    pub fn bundle(&self, pixel: usize) -> &[Point2] {
        &self.sets[pixel % self.sets.len()]
    }
}

/// Trait for sample patterns.
pub trait Sampler: Send + Sync {
    /// The precomputed sets backing this sampler.
    fn sample_sets(&self) -> &SampleSets;

    /// Samples per pixel. Always at least one.
    fn bundle_size(&self) -> usize {
        self.sample_sets().bundle_size()
    }

    /// Offsets in `[0, 1) x [0, 1)` for the pixel with the given row-major index.
    fn bundle(&self, pixel: usize) -> &[Point2] {
        self.sample_sets().bundle(pixel)
    }
}

impl<'s> dyn Sampler + 's {
    /// Bundles for pixels 0, 1, 2, ... in row-major order.
    pub fn bundles(&self) -> Bundles<'_> {
        Bundles::new(self)
    }
}

/// Endless stream of bundles in row-major pixel order.
pub struct Bundles<'a> {
    sampler: &'a dyn Sampler,
    next: usize,
}

impl<'a> Bundles<'a> {
    pub fn new(sampler: &'a dyn Sampler) -> Self {
        Self { sampler, next: 0 }
    }
}

impl<'a> Iterator for Bundles<'a> {
    type Item = &'a [Point2];

    fn next(&mut self) -> Option<Self::Item> {
        let bundle = self.sampler.bundle(self.next);
        self.next += 1;
        Some(bundle)
    }
}

/// Create a sampler of the given kind.
///
/// Grid-based kinds round `samples` down to a perfect square. Every kind
/// takes at least one sample.
pub fn create_sampler(kind: SamplerKind, samples: u32, seed: u64) -> Box<dyn Sampler> {
    let samples = samples as usize;
    match kind {
        SamplerKind::Regular => Box::new(RegularSampler::new(samples)),
        SamplerKind::Jittered => Box::new(JitteredSampler::new(samples, seed)),
        SamplerKind::PureRandom => Box::new(PureRandomSampler::new(samples, seed)),
        SamplerKind::Hammersley => Box::new(HammersleySampler::new(samples)),
    }
}

fn grid_size(samples: usize) -> usize {
    ((samples as f64).sqrt() as usize).max(1)
}

/// Centers of a k x k grid. One set; every pixel gets the same pattern.
pub struct RegularSampler {
    sets: SampleSets,
}

impl RegularSampler {
    pub fn new(samples: usize) -> Self {
        let n = grid_size(samples);
        let set = (0..n)
            .flat_map(|p| {
                (0..n).map(move |q| {
                    Point2::new((q as f64 + 0.5) / n as f64, (p as f64 + 0.5) / n as f64)
                })
            })
            .collect();
        Self {
            sets: SampleSets::new(vec![set]),
        }
    }
}

impl Sampler for RegularSampler {
    fn sample_sets(&self) -> &SampleSets {
        &self.sets
    }
}

/// One uniformly random sample inside each cell of a k x k grid.
pub struct JitteredSampler {
    sets: SampleSets,
}

impl JitteredSampler {
    pub fn new(samples: usize, seed: u64) -> Self {
        let n = grid_size(samples);
        let mut rng = StdRng::seed_from_u64(seed);
        let sets = (0..NUM_SETS)
            .map(|_| {
                let mut set = Vec::with_capacity(n * n);
                for p in 0..n {
                    for q in 0..n {
                        let x = (q as f64 + rng.gen::<f64>()) / n as f64;
                        let y = (p as f64 + rng.gen::<f64>()) / n as f64;
                        set.push(Point2::new(x.min(ONE_MINUS_EPSILON), y.min(ONE_MINUS_EPSILON)));
                    }
                }
                set
            })
            .collect();
        Self {
            sets: SampleSets::new(sets),
        }
    }
}

impl Sampler for JitteredSampler {
    fn sample_sets(&self) -> &SampleSets {
        &self.sets
    }
}

/// Uniform random samples with no stratification.
pub struct PureRandomSampler {
    sets: SampleSets,
}

impl PureRandomSampler {
    pub fn new(samples: usize, seed: u64) -> Self {
        let samples = samples.max(1);
        let mut rng = StdRng::seed_from_u64(seed);
        let sets = (0..NUM_SETS)
            .map(|_| {
                (0..samples)
                    .map(|_| Point2::new(rng.gen::<f64>(), rng.gen::<f64>()))
                    .collect()
            })
            .collect();
        Self {
            sets: SampleSets::new(sets),
        }
    }
}

impl Sampler for PureRandomSampler {
    fn sample_sets(&self) -> &SampleSets {
        &self.sets
    }
}

/// Hammersley point set: `(i / n, phi2(i))`. One set.
pub struct HammersleySampler {
    sets: SampleSets,
}

impl HammersleySampler {
    pub fn new(samples: usize) -> Self {
        let samples = samples.max(1);
        let set = (0..samples)
            .map(|i| Point2::new(i as f64 / samples as f64, radical_inverse_base2(i)))
            .collect();
        Self {
            sets: SampleSets::new(vec![set]),
        }
    }
}

impl Sampler for HammersleySampler {
    fn sample_sets(&self) -> &SampleSets {
        &self.sets
    }
}

/// Van der Corput radical inverse in base 2.
fn radical_inverse_base2(mut j: usize) -> f64 {
    let mut x = 0.0;
    let mut f = 0.5;
    while j > 0 {
        x += f * (j & 1) as f64;
        j >>= 1;
        f *= 0.5;
    }
    x
}
