// sampler.rs
// Source of randomness for particle creation and probabilistic state
// transitions. The simulation draws through this trait so tests can swap in
// a deterministic source.

pub trait Sampler {
    /// Uniform draw in [0, 1).
    fn unit(&mut self) -> f32;

    /// Uniform draw in [lo, hi).
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit()
    }

    /// Bernoulli trial with success probability `p`.
    fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }
}

impl Sampler for fastrand::Rng {
    fn unit(&mut self) -> f32 {
        self.f32()
    }
}

#[cfg(test)]
pub(crate) struct FixedSampler {
    values: std::collections::VecDeque<f32>,
    fallback: f32,
}

#[cfg(test)]
impl FixedSampler {
    /// Every draw returns `value`.
    pub fn constant(value: f32) -> Self {
        Self {
            values: std::collections::VecDeque::new(),
            fallback: value,
        }
    }

    /// Draws consume `values` in order, then return `fallback`.
    pub fn sequence(values: Vec<f32>, fallback: f32) -> Self {
        Self {
            values: values.into(),
            fallback,
        }
    }
}

#[cfg(test)]
impl Sampler for FixedSampler {
    fn unit(&mut self) -> f32 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}
