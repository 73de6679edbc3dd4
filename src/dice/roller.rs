/// The only capability the dice need from the outside world: a uniform value
/// in `[0, 1)`. Kept behind a trait so tests can substitute fixed values.
pub trait RandomSource: Send + Sync {
    fn next_uniform(&self) -> f64;
}

pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn next_uniform(&self) -> f64 {
        use rand::Rng;
        // Thread-local generator, fetched per call; no shared state to guard.
        rand::rng().random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_source_stays_in_unit_interval() {
        let source = ThreadRngSource::new();

        for _ in 0..100 {
            let u = source.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
