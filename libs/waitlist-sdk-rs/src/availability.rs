use async_trait::async_trait;
use rand::Rng;

/// Answers whether an assistant name can still be claimed.
#[async_trait]
pub trait NameAvailability: Send + Sync {
    async fn is_available(&self, name: &str) -> bool;
}

/// Placeholder check with no backing registry: a name is reported available
/// with a fixed probability.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAvailability {
    probability: f64,
}

impl SimulatedAvailability {
    pub const DEFAULT_PROBABILITY: f64 = 0.9;

    /// `probability` is clamped to `0.0..=1.0`.
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for SimulatedAvailability {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROBABILITY)
    }
}

#[async_trait]
impl NameAvailability for SimulatedAvailability {
    async fn is_available(&self, name: &str) -> bool {
        let available = rand::thread_rng().gen_bool(self.probability);
        tracing::debug!(name, available, "Simulated name availability check");
        available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_is_clamped() {
        assert_eq!(SimulatedAvailability::new(1.5).probability(), 1.0);
        assert_eq!(SimulatedAvailability::new(-0.2).probability(), 0.0);
        assert_eq!(SimulatedAvailability::new(f64::NAN).probability(), 0.0);
        assert_eq!(SimulatedAvailability::default().probability(), 0.9);
    }

    #[tokio::test]
    async fn certain_probabilities_are_deterministic() {
        let always = SimulatedAvailability::new(1.0);
        let never = SimulatedAvailability::new(0.0);

        for _ in 0..20 {
            assert!(always.is_available("Ada").await);
            assert!(!never.is_available("Ada").await);
        }
    }
}
