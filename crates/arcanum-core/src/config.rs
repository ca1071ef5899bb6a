//! Session configuration.

/// Configuration for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_seed() {
        let cfg = SessionConfig::default();
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn builder_sets_seed() {
        let cfg = SessionConfig::default().with_seed(123);
        assert_eq!(cfg.seed, Some(123));
    }
}
