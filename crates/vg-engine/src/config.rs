//! Configuration for a game session.

/// Configuration for creating or resuming a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Key the state is stored under. One record per key, overwritten in
    /// place.
    pub session_key: String,
    /// Player name used when a fresh character is created.
    pub player_name: String,
    /// Starting region for a fresh game.
    pub region: String,
    /// Difficulty label for a fresh game.
    pub difficulty: String,
    /// RNG seed for reproducible dice, encounters, and trust deltas.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_key: "partita".to_string(),
            player_name: "Sopravvissuto".to_string(),
            region: "Italia".to_string(),
            difficulty: "normale".to_string(),
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Set the session key.
    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    /// Set the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Set the starting region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the difficulty label.
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.session_key, "partita");
        assert_eq!(cfg.player_name, "Sopravvissuto");
        assert_eq!(cfg.region, "Italia");
        assert_eq!(cfg.difficulty, "normale");
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_player_name("Rick")
            .with_region("Inghilterra")
            .with_difficulty("difficile")
            .with_seed(7)
            .with_session_key("slot-1");
        assert_eq!(cfg.player_name, "Rick");
        assert_eq!(cfg.region, "Inghilterra");
        assert_eq!(cfg.difficulty, "difficile");
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.session_key, "slot-1");
    }
}
