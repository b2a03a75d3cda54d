use uuid::Uuid;

/// Fresh project identifier
pub fn new_project_id() -> String {
    Uuid::new_v4().to_string()
}

/// Sequential ID generator for blocks and menu items within an editing session
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Per-session random prefix
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new() -> Self {
        let mut seed = Uuid::new_v4().simple().to_string();
        seed.truncate(8);
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential ID, e.g. `block-1a2b3c4d-7`
    pub fn new_id(&mut self, prefix: &str) -> String {
        self.count += 1;
        format!("{}-{}-{}", prefix, self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
