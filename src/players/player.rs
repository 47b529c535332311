/// Where the player's answers come from.
pub trait Player {
    /// The next line the player typed, or None once input is closed.
    fn answer(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}
