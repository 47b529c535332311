use super::*;
use dialoguer::Input;

/// Interactive terminal prompt.
pub struct Human;

impl Player for Human {
    fn answer(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map(Some)
            .map_err(anyhow::Error::from)
    }
}

impl std::fmt::Debug for Human {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}
