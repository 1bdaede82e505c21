use crate::core::Prompter;
use crate::utils::error::Result;
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Interactive prompts on the controlling terminal. dialoguer blocks, so every
/// question runs on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    async fn input(&self, message: &str) -> Result<String> {
        let message = message.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()
        })
        .await??;
        Ok(answer)
    }

    async fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        let message = message.to_string();
        let items = items.to_vec();
        let index = tokio::task::spawn_blocking(move || {
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt(message)
                .items(items.as_slice())
                .default(0)
                .interact()
        })
        .await??;
        Ok(index)
    }

    async fn reject(&self, message: &str) -> Result<()> {
        eprintln!("{} {}", ">>".red().bold(), message.red());
        Ok(())
    }
}
