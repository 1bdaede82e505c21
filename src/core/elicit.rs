use crate::core::Prompter;
use crate::domain::model::Choice;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_positive_amount, validate_required_text};

/// Asks until a non-blank answer arrives. Returns it trimmed.
pub async fn ask_text<P: Prompter>(prompter: &P, message: &str, empty_message: &str) -> Result<String> {
    loop {
        let answer = prompter.input(message).await?;
        match validate_required_text(&answer, empty_message) {
            Ok(text) => return Ok(text),
            Err(AppError::ValidationError { message }) => {
                tracing::debug!("Rejected answer for '{}'", message);
                prompter.reject(&message).await?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Asks until a strictly positive number arrives.
pub async fn ask_positive_amount<P: Prompter>(
    prompter: &P,
    message: &str,
    invalid_message: &str,
) -> Result<f64> {
    loop {
        let answer = prompter.input(message).await?;
        match validate_positive_amount(&answer, invalid_message) {
            Ok(amount) => return Ok(amount),
            Err(AppError::ValidationError { message }) => prompter.reject(&message).await?,
            Err(e) => return Err(e),
        }
    }
}

/// Offers exactly `choices` and returns the value behind the picked label.
pub async fn choose<P: Prompter, T: Clone>(prompter: &P, message: &str, choices: &[Choice<T>]) -> Result<T> {
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
    let index = prompter.select(message, &labels).await?;

    choices
        .get(index)
        .map(|c| c.value.clone())
        .ok_or(AppError::SelectionOutOfRange {
            index,
            len: choices.len(),
        })
}
