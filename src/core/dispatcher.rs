use crate::core::actions::{handler_for, Report};
use crate::core::{Prompter, Store};
use crate::domain::model::Action;
use crate::utils::error::{AppError, Result};
use crate::utils::render;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Top-level menu loop. Owns the store connection and the prompt for the
/// lifetime of the session.
pub struct Dispatcher<S: Store, P: Prompter> {
    store: S,
    prompter: P,
}

impl<S, P> Dispatcher<S, P>
where
    S: Store + 'static,
    P: Prompter + 'static,
{
    pub fn new(store: S, prompter: P) -> Self {
        Self { store, prompter }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Runs until the operator picks `Quit`. Only a failure of the menu
    /// prompt itself ends the loop early.
    pub async fn run(&self) -> Result<()> {
        loop {
            if self.step().await? == LoopControl::Quit {
                return Ok(());
            }
        }
    }

    /// One iteration: select, run exactly one handler, report.
    pub async fn step(&self) -> Result<LoopControl> {
        let action = self.select_action().await?;

        if action == Action::Quit {
            println!("Goodbye!");
            return Ok(LoopControl::Quit);
        }

        let outcome = self.perform(action).await;
        self.report(action, outcome);
        Ok(LoopControl::Continue)
    }

    /// Runs the handler for `action` and hands back its outcome unprinted.
    pub async fn perform(&self, action: Action) -> Result<Report> {
        tracing::debug!(action = %action, "Running action");
        match handler_for::<S, P>(action) {
            Some(handler) => handler.run(&self.store, &self.prompter).await,
            None => Ok(Report::Notice(format!("'{}' has no handler.", action))),
        }
    }

    async fn select_action(&self) -> Result<Action> {
        let labels = Action::menu_labels();
        let index = self
            .prompter
            .select("What would you like to do?", &labels)
            .await?;

        labels
            .get(index)
            .and_then(|label| Action::from_label(label))
            .ok_or(AppError::SelectionOutOfRange {
                index,
                len: labels.len(),
            })
    }

    /// Prints the outcome. Failures are logged and discarded here; they never
    /// leave the loop.
    fn report(&self, action: Action, outcome: Result<Report>) {
        match outcome {
            Ok(report) => println!("{}", render::render_report(&report)),
            Err(e) => {
                tracing::error!(action = %action, store = e.is_store_error(), "Error: {}", e);
                eprintln!("{} {}", "Error:".red().bold(), e.user_friendly_message());
            }
        }
    }
}
