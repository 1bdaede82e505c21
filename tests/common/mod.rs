#![allow(dead_code)]

use employee_tracker::core::Prompter;
use employee_tracker::{Action, Dispatcher, Report, Result, SqliteStore};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    Pick(String),
}

pub fn text(s: &str) -> Answer {
    Answer::Text(s.to_string())
}

pub fn pick(label: &str) -> Answer {
    Answer::Pick(label.to_string())
}

/// Prompter fed from a queue of answers. Picks are matched by label so the
/// tests read like the operator's session.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    rejections: Mutex<Vec<String>>,
    offered: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedPrompter {
    pub fn push(&self, answers: Vec<Answer>) {
        self.answers.lock().unwrap().extend(answers);
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    pub fn rejections(&self) -> Vec<String> {
        self.rejections.lock().unwrap().clone()
    }

    /// Every choice list shown so far, with the question it came with.
    pub fn offered(&self) -> Vec<(String, Vec<String>)> {
        self.offered.lock().unwrap().clone()
    }

    pub fn last_offered(&self) -> Vec<String> {
        self.offered
            .lock()
            .unwrap()
            .last()
            .map(|(_, items)| items.clone())
            .unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    async fn input(&self, message: &str) -> Result<String> {
        match self.answers.lock().unwrap().pop_front() {
            Some(Answer::Text(s)) => Ok(s),
            other => panic!("expected a text answer for '{}', got {:?}", message, other),
        }
    }

    async fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        self.offered
            .lock()
            .unwrap()
            .push((message.to_string(), items.to_vec()));

        match self.answers.lock().unwrap().pop_front() {
            Some(Answer::Pick(label)) => Ok(items
                .iter()
                .position(|item| *item == label)
                .unwrap_or_else(|| panic!("'{}' not offered in {:?}", label, items))),
            other => panic!("expected a pick for '{}', got {:?}", message, other),
        }
    }

    async fn reject(&self, message: &str) -> Result<()> {
        self.rejections.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

pub type TestDispatcher = Dispatcher<SqliteStore, ScriptedPrompter>;

pub async fn dispatcher() -> TestDispatcher {
    let store = SqliteStore::in_memory().await.unwrap();
    Dispatcher::new(store, ScriptedPrompter::default())
}

/// Queues `answers` and runs one handler.
pub async fn perform(d: &TestDispatcher, action: Action, answers: Vec<Answer>) -> Result<Report> {
    d.prompter().push(answers);
    d.perform(action).await
}

pub async fn add_department(d: &TestDispatcher, name: &str) {
    perform(d, Action::AddDepartment, vec![text(name)])
        .await
        .unwrap();
}

pub async fn add_role(d: &TestDispatcher, title: &str, salary: &str, department: &str) {
    perform(
        d,
        Action::AddRole,
        vec![text(title), text(salary), pick(department)],
    )
    .await
    .unwrap();
}

pub async fn add_employee(d: &TestDispatcher, first: &str, last: &str, role: &str, manager: &str) {
    perform(
        d,
        Action::AddEmployee,
        vec![text(first), text(last), pick(role), pick(manager)],
    )
    .await
    .unwrap();
}

pub fn table(report: Report) -> Vec<serde_json::Value> {
    match report {
        Report::Table(rows) => rows.iter().map(|r| r.to_object()).collect(),
        other => panic!("expected a table, got {:?}", other),
    }
}
