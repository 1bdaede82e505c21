use crate::domain::model::Record;
use crate::utils::error::Result;
use serde_json::Value;

/// Relational store capability. Parameters bind positionally, one value per
/// placeholder.
pub trait Store: Send + Sync {
    fn fetch(
        &self,
        statement: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = Result<Vec<Record>>> + Send;

    /// Returns the number of affected rows.
    fn execute(
        &self,
        statement: &str,
        params: &[Value],
    ) -> impl std::future::Future<Output = Result<u64>> + Send;
}

/// Interactive question capability.
pub trait Prompter: Send + Sync {
    fn input(&self, message: &str) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Closed choice: returns the index of the picked item.
    fn select(
        &self,
        message: &str,
        items: &[String],
    ) -> impl std::future::Future<Output = Result<usize>> + Send;

    /// Shows a validation message before the question is asked again.
    fn reject(&self, message: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn database_url(&self) -> &str;
    fn init_schema(&self) -> bool;
    fn show_banner(&self) -> bool;
    fn title(&self) -> &str;
}
