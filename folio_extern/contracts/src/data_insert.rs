use std::future::Future;

use serde::Serialize;
use thiserror::Error;

/// Hosted data store that accepts structured inserts.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DataInsertApiService: Send + Sync + 'static {
    /// Appends one record to the configured contact submissions collection.
    fn insert(
        &self,
        record: ContactSubmissionRecord,
    ) -> impl Future<Output = Result<(), DataInsertError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmissionRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub user_agent: String,
}

#[derive(Debug, Error)]
pub enum DataInsertError {
    /// The data store answered and refused the write.
    #[error("{message}")]
    Write { message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockDataInsertApiService {
    pub fn with_insert(
        mut self,
        record: ContactSubmissionRecord,
        result: Result<(), DataInsertError>,
    ) -> Self {
        self.expect_insert()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
