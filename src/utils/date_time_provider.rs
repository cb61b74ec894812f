use std::sync::Arc;

use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

pub type DynDateTimeProvider = Arc<dyn DateTimeProvider + Send + Sync>;

///
/// Source of the current time. Injected wherever rows are timestamped
/// or tokens are issued, so tests can pin the clock.
///
#[cfg_attr(test, automock)]
pub trait DateTimeProvider {
    fn utc_now(&self) -> DateTime<Utc>;
}

pub struct CoreTimeProvider;

impl CoreTimeProvider {
    pub fn new_dyn() -> DynDateTimeProvider {
        Arc::new(CoreTimeProvider)
    }
}

impl DateTimeProvider for CoreTimeProvider {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
