use serde::Deserialize;

use crate::store::Page;

use super::error::*;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationConfig {
    pub min_page_size: i64,
    pub max_page_size: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { min_page_size: 5, max_page_size: 10 }
    }
}

///
/// Raw pagination query. Both values are required; they are optional here
/// only so a missing one is reported as `InvalidArgument`.
///
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    pub page_id: Option<i64>,
    pub page_size: Option<i64>,
}

impl PaginationConfig {
    pub fn page(&self, req: &PageRequest) -> Result<Page> {
        let page_id = req.page_id
            .ok_or_else(|| Error::InvalidArgument(String::from("page_id is required")))?;
        let page_size = req.page_size
            .ok_or_else(|| Error::InvalidArgument(String::from("page_size is required")))?;

        if page_id < 1 {
            return Err(Error::InvalidArgument(String::from("page_id must be at least 1")));
        }
        if page_size < self.min_page_size || page_size > self.max_page_size {
            return Err(Error::InvalidArgument(format!(
                "page_size must be between {} and {}",
                self.min_page_size, self.max_page_size
            )));
        }

        let offset = (page_id - 1)
            .checked_mul(page_size)
            .ok_or_else(|| Error::InvalidArgument(String::from("page_id is out of range")))?;

        Ok(Page { limit: page_size as u64, offset: offset as u64 })
    }
}
