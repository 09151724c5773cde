//! Application Configuration

/// Default number of reviews per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Review application configuration
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Reviews per page of `GET /reviews`
    pub page_size: u32,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
