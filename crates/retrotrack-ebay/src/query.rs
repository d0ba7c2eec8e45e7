//! Parameters of a single `findCompletedItems` request.

pub const OPERATION_NAME: &str = "findCompletedItems";
pub const SERVICE_VERSION: &str = "1.0.0";
pub const RESPONSE_DATA_FORMAT: &str = "JSON";

/// Results per request. Only the first page is ever fetched.
pub const PAGE_SIZE: u32 = 100;

/// Soonest-ending listings first.
pub const SORT_ORDER: &str = "EndTimeSoonest";

/// A console search against the Finding API.
///
/// `condition` is passed through as-is; upstream accepts `New`, `Used`,
/// and `For parts or not working`, but no validation happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub console: String,
    pub condition: Option<String>,
    pub category_id: String,
    pub page_size: u32,
    pub sort_order: &'static str,
}

impl SearchQuery {
    #[must_use]
    pub fn new(console: &str, category_id: &str) -> Self {
        Self {
            console: console.to_owned(),
            condition: None,
            category_id: category_id.to_owned(),
            page_size: PAGE_SIZE,
            sort_order: SORT_ORDER,
        }
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Option<&str>) -> Self {
        self.condition = condition.map(str::to_owned);
        self
    }

    /// Query-string pairs for this search, authenticated with `app_id`.
    #[must_use]
    pub fn params(&self, app_id: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("OPERATION-NAME", OPERATION_NAME.to_owned()),
            ("SERVICE-VERSION", SERVICE_VERSION.to_owned()),
            ("SECURITY-APPNAME", app_id.to_owned()),
            ("RESPONSE-DATA-FORMAT", RESPONSE_DATA_FORMAT.to_owned()),
            ("keywords", self.console.clone()),
            ("categoryId", self.category_id.clone()),
            ("paginationInput.entriesPerPage", self.page_size.to_string()),
            ("sortOrder", self.sort_order.to_owned()),
        ];

        if let Some(condition) = &self.condition {
            params.push(("itemFilter(0).name", "Condition".to_owned()));
            params.push(("itemFilter(0).value", condition.clone()));
        }

        params
    }
}
