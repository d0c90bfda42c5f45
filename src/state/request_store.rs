use crate::config::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::errors::{InvoflowError, InvoflowResult};
use crate::services::api_client::ApiClient;
use crate::services::request_service::RequestService;
use crate::state::store_state::StoreState;
use crate::structs::paginated::{Paginated, Pagination};
use crate::structs::request_filters::RequestFilters;
use crate::structs::request_item::RequestItem;

/// List store for requests. A parameterized `load` persists its parameters
/// as the new "last used" set, so a parameterless `refresh` repeats them.
pub struct RequestListStore<'a> {
    service: RequestService<'a>,
    state: StoreState<Vec<RequestItem>>,
    pagination: Pagination,
    page: u32,
    page_size: u32,
    filters: RequestFilters,
}

impl<'a> RequestListStore<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self::with_page_size(client, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(client: &'a ApiClient, page_size: u32) -> Self {
        Self {
            service: RequestService::new(client),
            state: StoreState::new(),
            pagination: Pagination { page: DEFAULT_PAGE, page_size, total: 0 },
            page: DEFAULT_PAGE,
            page_size,
            filters: RequestFilters::default(),
        }
    }

    pub async fn load(
        &mut self,
        page: Option<u32>,
        page_size: Option<u32>,
        filters: Option<RequestFilters>,
    ) {
        if let Some(page) = page {
            self.page = page;
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }
        if let Some(filters) = filters {
            self.filters = filters;
        }

        let ticket = self.state.begin();
        let result = self.service.list(self.page, self.page_size, &self.filters).await;
        self.apply(ticket, result);
    }

    /// Re-issue the last-used parameters.
    pub async fn refresh(&mut self) {
        self.load(None, None, None).await;
    }

    fn apply(&mut self, ticket: u64, result: InvoflowResult<Paginated<RequestItem>>) {
        match result {
            Ok(page) => {
                let pagination = page.pagination();
                if self.state.finish(ticket, Ok(page.items)) {
                    // Taken verbatim from the response; never recomputed.
                    self.pagination = pagination;
                }
            }
            Err(e) => {
                self.state.finish(ticket, Err(e));
            }
        }
    }

    pub fn items(&self) -> &[RequestItem] {
        self.state.data.as_deref().unwrap_or_default()
    }

    pub fn loaded(&self) -> bool {
        self.state.data.is_some()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&InvoflowError> {
        self.state.error.as_ref()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}

/// Detail store for a single request.
pub struct RequestDetailStore<'a> {
    service: RequestService<'a>,
    state: StoreState<RequestItem>,
    last_id: Option<i64>,
}

impl<'a> RequestDetailStore<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            service: RequestService::new(client),
            state: StoreState::new(),
            last_id: None,
        }
    }

    pub async fn load(&mut self, id: i64) {
        self.last_id = Some(id);
        let ticket = self.state.begin();
        let result = self.service.get(id).await;
        self.state.finish(ticket, result);
    }

    pub async fn refresh(&mut self) {
        if let Some(id) = self.last_id {
            self.load(id).await;
        }
    }

    pub fn request(&self) -> Option<&RequestItem> {
        self.state.data.as_ref()
    }

    pub fn error(&self) -> Option<&InvoflowError> {
        self.state.error.as_ref()
    }
}
