use crate::config::constants::{CATEGORY_PAGE_SIZE, DEFAULT_PAGE};
use crate::errors::{InvoflowError, InvoflowResult};
use crate::services::api_client::ApiClient;
use crate::services::category_service::CategoryService;
use crate::state::store_state::StoreState;
use crate::structs::category::Category;
use crate::structs::category_history::CategoryHistory;
use crate::structs::paginated::{Paginated, Pagination};

/// List store for approval categories.
pub struct CategoryListStore<'a> {
    service: CategoryService<'a>,
    state: StoreState<Vec<Category>>,
    pagination: Pagination,
    page: u32,
    page_size: u32,
}

impl<'a> CategoryListStore<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            service: CategoryService::new(client),
            state: StoreState::new(),
            pagination: Pagination { page: DEFAULT_PAGE, page_size: CATEGORY_PAGE_SIZE, total: 0 },
            page: DEFAULT_PAGE,
            page_size: CATEGORY_PAGE_SIZE,
        }
    }

    pub async fn load(&mut self, page: Option<u32>, page_size: Option<u32>) {
        if let Some(page) = page {
            self.page = page;
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }

        let ticket = self.state.begin();
        let result = self.service.list(self.page, self.page_size).await;
        self.apply(ticket, result);
    }

    pub async fn refresh(&mut self) {
        self.load(None, None).await;
    }

    fn apply(&mut self, ticket: u64, result: InvoflowResult<Paginated<Category>>) {
        match result {
            Ok(page) => {
                let pagination = page.pagination();
                if self.state.finish(ticket, Ok(page.items)) {
                    self.pagination = pagination;
                }
            }
            Err(e) => {
                self.state.finish(ticket, Err(e));
            }
        }
    }

    pub fn items(&self) -> &[Category] {
        self.state.data.as_deref().unwrap_or_default()
    }

    pub fn loaded(&self) -> bool {
        self.state.data.is_some()
    }

    pub fn error(&self) -> Option<&InvoflowError> {
        self.state.error.as_ref()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}

/// Detail store for one category together with its change history.
pub struct CategoryDetailStore<'a> {
    service: CategoryService<'a>,
    state: StoreState<(Category, Vec<CategoryHistory>)>,
    last_id: Option<i64>,
}

impl<'a> CategoryDetailStore<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            service: CategoryService::new(client),
            state: StoreState::new(),
            last_id: None,
        }
    }

    pub async fn load(&mut self, id: i64) {
        self.last_id = Some(id);
        let ticket = self.state.begin();

        let (category, history) = futures::join!(self.service.get(id), self.service.history(id));
        let result = category.and_then(|c| history.map(|h| (c, h)));
        self.state.finish(ticket, result);
    }

    pub async fn refresh(&mut self) {
        if let Some(id) = self.last_id {
            self.load(id).await;
        }
    }

    pub fn category(&self) -> Option<&Category> {
        self.state.data.as_ref().map(|(c, _)| c)
    }

    pub fn history(&self) -> &[CategoryHistory] {
        self.state.data.as_ref().map(|(_, h)| h.as_slice()).unwrap_or_default()
    }

    pub fn error(&self) -> Option<&InvoflowError> {
        self.state.error.as_ref()
    }
}
