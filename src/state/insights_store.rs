use crate::errors::InvoflowError;
use crate::services::api_client::ApiClient;
use crate::services::request_service::RequestService;
use crate::state::store_state::StoreState;
use crate::structs::date_range::DateRange;
use crate::structs::insights::Insights;

/// Store for the server-computed insights summary. Never cached across
/// filter changes; every load hits the server.
pub struct InsightsStore<'a> {
    service: RequestService<'a>,
    state: StoreState<Insights>,
    range: DateRange,
}

impl<'a> InsightsStore<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            service: RequestService::new(client),
            state: StoreState::new(),
            range: DateRange::unbounded(),
        }
    }

    pub async fn load(&mut self, range: Option<DateRange>) {
        if let Some(range) = range {
            self.range = range;
        }

        let ticket = self.state.begin();
        let result = self.service.insights(self.range).await;
        self.state.finish(ticket, result);
    }

    pub async fn refresh(&mut self) {
        self.load(None).await;
    }

    pub fn insights(&self) -> Option<Insights> {
        self.state.data
    }

    pub fn error(&self) -> Option<&InvoflowError> {
        self.state.error.as_ref()
    }
}
