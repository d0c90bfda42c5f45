use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use chrono::NaiveDate;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::REPORT_PAGE_SIZE;
use crate::enums::commands::Commands;
use crate::enums::duration_filter::DurationFilter;
use crate::enums::request_status::RequestStatus;
use crate::errors::{InvoflowError, InvoflowResult};
use crate::helpers::date_range;
use crate::logger::category_card::CategoryCardLogger;
use crate::logger::insights_card::InsightsCardLogger;
use crate::logger::request_card::RequestCardLogger;
use crate::services::api_client::ApiClient;
use crate::services::category_service::CategoryService;
use crate::services::request_service::RequestService;
use crate::state::category_store::{CategoryDetailStore, CategoryListStore};
use crate::state::insights_store::InsightsStore;
use crate::state::request_store::{RequestDetailStore, RequestListStore};
use crate::structs::category_input::{CategoryCreate, CategoryUpdate};
use crate::structs::insights::Insights;
use crate::structs::request_filters::RequestFilters;
use crate::structs::request_item::RequestItem;
use crate::structs::status_update::StatusUpdateInput;

pub struct CommandRunner {
    start_time: Option<Instant>,
    base_urls: Option<Vec<String>>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
            base_urls: None,
        }
    }

    /// Run against an explicit set of base URLs instead of the config file
    /// and the built-in candidates.
    pub fn with_base_urls(base_urls: Vec<String>) -> Self {
        Self {
            start_time: None,
            base_urls: Some(base_urls),
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> InvoflowResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Dashboard { duration, status } => self.dashboard_command(duration, status).await,
            Commands::Pending { duration, category_id } => self.pending_command(duration, category_id).await,
            Commands::Report { start, end, status, category_id, page, page_size } => {
                self.report_command(start, end, status, category_id, page, page_size).await
            }
            Commands::Request { id } => self.request_command(id).await,
            Commands::UpdateStatus { id, status, comments, approved_amount } => {
                self.update_status_command(id, status, comments, approved_amount).await
            }
            Commands::Categories { page, page_size } => self.categories_command(page, page_size).await,
            Commands::Category { id } => self.category_command(id).await,
            Commands::AddCategory { name, description, criteria, max_amount, disabled } => {
                self.add_category_command(name, description, criteria, max_amount, disabled).await
            }
            Commands::EditCategory { id, name, description, criteria, max_amount, enabled, comments } => {
                self.edit_category_command(id, name, description, criteria, max_amount, enabled, comments)
                    .await
            }
            Commands::Export { start, end, status, category_id, output } => {
                self.export_command(start, end, status, category_id, output).await
            }
            Commands::Login { token } => self.login_command(token),
            Commands::Logout => self.logout_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn build_client(&self) -> InvoflowResult<ApiClient> {
        if let Some(base_urls) = &self.base_urls {
            return ApiClient::with_base_urls(base_urls.clone(), None);
        }
        let config = ConfigManager::load()?;
        ApiClient::new(&config)
    }

    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn init_command(&self) -> InvoflowResult<()> {
        log::info!("🚀 Initializing invoflow configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("📝 Edit the configuration file to set your API base URL.");
                log::info!("🔧 Run 'invoflow login --token <t>' to store your auth token.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn dashboard_command(
        &self,
        duration: DurationFilter,
        status: Option<RequestStatus>,
    ) -> InvoflowResult<()> {
        log::info!("📊 Loading dashboard ({})...", duration.label());

        let client = self.build_client()?;
        let range = date_range::resolve(duration, self.today());
        let filters = RequestFilters::default().with_status(status).with_range(range);

        let mut requests = RequestListStore::new(&client);
        let mut insights = InsightsStore::new(&client);
        futures::join!(
            requests.load(None, None, Some(filters)),
            insights.load(Some(range)),
        );

        match insights.insights() {
            Some(summary) => InsightsCardLogger::print("Request Insights", &summary),
            None => {
                if let Some(error) = insights.error() {
                    log::error!("❌ Could not load insights: {}", error);
                }
            }
        }

        if let Some(error) = requests.error() {
            log::error!("❌ Could not load requests: {}", error);
            return Err(error.clone());
        }

        if requests.items().is_empty() {
            log::info!("⚠️ No requests found for this period.");
        } else {
            RequestCardLogger::print_list(requests.items());
            RequestCardLogger::print_pagination(requests.pagination());
        }

        if let Some(error) = insights.error() {
            return Err(error.clone());
        }
        Ok(())
    }

    async fn pending_command(
        &self,
        duration: DurationFilter,
        category_id: Option<i64>,
    ) -> InvoflowResult<()> {
        log::info!("🟡 Loading pending requests ({})...", duration.label());

        let client = self.build_client()?;
        let range = date_range::resolve(duration, self.today());
        let filters = RequestFilters::default()
            .with_status(Some(RequestStatus::Pending))
            .with_range(range)
            .with_category(category_id);

        let mut requests = RequestListStore::with_page_size(&client, REPORT_PAGE_SIZE);
        requests.load(None, None, Some(filters)).await;

        if let Some(error) = requests.error() {
            log::error!("❌ Could not load pending requests: {}", error);
            return Err(error.clone());
        }

        if requests.items().is_empty() {
            log::info!("✅ No pending requests. All caught up!");
            return Ok(());
        }

        RequestCardLogger::print_list(requests.items());
        RequestCardLogger::print_pagination(requests.pagination());
        Ok(())
    }

    async fn report_command(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        status: Option<RequestStatus>,
        category_id: Option<i64>,
        page: u32,
        page_size: u32,
    ) -> InvoflowResult<()> {
        log::info!("📈 Building request report...");

        let client = self.build_client()?;
        let service = RequestService::new(&client);
        let filters = RequestFilters {
            status,
            start,
            end,
            category_id,
        };

        let report = service.list(page, page_size, &filters).await?;

        if report.items.is_empty() {
            log::info!("⚠️ No requests matched the report filters.");
            return Ok(());
        }

        // Page-local counts; the server-side insights summary covers the
        // whole window, the report summarizes what is on screen.
        let summary = Insights {
            total: report.items.len() as u64,
            approved: Self::count_with_status(&report.items, RequestStatus::Approved),
            rejected: Self::count_with_status(&report.items, RequestStatus::Rejected),
            pending: Self::count_with_status(&report.items, RequestStatus::Pending),
        };
        let approved_total: f64 = report
            .items
            .iter()
            .filter(|r| RequestStatus::parse(&r.current_status) == Some(RequestStatus::Approved))
            .filter_map(|r| r.total_amount)
            .sum();

        InsightsCardLogger::print_with_total("Report Summary (this page)", &summary, approved_total);
        RequestCardLogger::print_list(&report.items);
        RequestCardLogger::print_pagination(report.pagination());
        Ok(())
    }

    fn count_with_status(items: &[RequestItem], status: RequestStatus) -> u64 {
        items
            .iter()
            .filter(|r| RequestStatus::parse(&r.current_status) == Some(status))
            .count() as u64
    }

    async fn request_command(&self, id: i64) -> InvoflowResult<()> {
        log::info!("🔍 Loading request #{}...", id);

        let client = self.build_client()?;
        let mut store = RequestDetailStore::new(&client);
        store.load(id).await;

        match store.request() {
            Some(item) => {
                RequestCardLogger::print_detail(item);
                Ok(())
            }
            None => Err(store.error().cloned().unwrap_or_else(|| {
                InvoflowError::system_error("load request", "no data returned")
            })),
        }
    }

    async fn update_status_command(
        &self,
        id: i64,
        status: String,
        comments: String,
        approved_amount: Option<f64>,
    ) -> InvoflowResult<()> {
        log::info!("✏️  Updating status of request #{}...", id);

        let client = self.build_client()?;
        let service = RequestService::new(&client);
        let input = StatusUpdateInput {
            status,
            comments,
            approved_amount,
        };

        let updated = service.update_status(id, &input).await?;
        log::info!("✅ Request #{} is now {}", updated.id, updated.current_status);
        RequestCardLogger::print_detail(&updated);
        Ok(())
    }

    async fn categories_command(&self, page: u32, page_size: u32) -> InvoflowResult<()> {
        log::info!("🗂️  Loading approval categories...");

        let client = self.build_client()?;
        let mut store = CategoryListStore::new(&client);
        store.load(Some(page), Some(page_size)).await;

        if let Some(error) = store.error() {
            log::error!("❌ Could not load categories: {}", error);
            return Err(error.clone());
        }

        if store.items().is_empty() {
            log::info!("⚠️ No categories configured yet.");
            return Ok(());
        }

        CategoryCardLogger::print_list(store.items());
        CategoryCardLogger::print_pagination(store.pagination());
        Ok(())
    }

    async fn category_command(&self, id: i64) -> InvoflowResult<()> {
        log::info!("🔍 Loading category #{}...", id);

        let client = self.build_client()?;
        let mut store = CategoryDetailStore::new(&client);
        store.load(id).await;

        match store.category() {
            Some(category) => {
                CategoryCardLogger::print_detail(category);
                CategoryCardLogger::print_history(store.history());
                Ok(())
            }
            None => Err(store.error().cloned().unwrap_or_else(|| {
                InvoflowError::system_error("load category", "no data returned")
            })),
        }
    }

    async fn add_category_command(
        &self,
        name: String,
        description: Option<String>,
        criteria: String,
        max_amount: Option<f64>,
        disabled: bool,
    ) -> InvoflowResult<()> {
        log::info!("➕ Creating category '{}'...", name);

        let client = self.build_client()?;
        let service = CategoryService::new(&client);
        let input = CategoryCreate {
            name,
            description,
            maximum_amount: max_amount,
            enabled: !disabled,
            approval_criteria: criteria,
        };

        let created = service.create(&input).await?;
        log::info!("✅ Created category #{} {}", created.id, created.name);
        CategoryCardLogger::print_detail(&created);
        Ok(())
    }

    async fn edit_category_command(
        &self,
        id: i64,
        name: Option<String>,
        description: Option<String>,
        criteria: Option<String>,
        max_amount: Option<f64>,
        enabled: Option<bool>,
        comments: String,
    ) -> InvoflowResult<()> {
        log::info!("✏️  Updating category #{}...", id);

        let client = self.build_client()?;
        let service = CategoryService::new(&client);
        let input = CategoryUpdate {
            name,
            description,
            maximum_amount: max_amount,
            enabled,
            approval_criteria: criteria,
            comments,
        };

        let updated = service.update(id, &input).await?;
        log::info!("✅ Updated category #{} {}", updated.id, updated.name);
        CategoryCardLogger::print_detail(&updated);
        Ok(())
    }

    async fn export_command(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        status: Option<RequestStatus>,
        category_id: Option<i64>,
        output: PathBuf,
    ) -> InvoflowResult<()> {
        log::info!("📦 Downloading request export...");

        let client = self.build_client()?;
        let service = RequestService::new(&client);
        let filters = RequestFilters {
            status,
            start,
            end,
            category_id,
        };

        let bytes = service.export(&filters).await?;
        fs::write(&output, &bytes).map_err(|e| {
            InvoflowError::system_error("write export file", &format!("{}: {}", output.display(), e))
        })?;
        log::info!("✅ Export saved to {} ({} bytes)", output.display(), bytes.len());
        Ok(())
    }

    fn login_command(&self, token: String) -> InvoflowResult<()> {
        if token.trim().is_empty() {
            return Err(InvoflowError::validation_error(
                "token",
                &token,
                "Token must not be empty",
                Some("Pass the token issued by the approval backend"),
            ));
        }
        ConfigManager::set_auth_token(token.trim())?;
        log::info!("🔐 Auth token saved.");
        Ok(())
    }

    fn logout_command(&self) -> InvoflowResult<()> {
        ConfigManager::clear_auth_token()?;
        log::info!("👋 Auth token cleared.");
        Ok(())
    }
}
