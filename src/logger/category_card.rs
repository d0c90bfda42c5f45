use crate::logger::{fmt_amount, fmt_opt, rule};
use crate::structs::category::Category;
use crate::structs::category_history::CategoryHistory;
use crate::structs::paginated::Pagination;

/// Renders category rows, detail views and audit history.
pub struct CategoryCardLogger;

impl CategoryCardLogger {
    fn enabled_tag(enabled: bool) -> &'static str {
        if enabled {
            "🟢 enabled"
        } else {
            "⚫ disabled"
        }
    }

    pub fn print_row(category: &Category) {
        log::info!(
            "#{:<5} {:<20} {:>12}  {}",
            category.id,
            category.name,
            fmt_amount(category.maximum_amount),
            Self::enabled_tag(category.enabled),
        );
    }

    pub fn print_list(categories: &[Category]) {
        for category in categories {
            Self::print_row(category);
        }
    }

    pub fn print_detail(category: &Category) {
        log::info!("{}", rule('='));
        log::info!("🗂️  Category #{} {}", category.id, category.name);
        log::info!("{}", rule('='));
        log::info!("   Description:  {}", fmt_opt(&category.description));
        log::info!("   Max Amount:   {}", fmt_amount(category.maximum_amount));
        log::info!("   Status:       {}", Self::enabled_tag(category.enabled));
        log::info!("   Criteria:     {}", fmt_opt(&category.approval_criteria));
        log::info!(
            "   Created:      {} by {}",
            fmt_opt(&category.created_on),
            fmt_opt(&category.created_by)
        );
        log::info!(
            "   Updated:      {} by {}",
            fmt_opt(&category.updated_on),
            fmt_opt(&category.updated_by)
        );
    }

    pub fn print_history(history: &[CategoryHistory]) {
        if history.is_empty() {
            log::info!("📜 No change history recorded");
            return;
        }
        log::info!("📜 Change history ({} entries)", history.len());
        for entry in history {
            log::info!(
                "   {} by {:<12} {:<20} {:>12}  {}  {}",
                fmt_opt(&entry.created_on),
                fmt_opt(&entry.created_by),
                fmt_opt(&entry.name),
                fmt_amount(entry.maximum_amount),
                Self::enabled_tag(entry.enabled),
                entry.comments,
            );
        }
    }

    pub fn print_pagination(pagination: Pagination) {
        log::info!(
            "📄 Page {} (page size {}) of {} total categories",
            pagination.page,
            pagination.page_size,
            pagination.total
        );
    }
}
