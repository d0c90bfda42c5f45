use crate::enums::request_status::RequestStatus;
use crate::logger::{fmt_amount, rule};
use crate::structs::paginated::Pagination;
use crate::structs::request_item::RequestItem;

/// Renders request cards. Pure presentation over the canonical model; no
/// business logic lives here.
pub struct RequestCardLogger;

impl RequestCardLogger {
    fn status_tag(status: &str) -> &'static str {
        match RequestStatus::parse(status) {
            Some(status) => status.tag(),
            None => "⚪",
        }
    }

    pub fn print_card(item: &RequestItem) {
        log::info!(
            "{} #{:<6} {:<10} {:>12}  {:<14} {}",
            Self::status_tag(&item.current_status),
            item.id,
            item.current_status,
            fmt_amount(item.total_amount),
            item.category_name.as_deref().unwrap_or("-"),
            item.user_id,
        );
    }

    pub fn print_list(items: &[RequestItem]) {
        for item in items {
            Self::print_card(item);
        }
    }

    pub fn print_detail(item: &RequestItem) {
        log::info!("{}", rule('='));
        log::info!("📄 Request #{}", item.id);
        log::info!("{}", rule('='));
        log::info!("   User:            {}", item.user_id);
        log::info!("   Category:        {}", item.category_name.as_deref().unwrap_or("-"));
        log::info!("   Amount:          {}", fmt_amount(item.total_amount));
        if item.approved_amount.is_some() {
            log::info!("   Approved Amount: {}", fmt_amount(item.approved_amount));
        }
        log::info!(
            "   Status:          {} {}",
            Self::status_tag(&item.current_status),
            item.current_status
        );
        log::info!("   Approval Type:   {}", item.approvaltype);
        if let Some(invoice_number) = &item.invoice_number {
            log::info!("   Invoice No.:     {}", invoice_number);
        }
        if let Some(invoice_date) = &item.invoice_date {
            log::info!("   Invoice Date:    {}", invoice_date);
        }
        if let Some(comments) = &item.comments {
            log::info!("   Comments:        {}", comments);
        }
        log::info!("   Created:         {} by {}", item.created_on, item.created_by);
        log::info!("   Updated:         {} by {}", item.updated_on, item.updated_by);
    }

    pub fn print_pagination(pagination: Pagination) {
        log::info!(
            "📄 Page {} (page size {}) of {} total requests",
            pagination.page,
            pagination.page_size,
            pagination.total
        );
    }
}
