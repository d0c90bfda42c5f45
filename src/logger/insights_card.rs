use crate::logger::rule;
use crate::structs::insights::Insights;

/// Renders the four-counter insights summary.
pub struct InsightsCardLogger;

impl InsightsCardLogger {
    pub fn print(title: &str, insights: &Insights) {
        log::info!("{}", rule('─'));
        log::info!("📊 {}", title);
        log::info!(
            "   Total: {}   🟢 Approved: {}   🔴 Rejected: {}   🟡 Pending: {}",
            insights.total,
            insights.approved,
            insights.rejected,
            insights.pending,
        );
        log::info!("{}", rule('─'));
    }

    pub fn print_with_total(title: &str, insights: &Insights, approved_total: f64) {
        Self::print(title, insights);
        log::info!("💰 Approved amount on this page: ₹{:.2}", approved_total);
    }
}
