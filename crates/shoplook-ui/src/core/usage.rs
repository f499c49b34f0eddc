//! Free-plan usage gate.
//!
//! # Design
//! - Record the view first, then read the counters; both must succeed before the gate can close.
//! - Any failure collapses to the default gate (limit not reached).

use crate::services::error::ApiError;
use crate::services::gateway::UsageGateway;
use shoplook_models::ViewStats;

/// Views a shop on the free plan may serve before the widget is suspended.
pub const FREE_PLAN_VIEW_LIMIT: u64 = 1_000;

/// Usage counters for the current shop, captured once per mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UsageGate {
    /// Widget views recorded for the shop.
    pub view_count: u64,
    /// Whether the shop has a paid subscription.
    pub subscribed: bool,
}

impl UsageGate {
    /// Free plan and more views than the plan allows.
    #[must_use]
    pub const fn limit_reached(self) -> bool {
        !self.subscribed && self.view_count > FREE_PLAN_VIEW_LIMIT
    }
}

impl From<ViewStats> for UsageGate {
    fn from(stats: ViewStats) -> Self {
        Self {
            view_count: stats.count,
            subscribed: stats.subscribed,
        }
    }
}

/// Record a view for `shop` and read back its usage counters.
///
/// # Errors
///
/// Returns the first gateway error; the counters are not read when recording fails.
pub async fn check_usage<G>(gateway: &G, shop: &str) -> Result<UsageGate, ApiError>
where
    G: UsageGateway + ?Sized,
{
    gateway.record_view(shop).await?;
    let stats = gateway.view_stats(shop).await?;
    Ok(UsageGate::from(stats))
}

/// Collapse a usage check into a gate, reporting failures to `on_error`.
pub fn settle_usage<F>(result: Result<UsageGate, ApiError>, on_error: F) -> UsageGate
where
    F: FnOnce(&ApiError),
{
    result.unwrap_or_else(|err| {
        on_error(&err);
        UsageGate::default()
    })
}

/// Console line for a swallowed usage-check failure.
#[must_use]
pub fn describe_usage_failure(err: &ApiError) -> String {
    match err.status() {
        Some(status) => format!("shoplook usage check failed (status {status}): {err}"),
        None => format!("shoplook usage check failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::gateway::fake::{Call, FakeGateway};

    fn stats(subscribed: bool, count: u64) -> ViewStats {
        ViewStats { subscribed, count }
    }

    #[test]
    fn limit_only_applies_to_free_plans_over_threshold() {
        assert!(UsageGate::from(stats(false, 1_500)).limit_reached());
        assert!(!UsageGate::from(stats(true, 5_000)).limit_reached());
        assert!(!UsageGate::from(stats(false, FREE_PLAN_VIEW_LIMIT)).limit_reached());
        assert!(UsageGate::from(stats(false, FREE_PLAN_VIEW_LIMIT + 1)).limit_reached());
        assert!(!UsageGate::default().limit_reached());
    }

    #[tokio::test]
    async fn check_records_view_before_reading_counters() {
        let gateway = FakeGateway::new().with_view_stats(Ok(stats(false, 1_500)));
        let gate = check_usage(&gateway, "demo.myshopify.com").await;
        assert_eq!(
            gate,
            Ok(UsageGate {
                view_count: 1_500,
                subscribed: false
            })
        );
        assert_eq!(
            gateway.calls(),
            vec![
                Call::RecordView("demo.myshopify.com".into()),
                Call::ViewStats("demo.myshopify.com".into()),
            ]
        );
    }

    #[tokio::test]
    async fn failed_record_skips_counter_read() {
        let gateway = FakeGateway::new()
            .with_record_view(Err(ApiError::network("offline")))
            .with_view_stats(Ok(stats(false, 9_999)));
        let result = check_usage(&gateway, "demo.myshopify.com").await;
        assert!(result.is_err());
        assert_eq!(
            gateway.calls(),
            vec![Call::RecordView("demo.myshopify.com".into())]
        );
    }

    #[tokio::test]
    async fn settle_defaults_and_reports_failures() {
        let gateway =
            FakeGateway::new().with_view_stats(Err(ApiError::from_status(502, "", "Bad Gateway")));
        let mut reported = Vec::new();
        let gate = settle_usage(check_usage(&gateway, "shop").await, |err| {
            reported.push(err.to_string());
        });
        assert_eq!(gate, UsageGate::default());
        assert!(!gate.limit_reached());
        assert_eq!(reported.len(), 1);
    }

    #[test]
    fn settle_passes_successful_gate_through() {
        let gate = UsageGate {
            view_count: 2_000,
            subscribed: false,
        };
        let settled = settle_usage(Ok(gate), |_| panic!("no error expected"));
        assert!(settled.limit_reached());
    }

    #[test]
    fn failure_line_names_status_when_gateway_answered() {
        let err = ApiError::from_status(502, r#"{"message":"upstream down"}"#, "Bad Gateway");
        assert_eq!(
            describe_usage_failure(&err),
            "shoplook usage check failed (status 502): upstream down"
        );
        assert_eq!(
            describe_usage_failure(&ApiError::network("offline")),
            "shoplook usage check failed: offline"
        );
    }
}
