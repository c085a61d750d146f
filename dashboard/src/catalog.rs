//! The tool catalogue.
//!
//! One statically declared entry per dashboard operation. The slice is the
//! whole registry: adding a tool means adding a line here, and nothing is
//! discovered at runtime.

use crate::client::PortalClient;
use crate::tools;
use common::{Error, Result};
use futures::future::BoxFuture;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub type Handler = fn(Arc<PortalClient>, Value) -> BoxFuture<'static, Result<Value>>;

pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "list_configured_gateways",
        description: "Retrieves all payment gateways configured for a merchant, including \
            gateway reference ids, creation/modification dates, configured payment methods \
            and payment flows.",
        handler: |c, p| Box::pin(tools::gateway::list_configured(c, p)),
    },
    ToolSpec {
        name: "get_gateway_scheme",
        description: "Detailed configuration scheme for a gateway: required/optional fields, \
            supported payment methods and supported payment flows.",
        handler: |c, p| Box::pin(tools::gateway::get_scheme(c, p)),
    },
    ToolSpec {
        name: "get_gateway_details",
        description: "All details of one configured gateway addressed by mga_id, including \
            payment methods, EMI plans, mandate payment methods and configured flows.",
        handler: |c, p| Box::pin(tools::gateway::get_details(c, p)),
    },
    ToolSpec {
        name: "list_gateway_schemes",
        description: "Names of all gateways available for configuration. No details, just \
            the list.",
        handler: |c, p| Box::pin(tools::gateway::list_schemes(c, p)),
    },
    ToolSpec {
        name: "get_merchant_gateways_pm_details",
        description: "All gateways with their supported payment methods for the merchant; \
            the only listing that includes the payment method type of each configured \
            payment method.",
        handler: |c, p| Box::pin(tools::gateway::merchant_pm_details(c, p)),
    },
    ToolSpec {
        name: "list_orders_v4",
        description: "Orders created within a time range, newest first. Supports optional \
            limit, payment status and order type restrictions.",
        handler: |c, p| Box::pin(tools::orders::list_orders(c, p)),
    },
    ToolSpec {
        name: "get_order_details",
        description: "Complete details for a given order id.",
        handler: |c, p| Box::pin(tools::orders::get_order_details(c, p)),
    },
    ToolSpec {
        name: "list_offers",
        description: "All offers configured by the merchant with status, payment methods, \
            offer codes and validity periods.",
        handler: |c, p| Box::pin(tools::offers::list_offers(c, p)),
    },
    ToolSpec {
        name: "get_offer_details",
        description: "Detailed information for a specific offer including eligibility rules, \
            benefit types and configurations.",
        handler: |c, p| Box::pin(tools::offers::get_offer_details(c, p)),
    },
    ToolSpec {
        name: "get_user",
        description: "Details for a specific dashboard user, identified by user id.",
        handler: |c, p| Box::pin(tools::users::get_user(c, p)),
    },
    ToolSpec {
        name: "list_users_v2",
        description: "Users associated with the merchant, with optional pagination.",
        handler: |c, p| Box::pin(tools::users::list_users(c, p)),
    },
    ToolSpec {
        name: "get_conflict_settings",
        description: "Conflict settings configuration for payment processing.",
        handler: |c, p| Box::pin(tools::settings::conflict(c, p)),
    },
    ToolSpec {
        name: "get_general_settings",
        description: "General configuration settings for the merchant.",
        handler: |c, p| Box::pin(tools::settings::general(c, p)),
    },
    ToolSpec {
        name: "get_mandate_settings",
        description: "Mandate-related settings for recurring payments.",
        handler: |c, p| Box::pin(tools::settings::mandate(c, p)),
    },
    ToolSpec {
        name: "get_priority_logic_settings",
        description: "All configured priority logic rules, including status and the full \
            logic definition.",
        handler: |c, p| Box::pin(tools::settings::priority_logic(c, p)),
    },
    ToolSpec {
        name: "get_routing_settings",
        description: "Success-rate routing thresholds defined by the merchant, including \
            enablement status and downtime-based switching thresholds.",
        handler: |c, p| Box::pin(tools::settings::routing(c, p)),
    },
    ToolSpec {
        name: "get_webhook_settings",
        description: "Webhook configuration settings for the merchant.",
        handler: |c, p| Box::pin(tools::settings::webhook(c, p)),
    },
    ToolSpec {
        name: "list_alerts",
        description: "All alerts configured by the merchant, including status, recipients, \
            thresholds and monitoring intervals.",
        handler: |c, p| Box::pin(tools::alerts::list_alerts(c, p)),
    },
    ToolSpec {
        name: "get_alert_details",
        description: "Detailed information for a specific alert id, including source, \
            monitored metrics and applied filters.",
        handler: |c, p| Box::pin(tools::alerts::get_details(c, p)),
    },
    ToolSpec {
        name: "list_reports",
        description: "All scheduled reports configured by the merchant, with status, \
            recipients, thresholds and monitoring intervals.",
        handler: |c, p| Box::pin(tools::reports::list_reports(c, p)),
    },
    ToolSpec {
        name: "get_report_details",
        description: "Detailed information for a specific report id, including data sources, \
            metrics, dimensions and filters.",
        handler: |c, p| Box::pin(tools::reports::get_details(c, p)),
    },
    ToolSpec {
        name: "list_payment_links_v1",
        description: "Payment links created within a time range. Supports transaction-domain \
            filters such as payment_status and order_type.",
        handler: |c, p| Box::pin(tools::payments::list_payment_links(c, p)),
    },
    ToolSpec {
        name: "list_surcharge_rules",
        description: "All configured surcharge rules, including current status and rule \
            definitions.",
        handler: |c, p| Box::pin(tools::surcharge::list_rules(c, p)),
    },
    ToolSpec {
        name: "analytics_query",
        description: "Runs an analytics query: one or more metrics over a local-time \
            interval, grouped by dimensions or trend buckets, restricted by an AND/OR \
            filter tree validated against the dimension registry. Results with more than \
            one row require a top-level sortedOn directive.",
        handler: |c, p| Box::pin(tools::qapi::run_query(c, p)),
    },
    ToolSpec {
        name: "lookup_dimension_values",
        description: "Finds valid filter literals for a dimension with a closed value set, \
            ranked by similarity to the supplied queries.",
        handler: |c, p| Box::pin(tools::discovery::lookup_values(c, p)),
    },
];

pub fn find(name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|tool| tool.name == name)
}

pub async fn dispatch(client: Arc<PortalClient>, name: &str, payload: Value) -> Result<Value> {
    let tool = find(name).ok_or_else(|| Error::Validation(format!("unknown tool '{}'", name)))?;
    info!(tool = tool.name, "dispatching tool call");
    (tool.handler)(client, payload).await
}
