//! API types and static page data

use genie::auth::session::UserProfile;
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `data` of a login/register response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthData {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// A chatbot managed from the console
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genie {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub conversations: u32,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Subscription plan offered on the billing page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        id: "starter-monthly",
        name: "Starter",
        price: "₹499",
        period: "/month",
        features: &["1 genie", "1,000 conversations / month", "Email support"],
        highlighted: false,
    },
    Plan {
        id: "pro-monthly",
        name: "Pro",
        price: "₹999",
        period: "/month",
        features: &[
            "10 genies",
            "25,000 conversations / month",
            "Analytics dashboard",
            "Priority support",
        ],
        highlighted: true,
    },
    Plan {
        id: "business-yearly",
        name: "Business",
        price: "₹49,999",
        period: "/year",
        features: &[
            "Unlimited genies",
            "Unlimited conversations",
            "Custom branding",
            "Dedicated success manager",
        ],
        highlighted: false,
    },
];

/// Headline metric on the dashboard and analytics pages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend_up: bool,
}

pub const METRICS: [Metric; 4] = [
    Metric {
        label: "Conversations",
        value: "12,482",
        change: "+14.2%",
        trend_up: true,
    },
    Metric {
        label: "Active genies",
        value: "8",
        change: "+2",
        trend_up: true,
    },
    Metric {
        label: "Avg. response time",
        value: "1.4s",
        change: "-0.3s",
        trend_up: true,
    },
    Metric {
        label: "Escalations",
        value: "37",
        change: "+5",
        trend_up: false,
    },
];

/// Conversations per weekday, oldest first
pub const WEEKLY_CONVERSATIONS: [(&str, u32); 7] = [
    ("Mon", 1_640),
    ("Tue", 1_920),
    ("Wed", 1_780),
    ("Thu", 2_210),
    ("Fri", 2_050),
    ("Sat", 1_320),
    ("Sun", 1_562),
];
