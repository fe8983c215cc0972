//! Static content for each migration stage.

use bevy_egui::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    #[default]
    Before,
    DnsOnly,
    Proxy,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[Stage::Before, Stage::DnsOnly, Stage::Proxy]
    }

    pub fn index(&self) -> usize {
        match self {
            Stage::Before => 0,
            Stage::DnsOnly => 1,
            Stage::Proxy => 2,
        }
    }

    pub fn next(&self) -> Stage {
        let all = Stage::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Stage {
        let all = Stage::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    pub fn info(&self) -> &'static StageInfo {
        match self {
            Stage::Before => &BEFORE,
            Stage::DnsOnly => &DNS_ONLY,
            Stage::Proxy => &PROXY,
        }
    }
}

/// Whether a stage's bullet list reads as risks or as benefits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    Risks,
    Benefits,
}

impl Outlook {
    pub fn heading(&self) -> &'static str {
        match self {
            Outlook::Risks => "Key Risks",
            Outlook::Benefits => "Key Benefits",
        }
    }

    pub fn mark(&self) -> &'static str {
        match self {
            Outlook::Risks => "⚠",
            Outlook::Benefits => "✓",
        }
    }
}

#[derive(Debug)]
pub struct StageInfo {
    pub title: &'static str,
    /// Short label for the navigation button
    pub nav_label: &'static str,
    pub description: &'static str,
    pub business_impact: &'static [&'static str],
    pub outlook: Outlook,
    pub points: &'static [&'static str],
    pub accent: egui::Color32,
    /// Label and caption of the matching timeline step
    pub timeline: (&'static str, &'static str),
}

static BEFORE: StageInfo = StageInfo {
    title: "Current State: Direct Connection",
    nav_label: "Current State",
    description: "Users connect directly to our AWS infrastructure without security filtering",
    business_impact: &[
        "✓ Full control",
        "✗ No attack protection",
        "✗ Performance varies globally",
        "✗ SSL overhead on origin",
    ],
    outlook: Outlook::Risks,
    points: &[
        "DDoS attacks directly hit servers",
        "No WAF protection",
        "Global latency issues",
        "SSL computational costs",
    ],
    accent: egui::Color32::from_rgb(37, 99, 235),
    timeline: ("Current State", "Assessment"),
};

static DNS_ONLY: StageInfo = StageInfo {
    title: "Transition Phase: DNS Migration",
    nav_label: "Transition Phase",
    description: "Gradual DNS propagation - some traffic uses Cloudflare DNS, some uses cached Route53",
    business_impact: &[
        "✓ Zero-downtime migration",
        "✓ Risk-free testing period",
        "✗ Mixed security state during transition",
    ],
    outlook: Outlook::Risks,
    points: &[
        "Temporary inconsistent security coverage",
        "Need to maintain both configurations",
        "Monitoring complexity during cutover",
    ],
    accent: egui::Color32::from_rgb(22, 163, 74),
    timeline: ("DNS Migration", "Cutover"),
};

static PROXY: StageInfo = StageInfo {
    title: "Target State: Full Proxy Protection",
    nav_label: "Target State",
    description: "All traffic flows through Cloudflare's global security and performance network",
    business_impact: &[
        "✓ Enterprise-grade security",
        "✓ Global performance optimization",
        "✓ Reduced infrastructure costs",
        "✓ Enhanced user experience",
    ],
    outlook: Outlook::Benefits,
    points: &[
        "DDoS protection saves $ in incident response",
        "WAF prevents data breaches",
        "Caching reduces AWS bandwidth costs by 60%+",
        "Faster loading improves conversion rates",
    ],
    accent: egui::Color32::from_rgb(234, 88, 12),
    timeline: ("Proxy Enable", "Optimization"),
};

/// Strategic objectives shown above the stage navigation
pub const OBJECTIVES: [(&str, &str, &str); 3] = [
    ("🛡", "Risk Mitigation", "Prevent costly security incidents"),
    ("⚡", "Performance", "Global acceleration"),
    ("💰", "Cost Optimization", "Reduce AWS bandwidth costs"),
];

/// Security architecture details, shown only for the proxy stage
pub mod security {
    pub const CONNECTIONS: [(&str, &str); 2] = [
        ("Connection 1:", "Client → Cloudflare (TLS 1.3)"),
        ("Connection 2:", "Cloudflare → Origin (Optimized)"),
    ];

    pub const WAF_HEADING: &str = "Web Application Firewall (599+ Rules)";

    pub const WAF_RULES: [(&str, &str); 3] = [
        ("OWASP Core Ruleset:", "179 rules"),
        ("Cloudflare Managed Rules:", "420+ rules"),
        ("Initial Deployment Mode:", "Log-Only (Safe)"),
    ];

    pub const DEPLOYMENT_PHASES: [(&str, &str); 2] = [
        (
            "Phase 1 (Week 1):",
            "All WAF rules set to \"LOG\" mode - monitor traffic without blocking",
        ),
        (
            "Phase 2 (Week 2):",
            "Critical rules moved to \"BLOCK\" mode after validation",
        ),
    ];
}
