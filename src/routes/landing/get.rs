use askama_axum::Template;
use time::OffsetDateTime;

const PAGE_TITLE: &str = "then.sh - The convenience of cloud deployments, without the costs";
const PAGE_DESCRIPTION: &str = "Deploy containers to your own infrastructure with zero-downtime \
    deployments, monitoring, and enterprise-grade security. Get early access now.";

const THEN_SH: &str = "then.sh";
const MANAGED_BY_YOU: &str = "Managed by you";

static DEPLOYMENT_STEPS: [DeploymentStep; 5] = [
    DeploymentStep {
        icon: Icon::Github,
        title: "Connect to GitHub",
        description: "Automatic builds triggered on push to main.",
        handler: THEN_SH,
        highlight: false,
    },
    DeploymentStep {
        icon: Icon::Box,
        title: "Build & Push Images",
        description: "Automated multi-stage builds with layer caching and private registry hosting.",
        handler: THEN_SH,
        highlight: false,
    },
    DeploymentStep {
        icon: Icon::Loader,
        title: "Zero-downtime Deployment",
        description: "Rolling updates with health checks and automatic rollbacks.",
        handler: THEN_SH,
        highlight: false,
    },
    DeploymentStep {
        icon: Icon::Server,
        title: "Infrastructure Connection",
        description: "Connect to your own servers - cloud or bare metal. Pay only for your actual \
            resource usage with rates up to 70% cheaper than managed solutions.",
        handler: MANAGED_BY_YOU,
        highlight: true,
    },
    DeploymentStep {
        icon: Icon::BarChart,
        title: "Monitoring & Logging",
        description: "View real-time metrics, logs, and alerts directly in the then.sh dashboard.",
        handler: THEN_SH,
        highlight: false,
    },
];

#[tracing::instrument(name = "Render landing page")]
pub(super) async fn landing_page() -> LandingPage<'static> {
    LandingPage {
        page_title: PAGE_TITLE,
        page_description: PAGE_DESCRIPTION,
        steps: &DEPLOYMENT_STEPS,
        year: OffsetDateTime::now_utc().year(),
    }
}

#[derive(Template)]
#[template(path = "web/landing.html")]
pub(super) struct LandingPage<'a> {
    page_title: &'a str,
    page_description: &'a str,
    steps: &'a [DeploymentStep],
    year: i32,
}

pub(super) struct DeploymentStep {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    handler: &'static str,
    highlight: bool,
}

impl DeploymentStep {
    fn handler_class(&self) -> &'static str {
        if self.highlight {
            "handler handler-yours"
        } else {
            "handler handler-ours"
        }
    }
}

#[derive(Clone, Copy)]
enum Icon {
    Github,
    Box,
    Loader,
    Server,
    BarChart,
}

impl Icon {
    /// Inline SVG path data, drawn with a 24x24 stroke icon viewbox.
    fn svg_path(&self) -> &'static str {
        match self {
            Icon::Github => "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4M9 18c-4.51 2-5-2-7-2",
            Icon::Box => "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16ZM3.3 7 12 12l8.7-5M12 22V12",
            Icon::Loader => "M21 12a9 9 0 1 1-6.219-8.56",
            Icon::Server => "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2ZM4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2ZM6 6h.01M6 18h.01",
            Icon::BarChart => "M12 20V10M18 20V4M6 20v-4",
        }
    }
}

