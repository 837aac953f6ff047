/// Injected navigation capability.
///
/// Components never talk to the router directly; the application provides an
/// implementation and tests provide a recording one.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// Destinations reachable from the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppPath {
    Dashboard,
    PromotionCreate,
    CampaignDetail(String),
}

impl AppPath {
    pub fn to_path(&self) -> String {
        match self {
            AppPath::Dashboard => "/dashboard".to_string(),
            AppPath::PromotionCreate => "/promotion/create".to_string(),
            AppPath::CampaignDetail(id) => format!("/campaigns/{}", id),
        }
    }

    pub fn open<N: Navigate + ?Sized>(&self, navigator: &N) {
        let path = self.to_path();
        log::debug!("Navigating to {}", path);
        navigator.navigate(&path);
    }
}
