use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::campaign_detail::CampaignDetailPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::promotion_create::PromotionCreatePage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/promotion/create")]
    PromotionCreate,
    #[at("/campaigns/:id")]
    CampaignDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout title="대시보드"><DashboardPage /></Layout> }
        }
        Route::PromotionCreate => {
            log::trace!("Rendering Promotion Create page");
            html! { <Layout title="새 캠페인"><PromotionCreatePage /></Layout> }
        }
        Route::CampaignDetail { id } => {
            log::trace!("Rendering Campaign Detail page for ID: {}", id);
            html! { <Layout title="캠페인 상세"><CampaignDetailPage campaign_id={id} /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}
