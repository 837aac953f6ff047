use campaign_common::{AppPath, DashboardState, StatusBreakdown};
use yew::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::components::dashboard::{RecentActivity, StatusChart, StatusLegend};
use crate::hooks::use_dashboard;
use crate::navigation::NavigationContext;

const BANNER_SRC: &str = "/static/banner.svg";

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let state = use_dashboard();
    let navigation = use_context::<NavigationContext>();

    let on_create = Callback::from(move |_: MouseEvent| match &navigation {
        Some(navigation) => AppPath::PromotionCreate.open(navigation),
        None => log::warn!("No navigation context, ignoring create click"),
    });

    let body = match &*state {
        DashboardState::Loading => html! {
            <Loading text="대시보드를 불러오는 중입니다..." />
        },
        DashboardState::Failed(message) => html! {
            <ErrorDisplay message={message.clone()} />
        },
        DashboardState::Ready { summary, activity } => {
            let breakdown = StatusBreakdown::from_summary(summary);
            html! {
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"캠페인 현황"}</h2>
                            <div class="flex flex-col md:flex-row items-center gap-6">
                                <StatusChart breakdown={breakdown.clone()} />
                                <div class="flex-1 w-full">
                                    <StatusLegend {breakdown} />
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"최근 활동"}</h2>
                            <RecentActivity items={activity.clone()} />
                        </div>
                    </div>
                </div>
            }
        }
    };

    html! {
        <>
            <div class="card bg-base-100 shadow mb-6 overflow-hidden">
                <figure>
                    <img src={BANNER_SRC} alt="캠페인 대시보드 배너" class="w-full h-40 object-cover" />
                </figure>
                <div class="card-body flex-row justify-between items-center">
                    <p class="text-gray-500">{"진행 중인 캠페인을 한눈에 확인하세요."}</p>
                    <button class="btn btn-primary" onclick={on_create}>
                        <i class="fas fa-plus"></i>
                        {" 새 캠페인 만들기"}
                    </button>
                </div>
            </div>
            {body}
        </>
    }
}
