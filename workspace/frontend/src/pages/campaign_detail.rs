use campaign_common::AppPath;
use yew::prelude::*;

use crate::navigation::NavigationContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub campaign_id: AttrValue,
}

#[function_component(CampaignDetailPage)]
pub fn campaign_detail_page(props: &Props) -> Html {
    let navigation = use_context::<NavigationContext>();

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigation) = &navigation {
            AppPath::Dashboard.open(navigation);
        }
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{format!("캠페인 {}", props.campaign_id)}</h2>
                <p class="text-gray-500">{"캠페인 상세 화면은 준비 중입니다."}</p>
                <div class="card-actions justify-end">
                    <button class="btn btn-ghost" onclick={on_back}>{"대시보드로 돌아가기"}</button>
                </div>
            </div>
        </div>
    }
}
