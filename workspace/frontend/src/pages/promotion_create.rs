use campaign_common::AppPath;
use yew::prelude::*;

use crate::navigation::NavigationContext;

/// Landing point of the "create" action. The creation flow itself belongs to
/// a separate screen.
#[function_component(PromotionCreatePage)]
pub fn promotion_create_page() -> Html {
    let navigation = use_context::<NavigationContext>();

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigation) = &navigation {
            AppPath::Dashboard.open(navigation);
        }
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"새 캠페인 만들기"}</h2>
                <p class="text-gray-500">{"캠페인 생성 화면은 준비 중입니다."}</p>
                <div class="card-actions justify-end">
                    <button class="btn btn-ghost" onclick={on_back}>{"대시보드로 돌아가기"}</button>
                </div>
            </div>
        </div>
    }
}
