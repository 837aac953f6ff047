use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none">
                <Link<Route> to={Route::Dashboard} classes="btn btn-ghost text-xl">
                    <i class="fas fa-bullhorn"></i>
                    {" 캠페인 매니저"}
                </Link<Route>>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-lg font-semibold" id="page-title">{ &props.title }</h1>
            </div>
        </div>
    }
}
