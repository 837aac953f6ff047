use campaign_common::state::load_into;
use campaign_common::{DashboardState, MountGuard};
use yew::prelude::*;

use crate::api_client::dashboard::HttpDashboardApi;

/// Loads the dashboard once per mount.
///
/// Starts in [`DashboardState::Loading`]. The fetch is tied to a
/// [`MountGuard`] that the effect cleanup cancels, so a response arriving
/// after unmount never touches the state handle.
#[hook]
pub fn use_dashboard() -> UseStateHandle<DashboardState> {
    let state = use_state(DashboardState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let guard = MountGuard::new();
            let task_guard = guard.clone();

            wasm_bindgen_futures::spawn_local(async move {
                load_into(&HttpDashboardApi, &task_guard, |loaded| state.set(loaded)).await;
            });

            move || {
                log::trace!("Dashboard unmounted");
                guard.cancel();
            }
        });
    }

    state
}
