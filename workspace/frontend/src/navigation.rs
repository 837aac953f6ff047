use campaign_common::Navigate;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Navigation capability handed to components through context.
///
/// Components call [`Navigate::navigate`] on it instead of reaching for the
/// router, so they can be mounted under any provider.
#[derive(Clone, PartialEq)]
pub struct NavigationContext {
    pub go_to: Callback<String>,
}

impl Navigate for NavigationContext {
    fn navigate(&self, path: &str) {
        self.go_to.emit(path.to_string());
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProviderProps {
    pub children: Children,
}

/// Provides a [`NavigationContext`] backed by the browser router. Must be
/// mounted inside a `BrowserRouter`.
#[function_component(NavigationProvider)]
pub fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let navigator = use_navigator();

    let go_to = Callback::from(move |path: String| {
        match (&navigator, Route::recognize(&path)) {
            (Some(navigator), Some(route)) if route != Route::NotFound => {
                log::debug!("Pushing route {:?}", route);
                navigator.push(&route);
            }
            _ => {
                log::debug!("No client route for {}, loading page", path);
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().set_href(&path) {
                        log::error!("Failed to navigate to {}: {:?}", path, e);
                    }
                }
            }
        }
    });

    let context = NavigationContext { go_to };

    html! {
        <ContextProvider<NavigationContext> context={context}>
            {props.children.clone()}
        </ContextProvider<NavigationContext>>
    }
}
