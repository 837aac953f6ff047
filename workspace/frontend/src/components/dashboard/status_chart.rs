use campaign_common::chart::{center_overlay, chart_config};
use campaign_common::{ChartGeometry, StatusBreakdown};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

const CHART_DIV_ID: &str = "dashboard-status-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub breakdown: StatusBreakdown,
}

/// Ring chart of campaign counts per status with the total in the middle.
#[function_component(StatusChart)]
pub fn status_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.breakdown.clone()), |(chart_ref, breakdown)| {
        if chart_ref.cast::<HtmlElement>().is_some() {
            draw(breakdown);
        } else {
            log::debug!("Status chart element not mounted, skipping draw");
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id={CHART_DIV_ID} class="w-56 h-56 mx-auto"></div>
    }
}

fn draw(breakdown: &StatusBreakdown) {
    let trace = breakdown.trace();

    let overlay = center_overlay(breakdown.total, ChartGeometry::from_trace(&trace).as_ref());
    if overlay.is_none() {
        log::debug!("Status chart has no slice geometry, center text skipped");
    }
    let layout = breakdown.layout(overlay);

    // Plain JS objects, not Maps, so Plotly can read them
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let payload = (
        json!([trace]).serialize(&serializer),
        layout.serialize(&serializer),
        chart_config().serialize(&serializer),
    );

    match payload {
        (Ok(data), Ok(layout), Ok(config)) => {
            log::trace!("Drawing status chart ({} campaigns)", breakdown.total);
            if let Err(e) = new_plot(CHART_DIV_ID, data, layout, config) {
                log::error!("Plotly failed to draw status chart: {:?}", e);
            }
        }
        _ => log::error!("Failed to convert status chart payload"),
    }
}
