use campaign_common::StatusBreakdown;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub breakdown: StatusBreakdown,
}

#[function_component(StatusLegend)]
pub fn status_legend(props: &Props) -> Html {
    html! {
        <ul class="flex flex-col gap-2">
            { for props.breakdown.slices.iter().map(|slice| {
                let row_style = format!(
                    "background-color: {}; border-color: {};",
                    slice.background(),
                    slice.border()
                );
                let dot_style = format!("background-color: {};", slice.color);
                html! {
                    <li key={slice.status.code()} class="flex items-center justify-between rounded-lg border px-3 py-2" style={row_style}>
                        <div class="flex items-center gap-2">
                            <span class="inline-block w-3 h-3 rounded-full" style={dot_style}></span>
                            <span class="text-sm">{slice.label}</span>
                        </div>
                        <span class="font-semibold">{slice.count.to_string()}</span>
                    </li>
                }
            })}
        </ul>
    }
}
