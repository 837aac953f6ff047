use campaign_common::{ActivityView, RecentActivityItem, NO_RECENT_ACTIVITY};
use yew::prelude::*;

use crate::navigation::NavigationContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub items: Vec<RecentActivityItem>,
}

/// Latest campaigns, one clickable row each, opening the campaign detail view.
#[function_component(RecentActivity)]
pub fn recent_activity(props: &Props) -> Html {
    let navigation = use_context::<NavigationContext>();

    let rows = match ActivityView::from_items(&props.items) {
        ActivityView::Empty => {
            return html! {
                <div class="text-center py-8 text-gray-500">{NO_RECENT_ACTIVITY}</div>
            };
        }
        ActivityView::Rows(rows) => rows,
    };

    html! {
        <ul class="menu w-full p-0">
            { for rows.into_iter().map(|row| {
                let onclick = {
                    let navigation = navigation.clone();
                    let row = row.clone();
                    Callback::from(move |_: MouseEvent| match &navigation {
                        Some(navigation) => row.select(navigation),
                        None => log::warn!("No navigation context, ignoring click on campaign {}", row.id),
                    })
                };

                html! {
                    <li key={row.list_key()}>
                        <a class="flex justify-between items-center gap-4" {onclick}>
                            <div class="flex flex-col">
                                <span class="font-medium">{&row.purpose}</span>
                                if let Some(updated_at) = &row.updated_at {
                                    <span class="text-xs text-gray-500">{updated_at}</span>
                                }
                            </div>
                            <span class="badge badge-outline">{&row.status_label}</span>
                        </a>
                    </li>
                }
            })}
        </ul>
    }
}
