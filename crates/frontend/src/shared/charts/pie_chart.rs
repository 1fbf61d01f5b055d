use leptos::prelude::*;

use super::geometry::pie_slices;
use super::ChartPoint;
use crate::shared::components::table::format_percent;

const SIZE: f64 = 220.0;
const RADIUS: f64 = 100.0;

/// Pie with a legend of label, value and share
#[component]
pub fn PieChart(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,
    /// Formats the legend value
    #[prop(optional)]
    format_value: Option<Callback<f64, String>>,
) -> impl IntoView {
    let slices = Memo::new(move |_| data.with(|d| pie_slices(d, SIZE / 2.0, SIZE / 2.0, RADIUS)));
    let fmt = move |v: f64| match format_value {
        Some(cb) => cb.run(v),
        None => format!("{}", v),
    };

    view! {
        <div class="chart chart--pie">
            <Show
                when=move || slices.with(|s| !s.is_empty())
                fallback=|| view! { <div class="chart__empty">"Sin datos"</div> }
            >
                <svg class="chart__svg" viewBox=format!("0 0 {} {}", SIZE, SIZE) role="img">
                    {move || {
                        slices
                            .get()
                            .into_iter()
                            .map(|slice| {
                                let tip = format!("{}: {}", slice.label, format_percent(slice.fraction));
                                view! {
                                    <path d=slice.path fill=slice.color class="chart__slice">
                                        <title>{tip}</title>
                                    </path>
                                }
                            })
                            .collect_view()
                    }}
                </svg>
                <ul class="chart__legend">
                    {move || {
                        slices
                            .get()
                            .into_iter()
                            .map(|slice| {
                                view! {
                                    <li class="chart__legend-item">
                                        <span class="chart__swatch" style=format!("background: {};", slice.color)></span>
                                        <span class="chart__legend-label">{slice.label}</span>
                                        <span class="chart__legend-value">
                                            {fmt(slice.value)} " (" {format_percent(slice.fraction)} ")"
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
