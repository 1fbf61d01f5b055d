use leptos::prelude::*;

use super::geometry::{bar_heights, color_at};
use super::ChartPoint;

const WIDTH: f64 = 640.0;
const LABEL_WIDTH: f64 = 200.0;
const VALUE_WIDTH: f64 = 70.0;
const ROW_HEIGHT: f64 = 28.0;

/// Horizontal bars, one row per point
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,
    #[prop(optional)] format_value: Option<Callback<f64, String>>,
) -> impl IntoView {
    let fmt = move |v: f64| match format_value {
        Some(cb) => cb.run(v),
        None => format!("{}", v),
    };
    let bar_space = WIDTH - LABEL_WIDTH - VALUE_WIDTH;

    view! {
        <div class="chart chart--bar">
            <Show
                when=move || data.with(|d| !d.is_empty())
                fallback=|| view! { <div class="chart__empty">"Sin datos"</div> }
            >
                {move || {
                    let rows = data.get();
                    let values: Vec<f64> = rows.iter().map(|(_, v)| *v).collect();
                    let lengths = bar_heights(&values, bar_space);
                    let height = ROW_HEIGHT * rows.len() as f64;
                    let bars = rows
                        .into_iter()
                        .zip(lengths)
                        .enumerate()
                        .map(|(i, ((label, value), length))| {
                            let y = i as f64 * ROW_HEIGHT;
                            view! {
                                <g class="chart__bar-row">
                                    <text class="chart__label" x=LABEL_WIDTH - 8.0 y=y + ROW_HEIGHT / 2.0 + 4.0 text-anchor="end">
                                        {label.clone()}
                                    </text>
                                    <rect
                                        class="chart__bar"
                                        x=LABEL_WIDTH
                                        y=y + 4.0
                                        width=length
                                        height=ROW_HEIGHT - 8.0
                                        fill=color_at(i)
                                    >
                                        <title>{format!("{}: {}", label, fmt(value))}</title>
                                    </rect>
                                    <text class="chart__value" x=LABEL_WIDTH + length + 6.0 y=y + ROW_HEIGHT / 2.0 + 4.0>
                                        {fmt(value)}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view();
                    view! {
                        <svg class="chart__svg" viewBox=format!("0 0 {} {}", WIDTH, height) role="img">
                            {bars}
                        </svg>
                    }
                }}
            </Show>
        </div>
    }
}
