use leptos::prelude::*;

use super::geometry::{points_attr, polyline_points};
use super::ChartPoint;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const PADDING: f64 = 28.0;
/// Most x-axis labels drawn before thinning them out
const MAX_X_LABELS: usize = 12;

#[component]
pub fn LineChart(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,
    #[prop(optional)] format_value: Option<Callback<f64, String>>,
) -> impl IntoView {
    let points = Memo::new(move |_| {
        data.with(|d| {
            let values: Vec<f64> = d.iter().map(|(_, v)| *v).collect();
            polyline_points(&values, WIDTH, HEIGHT, PADDING)
        })
    });
    let fmt = move |v: f64| match format_value {
        Some(cb) => cb.run(v),
        None => format!("{}", v),
    };

    view! {
        <div class="chart chart--line">
            <Show
                when=move || points.with(|p| !p.is_empty())
                fallback=|| view! { <div class="chart__empty">"Sin datos"</div> }
            >
                <svg class="chart__svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="none" role="img">
                    <line
                        class="chart__axis"
                        x1=PADDING y1=HEIGHT - PADDING
                        x2=WIDTH - PADDING y2=HEIGHT - PADDING
                    />
                    <polyline
                        class="chart__line"
                        fill="none"
                        stroke="#2563eb"
                        stroke-width="2"
                        points=move || points.with(|p| points_attr(p))
                    />
                    {move || {
                        let labels = data.get();
                        let every = labels.len().div_ceil(MAX_X_LABELS).max(1);
                        points
                            .get()
                            .into_iter()
                            .zip(labels)
                            .enumerate()
                            .map(|(i, ((x, y), (label, value)))| {
                                let tip = format!("{}: {}", label, fmt(value));
                                let axis_label = (i % every == 0).then(|| view! {
                                    <text class="chart__label" x=x y=HEIGHT - 8.0 text-anchor="middle">{label}</text>
                                });
                                view! {
                                    <circle class="chart__dot" cx=x cy=y r="4" fill="#2563eb">
                                        <title>{tip}</title>
                                    </circle>
                                    {axis_label}
                                }
                            })
                            .collect_view()
                    }}
                </svg>
            </Show>
        </div>
    }
}
