use contracts::projections::p902_category_sales::dto::CategorySalesRow;
use contracts::projections::p903_monthly_sales::dto::MonthlySalesRow;
use contracts::projections::p904_top_products::dto::{chart_rows, TopProductRow};
use contracts::shared::report_query::{page_count, paginate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::summary::{
    best_month_stat, categories_stat, category_points, monthly_points, product_points,
    top_product_stat, total_sales_stat, StatValue,
};
use crate::projections::{p902_category_sales, p903_monthly_sales, p904_top_products};
use crate::shared::charts::{BarChart, LineChart, PieChart};
use crate::shared::components::table::{format_money, format_number_int, TableCellMoney};
use crate::shared::components::{PageHeader, PaginationControls, StatCard};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};

pub const TAB_KEY: &str = "d400_sales_dashboard";

const BLOCK_PAGE_SIZES: [usize; 3] = [5, 10, 25];

/// Page cursor of one dashboard table
#[derive(Clone, Copy)]
struct BlockPager {
    page: RwSignal<usize>,
    page_size: RwSignal<usize>,
}

impl BlockPager {
    fn new() -> Self {
        Self {
            page: RwSignal::new(0),
            page_size: RwSignal::new(BLOCK_PAGE_SIZES[0]),
        }
    }

    fn slice<T: Clone>(&self, rows: &[T]) -> Vec<T> {
        paginate(rows, self.page.get(), self.page_size.get()).to_vec()
    }

    fn controls(self, total: Signal<usize>) -> impl IntoView {
        let page_size = self.page_size;
        let page = self.page;
        view! {
            <PaginationControls
                current_page=Signal::derive(move || page.get())
                total_pages=Signal::derive(move || page_count(total.get(), page_size.get()))
                total_count=total
                page_size=Signal::derive(move || page_size.get())
                on_page_change=Callback::new(move |p| page.set(p))
                on_page_size_change=Callback::new(move |size| {
                    page_size.set(size);
                    page.set(0);
                })
                page_size_options=BLOCK_PAGE_SIZES.to_vec()
            />
        }
    }
}

fn stat_signal(
    source: Signal<Option<StatValue>>,
) -> (Signal<Option<String>>, Signal<Option<String>>) {
    (
        Signal::derive(move || source.get().map(|s| s.value)),
        Signal::derive(move || source.get().and_then(|s| s.subtitle)),
    )
}

#[component]
#[allow(non_snake_case)]
pub fn SalesDashboard() -> impl IntoView {
    let categories = RwSignal::new(None::<Vec<CategorySalesRow>>);
    let months = RwSignal::new(None::<Vec<MonthlySalesRow>>);
    let products = RwSignal::new(None::<Vec<TopProductRow>>);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_error.set(None);
        categories.set(None);
        months.set(None);
        products.set(None);

        spawn_local(async move {
            match p902_category_sales::api::fetch_rows().await {
                Ok(rows) => categories.set(Some(rows)),
                Err(e) => {
                    log::error!("dashboard: category sales failed: {}", e);
                    categories.set(Some(Vec::new()));
                    set_error.set(Some(format!("Error al cargar datos: {}", e)));
                }
            }
        });
        spawn_local(async move {
            match p903_monthly_sales::api::fetch_rows().await {
                Ok(rows) => months.set(Some(rows)),
                Err(e) => {
                    log::error!("dashboard: monthly sales failed: {}", e);
                    months.set(Some(Vec::new()));
                    set_error.set(Some(format!("Error al cargar datos: {}", e)));
                }
            }
        });
        spawn_local(async move {
            match p904_top_products::api::fetch_rows().await {
                Ok(rows) => products.set(Some(rows)),
                Err(e) => {
                    log::error!("dashboard: top products failed: {}", e);
                    products.set(Some(Vec::new()));
                    set_error.set(Some(format!("Error al cargar datos: {}", e)));
                }
            }
        });
    };

    let (total_value, total_subtitle) =
        stat_signal(Signal::derive(move || months.with(|m| m.as_deref().map(total_sales_stat))));
    let (category_value, category_subtitle) = stat_signal(Signal::derive(move || {
        categories.with(|c| c.as_deref().map(categories_stat))
    }));
    let (month_value, month_subtitle) =
        stat_signal(Signal::derive(move || months.with(|m| m.as_deref().map(best_month_stat))));
    let (product_value, product_subtitle) = stat_signal(Signal::derive(move || {
        products.with(|p| p.as_deref().map(top_product_stat))
    }));

    let category_chart =
        Signal::derive(move || categories.with(|c| category_points(c.as_deref().unwrap_or_default())));
    let month_chart =
        Signal::derive(move || months.with(|m| monthly_points(m.as_deref().unwrap_or_default())));
    let product_chart = Signal::derive(move || {
        products.with(|p| product_points(chart_rows(p.as_deref().unwrap_or_default())))
    });

    let category_pager = BlockPager::new();
    let month_pager = BlockPager::new();
    let product_pager = BlockPager::new();

    let category_total = Signal::derive(move || categories.with(|c| c.as_ref().map_or(0, Vec::len)));
    let month_total = Signal::derive(move || months.with(|m| m.as_ref().map_or(0, Vec::len)));
    let product_total = Signal::derive(move || products.with(|p| p.as_ref().map_or(0, Vec::len)));

    load();

    view! {
        <PageFrame tab_key=TAB_KEY category=PageCategory::Dashboard>
            <PageHeader title="Dashboard de Ventas" subtitle="Resumen general del negocio" icon_name="dashboard">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="stat-grid">
                <StatCard label="Ventas Totales" icon_name="money" value=total_value subtitle=total_subtitle />
                <StatCard label="Categorías" icon_name="categories" value=category_value subtitle=category_subtitle />
                <StatCard label="Mejor Mes" icon_name="calendar" value=month_value subtitle=month_subtitle />
                <StatCard label="Producto Top" icon_name="products" value=product_value subtitle=product_subtitle />
            </div>

            <section class="report-card">
                <h2 class="report-card__title">"Ventas por Categoría"</h2>
                <Show when=move || categories.with(Option::is_some) fallback=loading_block>
                    <div class="dashboard-block">
                        <PieChart data=category_chart format_value=Callback::new(|v: f64| format_number_int(v)) />
                        <div class="dashboard-block__table">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Categoría"</TableHeaderCell>
                                        <TableHeaderCell class="text-right">"Unidades"</TableHeaderCell>
                                        <TableHeaderCell class="text-right">"Precio Promedio"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || {
                                        categories
                                            .with(|c| category_pager.slice(c.as_deref().unwrap_or_default()))
                                            .into_iter()
                                            .map(|row| view! {
                                                <TableRow>
                                                    <TableCell>{row.nombre_categoria}</TableCell>
                                                    <TableCell class="text-right">
                                                        {format_number_int(row.total_unidades_vendidas as f64)}
                                                    </TableCell>
                                                    <TableCellMoney value=row.precio_promedio_venta />
                                                </TableRow>
                                            })
                                            .collect_view()
                                    }}
                                </TableBody>
                            </Table>
                            {category_pager.controls(category_total)}
                        </div>
                    </div>
                </Show>
            </section>

            <section class="report-card">
                <h2 class="report-card__title">"Ventas Mensuales"</h2>
                <Show when=move || months.with(Option::is_some) fallback=loading_block>
                    <LineChart data=month_chart format_value=Callback::new(|v: f64| format_money(v)) />
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Mes/Año"</TableHeaderCell>
                                <TableHeaderCell class="text-right">"Total Ventas"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                months
                                    .with(|m| month_pager.slice(m.as_deref().unwrap_or_default()))
                                    .into_iter()
                                    .map(|row| {
                                        let label = row.label();
                                        view! {
                                            <TableRow>
                                                <TableCell>{label}</TableCell>
                                                <TableCellMoney value=row.total_sales />
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                    {month_pager.controls(month_total)}
                </Show>
            </section>

            <section class="report-card">
                <h2 class="report-card__title">"Top 10 Productos Más Vendidos"</h2>
                <Show when=move || products.with(Option::is_some) fallback=loading_block>
                    <BarChart data=product_chart format_value=Callback::new(|v: f64| format_number_int(v)) />
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Producto"</TableHeaderCell>
                                <TableHeaderCell class="text-right">"Unidades Vendidas"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                products
                                    .with(|p| product_pager.slice(p.as_deref().unwrap_or_default()))
                                    .into_iter()
                                    .map(|row| view! {
                                        <TableRow>
                                            <TableCell>{row.product_name}</TableCell>
                                            <TableCell class="text-right">
                                                {format_number_int(row.total_units_sold as f64)}
                                            </TableCell>
                                        </TableRow>
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                    {product_pager.controls(product_total)}
                </Show>
            </section>
        </PageFrame>
    }
}

fn loading_block() -> impl IntoView {
    view! {
        <Flex justify=FlexJustify::Center style="padding: var(--spacing-lg);">
            <Spinner />
        </Flex>
    }
}
