pub mod state;

use contracts::projections::p902_category_sales::dto::{CategorySalesRow, COLUMNS, EXPORT_PREFIX};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{create_state, pie_data};
use crate::projections::p902_category_sales::api;
use crate::shared::charts::PieChart;
use crate::shared::components::table::{format_number_int, SortableHeaderCell, TableCellMoney};
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::toast::use_toast;

pub const TAB_KEY: &str = "p902_category_sales";

#[component]
#[allow(non_snake_case)]
pub fn CategorySalesReport() -> impl IntoView {
    let state = create_state();
    let toast = use_toast();
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_rows().await {
                Ok(rows) => {
                    state.update(|s| {
                        s.rows = rows;
                        s.is_loaded = true;
                        s.page = 0;
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load category sales: {}", e);
                    set_error.set(Some("Error al cargar el reporte".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let view_page = Memo::new(move |_| state.with(|s| s.report_view().apply(&s.rows)));
    let chart = Signal::derive(move || state.with(|s| pie_data(&s.rows)));

    let on_sort = Callback::new(move |column: String| state.update(|s| s.toggle_sort(&column)));

    let export = move |_: leptos::ev::MouseEvent| {
        let rows = view_page.with_untracked(|p| p.filtered.clone());
        match export_to_excel(&rows, EXPORT_PREFIX) {
            Ok(()) => toast.success(format!("{} filas exportadas", rows.len())),
            Err(e) => toast.error(e),
        }
    };

    load();

    view! {
        <PageFrame tab_key=TAB_KEY category=PageCategory::Report>
            <PageHeader title="Ventas por Categoría" icon_name="pie">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    "Actualizar"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=export>
                    {icon("download")}
                    "Exportar Excel"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <Flex justify=FlexJustify::Center style="padding: var(--spacing-xl);">
                        <Spinner />
                    </Flex>
                }
            >
                <section class="report-card">
                    <h2 class="report-card__title">"Unidades vendidas por categoría"</h2>
                    <PieChart
                        data=chart
                        format_value=Callback::new(|v: f64| format_number_int(v))
                    />
                </section>

                <section class="report-card">
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    {COLUMNS
                                        .iter()
                                        .map(|col| view! {
                                            <SortableHeaderCell
                                                label=col.label
                                                sort_field=col.key
                                                current_sort_field=Signal::derive(move || state.with(|s| {
                                                    s.sort.as_ref().map(|x| x.column.clone()).unwrap_or_default()
                                                }))
                                                sort_ascending=Signal::derive(move || state.with(|s| {
                                                    s.sort.as_ref().map(|x| x.direction.is_ascending()).unwrap_or(true)
                                                }))
                                                on_sort=on_sort
                                                align_right=col.numeric
                                            />
                                        })
                                        .collect_view()}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    view_page
                                        .with(|p| p.rows.clone())
                                        .into_iter()
                                        .map(report_row)
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                    </div>

                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || view_page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || view_page.with(|p| p.total))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                        on_page_size_change=Callback::new(move |size| state.update(|s| {
                            s.page_size = size;
                            s.page = 0;
                        }))
                        page_size_options=vec![5, 10, 25]
                    />
                </section>
            </Show>
        </PageFrame>
    }
}

fn report_row(row: CategorySalesRow) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell>{row.nombre_categoria}</TableCell>
            <TableCell class="text-right">{format_number_int(row.total_pedidos as f64)}</TableCell>
            <TableCell class="text-right">{format_number_int(row.total_unidades_vendidas as f64)}</TableCell>
            <TableCellMoney value=row.precio_promedio_venta />
        </TableRow>
    }
}
