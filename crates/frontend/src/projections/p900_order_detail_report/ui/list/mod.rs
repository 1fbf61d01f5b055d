pub mod state;

use contracts::projections::p900_order_detail_report::dto::{
    OrderDetailReportRow, COLUMNS, EXPORT_PREFIX,
};
use contracts::shared::report_query::distinct_values;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use crate::projections::p900_order_detail_report::api;
use crate::shared::components::table::{format_number_int, SortableHeaderCell, TableCellMoney};
use crate::shared::components::{DateRangeFilter, PageHeader, PaginationControls, SearchDropdown};
use crate::shared::date_utils::format_opt_date;
use crate::shared::export::export_to_excel;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::toast::use_toast;

pub const TAB_KEY: &str = "p900_order_detail_report";

#[component]
#[allow(non_snake_case)]
pub fn OrderDetailReport() -> impl IntoView {
    let state = create_state();
    let toast = use_toast();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_rows().await {
                Ok(rows) => {
                    log::debug!("order detail report: {} rows", rows.len());
                    state.update(|s| {
                        s.rows = rows;
                        s.is_loaded = true;
                        s.page = 0;
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load order detail report: {}", e);
                    set_error.set(Some(format!("Error al cargar el reporte: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    let view_page = Memo::new(move |_| state.with(|s| s.report_view().apply(&s.rows)));
    let clientes = Memo::new(move |_| state.with(|s| distinct_values(&s.rows, "cliente")));
    let productos = Memo::new(move |_| state.with(|s| distinct_values(&s.rows, "producto")));

    let on_sort = Callback::new(move |column: String| {
        state.update(|s| {
            s.sort.toggle(&column);
            s.page = 0;
        })
    });

    let export = move |_: leptos::ev::MouseEvent| {
        let rows = view_page.with_untracked(|p| p.filtered.clone());
        match export_to_excel(&rows, EXPORT_PREFIX) {
            Ok(()) => toast.success(format!("{} filas exportadas", rows.len())),
            Err(e) => {
                log::warn!("export failed: {}", e);
                toast.error(e);
            }
        }
    };

    load();

    view! {
        <PageFrame tab_key=TAB_KEY category=PageCategory::Report>
            <PageHeader
                title="Detalle de Pedidos"
                subtitle="Líneas de pedido con cliente, producto y categoría"
                icon_name="report"
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=Signal::derive(move || loading.get())>
                    {icon("refresh")}
                    "Actualizar"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=export>
                    {icon("download")}
                    "Exportar Excel"
                </Button>
            </PageHeader>

            <div class="report-toolbar">
                <SearchDropdown
                    id="p900-cliente"
                    label="Cliente"
                    value=Signal::derive(move || state.with(|s| s.cliente.clone()))
                    options=clientes
                    on_change=Callback::new(move |v| state.update(|s| {
                        s.cliente = v;
                        s.page = 0;
                    }))
                />
                <SearchDropdown
                    id="p900-producto"
                    label="Producto"
                    value=Signal::derive(move || state.with(|s| s.producto.clone()))
                    options=productos
                    on_change=Callback::new(move |v| state.update(|s| {
                        s.producto = v;
                        s.page = 0;
                    }))
                />
                <DateRangeFilter
                    date_from=Signal::derive(move || state.with(|s| s.date_from.clone()))
                    date_to=Signal::derive(move || state.with(|s| s.date_to.clone()))
                    on_change=Callback::new(move |(from, to)| state.update(|s| {
                        s.date_from = from;
                        s.date_to = to;
                        s.page = 0;
                    }))
                />
                <span class="report-toolbar__count">
                    {move || view_page.with(|p| format!("{} de {} registros", p.total, state.with(|s| s.rows.len())))}
                </span>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || loading.get()>
                <Flex gap=FlexGap::Small justify=FlexJustify::Center>
                    <Spinner />
                    "Cargando..."
                </Flex>
            </Show>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=80.0>"Pedido"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Fecha"</TableHeaderCell>
                            {COLUMNS
                                .iter()
                                .map(|col| view! {
                                    <SortableHeaderCell
                                        label=col.label
                                        sort_field=col.key
                                        current_sort_field=Signal::derive(move || state.with(|s| s.sort.column.clone()))
                                        sort_ascending=Signal::derive(move || state.with(|s| s.sort.direction.is_ascending()))
                                        on_sort=on_sort
                                        align_right=col.numeric
                                    />
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = view_page.with(|p| p.rows.clone());
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=COLUMNS.len() + 2>
                                            <div class="table__empty">"Sin resultados"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter().map(report_row).collect_view().into_any()
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
            />
        </PageFrame>
    }
}

fn report_row(row: OrderDetailReportRow) -> impl IntoView {
    let fecha = format_opt_date(row.fecha_pedido.as_deref());
    let descuento = row.discount_label();
    view! {
        <TableRow>
            <TableCell>{row.id_pedido}</TableCell>
            <TableCell>{fecha}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{row.cliente}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{row.producto}</TableCellLayout>
            </TableCell>
            <TableCell class="text-right">{format_number_int(row.cantidad as f64)}</TableCell>
            <TableCellMoney value=row.precio_unitario />
            <TableCell class="text-right">{descuento}</TableCell>
            <TableCellMoney value=row.total_linea bold=true />
        </TableRow>
    }
}
