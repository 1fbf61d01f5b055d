use contracts::domain::common::EntityRecord;
use contracts::shared::metadata::{FieldKind, FieldMetadata};
use contracts::shared::page::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use super::form::{entity_form_view, photo_data_url};
use crate::shared::components::table::format_number_with_decimals;
use crate::shared::components::{ConfirmDialog, PageHeader, PaginationControls};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::toast::use_toast;

const CRUD_PAGE_SIZES: [usize; 3] = [10, 20, 50];

fn page_size_key(collection: &str) -> String {
    format!("sigeve-page-size-{}", collection)
}

/// Stored page size, only when it is one of the offered sizes
fn parse_page_size(stored: Option<String>) -> Option<usize> {
    stored
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|size| CRUD_PAGE_SIZES.contains(size))
}

/// Page to show after deleting a row from `page`
pub fn page_after_delete(page: usize, rows_on_page: usize) -> usize {
    if rows_on_page <= 1 && page > 0 {
        page - 1
    } else {
        page
    }
}

fn load_page_size(collection: &str) -> Option<usize> {
    let storage = web_sys::window()?.local_storage().ok()??;
    parse_page_size(storage.get_item(&page_size_key(collection)).ok()?)
}

fn save_page_size(collection: &str, size: usize) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(&page_size_key(collection), &size.to_string());
    }
}

/// Arguments handed to a row action
#[derive(Clone)]
pub struct RowActionArgs<T: EntityRecord> {
    pub record: T,
    /// Refetch the current page
    pub reload: Callback<()>,
}

/// Extra icon button next to edit/delete
#[derive(Clone)]
pub struct RowAction<T: EntityRecord> {
    pub icon: &'static str,
    pub title: &'static str,
    pub run: Callback<RowActionArgs<T>>,
}

#[derive(Clone)]
pub struct ListOptions<T: EntityRecord> {
    pub row_actions: Vec<RowAction<T>>,
    pub page_size: usize,
}

impl<T: EntityRecord> Default for ListOptions<T> {
    fn default() -> Self {
        Self {
            row_actions: Vec::new(),
            page_size: PageRequest::DEFAULT_SIZE as usize,
        }
    }
}

impl<T: EntityRecord> ListOptions<T> {
    pub fn with_action(
        mut self,
        icon: &'static str,
        title: &'static str,
        run: impl Fn(RowActionArgs<T>) + Send + Sync + 'static,
    ) -> Self {
        self.row_actions.push(RowAction {
            icon,
            title,
            run: Callback::new(run),
        });
        self
    }
}

#[derive(Clone, Debug)]
struct ListState<T> {
    items: Vec<T>,
    page: usize,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
}

/// Table text of a raw field value
pub fn format_cell(kind: FieldKind, raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "-".to_string();
    }
    match kind {
        FieldKind::Date => format_date(raw),
        FieldKind::Decimal => raw
            .parse::<f64>()
            .map(|v| format_number_with_decimals(v, 2))
            .unwrap_or_else(|_| raw.to_string()),
        FieldKind::Bool => {
            if raw == "true" {
                "Sí".to_string()
            } else {
                "No".to_string()
            }
        }
        _ => raw.to_string(),
    }
}

fn cell_view<T: EntityRecord>(field: &'static FieldMetadata, record: &T) -> AnyView {
    let raw = record.field_raw(field.name);
    match field.kind {
        FieldKind::Photo | FieldKind::ImageUrl if raw.trim().is_empty() => {
            view! { <TableCell>"-"</TableCell> }.into_any()
        }
        FieldKind::Photo => view! {
            <TableCell>
                <img class="table__thumb" src=photo_data_url(&raw) alt=field.ui.label />
            </TableCell>
        }
        .into_any(),
        FieldKind::ImageUrl => view! {
            <TableCell>
                <img class="table__thumb" src=raw alt=field.ui.label />
            </TableCell>
        }
        .into_any(),
        FieldKind::Bool => {
            let (color, text) = if raw == "true" {
                (BadgeColor::Danger, "Sí")
            } else {
                (BadgeColor::Success, "No")
            };
            view! {
                <TableCell>
                    <Badge appearance=BadgeAppearance::Tint color=color>{text}</Badge>
                </TableCell>
            }
            .into_any()
        }
        kind if kind.is_numeric() => view! {
            <TableCell class="text-right">{format_cell(kind, &raw)}</TableCell>
        }
        .into_any(),
        kind => view! {
            <TableCell>
                <TableCellLayout truncate=true>{format_cell(kind, &raw)}</TableCellLayout>
            </TableCell>
        }
        .into_any(),
    }
}

/// Server-paginated list of `T` with create/edit/delete
pub fn entity_list_view<T: EntityRecord>(options: ListOptions<T>) -> AnyView {
    let meta = T::entity_metadata_info();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toast = use_toast();

    let state = RwSignal::new(ListState::<T> {
        items: Vec::new(),
        page: 0,
        page_size: load_page_size(meta.collection_name).unwrap_or(options.page_size),
        total_count: 0,
        total_pages: 0,
    });
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let row_actions = StoredValue::new(options.row_actions);

    let load = move || {
        let (page, size) = state.with_untracked(|s| (s.page, s.page_size));
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_page::<T>(PageRequest::new(page as u32, size as u32)).await {
                Ok(result) => {
                    let total_pages = result.page_count() as usize;
                    state.update(|s| {
                        s.total_count = result.total_elements as usize;
                        s.total_pages = total_pages;
                        s.items = result.content;
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load {}: {}", meta.collection_name, e);
                    set_error.set(Some(format!("Error al cargar {}: {}", meta.ui.list_name, e)));
                }
            }
            set_loading.set(false);
        });
    };
    let reload = Callback::new(move |_: ()| load());

    let open_form = move |record: Option<T>| {
        let title = if record.is_some() {
            format!("Editar {}", meta.ui.element_name)
        } else {
            format!("Nuevo {}", meta.ui.element_name)
        };
        modal_stack.push(title, move |handle| {
            let on_saved = {
                let handle = handle.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    load();
                })
            };
            let on_cancel = Callback::new(move |_: ()| handle.close());
            entity_form_view::<T>(record.clone(), on_saved, on_cancel)
        });
    };

    let confirm_delete = move |record: T| {
        let Some(id) = record.id_string() else {
            return;
        };
        let message = format!(
            "¿Eliminar {} \"{}\"? Esta acción no se puede deshacer.",
            meta.ui.element_name.to_lowercase(),
            record.display_name()
        );
        modal_stack.push("Confirmar eliminación", move |handle| {
            let on_confirm = {
                let handle = handle.clone();
                let id = id.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    let id = id.clone();
                    spawn_local(async move {
                        match api::remove::<T>(&id).await {
                            Ok(()) => {
                                toast.success(format!("{} eliminado", meta.ui.element_name));
                                state.update(|s| s.page = page_after_delete(s.page, s.items.len()));
                                load();
                            }
                            Err(e) => {
                                log::error!("failed to delete {}/{}: {}", meta.collection_name, id, e);
                                toast.error(format!("No se pudo eliminar: {}", e));
                            }
                        }
                    });
                })
            };
            let on_cancel = Callback::new(move |_: ()| handle.close());
            view! {
                <ConfirmDialog message=message.clone() on_confirm=on_confirm on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    let columns = T::list_fields();
    let header_columns = columns.clone();
    let column_count = columns.len();

    load();

    view! {
        <PageFrame tab_key=meta.tab_key() category=PageCategory::List>
            <PageHeader title=meta.ui.list_name icon_name=meta.ui.icon.unwrap_or("report")>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                    {icon("plus")}
                    "Nuevo"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    "Actualizar"
                </Button>
            </PageHeader>

            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <Show when=move || loading.get()>
                <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-md);">
                    <Spinner />
                    "Cargando..."
                </Flex>
            </Show>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_columns
                                .into_iter()
                                .map(|field| view! {
                                    <TableHeaderCell resizable=true min_width=90.0>{field.ui.label}</TableHeaderCell>
                                })
                                .collect_view()}
                            <TableHeaderCell min_width=120.0>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let items = state.with(|s| s.items.clone());
                            if items.is_empty() && !loading.get() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=column_count + 1>
                                            <div class="table__empty">"Sin registros"</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|record| {
                                    let cells = columns
                                        .iter()
                                        .map(|field| cell_view(*field, &record))
                                        .collect_view();
                                    let for_edit = record.clone();
                                    let for_delete = record.clone();
                                    let extra = row_actions
                                        .get_value()
                                        .into_iter()
                                        .map(|action| {
                                            let record = record.clone();
                                            view! {
                                                <button
                                                    class="table__action-btn"
                                                    title=action.title
                                                    on:click=move |_| action.run.run(RowActionArgs {
                                                        record: record.clone(),
                                                        reload,
                                                    })
                                                >
                                                    {icon(action.icon)}
                                                </button>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <TableRow>
                                            {cells}
                                            <TableCell>
                                                <div class="table__actions">
                                                    {extra}
                                                    <button
                                                        class="table__action-btn"
                                                        title="Editar"
                                                        on:click=move |_| open_form(Some(for_edit.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="table__action-btn table__action-btn--danger"
                                                        title="Eliminar"
                                                        on:click=move |_| confirm_delete(for_delete.clone())
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page| {
                    state.update(|s| s.page = page);
                    load();
                })
                on_page_size_change=Callback::new(move |size| {
                    save_page_size(meta.collection_name, size);
                    state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    });
                    load();
                })
                page_size_options=CRUD_PAGE_SIZES.to_vec()
            />
        </PageFrame>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_size_accepts_offered_sizes_only() {
        assert_eq!(parse_page_size(Some("20".to_string())), Some(20));
        assert_eq!(parse_page_size(Some("7".to_string())), None);
        assert_eq!(parse_page_size(Some("abc".to_string())), None);
        assert_eq!(parse_page_size(None), None);
        assert_eq!(page_size_key("customers"), "sigeve-page-size-customers");
    }

    #[test]
    fn test_page_after_delete() {
        // last row of a later page steps back
        assert_eq!(page_after_delete(3, 1), 2);
        assert_eq!(page_after_delete(3, 5), 3);
        assert_eq!(page_after_delete(0, 1), 0);
        assert_eq!(page_after_delete(0, 0), 0);
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(FieldKind::Text, "  "), "-");
        assert_eq!(format_cell(FieldKind::Text, "Berlin"), "Berlin");
        assert_eq!(format_cell(FieldKind::Date, "1996-07-04"), "04/07/1996");
        assert_eq!(format_cell(FieldKind::Decimal, "32.38"), "32.38");
        assert_eq!(format_cell(FieldKind::Decimal, "1234.5"), "1,234.50");
        assert_eq!(format_cell(FieldKind::Integer, "42"), "42");
        assert_eq!(format_cell(FieldKind::Bool, "true"), "Sí");
        assert_eq!(format_cell(FieldKind::Bool, "false"), "No");
    }
}
