use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned money cell: `$1,234.50`
#[component]
pub fn TableCellMoney(
    value: f64,
    /// Bold for totals
    #[prop(optional)]
    bold: bool,
) -> impl IntoView {
    let style = if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="text-right">
            <span style=style>{format_money(value)}</span>
        </TableCell>
    }
}
