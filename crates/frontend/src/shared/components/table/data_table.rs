use super::number_format::format_table_cell;
use super::SortableHeaderCell;
use crate::shared::components::PaginationControls;
use crate::shared::list_utils::{page_slice, total_pages};
use contracts::shared::{columns, header_label, sort_rows, DataRow};
use leptos::prelude::*;
use thaw::*;

const PAGE_SIZE: usize = 10;

/// Table of untyped report rows.
///
/// Columns come from the first row, headers are the upper-cased keys, every
/// column sorts on click and numeric cells are right-aligned.
#[component]
pub fn DataTable(#[prop(into)] rows: Signal<Vec<DataRow>>) -> impl IntoView {
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);
    let page = RwSignal::new(0usize);

    // New data starts unsorted on the first page
    Effect::new(move |_| {
        rows.track();
        sort_field.set(String::new());
        page.set(0);
    });

    let keys = Memo::new(move |_| rows.with(|r| columns(r)));
    let sorted = Memo::new(move |_| {
        let mut data = rows.get();
        let field = sort_field.get();
        if !field.is_empty() {
            sort_rows(&mut data, &field, sort_ascending.get());
        }
        data
    });
    let count = Signal::derive(move || sorted.with(|r| r.len()));
    let pages = Signal::derive(move || total_pages(count.get(), PAGE_SIZE));

    let toggle_sort = Callback::new(move |field: String| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|asc| *asc = !*asc);
        } else {
            sort_field.set(field);
            sort_ascending.set(true);
        }
        page.set(0);
    });

    view! {
        {move || {
            if count.get() == 0 {
                return view! {
                    <div class="data-table__empty">"Nenhum dado para exibir."</div>
                }
                    .into_any();
            }

            view! {
                <div class="data-table">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                {keys
                                    .get()
                                    .into_iter()
                                    .map(|key| {
                                        view! {
                                            <SortableHeaderCell
                                                label=header_label(&key)
                                                sort_field=key
                                                current_sort_field=sort_field
                                                sort_ascending=sort_ascending
                                                on_sort=toggle_sort
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let keys = keys.get();
                                sorted.with(|all| {
                                    page_slice(all, page.get(), PAGE_SIZE)
                                        .iter()
                                        .map(|row| {
                                            let cells = keys
                                                .iter()
                                                .map(|key| {
                                                    let value = row.get(key).cloned().unwrap_or_default();
                                                    let numeric = value.is_number();
                                                    let text = format_table_cell(key, &value);
                                                    view! {
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <span class:data-table__number=numeric>{text}</span>
                                                            </TableCellLayout>
                                                        </TableCell>
                                                    }
                                                })
                                                .collect_view();
                                            view! { <TableRow>{cells}</TableRow> }
                                        })
                                        .collect_view()
                                })
                            }}
                        </TableBody>
                    </Table>
                    <PaginationControls
                        current_page=page
                        total_pages=pages
                        total_count=count
                        on_page_change=Callback::new(move |p| page.set(p))
                    />
                </div>
            }
                .into_any()
        }}
    }
}
