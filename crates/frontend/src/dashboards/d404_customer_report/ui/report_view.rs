use crate::dashboards::d404_customer_report::CSV_FILENAME;
use crate::dashboards::store::use_dashboard_store;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{ErrorBanner, PaginationControls};
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{page_slice, sort_list, total_pages};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::dashboards::d404_customer_report::{CustomerReportFilter, CustomerRow};
use leptos::prelude::*;
use thaw::*;

const PAGE_SIZE: usize = 15;

/// Customer segmentation: order and at-risk switches, sortable table, CSV download
#[component]
pub fn CustomerReportView() -> impl IntoView {
    let store = use_dashboard_store();

    let initial = store.state.with_untracked(|s| s.customer_report.filter);
    let order_by_asc = RwSignal::new(initial.order_by_asc);
    let at_risk_only = RwSignal::new(initial.at_risk_only);

    let rows = store.select(|s| s.customer_report.report_data.clone().unwrap_or_default());
    let is_loading = store.select(|s| s.customer_report.is_loading);

    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);
    let page = RwSignal::new(0usize);

    // Every switch change reloads with the new filter
    Effect::new(move |prev: Option<CustomerReportFilter>| {
        let filter = CustomerReportFilter {
            order_by_asc: order_by_asc.get(),
            at_risk_only: at_risk_only.get(),
        };
        if prev.is_some() && prev != Some(filter) {
            page.set(0);
            store.fetch_customer_report(filter);
        }
        filter
    });

    let sorted = Memo::new(move |_| {
        let mut data: Vec<CustomerRow> = rows.get();
        let field = sort_field.get();
        if !field.is_empty() {
            sort_list(&mut data, &field, sort_ascending.get());
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

    let download = move |_| {
        let data = sorted.get_untracked();
        if let Err(e) = export_to_csv(&data, CSV_FILENAME) {
            log::error!("CSV export failed: {}", e);
        }
    };

    view! {
        <PageFrame page_id="d404_customer_report--list" category=PAGE_CAT_LIST class="customer-report">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="page__title">"Relatório de Clientes"</h2>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || count.get() == 0)
                    on_click=download
                >
                    {icon("download")}
                    " Baixar CSV"
                </Button>
            </Flex>

            <div class="customer-report__filters">
                <div class="customer-report__filter">
                    <strong>"Mostrar (Ordem):"</strong>
                    <Switch checked=order_by_asc />
                    <span>
                        {move || if order_by_asc.get() { "Menos Compraram" } else { "Mais Compraram" }}
                    </span>
                </div>
                <div class="customer-report__filter">
                    <strong>"Filtrar por Risco:"</strong>
                    <Switch checked=at_risk_only />
                    <span>
                        {move || if at_risk_only.get() { "Apenas 'Em Risco'" } else { "Todos os Clientes" }}
                    </span>
                </div>
            </div>

            <ErrorBanner error=store.error() />

            <div class="customer-report__table" class:customer-report__table--loading=move || is_loading.get()>
                <Show when=move || is_loading.get()>
                    <div class="customer-report__spinner">
                        <Spinner />
                    </div>
                </Show>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell
                                label="Nome do Cliente"
                                sort_field="nome_cliente"
                                current_sort_field=sort_field
                                sort_ascending=sort_ascending
                                on_sort=toggle_sort
                                min_width=200.0
                            />
                            <TableHeaderCell>"Contato (Telefone/Email)"</TableHeaderCell>
                            <SortableHeaderCell
                                label="Total de Compras"
                                sort_field="total_vendas"
                                current_sort_field=sort_field
                                sort_ascending=sort_ascending
                                on_sort=toggle_sort
                                align="right"
                            />
                            <SortableHeaderCell
                                label="Última Compra"
                                sort_field="ultima_compra_data"
                                current_sort_field=sort_field
                                sort_ascending=sort_ascending
                                on_sort=toggle_sort
                            />
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let visible: Vec<CustomerRow> =
                                sorted.with(|all| page_slice(all, page.get(), PAGE_SIZE).to_vec());
                            visible
                                .into_iter()
                                .map(|row| {
                                    let nome = row.nome_cliente;
                                    let contato = row.contato;
                                    let total = row.total_vendas;
                                    let ultima = row.ultima_compra_data;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{nome}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{contato}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="data-table__number">{total}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{ultima}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
                <Show when=move || !is_loading.get() && count.get() == 0>
                    <div class="data-table__empty">"Nenhum dado para exibir."</div>
                </Show>
                <PaginationControls
                    current_page=page
                    total_pages=pages
                    total_count=count
                    on_page_change=Callback::new(move |p| page.set(p))
                />
            </div>
        </PageFrame>
    }
}
