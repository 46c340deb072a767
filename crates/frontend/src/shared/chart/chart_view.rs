use super::echarts::{echarts_available, EChart};
use super::options::build_option;
use crate::layout::global_context::use_app_context;
use contracts::dashboards::d401_sales_reports::{ReportContext, ReportData};
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// ECharts rendering of a report.
///
/// `on_click` receives `(context, category)` for clicks on reports whose
/// context supports drill-down; other reports ignore clicks.
#[component]
pub fn ReportChart(
    #[prop(into)] report: Signal<Option<ReportData>>,
    #[prop(default = None)] on_click: Option<Callback<(ReportContext, String)>>,
    #[prop(optional, default = 400)] height: u32,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let chart = StoredValue::new_local(None::<EChart>);
    let (has_chart, set_has_chart) = signal(true);
    let (clickable, set_clickable) = signal(false);

    Effect::new(move |_| {
        let report = report.get();
        let Some(element) = container.get() else {
            return;
        };
        if !echarts_available() {
            log::error!("ECharts is not loaded, charts are disabled");
            set_has_chart.set(false);
            return;
        }

        let option = report.as_ref().and_then(build_option);
        set_has_chart.set(option.is_some());
        let drill_context = report
            .as_ref()
            .map(|r| r.context)
            .filter(|context| context.is_clickable() && on_click.is_some());
        set_clickable.set(drill_context.is_some());

        chart.update_value(|slot| {
            if slot.is_none() {
                match EChart::init(&element) {
                    Ok(instance) => *slot = Some(instance),
                    Err(err) => {
                        log::error!("Failed to init chart: {:?}", err);
                        return;
                    }
                }
            }
            let Some(instance) = slot.as_mut() else {
                return;
            };

            let result = match option {
                Some(option) => instance.set_option(&option).and_then(|_| {
                    match (drill_context, on_click) {
                        (Some(context), Some(callback)) => {
                            instance.on_click(move |name| callback.run((context, name)))
                        }
                        _ => instance.clear_click(),
                    }
                }),
                None => instance.clear(),
            };
            if let Err(err) = result {
                log::error!("Failed to render chart: {:?}", err);
            }
        });
    });

    // The canvas keeps its first width unless told otherwise
    let resize_chart = move || {
        chart.with_value(|slot| {
            if let Some(Err(err)) = slot.as_ref().map(EChart::resize) {
                log::error!("Failed to resize chart: {:?}", err);
            }
        });
    };
    let ctx = use_app_context();
    Effect::new(move |prev: Option<bool>| {
        let open = ctx.left_open.get();
        if prev.is_some() {
            resize_chart();
        }
        open
    });

    let on_window_resize = Closure::wrap(Box::new(resize_chart) as Box<dyn FnMut()>);
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("resize", on_window_resize.as_ref().unchecked_ref());
    }
    let resize_listener = StoredValue::new_local(Some(on_window_resize));

    on_cleanup(move || {
        resize_listener.update_value(|slot| {
            if let (Some(listener), Some(window)) = (slot.take(), web_sys::window()) {
                let _ = window
                    .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            }
        });
        chart.update_value(|slot| {
            if let Some(instance) = slot.take() {
                instance.dispose();
            }
        });
    });

    view! {
        <div class="report-chart">
            <div
                node_ref=container
                class="report-chart__canvas"
                class:report-chart__canvas--clickable=move || clickable.get()
                style=format!("width: 100%; height: {}px;", height)
            ></div>
            <Show when=move || !has_chart.get()>
                <div class="report-chart__empty">
                    "Não foi possível gerar um gráfico para esta combinação de dados."
                </div>
            </Show>
        </div>
    }
}
