//! Thin bridge to the ECharts library loaded by `index.html` (`window.echarts`)

use super::options::{AxisFormat, AXIS_FORMAT_KEY};
use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Tooltip text: series points carry a pre-formatted `formatted` field
const TOOLTIP_FORMATTER: &str = r#"
var items = Array.isArray(params) ? params : [params];
var lines = [];
if (Array.isArray(params) && items.length > 0) { lines.push(items[0].axisValueLabel); }
items.forEach(function (p) {
    var d = p.data || {};
    var text = d.formatted !== undefined ? d.formatted : p.value;
    var label = Array.isArray(params) ? p.seriesName : p.name;
    var pct = p.percent !== undefined ? ' (' + p.percent + '%)' : '';
    lines.push(p.marker + label + ': <b>' + text + '</b>' + pct);
});
return lines.join('<br/>');
"#;

/// Value-axis label bodies, same rules as the table cells
fn axis_label_formatter(format: AxisFormat) -> &'static str {
    match format {
        AxisFormat::Money => {
            "return new Intl.NumberFormat('pt-BR', { style: 'currency', currency: 'BRL' }).format(value);"
        }
        AxisFormat::Minutes => "return Number(value).toFixed(2) + ' min';",
        AxisFormat::Number => {
            "return Number.isInteger(value) ? String(value) : Number(value).toFixed(2);"
        }
    }
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
}

fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
    get(target, name)?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("{} is not a function", name)))
}

/// Whether the host page loaded ECharts
pub fn echarts_available() -> bool {
    web_sys::window()
        .and_then(|w| get(&w, "echarts").ok())
        .map(|v| v.is_object())
        .unwrap_or(false)
}

/// One chart instance bound to a DOM element
pub struct EChart {
    instance: JsValue,
    click_handler: Option<Closure<dyn FnMut(JsValue)>>,
}

impl EChart {
    pub fn init(element: &HtmlElement) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
        let echarts = get(&window, "echarts")?;
        if !echarts.is_object() {
            return Err(JsValue::from_str("ECharts is not loaded"));
        }
        let instance = method(&echarts, "init")?.call1(&echarts, element)?;
        Ok(Self {
            instance,
            click_handler: None,
        })
    }

    /// Replaces the whole option (`notMerge = true`)
    pub fn set_option(&self, option: &serde_json::Value) -> Result<(), JsValue> {
        let js_option = option
            .serialize(&Serializer::json_compatible())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        let tooltip = get(&js_option, "tooltip")?;
        if tooltip.is_object() {
            let formatter = Function::new_with_args("params", TOOLTIP_FORMATTER);
            Reflect::set(&tooltip, &JsValue::from_str("formatter"), &formatter)?;
        }

        let y_axis = get(&js_option, "yAxis")?;
        if y_axis.is_object() {
            let mut axis_label = get(&y_axis, "axisLabel")?;
            if !axis_label.is_object() {
                axis_label = js_sys::Object::new().into();
                Reflect::set(&y_axis, &JsValue::from_str("axisLabel"), &axis_label)?;
            }
            let format = get(&axis_label, AXIS_FORMAT_KEY)?
                .as_string()
                .map(|f| AxisFormat::parse(&f))
                .unwrap_or(AxisFormat::Number);
            let formatter = Function::new_with_args("value", axis_label_formatter(format));
            Reflect::set(&axis_label, &JsValue::from_str("formatter"), &formatter)?;
        }

        method(&self.instance, "setOption")?.call2(&self.instance, &js_option, &JsValue::TRUE)?;
        Ok(())
    }

    /// Refits the chart to its container
    pub fn resize(&self) -> Result<(), JsValue> {
        method(&self.instance, "resize")?.call0(&self.instance)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), JsValue> {
        method(&self.instance, "clear")?.call0(&self.instance)?;
        Ok(())
    }

    /// Calls `handler` with the category/slice name of a clicked element.
    /// Replaces any previous handler.
    pub fn on_click(&mut self, handler: impl Fn(String) + 'static) -> Result<(), JsValue> {
        self.clear_click()?;

        let closure = Closure::wrap(Box::new(move |params: JsValue| {
            if let Some(name) = get(&params, "name").ok().and_then(|v| v.as_string()) {
                handler(name);
            }
        }) as Box<dyn FnMut(JsValue)>);

        method(&self.instance, "on")?.call2(
            &self.instance,
            &JsValue::from_str("click"),
            closure.as_ref(),
        )?;
        self.click_handler = Some(closure);
        Ok(())
    }

    /// Removes the click handler, if any
    pub fn clear_click(&mut self) -> Result<(), JsValue> {
        method(&self.instance, "off")?.call1(&self.instance, &JsValue::from_str("click"))?;
        self.click_handler = None;
        Ok(())
    }

    pub fn dispose(self) {
        if let Ok(dispose) = method(&self.instance, "dispose") {
            let _ = dispose.call0(&self.instance);
        }
        drop(self.click_handler);
    }
}
