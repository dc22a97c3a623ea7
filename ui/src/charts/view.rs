use dioxus::prelude::*;

use crate::charts::config::ChartConfig;
use crate::charts::figure::Figure;
use crate::charts::svg;

/// plotly.js bundle providing hover, pan and zoom on the client.
pub const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// One chart container. Server output holds the SVG preview; once mounted
/// in a browser the element is handed to `Plotly.newPlot`.
#[component]
pub fn Chart(id: String, config: ChartConfig) -> Element {
    let figure = match Figure::from(&config).to_json() {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::error!(chart = %id, "figure serialisation failed: {err}");
            None
        }
    };
    let preview = svg::render_preview(&config);
    let height = match config.options().height {
        Some(px) => format!("{px}px"),
        None => "100%".to_string(),
    };

    let bootstrap = figure.as_deref().map(|json| plot_script(&id, json));
    let chart_id = id.clone();
    use_effect(move || {
        let Some(script) = bootstrap.as_deref() else {
            return;
        };
        let eval = document::eval(script);
        let chart_id = chart_id.clone();
        spawn(async move {
            if let Err(err) = eval.await {
                tracing::warn!(chart = %chart_id, "plotly bootstrap failed: {err}");
            }
        });
    });

    rsx! {
        div {
            id: "{id}",
            class: "chart",
            style: "height: {height}",
            dangerous_inner_html: "{preview}",
        }
    }
}

/// Polls until plotly.js has loaded, then replaces the preview in `id`.
/// Returns a value so the awaited eval resolves instead of erroring.
fn plot_script(id: &str, figure_json: &str) -> String {
    let id_literal = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "(function draw() {{\
            var el = document.getElementById({id_literal});\
            if (!el) {{ return; }}\
            if (!window.Plotly) {{ setTimeout(draw, 50); return; }}\
            var fig = {figure_json};\
            fig.config = {{ responsive: true, displaylogo: false }};\
            el.innerHTML = '';\
            window.Plotly.newPlot(el, fig);\
        }})();\
        return true;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_script_quotes_the_element_id() {
        let script = plot_script("main-chart", "{\"data\":[]}");
        assert!(script.contains("getElementById(\"main-chart\")"));
        assert!(script.contains("var fig = {\"data\":[]};"));
        assert!(script.contains("newPlot(el, fig)"));
    }

    #[test]
    fn plot_script_returns_a_value_for_the_awaited_eval() {
        let script = plot_script("aux-chart-0", "{}");
        assert!(script.trim_end().ends_with("return true;"));
    }
}
