//! HTML rendering of chart datasets

use crate::charts::{RatioChart, ValueSeries};
use serde_json::{Value, json};

/// Turns chart datasets into embeddable HTML fragments
pub trait ChartRenderer {
    /// Treemap of position sizes colored by return. `range` bounds the
    /// symmetric color scale; `None` lets the renderer pick.
    fn render_ratios(&self, chart: &RatioChart, range: Option<f64>) -> String;

    /// Line chart of portfolio value
    fn render_value_series(&self, series: &ValueSeries) -> String;
}

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Renders plotly.js `<div>` + `<script>` fragments
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    /// Prepend a `<script>` tag loading plotly.js
    pub include_plotlyjs: bool,
    pub currency: String,
}

impl Default for PlotlyRenderer {
    fn default() -> Self {
        Self {
            include_plotlyjs: true,
            currency: "RUB".to_string(),
        }
    }
}

impl PlotlyRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn fragment(&self, div_id: &str, data: Value, layout: Value) -> String {
        let mut html = String::new();
        if self.include_plotlyjs {
            html.push_str(&format!(
                "<script type=\"text/javascript\" src=\"{}\"></script>\n",
                PLOTLY_CDN
            ));
        }
        html.push_str(&format!(
            "<div id=\"{id}\" class=\"plotly-graph-div\" style=\"height:100%; width:100%;\"></div>\n\
             <script type=\"text/javascript\">\n\
             Plotly.newPlot(\"{id}\", {data}, {layout}, {{\"responsive\": true}});\n\
             </script>\n",
            id = div_id,
            data = data,
            layout = layout,
        ));
        html
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render_ratios(&self, chart: &RatioChart, range: Option<f64>) -> String {
        let sectors = chart.sectors();

        let mut ids = Vec::new();
        let mut labels = Vec::new();
        let mut parents = Vec::new();
        let mut values = Vec::new();
        let mut returns = Vec::new();
        let mut custom = Vec::new();

        for (sector, position, ret) in &sectors {
            ids.push(sector.clone());
            labels.push(sector.clone());
            parents.push(String::new());
            values.push(*position);
            returns.push(*ret);
            custom.push(json!([position, ret]));
        }
        for row in &chart.rows {
            ids.push(format!("{}/{}", row.sector, row.ticker));
            labels.push(row.ticker.clone());
            parents.push(row.sector.clone());
            values.push(row.position);
            returns.push(row.return_pct);
            custom.push(json!([row.position, row.return_pct]));
        }

        let mut marker = json!({
            "colors": returns,
            "colorscale": [[0.0, "red"], [0.5, "yellow"], [1.0, "green"]],
            "cmid": 0.0,
            "showscale": true,
            "colorbar": {"title": {"text": "return"}},
        });
        if let Some(bound) = range {
            marker["cmin"] = json!(-bound);
            marker["cmax"] = json!(bound);
        }

        let trace = json!({
            "type": "treemap",
            "ids": ids,
            "labels": labels,
            "parents": parents,
            "values": values,
            "branchvalues": "total",
            "marker": marker,
            "customdata": custom,
            "texttemplate": format!(
                "%{{label}}<br>Position:\t%{{customdata[0]:,}} {}<br>Return:\t%{{customdata[1]:.2f}}%",
                self.currency
            ),
            "hovertemplate": "%{id}<br>position=%{value}<br>return=%{customdata[1]:.4f}<extra></extra>",
        });
        let layout = json!({"margin": {"t": 50, "l": 25, "r": 25, "b": 25}});

        self.fragment("folio-ratios", json!([trace]), layout)
    }

    fn render_value_series(&self, series: &ValueSeries) -> String {
        let x: Vec<String> = series.points.iter().map(|p| p.time.to_rfc3339()).collect();
        let y: Vec<f64> = series.points.iter().map(|p| p.value.round()).collect();

        let trace = json!({
            "type": "scatter",
            "mode": "lines+markers",
            "x": x,
            "y": y,
            "name": "portfolio",
        });
        let layout = json!({
            "margin": {"t": 50, "l": 25, "r": 25, "b": 25},
            "xaxis": {"title": {"text": "date"}},
            "yaxis": {"title": {"text": format!("value, {}", self.currency)}},
        });

        self.fragment("folio-value", json!([trace]), layout)
    }
}
