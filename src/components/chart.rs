//! Chart Component
//!
//! Cumulative winnings chart using HTML5 Canvas. Draws whichever view
//! the ledger currently selects: one player's run, or every player
//! overlaid on the shared ticket axis.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::ledger::{all_players_series, single_player_series, PlayerLedger, ViewMode};
use crate::state::global::GlobalState;

/// Chart colors for different series
const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

/// Cumulative totals chart for the current view selection
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever players, earnings, or the selection change
    create_effect(move |_| {
        let ledger = state.ledger.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &ledger);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />

            // Legend
            <ChartLegend />
        </div>
    }
}

/// Chart legend showing series colors
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let entries = create_memo(move |_| {
        state.ledger.with(|ledger| match ledger.view() {
            ViewMode::None => Vec::new(),
            ViewMode::Single(name) => vec![name.clone()],
            ViewMode::All => ledger.players().iter().map(|p| p.name.clone()).collect(),
        })
    });

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                entries.get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, name)| {
                        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{name}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// A line ready to draw: one y slot per axis label, `None` where the
/// player has no entry for that ticket.
struct RenderSeries {
    values: Vec<Option<f64>>,
    color: &'static str,
}

/// Project the current view into axis labels plus drawable series.
fn view_series(ledger: &PlayerLedger) -> (Vec<String>, Vec<RenderSeries>) {
    match ledger.view() {
        ViewMode::None => (Vec::new(), Vec::new()),
        ViewMode::Single(name) => match ledger.player(name) {
            Some(player) => {
                let points = single_player_series(player);
                let labels = points.iter().map(|p| p.ticket.clone()).collect();
                let values = points.iter().map(|p| Some(p.total)).collect();
                (
                    labels,
                    vec![RenderSeries {
                        values,
                        color: SERIES_COLORS[0],
                    }],
                )
            }
            None => (Vec::new(), Vec::new()),
        },
        ViewMode::All => {
            let table = all_players_series(ledger.players());
            let series = table
                .series
                .iter()
                .enumerate()
                .map(|(idx, row)| RenderSeries {
                    values: row.totals.clone(),
                    color: SERIES_COLORS[idx % SERIES_COLORS.len()],
                })
                .collect();
            (table.tickets, series)
        }
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, ledger: &PlayerLedger) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let (labels, series) = view_series(ledger);

    // Draw a hint instead of empty axes
    if labels.is_empty() {
        let hint = match ledger.view() {
            ViewMode::None => "Pick a player or compare the field",
            _ => "No tickets recorded yet",
        };
        ctx.set_fill_style(&"#6b7280".into()); // gray-500
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text(hint, width / 2.0 - 90.0, height / 2.0);
        return;
    }

    // Find global min/max for the y-axis across every drawn value
    let mut global_min = f64::INFINITY;
    let mut global_max = f64::NEG_INFINITY;

    for line in &series {
        for value in line.values.iter().flatten() {
            global_min = global_min.min(*value);
            global_max = global_max.max(*value);
        }
    }

    if !global_min.is_finite() || !global_max.is_finite() {
        return;
    }

    // Add padding to y range
    let y_range = global_max - global_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    global_min -= y_padding;
    global_max += y_padding;

    // Draw grid lines
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = global_max - (i as f64 / 5.0) * (global_max - global_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Label slots are evenly spaced; a lone ticket sits centered
    let slots = labels.len();
    let x_at = |i: usize| {
        if slots == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (slots - 1) as f64) * chart_width
        }
    };

    // Scale y to chart area (inverted because canvas y grows downward)
    let y_at =
        |value: f64| margin_top + ((global_max - value) / (global_max - global_min)) * chart_height;

    // Draw each series
    for line in &series {
        ctx.set_stroke_style(&line.color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        // The pen lifts over missing tickets so gaps stay gaps
        let mut pen_down = false;
        for (i, value) in line.values.iter().enumerate() {
            match value {
                Some(v) => {
                    let x = x_at(i);
                    let y = y_at(*v);
                    if pen_down {
                        ctx.line_to(x, y);
                    } else {
                        ctx.move_to(x, y);
                        pen_down = true;
                    }
                }
                None => pen_down = false,
            }
        }
        ctx.stroke();

        // Draw points
        ctx.set_fill_style(&line.color.into());
        for (i, value) in line.values.iter().enumerate() {
            if let Some(v) = value {
                ctx.begin_path();
                let _ = ctx.arc(x_at(i), y_at(*v), 3.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }

    // Draw x-axis ticket labels, thinned out when the axis gets crowded
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let step = (slots / 6).max(1);
    for (i, label) in labels.iter().enumerate() {
        if i % step != 0 && i != slots - 1 {
            continue;
        }
        let _ = ctx.fill_text(label, x_at(i) - 18.0, height - 10.0);
    }
}
