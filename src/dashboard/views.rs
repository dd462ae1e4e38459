//! Per-view rendering. One draw function per sidebar entry.

use ratatui::{
    prelude::*,
    widgets::{BarChart, Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table, Wrap},
};

use crate::analysis::{CorrelationMatrix, HistogramBin};
use crate::model::Classifier;
use crate::store::REQUIRED_COLUMNS;

use super::{DashboardApp, Focus, FormField, View};

const SIDEBAR_WIDTH: u16 = 24;

pub(super) fn draw(frame: &mut Frame, app: &DashboardApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, outer[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(outer[1]);

    draw_sidebar(frame, body[0], app);

    match app.view {
        View::Overview => draw_overview(frame, body[1], app),
        View::Eda => draw_eda(frame, body[1], app),
        View::ModelPerformance => draw_performance(frame, body[1], app),
        View::FeatureImportance => draw_importance(frame, body[1], app),
        View::Recommendations => draw_recommendations(frame, body[1]),
        View::PredictionDemo => draw_prediction(frame, body[1], app),
    }

    draw_footer(frame, outer[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Line::from(vec![
        Span::styled("  ◎ Churnscope ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            "  ·  Customer Churn Analysis Dashboard",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(match app.focus {
            Focus::Sidebar => Style::default().fg(Color::Cyan),
            Focus::Form => Style::default().fg(Color::DarkGray),
        })
        .title(" Navigation ")
        .title_style(Style::default().fg(Color::Cyan).bold());

    let items: Vec<ListItem> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let marker = if *view == app.view { "▸" } else { " " };
            let style = if *view == app.view {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {} {}. {:<18}", marker, i + 1, view.title()),
                style,
            )))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let hint = match app.focus {
        Focus::Sidebar if app.view == View::PredictionDemo => {
            "  ↑↓ select view · 1-6 jump · enter edit form · q quit"
        }
        Focus::Sidebar => "  ↑↓ select view · 1-6 jump · q quit",
        Focus::Form => "  ↑↓ field · ←→ adjust · pgup/pgdn ±10 · enter predict · esc back",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        area,
    );
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

fn draw_overview(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(app.charts.head.len() as u16 + 4),
            Constraint::Min(8),
        ])
        .split(area);

    let (n_rows, n_cols) = app.charts.shape;
    let stats = Paragraph::new(Line::from(vec![
        Span::styled("  Rows: ", Style::default().fg(Color::DarkGray)),
        Span::styled(n_rows.to_string(), Style::default().fg(Color::Yellow).bold()),
        Span::styled("   Columns: ", Style::default().fg(Color::DarkGray)),
        Span::styled(n_cols.to_string(), Style::default().fg(Color::Yellow).bold()),
        Span::styled("   Estimated memory: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.2} MB", app.charts.memory_mb),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Dataset ")
            .title_style(Style::default().fg(Color::Cyan).bold()),
    );
    frame.render_widget(stats, rows[0]);

    let header = Row::new(
        REQUIRED_COLUMNS
            .iter()
            .map(|name| Cell::from(*name).style(Style::default().fg(Color::Cyan).bold())),
    );
    let body = app
        .charts
        .head
        .iter()
        .map(|row| Row::new(row.iter().map(|value| Cell::from(value.as_str()))));
    let widths = [
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(28),
        Constraint::Length(17),
        Constraint::Length(6),
    ];
    let preview = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Preview ")
            .title_style(Style::default().fg(Color::Cyan).bold()),
    );
    frame.render_widget(preview, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[2]);

    let labels: Vec<String> = app
        .charts
        .churn
        .iter()
        .map(|slice| format!("{} {:.1}%", slice.label, slice.share))
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .map(String::as_str)
        .zip(app.charts.churn.iter().map(|slice| slice.count))
        .collect();
    let distribution = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Churn Distribution ")
                .title_style(Style::default().fg(Color::Cyan).bold()),
        )
        .data(data.as_slice())
        .bar_width(12)
        .bar_gap(3)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold());
    frame.render_widget(distribution, bottom[0]);

    let insight = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  The dataset is imbalanced: most customers stay,",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  far fewer churn.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Accuracy alone is therefore misleading — judge the",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  models on Recall, F1 and ROC-AUC instead.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Key Insight ")
            .title_style(Style::default().fg(Color::Yellow).bold()),
    );
    frame.render_widget(insight, bottom[1]);
}

// ---------------------------------------------------------------------------
// EDA
// ---------------------------------------------------------------------------

fn draw_eda(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(52), Constraint::Percentage(48)])
        .split(area);

    let histograms = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    draw_histogram(
        frame,
        histograms[0],
        " Tenure by churn (months) ",
        &app.charts.tenure_hist,
    );
    draw_histogram(
        frame,
        histograms[1],
        " Monthly charges by churn ($) ",
        &app.charts.charges_hist,
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.charts.heatmap.len() as u16 + 3),
            Constraint::Min(4),
        ])
        .split(columns[1]);

    draw_heatmap(frame, right[0], &app.charts.heatmap);
    draw_strongest_pairs(frame, right[1], app);
}

fn draw_histogram(frame: &mut Frame, area: Rect, title: &str, bins: &[HistogramBin]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(vec![
        Span::styled("  █ ", Style::default().fg(Color::Green)),
        Span::styled("stayed   ", Style::default().fg(Color::DarkGray)),
        Span::styled("█ ", Style::default().fg(Color::Red)),
        Span::styled("churned", Style::default().fg(Color::DarkGray)),
    ])];

    let max_total = bins.iter().map(HistogramBin::total).max().unwrap_or(0);
    let bar_width = inner.width.saturating_sub(26) as u64;

    for bin in bins {
        if max_total == 0 || bar_width == 0 {
            break;
        }
        let stayed_cells = (bin.stayed * bar_width + max_total / 2) / max_total;
        let churned_cells = (bin.churned * bar_width + max_total / 2) / max_total;

        lines.push(Line::from(vec![
            Span::styled(
                format!("  [{:>3},{:>3}) ", bin.lower, bin.upper),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                "█".repeat(stayed_cells as usize),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                "█".repeat(churned_cells as usize),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                format!(" {}/{}", bin.stayed, bin.churned),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn correlation_color(r: f64) -> Color {
    let t = r.clamp(-1.0, 1.0);
    let lerp = |from: u8, to: u8| (f64::from(from) + (f64::from(to) - f64::from(from)) * t.abs()) as u8;
    if t < 0.0 {
        // toward blue
        Color::Rgb(lerp(45, 52), lerp(45, 107), lerp(45, 184))
    } else {
        // toward red
        Color::Rgb(lerp(45, 196), lerp(45, 64), lerp(45, 54))
    }
}

fn draw_heatmap(frame: &mut Frame, area: Rect, matrix: &CorrelationMatrix) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Correlation Heatmap (numeric columns) ")
        .title_style(Style::default().fg(Color::Cyan).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if matrix.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "  No numeric columns to correlate.",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    const CELL_WIDTH: usize = 7;
    const LABEL_WIDTH: usize = 10;

    let mut lines = Vec::with_capacity(matrix.len() + 1);

    let mut header = vec![Span::raw(" ".repeat(LABEL_WIDTH + 1))];
    for name in &matrix.columns {
        header.push(Span::styled(
            format!("{:^width$}", short_label(name, CELL_WIDTH - 1), width = CELL_WIDTH),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(header));

    for (i, name) in matrix.columns.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!(" {:<width$}", short_label(name, LABEL_WIDTH), width = LABEL_WIDTH),
            Style::default().fg(Color::DarkGray),
        )];
        for j in 0..matrix.len() {
            let value = matrix.values[i][j];
            spans.push(Span::styled(
                format!("{:^+width$.2}", value, width = CELL_WIDTH),
                Style::default()
                    .fg(Color::White)
                    .bg(correlation_color(value)),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn short_label(name: &str, max: usize) -> String {
    if name.len() <= max {
        name.to_string()
    } else {
        name.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}

fn draw_strongest_pairs(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Strongest Correlations ")
        .title_style(Style::default().fg(Color::Cyan).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.charts.strongest.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "  No pairs above |r| = 0.30.",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = app
        .charts
        .strongest
        .iter()
        .map(|pair| {
            let color = if pair.correlation >= 0.0 {
                Color::Red
            } else {
                Color::Blue
            };
            Line::from(vec![
                Span::styled(
                    format!("  {} ↔ {}  ", pair.feature1, pair.feature2),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:+.2}", pair.correlation),
                    Style::default().fg(color).bold(),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

// ---------------------------------------------------------------------------
// Model Performance
// ---------------------------------------------------------------------------

fn draw_performance(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(area);

    let header = Row::new(
        ["Model", "Accuracy", "Recall", "F1-Score", "ROC-AUC"]
            .iter()
            .map(|name| Cell::from(*name).style(Style::default().fg(Color::Cyan).bold())),
    );
    let body = app.store.classifiers().map(|model| {
        let metrics = model.metrics();
        Row::new([
            Cell::from(model.label().to_string()).style(Style::default().fg(Color::White).bold()),
            Cell::from(format!("{:.2}", metrics.accuracy)),
            Cell::from(format!("{:.2}", metrics.recall)),
            Cell::from(format!("{:.2}", metrics.f1)),
            Cell::from(format!("{:.2}", metrics.roc_auc))
                .style(Style::default().fg(Color::Yellow)),
        ])
    });
    let widths = [
        Constraint::Length(22),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Evaluation Metrics (held-out test set) ")
            .title_style(Style::default().fg(Color::Cyan).bold()),
    );
    frame.render_widget(table, rows[0]);

    let notes = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Logistic Regression", Style::default().fg(Color::White).bold()),
            Span::styled(
                " — strongest choice when explainability matters.",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Random Forest", Style::default().fg(Color::White).bold()),
            Span::styled(
                " — strongest choice for operational predictions.",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Both models reach a comparable ROC-AUC; they rank customers",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  similarly and differ mainly in how their scores are calibrated.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Reading the numbers ")
            .title_style(Style::default().fg(Color::Yellow).bold()),
    );
    frame.render_widget(notes, rows[1]);
}

// ---------------------------------------------------------------------------
// Feature Importance
// ---------------------------------------------------------------------------

fn draw_importance(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Feature Importance (forest artifact) ")
        .title_style(Style::default().fg(Color::Cyan).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = app.store.forest.sorted_importances();
    if entries.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "  The forest artifact carries no importance values.",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    let max_weight = entries
        .iter()
        .map(|entry| entry.weight)
        .fold(f64::MIN, f64::max)
        .max(f64::EPSILON);
    let bar_width = inner.width.saturating_sub(44) as f64;

    let mut lines = vec![Line::from("")];
    for entry in &entries {
        let cells = ((entry.weight / max_weight) * bar_width).round() as usize;
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<32}", entry.label),
                Style::default().fg(Color::White),
            ),
            Span::styled("█".repeat(cells.max(1)), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" {:>4.0}%", entry.weight * 100.0),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

fn draw_recommendations(frame: &mut Frame, area: Rect) {
    let bullet = |text: &str| {
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Color::Green).bold()),
            Span::styled(text.to_string(), Style::default().fg(Color::White)),
        ])
    };

    let recommendations = Paragraph::new(vec![
        Line::from(""),
        bullet("Focus retention effort on new customers — churn concentrates at low tenure."),
        Line::from(""),
        bullet("Promote one-year and two-year contracts over month-to-month."),
        Line::from(""),
        bullet("Offer targeted discounts to customers with high monthly bills."),
        Line::from(""),
        bullet("Investigate dissatisfaction among fiber-optic subscribers."),
        Line::from(""),
        bullet("Encourage automatic bank-transfer or credit-card payment over electronic checks."),
        Line::from(""),
        bullet("Cross-sell Tech Support, Online Security and Backup add-ons."),
        Line::from(""),
        bullet("Tailor offers for senior citizens."),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Business Recommendations ")
            .title_style(Style::default().fg(Color::Cyan).bold()),
    );
    frame.render_widget(recommendations, area);
}

// ---------------------------------------------------------------------------
// Prediction Demo
// ---------------------------------------------------------------------------

fn draw_prediction(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(8)])
        .split(area);

    draw_prediction_form(frame, rows[0], app);
    draw_prediction_results(frame, rows[1], app);
}

fn slider_spans(value: u32, max: u32, width: usize) -> Vec<Span<'static>> {
    let filled =
        (((f64::from(value) / f64::from(max)) * width as f64).round() as usize).min(width);
    vec![
        Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled("░".repeat(width - filled), Style::default().fg(Color::DarkGray)),
    ]
}

fn draw_prediction_form(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let form = &app.form;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(match app.focus {
            Focus::Form => Style::default().fg(Color::Cyan),
            Focus::Sidebar => Style::default().fg(Color::DarkGray),
        })
        .title(" Customer Details ")
        .title_style(Style::default().fg(Color::Cyan).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    const SLIDER_WIDTH: usize = 24;

    let mut lines = Vec::with_capacity(FormField::ALL.len() + 1);
    for field in FormField::ALL {
        let focused = app.focus == Focus::Form && form.field == field;
        let marker = if focused { " ▸ " } else { "   " };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::Yellow).bold()),
            Span::styled(format!("{:<22}", field.label()), label_style),
        ];
        match field {
            FormField::Tenure => {
                spans.extend(slider_spans(form.tenure, crate::model::TENURE_MAX, SLIDER_WIDTH));
                spans.push(Span::styled(
                    format!(" {:>3}", form.tenure),
                    Style::default().fg(Color::Yellow).bold(),
                ));
            }
            FormField::MonthlyCharges => {
                spans.extend(slider_spans(
                    form.monthly_charges,
                    crate::model::MONTHLY_CHARGES_MAX,
                    SLIDER_WIDTH,
                ));
                spans.push(Span::styled(
                    format!(" {:>3}", form.monthly_charges),
                    Style::default().fg(Color::Yellow).bold(),
                ));
            }
            FormField::Contract
            | FormField::PaymentMethod
            | FormField::InternetService => {
                let profile = form.profile();
                let value = match field {
                    FormField::Contract => profile.contract.as_str(),
                    FormField::PaymentMethod => profile.payment_method.as_str(),
                    _ => profile.internet_service.as_str(),
                };
                spans.push(Span::styled("◀ ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::styled(
                    format!("{:^26}", value),
                    Style::default().fg(Color::White).bold(),
                ));
                spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));
            }
            FormField::Predict => {
                let style = if focused {
                    Style::default().fg(Color::Black).bg(Color::Green).bold()
                } else {
                    Style::default().fg(Color::Green).bold()
                };
                spans.pop();
                spans.push(Span::styled("[ Predict ]", style));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn risk_color(probability: f64) -> Color {
    if probability < 0.3 {
        Color::Green
    } else if probability < 0.6 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn draw_prediction_results(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let Some(outcome) = &app.form.outcome else {
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  Set the customer details above and press Predict to score",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    "  this customer with both models.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Churn Probability ")
                    .title_style(Style::default().fg(Color::Cyan).bold()),
            ),
            area,
        );
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Churn Probability ")
        .title_style(Style::default().fg(Color::Cyan).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let gauges = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let scores = [
        (app.store.logistic.label(), outcome.logistic),
        (app.store.forest.label(), outcome.forest),
    ];
    for ((label, probability), slot) in scores.into_iter().zip(gauges.iter()) {
        let gauge = Gauge::default()
            .block(Block::default().title(Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::White).bold(),
            )))
            .gauge_style(Style::default().fg(risk_color(probability)))
            .ratio(probability.clamp(0.0, 1.0))
            .label(format!("{:.1}%", probability * 100.0));
        frame.render_widget(gauge, *slot);
    }
}
