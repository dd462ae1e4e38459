//! The interactive dashboard: six mutually exclusive views behind a
//! sidebar single-select.
//!
//! The sidebar selection *is* the active view; last selection wins and
//! exactly one view renders per frame. Views hold no state of their own —
//! the only mutable UI state is the prediction form, which is reset
//! whenever the user navigates away from the Prediction Demo view.

mod form;
mod views;

pub use form::{FormField, PredictionForm};

use std::io::{self, stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use polars::prelude::DataFrame;
use ratatui::prelude::*;

use crate::analysis::{
    churn_breakdown, correlation_matrix, head_preview, stacked_histogram, strongest_pairs,
    ChurnSlice, CorrelatedPair, CorrelationMatrix, HistogramBin,
};
use crate::store::{ArtifactStore, REQUIRED_COLUMNS};

/// Tenure histogram bin width, in months.
const TENURE_BIN_WIDTH: f64 = 6.0;
/// Monthly-charges histogram bin width, in currency units.
const CHARGES_BIN_WIDTH: f64 = 10.0;
/// Minimum |r| for the strongest-pairs list under the heatmap.
const STRONG_PAIR_THRESHOLD: f64 = 0.3;
/// Rows shown in the Overview dataset preview.
const HEAD_PREVIEW_ROWS: usize = 5;

/// The six dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Overview,
    Eda,
    ModelPerformance,
    FeatureImportance,
    Recommendations,
    PredictionDemo,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Overview,
        View::Eda,
        View::ModelPerformance,
        View::FeatureImportance,
        View::Recommendations,
        View::PredictionDemo,
    ];

    /// Sidebar option label.
    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Eda => "EDA",
            View::ModelPerformance => "Model Performance",
            View::FeatureImportance => "Feature Importance",
            View::Recommendations => "Recommendations",
            View::PredictionDemo => "Prediction Demo",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }
}

/// Which pane receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Form,
}

/// Chart data derived once from the immutable dataset.
pub struct ChartData {
    pub shape: (usize, usize),
    pub memory_mb: f64,
    pub head: Vec<Vec<String>>,
    pub churn: Vec<ChurnSlice>,
    pub tenure_hist: Vec<HistogramBin>,
    pub charges_hist: Vec<HistogramBin>,
    pub heatmap: CorrelationMatrix,
    pub strongest: Vec<CorrelatedPair>,
}

impl ChartData {
    pub fn compute(df: &DataFrame) -> Result<Self> {
        Ok(Self {
            shape: df.shape(),
            memory_mb: df.estimated_size() as f64 / (1024.0 * 1024.0),
            head: head_preview(df, &REQUIRED_COLUMNS, HEAD_PREVIEW_ROWS)?,
            churn: churn_breakdown(df)?,
            tenure_hist: stacked_histogram(df, "tenure", TENURE_BIN_WIDTH)?,
            charges_hist: stacked_histogram(df, "MonthlyCharges", CHARGES_BIN_WIDTH)?,
            heatmap: correlation_matrix(df)?,
            strongest: strongest_pairs(df, STRONG_PAIR_THRESHOLD)?,
        })
    }
}

/// Dashboard state: the shared artifacts, the precomputed chart data, and
/// the small amount of UI state the event loop mutates.
pub struct DashboardApp<'a> {
    pub store: &'a ArtifactStore,
    pub charts: ChartData,
    pub view: View,
    pub focus: Focus,
    pub form: PredictionForm,
}

impl<'a> DashboardApp<'a> {
    pub fn new(store: &'a ArtifactStore) -> Result<Self> {
        Ok(Self {
            store,
            charts: ChartData::compute(&store.dataset)?,
            view: View::Overview,
            focus: Focus::Sidebar,
            form: PredictionForm::default(),
        })
    }

    /// Make the view at `index` active. Navigating away from the
    /// Prediction Demo resets the form, so no entered value survives a
    /// view switch.
    pub fn select(&mut self, index: usize) {
        let next = View::ALL[index.min(View::ALL.len() - 1)];
        if next != self.view && self.view == View::PredictionDemo {
            self.form = PredictionForm::default();
        }
        self.view = next;
    }
}

/// Run the dashboard until the user quits.
pub fn run_dashboard(store: &ArtifactStore) -> Result<()> {
    let mut app = DashboardApp::new(store)?;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
) -> Result<()> {
    loop {
        terminal.draw(|frame| views::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.focus {
                Focus::Sidebar => match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(());
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app.select(app.view.index().saturating_sub(1));
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app.select(app.view.index() + 1);
                    }
                    KeyCode::Char(c @ '1'..='6') => {
                        app.select(c as usize - '1' as usize);
                    }
                    KeyCode::Enter | KeyCode::Tab | KeyCode::Right => {
                        if app.view == View::PredictionDemo {
                            app.focus = Focus::Form;
                        }
                    }
                    _ => {}
                },
                Focus::Form => match key.code {
                    KeyCode::Esc | KeyCode::Tab => {
                        app.focus = Focus::Sidebar;
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app.form.previous_field();
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app.form.next_field();
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        app.form.adjust(-1);
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        app.form.adjust(1);
                    }
                    KeyCode::PageUp => {
                        app.form.adjust(10);
                    }
                    KeyCode::PageDown => {
                        app.form.adjust(-10);
                    }
                    KeyCode::Enter => {
                        if app.form.field == FormField::Predict {
                            // An artifact incompatibility here is fatal per the
                            // load-time contract; propagate and tear down.
                            let outcome = app.store.predict(&app.form.profile())?;
                            app.form.outcome = Some(outcome);
                        } else {
                            app.form.next_field();
                        }
                    }
                    _ => {}
                },
            }
        }
    }
}
