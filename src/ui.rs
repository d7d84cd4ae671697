use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Dataset, Gauge, GraphType,
        Paragraph, Row, Table, TableState, Wrap,
    },
    Frame, Terminal,
};
use sme_health::advisor::{recent_records, ADVISOR_CONTEXT_MONTHS};
use sme_health::report::format_amount;
use sme_health::{
    ask, Advisor, FinancialReport, Forecast, Forecaster, HealthScoreCalculator, RecordSet,
    RiskAssessment, RiskEngine, RiskThresholds, Tone, DEFAULT_COMPANY, DEFAULT_REPORT_FILE,
};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    RiskAnalysis,
    BusinessIntelligence,
    Advisor,
    Dataset,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::RiskAnalysis,
        Page::BusinessIntelligence,
        Page::Advisor,
        Page::Dataset,
    ];

    pub fn next(&self) -> Self {
        match self {
            Page::Dashboard => Page::RiskAnalysis,
            Page::RiskAnalysis => Page::BusinessIntelligence,
            Page::BusinessIntelligence => Page::Advisor,
            Page::Advisor => Page::Dataset,
            Page::Dataset => Page::Dashboard,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Dashboard => Page::Dataset,
            Page::RiskAnalysis => Page::Dashboard,
            Page::BusinessIntelligence => Page::RiskAnalysis,
            Page::Advisor => Page::BusinessIntelligence,
            Page::Dataset => Page::Advisor,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::RiskAnalysis => "Risk Analysis",
            Page::BusinessIntelligence => "Business Intelligence",
            Page::Advisor => "AI Advisor",
            Page::Dataset => "Report & Dataset",
        }
    }
}

pub struct App {
    pub company: String,
    pub records: RecordSet,
    pub thresholds: RiskThresholds,
    /// Records never change during a session, so the verdicts are computed once
    pub assessment: RiskAssessment,
    pub health_score: u32,
    pub forecast: Option<Forecast>,
    pub selected_month: usize,
    pub current_page: Page,
    pub table_state: TableState,
    pub advisor: Box<dyn Advisor>,
    pub editing: bool,
    pub input: String,
    pub answer: Option<String>,
    pub status: Option<String>,
}

impl App {
    pub fn new(records: RecordSet, thresholds: RiskThresholds, advisor: Box<dyn Advisor>) -> Result<Self> {
        let assessment = RiskEngine::with_thresholds(&records, thresholds.clone())?.assess();
        let health_score =
            HealthScoreCalculator::with_thresholds(&records, thresholds.health.clone())?
                .calculate_score();
        let forecast = Forecaster::new(&records).ok().map(|f| f.predict_next_month());

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Ok(Self {
            company: DEFAULT_COMPANY.to_string(),
            records,
            thresholds,
            assessment,
            health_score,
            forecast,
            selected_month: 0,
            current_page: Page::Dashboard,
            table_state,
            advisor,
            editing: false,
            input: String::new(),
            answer: None,
            status: None,
        })
    }

    pub fn with_company(mut self, company: &str) -> Self {
        if !company.trim().is_empty() {
            self.company = company.trim().to_string();
        }
        self
    }

    /// Select a month by its label. Returns false if no record has it.
    pub fn select_month_label(&mut self, label: &str) -> bool {
        match self.records.find_month(label.trim()) {
            Some(index) => {
                self.select_month(index);
                true
            }
            None => false,
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    fn select_month(&mut self, index: usize) {
        self.selected_month = index;
        self.table_state.select(Some(index));
    }

    pub fn next_month(&mut self) {
        let len = self.records.len();
        if len == 0 {
            return;
        }
        let i = if self.selected_month >= len - 1 { 0 } else { self.selected_month + 1 };
        self.select_month(i);
    }

    pub fn previous_month(&mut self) {
        let len = self.records.len();
        if len == 0 {
            return;
        }
        let i = if self.selected_month == 0 { len - 1 } else { self.selected_month - 1 };
        self.select_month(i);
    }

    pub fn submit_question(&mut self) {
        let recent = recent_records(&self.records.tail(ADVISOR_CONTEXT_MONTHS));
        self.answer = Some(ask(self.advisor.as_ref(), &self.input, &recent));
        self.editing = false;
    }

    pub fn generate_report(&mut self) {
        let path = Path::new(DEFAULT_REPORT_FILE);
        let result = RiskEngine::with_thresholds(&self.records, self.thresholds.clone())
            .map_err(anyhow::Error::from)
            .and_then(|engine| FinancialReport::build(&self.records, &engine, chrono::Local::now()))
            .and_then(|report| report.with_company(self.company.as_str()).write_pdf(path));

        self.status = Some(match result {
            Ok(()) => format!("Report written to {}", path.display()),
            Err(e) => format!("Report failed: {:#}", e),
        });
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if app.editing {
            match key.code {
                KeyCode::Enter => app.submit_question(),
                KeyCode::Esc => app.editing = false,
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char(c) => app.input.push(c),
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    app.previous_page();
                } else {
                    app.next_page();
                }
            }
            KeyCode::BackTab => app.previous_page(),
            KeyCode::Right | KeyCode::Char('l') => app.next_month(),
            KeyCode::Left | KeyCode::Char('h') => app.previous_month(),
            KeyCode::Down | KeyCode::Char('j') if app.current_page == Page::Dataset => app.next_month(),
            KeyCode::Up | KeyCode::Char('k') if app.current_page == Page::Dataset => app.previous_month(),
            KeyCode::Enter | KeyCode::Char('i') if app.current_page == Page::Advisor => {
                app.editing = true;
                app.answer = None;
            }
            KeyCode::Char('r') => app.generate_report(),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Dashboard => render_dashboard(f, chunks[1], app),
        Page::RiskAnalysis => render_risk(f, chunks[1], app),
        Page::BusinessIntelligence => render_intelligence(f, chunks[1], app),
        Page::Advisor => render_advisor(f, chunks[1], app),
        Page::Dataset => render_table(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Good => Color::Green,
        Tone::Caution => Color::Yellow,
        Tone::Alert => Color::Red,
    }
}

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(title)
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, page) in Page::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    let level = app.assessment.risk_level;
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!(" {} ", level),
        Style::default()
            .fg(Color::Black)
            .bg(tone_color(level.tone()))
            .add_modifier(Modifier::BOLD),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} · Financial Health ", app.company)),
    );

    f.render_widget(header, area);
}

// ============================================================================
// DASHBOARD PAGE
// ============================================================================

fn render_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    render_kpis(f, rows[0], app);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_trend_chart(f, top[0], app);
    render_cash_flow_chart(f, top[1], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    render_inventory_chart(f, bottom[0], app);
    render_working_capital_chart(f, bottom[1], app);
}

fn render_kpis(f: &mut Frame, area: Rect, app: &App) {
    let (record, derived) = match (
        app.records.get(app.selected_month),
        app.records.derived().get(app.selected_month),
    ) {
        (Some(r), Some(d)) => (r, d),
        _ => return,
    };

    let cards = [
        ("Revenue", record.revenue),
        ("Expenses", record.expenses),
        ("Profit", derived.profit),
        ("Cash Flow", derived.cash_flow),
        ("Inventory", record.inventory),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for ((name, value), column) in cards.iter().zip(columns.iter()) {
        let color = if *value < 0.0 { Color::Red } else { Color::White };
        let card = Paragraph::new(vec![Line::from(Span::styled(
            format!("₹{}", format_amount(*value)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    format!(" {} · {} ", name, record.month),
                    Style::default().fg(Color::LightCyan),
                )),
        );
        f.render_widget(card, *column);
    }
}

fn points(values: &[f64]) -> Vec<(f64, f64)> {
    values.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect()
}

/// Axis bounds that always include zero and never collapse to a point.
fn y_bounds(series: &[(&str, Vec<f64>, Color)]) -> (f64, f64) {
    let all = series.iter().flat_map(|(_, values, _)| values.iter().copied());
    let (lo, hi) = all.fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let hi = if hi <= lo { lo + 1.0 } else { hi };
    (lo, hi)
}

fn render_line_chart(f: &mut Frame, area: Rect, app: &App, title: &str, series: &[(&str, Vec<f64>, Color)]) {
    let data_points: Vec<Vec<(f64, f64)>> = series.iter().map(|(_, values, _)| points(values)).collect();
    let (lo, hi) = y_bounds(series);

    let datasets = series
        .iter()
        .zip(&data_points)
        .map(|((name, _, color), data)| {
            Dataset::default()
                .name(*name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(data)
        })
        .collect();

    let months = app.records.months();
    let x_labels = match (months.first(), months.last()) {
        (Some(first), Some(last)) => vec![Span::raw(first.to_string()), Span::raw(last.to_string())],
        _ => vec![],
    };

    let chart = Chart::new(datasets)
        .block(section_block(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, (months.len().max(2) - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([lo, hi])
                .labels(vec![Span::raw(format_amount(lo)), Span::raw(format_amount(hi))]),
        );

    f.render_widget(chart, area);
}

fn render_trend_chart(f: &mut Frame, area: Rect, app: &App) {
    let series = [
        ("Revenue", app.records.revenues(), Color::Cyan),
        ("Expenses", app.records.expenses(), Color::Yellow),
        ("Profit", app.records.profits(), Color::Green),
    ];
    render_line_chart(f, area, app, " Revenue vs Expenses vs Profit ", &series);
}

fn render_inventory_chart(f: &mut Frame, area: Rect, app: &App) {
    let series = [("Inventory", app.records.inventories(), Color::Magenta)];
    render_line_chart(f, area, app, " 📦 Inventory Trend ", &series);
}

fn render_working_capital_chart(f: &mut Frame, area: Rect, app: &App) {
    let series = [
        ("Receivables", app.records.receivables(), Color::Green),
        ("Payables", app.records.payables(), Color::Red),
    ];
    render_line_chart(f, area, app, " 📊 Receivables vs Payables ", &series);
}

fn render_cash_flow_chart(f: &mut Frame, area: Rect, app: &App) {
    // Bar heights are magnitudes; negative months are drawn in red
    let bars: Vec<Bar> = app
        .records
        .rows()
        .map(|row| {
            let color = if row.cash_flow < 0.0 { Color::Red } else { Color::Blue };
            Bar::default()
                .value(row.cash_flow.abs().round() as u64)
                .text_value(format!("{:.0}k", row.cash_flow / 1000.0))
                .label(Line::from(row.record.month.clone()))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(section_block(" Cash Flow Trend "))
        .bar_width(6)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

// ============================================================================
// RISK PAGE
// ============================================================================

fn render_risk(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let a = &app.assessment;
    let color = tone_color(a.risk_level.tone());

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Overall Business Risk: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {} ", a.risk_level), Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(format!(
            "  rule score {} + volatility score {}",
            a.rule_score, a.volatility_score
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  RISK EXPLANATION",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
    ];
    for reason in &a.explanations {
        content.push(Line::from(format!("  🔹 {}", reason)));
    }
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  AI RECOMMENDATIONS",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    for rec in &a.recommendations {
        content.push(Line::from(format!("  ✅ {}", rec)));
    }

    let details = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(section_block(" Risk Explanation "));
    f.render_widget(details, columns[0]);

    let meter = Gauge::default()
        .block(section_block(" Risk Meter (1-3) "))
        .gauge_style(Style::default().fg(color))
        .ratio(a.risk_level.tier() as f64 / 3.0)
        .label(format!("{}/3", a.risk_level.tier()));
    f.render_widget(meter, columns[1]);
}

// ============================================================================
// BUSINESS INTELLIGENCE PAGE
// ============================================================================

fn render_intelligence(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(3)])
        .split(area);

    let a = &app.assessment;
    let verdicts = [
        ("🏦 Loan Eligibility", a.loan_eligibility.label(), a.loan_eligibility.tone()),
        ("📉 Bankruptcy Risk", a.bankruptcy_risk.label(), a.bankruptcy_risk.tone()),
        ("🕵 Fraud Detection", a.fraud_signal.label(), a.fraud_signal.tone()),
        ("💼 Investor Intelligence", a.investor_score.label(), a.investor_score.tone()),
    ];

    let mut content = vec![Line::from("")];
    for (title, label, tone) in verdicts {
        content.push(Line::from(vec![
            Span::styled(format!("  {:<26}", title), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(label, Style::default().fg(tone_color(tone)).add_modifier(Modifier::BOLD)),
        ]));
        content.push(Line::from(""));
    }

    match &app.forecast {
        Some(forecast) => {
            content.push(Line::from(Span::styled(
                "  NEXT MONTH FORECAST",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
            content.push(Line::from(format!("  Revenue:  ₹{}", format_amount(forecast.predicted_revenue))));
            content.push(Line::from(format!("  Expenses: ₹{}", format_amount(forecast.predicted_expenses))));
            content.push(Line::from(format!("  Profit:   ₹{}", format_amount(forecast.predicted_profit()))));
        }
        None => content.push(Line::from(Span::styled(
            "  Forecast needs at least two months of data",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))),
    }

    let panel = Paragraph::new(content).block(section_block(" Business Intelligence "));
    f.render_widget(panel, rows[0]);

    let score = app.health_score;
    let color = if score >= 80 {
        Color::Green
    } else if score >= 60 {
        Color::Yellow
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .block(section_block(" Health Score "))
        .gauge_style(Style::default().fg(color))
        .percent(score.min(100) as u16)
        .label(format!("{}/100", score));
    f.render_widget(gauge, rows[1]);
}

// ============================================================================
// ADVISOR PAGE
// ============================================================================

fn render_advisor(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input_style = if app.editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let input = Paragraph::new(app.input.as_str()).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(input_style)
            .title(format!(" Ask a business question ({} advisor) ", app.advisor.name())),
    );
    f.render_widget(input, rows[0]);

    if app.editing {
        f.set_cursor(rows[0].x + 1 + app.input.chars().count() as u16, rows[0].y + 1);
    }

    let body = match &app.answer {
        Some(answer) => vec![
            Line::from(Span::styled("  ✅ AI Response", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(format!("  {}", answer)),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled("  💡 Try questions like:", Style::default().fg(Color::Cyan))),
            Line::from("  - How can I improve profit?"),
            Line::from("  - Am I eligible for loan?"),
            Line::from("  - What is my risk level?"),
            Line::from(""),
            Line::from(Span::styled(
                "  Press Enter or i to type, Enter to ask, Esc to stop typing",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ],
    };

    let answer = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(section_block(" AI Financial Advisor "));
    f.render_widget(answer, rows[1]);
}

// ============================================================================
// DATASET PAGE
// ============================================================================

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = [
        "Month", "Revenue", "Expenses", "Profit", "Cash Flow", "Inventory", "Receivables",
        "Payables", "Loan EMI", "Tax Paid",
    ]
    .iter()
    .map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.records.rows().map(|row| {
        let r = row.record;
        let color = if row.profit < 0.0 { Color::Red } else { Color::Green };
        let flow_color = if row.cash_flow < 0.0 { Color::Red } else { Color::White };

        let cells = vec![
            Cell::from(r.month.clone()),
            Cell::from(format_amount(r.revenue)),
            Cell::from(format_amount(r.expenses)),
            Cell::from(format_amount(row.profit)).style(Style::default().fg(color)),
            Cell::from(format_amount(row.cash_flow)).style(Style::default().fg(flow_color)),
            Cell::from(format_amount(r.inventory)),
            Cell::from(format_amount(r.receivables)),
            Cell::from(format_amount(r.payables)),
            Cell::from(format_amount(r.loan_emi)),
            Cell::from(format_amount(r.tax_paid)),
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(section_block(" SME Financial Dataset "))
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let month = app
        .records
        .get(app.selected_month)
        .map(|r| r.month.as_str())
        .unwrap_or("-");

    let mut status_spans = vec![Span::styled(
        format!(" Month: {} ({}/{}) ", month, app.selected_month + 1, app.records.len()),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(status) = &app.status {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(status.clone(), Style::default().fg(Color::Green)));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("←/→", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Month | "));
    status_spans.push(Span::styled("r", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" PDF Report | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}
