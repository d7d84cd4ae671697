// 📄 Financial Report - summary, verdicts, charts and recent data
// Builds a report model from the engines, then renders it as text or PDF.

use crate::forecast::{Forecast, Forecaster};
use crate::health_score::HealthScoreCalculator;
use crate::records::RecordSet;
use crate::risk::{RiskAssessment, RiskEngine};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub const DEFAULT_REPORT_FILE: &str = "Financial_Report.pdf";
pub const RECENT_MONTHS: usize = 5;
pub const DEFAULT_COMPANY: &str = "SME Business";

// ============================================================================
// REPORT MODEL
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
    /// Percent of total revenue kept as profit
    pub average_profit_margin: f64,
}

impl FinancialSummary {
    pub fn from_records(records: &RecordSet) -> Self {
        let total_revenue: f64 = records.revenues().iter().sum();
        let total_expenses: f64 = records.expenses().iter().sum();
        let total_profit: f64 = records.profits().iter().sum();

        let average_profit_margin = if total_revenue == 0.0 {
            0.0
        } else {
            total_profit / total_revenue * 100.0
        };

        FinancialSummary {
            total_revenue,
            total_expenses,
            total_profit,
            average_profit_margin,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub cash_flow: f64,
}

/// Full series for the trend and cash-flow charts.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub months: Vec<String>,
    pub revenue: Vec<f64>,
    pub expenses: Vec<f64>,
    pub profit: Vec<f64>,
    pub cash_flow: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    pub company: String,
    pub generated_at: DateTime<Local>,
    pub summary: FinancialSummary,
    pub assessment: RiskAssessment,
    pub health_score: u32,
    /// Absent with fewer than two months of history
    pub forecast: Option<Forecast>,
    pub recent: Vec<ReportRow>,
    pub series: ChartSeries,
    pub conclusion: String,
}

impl FinancialReport {
    pub fn build(records: &RecordSet, engine: &RiskEngine<'_>, generated_at: DateTime<Local>) -> Result<Self> {
        let assessment = engine.assess();

        let health_score =
            HealthScoreCalculator::with_thresholds(records, engine.thresholds().health.clone())?
                .calculate_score();

        let forecast = Forecaster::new(records)
            .ok()
            .map(|f| f.predict_next_month());

        let recent = records
            .tail(RECENT_MONTHS)
            .into_iter()
            .map(|row| ReportRow {
                month: row.record.month.clone(),
                revenue: row.record.revenue,
                expenses: row.record.expenses,
                profit: row.profit,
                cash_flow: row.cash_flow,
            })
            .collect();

        let series = ChartSeries {
            months: records.months().into_iter().map(String::from).collect(),
            revenue: records.revenues(),
            expenses: records.expenses(),
            profit: records.profits(),
            cash_flow: records.cash_flows(),
        };

        Ok(FinancialReport {
            company: DEFAULT_COMPANY.to_string(),
            generated_at,
            summary: FinancialSummary::from_records(records),
            conclusion: assessment.risk_level.conclusion().to_string(),
            assessment,
            health_score,
            forecast,
            recent,
            series,
        })
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        let company = company.into();
        if !company.trim().is_empty() {
            self.company = company.trim().to_string();
        }
        self
    }

    pub fn subtitle(&self) -> String {
        format!("{} Financial Analysis & Risk Report", self.company)
    }

    /// Plain-text rendering for the terminal.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let a = &self.assessment;
        let s = &self.summary;

        let _ = writeln!(out, "AI Financial Health Report");
        let _ = writeln!(out, "{}", self.subtitle());
        let _ = writeln!(out, "Generated On: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"));
        let _ = writeln!(out);
        let _ = writeln!(out, "1) Financial Summary");
        let _ = writeln!(out, "   Total Revenue:         INR {}", format_amount(s.total_revenue));
        let _ = writeln!(out, "   Total Expenses:        INR {}", format_amount(s.total_expenses));
        let _ = writeln!(out, "   Total Profit:          INR {}", format_amount(s.total_profit));
        let _ = writeln!(out, "   Average Profit Margin: {:.2}%", s.average_profit_margin);
        let _ = writeln!(out);
        let _ = writeln!(out, "2) Risk Assessment");
        let _ = writeln!(out, "   Overall Risk Level: {}", a.risk_level);
        for reason in &a.explanations {
            let _ = writeln!(out, "   - {}", reason);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "3) Recommendations");
        for rec in &a.recommendations {
            let _ = writeln!(out, "   - {}", rec);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "4) Business Intelligence");
        for line in self.intelligence_lines() {
            let _ = writeln!(out, "   {}", line);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "5) Recent Financial Data (Last {} Months)", RECENT_MONTHS);
        let _ = writeln!(
            out,
            "   {:<10} {:>14} {:>14} {:>14} {:>14}",
            "Month", "Revenue", "Expenses", "Profit", "Cash Flow"
        );
        for row in &self.recent {
            let _ = writeln!(
                out,
                "   {:<10} {:>14} {:>14} {:>14} {:>14}",
                row.month,
                format_amount(row.revenue),
                format_amount(row.expenses),
                format_amount(row.profit),
                format_amount(row.cash_flow)
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "6) Final Conclusion");
        let _ = writeln!(out, "   {}", self.conclusion);

        out
    }

    fn intelligence_lines(&self) -> Vec<String> {
        let a = &self.assessment;
        let mut lines = vec![
            format!("Investor Decision: {}", a.investor_score),
            format!("Loan Eligibility: {}", a.loan_eligibility),
            format!("Bankruptcy Prediction: {}", a.bankruptcy_risk),
            format!("Fraud Detection: {}", a.fraud_signal),
            format!("Health Score: {}/100", self.health_score),
        ];
        if let Some(f) = &self.forecast {
            lines.push(format!(
                "Next Month Forecast: revenue INR {}, expenses INR {}",
                format_amount(f.predicted_revenue),
                format_amount(f.predicted_expenses)
            ));
        }
        lines
    }

    /// Render the PDF and return its bytes.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>> {
        let doc = self.render_pdf()?;
        doc.save_to_bytes()
            .map_err(|e| anyhow!("Failed to serialize PDF: {:?}", e))
    }

    /// Render the PDF to `path`.
    pub fn write_pdf(&self, path: &Path) -> Result<()> {
        let doc = self.render_pdf()?;
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {:?}", path))?;

        doc.save(&mut BufWriter::new(file))
            .map_err(|e| anyhow!("Failed to write PDF {:?}: {:?}", path, e))?;

        tracing::info!(path = %path.display(), "PDF report written");
        Ok(())
    }

    fn render_pdf(&self) -> Result<PdfDocumentReference> {
        let mut pdf = PdfCanvas::new("AI Financial Health Report")?;
        let a = &self.assessment;
        let s = &self.summary;

        pdf.heading_centered("AI Financial Health Report", 18.0);
        pdf.centered(&self.subtitle(), 12.0);
        pdf.gap(6.0);
        pdf.text(
            &format!("Generated On: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S")),
            12.0,
        );
        pdf.gap(4.0);

        // ---------------- Financial Summary ----------------
        pdf.heading("1) Financial Summary");
        pdf.text(&format!("Total Revenue: INR {}", format_amount(s.total_revenue)), 12.0);
        pdf.text(&format!("Total Expenses: INR {}", format_amount(s.total_expenses)), 12.0);
        pdf.text(&format!("Total Profit: INR {}", format_amount(s.total_profit)), 12.0);
        pdf.text(&format!("Average Profit Margin: {:.2}%", s.average_profit_margin), 12.0);
        pdf.gap(4.0);

        // ---------------- Risk ----------------
        pdf.heading("2) Risk Assessment");
        pdf.text(&format!("Overall Risk Level: {}", a.risk_level), 12.0);
        pdf.gap(2.0);
        pdf.bold("Risk Explanation:", 12.0);
        for reason in &a.explanations {
            pdf.wrapped(&format!("- {}", reason), 12.0);
        }
        pdf.gap(4.0);

        pdf.heading("3) AI Recommendations");
        for rec in &a.recommendations {
            pdf.wrapped(&format!("- {}", rec), 12.0);
        }
        pdf.gap(4.0);

        pdf.heading("4) Business Intelligence Results");
        for line in self.intelligence_lines() {
            pdf.wrapped(&line, 12.0);
        }
        pdf.gap(4.0);

        // ---------------- Charts ----------------
        pdf.heading("5) Financial Graph Analysis");
        pdf.line_chart(
            "Revenue vs Expenses vs Profit",
            &self.series.months,
            &[
                ("Revenue", &self.series.revenue, (0.12, 0.47, 0.71)),
                ("Expenses", &self.series.expenses, (1.0, 0.5, 0.05)),
                ("Profit", &self.series.profit, (0.17, 0.63, 0.17)),
            ],
        );
        pdf.bar_chart("Cash Flow Trend", &self.series.months, &self.series.cash_flow);

        // ---------------- Recent data (new page) ----------------
        pdf.new_page();
        pdf.heading(&format!("6) Recent Financial Data (Last {} Months)", RECENT_MONTHS));
        pdf.gap(2.0);
        let widths = [25.0, 40.0, 40.0, 35.0, 45.0];
        pdf.table_row(&["Month", "Revenue", "Expenses", "Profit", "Cash Flow"], &widths, true);
        for row in &self.recent {
            pdf.table_row(
                &[
                    &row.month,
                    &format_amount(row.revenue),
                    &format_amount(row.expenses),
                    &format_amount(row.profit),
                    &format_amount(row.cash_flow),
                ],
                &widths,
                false,
            );
        }
        pdf.gap(8.0);

        pdf.heading("7) Final Conclusion");
        pdf.wrapped(&self.conclusion, 12.0);

        Ok(pdf.finish())
    }
}

// ============================================================================
// PDF CANVAS
// ============================================================================

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const PT_TO_MM: f32 = 0.3528;

/// Top-down cursor over a printpdf document; starts a new page when full.
struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PdfCanvas {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("Failed to load font: {:?}", e))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("Failed to load font: {:?}", e))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(PdfCanvas {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
        })
    }

    fn finish(self) -> PdfDocumentReference {
        self.doc
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.new_page();
        }
    }

    fn gap(&mut self, height: f32) {
        self.y -= height;
    }

    fn line_height(size: f32) -> f32 {
        size * PT_TO_MM * 1.6
    }

    fn put(&mut self, text: &str, size: f32, x: f32, bold: bool) {
        let height = Self::line_height(size);
        self.ensure_space(height);
        self.y -= height;
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn text(&mut self, text: &str, size: f32) {
        self.put(text, size, MARGIN, false);
    }

    fn bold(&mut self, text: &str, size: f32) {
        self.put(text, size, MARGIN, true);
    }

    fn heading(&mut self, text: &str) {
        self.gap(2.0);
        self.put(text, 14.0, MARGIN, true);
    }

    fn centered(&mut self, text: &str, size: f32) {
        let x = (PAGE_WIDTH - text_width(text, size)) / 2.0;
        self.put(text, size, x.max(MARGIN), false);
    }

    fn heading_centered(&mut self, text: &str, size: f32) {
        let x = (PAGE_WIDTH - text_width(text, size)) / 2.0;
        self.put(text, size, x.max(MARGIN), true);
    }

    fn wrapped(&mut self, text: &str, size: f32) {
        let max_chars = ((PAGE_WIDTH - 2.0 * MARGIN) / (size * PT_TO_MM * 0.5)) as usize;
        for line in wrap_text(text, max_chars) {
            self.text(&line, size);
        }
    }

    fn set_stroke(&self, rgb: (f32, f32, f32), thickness: f32) {
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(rgb.0, rgb.1, rgb.2, None)));
        self.layer.set_outline_thickness(thickness);
    }

    fn stroke(&self, points: &[(f32, f32)], closed: bool) {
        let line = Line {
            points: points
                .iter()
                .map(|(x, y)| (Point::new(Mm(*x), Mm(*y)), false))
                .collect(),
            is_closed: closed,
        };
        self.layer.add_line(line);
    }

    fn table_row(&mut self, cells: &[&str], widths: &[f32], header: bool) {
        let height = 10.0;
        self.ensure_space(height);
        let top = self.y;
        let bottom = top - height;
        let size = 11.0;

        self.set_stroke((0.0, 0.0, 0.0), 0.5);
        let mut x = MARGIN;
        for (cell, width) in cells.iter().zip(widths) {
            self.stroke(&[(x, bottom), (x + width, bottom), (x + width, top), (x, top)], true);
            let tx = x + (width - text_width(cell, size)) / 2.0;
            let font = if header { &self.bold } else { &self.regular };
            self.layer.use_text(*cell, size, Mm(tx.max(x + 1.0)), Mm(bottom + 3.5), font);
            x += width;
        }

        self.y = bottom;
    }

    fn chart_frame(&mut self, title: &str) -> (f32, f32, f32, f32) {
        let height = 80.0;
        self.ensure_space(height + 12.0);
        self.put(title, 12.0, MARGIN, true);
        self.gap(2.0);

        let (left, right) = (MARGIN + 20.0, PAGE_WIDTH - MARGIN);
        let top = self.y;
        let bottom = top - height;
        self.set_stroke((0.4, 0.4, 0.4), 0.5);
        self.stroke(&[(left, bottom), (right, bottom), (right, top), (left, top)], true);
        (left, right, bottom, top)
    }

    fn axis_labels(&self, bottom: f32, top: f32, lo: f64, hi: f64, months: &[String], xs: &[f32]) {
        let size = 7.0;
        self.layer
            .use_text(format_amount(hi), size, Mm(MARGIN), Mm(top - 2.5), &self.regular);
        self.layer
            .use_text(format_amount(lo), size, Mm(MARGIN), Mm(bottom), &self.regular);
        for (month, x) in months.iter().zip(xs) {
            let w = text_width(month, size);
            self.layer
                .use_text(month.as_str(), size, Mm(x - w / 2.0), Mm(bottom - 4.0), &self.regular);
        }
    }

    fn line_chart(&mut self, title: &str, months: &[String], series: &[(&str, &Vec<f64>, (f32, f32, f32))]) {
        let (left, right, bottom, top) = self.chart_frame(title);
        let (lo, hi) = value_range(series.iter().flat_map(|(_, values, _)| values.iter().copied()));
        let xs = x_positions(months.len(), left, right);
        let scale = |v: f64| bottom + ((v - lo) / (hi - lo)) as f32 * (top - bottom);

        for (_, values, color) in series {
            self.set_stroke(*color, 1.2);
            let points: Vec<(f32, f32)> = xs.iter().zip(values.iter()).map(|(x, v)| (*x, scale(*v))).collect();
            if points.len() > 1 {
                self.stroke(&points, false);
            }
            // markers
            for (x, y) in &points {
                self.stroke(&[(x - 0.6, *y), (x + 0.6, *y)], false);
            }
        }

        self.axis_labels(bottom, top, lo, hi, months, &xs);

        // legend
        let mut lx = left + 4.0;
        for (name, _, color) in series {
            self.set_stroke(*color, 1.2);
            self.stroke(&[(lx, top - 4.0), (lx + 6.0, top - 4.0)], false);
            self.layer.use_text(*name, 8.0, Mm(lx + 7.5), Mm(top - 5.0), &self.regular);
            lx += 30.0;
        }

        self.y = bottom - 10.0;
    }

    fn bar_chart(&mut self, title: &str, months: &[String], values: &[f64]) {
        let (left, right, bottom, top) = self.chart_frame(title);
        let (lo, hi) = value_range(values.iter().copied().chain(std::iter::once(0.0)));
        let xs = x_positions(months.len(), left, right);
        let scale = |v: f64| bottom + ((v - lo) / (hi - lo)) as f32 * (top - bottom);
        let zero = scale(0.0);

        self.set_stroke((0.4, 0.4, 0.4), 0.3);
        self.stroke(&[(left, zero), (right, zero)], false);

        // bars are thick strokes; width in points
        let slot = (right - left) / months.len().max(1) as f32;
        let bar_pt = (slot * 0.6) / PT_TO_MM;
        for (x, v) in xs.iter().zip(values) {
            let color = if *v < 0.0 { (0.84, 0.15, 0.16) } else { (0.12, 0.47, 0.71) };
            self.set_stroke(color, bar_pt);
            self.stroke(&[(*x, zero), (*x, scale(*v))], false);
        }

        self.axis_labels(bottom, top, lo, hi, months, &xs);
        self.y = bottom - 10.0;
    }
}

/// Evenly spaced slot centres across [left, right].
fn x_positions(n: usize, left: f32, right: f32) -> Vec<f32> {
    let slot = (right - left) / n.max(1) as f32;
    (0..n).map(|i| left + slot * (i as f32 + 0.5)).collect()
}

/// Min/max with a little headroom; never a zero-width range.
fn value_range<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(1.0);
    (lo - pad, hi + pad)
}

/// Rough Helvetica width: half an em per character.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * PT_TO_MM * 0.5
}

/// Greedy word wrap to at most `width` characters per line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Whole-unit amount with thousands separators, e.g. -1,234,567.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::new();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if rounded < 0.0 {
        format!("-{}", out)
    } else {
        out
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::load_from_reader;
    use chrono::TimeZone;

    const SAMPLE: &str = "\
Month,Revenue,Expenses,Inventory,Receivables,Payables,Loan EMI,Tax Paid
Jan,500000,300000,120000,80000,60000,40000,25000
Feb,520000,310000,118000,82000,61000,40000,26000
Mar,480000,330000,125000,90000,70000,40000,24000
Apr,510000,320000,121000,85000,64000,40000,25000
May,530000,315000,119000,87000,62000,40000,26000
Jun,550000,325000,117000,88000,63000,40000,27000
";

    fn report() -> FinancialReport {
        let set = load_from_reader(SAMPLE.as_bytes()).unwrap();
        let engine = RiskEngine::new(&set).unwrap();
        let at = Local.with_ymd_and_hms(2025, 1, 31, 10, 0, 0).unwrap();
        FinancialReport::build(&set, &engine, at).unwrap()
    }

    #[test]
    fn test_summary_totals() {
        let r = report();
        assert_eq!(r.summary.total_revenue, 3_090_000.0);
        assert_eq!(r.summary.total_expenses, 1_900_000.0);
        assert_eq!(r.summary.total_profit, 1_190_000.0);
        assert!((r.summary.average_profit_margin - 38.511).abs() < 0.01);
    }

    #[test]
    fn test_zero_revenue_margin() {
        let csv = "Month,Revenue,Expenses,Inventory,Receivables,Payables,Loan EMI,Tax Paid\nJan,0,0,0,0,0,0,0\n";
        let set = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(FinancialSummary::from_records(&set).average_profit_margin, 0.0);
    }

    #[test]
    fn test_recent_rows_are_last_five() {
        let r = report();
        assert_eq!(r.recent.len(), RECENT_MONTHS);
        assert_eq!(r.recent[0].month, "Feb");
        assert_eq!(r.recent[4].month, "Jun");
        assert_eq!(r.recent[4].cash_flow, 550000.0 - (325000.0 + 40000.0 + 27000.0));
        assert_eq!(r.series.months.len(), 6);
    }

    #[test]
    fn test_conclusion_follows_risk_level() {
        let r = report();
        assert_eq!(r.conclusion, r.assessment.risk_level.conclusion());
        assert!(r.forecast.is_some());
    }

    #[test]
    fn test_render_text_sections() {
        let text = report().render_text();
        assert!(text.contains("Total Revenue:         INR 3,090,000"));
        assert!(text.contains("Overall Risk Level: LOW RISK"));
        assert!(text.contains("Loan Eligibility: ELIGIBLE FOR BUSINESS LOAN"));
        assert!(text.contains("6) Final Conclusion"));
    }

    #[test]
    fn test_company_in_subtitle() {
        let r = report();
        assert_eq!(r.subtitle(), "SME Business Financial Analysis & Risk Report");

        let r = r.with_company("  Acme Traders ");
        assert_eq!(r.company, "Acme Traders");
        assert!(r.render_text().contains("Acme Traders Financial Analysis & Risk Report"));

        // blank names keep the current one
        assert_eq!(r.with_company("   ").company, "Acme Traders");
    }

    #[test]
    fn test_write_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_REPORT_FILE);

        report().write_pdf(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(1234567.4), "1,234,567");
        assert_eq!(format_amount(-45000.0), "-45,000");
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        assert!(wrap_text("", 10).is_empty());
    }
}
