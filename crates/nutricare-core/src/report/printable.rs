//! Printable rendering of a [`DietReport`]: fixed-width text blocks,
//! paginated into A4 pages.

use printpdf::*;
use std::io::BufWriter;

use crate::error::NutriCareError;
use crate::report::DietReport;

/// Characters per line; Courier 9pt fits this inside the page margins.
pub const LINE_WIDTH: usize = 90;
pub const LINES_PER_PAGE: usize = 60;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 15.0;
const TOP_MM: f32 = 280.0;
const LINE_HEIGHT_MM: f32 = 4.2;
const FONT_SIZE: f32 = 9.0;
const LABEL_WIDTH: usize = 18;

/// Lay the report out as fixed-width lines, none longer than [`LINE_WIDTH`].
pub fn report_lines(report: &DietReport) -> Vec<String> {
    let mut out = Vec::new();

    out.push("NUTRICARE DIET PLAN".to_string());
    out.push("=".repeat(LINE_WIDTH));
    field(&mut out, "Patient:", &report.patient, 0);
    let conditions: Vec<&str> = report.conditions.iter().map(|c| c.label()).collect();
    field(&mut out, "Conditions:", &conditions.join(", "), 0);
    let preference = report.food_preference.to_string();
    field(&mut out, "Food preference:", &preference, 0);
    if let Some(status) = report.health_status {
        field(&mut out, "Health status:", &status.to_string(), 0);
    }
    out.push(String::new());

    heading(&mut out, "RECOMMENDATION");
    let rec = &report.recommendation;
    let allowed = or_none(&rec.allowed_foods.join(", "));
    let restricted = or_none(&rec.restricted_foods.join(", "));
    field(&mut out, "Allowed foods:", &allowed, 0);
    field(&mut out, "Restricted foods:", &restricted, 0);
    field(&mut out, "Diet plan:", &or_none(&rec.diet_plan), 0);
    field(&mut out, "Lifestyle:", &or_none(&rec.lifestyle_advice), 0);
    out.push(String::new());

    heading(&mut out, "MEAL PLAN");
    for (week, days) in &report.plan {
        out.push(week.clone());
        for (day, meal) in days {
            field(&mut out, &format!("{day}:"), &meal.dish, 2);
            field(&mut out, "Ingredients:", &meal.ingredients.join(", "), 4);
            for (i, step) in meal.preparation.iter().enumerate() {
                let label = if i == 0 { "Preparation:" } else { "" };
                field(&mut out, label, &format!("{}. {}", i + 1, step), 4);
            }
        }
        out.push(String::new());
    }

    out
}

/// Split lines into pages of at most `lines_per_page`. Always at least one page.
pub fn paginate(lines: &[String], lines_per_page: usize) -> Vec<Vec<String>> {
    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines
        .chunks(lines_per_page.max(1))
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Plain-text rendering; pages are separated by form feeds.
pub fn render_text(report: &DietReport) -> String {
    let pages = paginate(&report_lines(report), LINES_PER_PAGE);
    let total = pages.len();
    pages
        .iter()
        .enumerate()
        .map(|(i, lines)| {
            let mut page = lines.join("\n");
            page.push_str(&format!("\n\nPage {} of {}\n", i + 1, total));
            page
        })
        .collect::<Vec<_>>()
        .join("\x0c")
}

/// PDF rendering in Courier on A4 pages. Returns PDF bytes.
pub fn render_pdf(report: &DietReport) -> Result<Vec<u8>, NutriCareError> {
    let pages = paginate(&report_lines(report), LINES_PER_PAGE);
    let title = format!("Diet plan for {}", report.patient);

    let (doc, page1, layer1) =
        PdfDocument::new(&title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| NutriCareError::Render(format!("PDF font error: {e}")))?;

    let total = pages.len();
    for (i, lines) in pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };

        let mut y = Mm(TOP_MM);
        for line in lines {
            layer.use_text(line.as_str(), FONT_SIZE, Mm(LEFT_MARGIN_MM), y, &font);
            y -= Mm(LINE_HEIGHT_MM);
        }

        let footer = format!("Page {} of {}", i + 1, total);
        layer.use_text(footer, FONT_SIZE, Mm(LEFT_MARGIN_MM), Mm(10.0), &font);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| NutriCareError::Render(format!("PDF save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| NutriCareError::Render(format!("PDF buffer error: {e}")))
}

/// Greedy word wrap. Words longer than `max_chars` are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(max_chars) {
            let piece: String = piece.iter().collect();
            let piece_len = piece.chars().count();
            if current_len > 0 && current_len + 1 + piece_len > max_chars {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(&piece);
            current_len += piece_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn heading(out: &mut Vec<String>, title: &str) {
    out.push(title.to_string());
    out.push("-".repeat(title.len()));
}

/// `label` padded to a fixed column, value wrapped under it.
fn field(out: &mut Vec<String>, label: &str, value: &str, indent: usize) {
    let prefix_len = indent + LABEL_WIDTH;
    let width = LINE_WIDTH.saturating_sub(prefix_len).max(10);
    for (i, line) in wrap_text(value, width).into_iter().enumerate() {
        let label = if i == 0 { label } else { "" };
        let row = format!(
            "{:indent$}{:<label_width$}{}",
            "",
            label,
            line,
            indent = indent,
            label_width = LABEL_WIDTH
        );
        out.push(row.trim_end().to_string());
    }
}

fn or_none(s: &str) -> String {
    if s.trim().is_empty() {
        "none".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn test_lines_respect_width() {
        let mut report = sample_report();
        let long_word = "x".repeat(LINE_WIDTH * 2);
        report.recommendation.diet_plan = format!("{}{}", "word ".repeat(80), long_word);
        for line in report_lines(&report) {
            assert!(line.chars().count() <= LINE_WIDTH, "too long: {line:?}");
        }
    }

    #[test]
    fn test_lines_contain_header_fields() {
        let lines = report_lines(&sample_report());
        assert_eq!(lines[0], "NUTRICARE DIET PLAN");
        let patient = lines.iter().find(|l| l.starts_with("Patient:")).unwrap();
        assert!(patient.ends_with("Asha Rao"));
        assert!(lines.iter().any(|l| l.ends_with("Diabetes, Hypertension")));
        assert!(lines.iter().any(|l| l == "Week 4"));
    }

    #[test]
    fn test_paginate() {
        let lines: Vec<String> = (0..130).map(|i| i.to_string()).collect();
        let pages = paginate(&lines, 60);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 60);
        assert_eq!(pages[2].len(), 10);
        assert_eq!(pages[1][0], "60");
        assert_eq!(paginate(&[], 60).len(), 1);
    }

    #[test]
    fn test_render_text_pages() {
        let report = sample_report();
        let pages = paginate(&report_lines(&report), LINES_PER_PAGE).len();
        assert!(pages > 1);
        let text = render_text(&report);
        assert_eq!(text.matches('\x0c').count(), pages - 1);
        assert!(text.contains(&format!("Page {pages} of {pages}")));
    }

    #[test]
    fn test_render_pdf() {
        let bytes = render_pdf(&sample_report()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }
}
