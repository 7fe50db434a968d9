//! PDF report generation
//!
//! Writes the expense report as raw PDF syntax. No external PDF library: the
//! document is text-only, built from Catalog/Pages/Font objects plus one
//! content stream per page, with a byte-accurate xref table so any viewer can
//! open it. Everything emitted is ASCII; non-ASCII characters are dropped by
//! the string escaper so stream offsets stay exact.

use crate::dates;
use crate::models::{Expense, ExpenseStats};

// A4 portrait in PDF points
const A4_W: f64 = 595.276;
const A4_H: f64 = 841.890;
// Page margin, 20 mm
const MARGIN: f64 = 56.693;
// Table column x positions (50 / 120 / 155 mm); dates start at the margin
const COL_DESC: f64 = 141.732;
const COL_CAT: f64 = 340.157;
const COL_AMOUNT: f64 = 439.370;

const TITLE_SIZE: f64 = 20.0;
const SECTION_SIZE: f64 = 14.0;
const BODY_SIZE: f64 = 10.0;
const ROW_SIZE: f64 = 9.0;

/// One positioned text run
struct TextLine {
    x: f64,
    y: f64,
    size: f64,
    text: String,
}

type Page = Vec<TextLine>;

/// Top-down layout cursor over a growing list of pages
struct ReportBuilder {
    done: Vec<Page>,
    current: Page,
    y: f64,
}

impl ReportBuilder {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            current: Page::new(),
            y: A4_H - MARGIN,
        }
    }

    fn fits(&self, height: f64) -> bool {
        self.y - height >= MARGIN
    }

    fn break_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.done.push(finished);
        self.y = A4_H - MARGIN;
    }

    /// Place cells on one baseline without checking for room
    fn put(&mut self, size: f64, cells: &[(f64, String)]) {
        self.y -= leading(size);
        for (x, text) in cells {
            self.current.push(TextLine {
                x: *x,
                y: self.y,
                size,
                text: text.clone(),
            });
        }
    }

    /// Place a single flowing line, breaking the page first if needed
    fn line(&mut self, size: f64, text: impl Into<String>) {
        if !self.fits(leading(size)) {
            self.break_page();
        }
        self.put(size, &[(MARGIN, text.into())]);
    }

    fn gap(&mut self, points: f64) {
        self.y -= points;
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.current);
        self.done
    }
}

fn leading(size: f64) -> f64 {
    size * 1.45
}

/// Render the report for a set of expenses and its stats snapshot.
///
/// Layout: title and generation date, a summary block, the category
/// breakdown, then a detail table that paginates with its header redrawn on
/// every new page.
pub fn render_pdf(expenses: &[Expense], stats: &ExpenseStats, title: Option<&str>) -> Vec<u8> {
    let pages = layout(expenses, stats, title.unwrap_or("Expense Report"));
    write_pdf(&pages)
}

fn layout(expenses: &[Expense], stats: &ExpenseStats, title: &str) -> Vec<Page> {
    let mut builder = ReportBuilder::new();

    builder.line(TITLE_SIZE, title);
    builder.line(
        BODY_SIZE,
        format!("Generated: {}", dates::format_long(&dates::today_string())),
    );
    builder.gap(8.0);

    builder.line(SECTION_SIZE, "Summary");
    builder.line(
        BODY_SIZE,
        format!("Total Expenses: {}", stats.total_expenses),
    );
    builder.line(
        BODY_SIZE,
        format!("Total Amount: ${:.2}", stats.total_amount),
    );
    builder.line(
        BODY_SIZE,
        format!("Average Amount: ${:.2}", stats.average_amount),
    );
    if let Some(highest) = &stats.highest_expense {
        builder.line(
            BODY_SIZE,
            format!("Highest: ${:.2} ({})", highest.amount, highest.description),
        );
    }
    if let Some(lowest) = &stats.lowest_expense {
        builder.line(
            BODY_SIZE,
            format!("Lowest: ${:.2} ({})", lowest.amount, lowest.description),
        );
    }
    builder.gap(8.0);

    builder.line(SECTION_SIZE, "Category Breakdown");
    for entry in &stats.category_breakdown {
        builder.line(
            BODY_SIZE,
            format!(
                "{}: ${:.2} ({:.1}%)",
                entry.category.label(),
                entry.total,
                entry.percentage
            ),
        );
    }
    builder.gap(8.0);

    builder.line(SECTION_SIZE, "Expense Details");
    table_header(&mut builder);
    for expense in expenses {
        if !builder.fits(leading(ROW_SIZE)) {
            builder.break_page();
            table_header(&mut builder);
        }
        // Dates render as MM-DD; anything too short to slice shows whole
        let short_date = expense.date.get(5..).unwrap_or(&expense.date);
        builder.put(
            ROW_SIZE,
            &[
                (MARGIN, short_date.to_string()),
                (COL_DESC, truncate_chars(&expense.description, 40)),
                (COL_CAT, expense.category.label().to_string()),
                (COL_AMOUNT, format!("${:.2}", expense.amount)),
            ],
        );
    }

    builder.finish()
}

fn table_header(builder: &mut ReportBuilder) {
    if !builder.fits(leading(BODY_SIZE)) {
        builder.break_page();
    }
    builder.put(
        BODY_SIZE,
        &[
            (MARGIN, "Date".to_string()),
            (COL_DESC, "Description".to_string()),
            (COL_CAT, "Category".to_string()),
            (COL_AMOUNT, "Amount".to_string()),
        ],
    );
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Escape text for a PDF string literal. Parentheses and backslashes get
/// escaped; control and non-ASCII characters are dropped.
fn pdf_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\\' => out.push_str("\\\\"),
            c if c.is_ascii() && !c.is_control() => out.push(c),
            _ => {}
        }
    }
    out
}

/// Serialize laid-out pages into PDF bytes.
///
/// Object layout: 1 = Catalog, 2 = Pages, 3 = Helvetica, then one
/// (page, content stream) object pair per page.
fn write_pdf(pages: &[Page]) -> Vec<u8> {
    let object_count = 3 + pages.len() * 2;
    let mut buf = String::from("%PDF-1.4\n");
    let mut offsets: Vec<usize> = Vec::with_capacity(object_count);

    offsets.push(buf.len());
    buf.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    offsets.push(buf.len());
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + i * 2))
        .collect();
    buf.push_str(&format!(
        "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
        kids.join(" "),
        pages.len()
    ));

    offsets.push(buf.len());
    buf.push_str(
        "3 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>\nendobj\n",
    );

    for (index, page) in pages.iter().enumerate() {
        let page_id = 4 + index * 2;
        let content_id = page_id + 1;

        offsets.push(buf.len());
        buf.push_str(&format!(
            "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.3} {:.3}] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>\nendobj\n",
            page_id, A4_W, A4_H, content_id
        ));

        let mut stream = String::new();
        for line in page {
            stream.push_str(&format!(
                "BT\n/F1 {:.0} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
                line.size,
                line.x,
                line.y,
                pdf_escape(&line.text)
            ));
        }

        offsets.push(buf.len());
        buf.push_str(&format!(
            "{} 0 obj\n<< /Length {} >>\nstream\n{}endstream\nendobj\n",
            content_id,
            stream.len(),
            stream
        ));
    }

    // Cross-reference table; each entry is exactly 20 bytes
    let xref_offset = buf.len();
    buf.push_str(&format!("xref\n0 {}\n", object_count + 1));
    buf.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        buf.push_str(&format!("{:010} 00000 n \n", offset));
    }
    buf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        object_count + 1,
        xref_offset
    ));

    buf.into_bytes()
}
