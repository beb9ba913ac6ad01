use crate::errors::AppError;
use crate::models::{ChecklistItem, DailyRecord};
use crate::pdf::{Font, Page, Rgb, PAGE_HEIGHT, PAGE_WIDTH};
use crate::stats::{bar_height, chart_label, max_completed};

pub const REPORT_FILENAME: &str = "checklist-history.pdf";

/// Turns the current checklist and history into a document.
pub trait DocumentRenderer: Send + Sync {
    fn render(
        &self,
        generated_on: &str,
        checklist: &[ChecklistItem],
        history: &[DailyRecord],
    ) -> Vec<u8>;

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }
}

/// Copy of the session data taken under the lock, so rendering and sending
/// happen without holding it.
#[derive(Debug, Clone)]
pub struct ExportSnapshot {
    pub generated_on: String,
    pub checklist: Vec<ChecklistItem>,
    pub history: Vec<DailyRecord>,
}

impl ExportSnapshot {
    pub fn new(
        generated_on: &str,
        checklist: &[ChecklistItem],
        history: &[DailyRecord],
    ) -> Result<Self, AppError> {
        if history.is_empty() {
            return Err(AppError::empty_history());
        }
        Ok(Self {
            generated_on: generated_on.to_string(),
            checklist: checklist.to_vec(),
            history: history.to_vec(),
        })
    }

    pub fn render(&self, renderer: &dyn DocumentRenderer) -> Vec<u8> {
        renderer.render(&self.generated_on, &self.checklist, &self.history)
    }
}

pub fn validate_recipient(email: &str) -> Result<&str, AppError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::bad_request("enter a valid email address"));
    }
    Ok(email)
}

/// The history report: table, bar chart, current checklist and a closing
/// note, all on one A4 page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReport;

const MARGIN: f32 = 50.0;
const CHART_HEIGHT: f32 = 120.0;

impl DocumentRenderer for PdfReport {
    fn render(
        &self,
        generated_on: &str,
        checklist: &[ChecklistItem],
        history: &[DailyRecord],
    ) -> Vec<u8> {
        let mut page = Page::new();
        let mut y = PAGE_HEIGHT - 70.0;

        page.text(MARGIN, y, 22.0, Font::Bold, Rgb::ACCENT, "Checklist history");
        y -= 20.0;
        page.text(
            MARGIN,
            y,
            11.0,
            Font::Regular,
            Rgb::MUTED,
            "Caregiver notes for a relative with hypothyroidism",
        );
        y -= 16.0;
        page.text(
            MARGIN,
            y,
            10.0,
            Font::Regular,
            Rgb::MUTED,
            &format!("Generated: {generated_on}"),
        );

        y -= 36.0;
        page.text(MARGIN, y, 14.0, Font::Bold, Rgb::INK, "Last 7 days");
        y -= 22.0;
        for (column, heading) in [(MARGIN, "Date"), (200.0, "Completed"), (320.0, "Percent")] {
            page.text(column, y, 10.0, Font::Bold, Rgb::MUTED, heading);
        }
        for record in history {
            y -= 18.0;
            let percent = if record.total == 0 {
                0.0
            } else {
                100.0 * f64::from(record.completed) / f64::from(record.total)
            };
            page.text(MARGIN, y, 11.0, Font::Regular, Rgb::INK, &record.date);
            page.text(
                200.0,
                y,
                11.0,
                Font::Regular,
                Rgb::INK,
                &format!("{}/{}", record.completed, record.total),
            );
            page.text(320.0, y, 11.0, Font::Regular, Rgb::INK, &format!("{percent:.0}%"));
            page.fill_rect(380.0, y, 160.0, 8.0, Rgb::TRACK);
            page.fill_rect(380.0, y, (160.0 * percent / 100.0) as f32, 8.0, Rgb::ACCENT);
        }

        y -= 40.0;
        page.text(MARGIN, y, 14.0, Font::Bold, Rgb::INK, "Progress chart");
        y -= 20.0 + CHART_HEIGHT;
        let max = max_completed(history);
        let slot = (PAGE_WIDTH - 2.0 * MARGIN) / 7.0;
        for (index, record) in history.iter().enumerate() {
            let x = MARGIN + slot * index as f32;
            let height = (CHART_HEIGHT as f64 * bar_height(record, max) / 100.0) as f32;
            page.fill_rect(x + 10.0, y, slot - 20.0, CHART_HEIGHT, Rgb::TRACK);
            page.fill_rect(x + 10.0, y, slot - 20.0, height, Rgb::ACCENT);
            page.text(x + 14.0, y - 14.0, 9.0, Font::Regular, Rgb::MUTED, &chart_label(&record.date));
        }

        y -= 50.0;
        page.text(MARGIN, y, 14.0, Font::Bold, Rgb::INK, "Today's checklist");
        for item in checklist {
            y -= 18.0;
            let mark = if item.checked { "[x]" } else { "[ ]" };
            page.text(MARGIN, y, 11.0, Font::Regular, Rgb::INK, &format!("{mark} {}", item.label));
        }

        y -= 36.0;
        page.text(MARGIN, y, 12.0, Font::Bold, Rgb::ACCENT, "Important to remember");
        y -= 16.0;
        page.text(
            MARGIN,
            y,
            10.0,
            Font::Regular,
            Rgb::INK,
            "Your support is half of the treatment's success. Patients whose families take part",
        );
        y -= 14.0;
        page.text(
            MARGIN,
            y,
            10.0,
            Font::Regular,
            Rgb::INK,
            "in treatment recover faster and follow their doctor's advice more closely.",
        );

        page.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::default_items;

    fn week() -> Vec<DailyRecord> {
        (1..=3)
            .map(|n| DailyRecord {
                date: format!("0{n}.06.2024"),
                completed: n,
                total: 5,
            })
            .collect()
    }

    #[test]
    fn empty_history_is_rejected_before_rendering() {
        let err = ExportSnapshot::new("01.06.2024", &default_items(), &[]).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn recipient_needs_an_at_sign() {
        assert!(validate_recipient("not-an-email").is_err());
        assert!(validate_recipient("   ").is_err());
        assert_eq!(validate_recipient(" carer@example.com ").unwrap(), "carer@example.com");
    }

    #[test]
    fn report_lists_records_and_items() {
        let snapshot = ExportSnapshot::new("03.06.2024", &default_items(), &week()).unwrap();
        let bytes = snapshot.render(&PdfReport);
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("(02.06.2024) Tj"));
        assert!(text.contains("(2/5) Tj"));
        assert!(text.contains("(40%) Tj"));
        assert!(text.contains("Generated: 03.06.2024"));
        assert!(text.contains("[ ] Mood is stable"));
    }
}
