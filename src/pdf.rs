use std::fmt::Write as _;

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const INK: Rgb = Rgb(0.22, 0.25, 0.32);
    pub const MUTED: Rgb = Rgb(0.42, 0.45, 0.50);
    pub const ACCENT: Rgb = Rgb(0.055, 0.647, 0.914);
    pub const TRACK: Rgb = Rgb(0.83, 0.89, 0.99);
}

/// Content stream for one page. Coordinates are PDF points from the
/// bottom-left corner.
#[derive(Debug, Default)]
pub struct Page {
    ops: String,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, x: f32, y: f32, size: f32, font: Font, color: Rgb, text: &str) {
        let _ = writeln!(
            self.ops,
            "BT {} {} {} rg /{} {size} Tf {x} {y} Td ({}) Tj ET",
            color.0,
            color.1,
            color.2,
            font.resource(),
            escape(text)
        );
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        let _ = writeln!(
            self.ops,
            "{} {} {} rg {x} {y} {width} {height} re f",
            color.0, color.1, color.2
        );
    }

    pub fn finish(self) -> Vec<u8> {
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                 /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>"
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}endstream",
                self.ops.len(),
                self.ops
            ),
        ];

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (index, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            let _ = write!(out, "{} 0 obj\n{body}\nendobj\n", index + 1);
        }

        let xref = out.len();
        let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            let _ = write!(out, "{offset:010} 00000 n \n");
        }
        let _ = write!(
            out,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
            objects.len() + 1
        );

        out.into_bytes()
    }
}

// The stream is kept ASCII so byte offsets equal string offsets.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            ' '..='~' => escaped.push(ch),
            _ => escaped.push('?'),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_has_header_xref_and_trailer() {
        let mut page = Page::new();
        page.text(40.0, 800.0, 12.0, Font::Bold, Rgb::INK, "Hello (world)");
        page.fill_rect(40.0, 700.0, 20.0, 50.0, Rgb::ACCENT);
        let bytes = page.finish();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("%PDF-1.4\n"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("(Hello \\(world\\)) Tj"));
        assert!(text.contains("re f"));

        let xref_at = text.find("xref\n").unwrap();
        let declared: usize = text
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|line| line.parse().ok())
            .unwrap();
        assert_eq!(declared, xref_at);
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let text = String::from_utf8(Page::new().finish()).unwrap();
        let xref_at = text.find("xref\n").unwrap();
        let offsets: Vec<usize> = text[xref_at..]
            .lines()
            .skip(3)
            .take(6)
            .map(|line| line[..10].parse().unwrap())
            .collect();
        for (index, offset) in offsets.iter().enumerate() {
            assert!(text[*offset..].starts_with(&format!("{} 0 obj", index + 1)));
        }
    }

    #[test]
    fn non_latin_text_is_replaced() {
        assert_eq!(escape("Чек ok"), "??? ok");
        assert_eq!(escape("a\\b"), "a\\\\b");
    }
}
