use crate::export::model::ReportLine;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    heading_font_size: f32,
    title_font_size: f32,
    label_w: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Text bytes for the WinAnsi-encoded base fonts; anything outside Latin-1
/// becomes '?'.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // IDs handed out manually
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            line_h: 16.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 10.0,
            heading_font_size: 12.5,
            title_font_size: 18.0,
            label_w: 130.0,
        }
    }

    /// Hands out a fresh unique Ref
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Creates a new page and its content object
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Writes the stream of the current page
    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, font: &[u8], x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&latin1(text)));
        content.end_text();
    }

    fn draw_rule(&self, content: &mut Content, y: f32) {
        content.save_state();
        content.set_stroke_rgb(0.23, 0.51, 0.96);
        content.move_to(self.margin, y);
        content.line_to(self.page_w - self.margin, y);
        content.stroke();
        content.restore_state();
    }

    fn draw_footer(&self, content: &mut Content, footer: &str, page: usize) {
        self.draw_text(
            content,
            b"F1",
            self.margin,
            self.margin - 25.0,
            8.0,
            footer,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            b"F1",
            self.page_w - self.margin - 40.0,
            self.margin - 25.0,
            8.0,
            &pg,
        );
    }

    /// Vertical space a line takes up.
    fn line_height(&self, line: &ReportLine) -> f32 {
        match line {
            ReportLine::Title(_) => self.line_h * 2.2,
            ReportLine::Heading(_) => self.line_h * 1.6,
            ReportLine::Blank => self.line_h * 0.6,
            _ => self.line_h,
        }
    }

    /// Multi-page document, one report line after another.
    pub fn write_document(&mut self, footer: &str, lines: &[ReportLine]) {
        let mut page_idx = 1;
        let mut content = self.new_page();
        self.draw_footer(&mut content, footer, page_idx);

        let mut y = self.page_h - self.margin;

        for line in lines {
            let h = self.line_height(line);

            if y - h < self.margin {
                self.finalize_page(content);
                page_idx += 1;
                content = self.new_page();
                self.draw_footer(&mut content, footer, page_idx);
                y = self.page_h - self.margin;
            }

            y -= h;

            match line {
                ReportLine::Title(t) => {
                    content.save_state();
                    content.set_fill_rgb(0.23, 0.51, 0.96);
                    self.draw_text(&mut content, b"F2", self.margin, y, self.title_font_size, t);
                    content.restore_state();
                }
                ReportLine::Heading(t) => {
                    self.draw_text(&mut content, b"F2", self.margin, y, self.heading_font_size, t);
                    self.draw_rule(&mut content, y - 4.0);
                }
                ReportLine::Field(label, value) => {
                    content.save_state();
                    content.set_fill_rgb(0.29, 0.33, 0.39);
                    self.draw_text(
                        &mut content,
                        b"F2",
                        self.margin,
                        y,
                        self.font_size,
                        &format!("{label}:"),
                    );
                    content.restore_state();
                    self.draw_text(
                        &mut content,
                        b"F1",
                        self.margin + self.label_w,
                        y,
                        self.font_size,
                        value,
                    );
                }
                ReportLine::Text(t) => {
                    self.draw_text(&mut content, b"F1", self.margin, y, self.font_size, t);
                }
                ReportLine::Blank => {}
            }
        }

        self.finalize_page(content);
    }

    /// Serializes the document.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}
