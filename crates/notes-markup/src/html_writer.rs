// notes-client/notes-markup
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use pulldown_cmark_escape::{escape_href, escape_html, escape_html_body_text, StrWrite};

use crate::{Font, StyledRun, StyledText, TextAttributes};

/// Writes the runs of a `StyledText` as inline HTML.
pub struct HtmlWriter<I, W> {
    /// Iterator supplying runs.
    iter: I,

    /// Writer to write to.
    writer: W,
}

impl<'t, I, W> HtmlWriter<I, W>
where
    I: Iterator<Item = StyledRun<'t>>,
    W: StrWrite,
{
    pub fn new(iter: I, writer: W) -> Self {
        Self { iter, writer }
    }

    pub fn run(mut self) -> Result<(), W::Error> {
        while let Some(run) = self.iter.next() {
            self.start_run(&run.attributes)?;
            self.write_text(run.text)?;
            self.end_run(&run.attributes)?;
        }
        Ok(())
    }
}

impl<'t, I, W> HtmlWriter<I, W>
where
    I: Iterator<Item = StyledRun<'t>>,
    W: StrWrite,
{
    fn start_run(&mut self, attributes: &TextAttributes) -> Result<(), W::Error> {
        if let Some(link) = &attributes.link {
            self.write("<a href=\"")?;
            escape_href(&mut self.writer, link.as_str())?;
            self.write("\">")?;
        }

        match attributes.font {
            Some(Font::Noticon) => self.write("<span class=\"noticon\">")?,
            Some(Font::Monospace) => self.write("<code>")?,
            Some(Font::Body) | None => {}
        }

        if let Some(color) = &attributes.color {
            self.write("<span style=\"color:")?;
            escape_html(&mut self.writer, &color.to_hex())?;
            self.write("\">")?;
        }

        if attributes.bold == Some(true) {
            self.write("<strong>")?;
        }
        if attributes.italic == Some(true) {
            self.write("<em>")?;
        }

        Ok(())
    }

    fn end_run(&mut self, attributes: &TextAttributes) -> Result<(), W::Error> {
        if attributes.italic == Some(true) {
            self.write("</em>")?;
        }
        if attributes.bold == Some(true) {
            self.write("</strong>")?;
        }
        if attributes.color.is_some() {
            self.write("</span>")?;
        }

        match attributes.font {
            Some(Font::Noticon) => self.write("</span>")?,
            Some(Font::Monospace) => self.write("</code>")?,
            Some(Font::Body) | None => {}
        }

        if attributes.link.is_some() {
            self.write("</a>")?;
        }

        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), W::Error> {
        for (idx, line) in text.split('\n').enumerate() {
            if idx > 0 {
                self.write("<br>")?;
            }
            escape_html_body_text(&mut self.writer, line)?;
        }
        Ok(())
    }

    #[inline]
    fn write(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)
    }
}

impl StyledText {
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let writer = HtmlWriter::new(self.runs().into_iter(), &mut html);
        // Writing into a String never fails.
        let _ = writer.run();
        html
    }
}
