// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-page HTML report around the SVG dumps.

use std::fmt::Write as _;

use crate::svg::escape_xml;

/// One venue panel in the report.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) notes: Vec<String>,
    pub(crate) svgs: Vec<(String, String)>,
}

impl HtmlSection {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notes: Vec::new(),
            svgs: Vec::new(),
        }
    }

    pub(crate) fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub(crate) fn svg(&mut self, caption: impl Into<String>, svg: String) {
        self.svgs.push((caption.into(), svg));
    }
}

const STYLE: &str = "body{font-family:sans-serif;margin:24px;background:#fafafa;color:#222}\
section{margin-bottom:40px}\
.row{display:flex;flex-wrap:wrap;gap:16px}\
figure{margin:0;background:#fff;border:1px solid #ddd;padding:8px}\
figure svg{width:480px;height:auto}\
figcaption{font-size:13px;color:#555}\
ul{font-size:14px}";

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let title = escape_xml(title);
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>{STYLE}</style></head><body>\n<h1>{title}</h1>\n"
    );
    for section in sections {
        let _ = writeln!(out, "<section><h2>{}</h2>", escape_xml(&section.title));
        if !section.notes.is_empty() {
            out.push_str("<ul>");
            for note in &section.notes {
                let _ = write!(out, "<li>{}</li>", escape_xml(note));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("<div class=\"row\">\n");
        for (caption, svg) in &section.svgs {
            let _ = write!(
                out,
                "<figure>{svg}<figcaption>{}</figcaption></figure>\n",
                escape_xml(caption)
            );
        }
        out.push_str("</div></section>\n");
    }
    out.push_str("</body></html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_escapes_text_but_embeds_svg() {
        let mut section = HtmlSection::new("Kingsway & Co");
        section.note("3 < 4");
        section.svg("before", "<svg></svg>".to_string());
        let html = render_report("Seat maps", &[section]);
        assert!(html.contains("<h2>Kingsway &amp; Co</h2>"));
        assert!(html.contains("<li>3 &lt; 4</li>"));
        assert!(html.contains("<figure><svg></svg><figcaption>before</figcaption>"));
    }
}
