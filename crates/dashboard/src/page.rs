// File: crates/dashboard/src/page.rs
// Summary: Dashboard page composition from the load state, and its standalone HTML rendering.

use std::fmt::Write as _;

use chart_core::svg::escape;
use chart_core::{Chart, RenderOptions};
use tracing::{debug, info};

use crate::charts::slug;
use crate::state::LoadState;

pub const HEADING: &str = "Electric Vehicle Battery Dashboard";
pub const SUBTITLE: &str = "Real insights into your EV's battery performance";
pub const FOOTER: &str = "Data sampled every 40th row";
pub const LOADING_TEXT: &str = "Loading telemetry…";

/// One rendered chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub title: String,
    pub slug: String,
    pub svg: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Loading,
    Error { message: String },
    Dashboard { cards: Vec<Card> },
}

impl Page {
    /// Charts are only rendered once the dataset is ready, and all of them
    /// read the same snapshot.
    pub fn compose(state: &LoadState, charts: &[Chart], opts: &RenderOptions) -> Page {
        match state {
            LoadState::Loading => Page::Loading,
            LoadState::Failed(message) => Page::Error { message: message.clone() },
            LoadState::Ready(dataset) => {
                let cards = charts
                    .iter()
                    .map(|chart| {
                        debug!(title = %chart.title, "rendering card");
                        Card {
                            title: chart.title.clone(),
                            slug: slug(&chart.title),
                            svg: chart.render_to_svg_string(dataset, opts),
                        }
                    })
                    .collect::<Vec<_>>();
                info!(charts = cards.len(), rows = dataset.len(), "dashboard composed");
                Page::Dashboard { cards }
            }
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Page::Dashboard { cards } => cards,
            _ => &[],
        }
    }

    pub fn to_html(&self) -> String {
        let mut body = String::new();
        match self {
            Page::Loading => {
                let _ = write!(
                    body,
                    "<main class=\"center\"><div class=\"spinner\"></div><p>{}</p></main>",
                    escape(LOADING_TEXT)
                );
            }
            Page::Error { message } => {
                let _ = write!(
                    body,
                    "<main class=\"center\"><div class=\"error\"><p class=\"error-title\">Error: {}</p>\
                     <p class=\"hint\">Please ensure <code>battery_data.json</code> is in the <code>public</code> folder.</p></div></main>",
                    escape(message)
                );
            }
            Page::Dashboard { cards } => {
                let _ = write!(
                    body,
                    "<header><h1>{}</h1><p>{}</p></header>\n<main class=\"grid\">\n",
                    escape(HEADING),
                    escape(SUBTITLE)
                );
                for card in cards {
                    let _ = writeln!(body, "<section class=\"card\" id=\"{}\">\n{}</section>", card.slug, card.svg);
                }
                let _ = write!(body, "</main>\n<footer><p>{}</p></footer>", escape(FOOTER));
            }
        }
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
            escape(HEADING)
        )
    }
}

const STYLE: &str = "\
body{margin:0;background:#F9FAFB;font-family:Segoe UI,Arial,Helvetica,sans-serif;color:#1F2937}\
header{text-align:center;padding:40px 16px 24px}\
header h1{margin:0;font-size:2.25rem;font-weight:800}\
header p{margin-top:8px;font-size:1.125rem;color:#4B5563}\
.grid{display:grid;grid-template-columns:repeat(2,minmax(0,1fr));gap:24px;max-width:1200px;margin:0 auto;padding:0 16px}\
@media (max-width:900px){.grid{grid-template-columns:1fr}}\
.card{background:#fff;border-radius:12px;box-shadow:0 4px 6px rgba(0,0,0,.1);padding:16px}\
.card svg{width:100%;height:auto}\
.card rect.hover{cursor:crosshair}\
footer{text-align:center;color:#6B7280;font-size:.875rem;padding:32px 16px}\
.center{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center}\
.spinner{width:64px;height:64px;border:4px solid #E5E7EB;border-top-color:#3B82F6;border-radius:50%;animation:spin 1s linear infinite}\
@keyframes spin{to{transform:rotate(360deg)}}\
.error{background:#FEF2F2;border-left:4px solid #EF4444;color:#B91C1C;padding:24px;border-radius:8px;max-width:28rem}\
.error-title{font-weight:600;margin:0}\
.hint{margin-top:8px;font-size:.875rem}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_escapes_message() {
        let html = Page::Error { message: "bad <data>".into() }.to_html();
        assert!(html.contains("Error: bad &lt;data&gt;"));
        assert!(html.contains("battery_data.json"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn loading_page_has_spinner_only() {
        let html = Page::Loading.to_html();
        assert!(html.contains("class=\"spinner\""));
        assert!(!html.contains("<svg"));
        assert!(Page::Loading.cards().is_empty());
    }
}
