// Councils whose collection page lists one `service-item` block per bin:
//
//   <div class="service-item ...">
//     <div>
//       <h3>Black bin</h3>
//       <p>Next collection</p>
//       <p>Friday, 16 June 2023</p>
//     </div>
//   </div>
use super::Council;
use crate::error::{Error, Result};
use crate::model::{AdapterDescriptor, CollectionReport, RawPage};
use scraper::{ElementRef, Html, Selector};

pub const STOCKPORT: AdapterDescriptor = AdapterDescriptor {
    name: "StockportBoroughCouncil",
    description: "Stockport Borough Council (myaccount.stockport.gov.uk)",
};

pub fn stockport() -> Result<Box<dyn Council>> {
    Ok(Box::new(ServiceItemCouncil::new(STOCKPORT.name)?))
}

pub struct ServiceItemCouncil {
    name: &'static str,
    item: Selector,
    container: Selector,
    heading: Selector,
    paragraph: Selector,
}

impl ServiceItemCouncil {
    pub fn new(name: &'static str) -> Result<Self> {
        Ok(Self {
            name,
            item: compile(name, r#"div[class*="service-item"]"#)?,
            container: compile(name, "div")?,
            heading: compile(name, "h3")?,
            paragraph: compile(name, "div > p")?,
        })
    }

    /// Text of the first `h3` under the item's first `div`
    fn label(&self, item: &ElementRef) -> Result<String> {
        item.select(&self.container)
            .next()
            .and_then(|div| div.select(&self.heading).next())
            .map(|h3| h3.text().collect::<String>().trim().to_string())
            .ok_or_else(|| Error::parse(self.name, "service item has no heading"))
    }

    /// Second paragraph holds the date; the first is a caption
    fn description(&self, item: &ElementRef, label: &str) -> Result<String> {
        item.select(&self.paragraph)
            .nth(1)
            .map(|p| stripped_text(&p))
            .ok_or_else(|| {
                Error::parse(
                    self.name,
                    format!("service item {label:?} has no collection paragraph"),
                )
            })
    }
}

impl Council for ServiceItemCouncil {
    fn name(&self) -> &str {
        self.name
    }

    fn parse(&self, page: &RawPage) -> Result<CollectionReport> {
        let document = Html::parse_document(&page.body);
        let mut report = CollectionReport::with_bins_scaffold();

        for item in document.select(&self.item) {
            let label = self.label(&item)?;
            let description = self.description(&item, &label)?;

            if description.is_empty() {
                tracing::debug!(council = self.name, %label, "skipping bin with no date");
                continue;
            }
            report.insert(label, description);
        }

        Ok(report)
    }
}

fn compile(name: &str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::AdapterLoad {
        name: name.to_string(),
        message: format!("invalid selector {css:?}: {e:?}"),
    })
}

/// Every text node trimmed, empty ones dropped, the rest joined without a separator
fn stripped_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
