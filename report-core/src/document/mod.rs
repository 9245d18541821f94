//! Presentation-agnostic report tree.
//!
//! A [`ReportDocument`] is an ordered list of pages, each an ordered list of
//! titled sections. Values are stored raw; currency symbols, separators and
//! date spelling are left to the serializer.
//!
//! Sections whose blocks are all blank are dropped when a page is assembled,
//! except for the header and disclaimer which are always kept.

mod rental;
mod turnover;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use rental::build_rental_document;
pub use turnover::build_turnover_document;

/// The two report flavours the builders produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    RentalEstimate,
    TurnoverReport,
}

impl ReportKind {
    /// Filename prefix for exported files.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::RentalEstimate => "rental-estimate",
            Self::TurnoverReport => "turnover-report",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::RentalEstimate => "MoveZen Rental Estimate",
            Self::TurnoverReport => "Move-Out Turnover Report",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub kind: ReportKind,
    pub title: String,
    pub pages: Vec<ReportPage>,
}

impl ReportDocument {
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.pages.iter().flat_map(|page| page.sections.iter())
    }

    pub fn section(
        &self,
        title: &str,
    ) -> Option<&Section> {
        self.sections().find(|section| section.title == title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPage {
    pub sections: Vec<Section>,
}

impl ReportPage {
    /// Assembles a page, dropping blank sections other than the header and
    /// disclaimer.
    pub fn assemble(sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            sections: sections
                .into_iter()
                .filter(|section| section.role.always_emitted() || !section.is_blank())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionRole {
    Header,
    Overview,
    Financial,
    Budget,
    Narrative,
    Links,
    Footer,
    Disclaimer,
}

impl SectionRole {
    pub fn always_emitted(&self) -> bool {
        matches!(self, Self::Header | Self::Disclaimer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub role: SectionRole,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(
        role: SectionRole,
        title: impl Into<String>,
    ) -> Self {
        Self {
            role,
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn block(
        mut self,
        block: Block,
    ) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn blocks(
        mut self,
        blocks: impl IntoIterator<Item = Block>,
    ) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn is_blank(&self) -> bool {
        self.blocks.iter().all(Block::is_blank)
    }
}

/// Emphasis applied to a highlight box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Neutral,
    Primary,
    Positive,
    Caution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub tone: Tone,
    pub label: String,
    pub value: Value,
    pub caption: Option<String>,
}

impl Highlight {
    pub fn new(
        tone: Tone,
        label: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            tone,
            label: label.into(),
            value,
            caption: None,
        }
    }

    pub fn with_caption(
        mut self,
        caption: impl Into<String>,
    ) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Row { label: String, value: Value },
    Highlight(Highlight),
    /// Several highlights laid out side by side.
    Highlights(Vec<Highlight>),
    Paragraph(String),
    Link { label: String, url: String },
}

impl Block {
    pub fn row(
        label: impl Into<String>,
        value: Value,
    ) -> Self {
        Self::Row {
            label: label.into(),
            value,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }

    pub fn link(
        label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Row { value, .. } => value.is_blank(),
            Self::Highlight(highlight) => highlight.value.is_blank(),
            Self::Highlights(highlights) => highlights.iter().all(|h| h.value.is_blank()),
            Self::Paragraph(text) => text.trim().is_empty(),
            Self::Link { url, .. } => url.trim().is_empty(),
        }
    }
}

/// A raw value; formatting is up to the serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Money(Decimal),
    Text(String),
    Date(NaiveDate),
    Days(u32),
    Months(u32),
    /// A plain ratio such as rent per square foot.
    Ratio(Decimal),
    /// A fraction rendered as a percentage (0.15 → 15%).
    Percent(Decimal),
    /// A monthly rate carried over a number of months.
    RateProjection {
        rate: Decimal,
        months: u32,
        total: Decimal,
    },
}

impl Value {
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Money(amount) | Self::Ratio(amount) | Self::Percent(amount) => amount.is_zero(),
            Self::Text(text) => text.trim().is_empty(),
            Self::Date(_) => false,
            Self::Days(n) | Self::Months(n) => *n == 0,
            Self::RateProjection { rate, total, .. } => rate.is_zero() && total.is_zero(),
        }
    }
}

/// Keeps only the links that have a URL.
pub(crate) fn present_links<'a>(
    links: impl IntoIterator<Item = (&'static str, &'a str)>,
) -> Vec<Block> {
    links
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(label, url)| Block::link(label, url.trim()))
        .collect()
}
