use std::fmt;

pub const DEFAULT_COLOR: &str = "Standard";
pub const UNSPECIFIED_SIZE: &str = "–";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    Xxs,
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    ThreeXl,
    Unspecified,
}

impl Size {
    /// Sizes offered in the form, smallest first.
    pub const OFFERED: [Size; 8] = [
        Size::Xxs,
        Size::Xs,
        Size::S,
        Size::M,
        Size::L,
        Size::Xl,
        Size::Xxl,
        Size::ThreeXl,
    ];

    /// Blank input (or the sentinel itself) means unspecified; anything else
    /// must be one of the offered labels.
    pub fn parse(raw: &str) -> Option<Size> {
        let raw = raw.trim();
        if raw.is_empty() || raw == UNSPECIFIED_SIZE {
            return Some(Size::Unspecified);
        }
        Size::OFFERED
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Xxs => "XXS",
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
            Size::ThreeXl => "3XL",
            Size::Unspecified => UNSPECIFIED_SIZE,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who pays for a line-item. Raw values other than `self` and `club` are kept
/// verbatim and act as their own display label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Payment {
    #[default]
    SelfPay,
    Club,
    Other(String),
}

impl Payment {
    pub const OFFERED: [Payment; 2] = [Payment::SelfPay, Payment::Club];

    pub fn parse(raw: &str) -> Payment {
        match raw.trim() {
            "self" => Payment::SelfPay,
            "club" => Payment::Club,
            other => Payment::Other(other.to_string()),
        }
    }

    /// Form value of the payment option.
    pub fn key(&self) -> &str {
        match self {
            Payment::SelfPay => "self",
            Payment::Club => "club",
            Payment::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Payment::SelfPay => "Selbstzahler",
            Payment::Club => "Vereinskosten",
            Payment::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub item: String,
    pub qty: u32,
    pub size: Size,
    pub color: String,
    pub payment: Payment,
    pub custom: bool,
}

impl LineItem {
    pub fn color_or_default(&self) -> &str {
        let color = self.color.trim();
        if color.is_empty() { DEFAULT_COLOR } else { color }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub timestamp: String,
    pub buyer: String,
    pub articles: Vec<LineItem>,
}

impl Order {
    pub fn total_quantity(&self) -> u64 {
        self.articles.iter().map(|article| u64::from(article.qty)).sum()
    }
}
