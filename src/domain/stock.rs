//! Stock levels and the changes the monitor reports.

/// Availability derived from a raw stock count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// At least one unit can be bought.
    InStock(i64),
    /// Zero (or a nonsensical negative) stock.
    OutOfStock,
}

impl StockStatus {
    #[must_use]
    pub const fn from_stock(stock: i64) -> Self {
        if stock > 0 {
            Self::InStock(stock)
        } else {
            Self::OutOfStock
        }
    }

    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::InStock(_))
    }
}

/// A stock transition observed for one product during a monitor cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub name: String,
    pub url: String,
    pub previous: i64,
    pub current: i64,
}

impl StockChange {
    /// Returns `None` when the stock did not move.
    #[must_use]
    pub fn detect(name: &str, url: &str, previous: i64, current: i64) -> Option<Self> {
        (previous != current).then(|| Self {
            name: name.to_string(),
            url: url.to_string(),
            previous,
            current,
        })
    }

    #[must_use]
    pub const fn status(&self) -> StockStatus {
        StockStatus::from_stock(self.current)
    }
}
