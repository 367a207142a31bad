const DAYS_PER_YEAR: f64 = 365.0;

/// Per-product figures derived from stock on hand and trailing twelve-month sales.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProductMetrics {
    pub inventory_value: f64,
    pub sales_12m: f64,
    pub cogs_12m: f64,
    pub qty_12m: f64,
    pub gross_margin: f64,
    pub days_of_stock: f64,
    pub gmroi: f64,
}

impl ProductMetrics {
    pub fn compute(
        on_hand_qty: f64,
        avg_price_total: f64,
        sales_12m: f64,
        cogs_12m: f64,
        qty_12m: f64,
    ) -> Self {
        let inventory_value = if on_hand_qty > 0.0 {
            on_hand_qty * avg_price_total
        } else {
            0.0
        };
        let gross_profit = sales_12m - cogs_12m;
        Self {
            inventory_value,
            sales_12m,
            cogs_12m,
            qty_12m,
            gross_margin: ratio_if_positive(gross_profit, sales_12m),
            days_of_stock: ratio_if_positive(inventory_value, cogs_12m / DAYS_PER_YEAR),
            gmroi: ratio_if_positive(gross_profit, inventory_value),
        }
    }
}

fn ratio_if_positive(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// ABC class by cumulative share of twelve-month COGS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CogsRank {
    A,
    B,
    C,
    D,
}

impl CogsRank {
    /// `None` (no COGS at all) ranks as `D`.
    pub fn from_cumulative_share(share: Option<f64>) -> Self {
        match share {
            Some(p) if p <= 0.80 => CogsRank::A,
            Some(p) if p <= 0.95 => CogsRank::B,
            Some(p) if p <= 0.99 => CogsRank::C,
            _ => CogsRank::D,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CogsRank::A => "A",
            CogsRank::B => "B",
            CogsRank::C => "C",
            CogsRank::D => "D",
        }
    }
}
