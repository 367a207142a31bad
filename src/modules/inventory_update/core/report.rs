use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::inventory_update::core::metrics::{CogsRank, ProductMetrics};
use crate::modules::inventory_update::core::period::Period;
use crate::modules::inventory_update::core::product_code::normalize_product_code;
use crate::modules::inventory_update::core::table::{Cell, Table};

pub const PRODUCT: &str = "Product";
pub const ON_HAND_QTY: &str = "OnHandQty";
pub const AVG_PRICE_TOTAL: &str = "AvgPriceTotal";
pub const STATUS: &str = "Status";
pub const BRANCH: &str = "Rama";

pub const QTY: &str = "Qty";
pub const TOTAL_LINES: &str = "TotalLineas";
pub const TOTAL_COST: &str = "TotalCosto";
pub const DAY: &str = "Dia";
pub const MONTH: &str = "Mes";
pub const YEAR: &str = "Anio";

const INVENTORY_RENAMES: [(&str, &str); 3] = [
    ("Número de artículo", PRODUCT),
    ("TTL", ON_HAND_QTY),
    ("Precio promedio total", AVG_PRICE_TOTAL),
];

const SALES_RENAMES: [(&str, &str); 7] = [
    ("Número de artículo", PRODUCT),
    ("Cantidad", QTY),
    ("Total líneas", TOTAL_LINES),
    ("Total Costo", TOTAL_COST),
    ("Día", DAY),
    ("Mes", MONTH),
    ("Año", YEAR),
];

// Columns appended after the inventory's own columns, in output order.
pub const SALES_12M: &str = "Sls12";
pub const COGS_12M: &str = "Cogs12";
pub const QTY_12M: &str = "Qty12";
pub const INVENTORY_VALUE: &str = "Inventory$";
pub const SALES_12M_LABEL: &str = "12-Mo-Sls$";
pub const COGS_12M_LABEL: &str = "12-Mo-COGS$";
pub const QTY_12M_LABEL: &str = "12-Mo-Sales";
pub const GROSS_MARGIN: &str = "Gross Margin";
pub const DAYS_OF_STOCK: &str = "Dy  Stock";
pub const GMROI: &str = "GMROI";
pub const ACCUMULATED_COGS: &str = "Accum $";
pub const ACCUMULATED_SHARE: &str = "Accum%";
pub const COGS_RANK: &str = "COGS Rank";
pub const DISCONTINUED_INVENTORY: &str = "Discontinued Inv";
pub const NBO_INVENTORY: &str = "Inv. NBO $";

const DISCONTINUED: &str = "DESCONTINUADO";
const NBO: &str = "NBO";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("{sheet} workbook is missing column {column:?}")]
    MissingColumn {
        sheet: &'static str,
        column: &'static str,
    },
}

/// One sales line after column renaming and numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleLine {
    pub product: String,
    pub qty: f64,
    pub total_lines: f64,
    pub total_cost: f64,
    pub year: Option<f64>,
    pub month: Option<f64>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default)]
struct TrailingTotals {
    sales: f64,
    cogs: f64,
    qty: f64,
}

struct ReportRow {
    cells: Vec<Cell>,
    product: String,
    on_hand_qty: f64,
    metrics: ProductMetrics,
}

/// Strips surrounding whitespace and one trailing dot from an inventory header.
pub fn clean_inventory_header(name: &str) -> String {
    let trimmed = name.trim();
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

fn rename(name: &str, renames: &[(&str, &str)]) -> String {
    renames
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| name.to_string())
}

fn require(table: &Table, sheet: &'static str, column: &'static str) -> Result<usize, ReportError> {
    table
        .column_index(column)
        .ok_or(ReportError::MissingColumn { sheet, column })
}

fn whole(value: Option<f64>) -> Option<i64> {
    value.filter(|v| v.fract() == 0.0).map(|v| v as i64)
}

pub fn parse_sales(mut sales: Table) -> Result<Vec<SaleLine>, ReportError> {
    sales.rename_columns(|name| rename(name, &SALES_RENAMES));
    let product = require(&sales, "sales", PRODUCT)?;
    let qty = require(&sales, "sales", QTY)?;
    let total_lines = require(&sales, "sales", TOTAL_LINES)?;
    let total_cost = require(&sales, "sales", TOTAL_COST)?;
    let day = require(&sales, "sales", DAY)?;
    let month = require(&sales, "sales", MONTH)?;
    let year = require(&sales, "sales", YEAR)?;

    Ok(sales
        .rows()
        .iter()
        .map(|row| {
            let (d, m, y) = (
                row[day].as_number(),
                row[month].as_number(),
                row[year].as_number(),
            );
            let date = match (whole(y), whole(m), whole(d)) {
                (Some(y), Some(m), Some(d)) => i32::try_from(y)
                    .ok()
                    .zip(u32::try_from(m).ok())
                    .zip(u32::try_from(d).ok())
                    .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d)),
                _ => None,
            };
            SaleLine {
                product: normalize_product_code(&row[product]),
                qty: row[qty].as_number().unwrap_or(0.0),
                total_lines: row[total_lines].as_number().unwrap_or(0.0),
                total_cost: row[total_cost].as_number().unwrap_or(0.0),
                year: y,
                month: m,
                date,
            }
        })
        .collect())
}

/// Builds the updated inventory sheet for `period`.
///
/// Inventory rows keep their own columns (headers cleaned, product codes
/// normalized, blank cells filled with 0) and gain the period's sold quantity,
/// the trailing twelve-month totals, the derived metrics and the COGS ABC rank.
/// Rows are ordered by twelve-month COGS, highest first, and only rows with
/// stock on hand or with any recorded sale are kept.
pub fn update_inventory(
    mut inventory: Table,
    sales: Table,
    period: Period,
) -> Result<Table, ReportError> {
    inventory.rename_columns(|name| rename(&clean_inventory_header(name), &INVENTORY_RENAMES));
    let product = require(&inventory, "inventory", PRODUCT)?;
    let on_hand = require(&inventory, "inventory", ON_HAND_QTY)?;
    let avg_price = require(&inventory, "inventory", AVG_PRICE_TOTAL)?;
    let status = inventory.column_index(STATUS);
    let branch = inventory.column_index(BRANCH);

    let sales = parse_sales(sales)?;
    let sold_products: HashSet<&str> = sales.iter().map(|s| s.product.as_str()).collect();

    let mut monthly_qty: HashMap<&str, f64> = HashMap::new();
    let (year, month) = (f64::from(period.year()), f64::from(period.month()));
    for line in sales
        .iter()
        .filter(|l| l.year == Some(year) && l.month == Some(month))
    {
        *monthly_qty.entry(line.product.as_str()).or_default() += line.qty;
    }

    let (start, end) = period.trailing_window();
    let mut trailing: HashMap<&str, TrailingTotals> = HashMap::new();
    for line in sales
        .iter()
        .filter(|l| l.date.is_some_and(|d| d >= start && d < end))
    {
        let totals = trailing.entry(line.product.as_str()).or_default();
        totals.sales += line.total_lines;
        totals.cogs += line.total_cost;
        totals.qty += line.qty;
    }

    let qty_column = period.monthly_qty_column();
    let mut output = Table::new(inventory.columns().to_vec());
    let computed = [
        qty_column.as_str(),
        SALES_12M,
        COGS_12M,
        QTY_12M,
        INVENTORY_VALUE,
        SALES_12M_LABEL,
        COGS_12M_LABEL,
        QTY_12M_LABEL,
        GROSS_MARGIN,
        DAYS_OF_STOCK,
        GMROI,
        ACCUMULATED_COGS,
        ACCUMULATED_SHARE,
        COGS_RANK,
        DISCONTINUED_INVENTORY,
        NBO_INVENTORY,
    ]
    .map(|name| output.ensure_column(name));
    let width = output.columns().len();

    let mut rows: Vec<ReportRow> = inventory
        .into_rows()
        .into_iter()
        .map(|mut cells| {
            let code = normalize_product_code(&cells[product]);
            cells[product] = Cell::Text(code.clone());
            for cell in cells.iter_mut().filter(|c| c.is_empty()) {
                *cell = Cell::Number(0.0);
            }
            let on_hand_qty = cells[on_hand].as_number().unwrap_or(0.0);
            let totals = trailing.get(code.as_str()).copied().unwrap_or_default();
            let metrics = ProductMetrics::compute(
                on_hand_qty,
                cells[avg_price].as_number().unwrap_or(0.0),
                totals.sales,
                totals.cogs,
                totals.qty,
            );
            let sold = monthly_qty.get(code.as_str()).copied().unwrap_or(0.0);

            cells.resize(width, Cell::Empty);
            let [qty, s12, c12, q12, inv, s_label, c_label, q_label, margin, days, gmroi, ..] =
                computed;
            cells[qty] = Cell::Number(sold.trunc());
            cells[s12] = Cell::Number(metrics.sales_12m);
            cells[c12] = Cell::Number(metrics.cogs_12m);
            cells[q12] = Cell::Number(metrics.qty_12m);
            cells[inv] = Cell::Number(metrics.inventory_value);
            cells[s_label] = Cell::Number(metrics.sales_12m);
            cells[c_label] = Cell::Number(metrics.cogs_12m);
            cells[q_label] = Cell::Number(metrics.qty_12m);
            cells[margin] = Cell::Number(metrics.gross_margin);
            cells[days] = Cell::Number(metrics.days_of_stock);
            cells[gmroi] = Cell::Number(metrics.gmroi);

            ReportRow {
                cells,
                product: code,
                on_hand_qty,
                metrics,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.metrics.cogs_12m.total_cmp(&a.metrics.cogs_12m));

    let total_cogs: f64 = rows.iter().map(|r| r.metrics.cogs_12m).sum();
    let [.., accumulated, share, rank, discontinued, nbo] = computed;
    let mut running = 0.0;
    for row in &mut rows {
        running += row.metrics.cogs_12m;
        let cumulative_share = (total_cogs != 0.0).then(|| running / total_cogs);
        let inventory_value = row.metrics.inventory_value;

        row.cells[accumulated] = Cell::Number(running);
        row.cells[share] = cumulative_share.map_or(Cell::Empty, Cell::Number);
        row.cells[rank] = Cell::text(CogsRank::from_cumulative_share(cumulative_share).as_str());
        row.cells[discontinued] = if has_marker(&row.cells, status, DISCONTINUED) {
            Cell::Number(inventory_value)
        } else {
            Cell::text("")
        };
        row.cells[nbo] = if has_marker(&row.cells, branch, NBO) {
            Cell::Number(inventory_value)
        } else {
            Cell::Number(0.0)
        };
    }

    for row in rows {
        if row.on_hand_qty > 0.0 || sold_products.contains(row.product.as_str()) {
            output.push_row(row.cells);
        }
    }
    Ok(output)
}

fn has_marker(cells: &[Cell], column: Option<usize>, marker: &str) -> bool {
    column
        .and_then(|c| cells[c].as_text())
        .is_some_and(|text| text.to_uppercase() == marker)
}
