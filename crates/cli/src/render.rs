//! Human table and CSV renderings of a [`SalesReport`].

use std::io::Write;

use salesboard_stats::model::TopProduct;
use salesboard_stats::SalesReport;

use crate::util::{display_width, money, pad_left, pad_right};

const NAME_WIDTH: usize = 24;
const TOP_SHOWN: usize = 3;

fn top_summary(products: &[TopProduct], limit: usize) -> String {
    products
        .iter()
        .take(limit)
        .map(|p| format!("{}×{}", p.sku, p.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_table(report: &SalesReport) -> String {
    let headers = ["#", "seller", "name", "revenue", "profit", "sales", "bonus"];

    let rows: Vec<[String; 7]> = report
        .sellers
        .iter()
        .enumerate()
        .map(|(rank, row)| {
            [
                (rank + 1).to_string(),
                row.seller_id.clone(),
                row.name.clone(),
                money(row.revenue),
                money(row.profit),
                row.sales_count.to_string(),
                money(row.bonus),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }
    widths[2] = widths[2].min(NAME_WIDTH);

    // Columns 0 and 3.. are numeric and right-aligned.
    let cell = |i: usize, s: &str| {
        if i == 1 || i == 2 {
            pad_right(s, widths[i])
        } else {
            pad_left(s, widths[i])
        }
    };

    let mut out = String::new();
    let header_line: Vec<String> = headers.iter().enumerate().map(|(i, h)| cell(i, *h)).collect();
    out.push_str(&header_line.join("  "));
    out.push_str("  top products\n");

    for (row, seller) in rows.iter().zip(&report.sellers) {
        let line: Vec<String> = row.iter().enumerate().map(|(i, s)| cell(i, s.as_str())).collect();
        out.push_str(&line.join("  "));
        out.push_str("  ");
        out.push_str(&top_summary(&seller.top_products, TOP_SHOWN));
        out.push('\n');
    }

    let s = &report.summary;
    out.push_str(&format!(
        "\n{} seller(s), {} sale(s): revenue {}, profit {}, bonuses {}\n",
        report.meta.seller_count,
        s.total_sales,
        money(s.total_revenue),
        money(s.total_profit),
        money(s.total_bonus),
    ));
    out
}

/// One line per seller; `top_products` flattened as `sku:qty;sku:qty`.
pub fn write_csv<W: Write>(report: &SalesReport, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "rank",
        "seller_id",
        "name",
        "revenue",
        "profit",
        "sales_count",
        "bonus",
        "top_products",
    ])?;

    for (rank, row) in report.sellers.iter().enumerate() {
        let top = row
            .top_products
            .iter()
            .map(|p| format!("{}:{}", p.sku, p.quantity))
            .collect::<Vec<_>>()
            .join(";");
        wtr.write_record([
            (rank + 1).to_string(),
            row.seller_id.clone(),
            row.name.clone(),
            money(row.revenue),
            money(row.profit),
            row.sales_count.to_string(),
            money(row.bonus),
            top,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
