use polars::prelude::*;

/// The `n` highest-profit movies, profit descending.
pub fn top_profitable(df: &DataFrame, n: usize) -> Result<DataFrame, PolarsError> {
    Ok(df
        .select(["title", "profit", "is_novel_based"])?
        .sort(
            ["profit"],
            SortMultipleOptions::default().with_order_descending(true),
        )?
        .head(Some(n)))
}

/// The `n` highest-budget movies unpivoted to long form: one row per movie
/// per metric in {budget, revenue, profit}.
pub fn top_budget_long(df: &DataFrame, n: usize) -> Result<DataFrame, PolarsError> {
    let top = df
        .select(["title", "budget", "revenue", "profit"])?
        .sort(
            ["budget"],
            SortMultipleOptions::default().with_order_descending(true),
        )?
        .head(Some(n));

    let parts: Vec<LazyFrame> = ["budget", "revenue", "profit"]
        .iter()
        .map(|metric| {
            top.clone().lazy().select([
                col("title"),
                lit(*metric).alias("metric"),
                col(*metric).alias("value"),
            ])
        })
        .collect();
    concat(parts, UnionArgs::default())?.collect()
}

/// The `n` best returns on investment, descending, over rows with a positive
/// budget. Zero-budget rows have no defined ROI and are excluded.
pub fn highest_roi(df: &DataFrame, n: usize) -> Result<DataFrame, PolarsError> {
    let positive_budget = df.column("budget")?.f64()?.gt(0.0);
    Ok(df
        .filter(&positive_budget)?
        .select(["title", "roi", "is_novel_based"])?
        .sort(
            ["roi"],
            SortMultipleOptions::default().with_order_descending(true),
        )?
        .head(Some(n)))
}
