use polars::prelude::*;

/// Groups the table by `group_by` and aggregates one row per key combination
/// present: row count plus mean vote, budget, revenue and profit, and the
/// derived mean ROI.
///
/// `roi_avg` is `profit_avg / budget_avg`; when the mean budget is null or
/// zero it is NaN rather than an error. Means over all-null subgroups come
/// out null. A missing grouping or measure column is a schema violation and
/// surfaces as a `PolarsError`.
pub fn summarize(df: &DataFrame, group_by: &[&str]) -> Result<DataFrame, PolarsError> {
    let keys: Vec<Expr> = group_by.iter().map(|name| col(*name)).collect();

    df.clone()
        .lazy()
        .group_by(keys)
        .agg([
            col("id").count().alias("count"),
            col("vote_average").mean().alias("vote_avg"),
            col("budget").mean().alias("budget_avg"),
            col("revenue").mean().alias("revenue_avg"),
            col("profit").mean().alias("profit_avg"),
        ])
        .with_column(
            when(
                col("budget_avg")
                    .is_null()
                    .or(col("budget_avg").eq(lit(0.0))),
            )
            .then(lit(f64::NAN))
            .otherwise(col("profit_avg") / col("budget_avg"))
            .alias("roi_avg"),
        )
        .collect()
}

#[cfg(test)]
mod test_summary {
    use super::*;

    #[test]
    fn test_group_by_genre() -> Result<(), PolarsError> {
        let df = df!(
            "id" => [1i32, 2],
            "genre" => ["Action", "Drama"],
            "vote_average" => [7.0, 8.0],
            "budget" => [10.0, 20.0],
            "revenue" => [15.0, 30.0],
            "profit" => [5.0, 10.0],
        )?;
        let out = summarize(&df, &["genre"])?;
        assert_eq!(out.height(), 2);

        for (genre, vote, budget, profit) in [("Action", 7.0, 10.0, 5.0), ("Drama", 8.0, 20.0, 10.0)]
        {
            let rows = out.filter(&out.column("genre")?.str()?.equal(genre))?;
            assert_eq!(rows.height(), 1);
            assert_eq!(rows.column("count")?.u32()?.get(0), Some(1));
            assert_eq!(rows.column("vote_avg")?.f64()?.get(0), Some(vote));
            assert_eq!(rows.column("budget_avg")?.f64()?.get(0), Some(budget));
            assert_eq!(rows.column("profit_avg")?.f64()?.get(0), Some(profit));
            assert_eq!(rows.column("roi_avg")?.f64()?.get(0), Some(0.5));
        }
        Ok(())
    }

    #[test]
    fn test_count_and_means_per_group() -> Result<(), PolarsError> {
        let df = df!(
            "id" => [1i32, 2, 3],
            "genre" => ["Action", "Action", "Drama"],
            "vote_average" => [6.0, 8.0, 5.0],
            "budget" => [10.0, 30.0, 40.0],
            "revenue" => [20.0, 60.0, 50.0],
            "profit" => [10.0, 30.0, 10.0],
        )?;
        let out = summarize(&df, &["genre"])?;

        let action = out.filter(&out.column("genre")?.str()?.equal("Action"))?;
        assert_eq!(action.column("count")?.u32()?.get(0), Some(2));
        assert_eq!(action.column("vote_avg")?.f64()?.get(0), Some(7.0));
        assert_eq!(action.column("budget_avg")?.f64()?.get(0), Some(20.0));
        assert_eq!(action.column("revenue_avg")?.f64()?.get(0), Some(40.0));
        assert_eq!(action.column("roi_avg")?.f64()?.get(0), Some(1.0));

        // No synthesized groups: only combinations present in the input.
        assert_eq!(out.height(), 2);
        Ok(())
    }

    #[test]
    fn test_roi_undefined_for_zero_or_null_budget() -> Result<(), PolarsError> {
        let df = df!(
            "id" => [1i32, 2],
            "genre" => ["Free", "Unknown"],
            "vote_average" => [7.0, 7.0],
            "budget" => [Some(0.0), None],
            "revenue" => [5.0, 5.0],
            "profit" => [5.0, 5.0],
        )?;
        let out = summarize(&df, &["genre"])?;
        for genre in ["Free", "Unknown"] {
            let rows = out.filter(&out.column("genre")?.str()?.equal(genre))?;
            let roi = rows.column("roi_avg")?.f64()?.get(0);
            assert!(roi.is_some_and(f64::is_nan));
        }
        Ok(())
    }

    #[test]
    fn test_all_null_measure_mean_is_null() -> Result<(), PolarsError> {
        let df = df!(
            "id" => [1i32],
            "genre" => ["Action"],
            "vote_average" => [None::<f64>],
            "budget" => [10.0],
            "revenue" => [15.0],
            "profit" => [5.0],
        )?;
        let out = summarize(&df, &["genre"])?;
        assert_eq!(out.column("vote_avg")?.f64()?.get(0), None);
        assert_eq!(out.column("roi_avg")?.f64()?.get(0), Some(0.5));
        Ok(())
    }

    #[test]
    fn test_multiple_grouping_keys() -> Result<(), PolarsError> {
        let df = df!(
            "id" => [1i32, 2, 3],
            "release_decade" => [1990i32, 1990, 2000],
            "is_novel_based" => [true, false, false],
            "vote_average" => [7.0, 6.0, 8.0],
            "budget" => [10.0, 20.0, 30.0],
            "revenue" => [20.0, 30.0, 60.0],
            "profit" => [10.0, 10.0, 30.0],
        )?;
        let out = summarize(&df, &["release_decade", "is_novel_based"])?;
        assert_eq!(out.height(), 3);

        let decade_mask = out.column("release_decade")?.i32()?.equal(1990);
        let novel_mask = out.column("is_novel_based")?.bool()?;
        let novel_90s = out.filter(&(&decade_mask & novel_mask))?;
        assert_eq!(novel_90s.height(), 1);
        assert_eq!(novel_90s.column("count")?.u32()?.get(0), Some(1));
        assert_eq!(novel_90s.column("roi_avg")?.f64()?.get(0), Some(1.0));
        Ok(())
    }

    #[test]
    fn test_missing_key_column_is_schema_error() -> Result<(), PolarsError> {
        let df = df!(
            "id" => [1i32],
            "vote_average" => [7.0],
            "budget" => [10.0],
            "revenue" => [15.0],
            "profit" => [5.0],
        )?;
        assert!(summarize(&df, &["genre"]).is_err());
        Ok(())
    }
}
