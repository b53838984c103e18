use crate::decode;
use polars::prelude::*;

// Expected CSV columns:
//     id              integer
//     title           text
//     budget          integer ($)
//     revenue         integer ($)
//     vote_average    float
//     release_date    text (YYYY-MM-DD)
//     genres          text (encoded list of {id, name})
//     keywords        text (encoded list of {id, name})
pub struct MoviesData {
    pub movies: DataFrame,
}

impl MoviesData {
    pub fn new(path: &str) -> Result<Self, PolarsError> {
        let mut movies = load_movies(path)?;
        derive_columns(&mut movies)?;
        Ok(MoviesData { movies })
    }
}

pub fn load_movies(path: &str) -> Result<DataFrame, PolarsError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(10_000))
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()
}

/// Adds the derived columns the analysis runs on: budget/revenue/profit in
/// $M, ROI in percent, release decade, decoded genre and keyword name lists,
/// and the novel-adaptation flag.
pub fn derive_columns(movies: &mut DataFrame) -> Result<(), PolarsError> {
    let budget = movies.column("budget")?.cast(&DataType::Float64)?;
    let budget = budget.f64()? / 1_000_000.0;
    let revenue = movies.column("revenue")?.cast(&DataType::Float64)?;
    let revenue = revenue.f64()? / 1_000_000.0;
    let profit = &revenue - &budget;

    let roi: Float64Chunked = (&budget)
        .into_iter()
        .zip(&profit)
        .map(|(budget, profit)| match (budget, profit) {
            (Some(b), Some(p)) if b != 0.0 => Some(p / b * 100.0),
            (Some(_), Some(_)) => Some(f64::NAN),
            _ => None,
        })
        .collect();

    let decade: Int32Chunked = movies
        .column("release_date")?
        .str()?
        .into_iter()
        .map(|date| {
            date.and_then(|d| d.get(..4))
                .and_then(|year| year.parse::<i32>().ok())
                .map(|year| year - year.rem_euclid(10))
        })
        .collect();

    movies.with_column(budget.with_name("budget".into()).into_series())?;
    movies.with_column(revenue.with_name("revenue".into()).into_series())?;
    movies.with_column(profit.with_name("profit".into()).into_series())?;
    movies.with_column(roi.with_name("roi".into()).into_series())?;
    movies.with_column(decade.with_name("release_decade".into()).into_series())?;

    decode::with_decoded_names(movies, "genres", "genre_names")?;
    decode::with_decoded_names(movies, "keywords", "keyword_names")?;

    let keyword_lists = movies.column("keyword_names")?.list()?.clone();
    let mut novel: Vec<bool> = Vec::with_capacity(keyword_lists.len());
    for row in &keyword_lists {
        let hit = match &row {
            Some(names) => names
                .str()?
                .into_no_null_iter()
                .any(|name| name == "based on novel"),
            None => false,
        };
        novel.push(hit);
    }
    movies.with_column(Series::new("is_novel_based".into(), novel))?;

    Ok(())
}
