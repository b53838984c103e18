use std::time::Instant;
use tmdb::*;

fn main() -> Result<(), polars::prelude::PolarsError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/movies.csv".to_string());

    let start = Instant::now();
    let mut db = data::MoviesData::new(&path)?;
    println!("load,{:}", start.elapsed().as_secs_f32());

    let start = Instant::now();
    let genres = onehot::expand(&mut db.movies, "genre_names")?;
    println!("onehot,{:}", start.elapsed().as_secs_f32());
    println!("{} movies, {} distinct genres", db.movies.height(), genres.len());

    let start = Instant::now();
    let by_decade_novel = summary::summarize(&db.movies, &["release_decade", "is_novel_based"])?;
    println!("summary,{:}", start.elapsed().as_secs_f32());
    println!("{}", by_decade_novel);

    let start = Instant::now();
    let ranks = genre_rank::rank_by_decade(&db.movies)?;
    println!("rank,{:}", start.elapsed().as_secs_f32());
    println!("{}", ranks);

    println!("{}", financials::top_profitable(&db.movies, 10)?);
    println!("{}", financials::top_budget_long(&db.movies, 10)?);
    println!("{}", financials::highest_roi(&db.movies, 10)?);

    Ok(())
}
