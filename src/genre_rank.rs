use ahash::HashMap;
use polars::prelude::*;

/// Counts movies per genre per decade and ranks genres within each decade by
/// movie count, rank 1 = most movies. Ties break on genre name ascending so
/// ranks are total. Rows with a null decade or an empty genre list are
/// skipped.
pub fn rank_by_decade(df: &DataFrame) -> Result<DataFrame, PolarsError> {
    let decades = df.column("release_decade")?.i32()?;
    let lists = df.column("genre_names")?.list()?;

    let mut counts: HashMap<(i32, String), u32> = HashMap::default();
    for (decade, names) in decades.into_iter().zip(lists) {
        let (Some(decade), Some(names)) = (decade, names) else {
            continue;
        };
        for name in names.str()?.into_no_null_iter() {
            *counts.entry((decade, name.to_owned())).or_insert(0) += 1;
        }
    }

    let mut by_decade: HashMap<i32, Vec<(String, u32)>> = HashMap::default();
    for ((decade, genre), n) in counts {
        by_decade.entry(decade).or_default().push((genre, n));
    }
    let mut by_decade: Vec<(i32, Vec<(String, u32)>)> = by_decade.into_iter().collect();
    by_decade.sort_unstable_by_key(|(decade, _)| *decade);

    let mut decade_col = Vec::new();
    let mut genre_col = Vec::new();
    let mut count_col = Vec::new();
    let mut rank_col = Vec::new();
    for (decade, mut genres) in by_decade {
        genres.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        for (idx, (genre, n)) in genres.into_iter().enumerate() {
            decade_col.push(decade);
            genre_col.push(genre);
            count_col.push(n);
            rank_col.push(idx as u32 + 1);
        }
    }

    df!(
        "release_decade" => decade_col,
        "genre" => genre_col,
        "count" => count_col,
        "rank" => rank_col,
    )
}
