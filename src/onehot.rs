use ahash::HashSet;
use polars::prelude::*;

/// Expands a `List(String)` label column into one 0/1 column per distinct
/// label observed anywhere in the table, mutating `df` in place. Returns the
/// label universe.
///
/// A null row contributes no labels and gets 0 in every label column.
/// Columns are written with `with_column`, so re-applying overwrites the
/// existing values instead of duplicating columns.
pub fn expand(df: &mut DataFrame, list_col: &str) -> Result<Vec<String>, PolarsError> {
    let lists = df.column(list_col)?.list()?.clone();

    // The universe is the union over the whole table, computed up front so
    // column creation order carries no meaning.
    let mut labels: HashSet<String> = HashSet::default();
    for row in &lists {
        if let Some(names) = row {
            for name in names.str()?.into_no_null_iter() {
                labels.insert(name.to_owned());
            }
        }
    }

    for label in &labels {
        let mut flags: Vec<i32> = Vec::with_capacity(lists.len());
        for row in &lists {
            let hit = match &row {
                Some(names) => names.str()?.into_no_null_iter().any(|name| name == label),
                None => false,
            };
            flags.push(hit as i32);
        }
        df.with_column(Series::new(label.as_str().into(), flags))?;
    }

    Ok(labels.into_iter().collect())
}
