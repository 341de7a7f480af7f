//! Derived data products built from the curated movies and ratings frames.

use polars::prelude::{
    col, DataFrame, IntoLazy, JoinArgs, JoinType, MaintainOrderJoin, SortMultipleOptions,
};
use tracing::debug;

use lens_model::Result;

fn left_join_args() -> JoinArgs {
    let mut args = JoinArgs::new(JoinType::Left);
    args.maintain_order = MaintainOrderJoin::Left;
    args
}

/// Per-movie rating statistics: max, min, and average rating for each
/// movie, left-joined onto the movies frame so every movie appears even
/// when it has no ratings.
pub fn movie_rating_stats(movies: &DataFrame, ratings: &DataFrame) -> Result<DataFrame> {
    let stats = ratings
        .clone()
        .lazy()
        .group_by([col("movieid")])
        .agg([
            col("ratings").max().alias("max_rating"),
            col("ratings").min().alias("min_rating"),
            col("ratings").mean().alias("avg_rating"),
        ]);

    let joined = movies
        .clone()
        .lazy()
        .join(stats, [col("movieid")], [col("movieid")], left_join_args())
        .collect()?;

    debug!(
        movies = movies.height(),
        rows = joined.height(),
        "movie rating stats derived"
    );
    Ok(joined)
}

/// Each user's first `per_user` rated movies, enriched with movie titles
/// and genres. Rows keep their file order within a user, matching the
/// stable sort the curated ratings arrive in.
pub fn top_movies_per_user(
    ratings: &DataFrame,
    movies: &DataFrame,
    per_user: usize,
) -> Result<DataFrame> {
    let top = ratings
        .clone()
        .lazy()
        .sort(
            ["userid"],
            SortMultipleOptions::default().with_maintain_order(true),
        )
        .group_by_stable([col("userid")])
        .head(Some(per_user));

    let joined = top
        .join(
            movies.clone().lazy(),
            [col("movieid")],
            [col("movieid")],
            left_join_args(),
        )
        .collect()?;

    debug!(
        ratings = ratings.height(),
        rows = joined.height(),
        per_user,
        "top movies per user derived"
    );
    Ok(joined)
}
