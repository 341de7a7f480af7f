mod products;

pub use products::{movie_rating_stats, top_movies_per_user};
