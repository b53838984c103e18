pub mod data;
pub mod decode;
pub mod financials;
pub mod genre_rank;
pub mod onehot;
pub mod summary;
