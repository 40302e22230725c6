pub mod accounttype;
pub mod movie_review;
