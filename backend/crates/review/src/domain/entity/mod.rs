//! Entity Module

pub mod book_rating;
pub mod review;
