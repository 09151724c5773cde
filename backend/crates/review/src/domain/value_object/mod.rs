//! Value Object Module

pub mod average_rating;
pub mod rating;
pub mod review_text;
