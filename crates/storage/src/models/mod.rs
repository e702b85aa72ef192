mod rating_history;
mod team;

pub use rating_history::RatingHistory;
pub use team::Team;
