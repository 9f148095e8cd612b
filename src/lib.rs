pub mod model;
pub mod roster;
pub mod scraper;
