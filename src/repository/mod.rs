mod cast;
mod movies;
mod oscars;
mod people;
mod ratings;

pub use cast::Cast;
pub use movies::Movies;
pub use oscars::Oscars;
pub use people::{Actors, Directors};
pub use ratings::Ratings;
