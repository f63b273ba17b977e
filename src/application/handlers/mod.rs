//! Command handlers.

mod resolve_departure_date;

pub use resolve_departure_date::{
    DateResolution, ResolveDateError, ResolveDepartureDateCommand, ResolveDepartureDateHandler,
};
