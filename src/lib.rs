// Utility Belt - Core Library
// Eight independent helpers over plain values and small record batches

pub mod error;
pub mod value;    // Value formatter
pub mod length;   // Length computor
pub mod person;
pub mod filters;  // Rating + active-user filters
pub mod book;     // Book printer
pub mod union;    // Asymmetric union of two sequences
pub mod pricing;  // Total price with optional discount
pub mod config;
pub mod records;  // CSV / JSON batch loading

// Re-export commonly used types
pub use error::{Result, UtilityError};
pub use value::{format_value, InputValue};
pub use length::{get_length, get_length_of_value, LengthInput};
pub use person::Person;
pub use filters::{
    filter_active_users, filter_by_config, filter_by_min_rating, filter_by_rating,
    RatedItem, User,
};
pub use book::{format_book_details, print_book_details, write_book_details, Book};
pub use union::{get_unique_values, MixedValue};
pub use pricing::{calculate_total_price, Product};
pub use config::{FilterConfig, DEFAULT_MIN_RATING};
pub use records::{load_csv, load_json};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
