//! Request assembly
//!
//! [`SearchRequest`] is the root document handed to a transport. The other
//! types here are auxiliary components that only fit specific request (or
//! filter) slots and carry their own guard category.

mod geo_point;
mod highlight;
mod rescore;
mod search_request;
mod sort;

pub use geo_point::GeoPoint;
pub use highlight::Highlight;
pub use rescore::Rescore;
pub use search_request::SearchRequest;
pub use sort::{Sort, SortMode, SortOrder};
