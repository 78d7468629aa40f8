//! NOTAM decoding functions
//!
//! Every function in this module is pure: it only looks at its arguments and
//! static lookup tables, so reports can be decoded from any number of threads.

mod body;
mod coord;
mod fields;
mod header;
mod limits;
mod qualifiers;
mod report;
mod sanitize;
mod time;

pub use self::body::{extract_body, strip_copied_tag};
pub use self::coord::{parse_coord_radius, parse_rear_coord};
pub use self::header::parse_header;
pub use self::limits::parse_limit;
pub use self::qualifiers::parse_qualifiers;
pub use self::report::{parse, parse_with_units, split_reports};
pub use self::sanitize::sanitize;
pub use self::time::{
    explicit_timezone, make_year_timestamp, parse_created, parse_linked_times, timezone_offset,
};
