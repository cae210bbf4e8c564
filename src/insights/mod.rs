//! Data shaping behind the leave and attendance pages: pure functions over
//! records that were already fetched and deserialized.

pub mod attendance_summary;
pub mod attendance_table;
pub mod dates;
pub mod leave_overview;
pub mod leave_table;
pub mod month_aggregator;
pub mod range_resolver;
pub mod status_window;

pub use month_aggregator::{aggregate, classify_window, month_calendar};
pub use range_resolver::{RangeResolver, ResolvedRange, resolve};
pub use status_window::{TimeWindow, WindowMatch, filter_by_status, filter_month, on_leave_on};
