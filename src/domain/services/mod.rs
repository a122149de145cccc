//! Domain Services
//!
//! Pure migration logic that operates on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod detector;
pub mod locator;
pub mod planner;
pub mod renderer;
pub mod version_stamp;

pub use detector::missing_keys;
pub use locator::{
    extract_key, extract_section, find_key_insertion_point, find_section_insertion_point,
    locate_key, locate_section, LocateError, Span,
};
pub use planner::{group_by_section, ChangeKind, MergePlanner, SectionChange, SectionGroup};
pub use renderer::{render_entry, render_value};
pub use version_stamp::{build_version_block, restamp, strip_version_block};
