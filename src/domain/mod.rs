//! Domain logic - pure version rules independent of where tags come from

pub mod latest;
pub mod level;
pub mod version;

pub use latest::{latest_tag, version_less};
pub use level::BumpLevel;
pub use version::{next_tag, TagVersion};
