//! Browser-facing hooks. Each owns its observers, listeners and timers and
//! releases them when the calling component is unmounted.

mod active_section;
mod carousel;
mod visibility;

pub use active_section::{follow_href, scroll_to_section, use_active_section};
pub use carousel::{Carousel, use_carousel};
pub use visibility::{Visibility, use_visibility};
