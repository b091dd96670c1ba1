pub mod lead;
pub mod section;
pub mod sort;

pub use lead::{Lead, LeadDraft, LeadStatus, Priority};
pub use section::Section;
pub use sort::SortKey;
