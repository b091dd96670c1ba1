mod methods;
mod types;


pub use types::{Lead, LeadDraft, LeadStatus, Priority};
