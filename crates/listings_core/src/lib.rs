//! Listings core: pure domain types and the wave scheduling state machine.
mod effect;
mod msg;
mod page;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, StopReason};
pub use msg::Msg;
pub use page::{PageRange, SORT_PARAM};
pub use record::{
    normalize, ListingRecord, RawItem, SearchPage, DEFAULT_IMAGE_HOST, PLACEHOLDER_IMAGE,
};
pub use state::{Phase, SweepSettings, SweepState};
pub use update::update;
pub use view_model::SweepView;
