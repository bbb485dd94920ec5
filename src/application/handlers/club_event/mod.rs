//! Club event command handlers.

mod decide_event;
mod propose_event;
mod update_registration;

pub use decide_event::{DecideEventCommand, DecideEventHandler, DecideEventResult};
pub use propose_event::{ProposeEventCommand, ProposeEventHandler, ProposeEventResult};
pub use update_registration::{
    UpdateRegistrationCommand, UpdateRegistrationHandler, UpdateRegistrationResult,
};
