//! Movement domain: system modules for locomotion updates.

pub(crate) mod contacts;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use contacts::sample_ground_contacts;
pub(crate) use input::read_input;
pub(crate) use locomotion::{drive_controllers, init_controllers};
