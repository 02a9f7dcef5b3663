// Domain layer - Screen state, editor events and dispatch policy

pub mod errors;
pub mod events;
pub mod model;
pub mod rules;
