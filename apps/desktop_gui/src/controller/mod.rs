//! Controller layer: reducer-style state transitions for the entry form.

pub mod reducer;
