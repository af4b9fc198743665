//! Small numeric helpers shared by the engine and the report writers.

pub mod numeric;
