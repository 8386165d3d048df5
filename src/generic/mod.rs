//! Generic support structures, independent of the solving core.

pub mod minimal_pcg;
