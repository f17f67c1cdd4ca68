//! Standard-library registry consulted during analysis.

pub mod stdlib;
