//! DTO modules that bridge services with the view layer.

pub mod leads;
