pub mod netcdf;

pub use netcdf::{ScanFileReader, VariableNames};
