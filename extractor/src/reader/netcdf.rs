use std::path::Path;

use anyhow::Context;
use ndarray::{Array1, Array2, Array3};
use rpxcore::prelude::ExtractError;
use rpxcore::scan::ScanVolume;
use serde::{Deserialize, Serialize};

/// Names of the scan variables pulled from each file. Defaults match the
/// NEXRAD level-II NetCDF conversion this tool was written against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableNames {
    pub reflectivity: String,
    pub azimuth: String,
    pub range: String,
}

impl Default for VariableNames {
    fn default() -> Self {
        Self {
            reflectivity: "Reflectivity".to_string(),
            azimuth: "azimuthR".to_string(),
            range: "distanceR".to_string(),
        }
    }
}

/// Reads scan volumes out of NetCDF files. Thin producer layer: everything
/// downstream works on the in-memory `ScanVolume`.
pub struct ScanFileReader {
    variables: VariableNames,
}

impl ScanFileReader {
    pub fn new(variables: VariableNames) -> Self {
        Self { variables }
    }

    /// Reads one scan file into a volume. The file handle is dropped before
    /// this returns, so sustained runs over many files never pile up open
    /// handles.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<ScanVolume> {
        let path_ref = path.as_ref();
        let file = netcdf::open(path_ref)
            .with_context(|| format!("opening scan file {}", path_ref.display()))?;

        let reflectivity = Self::read_3d(&file, &self.variables.reflectivity)?;
        let azimuth = Self::read_2d(&file, &self.variables.azimuth)?;
        let range = Self::read_1d(&file, &self.variables.range)?;

        Ok(ScanVolume::new(reflectivity, azimuth, range)?)
    }

    fn shape(file: &netcdf::File, name: &str, rank: usize) -> anyhow::Result<Vec<usize>> {
        let var = file
            .variable(name)
            .ok_or_else(|| ExtractError::MissingVariable(name.to_string()))?;
        let dims: Vec<usize> = var.dimensions().iter().map(|dim| dim.len()).collect();
        if dims.len() != rank {
            return Err(ExtractError::MalformedVariable(format!(
                "{} should be {}-D, found {} dimensions",
                name,
                rank,
                dims.len()
            ))
            .into());
        }
        Ok(dims)
    }

    fn values(file: &netcdf::File, name: &str) -> anyhow::Result<Vec<f32>> {
        let var = file
            .variable(name)
            .ok_or_else(|| ExtractError::MissingVariable(name.to_string()))?;
        var.get_values::<f32, _>(..)
            .with_context(|| format!("reading variable {}", name))
    }

    fn read_3d(file: &netcdf::File, name: &str) -> anyhow::Result<Array3<f32>> {
        let dims = Self::shape(file, name, 3)?;
        let values = Self::values(file, name)?;
        Array3::from_shape_vec((dims[0], dims[1], dims[2]), values)
            .with_context(|| format!("shaping variable {}", name))
    }

    fn read_2d(file: &netcdf::File, name: &str) -> anyhow::Result<Array2<f32>> {
        let dims = Self::shape(file, name, 2)?;
        let values = Self::values(file, name)?;
        Array2::from_shape_vec((dims[0], dims[1]), values)
            .with_context(|| format!("shaping variable {}", name))
    }

    fn read_1d(file: &netcdf::File, name: &str) -> anyhow::Result<Array1<f32>> {
        Self::shape(file, name, 1)?;
        Ok(Array1::from(Self::values(file, name)?))
    }
}
