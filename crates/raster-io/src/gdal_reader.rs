//! GeoTIFF reader backed by GDAL.

use std::path::Path;

use gdal::Dataset;
use ndarray::Array2;
use tracing::debug;

use crate::error::{ensure_exists, RasterIoError, RasterIoResult};
use crate::geotiff::{GeoRaster, GeoTiffReader, GeoTransform, PixelRegistration};

/// Reads band 1 of any GDAL-supported raster.
#[derive(Debug, Clone, Copy, Default)]
pub struct GdalGeoTiffReader;

impl GdalGeoTiffReader {
    pub fn new() -> Self {
        Self
    }
}

impl GeoTiffReader for GdalGeoTiffReader {
    fn read_geotiff(
        &self,
        path: &Path,
        registration: PixelRegistration,
    ) -> RasterIoResult<GeoRaster> {
        ensure_exists(path)?;

        let dataset = Dataset::open(path).map_err(|e| RasterIoError::open(path, e))?;
        let transform = GeoTransform::from(
            dataset
                .geo_transform()
                .map_err(|e| RasterIoError::InvalidFormat(format!("No geotransform: {}", e)))?,
        );
        let projection = dataset.projection();
        let (nx, ny) = dataset.raster_size();

        let band = dataset
            .rasterband(1)
            .map_err(|e| RasterIoError::InvalidFormat(format!("No band 1: {}", e)))?;
        let nodata = band.no_data_value();
        let buffer = band
            .read_as::<f64>((0, 0), (nx, ny), (nx, ny), None)
            .map_err(|e| RasterIoError::InvalidFormat(format!("Failed to read band 1: {}", e)))?;

        let z = Array2::from_shape_vec((ny, nx), buffer.data)
            .map_err(|e| RasterIoError::InvalidFormat(format!("Failed to reshape band: {}", e)))?;

        debug!(
            path = %path.display(),
            nx,
            ny,
            registration = %registration,
            "Read GeoTIFF band 1"
        );

        Ok(GeoRaster::from_band(z, transform, registration, projection, nodata))
    }
}
