//! The toolkit facade and its builder.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use altimetry_common::EpsgCode;
use grid_processor::{QueryAxis, RegularGrid, SampleOptions};
use ndarray::{ArrayD, ArrayView2};
use projection::{NativeReprojector, Reprojector};
use raster_io::{ArrayFormat, GeoRaster, GeoTiffReader, PixelRegistration, VariableReader};
use tracing::debug;
use track_processor::{SegmentDiffFilter, TrackClassifier, TrackMasks};

use crate::capabilities::Capability;
use crate::config::ToolkitConfig;
use crate::error::{Result, ToolkitError};

/// Entry point for the altimetry helpers.
///
/// Pure computations are always available. Reprojection and file reading go
/// through collaborators supplied at construction; calling an operation whose
/// collaborator is absent fails with [`ToolkitError::CapabilityMissing`].
#[derive(Clone)]
pub struct Toolkit {
    config: ToolkitConfig,
    reprojector: Option<Arc<dyn Reprojector>>,
    variable_readers: HashMap<ArrayFormat, Arc<dyn VariableReader>>,
    geotiff_reader: Option<Arc<dyn GeoTiffReader>>,
}

impl std::fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolkit")
            .field("config", &self.config)
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::with_default_capabilities(ToolkitConfig::default())
    }
}

impl Toolkit {
    pub fn builder() -> ToolkitBuilder {
        ToolkitBuilder::default()
    }

    /// Native reprojection plus every reader compiled into this build.
    pub fn with_default_capabilities(config: ToolkitConfig) -> Self {
        #[allow(unused_mut)]
        let mut builder = Self::builder().config(config).reprojector(NativeReprojector);

        #[cfg(feature = "hdf5")]
        {
            builder = builder.variable_reader(raster_io::Hdf5Reader::new());
        }
        #[cfg(feature = "netcdf")]
        {
            builder = builder.variable_reader(raster_io::NetCdfReader::new());
        }
        #[cfg(feature = "gdal")]
        {
            builder = builder.geotiff_reader(raster_io::GdalGeoTiffReader::new());
        }

        builder.build()
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Capabilities held by this toolkit, in a stable order.
    pub fn capabilities(&self) -> Vec<Capability> {
        let mut caps = Vec::new();
        if self.reprojector.is_some() {
            caps.push(Capability::Reprojection);
        }
        caps.extend(self.variable_readers.keys().map(|&f| Capability::from(f)));
        if self.geotiff_reader.is_some() {
            caps.push(Capability::GeoTiff);
        }
        caps.sort();
        caps
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    // =========================================================================
    // Pure computations
    // =========================================================================

    /// GPS seconds to decimal years.
    pub fn gps2dyr(&self, gps_seconds: &[f64]) -> Result<Vec<f64>> {
        Ok(altimetry_common::gps_to_decimal_years(gps_seconds)?)
    }

    /// Recursively list files under `path` ending with `endswith`, or with the
    /// configured suffix when `None`.
    pub fn list_files(&self, path: impl AsRef<Path>, endswith: Option<&str>) -> Vec<PathBuf> {
        let suffix = endswith.unwrap_or(&self.config.files.suffix);
        altimetry_common::list_files(path, suffix)
    }

    /// Ascending/descending masks. `tmax` defaults to the configured gap threshold.
    pub fn track_type(&self, time: &[f64], lat: &[f64], tmax: Option<f64>) -> Result<TrackMasks> {
        let tmax = tmax.unwrap_or(self.config.tracks.gap_threshold);
        Ok(TrackClassifier::new(tmax).classify(time, lat)?)
    }

    /// Segment-difference mask. `tol` defaults to the configured tolerance.
    pub fn seg_diff_filter(
        &self,
        dh_fit_dx: &[f64],
        h_li: &[f64],
        tol: Option<f64>,
    ) -> Result<Vec<bool>> {
        let tol = tol.unwrap_or(self.config.tracks.seg_diff_tolerance);
        Ok(SegmentDiffFilter::new(tol).apply(dh_fit_dx, h_li)?)
    }

    /// Bilinear interpolation from a regular grid.
    ///
    /// `options` default to the configured interpolation settings.
    pub fn interp2d(
        &self,
        xd: &[f64],
        yd: &[f64],
        data: ArrayView2<'_, f64>,
        xq: impl Into<QueryAxis>,
        yq: impl Into<QueryAxis>,
        options: Option<&SampleOptions>,
    ) -> Result<Vec<f64>> {
        let options = options
            .copied()
            .unwrap_or_else(|| self.config.interpolation.sample_options());
        Ok(grid_processor::interp2d(xd, yd, data, xq, yq, &options)?)
    }

    /// Interpolate a raster returned by [`Toolkit::tifread`].
    pub fn interp_raster(
        &self,
        raster: &GeoRaster,
        xq: impl Into<QueryAxis>,
        yq: impl Into<QueryAxis>,
        options: Option<&SampleOptions>,
    ) -> Result<Vec<f64>> {
        let options = options
            .copied()
            .unwrap_or_else(|| self.config.interpolation.sample_options());
        let grid = RegularGrid::from_meshgrid(raster.x.view(), raster.y.view(), raster.z.clone())?;
        Ok(grid.sample(&xq.into(), &yq.into(), &options)?)
    }

    // =========================================================================
    // Capability-backed operations
    // =========================================================================

    /// Transform coordinates between two EPSG codes.
    pub fn transform_coord(
        &self,
        proj1: u32,
        proj2: u32,
        x: &[f64],
        y: &[f64],
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        let reprojector = self
            .reprojector
            .as_ref()
            .ok_or(ToolkitError::CapabilityMissing(Capability::Reprojection))?;

        let from = EpsgCode::from_code(proj1).map_err(projection::ProjectionError::from)?;
        let to = EpsgCode::from_code(proj2).map_err(projection::ProjectionError::from)?;

        debug!(backend = reprojector.name(), from = %from, to = %to, "transform_coord");
        Ok(reprojector.transform(from, to, x, y)?)
    }

    /// Read HDF5 datasets, in the order of `names`.
    pub fn h5read(&self, path: impl AsRef<Path>, names: &[&str]) -> Result<Vec<ArrayD<f64>>> {
        self.read_variables(ArrayFormat::Hdf5, path, names)
    }

    /// Read NetCDF variables, in the order of `names`.
    pub fn ncread(&self, path: impl AsRef<Path>, names: &[&str]) -> Result<Vec<ArrayD<f64>>> {
        self.read_variables(ArrayFormat::NetCdf, path, names)
    }

    /// Read named variables with the reader registered for `format`.
    pub fn read_variables(
        &self,
        format: ArrayFormat,
        path: impl AsRef<Path>,
        names: &[&str],
    ) -> Result<Vec<ArrayD<f64>>> {
        let reader = self
            .variable_readers
            .get(&format)
            .ok_or(ToolkitError::CapabilityMissing(Capability::from(format)))?;

        let path = path.as_ref();
        debug!(
            format = %format,
            path = %path.display(),
            variables = names.len(),
            "Reading variables"
        );
        Ok(reader.read_variables(path, names)?)
    }

    /// Read band 1 of a GeoTIFF with pixel coordinates.
    pub fn tifread(
        &self,
        path: impl AsRef<Path>,
        registration: PixelRegistration,
    ) -> Result<GeoRaster> {
        let reader = self
            .geotiff_reader
            .as_ref()
            .ok_or(ToolkitError::CapabilityMissing(Capability::GeoTiff))?;
        Ok(reader.read_geotiff(path.as_ref(), registration)?)
    }
}

/// Builder for [`Toolkit`]. Nothing is registered unless added explicitly.
#[derive(Default)]
pub struct ToolkitBuilder {
    config: ToolkitConfig,
    reprojector: Option<Arc<dyn Reprojector>>,
    variable_readers: HashMap<ArrayFormat, Arc<dyn VariableReader>>,
    geotiff_reader: Option<Arc<dyn GeoTiffReader>>,
}

impl ToolkitBuilder {
    pub fn config(mut self, config: ToolkitConfig) -> Self {
        self.config = config;
        self
    }

    pub fn reprojector(mut self, reprojector: impl Reprojector + 'static) -> Self {
        self.reprojector = Some(Arc::new(reprojector));
        self
    }

    /// Register a reader under the format it reports. Replaces any earlier
    /// reader for the same format.
    pub fn variable_reader(mut self, reader: impl VariableReader + 'static) -> Self {
        self.variable_readers.insert(reader.format(), Arc::new(reader));
        self
    }

    pub fn geotiff_reader(mut self, reader: impl GeoTiffReader + 'static) -> Self {
        self.geotiff_reader = Some(Arc::new(reader));
        self
    }

    pub fn build(self) -> Toolkit {
        let toolkit = Toolkit {
            config: self.config,
            reprojector: self.reprojector,
            variable_readers: self.variable_readers,
            geotiff_reader: self.geotiff_reader,
        };
        debug!(capabilities = ?toolkit.capabilities(), "Toolkit ready");
        toolkit
    }
}
