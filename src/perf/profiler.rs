//! The profiling interface and its wall-clock baseline.
//!
//! Measurement internals are a collaborator behind the [`Profiler`] trait;
//! the harness only depends on the six fixed metrics of a
//! [`ProfileReport`]. [`WallProfiler`] is the built-in baseline: wall-clock
//! times plus resident-size accounting for the tables each phase touches.

use std::fmt;
use std::time::Instant;

use crate::errors::ConformanceError;
use crate::generators::DatasetGenerator;
use crate::transformers::Transformer;

/// The six fixed profiling metrics, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    FitTime,
    FitMemory,
    TransformTime,
    TransformMemory,
    ReverseTransformTime,
    ReverseTransformMemory,
}

impl Metric {
    /// Enforcement order: fit, transform, reverse transform; time before
    /// memory within each phase.
    pub const ALL: [Metric; 6] = [
        Metric::FitTime,
        Metric::FitMemory,
        Metric::TransformTime,
        Metric::TransformMemory,
        Metric::ReverseTransformTime,
        Metric::ReverseTransformMemory,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Metric::FitTime => "Fit Time",
            Metric::FitMemory => "Fit Memory",
            Metric::TransformTime => "Transform Time",
            Metric::TransformMemory => "Transform Memory",
            Metric::ReverseTransformTime => "Reverse Transform Time",
            Metric::ReverseTransformMemory => "Reverse Transform Memory",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One measurement per metric. Times are seconds, memory is bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfileReport {
    pub fit_time: f64,
    pub fit_memory: f64,
    pub transform_time: f64,
    pub transform_memory: f64,
    pub reverse_transform_time: f64,
    pub reverse_transform_memory: f64,
}

impl ProfileReport {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::FitTime => self.fit_time,
            Metric::FitMemory => self.fit_memory,
            Metric::TransformTime => self.transform_time,
            Metric::TransformMemory => self.transform_memory,
            Metric::ReverseTransformTime => self.reverse_transform_time,
            Metric::ReverseTransformMemory => self.reverse_transform_memory,
        }
    }
}

/// Profiles one transformer/generator pairing. Errors raised by the
/// transformer during any phase propagate unchanged.
pub trait Profiler {
    fn profile(
        &self,
        transformer: &mut dyn Transformer,
        generator: &dyn DatasetGenerator,
        transform_size: usize,
        fit_size: usize,
    ) -> Result<ProfileReport, ConformanceError>;
}

/// Baseline profiler: wall-clock phase times, memory as the resident size
/// of the tables produced by each phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallProfiler;

impl Profiler for WallProfiler {
    fn profile(
        &self,
        transformer: &mut dyn Transformer,
        generator: &dyn DatasetGenerator,
        transform_size: usize,
        fit_size: usize,
    ) -> Result<ProfileReport, ConformanceError> {
        let fit_data = generator.generate(fit_size);
        let started = Instant::now();
        transformer.fit(&fit_data)?;
        let fit_time = started.elapsed().as_secs_f64();
        let fit_memory = fit_data.size_bytes() as f64;

        let transform_data = generator.generate(transform_size);
        let started = Instant::now();
        let transformed = transformer.transform(&transform_data)?;
        let transform_time = started.elapsed().as_secs_f64();
        let transform_memory = transformed.size_bytes() as f64;

        let started = Instant::now();
        let reversed = transformer.reverse_transform(&transformed)?;
        let reverse_transform_time = started.elapsed().as_secs_f64();
        let reverse_transform_memory = reversed.size_bytes() as f64;

        Ok(ProfileReport {
            fit_time,
            fit_memory,
            transform_time,
            transform_memory,
            reverse_transform_time,
            reverse_transform_memory,
        })
    }
}
