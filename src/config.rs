//! Library-wide options.

use std::sync::OnceLock;

use log::debug;

use crate::SetupError;

/// How the glyph-set digest kernel is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CpuDetection {
    /// Query the running CPU once, at setup.
    #[default]
    Runtime,
    /// Trust the target features the crate was compiled with.
    CompileTime,
}

/// Options accepted by [`setup`].
///
/// Buffer limits are computed per call as
/// `max(input_len * factor, min)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaperConfig {
    /// Digest kernel selection.
    pub cpu_detection: CpuDetection,
    /// Growth factor of the buffer length limit.
    pub max_len_factor: usize,
    /// Lower bound of the buffer length limit.
    pub max_len_min: usize,
    /// Growth factor of the per-lookup operation budget.
    pub max_ops_factor: usize,
    /// Lower bound of the per-lookup operation budget.
    pub max_ops_min: usize,
}

impl Default for ShaperConfig {
    fn default() -> Self {
        ShaperConfig {
            cpu_detection: CpuDetection::Runtime,
            max_len_factor: 64,
            max_len_min: 16384,
            max_ops_factor: 64,
            max_ops_min: 16384,
        }
    }
}

impl ShaperConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the digest kernel selection.
    pub fn cpu_detection(mut self, detection: CpuDetection) -> Self {
        self.cpu_detection = detection;
        self
    }

    /// Sets the buffer length limit.
    pub fn max_len(mut self, factor: usize, min: usize) -> Self {
        self.max_len_factor = factor;
        self.max_len_min = min;
        self
    }

    /// Sets the per-lookup operation budget.
    pub fn max_ops(mut self, factor: usize, min: usize) -> Self {
        self.max_ops_factor = factor;
        self.max_ops_min = min;
        self
    }

    fn validate(&self) -> Result<(), SetupError> {
        if self.max_len_factor == 0 {
            return Err(SetupError::InvalidLimit("max_len_factor must be positive"));
        }

        if self.max_len_min == 0 {
            return Err(SetupError::InvalidLimit("max_len_min must be positive"));
        }

        if self.max_ops_factor == 0 {
            return Err(SetupError::InvalidLimit("max_ops_factor must be positive"));
        }

        if self.max_ops_min == 0 {
            return Err(SetupError::InvalidLimit("max_ops_min must be positive"));
        }

        Ok(())
    }
}

/// The digest kernel in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dispatch {
    Scalar,
    Wide,
}

impl Dispatch {
    fn resolve(detection: CpuDetection) -> Self {
        let wide = match detection {
            CpuDetection::Runtime => runtime_wide(),
            CpuDetection::CompileTime => {
                cfg!(any(target_feature = "avx2", target_feature = "neon"))
            }
        };

        if wide {
            Dispatch::Wide
        } else {
            Dispatch::Scalar
        }
    }
}

#[allow(unreachable_code)]
fn runtime_wide() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        return is_x86_feature_detected!("avx2");
    }

    #[cfg(target_arch = "aarch64")]
    {
        // NEON is mandatory on aarch64.
        return true;
    }

    false
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Limits {
    len_factor: usize,
    len_min: usize,
    ops_factor: usize,
    ops_min: usize,
}

impl Limits {
    #[inline]
    pub fn max_len(&self, len: usize) -> usize {
        len.saturating_mul(self.len_factor).max(self.len_min)
    }

    #[inline]
    pub fn max_ops(&self, len: usize) -> usize {
        len.saturating_mul(self.ops_factor).max(self.ops_min)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Setup {
    pub dispatch: Dispatch,
    pub limits: Limits,
}

impl Setup {
    fn resolve(config: &ShaperConfig) -> Self {
        let dispatch = Dispatch::resolve(config.cpu_detection);
        debug!("digest dispatch: {:?} ({:?} detection)", dispatch, config.cpu_detection);

        Setup {
            dispatch,
            limits: Limits {
                len_factor: config.max_len_factor,
                len_min: config.max_len_min,
                ops_factor: config.max_ops_factor,
                ops_min: config.max_ops_min,
            },
        }
    }
}

static SETUP: OnceLock<Setup> = OnceLock::new();

/// Establishes library-wide options.
///
/// Can be called only once, and only before the first shaping call,
/// which otherwise locks in the defaults.
pub fn setup(config: ShaperConfig) -> Result<(), SetupError> {
    config.validate()?;
    SETUP
        .set(Setup::resolve(&config))
        .map_err(|_| SetupError::AlreadyConfigured)
}

pub(crate) fn current() -> &'static Setup {
    SETUP.get_or_init(|| Setup::resolve(&ShaperConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits() {
        let setup = Setup::resolve(&ShaperConfig::default());
        assert_eq!(setup.limits.max_len(3), 16384);
        assert_eq!(setup.limits.max_len(1000), 64000);
        assert_eq!(setup.limits.max_ops(usize::MAX), usize::MAX);
    }

    #[test]
    fn invalid_limits() {
        assert_eq!(
            ShaperConfig::new().max_len(0, 10).validate(),
            Err(SetupError::InvalidLimit("max_len_factor must be positive"))
        );
        assert!(ShaperConfig::new().max_ops(1, 0).validate().is_err());
        assert!(ShaperConfig::new().validate().is_ok());
    }

    #[test]
    fn compile_time_detection_is_stable() {
        let a = Dispatch::resolve(CpuDetection::CompileTime);
        let b = Dispatch::resolve(CpuDetection::CompileTime);
        assert_eq!(a, b);
    }
}
