//! Bounded memoization for hosts that regenerate outlines every frame.
//!
//! Generation is cheap, but an animated element asks for the same outline
//! many times a second. [`PathCache`] keeps the most recently used outlines,
//! keyed on the inputs rounded the same way emitted coordinates are, and
//! evicts the least recently used entry when full.

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::error::GeometryError;
use crate::options::SquircleOptions;
use crate::path::{SquirclePath, round_to_precision};
use crate::radii::RadiusOverrides;
use crate::smoothing::Smoothing;

const SMOOTHING_SCALE: f64 = 10_000.0;

/// Inputs after normalization; equal keys always produce equal outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    width: u64,
    height: u64,
    radii: [u64; 4],
    smoothing: u64,
    preserve_smoothing: bool,
}

impl CacheKey {
    fn from_options(options: &SquircleOptions) -> Result<(Self, SquircleOptions), GeometryError> {
        let rect = options.rect()?;
        let radii = options.resolved_radii();
        radii.validate()?;

        let width = quantize_dimension(rect.width());
        let height = quantize_dimension(rect.height());
        let radii = [
            round_to_precision(radii.top_left),
            round_to_precision(radii.top_right),
            round_to_precision(radii.bottom_right),
            round_to_precision(radii.bottom_left),
        ];
        let smoothing = (options.corner_smoothing.value() * SMOOTHING_SCALE).round() / SMOOTHING_SCALE;

        let key = Self {
            width: width.to_bits(),
            height: height.to_bits(),
            radii: radii.map(f64::to_bits),
            smoothing: smoothing.to_bits(),
            preserve_smoothing: options.preserve_smoothing,
        };

        let [top_left, top_right, bottom_right, bottom_left] = radii;
        let normalized = SquircleOptions {
            width: Some(width),
            height: Some(height),
            radii: RadiusOverrides {
                top_left: Some(top_left),
                top_right: Some(top_right),
                bottom_right: Some(bottom_right),
                bottom_left: Some(bottom_left),
                ..RadiusOverrides::default()
            },
            corner_smoothing: Smoothing::new(smoothing),
            preserve_smoothing: options.preserve_smoothing,
        };

        Ok((key, normalized))
    }
}

/// Round a valid dimension, keeping sub-precision sizes as they are.
fn quantize_dimension(value: f64) -> f64 {
    let rounded = round_to_precision(value);
    if rounded > 0.0 { rounded } else { value }
}

/// Least-recently-used cache of generated outlines.
///
/// Safe to share between threads through `&PathCache`. Failed generations are
/// returned to the caller and never stored. A capacity of `0` disables
/// caching entirely.
///
/// # Example
///
/// ```
/// use squircle_path::{PathCache, SquircleOptions};
///
/// let cache = PathCache::new(64);
/// let options = SquircleOptions::new(120.0, 80.0).with_corner_radius(16.0);
/// let first = cache.get_or_generate(&options)?;
/// let second = cache.get_or_generate(&options)?;
/// assert_eq!(first, second);
/// assert_eq!(cache.len(), 1);
/// # Ok::<(), squircle_path::GeometryError>(())
/// ```
#[derive(Debug)]
pub struct PathCache {
    capacity: usize,
    entries: Mutex<IndexMap<CacheKey, SquirclePath>>,
}

impl PathCache {
    /// Create a cache holding at most `capacity` outlines.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(IndexMap::with_capacity(capacity)),
        }
    }

    /// Maximum number of outlines kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of outlines currently cached.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop every cached outline.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Return the cached outline for `options`, generating and storing it on a miss.
    ///
    /// # Errors
    ///
    /// Returns the same [`GeometryError`] [`SquircleOptions::to_path`] would.
    pub fn get_or_generate(&self, options: &SquircleOptions) -> Result<SquirclePath, GeometryError> {
        let (key, normalized) = CacheKey::from_options(options)?;

        if self.capacity == 0 {
            return normalized.to_path();
        }

        {
            let mut entries = self.entries.lock();
            if let Some(index) = entries.get_index_of(&key) {
                let last = entries.len().saturating_sub(1);
                entries.move_index(index, last);
                if let Some((_, path)) = entries.get_index(last) {
                    return Ok(path.clone());
                }
            }
        }

        let path = normalized.to_path()?;

        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity
            && !entries.contains_key(&key)
            && let Some((evicted, _)) = entries.shift_remove_index(0)
        {
            tracing::trace!(?evicted, "path cache evicted least recently used outline");
        }
        entries.insert(key, path.clone());

        Ok(path)
    }
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new(128)
    }
}
