//! Pipeline: CRS-to-CRS shift chain over WGS-84 → GCJ-02 → BD-09.
//!
//! Moving right along the chain applies each shift's forward step, moving
//! left applies the inverse. BD-09 ↔ WGS-84 therefore goes through GCJ-02,
//! exactly like [`wgs84_to_bd09`](crate::shift::bd09::wgs84_to_bd09) and
//! [`bd09_to_wgs84`](crate::shift::bd09::bd09_to_wgs84).

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::coord::LatLng;
use crate::error::ShiftError;
use crate::shift::bd09::Bd09Shift;
use crate::shift::gcj02::Gcj02Shift;
use crate::shift::DatumShift;

/// Coordinate reference systems handled by this crate, in chain order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crs {
    Wgs84,
    Gcj02,
    Bd09,
}

impl Crs {
    fn rank(self) -> usize {
        match self {
            Crs::Wgs84 => 0,
            Crs::Gcj02 => 1,
            Crs::Bd09 => 2,
        }
    }

    /// The shift between this system and the next one to the right, if any.
    fn shift_to_next(self) -> Option<Box<dyn DatumShift>> {
        match self {
            Crs::Wgs84 => Some(Box::new(Gcj02Shift)),
            Crs::Gcj02 => Some(Box::new(Bd09Shift)),
            Crs::Bd09 => None,
        }
    }

    fn from_rank(rank: usize) -> Crs {
        match rank {
            0 => Crs::Wgs84,
            1 => Crs::Gcj02,
            _ => Crs::Bd09,
        }
    }
}

impl FromStr for Crs {
    type Err = ShiftError;

    /// Case-insensitive; accepts the common aliases (`EPSG:4326`, `gps`, `mars`, `baidu`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" | "wgs-84" | "wgs_84" | "epsg:4326" | "gps" => Ok(Crs::Wgs84),
            "gcj02" | "gcj-02" | "gcj_02" | "mars" => Ok(Crs::Gcj02),
            "bd09" | "bd-09" | "bd_09" | "bd09ll" | "baidu" => Ok(Crs::Bd09),
            _ => Err(ShiftError::UnknownCrs(s.to_string())),
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Crs::Wgs84 => "WGS-84",
            Crs::Gcj02 => "GCJ-02",
            Crs::Bd09 => "BD-09",
        };
        f.write_str(name)
    }
}

/// Batch execution tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Batches shorter than this run on the calling thread.
    pub parallel_threshold: usize,
    /// Minimum number of points a rayon task handles.
    pub min_chunk_len: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 16_384,
            min_chunk_len: 4_096,
        }
    }
}

struct Step {
    shift: Box<dyn DatumShift>,
    forward: bool,
}

impl Step {
    fn apply(&self, c: LatLng) -> LatLng {
        if self.forward {
            self.shift.forward(c)
        } else {
            self.shift.inverse(c)
        }
    }

    fn apply_batch(&self, coords: &mut [LatLng]) {
        if self.forward {
            self.shift.forward_batch(coords)
        } else {
            self.shift.inverse_batch(coords)
        }
    }
}

/// A source-to-destination shift chain.
pub struct Pipeline {
    src: Crs,
    dst: Crs,
    steps: Vec<Step>,
    options: PipelineOptions,
}

impl Pipeline {
    /// Create a Pipeline from source and destination CRS names.
    pub fn new(src_crs: &str, dst_crs: &str) -> Result<Self, ShiftError> {
        let src: Crs = src_crs.parse()?;
        let dst: Crs = dst_crs.parse()?;
        Ok(Self::from_crs(src, dst))
    }

    pub fn from_crs(src: Crs, dst: Crs) -> Self {
        let (from, to) = (src.rank(), dst.rank());
        let mut steps = Vec::new();

        if from < to {
            for rank in from..to {
                if let Some(shift) = Crs::from_rank(rank).shift_to_next() {
                    steps.push(Step {
                        shift,
                        forward: true,
                    });
                }
            }
        } else {
            for rank in (to..from).rev() {
                if let Some(shift) = Crs::from_rank(rank).shift_to_next() {
                    steps.push(Step {
                        shift,
                        forward: false,
                    });
                }
            }
        }

        let labels: Vec<String> = steps
            .iter()
            .map(|s| {
                let dir = if s.forward { "fwd" } else { "inv" };
                format!("{}:{dir}", s.shift.name())
            })
            .collect();
        debug!(src = %src, dst = %dst, steps = ?labels, "built shift pipeline");

        Self {
            src,
            dst,
            steps,
            options: PipelineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn src(&self) -> Crs {
        self.src
    }

    pub fn dst(&self) -> Crs {
        self.dst
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Shift a single point from `src` to `dst`.
    pub fn transform(&self, c: LatLng) -> LatLng {
        self.steps.iter().fold(c, |c, step| step.apply(c))
    }

    /// Shift points in place. Large batches are split across the rayon pool.
    pub fn transform_batch(&self, coords: &mut [LatLng]) {
        if self.is_identity() {
            return;
        }

        if coords.len() < self.options.parallel_threshold {
            trace!(n = coords.len(), "sequential batch");
            for step in &self.steps {
                step.apply_batch(coords);
            }
        } else {
            trace!(n = coords.len(), "parallel batch");
            coords
                .par_iter_mut()
                .with_min_len(self.options.min_chunk_len)
                .for_each(|c| *c = self.transform(*c));
        }
    }

    /// Shift split latitude/longitude arrays in place.
    pub fn transform_xy(&self, lat: &mut [f64], lng: &mut [f64]) -> Result<(), ShiftError> {
        if lat.len() != lng.len() {
            return Err(ShiftError::Shape(format!(
                "latitude and longitude must have same length, got {} and {}",
                lat.len(),
                lng.len()
            )));
        }
        if self.is_identity() {
            return Ok(());
        }

        let shift_one = |(la, lo): (&mut f64, &mut f64)| {
            let out = self.transform(LatLng::new(*la, *lo));
            *la = out.latitude;
            *lo = out.longitude;
        };

        if lat.len() < self.options.parallel_threshold {
            lat.iter_mut().zip(lng.iter_mut()).for_each(shift_one);
        } else {
            lat.par_iter_mut()
                .zip(lng.par_iter_mut())
                .with_min_len(self.options.min_chunk_len)
                .for_each(shift_one);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shift::bd09::{bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, wgs84_to_bd09};
    use crate::shift::gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};

    const BEIJING: LatLng = LatLng::new(39.90923, 116.39742);

    fn grid(n: usize) -> Vec<LatLng> {
        (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                // Sweeps from Kashgar-ish to beyond the east edge, crossing the geofence
                LatLng::new(18.0 + t * 36.0, 70.0 + t * 70.0)
            })
            .collect()
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("WGS84".parse::<Crs>().unwrap(), Crs::Wgs84);
        assert_eq!("EPSG:4326".parse::<Crs>().unwrap(), Crs::Wgs84);
        assert_eq!(" gcj-02 ".parse::<Crs>().unwrap(), Crs::Gcj02);
        assert_eq!("Mars".parse::<Crs>().unwrap(), Crs::Gcj02);
        assert_eq!("bd09ll".parse::<Crs>().unwrap(), Crs::Bd09);
        assert_eq!("BAIDU".parse::<Crs>().unwrap(), Crs::Bd09);
    }

    #[test]
    fn test_unknown_crs() {
        let err = Pipeline::new("EPSG:3857", "gcj02").err().unwrap();
        assert_eq!(err, ShiftError::UnknownCrs("EPSG:3857".into()));
        assert_eq!(err.to_string(), "Unknown CRS: EPSG:3857");
    }

    #[test]
    fn test_display() {
        assert_eq!(Crs::Wgs84.to_string(), "WGS-84");
        assert_eq!(Crs::Gcj02.to_string(), "GCJ-02");
        assert_eq!(Crs::Bd09.to_string(), "BD-09");
    }

    #[test]
    fn test_identity_same_crs() {
        for crs in [Crs::Wgs84, Crs::Gcj02, Crs::Bd09] {
            let pipe = Pipeline::from_crs(crs, crs);
            assert!(pipe.is_identity());
            assert_eq!(pipe.transform(BEIJING), BEIJING);
        }
    }

    #[test]
    fn test_chains_match_free_functions() {
        let cases: [(Crs, Crs, fn(LatLng) -> LatLng); 6] = [
            (Crs::Wgs84, Crs::Gcj02, wgs84_to_gcj02),
            (Crs::Gcj02, Crs::Wgs84, gcj02_to_wgs84),
            (Crs::Gcj02, Crs::Bd09, gcj02_to_bd09),
            (Crs::Bd09, Crs::Gcj02, bd09_to_gcj02),
            (Crs::Wgs84, Crs::Bd09, wgs84_to_bd09),
            (Crs::Bd09, Crs::Wgs84, bd09_to_wgs84),
        ];
        for (src, dst, f) in cases {
            let pipe = Pipeline::from_crs(src, dst);
            assert_eq!(pipe.transform(BEIJING), f(BEIJING), "{src} -> {dst}");
        }
    }

    #[test]
    fn test_parallel_batch_matches_sequential() {
        let seq = Pipeline::from_crs(Crs::Wgs84, Crs::Bd09).with_options(PipelineOptions {
            parallel_threshold: usize::MAX,
            min_chunk_len: 1,
        });
        let par = Pipeline::from_crs(Crs::Wgs84, Crs::Bd09).with_options(PipelineOptions {
            parallel_threshold: 0,
            min_chunk_len: 64,
        });

        let mut a = grid(10_000);
        let mut b = a.clone();
        seq.transform_batch(&mut a);
        par.transform_batch(&mut b);
        assert_eq!(a, b);

        let expected: Vec<LatLng> = grid(10_000).into_iter().map(wgs84_to_bd09).collect();
        assert_eq!(a, expected);
    }

    #[test]
    fn test_transform_xy() {
        let pipe = Pipeline::new("bd09", "wgs84").unwrap();
        let pts = grid(100);
        let mut lat: Vec<f64> = pts.iter().map(|p| p.latitude).collect();
        let mut lng: Vec<f64> = pts.iter().map(|p| p.longitude).collect();
        pipe.transform_xy(&mut lat, &mut lng).unwrap();
        for (i, p) in pts.iter().enumerate() {
            let expected = bd09_to_wgs84(*p);
            assert_eq!(lat[i], expected.latitude);
            assert_eq!(lng[i], expected.longitude);
        }
    }

    #[test]
    fn test_transform_xy_length_mismatch() {
        let pipe = Pipeline::new("wgs84", "gcj02").unwrap();
        let mut lat = vec![1.0, 2.0];
        let mut lng = vec![1.0];
        let err = pipe.transform_xy(&mut lat, &mut lng).unwrap_err();
        assert!(matches!(err, ShiftError::Shape(_)));
    }

    #[test]
    fn test_concurrent_callers_match_sequential() {
        let pipe = Pipeline::from_crs(Crs::Bd09, Crs::Wgs84);
        let pts = grid(2_000);
        let expected: Vec<LatLng> = pts.iter().map(|p| pipe.transform(*p)).collect();

        let results: Vec<Vec<LatLng>> = std::thread::scope(|scope| {
            let handles: Vec<_> = pts
                .chunks(250)
                .map(|chunk| {
                    let pipe = &pipe;
                    scope.spawn(move || chunk.iter().map(|p| pipe.transform(*p)).collect::<Vec<_>>())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let flat: Vec<LatLng> = results.into_iter().flatten().collect();
        assert_eq!(flat, expected);
    }
}
