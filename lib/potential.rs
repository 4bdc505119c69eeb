//! Potential samples and the text loader.
//!
//! A potential file holds one decimal number per line, ordered by increasing
//! grid position. Lines that don't parse as a number are dropped and loading
//! continues; only a source with no numeric lines at all is an error.
//!
//! ```
//! use boxspace::potential::PotentialSamples;
//!
//! let v = PotentialSamples::from_text("1.0\n# comment\n2.0\n\n1.5\n").unwrap();
//! assert_eq!(v.as_slice(), &[1.0, 2.0, 1.5]);
//! assert_eq!(v.dx(1.0), 1.0 / 3.0);
//! ```

use std::{
    fs,
    io::{ self, BufRead },
    path::Path,
};
use ndarray as nd;
use crate::{
    config::Config,
    error::InputError,
};

pub type InputResult<T> = Result<T, InputError>;

/// Potential energy sampled at `N` evenly spaced points over `[0, L)`.
///
/// The sample at index `k` sits at `x_k = k L / N`. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PotentialSamples {
    v: nd::Array1<f64>,
}

/// Outcome of parsing a text source: the kept numbers and the number of lines
/// that were dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed {
    pub values: Vec<f64>,
    pub dropped: usize,
}

/// Parse every line of `lines` as a number, dropping those that don't parse.
///
/// `NaN` and infinities are dropped along with other malformed lines.
/// Surrounding whitespace is ignored. Order of the kept values follows the
/// source.
pub fn parse_lines<I, L>(lines: I) -> Parsed
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut dropped: usize = 0;
    let values: Vec<f64>
        = lines.into_iter()
        .enumerate()
        .filter_map(|(k, line)| {
            let line = line.as_ref().trim();
            match line.parse::<f64>() {
                Ok(val) if val.is_finite() => Some(val),
                _ => {
                    if !line.is_empty() {
                        log::debug!("dropping non-numeric line {}: {:?}", k + 1, line);
                    }
                    dropped += 1;
                    None
                },
            }
        })
        .collect();
    Parsed { values, dropped }
}

impl PotentialSamples {
    /// Wrap an existing array of samples.
    pub fn from_array(v: nd::Array1<f64>) -> InputResult<Self> {
        InputError::check_nonempty(&v)?;
        Ok(Self { v })
    }

    /// Parse samples from a string, one per line.
    pub fn from_text(text: &str) -> InputResult<Self> {
        Self::from_parsed(parse_lines(text.lines()))
    }

    /// Parse samples from a buffered reader, one per line.
    ///
    /// A line that isn't valid UTF-8 counts as malformed and is dropped; any
    /// other read failure is returned as an error.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<InputResult<Self>> {
        let mut lines: Vec<String> = Vec::new();
        for line in reader.lines() {
            match line {
                Ok(l) => lines.push(l),
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    lines.push(String::new());
                },
                Err(err) => { return Err(err); },
            }
        }
        Ok(Self::from_parsed(parse_lines(lines)))
    }

    /// Load samples from a file, one per line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> InputResult<Self> {
        let path = path.as_ref();
        let io_err = |source: io::Error| {
            InputError::Io { path: path.to_path_buf(), source }
        };
        let file = fs::File::open(path).map_err(io_err)?;
        let samples = Self::from_reader(io::BufReader::new(file))
            .map_err(io_err)??;
        log::debug!("loaded {} samples from {:?}", samples.len(), path);
        Ok(samples)
    }

    /// Sample an analytic potential on the grid `x_k = k L / N` with
    /// `N = config.grid_points`.
    pub fn from_fn<F>(config: &Config, mut f: F) -> InputResult<Self>
    where F: FnMut(f64) -> f64
    {
        let dx = config.dx_for(config.grid_points);
        let v: nd::Array1<f64>
            = (0..config.grid_points).map(|k| f(k as f64 * dx)).collect();
        Self::from_array(v)
    }

    fn from_parsed(parsed: Parsed) -> InputResult<Self> {
        if parsed.dropped > 0 {
            log::debug!(
                "kept {} samples, dropped {} malformed lines",
                parsed.values.len(),
                parsed.dropped,
            );
        }
        Self::from_array(nd::Array1::from(parsed.values))
    }

    /// Get a reference to the sample array.
    pub fn get_v(&self) -> &nd::Array1<f64> { &self.v }

    /// Get the samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        self.v.as_slice().unwrap_or(&[])
    }

    /// Number of samples.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.v.len() }

    /// Grid spacing for these samples in a box of length `box_length`.
    pub fn dx(&self, box_length: f64) -> f64 {
        box_length / self.v.len() as f64
    }

    /// Coordinates of each sample in a box of length `box_length`.
    pub fn grid(&self, box_length: f64) -> nd::Array1<f64> {
        let dx = self.dx(box_length);
        (0..self.v.len()).map(|k| k as f64 * dx).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use approx::assert_relative_eq;

    #[test]
    fn lenient_parsing_keeps_order() {
        let text = "1.0\nabc\n2.0\n  1.5  \n\n1e-1\n3,0\n-0.5\n";
        let v = PotentialSamples::from_text(text).unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 1.5, 0.1, -0.5]);
        let parsed = parse_lines(text.lines());
        assert_eq!(parsed.dropped, 3);
    }

    #[test]
    fn non_finite_lines_are_dropped() {
        let v = PotentialSamples::from_text("1.0\nNaN\ninf\n0.5").unwrap();
        assert_eq!(v.as_slice(), &[1.0, 0.5]);
        let parsed = parse_lines(["-inf", "infinity", "nan", "2"]);
        assert_eq!(parsed.values, vec![2.0]);
        assert_eq!(parsed.dropped, 3);
        assert!(matches!(
            PotentialSamples::from_text("NaN\ninf\n"),
            Err(InputError::NoSamples)
        ));
    }

    #[test]
    fn invalid_utf8_line_is_dropped() {
        let bytes: &[u8] = b"1.0\n\xff\xfe\n2.0\n";
        let v = PotentialSamples::from_reader(bytes).unwrap().unwrap();
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn no_valid_samples() {
        assert!(matches!(
            PotentialSamples::from_text("x\ny\n"),
            Err(InputError::NoSamples)
        ));
        assert!(matches!(
            PotentialSamples::from_text(""),
            Err(InputError::NoSamples)
        ));
        assert!(PotentialSamples::from_array(nd::Array1::zeros(0)).is_err());
    }

    #[test]
    fn missing_file() {
        let res = PotentialSamples::from_file("/nonexistent/potential.txt");
        assert!(matches!(res, Err(InputError::Io { .. })));
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("boxspace-potential-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "0.5\nnot a number\n0.25").unwrap();
        }
        let v = PotentialSamples::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(v.as_slice(), &[0.5, 0.25]);
    }

    #[test]
    fn grid_and_spacing() {
        let v = PotentialSamples::from_text("1.0\n2.0\n1.5\n1.0\n0.5").unwrap();
        assert_relative_eq!(v.dx(1.0), 0.2);
        let x = v.grid(1.0);
        assert_eq!(x.len(), 5);
        assert_relative_eq!(x[4], 0.8);
    }

    #[test]
    fn sampled_from_fn() {
        let config = Config::default().with_grid_points(50);
        let v = PotentialSamples::from_fn(&config, |x| x * x).unwrap();
        assert_eq!(v.len(), 50);
        assert_eq!(v.as_slice()[0], 0.0);
        assert_relative_eq!(v.as_slice()[10], 0.04, max_relative = 1e-12);
    }
}
