//! Whitespace-separated flat records for observations, cuts and results.
//!
//! Observation record, 11 fields:
//! `lon0 lat0 lon1 lat1 px0 py0 px1 py1 correlation speed error`
//! (pixel and correlation fields are ignored).
//!
//! Cut record, 7 or 9 fields:
//! `lon0 lat0 lon1 lat1 width diameter weight [center_lon center_lat]`
//! where a negative width, diameter or weight means "unset" and the weight
//! is scaled by [`SolverConfig::weight_coef_scale`].

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::SolverConfig;
use crate::error::{DtError, RecordError, Result};
use crate::geometry::Segment;
use crate::math::Point2;
use crate::model::{Cut, Observation};
use crate::transect::DtResult;

const OBSERVATION_FIELDS: usize = 11;
const CUT_FIELDS: usize = 7;
const CUT_FIELDS_WITH_CENTER: usize = 9;

fn parse_fields(line: &str) -> Result<Vec<f64>> {
    line.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<f64>().map_err(|_| {
                DtError::from(RecordError::InvalidNumber {
                    field: i + 1,
                    value: token.to_owned(),
                })
            })
        })
        .collect()
}

fn unset_if_negative(value: f64) -> Option<f64> {
    (value >= 0.0).then_some(value)
}

/// Parses one observation record.
///
/// # Errors
///
/// Returns a [`RecordError`] on a wrong field count or a non-numeric field.
pub fn parse_observation(line: &str) -> Result<Observation> {
    let f = parse_fields(line)?;
    if f.len() != OBSERVATION_FIELDS {
        return Err(RecordError::FieldCount {
            expected: OBSERVATION_FIELDS,
            found: f.len(),
        }
        .into());
    }
    let displacement = Segment::new(Point2::new(f[0], f[1]), Point2::new(f[2], f[3]));
    Ok(Observation::new(displacement, f[9], f[10]))
}

/// Parses one cut record.
///
/// # Errors
///
/// Returns a [`RecordError`] on a wrong field count or a non-numeric field.
pub fn parse_cut(line: &str, config: &SolverConfig) -> Result<Cut> {
    let f = parse_fields(line)?;
    if f.len() != CUT_FIELDS && f.len() != CUT_FIELDS_WITH_CENTER {
        return Err(RecordError::FieldCount {
            expected: CUT_FIELDS,
            found: f.len(),
        }
        .into());
    }
    let mut cut = Cut::new(Point2::new(f[0], f[1]), Point2::new(f[2], f[3]));
    cut.width = unset_if_negative(f[4]);
    cut.kernel_diameter = unset_if_negative(f[5]);
    cut.weight_coef = unset_if_negative(f[6]).map(|w| w / config.weight_coef_scale);
    if f.len() == CUT_FIELDS_WITH_CENTER {
        cut.curvature_center = Some(Point2::new(f[7], f[8]));
    }
    Ok(cut)
}

/// Reads records until end of input or the first malformed line.
fn read_records<R, T, F>(reader: R, mut parse: F) -> Result<Vec<T>>
where
    R: BufRead,
    F: FnMut(&str) -> Result<T>,
{
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse(&line) {
            Ok(record) => records.push(record),
            Err(err) => {
                debug!(line = index + 1, %err, "stopping at malformed record");
                break;
            }
        }
    }
    Ok(records)
}

/// Reads observation records, stopping at the first malformed line.
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn read_observations<R: BufRead>(reader: R) -> Result<Vec<Observation>> {
    read_records(reader, parse_observation)
}

/// Reads cut records, stopping at the first malformed line.
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn read_cuts<R: BufRead>(reader: R, config: &SolverConfig) -> Result<Vec<Cut>> {
    read_records(reader, |line| parse_cut(line, config))
}

/// Formats one result line.
///
/// Field order: cut start (lon lat), cut end (lon lat), dynamic topography,
/// width, kernel diameter, weight coefficient (record scale), doubling
/// error, interpolation accuracy, integration error, residual deviation,
/// a-priori error, cut length, dt coefficient, step size (m), step count,
/// sample count.
#[must_use]
pub fn format_result(result: &DtResult, config: &SolverConfig) -> String {
    let itg = &result.integration;
    let start = result.cut.start();
    let end = result.cut.end();
    let width = result.cut.resolved_width(config);
    format!(
        "{} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
        start.x,
        start.y,
        end.x,
        end.y,
        result.dt,
        width,
        itg.kernel_diameter,
        itg.weight_coef * config.weight_coef_scale,
        result.dt_error,
        itg.interpolation_accuracy,
        itg.integration_error,
        itg.std_dev,
        result.a_priori_error,
        result.cut_length,
        result.dt_coef,
        itg.step_size,
        itg.step_count,
        result.sample_count,
    )
}

/// Writes one line per result.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_results<W: Write>(
    mut writer: W,
    results: &[DtResult],
    config: &SolverConfig,
) -> Result<()> {
    for result in results {
        writeln!(writer, "{}", format_result(result, config))?;
    }
    Ok(())
}
