use crate::animation::DEFAULT_T_MAX;
use crate::error::{ConfigError, Result};
use crate::geometry::Line;
use crate::math::Point2;
use crate::tessellation::TessellationParams;

/// Startup description of the grid to animate.
///
/// The grid consists of vertical lines `x = offset` followed by horizontal
/// lines `y = offset`, one pair per entry of `line_offsets`. Each line is
/// sampled at `sample_positions` along its direction.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Positions of the grid lines on the axis they cross.
    pub line_offsets: Vec<f64>,
    /// Parameters at which every line is sampled.
    pub sample_positions: Vec<f64>,
    /// Clock value at which the morph is complete.
    pub t_max: f64,
    /// Resolution of the rendered curves.
    pub tessellation: TessellationParams,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            line_offsets: vec![-2.0, -1.0, 0.0, 1.0, 2.0],
            sample_positions: vec![-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0],
            t_max: DEFAULT_T_MAX,
            tessellation: TessellationParams::default(),
        }
    }
}

impl GridConfig {
    /// Checks that the configuration describes at least one non-empty line.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for empty offsets or sample positions,
    /// non-finite values, or a `t_max` that is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.line_offsets.is_empty() {
            return Err(invalid("no grid lines configured"));
        }
        if self.sample_positions.is_empty() {
            return Err(invalid("no sample positions configured"));
        }
        if self
            .line_offsets
            .iter()
            .chain(&self.sample_positions)
            .any(|v| !v.is_finite())
        {
            return Err(invalid("grid values must be finite"));
        }
        if !(self.t_max.is_finite() && self.t_max > 0.0) {
            return Err(invalid("t_max must be finite and positive"));
        }
        Ok(())
    }

    /// Number of grid lines described.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_offsets.len() * 2
    }

    /// Sample points of every grid line: vertical lines first, then horizontal.
    #[must_use]
    pub fn sample_sequences(&self) -> Vec<Vec<Point2>> {
        let vertical = self.line_offsets.iter().map(|&x| Line::vertical(x));
        let horizontal = self.line_offsets.iter().map(|&y| Line::horizontal(y));
        vertical
            .chain(horizontal)
            .map(|line| line.sample_at(&self.sample_positions))
            .collect()
    }
}

fn invalid(msg: &str) -> crate::error::MorphError {
    ConfigError::Invalid(msg.to_owned()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.line_count(), 10);
    }

    #[test]
    fn default_sequences_match_grid() {
        let sequences = GridConfig::default().sample_sequences();
        assert_eq!(sequences.len(), 10);
        assert!(sequences.iter().all(|s| s.len() == 7));

        // First vertical line x = -2, bottom to top.
        assert_eq!(sequences[0][0], Point2::new(-2.0, -3.0));
        assert_eq!(sequences[0][6], Point2::new(-2.0, 3.0));

        // First horizontal line y = -2, left to right.
        assert_eq!(sequences[5][0], Point2::new(-3.0, -2.0));
        assert_eq!(sequences[5][6], Point2::new(3.0, -2.0));
    }

    #[test]
    fn validate_rejects_empty_grids() {
        let config = GridConfig {
            line_offsets: Vec::new(),
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GridConfig {
            sample_positions: Vec::new(),
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_numbers() {
        let config = GridConfig {
            line_offsets: vec![0.0, f64::NAN],
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GridConfig {
            t_max: 0.0,
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
