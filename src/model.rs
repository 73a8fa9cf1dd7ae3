use crate::config::SolverConfig;
use crate::geometry::Segment;
use crate::math::Point2;

/// Displacement of a tracked surface feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Start-to-end displacement of the feature.
    pub displacement: Segment,
    /// Speed magnitude.
    pub speed: f64,
    /// A-priori measurement error.
    pub error: f64,
}

impl Observation {
    #[must_use]
    pub fn new(displacement: Segment, speed: f64, error: f64) -> Self {
        Self {
            displacement,
            speed,
            error,
        }
    }
}

/// A transect across which dynamic topography is integrated.
///
/// `None` in the optional fields means "use the default" (width, weight
/// coefficient) or "compute automatically" (kernel diameter). The weight
/// coefficient is held in internal units, already divided by
/// [`SolverConfig::weight_coef_scale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cut {
    pub segment: Segment,
    /// Band half-width in km.
    pub width: Option<f64>,
    /// Interpolation kernel diameter in km.
    pub kernel_diameter: Option<f64>,
    pub weight_coef: Option<f64>,
    /// Center of flow curvature. When set, the curvature correction term
    /// is added to the integral.
    pub curvature_center: Option<Point2>,
}

impl Cut {
    /// Creates a cut with every optional setting unset.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            segment: Segment::new(start, end),
            width: None,
            kernel_diameter: None,
            weight_coef: None,
            curvature_center: None,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_kernel_diameter(mut self, diameter: f64) -> Self {
        self.kernel_diameter = Some(diameter);
        self
    }

    #[must_use]
    pub fn with_weight_coef(mut self, coef: f64) -> Self {
        self.weight_coef = Some(coef);
        self
    }

    #[must_use]
    pub fn with_curvature_center(mut self, center: Point2) -> Self {
        self.curvature_center = Some(center);
        self
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.segment.start
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.segment.end
    }

    /// Band half-width, falling back to the configured default.
    ///
    /// Always positive.
    #[must_use]
    pub fn resolved_width(&self, config: &SolverConfig) -> f64 {
        match self.width {
            Some(w) if w > 0.0 => w,
            _ => config.default_width_km,
        }
    }

    /// Gaussian weight coefficient, falling back to the configured default.
    ///
    /// An explicit zero is kept.
    #[must_use]
    pub fn resolved_weight_coef(&self, config: &SolverConfig) -> f64 {
        match self.weight_coef {
            Some(k) if k >= 0.0 => k,
            _ => config.default_weight_coef,
        }
    }

    /// Kernel radius if a non-negative diameter was given; `None` means
    /// the radius is computed from the sample spacing.
    #[must_use]
    pub fn fixed_kernel_radius(&self) -> Option<f64> {
        self.kernel_diameter.filter(|d| *d >= 0.0).map(|d| d / 2.0)
    }
}

/// An observation bound to one cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSample {
    pub observation: Observation,
    /// Projection of the observation's start onto the cut line.
    pub proj: Point2,
    /// Foot of the perpendicular from the observation's start onto the line
    /// parallel to the cut through the observation's end.
    pub norm_comp: Point2,
}

impl WeightedSample {
    /// The displacement segment of the underlying observation.
    #[must_use]
    pub fn displacement(&self) -> &Segment {
        &self.observation.displacement
    }
}
