use super::{CandidateId, CandidateScoreSet, Parameter, ParameterId};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Geometry of the spider chart. Defaults match a 400x400 canvas with a
/// 150 unit chart radius and five axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarLayout {
    pub axis_count: usize,
    pub radius: f64,
    pub center_x: f64,
    pub center_y: f64,
    /// Multiplier applied to candidate polygons only; the grid keeps `radius`.
    pub scale: f64,
    pub label_radius: f64,
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self {
            axis_count: 5,
            radius: 150.0,
            center_x: 200.0,
            center_y: 200.0,
            scale: 1.0,
            label_radius: 180.0,
        }
    }
}

impl RadarLayout {
    /// Axis 0 points straight up and axes proceed clockwise in screen space.
    pub fn angle(&self, index: usize) -> f64 {
        index as f64 * TAU / self.axis_count as f64 - FRAC_PI_2
    }

    fn point_at(&self, angle: f64, distance: f64) -> (f64, f64) {
        (
            self.center_x + distance * angle.cos(),
            self.center_y + distance * angle.sin(),
        )
    }

    fn charted<'a>(&self, parameters: &'a [Parameter]) -> &'a [Parameter] {
        &parameters[..parameters.len().min(self.axis_count)]
    }

    pub fn axes(&self, parameters: &[Parameter]) -> Vec<RadarAxis> {
        self.charted(parameters)
            .iter()
            .enumerate()
            .map(|(index, parameter)| {
                let angle = self.angle(index);
                let (end_x, end_y) = self.point_at(angle, self.radius);
                let (label_x, label_y) = self.point_at(angle, self.label_radius);
                RadarAxis {
                    parameter_id: parameter.id,
                    label: parameter.name.clone(),
                    angle,
                    end_x,
                    end_y,
                    label_x,
                    label_y,
                }
            })
            .collect()
    }

    /// Reference circles at a third, two thirds and the full radius.
    pub fn rings(&self) -> Vec<f64> {
        (1..=3).map(|step| self.radius * step as f64 / 3.0).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub parameter_id: ParameterId,
    pub label: String,
    pub angle: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarPoint {
    pub parameter_id: ParameterId,
    pub angle: f64,
    pub normalized: f64,
    pub x: f64,
    pub y: f64,
}

/// Vertices of one candidate's polygon. The closing edge back to the first
/// point is implied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPolygon {
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub points: Vec<RadarPoint>,
}

impl RadarPolygon {
    /// SVG `points` attribute value.
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|point| format!("{:.2},{:.2}", point.x, point.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarProjection {
    pub layout: RadarLayout,
    pub axes: Vec<RadarAxis>,
    pub rings: Vec<f64>,
    pub polygons: Vec<RadarPolygon>,
}

pub(crate) fn project(
    parameters: &[Parameter],
    candidates: &[CandidateScoreSet],
    layout: &RadarLayout,
) -> RadarProjection {
    let charted = layout.charted(parameters);

    let polygons = candidates
        .iter()
        .map(|candidate| {
            let points = charted
                .iter()
                .enumerate()
                .map(|(index, parameter)| {
                    let angle = layout.angle(index);
                    let normalized = f64::from(candidate.effective_score(parameter.id)) / 100.0;
                    let distance = layout.radius * layout.scale * normalized;
                    let (x, y) = layout.point_at(angle, distance);
                    RadarPoint {
                        parameter_id: parameter.id,
                        angle,
                        normalized,
                        x,
                        y,
                    }
                })
                .collect();

            RadarPolygon {
                candidate_id: candidate.id,
                candidate_name: candidate.name.clone(),
                points,
            }
        })
        .collect();

    RadarProjection {
        layout: layout.clone(),
        axes: layout.axes(parameters),
        rings: layout.rings(),
        polygons,
    }
}
