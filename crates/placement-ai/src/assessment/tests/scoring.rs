use super::common::*;
use crate::assessment::scoring::{
    classify_gap, CandidateId, CandidateScoreSet, CellRank, GapSeverity, Parameter, ParameterId,
    DEFAULT_WEIGHT,
};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_2;

fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

#[test]
fn scenario_totals_pick_single_winner() {
    let roster = scenario_roster();
    let totals = engine().compute_totals(roster.parameters(), roster.candidates());

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].candidate_name, "A");
    assert!(approx(totals[0].display_total, 7.8));
    assert!(!totals[0].is_winner);
    assert_eq!(totals[1].candidate_name, "B");
    assert!(approx(totals[1].display_total, 8.0));
    assert!(totals[1].is_winner);
}

#[test]
fn scenario_gaps_at_minus_ten_are_minor() {
    let roster = scenario_roster();
    let leadership = &roster.parameters()[0];
    let technical = &roster.parameters()[1];

    let a_technical = ScoringEngine::compute_gap(technical, 60);
    assert_eq!(a_technical.difference, -10);
    assert_eq!(a_technical.severity, GapSeverity::Minor);

    let b_leadership = ScoringEngine::compute_gap(leadership, 70);
    assert_eq!(b_leadership.difference, -10);
    assert_eq!(b_leadership.severity, GapSeverity::Minor);
}

#[test]
fn gap_boundaries_are_exact() {
    assert_eq!(classify_gap(0), GapSeverity::None);
    assert_eq!(classify_gap(12), GapSeverity::None);
    assert_eq!(classify_gap(-1), GapSeverity::Minor);
    assert_eq!(classify_gap(-10), GapSeverity::Minor);
    assert_eq!(classify_gap(-11), GapSeverity::Major);
}

#[test]
fn requirement_levels_outside_range_are_not_clamped() {
    let parameter = Parameter {
        id: ParameterId(0),
        name: "Stretch".to_string(),
        weight: None,
        requirement_level: 130,
    };

    let gap = ScoringEngine::compute_gap(&parameter, 100);
    assert_eq!(gap.difference, -30);
    assert_eq!(gap.severity, GapSeverity::Major);
}

#[test]
fn extreme_requirement_levels_keep_exact_differences() {
    let floor = Parameter {
        id: ParameterId(0),
        name: "Stretch".to_string(),
        weight: Some(50),
        requirement_level: i32::MIN,
    };
    let gap = ScoringEngine::compute_gap(&floor, 1);
    assert_eq!(gap.difference, 2_147_483_649);
    assert_eq!(gap.severity, GapSeverity::None);
    assert_eq!(gap.signed_label(), "+2147483649");

    let ceiling = Parameter {
        requirement_level: i32::MAX,
        ..floor
    };
    let gap = ScoringEngine::compute_gap(&ceiling, 90);
    assert_eq!(gap.difference, -2_147_483_557);
    assert_eq!(gap.severity, GapSeverity::Major);
}

#[test]
fn matrix_cells_carry_raw_and_weighted_values() {
    let parameters = vec![EvaluationParameter::new("Strategy", None, 80)];
    let candidates = vec![candidate("A", &[("Strategy", 87)])];
    let roster = Roster::build(&parameters, &candidates).expect("roster builds");

    let matrix = engine().compute_matrix(roster.parameters(), roster.candidates());
    let row = &matrix.rows[0];
    let cell = &row.cells[0];

    assert_eq!(row.weight, DEFAULT_WEIGHT);
    assert!(approx(cell.raw_score, 8.7));
    assert!(approx(cell.weighted_contribution, 1.74));
    assert_eq!(cell.rank, CellRank::Top);
    assert!(cell.provided);
}

#[test]
fn tied_maximum_marks_every_tying_cell_top() {
    let candidates = vec![
        candidate("A", &[("Leadership", 88)]),
        candidate("B", &[("Leadership", 88)]),
    ];
    let roster = Roster::build(&two_parameters(), &candidates).expect("roster builds");

    let matrix = engine().compute_matrix(roster.parameters(), roster.candidates());
    let leadership = &matrix.rows[0];

    assert!(leadership
        .cells
        .iter()
        .all(|cell| cell.rank == CellRank::Top));
    assert!(!leadership
        .cells
        .iter()
        .any(|cell| cell.rank == CellRank::Second));
}

#[test]
fn second_place_uses_next_distinct_score() {
    let candidates = vec![
        candidate("A", &[("Leadership", 90)]),
        candidate("B", &[("Leadership", 90)]),
        candidate("C", &[("Leadership", 75)]),
    ];
    let roster = Roster::build(&two_parameters(), &candidates).expect("roster builds");

    let matrix = engine().compute_matrix(roster.parameters(), roster.candidates());
    let ranks: Vec<CellRank> = matrix.rows[0].cells.iter().map(|cell| cell.rank).collect();

    assert_eq!(ranks, vec![CellRank::Top, CellRank::Top, CellRank::Second]);
}

#[test]
fn zero_column_has_no_top_or_second() {
    let candidates = vec![candidate("A", &[]), candidate("B", &[("Technical", 0)])];
    let roster = Roster::build(&two_parameters(), &candidates).expect("roster builds");

    let matrix = engine().compute_matrix(roster.parameters(), roster.candidates());

    for row in &matrix.rows {
        assert!(row.cells.iter().all(|cell| cell.rank == CellRank::None));
    }
    let missing = matrix
        .cell(ParameterId(1), CandidateId(0))
        .expect("cell present");
    let explicit = matrix
        .cell(ParameterId(1), CandidateId(1))
        .expect("cell present");
    assert!(!missing.provided);
    assert!(explicit.provided);
    assert_eq!(missing.score, explicit.score);
}

#[test]
fn empty_candidates_yield_empty_results() {
    let roster = Roster::build(&two_parameters(), &[]).expect("roster builds");
    let engine = engine();

    let matrix = engine.compute_matrix(roster.parameters(), roster.candidates());
    assert!(matrix.is_empty());
    assert_eq!(matrix.rows.len(), 2);

    let totals = engine.compute_totals(roster.parameters(), roster.candidates());
    assert!(totals.is_empty());

    let radar = engine.compute_radar_projection(roster.parameters(), roster.candidates());
    assert!(radar.polygons.is_empty());
    assert_eq!(radar.axes.len(), 2);
}

#[test]
fn tied_totals_keep_every_winner() {
    let candidates = vec![
        candidate("A", &[("Leadership", 80), ("Technical", 80)]),
        candidate("B", &[("Leadership", 80), ("Technical", 80)]),
        candidate("C", &[("Leadership", 10), ("Technical", 10)]),
    ];
    let roster = Roster::build(&two_parameters(), &candidates).expect("roster builds");

    let totals = engine().compute_totals(roster.parameters(), roster.candidates());
    let winners: Vec<&str> = totals
        .iter()
        .filter(|total| total.is_winner)
        .map(|total| total.candidate_name.as_str())
        .collect();

    assert_eq!(winners, vec!["A", "B"]);
}

#[test]
fn radar_starts_straight_up_and_closes_implicitly() {
    let parameters: Vec<EvaluationParameter> = (0..6)
        .map(|index| EvaluationParameter::new(format!("P{index}"), Some(20), 50))
        .collect();
    let candidates = vec![candidate("A", &[("P0", 100), ("P1", 50)])];
    let roster = Roster::build(&parameters, &candidates).expect("roster builds");

    let projection = engine().compute_radar_projection(roster.parameters(), roster.candidates());
    let points = &projection.polygons[0].points;

    assert_eq!(points.len(), 5);
    assert!(approx(points[0].angle, -FRAC_PI_2));
    assert!(approx(points[0].x, 200.0));
    assert!(approx(points[0].y, 50.0));
    assert_ne!(points.last(), points.first());
    // missing scores collapse onto the center
    assert!(approx(points[3].x, 200.0));
    assert!(approx(points[3].y, 200.0));
}

#[test]
fn radar_with_fewer_parameters_keeps_axis_spacing() {
    let roster = scenario_roster();
    let layout = RadarLayout {
        scale: 1.3,
        ..RadarLayout::default()
    };

    let projection =
        ScoringEngine::compute_radar_projection_with(roster.parameters(), roster.candidates(), &layout);
    let points = &projection.polygons[0].points;

    assert_eq!(points.len(), 2);
    assert!(approx(points[1].angle, std::f64::consts::TAU / 5.0 - FRAC_PI_2));
    let distance = ((points[0].x - 200.0).powi(2) + (points[0].y - 200.0).powi(2)).sqrt();
    assert!(approx(distance, 150.0 * 1.3 * 0.9));
    assert_eq!(projection.rings, vec![50.0, 100.0, 150.0]);
}

#[test]
fn zero_axis_layout_produces_empty_polygons() {
    let roster = scenario_roster();
    let layout = RadarLayout {
        axis_count: 0,
        ..RadarLayout::default()
    };

    let projection =
        ScoringEngine::compute_radar_projection_with(roster.parameters(), roster.candidates(), &layout);

    assert_eq!(projection.polygons.len(), 2);
    assert!(projection.polygons.iter().all(|polygon| polygon.points.is_empty()));
    assert!(projection.axes.is_empty());
}

#[test]
fn polygon_renders_svg_points_attribute() {
    let parameters = vec![
        EvaluationParameter::new("Leadership", None, 80),
        EvaluationParameter::new("Technical", None, 70),
    ];
    let candidates = vec![candidate("A", &[("Leadership", 100), ("Technical", 50)])];
    let roster = Roster::build(&parameters, &candidates).expect("roster builds");
    let layout = RadarLayout {
        axis_count: 2,
        ..RadarLayout::default()
    };

    let projection = ScoringEngine::compute_radar_projection_with(
        roster.parameters(),
        roster.candidates(),
        &layout,
    );

    assert_eq!(
        projection.polygons[0].svg_points(),
        "200.00,50.00 200.00,275.00"
    );
}

fn score_sets(
    weights: &[i32],
    rows: &[Vec<Option<i32>>],
) -> (Vec<Parameter>, Vec<CandidateScoreSet>) {
    let parameters = weights
        .iter()
        .enumerate()
        .map(|(index, weight)| Parameter {
            id: ParameterId(index),
            name: format!("P{index}"),
            weight: Some(*weight),
            requirement_level: 70,
        })
        .collect();

    let candidates = rows
        .iter()
        .enumerate()
        .map(|(index, row)| CandidateScoreSet {
            id: CandidateId(index),
            name: format!("C{index}"),
            scores: row
                .iter()
                .enumerate()
                .filter_map(|(param, score)| score.map(|score| (ParameterId(param), score)))
                .collect::<BTreeMap<_, _>>(),
        })
        .collect();

    (parameters, candidates)
}

fn board() -> impl Strategy<Value = (Vec<i32>, Vec<Vec<Option<i32>>>)> {
    (1usize..6, 1usize..5).prop_flat_map(|(params, candidates)| {
        (
            prop::collection::vec(-10i32..120, params),
            prop::collection::vec(
                prop::collection::vec(prop::option::of(0i32..=100), params),
                candidates,
            ),
        )
    })
}

proptest! {
    /// Property: every cell is the rounded score/10 and score*weight/1000.
    #[test]
    fn cells_match_rounded_formulas((weights, rows) in board()) {
        let (parameters, candidates) = score_sets(&weights, &rows);
        let matrix = engine().compute_matrix(&parameters, &candidates);

        for (row, parameter) in matrix.rows.iter().zip(&parameters) {
            let weight = parameter.effective_weight();
            for cell in &row.cells {
                let score = f64::from(cell.score);
                prop_assert!(approx(cell.raw_score, (score / 10.0 * 10.0).round() / 10.0));
                prop_assert!(approx(
                    cell.weighted_contribution,
                    (score * f64::from(weight) / 1000.0 * 100.0).round() / 100.0
                ));
            }
        }
    }

    /// Property: totals equal ten times the summed weighted contributions,
    /// within the rounding applied to each contribution.
    #[test]
    fn totals_match_matrix_contributions((weights, rows) in board()) {
        let (parameters, candidates) = score_sets(&weights, &rows);
        let engine = engine();
        let matrix = engine.compute_matrix(&parameters, &candidates);
        let totals = engine.compute_totals(&parameters, &candidates);

        for total in &totals {
            let summed: f64 = matrix
                .rows
                .iter()
                .filter_map(|row| row.cell(total.candidate_id))
                .map(|cell| cell.weighted_contribution)
                .sum();
            let tolerance = 0.05 * parameters.len() as f64 + 1e-9;
            prop_assert!((total.total - summed * 10.0).abs() <= tolerance);
        }
    }

    /// Property: raising one score never lowers that candidate's total and
    /// never drops it from the winner set.
    #[test]
    fn raising_a_score_is_monotonic(
        (weights, rows) in board(),
        pick in any::<prop::sample::Index>(),
        bump in 1i32..50,
    ) {
        let (parameters, candidates) = score_sets(&weights, &rows);
        let engine = engine();
        let before = engine.compute_totals(&parameters, &candidates);

        let target = pick.index(candidates.len());
        let param = ParameterId(pick.index(parameters.len()));
        let mut raised = candidates.clone();
        let current = raised[target].effective_score(param);
        raised[target].scores.insert(param, (current + bump).min(100));
        let after = engine.compute_totals(&parameters, &raised);

        prop_assert!(after[target].total >= before[target].total);
        if before[target].is_winner {
            prop_assert!(after[target].is_winner);
        }
    }

    /// Property: five axes always give five points with the first pointing up.
    #[test]
    fn radar_point_zero_points_up(
        radius in 1.0f64..500.0,
        center_x in -100.0f64..500.0,
        center_y in -100.0f64..500.0,
        score in 1i32..=100,
    ) {
        let weights = vec![20; 5];
        let rows = vec![vec![Some(score); 5]];
        let (parameters, candidates) = score_sets(&weights, &rows);
        let layout = RadarLayout { radius, center_x, center_y, ..RadarLayout::default() };

        let projection = ScoringEngine::compute_radar_projection_with(&parameters, &candidates, &layout);
        let points = &projection.polygons[0].points;

        prop_assert_eq!(points.len(), 5);
        prop_assert!(approx(points[0].angle, -FRAC_PI_2));
        prop_assert!((points[0].x - center_x).abs() < 1e-6);
        prop_assert!(points[0].y < center_y);
    }
}
