use super::summary::AssessmentReport;
use super::views::{FocusAreaView, KeyInsights, ParameterLeaderView, ProbeCardView};

/// Score margin above the requirement that counts as a validated strength.
const STRENGTH_MARGIN: i64 = 5;
const MAX_STRENGTHS: usize = 2;
const MAX_FOCUS_AREAS: usize = 3;

const FALLBACK_STRENGTH: &str = "Strong overall performance across multiple areas";
const NO_FOCUS_NOTE: &str = "No significant areas of concern identified";

pub(crate) fn generate_probes(report: &AssessmentReport) -> Vec<ProbeCardView> {
    let roster = &report.roster;

    roster
        .candidates()
        .iter()
        .map(|candidate| {
            let scored: Vec<_> = roster
                .parameters()
                .iter()
                .filter_map(|parameter| {
                    roster
                        .detail(candidate.id, parameter.id)
                        .map(|detail| (parameter, detail))
                })
                .collect();

            let mut strengths: Vec<String> = scored
                .iter()
                .filter(|(parameter, detail)| {
                    i64::from(detail.score)
                        >= i64::from(parameter.requirement_level) + STRENGTH_MARGIN
                })
                .take(MAX_STRENGTHS)
                .map(|(parameter, detail)| match detail.strengths.first() {
                    Some(strength) => strength.clone(),
                    None => format!("Strong {} capabilities", parameter.name.to_lowercase()),
                })
                .collect();

            if strengths.is_empty() {
                strengths.push(FALLBACK_STRENGTH.to_string());
            }

            let focus_areas: Vec<FocusAreaView> = scored
                .iter()
                .filter(|(parameter, detail)| detail.score < parameter.requirement_level)
                .take(MAX_FOCUS_AREAS)
                .map(|(parameter, detail)| FocusAreaView {
                    area: parameter.name.clone(),
                    question: match detail.limitations.first() {
                        Some(limitation) => {
                            format!("How have you addressed {}?", limitation.to_lowercase())
                        }
                        None => format!(
                            "Could you elaborate on your experience with {}?",
                            parameter.name.to_lowercase()
                        ),
                    },
                })
                .collect();

            let no_focus_note = focus_areas.is_empty().then_some(NO_FOCUS_NOTE);

            ProbeCardView {
                candidate: candidate.name.clone(),
                strengths,
                focus_areas,
                no_focus_note,
            }
        })
        .collect()
}

pub(crate) fn generate_insights(report: &AssessmentReport) -> KeyInsights {
    let roster = &report.roster;
    let top_performers: Vec<String> = report
        .winners()
        .map(|total| total.candidate_name.clone())
        .collect();
    let shared_lead = top_performers.len() > 1;

    let parameter_leaders: Vec<ParameterLeaderView> = report
        .matrix
        .rows
        .iter()
        .map(|row| ParameterLeaderView {
            parameter: row.parameter_name.clone(),
            leaders: row
                .top_candidates()
                .filter_map(|id| roster.candidate(id))
                .map(|candidate| candidate.name.clone())
                .collect(),
        })
        .collect();

    let mut observations = Vec::new();

    match top_performers.as_slice() {
        [] => {}
        [single] => {
            if let Some(total) = report.winners().next() {
                observations.push(format!(
                    "{single} leads with a weighted total of {:.2}",
                    total.display_total
                ));
            }
        }
        several => observations.push(format!(
            "{} share the highest weighted total; no tie-break is applied",
            several.join(", ")
        )),
    }

    for candidate in roster.candidates() {
        let unmet = roster
            .parameters()
            .iter()
            .filter(|parameter| {
                candidate
                    .score_for(parameter.id)
                    .is_some_and(|score| score < parameter.requirement_level)
            })
            .count();
        let missing = roster
            .parameters()
            .iter()
            .filter(|parameter| candidate.score_for(parameter.id).is_none())
            .count();

        if unmet > 0 {
            observations.push(format!(
                "{} is below the requirement on {} parameter{}",
                candidate.name,
                unmet,
                if unmet == 1 { "" } else { "s" }
            ));
        }
        if missing > 0 {
            observations.push(format!(
                "{} has no score on {} parameter{}",
                candidate.name,
                missing,
                if missing == 1 { "" } else { "s" }
            ));
        }
    }

    KeyInsights {
        top_performers,
        shared_lead,
        parameter_leaders,
        observations,
    }
}
