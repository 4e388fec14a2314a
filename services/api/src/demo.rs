use clap::Args;
use placement_ai::assessment::report::views::AssessmentReportSummary;
use placement_ai::assessment::scoring::CellRank;
use placement_ai::assessment::{
    AssessmentReport, AssessmentSubmission, CandidateEvaluation, EvaluationParameter,
    ParameterScore, Roster, ScoreSheetImporter, ScoringEngine,
};
use placement_ai::config::AppConfig;
use placement_ai::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// CSV export of evaluation parameters (Name, Description, Weight, Requirement Level)
    #[arg(long)]
    pub(crate) parameters: PathBuf,
    /// CSV export of candidate scores (Candidate, Parameter, Score, ...)
    #[arg(long)]
    pub(crate) scores: PathBuf,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Number of parameters charted on the radar (overrides APP_RADAR_AXES)
    #[arg(long)]
    pub(crate) axes: Option<usize>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        parameters,
        scores,
        json,
        axes,
    } = args;

    let mut layout = AppConfig::load()?.report.radar;
    if let Some(axes) = axes {
        layout.axis_count = axes;
    }

    let parameters = ScoreSheetImporter::parameters_from_path(&parameters)?;
    let candidates = ScoreSheetImporter::scores_from_path(&scores)?;
    let roster = Roster::build(&parameters, &candidates)?;
    let report = AssessmentReport::build(roster, &ScoringEngine::new(layout));

    emit(&report.summary(), json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let submission = sample_submission();
    let roster = Roster::build(&submission.parameters, &submission.candidates)?;
    let report = AssessmentReport::build(roster, &ScoringEngine::default());
    let summary = report.summary();

    if !args.json {
        println!(
            "Candidate comparison demo: {} for {}",
            submission.role_title, submission.client_name
        );
    }
    emit(&summary, args.json)
}

fn emit(summary: &AssessmentReportSummary, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        render_report(summary);
    }
    Ok(())
}

pub(crate) fn render_report(summary: &AssessmentReportSummary) {
    println!(
        "{} parameters, {} candidates",
        summary.parameter_count, summary.candidate_count
    );

    println!("\nEvaluation criteria");
    for parameter in &summary.parameters {
        println!(
            "- {} (weight {}, requirement {}%)",
            parameter.parameter, parameter.weight_label, parameter.requirement_level
        );
        if !parameter.description.is_empty() {
            println!("    {}", parameter.description);
        }
    }

    println!("\nWeighted matrix (raw / weighted)");
    for row in &summary.matrix {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| {
                let marker = match cell.rank {
                    CellRank::Top => " *",
                    CellRank::Second => " +",
                    CellRank::None => "",
                };
                format!(
                    "{} {} / {}{}",
                    cell.candidate, cell.raw_score, cell.weighted_contribution, marker
                )
            })
            .collect();
        println!("- {} ({}): {}", row.parameter, row.weight_label, cells.join(" | "));
    }

    println!("\nTotals");
    for total in &summary.totals {
        match total.badge {
            Some(badge) => println!("- {}: {} [{}]", total.candidate, total.display_total, badge),
            None => println!("- {}: {}", total.candidate, total.display_total),
        }
    }

    println!("\nGap analysis");
    for row in &summary.gaps {
        println!("- {} (requirement {}%)", row.parameter, row.requirement_level);
        for cell in &row.cells {
            match (&cell.difference_label, cell.severity) {
                (Some(difference), Some(severity)) => println!(
                    "    {}: {} ({}, {})",
                    cell.candidate,
                    cell.display,
                    difference,
                    severity.label()
                ),
                _ => println!("    {}: {}", cell.candidate, cell.display),
            }
        }
    }

    println!("\nRadar polygons");
    for polygon in &summary.radar.polygons {
        println!("- {}: {}", polygon.candidate_name, polygon.svg_points());
    }

    println!("\nCandidate assessments");
    for detail in &summary.candidate_details {
        println!("- {}", detail.candidate);
        if !detail.overall_assessment.is_empty() {
            println!("    {}", detail.overall_assessment);
        }
        for score in &detail.scores {
            if score.justification.is_empty() {
                println!("    {}: {}", score.parameter, score.score);
            } else {
                println!(
                    "    {}: {} ({})",
                    score.parameter, score.score, score.justification
                );
            }
        }
    }

    println!("\nInterview focus");
    for card in &summary.probes {
        println!("- {}", card.candidate);
        for strength in &card.strengths {
            println!("    validate: {}", strength);
        }
        for focus in &card.focus_areas {
            println!("    probe {}: {}", focus.area, focus.question);
        }
        if let Some(note) = card.no_focus_note {
            println!("    {}", note);
        }
    }

    if !summary.insights.observations.is_empty() {
        println!("\nObservations");
        for note in &summary.insights.observations {
            println!("- {}", note);
        }
    }
}

fn parameter(name: &str, description: &str, requirement_level: i32) -> EvaluationParameter {
    EvaluationParameter {
        description: description.to_string(),
        ..EvaluationParameter::new(name, None, requirement_level)
    }
}

fn score(parameter: &str, score: i32, strength: &str, limitation: Option<&str>) -> ParameterScore {
    ParameterScore {
        strengths: vec![strength.to_string()],
        limitations: limitation.map(str::to_string).into_iter().collect(),
        ..ParameterScore::new(parameter, score)
    }
}

/// Three-candidate CPO shortlist. No weights are supplied, so every
/// parameter counts at the default weight.
pub(crate) fn sample_submission() -> AssessmentSubmission {
    let parameters = vec![
        parameter(
            "Strategic Leadership",
            "Ability to develop and execute product vision aligned with business goals",
            85,
        ),
        parameter(
            "Technical Knowledge",
            "Understanding of technical concepts and ability to work with engineering teams",
            80,
        ),
        parameter(
            "Team Management",
            "Experience leading and scaling product teams, developing talent",
            85,
        ),
        parameter(
            "Global Experience",
            "Experience with international markets and global product strategy",
            75,
        ),
        parameter(
            "Time to Impact",
            "Ability to deliver measurable results quickly after joining",
            80,
        ),
    ];

    let candidates = vec![
        CandidateEvaluation {
            overall_assessment: "Exceptional strategic leadership and team management; \
                technical depth slightly below requirements."
                .to_string(),
            ..CandidateEvaluation::new(
                "Sarah Mitchell",
                vec![
                    score(
                        "Strategic Leadership",
                        95,
                        "Proven experience developing successful product strategies",
                        Some("May focus more on business than technical aspects"),
                    ),
                    score(
                        "Technical Knowledge",
                        75,
                        "Strong data analytics capabilities",
                        Some("Lacks deep technical expertise"),
                    ),
                    score(
                        "Team Management",
                        90,
                        "Experience with large team leadership (40+)",
                        None,
                    ),
                    score(
                        "Global Experience",
                        80,
                        "Strong presence in key target markets",
                        Some("Limited experience in APAC region"),
                    ),
                    score(
                        "Time to Impact",
                        70,
                        "Thorough business analysis process",
                        Some("Longer time to first significant impact"),
                    ),
                ],
            )
        },
        CandidateEvaluation {
            overall_assessment: "Strong technical expertise and quick results; strategic \
                leadership and international experience slightly below requirements."
                .to_string(),
            ..CandidateEvaluation::new(
                "James Wilson",
                vec![
                    score(
                        "Strategic Leadership",
                        80,
                        "Strong execution of defined strategies",
                        Some("Less experience creating original strategic vision"),
                    ),
                    score(
                        "Technical Knowledge",
                        90,
                        "Development background provides deep technical credibility",
                        None,
                    ),
                    score(
                        "Team Management",
                        80,
                        "Hands-on coaching approach",
                        Some("Limited experience with larger teams (25+)"),
                    ),
                    score(
                        "Global Experience",
                        60,
                        "Strong understanding of UK market",
                        Some("Limited North American experience"),
                    ),
                    score(
                        "Time to Impact",
                        95,
                        "Rapid results orientation",
                        None,
                    ),
                ],
            )
        },
        CandidateEvaluation {
            overall_assessment: "Excels in technical knowledge and global experience with a \
                balanced profile across the remaining parameters."
                .to_string(),
            ..CandidateEvaluation::new(
                "Emily Chen",
                vec![
                    score(
                        "Strategic Leadership",
                        85,
                        "Strong strategic planning framework",
                        Some("Some strategies more reactive than proactive"),
                    ),
                    score(
                        "Technical Knowledge",
                        95,
                        "Advanced technical education and knowledge",
                        None,
                    ),
                    score(
                        "Team Management",
                        85,
                        "Experience with required team size",
                        None,
                    ),
                    score(
                        "Global Experience",
                        95,
                        "True global experience across three continents",
                        None,
                    ),
                    score(
                        "Time to Impact",
                        80,
                        "Thorough business analysis approach",
                        Some("Methodical approach may delay initial impact"),
                    ),
                ],
            )
        },
    ];

    AssessmentSubmission {
        client_name: "TechSaaS 200".to_string(),
        role_title: "Chief Product Officer".to_string(),
        parameters,
        candidates,
    }
}
