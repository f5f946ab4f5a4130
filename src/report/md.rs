use crate::types::question::WiscarCategory;
use crate::types::report::AssessmentReport;
use crate::types::scoring::{Score, ScoreBand};

fn score_line(output: &mut String, name: &str, score: Score) {
    output.push_str(&format!(
        "- {}: {}% ({})\n",
        name,
        score,
        ScoreBand::of(score).as_str()
    ));
}

pub fn to_markdown(report: &AssessmentReport) -> String {
    let result = &report.result;
    let mut output = String::new();
    output.push_str("# Design Systems Assessment Results\n\n");
    output.push_str(&format!(
        "Overall score: {}% ({})\n\n",
        result.overall,
        result.decision.as_str()
    ));
    output.push_str(&format!("**{}**\n\n{}\n\n", result.title, result.description));

    output.push_str(&format!(
        "## Psychological Fit ({}%)\n\n",
        report.psychometric.overall
    ));
    for (name, score) in report.psychometric.categories() {
        score_line(&mut output, name, score);
    }
    output.push('\n');

    output.push_str(&format!(
        "## Technical Readiness ({}%)\n\n",
        report.technical.overall
    ));
    for (name, score) in report.technical.categories() {
        score_line(&mut output, name, score);
    }
    output.push('\n');

    output.push_str(&format!("## WISCAR Analysis ({}%)\n\n", report.wiscar.overall));
    for (category, (name, score)) in WiscarCategory::ALL.iter().zip(report.wiscar.categories()) {
        score_line(&mut output, name, score);
        output.push_str(&format!("  {}\n", category.description()));
    }
    output.push('\n');

    output.push_str("## Career Paths & Fit\n\n");
    for path in &result.career_paths {
        output.push_str(&format!(
            "- {} ({}): {}\n  {}\n",
            path.title,
            path.level,
            path.fit.label(),
            path.description
        ));
    }
    output.push('\n');

    output.push_str("## Recommended Learning Path\n\n");
    for (index, topic) in result.learning_path.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, topic));
    }
    output.push('\n');

    output.push_str("## Next Steps\n\n");
    for step in result.next_steps {
        output.push_str(&format!("- {step}\n"));
    }

    output
}
