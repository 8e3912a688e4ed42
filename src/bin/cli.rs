//! Process boundary: one JSON request in, one JSON response out.
//!
//! Reads a complete request document from stdin, plans once, and
//! writes the response document to stdout. Malformed or invalid input
//! produces an error document and a non-zero exit status. Logs go to
//! stderr so stdout stays a clean document stream.

use std::io::Read;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use study_schedule::request::{parse_request, ErrorResponse, PlanResponse, RequestError};
use study_schedule::scheduler::StudyPlanner;

fn run(document: &str) -> Result<PlanResponse, RequestError> {
    let request = parse_request(document)?;
    debug!(
        courses = request.courses.len(),
        activities = request.external_activities.len(),
        "request parsed"
    );

    let outcome = StudyPlanner::new().plan(
        &request.college_schedule,
        &request.activities(),
        &request.course_requirements(),
    );
    info!(
        feasible = outcome.is_feasible(),
        conflicts = outcome.conflicts.len(),
        "planning finished"
    );
    Ok(PlanResponse::from(&outcome))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut document = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut document) {
        error!(%err, "failed to read request from stdin");
        emit_error(err.to_string());
        std::process::exit(1);
    }

    match run(&document) {
        Ok(response) => match serde_json::to_string(&response) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(%err, "failed to serialize response");
                emit_error(err.to_string());
                std::process::exit(1);
            }
        },
        Err(err) => {
            error!(%err, "request rejected");
            emit_error(err.to_string());
            std::process::exit(1);
        }
    }
}

fn emit_error(message: String) {
    let body = ErrorResponse { error: message };
    // The error document itself cannot fail to serialize.
    if let Ok(json) = serde_json::to_string(&body) {
        println!("{json}");
    }
}
