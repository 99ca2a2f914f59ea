use serde::Deserialize;

use crate::error::PlanningError;
use crate::pipeline::TaskSpec;

#[derive(Deserialize)]
struct PlanResponse {
    #[serde(default)]
    tasks: Vec<TaskSpec>,
}

/// Locate the JSON payload inside collaborator output, which may arrive
/// fenced in markdown or with surrounding prose.
pub fn extract_json(response: &str) -> Option<&str> {
    if let Some(start) = response.find("```json") {
        let json_start = start + 7;
        if let Some(end) = response[json_start..].find("```") {
            return Some(&response[json_start..json_start + end]);
        }
    }
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end > start {
                return Some(&response[start..=end]);
            }
        }
    }
    None
}

/// Parse collaborator output into the planned task list.
///
/// Zero tasks (or an unextractable/unparseable payload) is `PlanningError`,
/// never an empty success: the orchestrator must be able to tell "nothing
/// ran at all" apart from per-task failures.
pub fn parse_task_specs(response: &str) -> Result<Vec<TaskSpec>, PlanningError> {
    let payload =
        extract_json(response).ok_or_else(|| PlanningError::Parse("no JSON object found".into()))?;

    let plan: PlanResponse =
        serde_json::from_str(payload).map_err(|e| PlanningError::Parse(e.to_string()))?;

    if plan.tasks.is_empty() {
        return Err(PlanningError::Empty);
    }
    Ok(plan.tasks)
}
