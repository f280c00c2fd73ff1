//! Prompt assembly. The completion request carries the role persona as the
//! system message and the incident/action context as the user message, with
//! an explicit section structure so AI output matches the fallback shape.

use crate::client::{CompletionRequest, Message};
use crate::generate::{GenerationInput, GenerationSettings};
use crate::roles::RoleProfile;

pub const SECTION_HEADINGS: [&str; 6] = [
    "Executive Summary",
    "Action Steps",
    "Timeline and Milestones",
    "Risk Considerations",
    "Compliance Mapping",
    "Success Metrics",
];

pub fn build_request(
    input: &GenerationInput<'_>,
    profile: &RoleProfile,
    settings: &GenerationSettings,
) -> CompletionRequest {
    let system = format!(
        "You are {persona}. Your expertise covers {expertise}. \
         You write complete, professional incident-response deliverables, \
         focused on {focus}.",
        persona = profile.persona,
        expertise = profile.expertise,
        focus = profile.focus,
    );

    let mut user = String::new();
    user.push_str(&format!(
        "Draft the deliverable \"{}\" for the following incident.\n\n",
        input.action.deliverable.title
    ));
    user.push_str(&format!(
        "Incident: {} (severity: {})\n{}\n\n",
        input.incident.title, input.incident.severity, input.incident.description
    ));
    if !input.incident.control_objective.is_empty() {
        user.push_str(&format!(
            "Control objective: {}\n\n",
            input.incident.control_objective
        ));
    }
    user.push_str(&format!(
        "Response plan: {} — {}\n\n",
        input.plan.name, input.plan.strategy
    ));
    user.push_str(&format!(
        "Task: {}\n{}\nPriority: {}, due within {} hours.\n\n",
        input.action.title, input.action.description, input.action.priority, input.action.due_hours
    ));
    user.push_str("Structure the document in markdown with these sections:\n");
    for heading in SECTION_HEADINGS {
        user.push_str(&format!("## {heading}\n"));
    }
    user.push_str(&format!(
        "\nThe Compliance Mapping section must reference: {}.\n",
        profile.citations.join(", ")
    ));

    CompletionRequest {
        model: settings.model.clone(),
        messages: vec![Message::system(system), Message::user(user)],
        max_tokens: settings.max_tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles;
    use warroom_core::expand;
    use warroom_core::incident::Incident;
    use warroom_core::types::{Role, Severity};

    #[test]
    fn request_carries_persona_context_and_citations() {
        let mut incident = Incident::new("breach", "Data breach — 10k records", Severity::Critical);
        incident.control_objective = "Protect personal data".to_string();
        expand::expand_incident(&mut incident).unwrap();
        let plan_id = incident.plans[1].id;
        incident.select_plan(plan_id).unwrap();
        expand::expand_plan(&mut incident, plan_id).unwrap();

        let plan = incident.selected_plan().unwrap();
        let action = &plan.actions[0];
        let profile = roles::profile(Role::Legal);
        let settings = GenerationSettings::default();

        let input = GenerationInput {
            incident: &incident,
            plan,
            action,
        };
        let request = build_request(&input, profile, &settings);

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert!(request.messages[0].content.contains(profile.persona));
        let user = &request.messages[1].content;
        assert!(user.contains("Data breach — 10k records"));
        assert!(user.contains(&action.title));
        assert!(user.contains("## Compliance Mapping"));
        assert!(user.contains("GDPR Article 33"));
    }
}
