//! Deterministic fallback synthesis. Produces a complete deliverable from the
//! role profile and template context alone, with the same section structure
//! the AI path is instructed to follow. No randomness and no I/O, so the same
//! inputs always yield the same document.

use crate::generate::GenerationInput;
use crate::roles::RoleProfile;

pub fn synthesize(input: &GenerationInput<'_>, profile: &RoleProfile) -> String {
    let incident = input.incident;
    let plan = input.plan;
    let action = input.action;

    let mut doc = String::new();

    doc.push_str("## Executive Summary\n\n");
    doc.push_str(&format!(
        "This document addresses \"{}\" as part of the {} response to {} \
         (severity: {}). Prepared from the {} perspective, it covers {}.\n\n",
        action.title,
        plan.name,
        incident.title,
        incident.severity,
        action.role,
        profile.focus,
    ));
    if !incident.control_objective.is_empty() {
        doc.push_str(&format!(
            "Control objective: {}.\n\n",
            incident.control_objective
        ));
    }

    doc.push_str("## Action Steps\n\n");
    doc.push_str(&format!("- {}\n", action.description));
    doc.push_str(&format!(
        "- Coordinate with the teams named in the plan's resource requirements: {}.\n",
        plan.resource_requirements
    ));
    doc.push_str("- Record decisions, approvals, and hand-offs as they happen.\n");
    doc.push_str("- Escalate blockers to the incident coordinator immediately.\n\n");

    doc.push_str("## Timeline and Milestones\n\n");
    doc.push_str(&format!(
        "- Complete this task within {} hours of plan activation.\n",
        action.due_hours
    ));
    doc.push_str(&format!(
        "- Overall plan timeline: {}.\n",
        plan.timeline
    ));
    doc.push_str("- Review progress at each incident status checkpoint.\n\n");

    doc.push_str("## Risk Considerations\n\n");
    doc.push_str(&format!(
        "- Plan risk level: {}. Delays in this task extend overall exposure.\n",
        plan.risk_level
    ));
    doc.push_str(
        "- Incomplete or inaccurate output here propagates into dependent \
         deliverables and external statements.\n\n",
    );

    doc.push_str("## Compliance Mapping\n\n");
    for citation in profile.citations {
        doc.push_str(&format!("- {citation}\n"));
    }
    if !incident.framework_citations.is_empty() {
        doc.push_str(&format!(
            "- Incident-level frameworks: {}\n",
            incident.framework_citations
        ));
    }
    doc.push('\n');

    doc.push_str("## Success Metrics\n\n");
    doc.push_str(&format!("- {}\n", plan.success_criteria));
    doc.push_str(&format!(
        "- Deliverable reviewed and accepted by the {} workstream owner.\n",
        action.role
    ));

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::SECTION_HEADINGS;
    use crate::roles;
    use warroom_core::expand;
    use warroom_core::incident::Incident;
    use warroom_core::types::Severity;

    fn sample() -> Incident {
        let mut incident = Incident::new("breach", "Data breach", Severity::Critical);
        incident.framework_citations = "GDPR Article 33, ISO 27001:2013 A.16".to_string();
        expand::expand_incident(&mut incident).unwrap();
        let plan_id = incident.plans[1].id;
        incident.select_plan(plan_id).unwrap();
        expand::expand_plan(&mut incident, plan_id).unwrap();
        incident
    }

    #[test]
    fn fallback_has_all_sections_and_citations() {
        let incident = sample();
        let plan = incident.selected_plan().unwrap();
        let action = &plan.actions[0];
        let profile = roles::profile(action.role);
        let input = GenerationInput {
            incident: &incident,
            plan,
            action,
        };

        let doc = synthesize(&input, profile);
        for heading in SECTION_HEADINGS {
            assert!(doc.contains(&format!("## {heading}")), "missing {heading}");
        }
        for citation in profile.citations {
            assert!(doc.contains(citation));
        }
    }

    #[test]
    fn fallback_is_deterministic() {
        let incident = sample();
        let plan = incident.selected_plan().unwrap();
        let action = &plan.actions[0];
        let profile = roles::profile(action.role);
        let input = GenerationInput {
            incident: &incident,
            plan,
            action,
        };

        assert_eq!(synthesize(&input, profile), synthesize(&input, profile));
    }
}
