//! Static template catalog: incident seed scenarios, the five strategic plan
//! templates, and the per-theme action templates. All expansion is a pure
//! read of this data — no randomness, no I/O.

use crate::action::Action;
use crate::plan::ActionPlan;
use crate::types::{Confidence, IncidentKind, PlanTheme, Priority, RiskLevel, Role, Severity};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Incident seeds
// ---------------------------------------------------------------------------

pub struct IncidentSeed {
    pub kind: IncidentKind,
    pub title: &'static str,
    pub description: &'static str,
    pub control_objective: &'static str,
    pub framework_citations: &'static str,
    pub severity: Severity,
}

pub fn incident_seed(kind: IncidentKind) -> &'static IncidentSeed {
    INCIDENT_SEEDS
        .iter()
        .find(|s| s.kind == kind)
        .unwrap_or(&INCIDENT_SEEDS[0])
}

static INCIDENT_SEEDS: [IncidentSeed; 3] = [
    IncidentSeed {
        kind: IncidentKind::Security,
        title: "Security breach",
        description: "Potential security incident detected requiring immediate strategic \
            response planning. Multiple attack vectors identified by automated detection; \
            investigation required to determine scope and impact.",
        control_objective: "Maintain data confidentiality, system integrity, and service \
            availability while minimizing business disruption",
        framework_citations: "ISO 27001:2013, NIST Cybersecurity Framework, GDPR Article 33",
        severity: Severity::High,
    },
    IncidentSeed {
        kind: IncidentKind::DataBreach,
        title: "Data breach incident",
        description: "Suspected unauthorized access to sensitive data systems. Regulatory \
            notification may be required under GDPR/CCPA; scope assessment and impact \
            analysis needed urgently.",
        control_objective: "Protect personal data and maintain regulatory compliance while \
            preserving customer trust",
        framework_citations: "GDPR Article 33, CCPA Section 1798.82, ISO 27001:2013 A.16",
        severity: Severity::Critical,
    },
    IncidentSeed {
        kind: IncidentKind::SystemFailure,
        title: "Critical system failure",
        description: "Major system outage affecting business operations. Service restoration \
            and root cause analysis required; customer impact assessment ongoing.",
        control_objective: "Restore service availability and prevent recurrence while \
            maintaining data integrity",
        framework_citations: "ITIL v4, ISO 20000-1, NIST SP 800-61",
        severity: Severity::High,
    },
];

// ---------------------------------------------------------------------------
// Plan templates
// ---------------------------------------------------------------------------

pub struct PlanTemplate {
    pub theme: PlanTheme,
    pub name: &'static str,
    pub strategy: &'static str,
    pub timeline: &'static str,
    pub risk_level: RiskLevel,
    pub confidence: Confidence,
    pub resource_requirements: &'static str,
    pub success_criteria: &'static str,
    pub citations: &'static [&'static str],
}

impl PlanTemplate {
    pub fn instantiate(&self) -> ActionPlan {
        ActionPlan {
            id: Uuid::new_v4(),
            name: self.name.to_string(),
            theme: self.theme,
            strategy: self.strategy.to_string(),
            timeline: self.timeline.to_string(),
            risk_level: self.risk_level,
            confidence: self.confidence,
            resource_requirements: self.resource_requirements.to_string(),
            success_criteria: self.success_criteria.to_string(),
            citations: self.citations.iter().map(|c| c.to_string()).collect(),
            selected: false,
            actions: Vec::new(),
        }
    }
}

pub fn plan_catalog() -> &'static [PlanTemplate; 5] {
    &PLAN_CATALOG
}

static PLAN_CATALOG: [PlanTemplate; 5] = [
    PlanTemplate {
        theme: PlanTheme::Communications,
        name: "Customer & Stakeholder Communications",
        strategy: "Communication-focused approach prioritizing stakeholder management and \
            transparency throughout the response. Coordinates customer notification, media \
            handling, and internal messaging so the organization speaks with one voice \
            while containment proceeds in parallel. Appropriate when reputation and trust \
            are the dominant exposure.",
        timeline: "2-4 hours",
        risk_level: RiskLevel::Medium,
        confidence: Confidence::High,
        resource_requirements: "Communications Team, Legal Counsel, Customer Service Lead, \
            Compliance Officer",
        success_criteria: "All stakeholder groups informed on schedule, messaging legally \
            reviewed, no uncontrolled disclosure",
        citations: &[
            "GDPR Article 34",
            "ISO 27001 A.16.1.2",
            "NIST CSF 2.0 RS.CO",
        ],
    },
    PlanTemplate {
        theme: PlanTheme::Regulatory,
        name: "Regulatory Filing & Compliance Response",
        strategy: "Compliance-first approach built around statutory notification deadlines. \
            Assesses reporting obligations, prepares supervisory-authority filings within \
            the 72-hour GDPR window, and keeps an evidence trail suitable for audit. \
            Essential when personal data is involved and regulatory penalties could be \
            severe.",
        timeline: "3-4 hours",
        risk_level: RiskLevel::Medium,
        confidence: Confidence::High,
        resource_requirements: "Data Protection Officer, Legal Counsel, Compliance Officer, \
            Security Analyst, Executive Sponsor",
        success_criteria: "Regulatory notifications prepared within deadlines, compliance \
            documentation complete, legal exposure minimized",
        citations: &[
            "GDPR Article 33",
            "CCPA Section 1798.82",
            "SOX Section 404",
            "ISO 27001 A.16.1.2",
        ],
    },
    PlanTemplate {
        theme: PlanTheme::Forensics,
        name: "Technical Forensics & Containment",
        strategy: "Thorough investigation approach combining immediate containment with \
            detailed forensic analysis and root cause identification. Preserves evidence, \
            maps attack vectors, and builds the complete picture before major remediation \
            actions. The right choice when understanding must precede action.",
        timeline: "6-8 hours",
        risk_level: RiskLevel::Low,
        confidence: Confidence::High,
        resource_requirements: "Security Analyst, Digital Forensics Expert, Threat \
            Intelligence Analyst, System Administrator",
        success_criteria: "Threat contained, forensic evidence preserved with chain of \
            custody, root cause identified, remediation plan documented",
        citations: &[
            "NIST SP 800-61",
            "NIST 800-53 IR-4",
            "ISO 27035",
            "ISO 27001 A.16.1.7",
        ],
    },
    PlanTemplate {
        theme: PlanTheme::Executive,
        name: "Executive Briefing & Governance",
        strategy: "Governance-oriented approach keeping leadership decision-ready. Produces \
            concise executive briefings, quantifies business and financial impact, and \
            frames the disclosure decision for the board. Suited to incidents with \
            material business impact or disclosure obligations.",
        timeline: "1-2 hours",
        risk_level: RiskLevel::Medium,
        confidence: Confidence::Medium,
        resource_requirements: "Executive Sponsor, Chief Information Security Officer, \
            Legal Counsel, Finance Lead",
        success_criteria: "Leadership briefed with accurate impact figures, governance \
            obligations met, disclosure decision documented",
        citations: &["SOX Section 302", "NIST CSF 2.0 GV.OC", "COSO ERM"],
    },
    PlanTemplate {
        theme: PlanTheme::Continuity,
        name: "Continuity & Service Recovery",
        strategy: "Restoration-first approach that prioritizes getting critical services \
            back online with temporary measures while investigation runs in parallel. \
            Coordinates vendors, sequences recovery by business criticality, and validates \
            stability after restoration. Ideal when every minute of outage costs revenue \
            or customer satisfaction.",
        timeline: "3-5 hours",
        risk_level: RiskLevel::High,
        confidence: Confidence::High,
        resource_requirements: "Business Continuity Manager, System Administrator, Network \
            Engineer, Vendor Liaisons, Customer Service Lead",
        success_criteria: "Priority services restored within target, business operations \
            resumed, customer impact minimized",
        citations: &["ISO 22301", "NIST SP 800-34", "ITIL v4"],
    },
];

// ---------------------------------------------------------------------------
// Action templates
// ---------------------------------------------------------------------------

pub struct ActionTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub role: Role,
    pub priority: Priority,
    pub due_hours: u32,
}

impl ActionTemplate {
    pub fn instantiate(&self, step: u32) -> Action {
        Action::new(
            step,
            self.title,
            self.description,
            self.role,
            self.priority,
            self.due_hours,
        )
    }
}

/// Fixed action set for each plan theme. Every theme yields between 4 and 6
/// actions, each paired with exactly one blank deliverable on instantiation.
pub fn actions_for(theme: PlanTheme) -> &'static [ActionTemplate] {
    match theme {
        PlanTheme::Communications => &COMMUNICATIONS_ACTIONS,
        PlanTheme::Regulatory => &REGULATORY_ACTIONS,
        PlanTheme::Forensics => &FORENSICS_ACTIONS,
        PlanTheme::Executive => &EXECUTIVE_ACTIONS,
        PlanTheme::Continuity => &CONTINUITY_ACTIONS,
    }
}

static COMMUNICATIONS_ACTIONS: [ActionTemplate; 5] = [
    ActionTemplate {
        title: "Draft customer notification",
        description: "Prepare the customer-facing notification covering what happened, \
            what data or services are affected, and what customers should do next.",
        role: Role::Communications,
        priority: Priority::Critical,
        due_hours: 4,
    },
    ActionTemplate {
        title: "Prepare media holding statement",
        description: "Draft a short holding statement for press inquiries that \
            acknowledges the incident without speculating on cause or scope.",
        role: Role::Communications,
        priority: Priority::High,
        due_hours: 6,
    },
    ActionTemplate {
        title: "Legal review of outbound messaging",
        description: "Review all external messaging for admissions, regulatory \
            commitments, and consistency with notification obligations.",
        role: Role::Legal,
        priority: Priority::High,
        due_hours: 8,
    },
    ActionTemplate {
        title: "Brief support and account teams",
        description: "Equip customer support and account managers with an approved Q&A \
            so inbound questions receive consistent answers.",
        role: Role::Coordinator,
        priority: Priority::High,
        due_hours: 8,
    },
    ActionTemplate {
        title: "Notify key account stakeholders",
        description: "Contact strategic accounts directly before the general notification \
            lands, with tailored impact detail where contractually required.",
        role: Role::Communications,
        priority: Priority::Medium,
        due_hours: 12,
    },
];

static REGULATORY_ACTIONS: [ActionTemplate; 5] = [
    ActionTemplate {
        title: "Assess notification obligations",
        description: "Determine which regulators and jurisdictions require notification, \
            and on what deadline, based on the data categories and subjects affected.",
        role: Role::Legal,
        priority: Priority::Critical,
        due_hours: 8,
    },
    ActionTemplate {
        title: "Prepare supervisory authority filing",
        description: "Draft the breach notification to the supervisory authority within \
            the 72-hour GDPR Article 33 window, including nature, categories, and \
            approximate numbers of data subjects concerned.",
        role: Role::Legal,
        priority: Priority::Critical,
        due_hours: 24,
    },
    ActionTemplate {
        title: "Compile evidence inventory for regulators",
        description: "Assemble the technical evidence supporting the filing: detection \
            timeline, affected systems, and containment measures taken.",
        role: Role::Technical,
        priority: Priority::High,
        due_hours: 24,
    },
    ActionTemplate {
        title: "Draft data subject communication",
        description: "Prepare the Article 34 communication to affected individuals in \
            clear and plain language, with concrete protective steps.",
        role: Role::Communications,
        priority: Priority::High,
        due_hours: 48,
    },
    ActionTemplate {
        title: "Executive sign-off on regulatory submissions",
        description: "Obtain executive review and sign-off on all filings before \
            submission, documenting the approval trail.",
        role: Role::Executive,
        priority: Priority::High,
        due_hours: 60,
    },
];

static FORENSICS_ACTIONS: [ActionTemplate; 6] = [
    ActionTemplate {
        title: "Assess incident scope",
        description: "Evaluate the full extent and impact of the incident: entry point, \
            lateral movement, and data or systems touched.",
        role: Role::Technical,
        priority: Priority::Critical,
        due_hours: 2,
    },
    ActionTemplate {
        title: "Isolate affected systems",
        description: "Deploy containment measures to prevent further spread while \
            preserving volatile evidence where feasible.",
        role: Role::Technical,
        priority: Priority::Critical,
        due_hours: 4,
    },
    ActionTemplate {
        title: "Collect and preserve forensic evidence",
        description: "Capture disk and memory images, logs, and network captures from \
            affected systems using forensically sound tooling.",
        role: Role::Technical,
        priority: Priority::High,
        due_hours: 12,
    },
    ActionTemplate {
        title: "Document chain of custody",
        description: "Record custody of all collected evidence so it remains admissible \
            for legal or regulatory proceedings.",
        role: Role::Legal,
        priority: Priority::Medium,
        due_hours: 24,
    },
    ActionTemplate {
        title: "Perform root cause analysis",
        description: "Reconstruct the failure or attack chain and identify the \
            fundamental cause and contributing weaknesses.",
        role: Role::Technical,
        priority: Priority::Medium,
        due_hours: 36,
    },
    ActionTemplate {
        title: "Coordinate remediation plan",
        description: "Translate findings into a sequenced remediation plan with owners \
            and verification steps.",
        role: Role::Coordinator,
        priority: Priority::Medium,
        due_hours: 48,
    },
];

static EXECUTIVE_ACTIONS: [ActionTemplate; 4] = [
    ActionTemplate {
        title: "Prepare executive incident brief",
        description: "Produce a one-page brief for leadership: what happened, current \
            status, decisions needed, and next checkpoint.",
        role: Role::Executive,
        priority: Priority::Critical,
        due_hours: 4,
    },
    ActionTemplate {
        title: "Assess business and financial impact",
        description: "Quantify revenue exposure, contractual penalties, and recovery \
            cost to support disclosure and insurance decisions.",
        role: Role::Executive,
        priority: Priority::High,
        due_hours: 12,
    },
    ActionTemplate {
        title: "Draft board notification memo",
        description: "Prepare the formal memo to the board covering incident materiality \
            and governance obligations.",
        role: Role::Executive,
        priority: Priority::High,
        due_hours: 24,
    },
    ActionTemplate {
        title: "Frame disclosure decision",
        description: "Lay out the legal disclosure options and obligations so leadership \
            can decide on public and regulatory disclosure timing.",
        role: Role::Legal,
        priority: Priority::High,
        due_hours: 24,
    },
];

static CONTINUITY_ACTIONS: [ActionTemplate; 5] = [
    ActionTemplate {
        title: "Activate continuity plan",
        description: "Invoke the business continuity plan, stand up the recovery team, \
            and switch critical workloads to contingency arrangements.",
        role: Role::Continuity,
        priority: Priority::Critical,
        due_hours: 2,
    },
    ActionTemplate {
        title: "Restore priority services",
        description: "Bring customer-facing and revenue-critical services back online \
            first, with temporary measures where permanent fixes must wait.",
        role: Role::Continuity,
        priority: Priority::Critical,
        due_hours: 8,
    },
    ActionTemplate {
        title: "Coordinate vendor and supplier response",
        description: "Engage vendors whose services are implicated or needed for \
            recovery, and track their commitments against the restoration timeline.",
        role: Role::Continuity,
        priority: Priority::High,
        due_hours: 12,
    },
    ActionTemplate {
        title: "Brief customer service on impact",
        description: "Give customer-facing teams an accurate, current statement of \
            affected services and expected restoration windows.",
        role: Role::Communications,
        priority: Priority::Medium,
        due_hours: 12,
    },
    ActionTemplate {
        title: "Validate post-restoration stability",
        description: "Verify restored services against baseline behavior and confirm no \
            residual degradation before standing down.",
        role: Role::Technical,
        priority: Priority::Medium,
        due_hours: 24,
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_theme_once() {
        let catalog = plan_catalog();
        assert_eq!(catalog.len(), 5);
        for theme in PlanTheme::all() {
            assert_eq!(
                catalog.iter().filter(|t| t.theme == *theme).count(),
                1,
                "theme {theme} must appear exactly once"
            );
        }
    }

    #[test]
    fn every_plan_template_has_citations() {
        for template in plan_catalog() {
            assert!(
                !template.citations.is_empty(),
                "plan '{}' must carry citations",
                template.name
            );
        }
    }

    #[test]
    fn regulatory_plan_cites_gdpr_article_33() {
        let regulatory = plan_catalog()
            .iter()
            .find(|t| t.theme == PlanTheme::Regulatory)
            .unwrap();
        assert_eq!(regulatory.name, "Regulatory Filing & Compliance Response");
        assert!(regulatory.citations.contains(&"GDPR Article 33"));
    }

    #[test]
    fn every_theme_yields_four_to_six_actions() {
        for theme in PlanTheme::all() {
            let actions = actions_for(*theme);
            assert!(
                (4..=6).contains(&actions.len()),
                "theme {theme} has {} actions",
                actions.len()
            );
        }
    }

    #[test]
    fn every_kind_has_a_seed() {
        for kind in [
            IncidentKind::Security,
            IncidentKind::DataBreach,
            IncidentKind::SystemFailure,
        ] {
            let seed = incident_seed(kind);
            assert_eq!(seed.kind, kind);
            assert!(!seed.framework_citations.is_empty());
        }
    }
}
