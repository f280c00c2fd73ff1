//! Role personas. Each incident-response role maps to a static profile that
//! shapes both the completion prompt and the fallback document, including the
//! compliance frameworks that role is accountable to.

use warroom_core::types::Role;

pub struct RoleProfile {
    pub role: Role,
    pub persona: &'static str,
    pub expertise: &'static str,
    pub focus: &'static str,
    /// Frameworks this role cites. Never empty: every generated deliverable
    /// carries at least one citation from its role's set.
    pub citations: &'static [&'static str],
}

pub fn profile(role: Role) -> &'static RoleProfile {
    PROFILES
        .iter()
        .find(|p| p.role == role)
        .unwrap_or(&PROFILES[5])
}

static PROFILES: [RoleProfile; 6] = [
    RoleProfile {
        role: Role::Communications,
        persona: "a crisis communications director with fifteen years of experience \
            managing public-facing incident response",
        expertise: "stakeholder messaging, media relations, and breach notification wording",
        focus: "clear, legally sound communication that preserves customer trust",
        citations: &["GDPR Article 34", "NIST CSF 2.0 RS.CO-1", "ISO 27001 A.16.1.2"],
    },
    RoleProfile {
        role: Role::Technical,
        persona: "a senior incident responder and digital forensics lead",
        expertise: "containment, evidence collection, and root cause analysis",
        focus: "technically precise findings with preserved evidence integrity",
        citations: &[
            "NIST SP 800-61",
            "NIST 800-53 IR-4",
            "ISO 27035",
            "ISO 27001 A.16.1.7",
        ],
    },
    RoleProfile {
        role: Role::Legal,
        persona: "outside counsel specializing in data protection and breach notification law",
        expertise: "regulatory notification obligations, privilege, and litigation exposure",
        focus: "meeting statutory deadlines while minimizing legal risk",
        citations: &[
            "GDPR Article 33",
            "SOX Section 404",
            "ISO 27001 A.16.1.2",
            "CCPA Section 1798.82",
        ],
    },
    RoleProfile {
        role: Role::Executive,
        persona: "a chief information security officer reporting to the board",
        expertise: "business impact quantification, governance, and disclosure decisions",
        focus: "decision-ready briefings with accurate materiality assessment",
        citations: &["SOX Section 302", "NIST CSF 2.0 GV.OC-1", "COSO ERM"],
    },
    RoleProfile {
        role: Role::Continuity,
        persona: "a business continuity manager who has led recovery from major outages",
        expertise: "service restoration sequencing, vendor coordination, and RTO/RPO planning",
        focus: "restoring critical services fast without sacrificing data integrity",
        citations: &["ISO 22301", "NIST SP 800-34", "ITIL v4"],
    },
    RoleProfile {
        role: Role::Coordinator,
        persona: "an incident commander coordinating a cross-functional response team",
        expertise: "response orchestration, task tracking, and status reporting",
        focus: "keeping workstreams aligned and nothing dropped between teams",
        citations: &["NIST 800-53 IR-1", "ISO 27001 A.16.1.1", "NIST SP 800-61"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_profile_with_citations() {
        for role in Role::all() {
            let p = profile(*role);
            assert_eq!(p.role, *role);
            assert!(!p.citations.is_empty(), "role {role} must carry citations");
        }
    }

    #[test]
    fn legal_profile_cites_gdpr_article_33() {
        assert!(profile(Role::Legal).citations.contains(&"GDPR Article 33"));
    }
}
