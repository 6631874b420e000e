use crate::domain::entities::record::{FieldValue, Record};

pub const INCIDENT_TYPES: &[&str] = &[
    "Theft",
    "Noise Disturbance",
    "Harassment",
    "Vandalism",
    "Physical Assault",
    "Verbal Abuse/Threats",
    "Domestic Dispute",
    "Trespassing",
    "Property Damage",
    "Public Disturbance",
    OTHER_CHOICE,
];

pub const PREFERRED_ACTIONS: &[&str] = &[
    "Mediation",
    "Formal warning",
    "Referral to authorities",
    OTHER_CHOICE,
];

/// Choice that asks the resident to type their own value.
pub const OTHER_CHOICE: &str = "Other";

#[derive(Debug, Clone, PartialEq)]
pub struct IncidentReport {
    pub id: String,
    pub user_id: Option<String>,
    pub full_name: String,
    pub address: String,
    pub contact_number: String,
    pub datetime: String,
    pub location: String,
    pub incident_type: String,
    pub description: String,
    pub suspects: String,
    pub has_witnesses: bool,
    pub witness_info: String,
    pub reported_to_authorities: bool,
    pub authorities_info: String,
    pub damages_or_injuries: bool,
    pub damages_description: String,
    pub has_evidence: bool,
    pub evidence_description: String,
    pub preferred_action: String,
    pub created_at: String,
}

/// Form contents of a new report. `user_id` is stamped from the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewIncidentReport {
    pub full_name: String,
    pub address: String,
    pub contact_number: String,
    pub datetime: String,
    pub location: String,
    pub incident_type: String,
    pub description: String,
    pub suspects: String,
    pub has_witnesses: bool,
    pub witness_info: String,
    pub reported_to_authorities: bool,
    pub authorities_info: String,
    pub damages_or_injuries: bool,
    pub damages_description: String,
    pub has_evidence: bool,
    pub evidence_description: String,
    pub preferred_action: String,
    /// Typed incident type when `incident_type` is "Other".
    pub other_type: String,
    /// Typed preferred action when `preferred_action` is "Other".
    pub preferred_action_detail: String,
}

impl NewIncidentReport {
    /// The report as it is stored: an "Other" choice is replaced by the
    /// value typed next to it.
    pub fn resolved(&self) -> NewIncidentReport {
        let mut report = self.clone();
        if report.incident_type.trim() == OTHER_CHOICE {
            report.incident_type = report.other_type.trim().to_string();
        }
        if report.preferred_action.trim() == OTHER_CHOICE {
            report.preferred_action = report.preferred_action_detail.trim().to_string();
        }
        report.other_type.clear();
        report.preferred_action_detail.clear();
        report
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentField {
    Id,
    FullName,
    Address,
    ContactNumber,
    Datetime,
    Location,
    IncidentType,
    Description,
    Suspects,
    HasWitnesses,
    WitnessInfo,
    ReportedToAuthorities,
    AuthoritiesInfo,
    DamagesOrInjuries,
    DamagesDescription,
    HasEvidence,
    EvidenceDescription,
    PreferredAction,
    CreatedAt,
}

impl Record for IncidentReport {
    type Field = IncidentField;

    const FIELDS: &'static [IncidentField] = &[
        IncidentField::Id,
        IncidentField::FullName,
        IncidentField::Address,
        IncidentField::ContactNumber,
        IncidentField::Datetime,
        IncidentField::Location,
        IncidentField::IncidentType,
        IncidentField::Description,
        IncidentField::Suspects,
        IncidentField::HasWitnesses,
        IncidentField::WitnessInfo,
        IncidentField::ReportedToAuthorities,
        IncidentField::AuthoritiesInfo,
        IncidentField::DamagesOrInjuries,
        IncidentField::DamagesDescription,
        IncidentField::HasEvidence,
        IncidentField::EvidenceDescription,
        IncidentField::PreferredAction,
        IncidentField::CreatedAt,
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, field: IncidentField) -> FieldValue {
        match field {
            IncidentField::Id => FieldValue::from(&self.id),
            IncidentField::FullName => FieldValue::from(&self.full_name),
            IncidentField::Address => FieldValue::from(&self.address),
            IncidentField::ContactNumber => FieldValue::from(&self.contact_number),
            IncidentField::Datetime => FieldValue::from(&self.datetime),
            IncidentField::Location => FieldValue::from(&self.location),
            IncidentField::IncidentType => FieldValue::from(&self.incident_type),
            IncidentField::Description => FieldValue::from(&self.description),
            IncidentField::Suspects => FieldValue::from(&self.suspects),
            IncidentField::HasWitnesses => FieldValue::from(self.has_witnesses),
            IncidentField::WitnessInfo => FieldValue::from(&self.witness_info),
            IncidentField::ReportedToAuthorities => FieldValue::from(self.reported_to_authorities),
            IncidentField::AuthoritiesInfo => FieldValue::from(&self.authorities_info),
            IncidentField::DamagesOrInjuries => FieldValue::from(self.damages_or_injuries),
            IncidentField::DamagesDescription => FieldValue::from(&self.damages_description),
            IncidentField::HasEvidence => FieldValue::from(self.has_evidence),
            IncidentField::EvidenceDescription => FieldValue::from(&self.evidence_description),
            IncidentField::PreferredAction => FieldValue::from(&self.preferred_action),
            IncidentField::CreatedAt => FieldValue::from(&self.created_at),
        }
    }
}
