//! Built-in Quick-Start Templates
//!
//! Compiled-in templates requiring no broker configuration, plus the generic
//! identity-only fallback used when a template cannot be resolved. Every
//! built-in begins with the same contact-info section.

use crate::model::{FieldType, FormField, FormSection, FormTemplate, RequiredDocument};

/// Quick-start template id for real-estate intake.
pub const QUICK_REAL_ESTATE: &str = "quick-real-estate";
/// Quick-start template id for life-insurance intake.
pub const QUICK_LIFE_INSURANCE: &str = "quick-life-insurance";
/// Quick-start template id for mortgage intake.
pub const QUICK_MORTGAGE: &str = "quick-mortgage";
/// Template id of the generic identity-only fallback.
pub const GENERIC_FALLBACK: &str = "generic-intake";

/// Document id of the government-issued photo ID every template requires.
pub const GOVT_ID: &str = "govt_id";

/// Resolve a `formType` discriminator to a built-in template.
///
/// Unknown discriminators fall back to the generic identity template, so this
/// is total over arbitrary strings.
pub fn builtin(form_type: &str) -> FormTemplate {
    match form_type {
        QUICK_REAL_ESTATE => quick_real_estate(),
        QUICK_LIFE_INSURANCE => quick_life_insurance(),
        QUICK_MORTGAGE => quick_mortgage(),
        _ => generic_fallback(),
    }
}

/// The shared personal/contact-info opening section.
fn contact_info() -> FormSection {
    FormSection::new(
        "contact_info",
        "Contact Information",
        Some("Tell us how to reach you."),
        vec![
            FormField::required_input("full_name", "Full Name", FieldType::Text),
            FormField::required_input("email", "Email Address", FieldType::Email),
            FormField::required_input("phone", "Phone Number", FieldType::Tel),
            FormField::required_input("date_of_birth", "Date of Birth", FieldType::Date),
            FormField::required_input("address", "Current Address", FieldType::Textarea)
                .with_placeholder("Street, city, state, ZIP"),
        ],
    )
}

fn govt_id_document() -> RequiredDocument {
    RequiredDocument::new(
        GOVT_ID,
        "Government-Issued ID",
        "Driver's license, passport, or state ID",
        true,
    )
}

/// Quick-start template for real-estate client intake.
pub fn quick_real_estate() -> FormTemplate {
    FormTemplate {
        id: QUICK_REAL_ESTATE.to_string(),
        sections: vec![
            contact_info(),
            FormSection::new(
                "property_preferences",
                "Property Preferences",
                Some("What are you looking for?"),
                vec![
                    FormField::select(
                        "transaction_type",
                        "Are you buying or selling?",
                        &["Buying", "Selling", "Both"],
                        true,
                    ),
                    FormField::select(
                        "property_type",
                        "Property Type",
                        &[
                            "Single Family Home",
                            "Condo",
                            "Townhouse",
                            "Multi-Family",
                            "Land",
                        ],
                        true,
                    ),
                    FormField::optional_input("budget", "Budget", FieldType::Number)
                        .with_placeholder("Approximate budget in USD"),
                    FormField::optional_input(
                        "preferred_locations",
                        "Preferred Locations",
                        FieldType::Textarea,
                    ),
                    FormField::select(
                        "timeline",
                        "Timeline",
                        &["0-3 months", "3-6 months", "6-12 months", "Flexible"],
                        false,
                    ),
                ],
            ),
            FormSection::new(
                "financing",
                "Financing",
                None,
                vec![
                    FormField {
                        id: "pre_approved".to_string(),
                        label: "I have a mortgage pre-approval".to_string(),
                        field_type: FieldType::Checkbox,
                        placeholder: None,
                        options: Vec::new(),
                        required: false,
                    },
                    FormField::select(
                        "financing_type",
                        "Financing Type",
                        &["Cash", "Conventional", "FHA", "VA", "Other"],
                        false,
                    ),
                    FormField::optional_input("annual_income", "Annual Income", FieldType::Number),
                ],
            ),
        ],
        required_documents: vec![
            govt_id_document(),
            RequiredDocument::new(
                "proof_of_funds",
                "Proof of Funds",
                "Bank statement or letter showing available funds",
                true,
            ),
            RequiredDocument::new(
                "pre_approval_letter",
                "Pre-Approval Letter",
                "Lender pre-approval letter, if you have one",
                false,
            ),
        ],
    }
}

/// Quick-start template for life-insurance client intake.
pub fn quick_life_insurance() -> FormTemplate {
    FormTemplate {
        id: QUICK_LIFE_INSURANCE.to_string(),
        sections: vec![
            contact_info(),
            FormSection::new(
                "health_lifestyle",
                "Health & Lifestyle",
                Some("Answers stay between you and your broker."),
                vec![
                    FormField::select(
                        "tobacco_use",
                        "Tobacco Use",
                        &["Never", "Former", "Current"],
                        true,
                    ),
                    FormField::optional_input("height", "Height", FieldType::Text)
                        .with_placeholder("e.g. 5'10\""),
                    FormField::optional_input("weight", "Weight (lbs)", FieldType::Number),
                    FormField::checkbox_group(
                        "medical_conditions",
                        "Diagnosed Medical Conditions",
                        &[
                            "Diabetes",
                            "Heart Disease",
                            "High Blood Pressure",
                            "Cancer",
                            "Asthma",
                            "None of the above",
                        ],
                        false,
                    ),
                    FormField {
                        id: "hazardous_activities".to_string(),
                        label: "I participate in hazardous activities (aviation, diving, racing)"
                            .to_string(),
                        field_type: FieldType::Checkbox,
                        placeholder: None,
                        options: Vec::new(),
                        required: false,
                    },
                ],
            ),
            FormSection::new(
                "coverage",
                "Coverage",
                None,
                vec![
                    FormField::select(
                        "coverage_amount",
                        "Desired Coverage Amount",
                        &["$100,000", "$250,000", "$500,000", "$1,000,000", "Other"],
                        true,
                    ),
                    FormField::select(
                        "term_length",
                        "Term Length",
                        &["10 years", "20 years", "30 years", "Whole life"],
                        false,
                    ),
                    FormField::required_input(
                        "beneficiary_name",
                        "Primary Beneficiary",
                        FieldType::Text,
                    ),
                    FormField::optional_input(
                        "beneficiary_relationship",
                        "Relationship to Beneficiary",
                        FieldType::Text,
                    ),
                ],
            ),
        ],
        required_documents: vec![
            govt_id_document(),
            RequiredDocument::new(
                "medical_records",
                "Medical Records",
                "Recent physician records, if available",
                false,
            ),
            RequiredDocument::new(
                "proof_of_income",
                "Proof of Income",
                "Recent pay stub or tax return",
                false,
            ),
        ],
    }
}

/// Quick-start template for mortgage client intake.
pub fn quick_mortgage() -> FormTemplate {
    FormTemplate {
        id: QUICK_MORTGAGE.to_string(),
        sections: vec![
            contact_info(),
            FormSection::new(
                "employment_info",
                "Employment Information",
                None,
                vec![
                    FormField::select(
                        "employment_status",
                        "Employment Status",
                        &["Employed", "Self-Employed", "Retired", "Unemployed"],
                        true,
                    ),
                    FormField::optional_input("employer_name", "Employer Name", FieldType::Text),
                    FormField::optional_input("job_title", "Job Title", FieldType::Text),
                    FormField::optional_input(
                        "years_at_job",
                        "Years at Current Job",
                        FieldType::Number,
                    ),
                    FormField::required_input("annual_income", "Annual Income", FieldType::Number),
                ],
            ),
            FormSection::new(
                "loan_details",
                "Loan Details",
                None,
                vec![
                    FormField::select(
                        "loan_purpose",
                        "Loan Purpose",
                        &["Purchase", "Refinance", "Home Equity"],
                        true,
                    ),
                    FormField::optional_input(
                        "property_address",
                        "Property Address",
                        FieldType::Textarea,
                    ),
                    FormField::optional_input("purchase_price", "Purchase Price", FieldType::Number),
                    FormField::optional_input("down_payment", "Down Payment", FieldType::Number),
                    FormField::select(
                        "credit_score_range",
                        "Credit Score Range",
                        &[
                            "Excellent (740+)",
                            "Good (670-739)",
                            "Fair (580-669)",
                            "Poor (below 580)",
                        ],
                        false,
                    ),
                ],
            ),
        ],
        required_documents: vec![
            govt_id_document(),
            RequiredDocument::new(
                "pay_stubs",
                "Recent Pay Stubs",
                "Pay stubs covering the last 30 days",
                true,
            ),
            RequiredDocument::new(
                "tax_returns",
                "Tax Returns",
                "Federal returns for the last two years",
                true,
            ),
            RequiredDocument::new(
                "bank_statements",
                "Bank Statements",
                "Statements for the last two months",
                false,
            ),
        ],
    }
}

/// Minimal identity-only template used when no known template applies.
///
/// A broken or missing template must still present a submittable form, so
/// this carries only the core identity fields and the government-ID document.
pub fn generic_fallback() -> FormTemplate {
    FormTemplate {
        id: GENERIC_FALLBACK.to_string(),
        sections: vec![contact_info()],
        required_documents: vec![govt_id_document()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_builtins() -> Vec<FormTemplate> {
        vec![
            quick_real_estate(),
            quick_life_insurance(),
            quick_mortgage(),
            generic_fallback(),
        ]
    }

    #[test]
    fn test_every_builtin_starts_with_contact_info() {
        for template in all_builtins() {
            assert_eq!(template.sections[0].id, "contact_info", "{}", template.id);
        }
    }

    #[test]
    fn test_every_builtin_requires_govt_id() {
        for template in all_builtins() {
            let govt = template
                .required_documents
                .iter()
                .find(|d| d.id == GOVT_ID)
                .unwrap_or_else(|| panic!("{} missing govt_id", template.id));
            assert!(govt.required);
        }
    }

    #[test]
    fn test_choice_fields_carry_options() {
        for template in all_builtins() {
            for section in &template.sections {
                for field in &section.fields {
                    if field.field_type.has_options() {
                        assert!(!field.options.is_empty(), "{}/{}", template.id, field.id);
                    } else {
                        assert!(field.options.is_empty(), "{}/{}", template.id, field.id);
                    }
                }
            }
        }
    }

    #[test]
    fn test_mortgage_section_order() {
        let template = quick_mortgage();
        let ids: Vec<&str> = template.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["contact_info", "employment_info", "loan_details"]);
    }

    #[test]
    fn test_unknown_form_type_falls_back() {
        let template = builtin("xyz");
        assert_eq!(template.id, GENERIC_FALLBACK);
        assert_eq!(template.sections.len(), 1);
        let field_ids: Vec<&str> = template.sections[0]
            .fields
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(
            field_ids,
            vec!["full_name", "email", "phone", "date_of_birth", "address"]
        );
        assert_eq!(template.required_documents.len(), 1);
        assert_eq!(template.required_documents[0].id, GOVT_ID);
    }

    #[test]
    fn test_field_ids_unique_within_each_template() {
        for template in all_builtins() {
            let mut seen = std::collections::BTreeSet::new();
            for section in &template.sections {
                for field in &section.fields {
                    assert!(seen.insert(field.id.clone()), "{}/{}", template.id, field.id);
                }
            }
        }
    }
}
