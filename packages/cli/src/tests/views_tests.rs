use crate::views::{
    render_details, render_list, CollaboratorForm, DetailsTab, MilestoneForm, PartnershipForm,
};
use chrono::Utc;
use partnerdesk_core::{
    Collaborator, Milestone, MilestoneStatus, Partnership, PartnershipStatus, PartnershipType,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn plain() {
    colored::control::set_override(false);
}

fn partnership(id: &str, company: &str) -> Partnership {
    Partnership {
        id: id.to_string(),
        company_name: company.to_string(),
        contact_email: "contact@example.com".to_string(),
        industry: String::new(),
        description: "Joint go-to-market pilot".to_string(),
        partnership_type: PartnershipType::JointVenture,
        expected_value: None,
        timeline: None,
        status: PartnershipStatus::Pending,
        created_at: Utc::now(),
        collaborators: Vec::new(),
        milestones: Vec::new(),
        documents: Vec::new(),
    }
}

#[test]
fn test_list_empty_state() {
    plain();
    let output = render_list(&[], None);
    assert!(output.contains("No partnerships yet"));
    assert!(output.contains("partnerdesk create"));
}

#[test]
fn test_list_marks_selected_row() {
    plain();
    let records = vec![partnership("aaaa1111", "Acme"), partnership("bbbb2222", "Globex")];
    let output = render_list(&records, Some("bbbb2222"));

    assert!(output.contains("Partnerships (2)"));
    assert!(output.contains("Acme"));
    assert!(output.contains("joint venture"));
    assert!(output.contains("Pending"));

    let selected_line = output
        .lines()
        .find(|line| line.contains("bbbb2222"))
        .unwrap();
    assert!(selected_line.contains('▶'));
    let other_line = output
        .lines()
        .find(|line| line.contains("aaaa1111"))
        .unwrap();
    assert!(!other_line.contains('▶'));
}

#[test]
fn test_overview_placeholders() {
    plain();
    let output = render_details(&partnership("aaaa1111", "Acme"), DetailsTab::Overview);

    assert!(output.starts_with("Acme\njoint venture\n"));
    assert!(output.contains("[Overview]"));
    assert!(output.contains("Collaborators (0)"));
    assert!(output.contains("Milestones (0)"));
    assert!(output.contains("  Email: contact@example.com"));
    assert!(output.contains("  Industry: Not specified"));
    assert!(output.contains("  Expected Value: Not specified"));
    assert!(output.contains("  Timeline: Not specified"));
    assert!(output.contains("partnerdesk export aaaa1111"));
    assert!(output.ends_with("to write the agreement"));
}

#[rstest]
#[case(DetailsTab::Collaborators, "No collaborators yet. Add one to get started!")]
#[case(DetailsTab::Milestones, "No milestones yet. Add one to track progress!")]
fn test_empty_tabs(#[case] tab: DetailsTab, #[case] message: &str) {
    plain();
    let output = render_details(&partnership("aaaa1111", "Acme"), tab);
    assert!(output.ends_with(message));
}

#[test]
fn test_collaborators_tab() {
    plain();
    let mut record = partnership("aaaa1111", "Acme");
    record.collaborators.push(Collaborator {
        id: "cccc3333".to_string(),
        name: "Jo".to_string(),
        email: "jo@acme.com".to_string(),
        role: None,
        joined_at: Utc::now(),
    });
    record.collaborators.push(Collaborator {
        id: "dddd4444".to_string(),
        name: "Sam".to_string(),
        email: "sam@acme.com".to_string(),
        role: Some("Account Manager".to_string()),
        joined_at: Utc::now(),
    });

    let output = render_details(&record, DetailsTab::Collaborators);

    assert!(output.contains("[Collaborators (2)]"));
    assert!(output.contains("  Jo (cccc3333)"));
    assert!(output.contains("  jo@acme.com"));
    assert!(output.contains("  Account Manager"));
    assert_eq!(output.matches("Joined: ").count(), 2);
}

#[test]
fn test_milestones_tab() {
    plain();
    let mut record = partnership("aaaa1111", "Acme");
    record.milestones.push(Milestone {
        id: "eeee5555".to_string(),
        title: "Kickoff".to_string(),
        description: Some("First call".to_string()),
        due_date: Some("2024-05-01".to_string()),
        status: MilestoneStatus::InProgress,
        created_at: Utc::now(),
    });
    record.milestones.push(Milestone {
        id: "ffff6666".to_string(),
        title: "Launch".to_string(),
        description: None,
        due_date: None,
        status: MilestoneStatus::Pending,
        created_at: Utc::now(),
    });

    let output = render_details(&record, DetailsTab::Milestones);

    assert!(output.contains("[Milestones (2)]"));
    assert!(output.contains("  Kickoff [In Progress] (eeee5555)"));
    assert!(output.contains("  First call"));
    assert!(output.contains("  Due: 2024-05-01"));
    assert!(output.contains("  Launch [Pending] (ffff6666)"));
    assert!(output.contains("  Due: Not set"));
}

#[test]
fn test_partnership_form_missing_required() {
    let form = PartnershipForm {
        company_name: Some("Acme".to_string()),
        contact_email: Some("  ".to_string()),
        ..Default::default()
    };
    assert_eq!(form.missing_required(), vec!["Contact Email", "Description"]);

    let complete = PartnershipForm {
        company_name: Some("Acme".to_string()),
        contact_email: Some("a@acme.com".to_string()),
        description: Some("Pilot".to_string()),
        ..Default::default()
    };
    assert!(complete.missing_required().is_empty());
}

#[test]
fn test_partnership_form_into_input() {
    let input = PartnershipForm {
        company_name: Some("Acme".to_string()),
        contact_email: Some("a@acme.com".to_string()),
        industry: Some("   ".to_string()),
        description: Some("Pilot".to_string()),
        partnership_type: Some(PartnershipType::Technology),
        expected_value: Some("$100K".to_string()),
        timeline: None,
    }
    .into_input();

    assert_eq!(input.company_name, "Acme");
    assert_eq!(input.industry, None);
    assert_eq!(input.partnership_type, Some(PartnershipType::Technology));
    assert_eq!(input.expected_value.as_deref(), Some("$100K"));
    assert_eq!(input.timeline, None);
}

#[test]
fn test_complete_forms_do_not_prompt() {
    let collaborator = CollaboratorForm {
        name: Some("Jo".to_string()),
        email: Some("jo@acme.com".to_string()),
        role: Some(String::new()),
    }
    .prompt()
    .unwrap();
    assert_eq!(collaborator.name, "Jo");
    assert_eq!(collaborator.role, None);

    let milestone = MilestoneForm {
        title: Some("Kickoff".to_string()),
        description: None,
        due_date: Some("2024-05-01".to_string()),
    }
    .prompt()
    .unwrap();
    assert_eq!(milestone.title, "Kickoff");
    assert_eq!(milestone.due_date.as_deref(), Some("2024-05-01"));
}
