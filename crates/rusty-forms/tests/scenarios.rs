//! End-to-end scenarios for the registration form.
//!
//! Each test drives a `FormController` through UI triggers and inspects what
//! an in-memory surface would show the user.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_forms::*;

type Sent = Rc<RefCell<Vec<FormSnapshot>>>;

fn form() -> (FormController<FieldValues, InMemorySurface, impl SubmitHandler>, Sent) {
    let sent: Sent = Rc::default();
    let sink = Rc::clone(&sent);
    let form = FormController::new(
        &FormConfig::registration(),
        FieldValues::new(),
        InMemorySurface::new(),
        move |snapshot: &FormSnapshot| -> anyhow::Result<()> {
            sink.borrow_mut().push(snapshot.clone());
            Ok(())
        },
    )
    .expect("registration form is well formed");
    (form, sent)
}

fn fill_valid(values: &mut FieldValues) {
    values
        .set("fname", "Alice")
        .set("email", "alice@mail.com")
        .set("age", "25")
        .set("country", "Canada")
        .select("gender", "female");
}

fn id(s: &str) -> FieldId {
    FieldId::new(s)
}

#[test]
fn scenario_a_short_name_is_rejected_on_exit() {
    let (mut form, _) = form();
    form.values_mut().set("fname", "Al");
    form.handle(Trigger::Exit(id("fname"))).unwrap();

    assert_eq!(
        form.surface().annotation("fname"),
        Some("First Name must be at least 3 characters.")
    );
    assert_eq!(form.surface().class("fname"), Some(VisualClass::Error));
}

#[test]
fn scenario_b_valid_form_is_accepted_and_handed_off() {
    let (mut form, sent) = form();
    fill_valid(form.values_mut());

    let report = form.handle(Trigger::SubmitAttempted).unwrap().unwrap();

    assert_eq!(report.decision, FormDecision::Accepted);
    assert_eq!(form.surface().annotation_count(), 0);
    assert_eq!(
        form.surface().summary(),
        Some(&Summary::new(SummaryTone::Success, "All data is valid! Submitting form..."))
    );

    let sent = sent.borrow();
    assert_eq!(sent.len(), 1);
    let snapshot = &sent[0];
    assert_eq!(snapshot.get("fname"), Some("Alice"));
    assert_eq!(snapshot.get("gender"), Some("female"));
    assert_eq!(snapshot.len(), 5);
}

#[rstest]
#[case("17", "You must be at least 18 years old.")]
#[case("95", "Age cannot be higher than 90.")]
#[case("", "Age is required.")]
#[case("   ", "Age is required.")]
#[case("eighteen", "Age must be a number.")]
fn scenario_c_age_bounds(#[case] age: &str, #[case] expected: &str) {
    let (mut form, _) = form();
    form.values_mut().set("age", age);
    form.exit(&id("age")).unwrap();

    assert_eq!(form.surface().annotation("age"), Some(expected));
}

#[rstest]
#[case("18")]
#[case("90")]
#[case(" 42 ")]
fn scenario_c_age_in_range(#[case] age: &str) {
    let (mut form, _) = form();
    form.values_mut().set("age", age);
    form.exit(&id("age")).unwrap();

    assert_eq!(form.surface().annotation("age"), None);
    assert_eq!(form.surface().class("age"), Some(VisualClass::Success));
}

#[test]
fn scenario_d_missing_gender_rejects_with_only_group_annotation() {
    let (mut form, sent) = form();
    fill_valid(form.values_mut());
    form.values_mut().clear("gender");

    let report = form.submit_attempted().unwrap();

    assert_eq!(report.decision, FormDecision::Rejected);
    assert_eq!(form.surface().annotated(), vec!["gender"]);
    assert_eq!(form.surface().annotation("gender"), Some("Please select a gender."));
    assert_eq!(
        form.surface().summary(),
        Some(&Summary::new(
            SummaryTone::Failure,
            "Please fix the errors highlighted in red above."
        ))
    );
    assert!(sent.borrow().is_empty());
}

#[test]
fn scenario_d_picking_gender_clears_group_annotation() {
    let (mut form, _) = form();
    fill_valid(form.values_mut());
    form.values_mut().clear("gender");
    form.submit_attempted().unwrap();

    form.values_mut().select("gender", "other");
    form.handle(Trigger::SelectionChanged(id("gender"))).unwrap();

    assert_eq!(form.surface().annotation("gender"), None);
    assert_eq!(
        form.presenter().state("gender"),
        Some(&FieldVisualState::Success)
    );
}

#[test]
fn scenario_e_typing_clears_error_on_first_valid_input() {
    let (mut form, _) = form();
    form.values_mut().set("fname", "");
    form.exit(&id("fname")).unwrap();
    assert_eq!(form.surface().annotation("fname"), Some("First Name cannot be empty."));

    form.values_mut().set("fname", "A");
    form.value_changed(&id("fname")).unwrap();
    assert_eq!(
        form.surface().annotation("fname"),
        Some("First Name must be at least 3 characters.")
    );

    form.values_mut().set("fname", "Al");
    form.value_changed(&id("fname")).unwrap();
    assert!(form.surface().annotation("fname").is_some());

    form.values_mut().set("fname", "Ali");
    form.value_changed(&id("fname")).unwrap();
    assert_eq!(form.surface().annotation("fname"), None);
    assert_eq!(form.surface().class("fname"), Some(VisualClass::Success));

    // Further typing on a valid field is ignored until the next exit
    form.values_mut().set("fname", "");
    form.value_changed(&id("fname")).unwrap();
    assert_eq!(form.surface().annotation("fname"), None);
}

#[test]
fn submit_reports_every_failing_field_independently() {
    let (mut form, _) = form();
    let report = form.submit_attempted().unwrap();

    assert_eq!(report.decision, FormDecision::Rejected);
    let failed: Vec<&str> = report.failed().map(FieldId::as_str).collect();
    assert_eq!(failed, vec!["fname", "email", "age", "country", "gender"]);
    assert_eq!(form.surface().annotation_count(), 5);
    assert_eq!(
        form.surface().annotation("country"),
        Some("Please select a country from the list.")
    );
    for field in ["fname", "email", "age", "country", "gender"] {
        assert!(form.is_touched(field), "{field} should be touched after submit");
    }
}

#[test]
fn submit_report_serializes() {
    let (mut form, _) = form();
    fill_valid(form.values_mut());
    let report = form.submit_attempted().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["decision"], "accepted");
    assert_eq!(json["outcomes"][0][0], "fname");
    assert_eq!(json["outcomes"][0][1]["status"], "valid");
}

#[test]
fn form_loads_from_bundled_definition() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/forms/registration.toml");
    let config = FormConfig::load(path).unwrap();
    assert_eq!(config.form.name, "registration");
    assert_eq!(config.fields.len(), 5);
}
