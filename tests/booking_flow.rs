use spa_booking::{
    booking::{BookingData, BookingStep, BookingWizard, FieldKey, FieldValue},
    business::Business,
    errors::WizardError,
    forms::{cvv_rules, format_card_number, format_expiry_date, required_rules},
    init,
};

fn contact_step(wizard: &mut BookingWizard) {
    let mut form = wizard.form().expect("contact form");
    form.input(FieldKey::FullName, "Grace Hopper");
    form.input(FieldKey::Email, "grace@navy.mil");
    form.input(FieldKey::Phone, "555-0142");
    form.input(FieldKey::Message, "Hot stone therapy");
    assert_eq!(wizard.submit(&form).unwrap(), BookingStep::Payment);
}

#[test]
fn contact_step_merges_into_defaults() {
    init();
    let mut wizard = BookingWizard::new(Business::default());
    contact_step(&mut wizard);

    let expected = BookingData {
        full_name: "Grace Hopper".into(),
        email: "grace@navy.mil".into(),
        phone: "555-0142".into(),
        message: "Hot stone therapy".into(),
        ..BookingData::default()
    };
    assert_eq!(wizard.data(), &expected);
}

#[test]
fn payment_requires_terms_then_confirms() {
    let mut wizard = BookingWizard::new(Business::default());
    contact_step(&mut wizard);

    let mut form = wizard.form().expect("payment form");
    form.input(FieldKey::CardNumber, "5555-4444-3333-2222");
    form.input(FieldKey::ExpiryDate, "0930");
    form.input(FieldKey::Cvv, "987");
    form.input(FieldKey::BillingZip, "20001");

    match wizard.submit(&form) {
        Err(WizardError::Validation(errors)) => {
            assert_eq!(errors.keys().collect::<Vec<_>>(), vec![FieldKey::AgreeToTerms]);
        }
        other => panic!("Unexpected submit result: {:?}", other),
    }
    assert_eq!(wizard.step(), BookingStep::Payment);
    assert!(wizard.data().card_number.is_empty());

    form.set_flag(FieldKey::AgreeToTerms, true);
    assert_eq!(wizard.submit(&form).unwrap(), BookingStep::Confirmation);

    let data = wizard.data();
    assert_eq!(data.full_name, "Grace Hopper");
    assert_eq!(data.card_number, "5555 4444 3333 2222");
    assert_eq!(data.expiry_date, "09/30");
    assert_eq!(data.cvv, "987");
    assert!(data.agree_to_terms);
    assert_eq!(wizard.receipt().map(|r| &r.data), Some(data));
}

#[test]
fn business_is_shared_unchanged_across_steps() {
    let mut business = Business::default();
    business.name = "Copper Spa".into();
    let mut wizard = BookingWizard::new(business.clone());
    contact_step(&mut wizard);
    assert_eq!(wizard.business(), &business);
}

#[test]
fn public_formatters_and_validators() {
    assert_eq!(format_card_number("1234567890123456"), "1234 5678 9012 3456");
    assert_eq!(format_expiry_date("12345"), "12/34");
    assert!(required_rules("Test Field").validate(&FieldValue::Absent).is_ok());
    assert_eq!(
        cvv_rules("CVV")
            .validate(&FieldValue::text("12a"))
            .unwrap_err()
            .message,
        "CVV must contain only numbers"
    );
}
