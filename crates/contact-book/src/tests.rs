//! Form Flow Tests
//!
//! Typing, submitting and resetting a form end to end, for both variants.

#[cfg(test)]
mod tests {
    use crate::domain::Field;
    use crate::error::{FieldError, SubmitError};
    use crate::form::ContactForm;
    use crate::validation::{FormVariant, ValidationRules};

    fn new_form(variant: FormVariant) -> ContactForm {
        ContactForm::new(variant, ValidationRules::default())
    }

    fn fill(form: &mut ContactForm, first: &str, last: &str, phone: &str) {
        form.input(Field::FirstName, first);
        form.input(Field::LastName, last);
        form.input(Field::PhoneNumber, phone);
    }

    #[test]
    fn test_empty_required_field_blocks_submit() {
        for variant in FormVariant::ALL {
            for blank in Field::ALL {
                let mut form = new_form(variant);
                fill(&mut form, "Ann", "Lee", "5551234567");
                form.input(blank, "");

                assert!(!form.can_submit());
                let err = form.submit().unwrap_err();
                match err {
                    SubmitError::Invalid(errors) => {
                        assert_eq!(errors.get(blank), Some(&FieldError::Required { field: blank }));
                    }
                    other => panic!("expected invalid, got {:?}", other),
                }
                assert!(form.book().is_empty());
            }
        }
    }

    #[test]
    fn test_phone_is_stripped_then_length_checked() {
        for variant in FormVariant::ALL {
            let mut form = new_form(variant);
            fill(&mut form, "Ann", "Lee", "(555) 123-4567");
            assert_eq!(form.draft().phone_number, "5551234567");
            assert!(form.can_submit());

            form.input(Field::PhoneNumber, "555-123-456");
            assert_eq!(form.draft().phone_number, "555123456");
            assert!(!form.can_submit());

            form.input(Field::PhoneNumber, "+1 555 123 4567");
            assert_eq!(form.draft().phone_number, "15551234567");
            assert!(matches!(
                form.submit(),
                Err(SubmitError::Invalid(ref e)) if e.get(Field::PhoneNumber)
                    == Some(&FieldError::WrongLength { field: Field::PhoneNumber, expected: 10, actual: 11 })
            ));
        }
    }

    #[test]
    fn test_identical_resubmit_is_duplicate() {
        for variant in FormVariant::ALL {
            let mut form = new_form(variant);
            fill(&mut form, "Ann", "Lee", "5551234567");
            let first = form.submit().unwrap();
            assert_eq!(first.id, 1);

            fill(&mut form, "Ann", "Lee", "5551234567");
            let err = form.submit().unwrap_err();
            assert!(matches!(err, SubmitError::Duplicate(d) if d.existing_id == 1));
            assert_eq!(form.book().len(), 1);

            // Draft is kept and the banner is shown
            assert_eq!(form.draft().first_name, "Ann");
            assert!(form.notice().is_some());
        }
    }

    #[test]
    fn test_case_insensitive_duplicate() {
        let mut form = new_form(FormVariant::Schema);
        fill(&mut form, "Ann", "Lee", "5551234567");
        form.submit().unwrap();

        fill(&mut form, "ann", "lee", "5551234567");
        assert!(matches!(form.submit(), Err(SubmitError::Duplicate(_))));
        assert_eq!(form.book().len(), 1);
    }

    #[test]
    fn test_notice_clears_on_next_edit() {
        let mut form = new_form(FormVariant::Plain);
        fill(&mut form, "Ann", "Lee", "5551234567");
        form.submit().unwrap();
        fill(&mut form, "Ann", "Lee", "5551234567");
        form.submit().unwrap_err();
        assert!(form.notice().is_some());

        form.input(Field::FirstName, "Anna");
        assert!(form.notice().is_none());
        assert!(form.submit().is_ok());
        assert_eq!(form.book().len(), 2);
    }

    #[test]
    fn test_sorted_projection() {
        let mut form = new_form(FormVariant::Plain);
        fill(&mut form, "Ann", "Lee", "5551234567");
        form.submit().unwrap();
        fill(&mut form, "Bob", "Adams", "5559876543");
        form.submit().unwrap();

        let last_names: Vec<String> = form.sorted_contacts().into_iter().map(|c| c.last_name).collect();
        assert_eq!(last_names, vec!["Adams", "Lee"]);
        assert_eq!(form.book().contacts()[0].last_name, "Lee");
    }

    #[test]
    fn test_successful_submit_resets_draft_and_errors() {
        for variant in FormVariant::ALL {
            let mut form = new_form(variant);
            fill(&mut form, "Ann", "L", "5551234567");
            assert!(form.visible_error(Field::LastName).is_some());
            form.input(Field::LastName, "Lee");
            form.submit().unwrap();

            assert!(form.draft().is_empty());
            assert!(form.visible_errors().is_empty());
            assert!(form.notice().is_none());
            // The empty draft is still not submittable
            assert!(!form.can_submit());
        }
    }

    #[test]
    fn test_errors_hidden_until_touched_or_submitted() {
        let mut form = new_form(FormVariant::Schema);
        assert!(form.visible_errors().is_empty());
        assert_eq!(form.errors().len(), 3);

        form.input(Field::FirstName, "A");
        assert_eq!(
            form.visible_error(Field::FirstName),
            Some(&FieldError::TooShort { field: Field::FirstName, min: 2 })
        );
        assert!(form.visible_error(Field::LastName).is_none());

        form.submit().unwrap_err();
        assert_eq!(form.visible_errors().len(), 3);
    }

    #[test]
    fn test_names_are_stored_trimmed() {
        let mut form = new_form(FormVariant::Plain);
        fill(&mut form, "  Ann ", " Lee", "5551234567");
        let contact = form.submit().unwrap();
        assert_eq!(contact.first_name, "Ann");
        assert_eq!(contact.last_name, "Lee");

        fill(&mut form, "Ann", "Lee ", "5551234567");
        assert!(matches!(form.submit(), Err(SubmitError::Duplicate(_))));
    }

    #[test]
    fn test_forms_are_independent() {
        let mut plain = new_form(FormVariant::Plain);
        let schema = new_form(FormVariant::Schema);
        fill(&mut plain, "Ann", "Lee", "5551234567");
        plain.submit().unwrap();

        assert_eq!(plain.book().len(), 1);
        assert!(schema.book().is_empty());
        assert_eq!(schema.variant(), FormVariant::Schema);
    }
}
