//! HTML template rendering handlers for the calculator pages.

mod estimate;
mod index;
mod prorate;

pub use estimate::{EstimateForm, estimate_form_handler, estimate_submit_handler};
pub use index::index_handler;
pub use prorate::{ProrateForm, prorate_form_handler, prorate_submit_handler};

use validator::ValidationErrors;

/// Flattens validation errors into one line for display, ordered by field name.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid {field}"),
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_validation_message_orders_fields() {
        let form = ProrateForm {
            monthly_rent: -5.0,
            year: 1800,
            month: 1,
            move_in_day: 3,
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "Monthly rent must not be negative; Year must be between 1900 and 2100"
        );
    }
}
