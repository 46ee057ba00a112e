//! Rendering surface port definition.

use crate::domain::entities::{FormElement, FormField};

/// Port for the surface presenting the form.
pub trait FormSurface {
    /// Returns whether the surface provides the element.
    fn has_element(&self, element: FormElement) -> bool;

    /// Returns the raw text of a field.
    fn read_field(&self, field: FormField) -> String;

    /// Moves input focus to a field.
    fn focus(&mut self, field: FormField);

    /// Resets every field to empty.
    fn clear_fields(&mut self);

    /// Returns the elements the surface lacks.
    fn missing_elements(&self) -> Vec<FormElement> {
        FormElement::REQUIRED
            .into_iter()
            .filter(|element| !self.has_element(*element))
            .collect()
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// In-memory surface for controller tests.
    #[derive(Debug, Default)]
    pub struct MockFormSurface {
        pub beer_count: String,
        pub email: String,
        pub focused: Option<FormField>,
        pub missing: Vec<FormElement>,
        pub clear_count: usize,
    }

    impl MockFormSurface {
        pub fn with_values(beer_count: &str, email: &str) -> Self {
            Self {
                beer_count: beer_count.to_string(),
                email: email.to_string(),
                ..Self::default()
            }
        }

        pub fn without(mut self, element: FormElement) -> Self {
            self.missing.push(element);
            self
        }
    }

    impl FormSurface for MockFormSurface {
        fn has_element(&self, element: FormElement) -> bool {
            !self.missing.contains(&element)
        }

        fn read_field(&self, field: FormField) -> String {
            match field {
                FormField::BeerCount => self.beer_count.clone(),
                FormField::Email => self.email.clone(),
            }
        }

        fn focus(&mut self, field: FormField) {
            self.focused = Some(field);
        }

        fn clear_fields(&mut self) {
            self.beer_count.clear();
            self.email.clear();
            self.clear_count += 1;
        }
    }
}
