//! Prediction form state.
//!
//! Every field is bounded: the sliders clamp, the selects cycle. A profile
//! built from the form is therefore always in-domain for a matching
//! preprocessor — malformed input is unrepresentable rather than validated.

use crate::model::{
    Contract, CustomerProfile, InternetService, PaymentMethod, MONTHLY_CHARGES_MAX, TENURE_MAX,
};
use crate::store::PredictionOutcome;

/// Focusable rows of the prediction form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Tenure,
    MonthlyCharges,
    Contract,
    PaymentMethod,
    InternetService,
    Predict,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Tenure,
        FormField::MonthlyCharges,
        FormField::Contract,
        FormField::PaymentMethod,
        FormField::InternetService,
        FormField::Predict,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Tenure => "Tenure (months)",
            FormField::MonthlyCharges => "Monthly charges ($)",
            FormField::Contract => "Contract type",
            FormField::PaymentMethod => "Payment method",
            FormField::InternetService => "Internet service",
            FormField::Predict => "Predict",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// The five inputs, the focused row, and the most recent outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub field: FormField,
    pub tenure: u32,
    pub monthly_charges: u32,
    pub contract: usize,
    pub payment_method: usize,
    pub internet_service: usize,
    pub outcome: Option<PredictionOutcome>,
}

impl Default for PredictionForm {
    fn default() -> Self {
        let defaults = CustomerProfile::default();
        Self {
            field: FormField::Tenure,
            tenure: defaults.tenure,
            monthly_charges: defaults.monthly_charges as u32,
            contract: 0,
            payment_method: 0,
            internet_service: 0,
            outcome: None,
        }
    }
}

impl PredictionForm {
    /// Assemble the single-row prediction record from the current inputs.
    pub fn profile(&self) -> CustomerProfile {
        CustomerProfile {
            tenure: self.tenure,
            monthly_charges: f64::from(self.monthly_charges),
            contract: Contract::ALL[self.contract],
            payment_method: PaymentMethod::ALL[self.payment_method],
            internet_service: InternetService::ALL[self.internet_service],
        }
    }

    pub fn next_field(&mut self) {
        let idx = (self.field.index() + 1).min(FormField::ALL.len() - 1);
        self.field = FormField::ALL[idx];
    }

    pub fn previous_field(&mut self) {
        self.field = FormField::ALL[self.field.index().saturating_sub(1)];
    }

    /// Adjust the focused field: sliders step and clamp, selects cycle.
    /// Any change invalidates a previously displayed outcome, which was
    /// computed for inputs that no longer match the form.
    pub fn adjust(&mut self, delta: i64) {
        let before = self.clone();
        match self.field {
            FormField::Tenure => self.tenure = step_clamped(self.tenure, delta, TENURE_MAX),
            FormField::MonthlyCharges => {
                self.monthly_charges = step_clamped(self.monthly_charges, delta, MONTHLY_CHARGES_MAX)
            }
            FormField::Contract => self.contract = cycle(self.contract, delta, Contract::ALL.len()),
            FormField::PaymentMethod => {
                self.payment_method = cycle(self.payment_method, delta, PaymentMethod::ALL.len())
            }
            FormField::InternetService => {
                self.internet_service =
                    cycle(self.internet_service, delta, InternetService::ALL.len())
            }
            FormField::Predict => return,
        }
        if self.tenure != before.tenure
            || self.monthly_charges != before.monthly_charges
            || self.contract != before.contract
            || self.payment_method != before.payment_method
            || self.internet_service != before.internet_service
        {
            self.outcome = None;
        }
    }
}

fn step_clamped(value: u32, delta: i64, max: u32) -> u32 {
    (i64::from(value) + delta).clamp(0, i64::from(max)) as u32
}

fn cycle(index: usize, delta: i64, len: usize) -> usize {
    (index as i64 + delta).rem_euclid(len as i64) as usize
}
