pub mod executor;

pub use executor::{pay_invoice, PaymentOutcome};
