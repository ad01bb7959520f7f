//! Advice module.

mod advice_model;

pub use advice_model::Advice;
