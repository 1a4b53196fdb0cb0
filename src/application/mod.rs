//! Application layer orchestrating the domain ports.
//!
//! `PaymentNotifier` is the entry point for payment requests. It never reaches
//! for a concrete calculator or output stream; both are injected.

pub mod notifier;
