//! rrdgraph Core Types and Definitions
//!
//! This crate provides the foundational types for building `rrdtool graph`
//! invocations. It includes:
//!
//! - **Attributes**: Validated graph attribute values ([`attribute`] module)
//! - **Colors**: CSS color parsing rendered in rrdtool's hex form ([`color::Color`])
//! - **Variable names**: Validated rrdtool vnames ([`vname::VName`])
//! - **Elements**: The [`element::GraphElement`] trait, shared [`element::Element`]
//!   handles and the concrete graph commands ([`element`] module)
//! - **Errors**: Attribute and element errors ([`error`] module)

pub mod attribute;
pub mod color;
pub mod element;
pub mod error;
pub mod vname;
