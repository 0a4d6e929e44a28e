//! # DTOs
//!
//! ユースケースへの入出力

pub mod upload_request;
