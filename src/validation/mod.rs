//! 로마자 입력 검증 모듈

pub mod validator;

pub use validator::{analyze_input, is_complete_match, is_valid_prefix, InputCheck};
