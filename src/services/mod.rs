pub mod date_policy;
pub mod submitter;
pub mod validator;
