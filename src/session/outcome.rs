//! Interpretation of a settled query

use crate::bridge::{BridgeFault, QueryPayload};

/// What a settled query means for the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The backend answered
    Response(String),
    /// The backend reported an error in its payload
    ReportedError(String),
    /// The call itself raised; holds the user-facing fault text
    Fault(String),
    /// Neither a response nor an error
    Empty,
}

impl Reply {
    /// Text of the assistant message to append, if any
    pub fn into_message(self) -> Option<String> {
        match self {
            Reply::Response(text) => Some(text),
            Reply::ReportedError(error) | Reply::Fault(error) => Some(format!("Error: {error}")),
            Reply::Empty => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Response(_) => "response",
            Reply::ReportedError(_) => "reported_error",
            Reply::Fault(_) => "fault",
            Reply::Empty => "empty",
        }
    }
}

/// Precedence: response, then reported error, then fault, else empty
pub fn interpret(result: Result<QueryPayload, BridgeFault>) -> Reply {
    match result {
        Ok(QueryPayload {
            response: Some(response),
            ..
        }) if !response.is_empty() => Reply::Response(response),
        Ok(QueryPayload {
            error: Some(error), ..
        }) if !error.is_empty() => Reply::ReportedError(error),
        Ok(_) => Reply::Empty,
        Err(fault) => Reply::Fault(fault.user_message().to_string()),
    }
}
