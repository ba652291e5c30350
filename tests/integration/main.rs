//! Service-level tests against an in-process mock backend

mod helper;
mod circulation;
