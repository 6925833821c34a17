//! Port traits - interfaces to external collaborators

mod ports;

pub use ports::{
    CaseStore, ErrorSink, LabelResolver, LogDispatcher, ModerationConfigStore, PortResult,
};
