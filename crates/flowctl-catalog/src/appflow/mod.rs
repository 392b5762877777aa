//! Amazon Appflow (`AF`) cmdlets.

mod connectors;
mod flows;

use flowctl_core::domain::{OperationSpec, Service};

use crate::tags;

pub use connectors::{
    GET_CONNECTOR_PROFILE, NEW_CONNECTOR_PROFILE, REGISTER_CONNECTOR, REMOVE_CONNECTOR_PROFILE,
    UNREGISTER_CONNECTOR,
};
pub use flows::{
    GET_FLOW, GET_FLOW_EXECUTION_RECORD, GET_FLOW_LIST, NEW_FLOW, REMOVE_FLOW, START_FLOW,
    STOP_FLOW, UPDATE_FLOW,
};

pub static ADD_RESOURCE_TAG: OperationSpec = tags::add(Service::Appflow);
pub static GET_RESOURCE_TAG: OperationSpec = tags::get(Service::Appflow);
pub static REMOVE_RESOURCE_TAG: OperationSpec = tags::remove(Service::Appflow);

/// Every Appflow operation, in listing order.
pub static OPERATIONS: &[&OperationSpec] = &[
    &NEW_FLOW,
    &GET_FLOW,
    &GET_FLOW_LIST,
    &UPDATE_FLOW,
    &REMOVE_FLOW,
    &START_FLOW,
    &STOP_FLOW,
    &GET_FLOW_EXECUTION_RECORD,
    &NEW_CONNECTOR_PROFILE,
    &GET_CONNECTOR_PROFILE,
    &REMOVE_CONNECTOR_PROFILE,
    &REGISTER_CONNECTOR,
    &UNREGISTER_CONNECTOR,
    &ADD_RESOURCE_TAG,
    &GET_RESOURCE_TAG,
    &REMOVE_RESOURCE_TAG,
];
