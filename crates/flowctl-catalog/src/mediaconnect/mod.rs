//! AWS Elemental MediaConnect (`EMCN`) cmdlets.

mod flows;
mod outputs;
mod sources;

use flowctl_core::domain::{OperationSpec, Service};

use crate::tags;

pub use flows::{GET_FLOW, GET_FLOW_LIST, NEW_FLOW, REMOVE_FLOW, START_FLOW, STOP_FLOW};
pub use outputs::{ADD_FLOW_OUTPUT, REMOVE_FLOW_OUTPUT, UPDATE_FLOW_OUTPUT};
pub use sources::{
    GRANT_FLOW_ENTITLEMENT, REMOVE_FLOW_SOURCE, REVOKE_FLOW_ENTITLEMENT, UPDATE_FLOW_SOURCE,
};

pub static ADD_RESOURCE_TAG: OperationSpec = tags::add(Service::MediaConnect);
pub static GET_RESOURCE_TAG: OperationSpec = tags::get(Service::MediaConnect);
pub static REMOVE_RESOURCE_TAG: OperationSpec = tags::remove(Service::MediaConnect);

/// Every MediaConnect operation, in listing order.
pub static OPERATIONS: &[&OperationSpec] = &[
    &NEW_FLOW,
    &GET_FLOW,
    &GET_FLOW_LIST,
    &REMOVE_FLOW,
    &START_FLOW,
    &STOP_FLOW,
    &ADD_FLOW_OUTPUT,
    &UPDATE_FLOW_OUTPUT,
    &REMOVE_FLOW_OUTPUT,
    &UPDATE_FLOW_SOURCE,
    &REMOVE_FLOW_SOURCE,
    &GRANT_FLOW_ENTITLEMENT,
    &REVOKE_FLOW_ENTITLEMENT,
    &ADD_RESOURCE_TAG,
    &GET_RESOURCE_TAG,
    &REMOVE_RESOURCE_TAG,
];
