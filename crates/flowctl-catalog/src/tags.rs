//! Resource tagging operations, identical in shape for every service.

use flowctl_core::domain::{
    FieldKind, FieldSpec, HttpBinding, HttpMethod, Location, OperationSpec, Service, Verb,
};

const RESOURCE_ARN: FieldSpec =
    FieldSpec::new("ResourceArn", Location::Path("resourceArn"), FieldKind::String)
        .required()
        .help("ARN of the resource to tag");

const ADD_FIELDS: &[FieldSpec] = &[
    RESOURCE_ARN,
    FieldSpec::new("Tag", Location::Body("tags"), FieldKind::Map)
        .required()
        .aliases(&["Tags"]),
];

const GET_FIELDS: &[FieldSpec] = &[RESOURCE_ARN];

const REMOVE_FIELDS: &[FieldSpec] = &[
    RESOURCE_ARN,
    FieldSpec::new("TagKey", Location::Query("tagKeys"), FieldKind::StringList)
        .required()
        .aliases(&["TagKeys"]),
];

pub const fn add(service: Service) -> OperationSpec {
    OperationSpec {
        service,
        verb: Verb::Add,
        noun: "ResourceTag",
        operation: "TagResource",
        http: HttpBinding::new(HttpMethod::Post, "/tags/{resourceArn}"),
        fields: ADD_FIELDS,
        confirm_targets: &["ResourceArn"],
        default_select: "*",
        metadata_fields: &[],
        summary: "Adds or overwrites tags on a resource.",
    }
}

pub const fn get(service: Service) -> OperationSpec {
    OperationSpec {
        service,
        verb: Verb::Get,
        noun: "ResourceTag",
        operation: "ListTagsForResource",
        http: HttpBinding::new(HttpMethod::Get, "/tags/{resourceArn}"),
        fields: GET_FIELDS,
        confirm_targets: &[],
        default_select: "Tags",
        metadata_fields: &[],
        summary: "Lists the tags on a resource.",
    }
}

pub const fn remove(service: Service) -> OperationSpec {
    OperationSpec {
        service,
        verb: Verb::Remove,
        noun: "ResourceTag",
        operation: "UntagResource",
        http: HttpBinding::new(HttpMethod::Delete, "/tags/{resourceArn}"),
        fields: REMOVE_FIELDS,
        confirm_targets: &["ResourceArn"],
        default_select: "*",
        metadata_fields: &[],
        summary: "Removes tags from a resource.",
    }
}
