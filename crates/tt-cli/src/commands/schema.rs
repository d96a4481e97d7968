use anyhow::bail;
use schemars::{Schema, schema_for};
use tt_core::entities::{
    AppInfo, Company, CompanyDetail, Customer, Employee, ServiceItem, TimeActivity,
};
use tt_core::money::Money;
use tt_core::responses::{StatusResponse, SyncReport, SyncResponse};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `ttrack schema`.
pub const TYPE_NAMES: &[&str] = &[
    "app-info",
    "company",
    "company-detail",
    "employee",
    "customer",
    "service-item",
    "time-activity",
    "money",
    "sync-response",
    "sync-report",
    "status",
];

fn schema_of(type_name: &str) -> Option<Schema> {
    let schema = match type_name.replace('_', "-").as_str() {
        "app-info" => schema_for!(AppInfo),
        "company" => schema_for!(Company),
        "company-detail" => schema_for!(CompanyDetail),
        "employee" => schema_for!(Employee),
        "customer" => schema_for!(Customer),
        "service-item" => schema_for!(ServiceItem),
        "time-activity" => schema_for!(TimeActivity),
        "money" => schema_for!(Money),
        "sync-response" => schema_for!(SyncResponse),
        "sync-report" => schema_for!(SyncReport),
        "status" => schema_for!(StatusResponse),
        _ => return None,
    };
    Some(schema)
}

/// Handle `ttrack schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema_of(&args.type_name) else {
        bail!(
            "unknown type '{}'; expected one of: {}",
            args.type_name,
            TYPE_NAMES.join(", ")
        );
    };
    output(&schema, flags.format)
}
