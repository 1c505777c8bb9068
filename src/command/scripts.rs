//! Commands for the create and remove scripts.

use crate::config::ScriptConfig;
use crate::forms::{CreateUsers, RemoveUsers};

use super::builder::CommandLine;

/// Render the create-users invocation.
///
/// Subscription and location only apply when resource groups are created.
pub fn create_command(req: &CreateUsers, scripts: &ScriptConfig) -> String {
    let mut cmd = CommandLine::script(&scripts.create_script);
    cmd.quoted("ConferenceName", &req.conference_name)
        .param("UserCount", req.user_count);

    if let Some(domain) = &req.domain {
        cmd.quoted("Domain", domain);
    }

    if let Some(password) = &req.password {
        cmd.quoted("Password", password);
    }

    // The script forces a password change unless told otherwise.
    if !req.force_password_change {
        cmd.boolean("ForcePasswordChange", false);
    }

    if req.create_resource_groups {
        cmd.boolean("CreateResourceGroups", true);

        if let Some(id) = &req.subscription_id {
            cmd.quoted("SubscriptionId", id);
        }

        if let Some(location) = &req.location {
            cmd.quoted("Location", location);
        }
    }

    if let Some(path) = &req.excel_output_path {
        cmd.quoted("ExcelOutputPath", path);
    }

    if req.dry_run {
        cmd.switch("DryRun");
    }

    cmd.finish()
}

/// Render the remove-users invocation.
pub fn remove_command(req: &RemoveUsers, scripts: &ScriptConfig) -> String {
    let mut cmd = CommandLine::script(&scripts.remove_script);
    cmd.quoted("ConferenceName", &req.conference_name);

    if let Some(domain) = &req.domain {
        cmd.quoted("Domain", domain);
    }

    // Groups are removed by default.
    if !req.remove_groups {
        cmd.boolean("RemoveGroups", false);
    }

    if req.remove_resource_groups {
        cmd.boolean("RemoveResourceGroups", true);
    }

    if req.force {
        cmd.switch("Force");
    }

    if req.dry_run {
        cmd.switch("DryRun");
    }

    cmd.finish()
}
