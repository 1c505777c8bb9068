//! Individual pages.

use crate::forms::{CreateForm, Operation, RemoveForm};

use super::escape::escape_html;
use super::layout::{render, Flash, FlashCategory};

/// Everything the result page shows about a generated command.
#[derive(Debug, Clone)]
pub struct CommandResult<'a> {
    pub operation: Operation,
    pub command: &'a str,
    pub conference_name: &'a str,
    pub user_count: Option<u32>,
}

pub fn index() -> String {
    render(
        "Home",
        &[],
        r#"<h1>Conference User Management</h1>
<p>Generate PowerShell commands that create or remove temporary Entra ID users for a conference.</p>
<ul>
<li><a href="/create">Create conference users</a></li>
<li><a href="/remove">Remove conference users</a></li>
</ul>"#,
    )
}

pub fn about() -> String {
    render(
        "About",
        &[],
        r#"<h1>About</h1>
<p>This tool builds command lines for the <code>New-ConferenceUsers.ps1</code> and
<code>Remove-ConferenceUsers.ps1</code> scripts. It never runs them: copy the generated
command and execute it from a PowerShell session signed in to the target tenant.</p>
<p>Use <em>Dry Run</em> to preview what the script would change.</p>"#,
    )
}

pub fn not_found(path: &str) -> String {
    render(
        "Not Found",
        &[],
        &format!(
            "<h1>Not Found</h1>\n<p>No page at <code>{}</code>.</p>",
            escape_html(path)
        ),
    )
}

fn value_attr(value: &Option<String>) -> String {
    escape_html(value.as_deref().unwrap_or_default())
}

fn checked(value: &Option<String>) -> &'static str {
    if value.as_deref() == Some("true") {
        " checked"
    } else {
        ""
    }
}

fn text_input(label: &str, name: &str, value: &str, extra: &str) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"{extra}>\n"
    )
}

fn checkbox(label: &str, name: &str, checked: &str) -> String {
    format!(
        "<label><input type=\"checkbox\" name=\"{name}\" value=\"true\"{checked}> {label}</label>\n"
    )
}

/// The create form, optionally prefilled from a rejected submission.
///
/// The password is never echoed back.
pub fn create_form(
    locations: &[String],
    default_user_count: u32,
    submitted: Option<&CreateForm>,
    flashes: &[Flash],
) -> String {
    let blank = CreateForm {
        user_count: Some(default_user_count.to_string()),
        force_password_change: Some("true".into()),
        ..Default::default()
    };
    let form = submitted.unwrap_or(&blank);

    let selected = form.location.as_deref().map(str::trim).unwrap_or_default();
    let mut options = String::from("<option value=\"\">(script default)</option>\n");
    for location in locations {
        let sel = if location == selected { " selected" } else { "" };
        let location = escape_html(location);
        options.push_str(&format!("<option value=\"{location}\"{sel}>{location}</option>\n"));
    }

    let mut body = String::from("<h1>Create Conference Users</h1>\n<form method=\"post\" action=\"/create\">\n");
    body.push_str(&text_input(
        "Conference Name",
        "conference_name",
        &value_attr(&form.conference_name),
        " required pattern=\"[a-zA-Z0-9_\\-]+\"",
    ));
    body.push_str(&format!(
        "<label for=\"user_count\">User Count</label>\n<input type=\"number\" id=\"user_count\" name=\"user_count\" min=\"1\" max=\"1000\" value=\"{}\">\n",
        value_attr(&form.user_count)
    ));
    body.push_str(&text_input("Domain", "domain", &value_attr(&form.domain), " placeholder=\"company.com\""));
    body.push_str("<label for=\"password\">Password</label>\n<input type=\"password\" id=\"password\" name=\"password\" autocomplete=\"new-password\">\n");
    body.push_str(&checkbox(
        "Force password change at first sign-in",
        "force_password_change",
        checked(&form.force_password_change),
    ));
    body.push_str("<fieldset>\n<legend>Azure resources</legend>\n");
    body.push_str(&checkbox(
        "Create a resource group per user",
        "create_resource_groups",
        checked(&form.create_resource_groups),
    ));
    body.push_str(&text_input(
        "Subscription ID",
        "subscription_id",
        &value_attr(&form.subscription_id),
        " placeholder=\"00000000-0000-0000-0000-000000000000\"",
    ));
    body.push_str(&format!(
        "<label for=\"location\">Location</label>\n<select id=\"location\" name=\"location\">\n{options}</select>\n</fieldset>\n"
    ));
    body.push_str(&text_input(
        "Excel Output Path",
        "excel_output_path",
        &value_attr(&form.excel_output_path),
        "",
    ));
    body.push_str(&checkbox("Dry Run", "dry_run", checked(&form.dry_run)));
    body.push_str("<p><button type=\"submit\">Generate Command</button></p>\n</form>");

    render("Create Users", flashes, &body)
}

/// The remove form, optionally prefilled from a rejected submission.
pub fn remove_form(submitted: Option<&RemoveForm>, flashes: &[Flash]) -> String {
    let blank = RemoveForm {
        remove_groups: Some("true".into()),
        ..Default::default()
    };
    let form = submitted.unwrap_or(&blank);

    let mut body = String::from("<h1>Remove Conference Users</h1>\n<form method=\"post\" action=\"/remove\">\n");
    body.push_str(&text_input(
        "Conference Name",
        "conference_name",
        &value_attr(&form.conference_name),
        " required pattern=\"[a-zA-Z0-9_\\-]+\"",
    ));
    body.push_str(&text_input("Domain", "domain", &value_attr(&form.domain), " placeholder=\"company.com\""));
    body.push_str(&checkbox("Remove conference groups", "remove_groups", checked(&form.remove_groups)));
    body.push_str(&checkbox(
        "Remove resource groups",
        "remove_resource_groups",
        checked(&form.remove_resource_groups),
    ));
    body.push_str(&checkbox("Skip confirmation prompts (Force)", "force", checked(&form.force)));
    body.push_str(&checkbox("Dry Run", "dry_run", checked(&form.dry_run)));
    body.push_str("<p><button type=\"submit\">Generate Command</button></p>\n</form>");

    render("Remove Users", flashes, &body)
}

pub fn command_result(result: &CommandResult<'_>) -> String {
    let heading = match result.operation {
        Operation::Create => "Create Users Command",
        Operation::Remove => "Remove Users Command",
    };

    let mut body = format!(
        "<h1>{heading}</h1>\n<dl>\n<dt>Operation</dt><dd>{}</dd>\n<dt>Conference</dt><dd>{}</dd>\n",
        result.operation.as_str(),
        escape_html(result.conference_name),
    );
    if let Some(count) = result.user_count {
        body.push_str(&format!("<dt>Users</dt><dd>{count}</dd>\n"));
    }
    body.push_str(&format!(
        "</dl>\n<pre class=\"command\"><code>{}</code></pre>\n<p><a href=\"/{}\">Back to form</a></p>",
        escape_html(result.command),
        result.operation.as_str(),
    ));

    let notice = Flash {
        category: FlashCategory::Info,
        message: "Review the command, then run it from the scripts directory.".into(),
    };
    render(heading, &[notice], &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_form_lists_locations_and_defaults() {
        let locations = vec!["East US".to_string(), "West Europe".to_string()];
        let html = create_form(&locations, 10, None, &[]);
        assert!(html.contains("<option value=\"East US\">East US</option>"));
        assert!(html.contains("<option value=\"West Europe\">West Europe</option>"));
        assert!(html.contains("value=\"10\""));
        assert!(html.contains("name=\"force_password_change\" value=\"true\" checked"));
    }

    #[test]
    fn create_form_echoes_submission_without_password() {
        let submitted = CreateForm {
            conference_name: Some("<script>".into()),
            password: Some("hunter2".into()),
            location: Some("West Europe".into()),
            dry_run: Some("true".into()),
            ..Default::default()
        };
        let locations = vec!["West Europe".to_string()];
        let html = create_form(&locations, 10, Some(&submitted), &[Flash::error("bad")]);

        assert!(html.contains("value=\"&lt;script&gt;\""));
        assert!(!html.contains("hunter2"));
        assert!(html.contains("<option value=\"West Europe\" selected>"));
        assert!(html.contains("name=\"dry_run\" value=\"true\" checked"));
        assert!(!html.contains("name=\"force_password_change\" value=\"true\" checked"));
    }

    #[test]
    fn result_page_escapes_command() {
        let html = command_result(&CommandResult {
            operation: Operation::Create,
            command: ".\\New-ConferenceUsers.ps1 -Password '<x>'",
            conference_name: "Summit",
            user_count: Some(5),
        });
        assert!(html.contains("-Password &#x27;&lt;x&gt;&#x27;"));
        assert!(html.contains("<dt>Users</dt><dd>5</dd>"));
    }

    #[test]
    fn remove_result_omits_user_count() {
        let html = command_result(&CommandResult {
            operation: Operation::Remove,
            command: ".\\Remove-ConferenceUsers.ps1 -ConferenceName 'Summit'",
            conference_name: "Summit",
            user_count: None,
        });
        assert!(!html.contains("<dt>Users</dt>"));
        assert!(html.contains("href=\"/remove\""));
    }
}
