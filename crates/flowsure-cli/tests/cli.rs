use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

const TODAY: &str = "2025-09-15";

struct Workspace {
    temp: TempDir,
    data_path: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let temp = TempDir::new().expect("temp dir");
        let data_path = temp.path().join("leads.json");
        let leads = json!([
            lead(1, "Technology", "New", "Website", Some("2025-09-10")),
            lead(2, "Retail", "Contacted", "Facebook", None),
            lead(3, "Services", "Qualified", "Referral", None),
            lead(4, "Manufacturing", "Won", "Cold Call", None),
            lead(5, "Finance", "New", "Google", None),
            lead(6, "Legal", "New", "Website", None),
        ]);
        fs::write(
            &data_path,
            serde_json::to_string_pretty(&leads).expect("encode"),
        )
        .expect("write leads");
        Self { temp, data_path }
    }

    fn path(&self) -> &Path {
        self.temp.path()
    }

    fn output(&self, args: &[&str]) -> Output {
        cargo_bin_cmd!("flowsure")
            .env("XDG_CONFIG_HOME", self.temp.path())
            .env_remove("RUST_LOG")
            .args(["--data-path", self.data_path.to_str().expect("data path")])
            .args(args)
            .output()
            .expect("run command")
    }

    fn run(&self, args: &[&str]) -> String {
        let output = self.output(args);
        assert!(output.status.success(), "command failed: {:?}", output);
        String::from_utf8(output.stdout).expect("utf8")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let output = self.output(&full);
        assert!(output.status.success(), "command failed: {:?}", output);
        serde_json::from_slice(&output.stdout).expect("parse json")
    }

    fn fail_json(&self, args: &[&str], code: i32) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let output = self.output(&full);
        assert_eq!(output.status.code(), Some(code), "output: {:?}", output);
        serde_json::from_slice(&output.stdout).unwrap_or(Value::Null)
    }

    fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.temp.path().join("flowsure.toml");
        fs::write(&path, contents).expect("write config");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms).expect("chmod");
        }
        path
    }
}

fn lead(id: u32, department: &str, status: &str, source: &str, next: Option<&str>) -> Value {
    json!({
        "id": id,
        "company": format!("Company {id}"),
        "contact_person": format!("Person {id}"),
        "status": status,
        "source": source,
        "department": department,
        "created_at": "2025-09-01",
        "next_contact_date": next,
        "history": [],
        "documents": []
    })
}

fn row_ids(view: &Value) -> Vec<u64> {
    view["rows"]
        .as_array()
        .expect("rows")
        .iter()
        .map(|row| row["id"].as_u64().expect("id"))
        .collect()
}

#[test]
fn default_list_shows_every_lead() {
    let ws = Workspace::new();
    let view = ws.run_json(&["list"]);
    assert_eq!(view["label"], "All departments");
    assert_eq!(row_ids(&view), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(view["summary"]["total"], 6);
    assert_eq!(view["summary"]["new_count"], 3);
}

#[test]
fn department_filter_narrows_rows_and_summary() {
    let ws = Workspace::new();
    let view = ws.run_json(&["list", "--dept", "bd"]);
    assert_eq!(view["label"], "bd");
    assert_eq!(row_ids(&view), vec![2, 4]);

    let summary = ws.run_json(&["summary", "--dept", "bd"]);
    assert_eq!(summary["total"], 2);
    assert_eq!(summary["contacted_count"], 1);
    assert_eq!(summary["won_count"], 1);

    let finance = ws.run_json(&["list", "--dept", "Finance"]);
    assert_eq!(row_ids(&finance), vec![5]);

    let none = ws.run_json(&["list", "--no-dept"]);
    assert_eq!(none["label"], "");
    assert!(row_ids(&none).is_empty());
    assert_eq!(none["summary"]["total"], 0);
}

#[test]
fn status_and_source_filters_combine() {
    let ws = Workspace::new();
    let view = ws.run_json(&["list", "--status", "new", "--source", "website"]);
    assert_eq!(row_ids(&view), vec![1, 6]);
}

#[test]
fn handover_save_commits_action_and_records_history() {
    let ws = Workspace::new();
    let saved = ws.run_json(&[
        "save",
        "2",
        "--handover",
        "Signed contract",
        "--action",
        "Won",
        "--actor",
        "user001",
        "--today",
        TODAY,
    ]);
    assert_eq!(saved["previous_status"], "Contacted");
    assert_eq!(saved["status"], "Won");
    assert_eq!(saved["status_changed"], true);
    assert_eq!(saved["path"], "handover");
    assert_eq!(saved["history_added"], 1);

    let detail = ws.run_json(&["show", "2"]);
    assert_eq!(detail["status"], "Won");
    let history = detail["history"].as_array().expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["kind"], "Handover");
    assert_eq!(history[0]["actor_id"], "user001");

    let summary = ws.run_json(&["summary", "--dept", "bd"]);
    assert_eq!(summary["won_count"], 2);
    assert_eq!(summary["contacted_count"], 0);
}

#[test]
fn follow_up_save_keeps_status_and_schedules_date() {
    let ws = Workspace::new();
    let saved = ws.run_json(&[
        "save",
        "3",
        "--next-contact-date",
        "2025-10-01",
        "--summary",
        "Call back about fleet size",
        "--today",
        TODAY,
    ]);
    assert_eq!(saved["path"], "follow_up");
    assert_eq!(saved["status"], "Qualified");
    assert_eq!(saved["status_changed"], false);

    let detail = ws.run_json(&["show", "3"]);
    assert_eq!(detail["next_contact_date"], "2025-10-01");
    assert_eq!(detail["history"][0]["actor_id"], "unknown");
}

#[test]
fn rejected_save_reports_field_errors_and_leaves_data_untouched() {
    let ws = Workspace::new();
    let before = fs::read_to_string(&ws.data_path).expect("read");
    let rejected = ws.fail_json(
        &[
            "save",
            "2",
            "--next-contact-date",
            "2025-10-25",
            "--summary",
            "Too far out",
            "--today",
            TODAY,
        ],
        3,
    );
    assert_eq!(rejected["id"], 2);
    assert_eq!(rejected["errors"][0]["code"], "next_contact_date_too_far");
    assert_eq!(fs::read_to_string(&ws.data_path).expect("read"), before);
}

#[test]
fn configured_window_extends_the_follow_up_range() {
    let ws = Workspace::new();
    let config = ws.write_config("follow_up_window_months = 2\n");
    let saved = ws.run_json(&[
        "--config",
        config.to_str().expect("config"),
        "save",
        "2",
        "--next-contact-date",
        "2025-10-25",
        "--summary",
        "Later",
        "--today",
        TODAY,
    ]);
    assert_eq!(saved["path"], "follow_up");
}

#[test]
fn action_outside_department_policy_is_invalid_input() {
    let ws = Workspace::new();
    ws.fail_json(
        &["save", "3", "--handover", "note", "--action", "Won", "--today", TODAY],
        3,
    );
}

#[test]
fn unknown_lead_is_not_found() {
    let ws = Workspace::new();
    ws.fail_json(&["show", "99"], 2);
    ws.fail_json(&["save", "99", "--today", TODAY], 2);
}

#[test]
fn cancel_requires_a_valid_draft() {
    let ws = Workspace::new();
    let untouched = ws.fail_json(&["cancel", "2", "--today", TODAY], 3);
    let errors = untouched["errors"].as_array().expect("errors");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["code"], "incomplete_draft");

    let seeded = ws.fail_json(&["cancel", "1", "--today", TODAY], 3);
    assert_eq!(seeded["errors"][0]["code"], "next_contact_date_in_past");

    let closed = ws.run_json(&[
        "cancel",
        "2",
        "--handover",
        "Passing to delivery",
        "--action",
        "Lost",
        "--today",
        TODAY,
    ]);
    assert_eq!(closed["closed"], true);
    let detail = ws.run_json(&["show", "2"]);
    assert_eq!(detail["status"], "Contacted");
}

#[test]
fn note_appends_history_with_actor() {
    let ws = Workspace::new();
    let added = ws.run_json(&[
        "note",
        "4",
        "--kind",
        "Call",
        "--note",
        "Left voicemail",
        "--actor",
        "user003",
        "--date",
        TODAY,
    ]);
    assert_eq!(added["history_len"], 1);
    assert_eq!(added["entry"]["kind"], "Call");
    assert_eq!(added["entry"]["date"], TODAY);

    ws.fail_json(&["note", "4", "--note", "no actor"], 3);
}

#[test]
fn note_uses_configured_user() {
    let ws = Workspace::new();
    let config = ws.write_config("[user]\nid = \"user002\"\nroles = [\"bd manager\"]\n");
    let added = ws.run_json(&[
        "--config",
        config.to_str().expect("config"),
        "note",
        "4",
        "--note",
        "Sent invoice",
    ]);
    assert_eq!(added["entry"]["actor_id"], "user002");
}

#[test]
fn actions_follow_department_policy() {
    let ws = Workspace::new();
    let services = ws.run_json(&["actions", "Services"]);
    assert_eq!(services["actions"], json!(["Delivered", "Cancelled"]));
    let retail = ws.run_json(&["actions", "Retail"]);
    assert_eq!(retail["actions"], json!(["Won", "Lost"]));
    let other = ws.run_json(&["actions", "Legal"]);
    assert_eq!(other["actions"], json!(["Qualified", "Unqualified"]));
}

#[test]
fn roles_lists_every_filter_role() {
    let ws = Workspace::new();
    let roles = ws.run_json(&["roles"]);
    let roles = roles.as_array().expect("roles");
    assert_eq!(roles.len(), 9);
    let bd = roles
        .iter()
        .find(|entry| entry["role"] == "bd")
        .expect("bd role");
    assert_eq!(bd["departments"], json!(["Retail", "Manufacturing"]));
    assert_eq!(bd["selected_by_default"], true);
}

#[test]
fn roles_marks_the_configured_users_roles() {
    let ws = Workspace::new();
    let config = ws.write_config("[user]\nid = \"user002\"\nroles = [\"bd manager\"]\n");
    let roles = ws.run_json(&["--config", config.to_str().expect("config"), "roles"]);
    let roles = roles.as_array().expect("roles");
    let held = roles
        .iter()
        .filter(|entry| entry["held_by_user"] == true)
        .map(|entry| entry["role"].clone())
        .collect::<Vec<_>>();
    assert_eq!(held, vec![json!("bd manager")]);

    let roles = ws.run_json(&["roles"]);
    assert!(roles
        .as_array()
        .expect("roles")
        .iter()
        .all(|entry| entry["held_by_user"] == false));
}

#[test]
fn feedback_is_delivered_to_the_log_sink_by_default() {
    let ws = Workspace::new();
    let outcome = ws.run_json(&[
        "feedback",
        "--kind",
        "problem",
        "--text",
        "Save button greyed out",
        "--context",
        "Closing a lead",
    ]);
    assert_eq!(outcome["outcome"], "delivered");
    assert_eq!(outcome["sink"], "log");
}

#[test]
fn feedback_file_backend_appends_a_line() {
    let ws = Workspace::new();
    let sink_path = ws.path().join("feedback.jsonl");
    let config = ws.write_config(&format!(
        "[feedback]\nbackend = \"file\"\npath = \"{}\"\n",
        sink_path.display()
    ));
    ws.run(&[
        "--config",
        config.to_str().expect("config"),
        "feedback",
        "--text",
        "Export to CSV",
        "--context",
        "Monthly reporting",
    ]);
    let contents = fs::read_to_string(&sink_path).expect("feedback file");
    assert_eq!(contents.lines().count(), 1);
    let entry: Value = serde_json::from_str(contents.trim()).expect("json line");
    assert_eq!(entry["kind"], "feature");
    assert_eq!(entry["text"], "Export to CSV");
}

#[test]
fn feedback_requires_context() {
    let ws = Workspace::new();
    ws.fail_json(&["feedback", "--text", "hi", "--context", "  "], 3);
}

#[test]
fn missing_data_file_lists_nothing() {
    let ws = Workspace::new();
    fs::remove_file(&ws.data_path).expect("remove");
    let view = ws.run_json(&["list"]);
    assert!(row_ids(&view).is_empty());
}

#[test]
fn completions_are_generated() {
    let ws = Workspace::new();
    let script = ws.run(&["completions", "bash"]);
    assert!(script.contains("flowsure"));
}

#[test]
fn follow_up_save_with_action_records_the_transition() {
    let ws = Workspace::new();
    let saved = ws.run_json(&[
        "save",
        "2",
        "--next-contact-date",
        "2025-09-30",
        "--summary",
        "Agreed terms",
        "--action",
        "Won",
        "--today",
        TODAY,
    ]);
    assert_eq!(saved["path"], "follow_up");
    assert_eq!(saved["status"], "Won");
    assert_eq!(saved["history_added"], 1);

    let detail = ws.run_json(&["show", "2"]);
    let history = detail["history"].as_array().expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["kind"], "Follow-up");
    let notes = history[0]["notes"].as_str().expect("notes");
    assert!(notes.contains("Contacted -> Won"), "notes: {notes}");
}
