use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Duration, Utc};
use rusqlite::Connection;

use crate::app::{screen_for, Screen};
use crate::config::{AdminSeed, AppConfig};
use crate::domain::confirmation::{AdminAction, Confirmation};
use crate::domain::entities::account::{NewAccountRequest, NewUser, Role};
use crate::domain::entities::feedback::{NewFeedback, DEFAULT_FEEDBACK_TYPE};
use crate::domain::entities::incident::{IncidentField, IncidentReport, NewIncidentReport};
use crate::domain::entities::session::Session;
use crate::domain::routing::{RouteDecision, ADMIN_DASHBOARD_PATH, DASHBOARD_PATH, LOGIN_PATH};
use crate::domain::table::TableEngine;
use crate::infra::blob::FsBlobStore;
use crate::infra::export::csv::write_feedback_csv;
use crate::infra::sqlite::schema::init_db;
use crate::infra::sqlite::{SqliteIdentity, SqliteRepo};
use crate::ui::components::report_detail::report_detail_rows;
use crate::ui::components::RowEvent;
use crate::ui::pages::admin::{admin_action_for, perform_admin_action};
use crate::ui::state::AppServices;
use crate::ui::style::{
    root_container_style, tab_button_style, table_container_style, table_header_cell_style,
};
use crate::ui::tables::TableSet;
use crate::usecase::error::ServiceError;
use crate::usecase::ports::blob::{BlobError, BlobStore};
use crate::usecase::ports::identity::{AuthError, IdentityService};
use crate::usecase::ports::repo::{RecordStore, RepoError};
use crate::usecase::services::account_service::NewUserForm;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("rms-{prefix}-{nanos}"))
}

fn test_config(dir: &Path, seed: Option<AdminSeed>) -> AppConfig {
    AppConfig {
        data_dir: dir.to_path_buf(),
        db_path: dir.join("records.sqlite"),
        blob_dir: dir.join("buckets"),
        page_size: 5,
        session_ttl_minutes: 30,
        admin_seed: seed,
    }
}

fn admin_seed() -> AdminSeed {
    AdminSeed {
        email: "admin@subdivision.test".to_string(),
        password: "admin-pass".to_string(),
    }
}

fn sample_report(name: &str, kind: &str) -> NewIncidentReport {
    NewIncidentReport {
        full_name: name.to_string(),
        contact_number: "+63 912-345-6789".to_string(),
        datetime: "2024-05-01T14:30".to_string(),
        location: "Phase 2, Block 4".to_string(),
        incident_type: kind.to_string(),
        description: "Gate left open overnight".to_string(),
        ..NewIncidentReport::default()
    }
}

fn sample_request(email: &str) -> NewAccountRequest {
    NewAccountRequest {
        first_name: "Maria".to_string(),
        middle_initial: "L".to_string(),
        last_name: "Santos".to_string(),
        contact_number: "09171234567".to_string(),
        email: email.to_string(),
        address: "Lot 7".to_string(),
        password: "resident1".to_string(),
        confirm_password: "resident1".to_string(),
    }
}

fn resident_session(id: &str) -> Session {
    Session {
        principal_id: id.to_string(),
        email: format!("{id}@subdivision.test"),
        role: Role::Resident,
        expiry: Utc::now() + Duration::minutes(10),
    }
}

#[test]
fn init_db_creates_required_tables() {
    let temp_dir = unique_test_dir("init-db");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("app.sqlite");

    let result = init_db(&db_path);
    assert!(result.is_ok(), "init_db should succeed: {result:?}");
    init_db(&db_path).expect("init_db should be repeatable");

    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
             AND name IN ('incident_reports','feedback','account_requests','users')",
            [],
            |row| row.get(0),
        )
        .expect("table count query should succeed");
    assert_eq!(table_count, 4, "required tables should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn incident_reports_round_trip_newest_first() {
    let temp_dir = unique_test_dir("incidents");
    let repo = SqliteRepo::new(temp_dir.join("app.sqlite"));
    repo.init().expect("init should succeed");

    let mut first = sample_report("Ana Cruz", "Theft");
    first.has_witnesses = true;
    first.witness_info = "Neighbour at lot 9".to_string();
    let first = repo
        .insert_incident(Some("user-a"), &first)
        .expect("first insert should succeed");
    let second = repo
        .insert_incident(Some("user-b"), &sample_report("Ben Reyes", "Vandalism"))
        .expect("second insert should succeed");

    let all = repo.list_incidents().expect("list should succeed");
    let ids: Vec<&str> = all.iter().map(|report| report.id.as_str()).collect();
    assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);

    let mine = repo
        .list_incidents_by_user("user-a")
        .expect("filtered list should succeed");
    assert_eq!(mine.len(), 1);
    assert!(mine[0].has_witnesses);
    assert_eq!(mine[0].witness_info, "Neighbour at lot 9");

    let fetched = repo
        .get_incident(&second.id)
        .expect("get should succeed")
        .expect("report should exist");
    assert_eq!(fetched, second);

    repo.delete_incident(&first.id).expect("delete should succeed");
    assert!(matches!(
        repo.delete_incident(&first.id),
        Err(RepoError::NotFound(_))
    ));
    assert_eq!(repo.list_incidents().expect("list should succeed").len(), 1);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn blank_feedback_author_is_stored_as_missing() {
    let temp_dir = unique_test_dir("feedback");
    let repo = SqliteRepo::new(temp_dir.join("app.sqlite"));
    repo.init().expect("init should succeed");

    let stored = repo
        .insert_feedback(&NewFeedback {
            name: "  ".to_string(),
            email: String::new(),
            feedback_type: "Complaint".to_string(),
            message: "Streetlight out on Mango St".to_string(),
        })
        .expect("insert should succeed");

    let listed = repo.list_feedback().expect("list should succeed");
    assert_eq!(listed, vec![stored.clone()]);
    assert_eq!(stored.name, None);
    assert_eq!(stored.email, None);
    assert_eq!(stored.author_label(), "Anonymous");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn identity_signs_in_with_the_stored_role() {
    let temp_dir = unique_test_dir("identity");
    let config = test_config(&temp_dir, Some(admin_seed()));
    let services = AppServices::open(&config).expect("services should open");

    let session = services
        .auth
        .sign_in("admin@subdivision.test", "admin-pass")
        .expect("seeded admin should sign in");
    assert_eq!(session.role, Role::Admin);
    assert!(session.expiry > Utc::now());

    let wrong = services.auth.sign_in("admin@subdivision.test", "nope");
    assert!(matches!(wrong, Err(ServiceError::Unauthorized(_))));

    let refreshed = services
        .auth
        .refresh(&session)
        .expect("live session should refresh");
    assert_eq!(refreshed.principal_id, session.principal_id);

    let expired = Session {
        expiry: Utc::now() - Duration::seconds(1),
        ..session
    };
    assert!(matches!(
        services.auth.refresh(&expired),
        Err(ServiceError::Auth(AuthError::SessionExpired))
    ));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn admin_seed_runs_once() {
    let temp_dir = unique_test_dir("seed");
    let config = test_config(&temp_dir, Some(admin_seed()));
    let services = AppServices::open(&config).expect("services should open");

    let created_again = services
        .auth
        .ensure_admin_seed(&config)
        .expect("seed check should succeed");
    assert!(!created_again);

    let admins = services
        .accounts
        .list_users()
        .expect("list should succeed")
        .into_iter()
        .filter(|user| user.role == Role::Admin)
        .count();
    assert_eq!(admins, 1);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn approving_a_request_creates_a_resident_who_can_sign_in() {
    let temp_dir = unique_test_dir("approve");
    let services = AppServices::open(&test_config(&temp_dir, None)).expect("services should open");

    let request = services
        .accounts
        .request_account(&sample_request("maria@subdivision.test"))
        .expect("request should be accepted");

    let duplicate = services
        .accounts
        .request_account(&sample_request("MARIA@subdivision.test"));
    assert!(matches!(duplicate, Err(ServiceError::Conflict(_))));

    let user = services
        .accounts
        .approve(&request.id)
        .expect("approve should succeed");
    assert_eq!(user.role, Role::Resident);
    assert_eq!(user.full_name(), "Maria L. Santos");
    assert!(services
        .accounts
        .list_requests()
        .expect("list should succeed")
        .is_empty());

    let session = services
        .auth
        .sign_in("maria@subdivision.test", "resident1")
        .expect("approved resident should sign in with the requested password");
    assert_eq!(session.role, Role::Resident);
    assert_eq!(session.principal_id, user.id);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn approval_keeps_the_request_when_the_email_is_taken() {
    let temp_dir = unique_test_dir("approve-conflict");
    let config = test_config(&temp_dir, None);
    let repo: Arc<dyn RecordStore> = Arc::new(SqliteRepo::new(config.db_path.clone()));
    let identity: Arc<dyn IdentityService> = Arc::new(SqliteIdentity::new(
        config.db_path.clone(),
        config.session_ttl(),
    ));
    let blobs: Arc<dyn BlobStore> = Arc::new(FsBlobStore::new(config.blob_dir.clone()));
    repo.init().expect("init should succeed");
    let services = AppServices::from_parts(repo, identity, blobs);

    let request = services
        .accounts
        .request_account(&sample_request("taken@subdivision.test"))
        .expect("request should be accepted");
    services
        .accounts
        .create_user(&NewUserForm {
            email: "taken@subdivision.test".to_string(),
            password: "another1".to_string(),
            ..NewUserForm::default()
        })
        .expect("admin-created user should succeed");

    let result = services.accounts.approve(&request.id);
    assert!(matches!(result, Err(ServiceError::Conflict(_))));
    assert_eq!(
        services.accounts.list_requests().expect("list should succeed").len(),
        1,
        "request should stay pending"
    );

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn approving_an_already_approved_request_clears_it() {
    let temp_dir = unique_test_dir("approve-stale");
    let config = test_config(&temp_dir, None);
    let repo: Arc<dyn RecordStore> = Arc::new(SqliteRepo::new(config.db_path.clone()));
    let identity: Arc<dyn IdentityService> = Arc::new(SqliteIdentity::new(
        config.db_path.clone(),
        config.session_ttl(),
    ));
    let blobs: Arc<dyn BlobStore> = Arc::new(FsBlobStore::new(config.blob_dir.clone()));
    repo.init().expect("init should succeed");
    let services = AppServices::from_parts(repo, identity.clone(), blobs);

    let request = services
        .accounts
        .request_account(&sample_request("rosa@subdivision.test"))
        .expect("request should be accepted");
    // A previous approval created the account but never removed the request.
    let created = identity
        .create_user(NewUser::from_request(&request))
        .expect("user should be created");

    let user = services
        .accounts
        .approve(&request.id)
        .expect("approve should clear the leftover request");
    assert_eq!(user.id, created.id);
    assert!(services
        .accounts
        .list_requests()
        .expect("list should succeed")
        .is_empty());
    services
        .auth
        .sign_in("rosa@subdivision.test", "resident1")
        .expect("resident should sign in");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn account_request_validation_messages() {
    let temp_dir = unique_test_dir("request-validation");
    let services = AppServices::open(&test_config(&temp_dir, None)).expect("services should open");

    let mut mismatch = sample_request("a@subdivision.test");
    mismatch.confirm_password = "different".to_string();
    match services.accounts.request_account(&mismatch) {
        Err(ServiceError::Validation(message)) => assert_eq!(message, "Passwords do not match."),
        other => panic!("expected validation error, got {other:?}"),
    }

    let mut short = sample_request("b@subdivision.test");
    short.password = "abc".to_string();
    short.confirm_password = "abc".to_string();
    assert!(matches!(
        services.accounts.request_account(&short),
        Err(ServiceError::Validation(_))
    ));

    assert!(matches!(
        services.accounts.request_account(&sample_request("not-an-email")),
        Err(ServiceError::Validation(_))
    ));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn residents_only_open_their_own_reports() {
    let temp_dir = unique_test_dir("report-access");
    let services = AppServices::open(&test_config(&temp_dir, None)).expect("services should open");
    let owner = resident_session("owner");
    let other = resident_session("other");

    let report = services
        .reports
        .submit(&owner, &sample_report("Owner Name", "Noise Disturbance"))
        .expect("submit should succeed");
    assert_eq!(report.user_id.as_deref(), Some("owner"));

    assert!(services.reports.get(&owner, &report.id).is_ok());
    assert!(matches!(
        services.reports.get(&other, &report.id),
        Err(ServiceError::Unauthorized(_))
    ));
    assert!(services
        .reports
        .list_for(&other)
        .expect("list should succeed")
        .is_empty());

    let mut missing_type = sample_report("Owner Name", "");
    missing_type.incident_type = " ".to_string();
    assert!(matches!(
        services.reports.submit(&owner, &missing_type),
        Err(ServiceError::Validation(_))
    ));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn opened_report_shows_every_stored_detail() {
    let temp_dir = unique_test_dir("report-detail");
    let services = AppServices::open(&test_config(&temp_dir, None)).expect("services should open");
    let owner = resident_session("owner");

    let mut report = sample_report("Owner Name", "Vandalism");
    report.address = "Lot 12, Phase 1".to_string();
    report.suspects = "Two teenagers".to_string();
    report.has_witnesses = true;
    report.witness_info = "Guard on duty".to_string();
    report.reported_to_authorities = true;
    report.authorities_info = "Barangay hall".to_string();
    report.damages_or_injuries = true;
    report.damages_description = "Broken gate lamp".to_string();
    report.has_evidence = true;
    report.evidence_description = "CCTV clip".to_string();
    let stored = services
        .reports
        .submit(&owner, &report)
        .expect("submit should succeed");

    let opened = services
        .reports
        .get(&owner, &stored.id)
        .expect("owner should open the report");
    let rows = report_detail_rows(&opened);
    let value_of = |label: &str| {
        rows.iter()
            .find(|(row_label, _)| *row_label == label)
            .map(|(_, value)| value.as_str())
    };

    assert_eq!(value_of("Address"), Some("Lot 12, Phase 1"));
    assert_eq!(value_of("Suspects"), Some("Two teenagers"));
    assert_eq!(value_of("Witnesses"), Some("Yes"));
    assert_eq!(value_of("Witness details"), Some("Guard on duty"));
    assert_eq!(value_of("Authority details"), Some("Barangay hall"));
    assert_eq!(value_of("Damage details"), Some("Broken gate lamp"));
    assert_eq!(value_of("Evidence details"), Some("CCTV clip"));
    assert_eq!(value_of("Submitted"), Some(stored.created_at.as_str()));
    assert_eq!(rows.len(), 18);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn other_incident_type_is_stored_as_typed() {
    let temp_dir = unique_test_dir("report-other");
    let services = AppServices::open(&test_config(&temp_dir, None)).expect("services should open");
    let session = resident_session("resident");

    let mut report = sample_report("Resident", "Other");
    report.other_type = "Stray dogs".to_string();
    report.preferred_action = "Other".to_string();
    report.preferred_action_detail = "Call the city pound".to_string();
    let stored = services
        .reports
        .submit(&session, &report)
        .expect("submit should succeed");
    assert_eq!(stored.incident_type, "Stray dogs");
    assert_eq!(stored.preferred_action, "Call the city pound");

    let blank_other = sample_report("Resident", "Other");
    assert!(matches!(
        services.reports.submit(&session, &blank_other),
        Err(ServiceError::Validation(_))
    ));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn feedback_service_defaults_type_and_exports_csv() {
    let temp_dir = unique_test_dir("feedback-export");
    let services = AppServices::open(&test_config(&temp_dir, None)).expect("services should open");

    services
        .feedback
        .submit(&NewFeedback {
            name: "Lito".to_string(),
            email: "lito@subdivision.test".to_string(),
            feedback_type: String::new(),
            message: "Thanks, \"guards\" were quick".to_string(),
        })
        .expect("submit should succeed");
    let bad_email = services.feedback.submit(&NewFeedback {
        email: "no-at-sign".to_string(),
        message: "hello".to_string(),
        ..NewFeedback::default()
    });
    assert!(matches!(bad_email, Err(ServiceError::Validation(_))));

    let listed = services.feedback.list().expect("list should succeed");
    assert_eq!(listed[0].feedback_type, DEFAULT_FEEDBACK_TYPE);

    let mut buffer = Vec::new();
    let rows = services
        .feedback
        .export_csv(&mut buffer)
        .expect("export should succeed");
    assert_eq!(rows, 1);
    let text = String::from_utf8(buffer).expect("csv should be utf-8");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("ID,Message,Email,Created At"));
    let row = lines.next().expect("one data row");
    assert!(row.contains("\"Thanks, \"\"guards\"\" were quick\""));
    assert!(row.contains("lito@subdivision.test"));

    let csv_path = temp_dir.join("feedback.csv");
    let written = services
        .feedback
        .export_csv_file(&csv_path)
        .expect("file export should succeed");
    assert_eq!(written, 1);
    assert!(fs::read_to_string(&csv_path)
        .expect("csv file should exist")
        .starts_with("ID,Message,Email,Created At"));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn csv_export_of_nothing_is_header_only() {
    let mut buffer = Vec::new();
    let rows = write_feedback_csv(&mut buffer, &[]).expect("export should succeed");
    assert_eq!(rows, 0);
    assert_eq!(
        String::from_utf8(buffer).expect("csv should be utf-8"),
        "ID,Message,Email,Created At\n"
    );
}

#[test]
fn blob_store_upload_list_download_remove() {
    let temp_dir = unique_test_dir("blobs");
    let store = FsBlobStore::new(&temp_dir);

    let url = store
        .upload("forms", "uploads/clearance.pdf", b"%PDF-1.4", false)
        .expect("upload should succeed");
    assert!(url.starts_with("file://"));
    assert!(url.ends_with("forms/uploads/clearance.pdf"));

    store
        .upload("forms", "uploads/a-permit.pdf", b"permit", false)
        .expect("second upload should succeed");
    assert_eq!(
        store.upload("forms", "uploads/clearance.pdf", b"again", false),
        Err(BlobError::AlreadyExists("uploads/clearance.pdf".to_string()))
    );
    store
        .upload("forms", "uploads/clearance.pdf", b"v2", true)
        .expect("upsert should overwrite");

    let names: Vec<String> = store
        .list("forms", "uploads")
        .expect("list should succeed")
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(names, vec!["a-permit.pdf", "clearance.pdf"]);

    assert_eq!(
        store
            .download("forms", "uploads/clearance.pdf")
            .expect("download should succeed"),
        b"v2".to_vec()
    );

    store
        .remove("forms", &["uploads/clearance.pdf".to_string()])
        .expect("remove should succeed");
    assert!(matches!(
        store.download("forms", "uploads/clearance.pdf"),
        Err(BlobError::NotFound(_))
    ));
    assert!(store
        .list("forms", "missing-folder")
        .expect("missing folder lists empty")
        .is_empty());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn blob_store_rejects_path_traversal() {
    let temp_dir = unique_test_dir("blob-traversal");
    let store = FsBlobStore::new(&temp_dir);

    for path in ["../escape.txt", "uploads/../../escape.txt", "", "uploads/./x"] {
        assert!(
            matches!(
                store.upload("forms", path, b"x", true),
                Err(BlobError::InvalidPath(_))
            ),
            "{path:?} should be rejected"
        );
    }
    assert!(matches!(
        store.upload("..", "x.txt", b"x", true),
        Err(BlobError::InvalidPath(_))
    ));

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn form_service_lists_uploads_by_name_with_urls() {
    let temp_dir = unique_test_dir("forms");
    let services = AppServices::open(&test_config(&temp_dir, None)).expect("services should open");

    services
        .forms
        .upload("zoning.pdf", b"z")
        .expect("upload should succeed");
    services
        .forms
        .upload("barangay-clearance.pdf", b"b")
        .expect("upload should succeed");
    assert!(matches!(
        services.forms.upload("zoning.pdf", b"again"),
        Err(ServiceError::Conflict(_))
    ));

    let forms = services.forms.list().expect("list should succeed");
    let names: Vec<&str> = forms.iter().map(|form| form.name.as_str()).collect();
    assert_eq!(names, vec!["barangay-clearance.pdf", "zoning.pdf"]);
    assert!(forms[1].public_url.ends_with("uploads/zoning.pdf"));
    assert_eq!(forms[1].size, 1);

    services.forms.delete("zoning.pdf").expect("delete should succeed");
    assert!(matches!(
        services.forms.download("zoning.pdf"),
        Err(ServiceError::NotFound(_))
    ));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn dashboard_stats_count_types_and_latest_feedback() {
    let temp_dir = unique_test_dir("dashboard");
    let services = AppServices::open(&test_config(&temp_dir, None)).expect("services should open");
    let session = resident_session("resident");

    for kind in ["Theft", "Theft", "Vandalism"] {
        services
            .reports
            .submit(&session, &sample_report("Resident", kind))
            .expect("submit should succeed");
    }
    for idx in 0..7 {
        services
            .feedback
            .submit(&NewFeedback {
                message: format!("note {idx}"),
                ..NewFeedback::default()
            })
            .expect("submit should succeed");
    }

    let stats = services.dashboard.stats().expect("stats should load");
    assert_eq!(stats.report_count, 3);
    assert_eq!(stats.type_breakdown.get("Theft"), Some(&2));
    assert_eq!(stats.type_breakdown.get("Vandalism"), Some(&1));
    assert_eq!(stats.latest_feedback.len(), 5);
    assert_eq!(stats.latest_feedback[0].message, "note 6");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn confirmed_admin_actions_run_through_the_services() {
    let temp_dir = unique_test_dir("admin-actions");
    let services = AppServices::open(&test_config(&temp_dir, None)).expect("services should open");

    let request = services
        .accounts
        .request_account(&sample_request("juan@subdivision.test"))
        .expect("request should be accepted");

    let event = RowEvent {
        action: "approve",
        id: request.id.clone(),
    };
    let (prompt, action) = admin_action_for("requests", &event).expect("approve maps to an action");

    let mut confirmation = Confirmation::default();
    confirmation.request(prompt, action);
    assert!(confirmation.resolve(false).is_none(), "cancel drops the action");
    assert_eq!(services.accounts.list_requests().expect("list").len(), 1);

    let (prompt, action) = admin_action_for("requests", &event).expect("approve maps to an action");
    confirmation.request(prompt, action);
    let accepted = confirmation.resolve(true).expect("confirm yields the action");
    assert_eq!(accepted, AdminAction::ApproveRequest(request.id.clone()));

    let message = perform_admin_action(&services, &accepted).expect("approve should succeed");
    assert_eq!(message, "Approved juan@subdivision.test");
    assert!(services.accounts.list_requests().expect("list").is_empty());

    let download = RowEvent {
        action: "download",
        id: "x.pdf".to_string(),
    };
    assert!(admin_action_for("forms", &download).is_none());
    let view = RowEvent {
        action: "view",
        id: "r-1".to_string(),
    };
    assert!(admin_action_for("reports", &view).is_none());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn route_checks_follow_the_session_role() {
    let temp_dir = unique_test_dir("routes");
    let services = AppServices::open(&test_config(&temp_dir, None)).expect("services should open");
    let resident = resident_session("r-1");
    let admin = Session {
        role: Role::Admin,
        ..resident_session("a-1")
    };

    assert_eq!(
        services.auth.check_route(DASHBOARD_PATH, None),
        RouteDecision::Redirect(LOGIN_PATH.to_string())
    );
    assert_eq!(
        services.auth.check_route(ADMIN_DASHBOARD_PATH, Some(&resident)),
        RouteDecision::Redirect(DASHBOARD_PATH.to_string())
    );
    assert_eq!(
        services.auth.check_route(DASHBOARD_PATH, Some(&admin)),
        RouteDecision::Redirect(ADMIN_DASHBOARD_PATH.to_string())
    );

    assert_eq!(screen_for(DASHBOARD_PATH, None), Screen::Login);
    assert_eq!(
        screen_for(DASHBOARD_PATH, Some(resident.clone())),
        Screen::Resident(resident)
    );
    assert_eq!(
        screen_for(ADMIN_DASHBOARD_PATH, Some(admin.clone())),
        Screen::Admin(admin)
    );

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn report_table_filters_stored_reports_by_created_date() {
    let tables = TableSet::new(2).expect("page size is valid");
    let reports: Vec<IncidentReport> = ["2024-03-01 08:00:00.000", "2024-03-05 09:30:00.000", "2024-04-02 10:00:00.000"]
        .iter()
        .enumerate()
        .map(|(idx, created_at)| IncidentReport {
            id: format!("r-{idx}"),
            user_id: None,
            full_name: format!("Resident {idx}"),
            address: String::new(),
            contact_number: String::new(),
            datetime: "2024-03-01T08:00".to_string(),
            location: String::new(),
            incident_type: "Theft".to_string(),
            description: String::new(),
            suspects: String::new(),
            has_witnesses: false,
            witness_info: String::new(),
            reported_to_authorities: false,
            authorities_info: String::new(),
            damages_or_injuries: false,
            damages_description: String::new(),
            has_evidence: false,
            evidence_description: String::new(),
            preferred_action: String::new(),
            created_at: created_at.to_string(),
        })
        .collect();

    let mut engine = TableEngine::<IncidentReport>::new(tables.all_reports.clone());
    assert_eq!(tables.all_reports.date_field(), Some(IncidentField::CreatedAt));

    engine.set_date_range(
        chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
        chrono::NaiveDate::from_ymd_opt(2024, 3, 31),
    );
    let view = engine.view(&reports);
    assert_eq!(view.total_items, 2);
    assert_eq!(view.total_pages, 1);

    engine.clear_filters();
    assert_eq!(engine.view(&reports).total_pages, 2);
}

#[test]
fn table_set_rejects_zero_page_size() {
    assert!(TableSet::new(0).is_err());
}

#[test]
fn table_and_page_containers_scroll_inside_the_window() {
    let style = table_container_style();
    assert!(style.contains("overflow: auto"));
    assert!(style.contains("min-height: 0"));

    let root = root_container_style();
    assert!(root.contains("height: 100vh"));
    assert!(root.contains("flex-direction: column"));
}

#[test]
fn table_headers_stay_pinned_while_scrolling() {
    let style = table_header_cell_style();
    assert!(style.contains("position: sticky"));
    assert!(style.contains("top: 0"));
}

#[test]
fn active_tab_is_highlighted() {
    assert_ne!(tab_button_style(true), tab_button_style(false));
    assert!(tab_button_style(true).contains("#eef4ff"));
}
