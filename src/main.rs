use anyhow::Context;
use std::path::Path;
use std::process;
use uuid::Uuid;

use grc_console::adapters::outbound::console::renderer;
use grc_console::adapters::outbound::filesystem::FileSessionStore;
use grc_console::adapters::outbound::network::RestClient;
use grc_console::application::dto::{
    FindingPatch, NewFinding, NewIncident, NewPolicy, PolicyPatch,
};
use grc_console::application::store::AppStore;
use grc_console::application::use_cases::browse::{refresh_detail, refresh_list};
use grc_console::application::use_cases::mutate::{create_entity, delete_entity, update_entity};
use grc_console::application::use_cases::{dashboard, frameworks, session};
use grc_console::cli::{
    Cli, Command, FindingCommand, FrameworkCommand, IncidentCommand, ListArgs, PolicyCommand,
    TrainingCommand,
};
use grc_console::compliance::domain::PolicyStatus;
use grc_console::config;
use grc_console::ports::outbound::{
    AuthApi, FindingApi, FrameworkApi, IncidentApi, PolicyApi, TrainingApi,
};
use grc_console::shared::{ApiError, ExitCode, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError as i32);
    }
}

#[tokio::main]
async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let settings = config::load_settings(Path::new("."), cli.api_url.clone())?;
    let client = RestClient::new(&settings.base_url)?;
    let sessions = FileSessionStore::new(settings.session_file.clone());
    let mut store = AppStore::new();

    // Prime the client from a persisted session, if any. An expired
    // token is handled lazily by the 401 refresh path.
    if let Some(session) = session::restore(&sessions, &mut store)? {
        client.set_session(session.tokens());
    }

    let result = dispatch(cli.command, &client, &sessions, &mut store).await;

    // The 401 refresh path may have rotated the token pair mid-command;
    // write it through so the next invocation starts from the live pair.
    if let Err(error) = session::persist_rotation(&sessions, &mut store, client.session()) {
        store
            .notifications
            .warning(format!("Could not update the saved session: {}", error));
    }

    renderer::render_notifications(&mut store.notifications);
    result
}

async fn dispatch(
    command: Command,
    client: &RestClient,
    sessions: &FileSessionStore,
    store: &mut AppStore,
) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            renderer::with_spinner(
                "Signing in",
                session::login(client, sessions, store, &email, &password),
            )
            .await?;
            Ok(())
        }
        Command::Logout => {
            if !client.has_session() {
                store.notifications.info("No active session");
                return Ok(());
            }
            session::logout(client, sessions, store).await?;
            client.clear_session();
            Ok(())
        }
        Command::Whoami => {
            ensure_session(client)?;
            let user = renderer::with_spinner("Fetching profile", client.current_user()).await?;
            renderer::render_user(&user);
            Ok(())
        }
        Command::Dashboard => {
            ensure_session(client)?;
            renderer::with_spinner("Fetching overview", dashboard::load_overview(client, store))
                .await?;
            println!("FRAMEWORKS");
            renderer::render_framework_list(&store.frameworks);
            println!("\nPOLICIES");
            renderer::render_policy_list(&store.policies);
            println!("\nFINDINGS");
            renderer::render_finding_list(&store.findings);
            println!("\nINCIDENTS");
            renderer::render_incident_list(&store.incidents);
            println!("\nTRAINING");
            renderer::render_course_list(&store.training);
            Ok(())
        }
        Command::Frameworks { command } => run_frameworks(command, client, store).await,
        Command::Policies { command } => run_policies(command, client, store).await,
        Command::Findings { command } => run_findings(command, client, store).await,
        Command::Incidents { command } => run_incidents(command, client, store).await,
        Command::Training { command } => run_training(command, client, store).await,
    }
}

async fn run_frameworks(
    command: FrameworkCommand,
    client: &RestClient,
    store: &mut AppStore,
) -> Result<()> {
    ensure_session(client)?;
    match command {
        FrameworkCommand::List(args) => {
            apply_list_args(&mut store.frameworks, &args);
            renderer::with_spinner(
                "Fetching frameworks",
                refresh_list(&mut store.frameworks, |query| async move {
                    client.list_frameworks(&query).await
                }),
            )
            .await?;
            renderer::render_framework_list(&store.frameworks);
        }
        FrameworkCommand::Show { id } => {
            renderer::with_spinner(
                "Fetching framework",
                refresh_detail(&mut store.frameworks, id, |id| async move {
                    client.fetch_framework(id).await
                }),
            )
            .await?;
            if let Some(framework) = store.frameworks.detail().loaded() {
                renderer::render_framework_detail(framework);
            }
        }
        FrameworkCommand::SetControl {
            framework,
            control,
            status,
        } => {
            // Load the detail first so the confirmed control can be
            // projected into a fresh score locally.
            renderer::with_spinner(
                "Fetching framework",
                refresh_detail(&mut store.frameworks, framework, |id| async move {
                    client.fetch_framework(id).await
                }),
            )
            .await?;
            renderer::with_spinner(
                "Updating control",
                frameworks::set_control_status(client, store, framework, control, status),
            )
            .await?;
            if let Some(framework) = store.frameworks.detail().loaded() {
                renderer::render_framework_detail(framework);
            }
        }
    }
    Ok(())
}

async fn run_policies(
    command: PolicyCommand,
    client: &RestClient,
    store: &mut AppStore,
) -> Result<()> {
    ensure_session(client)?;
    match command {
        PolicyCommand::List(args) => {
            apply_list_args(&mut store.policies, &args);
            renderer::with_spinner(
                "Fetching policies",
                refresh_list(&mut store.policies, |query| async move {
                    client.list_policies(&query).await
                }),
            )
            .await?;
            renderer::render_policy_list(&store.policies);
        }
        PolicyCommand::Show { id } => {
            show_policy(client, store, id).await?;
        }
        PolicyCommand::Create {
            title,
            category,
            version,
            summary,
        } => {
            let draft = NewPolicy {
                title,
                category,
                version,
                summary,
            };
            let created = renderer::with_spinner(
                "Creating policy",
                create_entity(
                    &mut store.policies,
                    &mut store.notifications,
                    "Policy",
                    client.create_policy(&draft),
                ),
            )
            .await?;
            renderer::render_policy_detail(&created);
        }
        PolicyCommand::Update {
            id,
            title,
            category,
            version,
            summary,
        } => {
            let patch = PolicyPatch {
                title,
                category,
                version,
                summary,
            };
            renderer::with_spinner(
                "Updating policy",
                update_entity(
                    &mut store.policies,
                    &mut store.notifications,
                    "Policy updated",
                    client.update_policy(id, &patch),
                ),
            )
            .await?;
        }
        PolicyCommand::Delete { id } => {
            renderer::with_spinner(
                "Deleting policy",
                delete_entity(
                    &mut store.policies,
                    &mut store.notifications,
                    "Policy",
                    id,
                    client.delete_policy(id),
                ),
            )
            .await?;
        }
        PolicyCommand::SubmitReview { id } => {
            transition_policy(client, store, id, PolicyStatus::InReview).await?;
        }
        PolicyCommand::Approve { id } => {
            transition_policy(client, store, id, PolicyStatus::Approved).await?;
        }
        PolicyCommand::Reject { id } => {
            transition_policy(client, store, id, PolicyStatus::Draft).await?;
        }
        PolicyCommand::Publish { id } => {
            transition_policy(client, store, id, PolicyStatus::Published).await?;
        }
        PolicyCommand::Deprecate { id } => {
            transition_policy(client, store, id, PolicyStatus::Deprecated).await?;
        }
        PolicyCommand::UploadDocument { id, file } => {
            let (file_name, bytes) = read_attachment(&file)?;
            renderer::with_spinner(
                "Uploading document",
                update_entity(
                    &mut store.policies,
                    &mut store.notifications,
                    "Document uploaded",
                    client.upload_policy_document(id, &file_name, bytes),
                ),
            )
            .await?;
        }
    }
    Ok(())
}

async fn show_policy(client: &RestClient, store: &mut AppStore, id: Uuid) -> Result<()> {
    renderer::with_spinner(
        "Fetching policy",
        refresh_detail(&mut store.policies, id, |id| async move {
            client.fetch_policy(id).await
        }),
    )
    .await?;
    if let Some(policy) = store.policies.detail().loaded() {
        renderer::render_policy_detail(policy);
    }
    Ok(())
}

/// Validates the lifecycle step against the current record before
/// dispatching; the server remains the authority either way.
async fn transition_policy(
    client: &RestClient,
    store: &mut AppStore,
    id: Uuid,
    to: PolicyStatus,
) -> Result<()> {
    let current =
        renderer::with_spinner("Fetching policy", client.fetch_policy(id)).await?;
    if !current.status.can_transition_to(to) {
        anyhow::bail!(
            "Policy is {} and cannot move to {}\n\n💡 Hint: The lifecycle is Draft → In Review → Approved → Published → Deprecated, with In Review → Draft for rejections.",
            current.status,
            to
        );
    }
    renderer::with_spinner(
        "Updating policy",
        update_entity(
            &mut store.policies,
            &mut store.notifications,
            &format!("Policy moved to {}", to),
            client.transition_policy(id, to),
        ),
    )
    .await?;
    Ok(())
}

async fn run_findings(
    command: FindingCommand,
    client: &RestClient,
    store: &mut AppStore,
) -> Result<()> {
    ensure_session(client)?;
    match command {
        FindingCommand::List(args) => {
            apply_list_args(&mut store.findings, &args);
            renderer::with_spinner(
                "Fetching findings",
                refresh_list(&mut store.findings, |query| async move {
                    client.list_findings(&query).await
                }),
            )
            .await?;
            renderer::render_finding_list(&store.findings);
        }
        FindingCommand::Show { id } => {
            renderer::with_spinner(
                "Fetching finding",
                refresh_detail(&mut store.findings, id, |id| async move {
                    client.fetch_finding(id).await
                }),
            )
            .await?;
            if let Some(finding) = store.findings.detail().loaded() {
                renderer::render_finding_detail(finding);
            }
        }
        FindingCommand::Create {
            title,
            description,
            severity,
            likelihood,
            impact,
            framework,
        } => {
            let draft = NewFinding {
                title,
                description,
                severity,
                risk_likelihood: likelihood,
                risk_impact: impact,
                framework_id: framework,
            };
            let created = renderer::with_spinner(
                "Creating finding",
                create_entity(
                    &mut store.findings,
                    &mut store.notifications,
                    "Finding",
                    client.create_finding(&draft),
                ),
            )
            .await?;
            renderer::render_finding_detail(&created);
        }
        FindingCommand::Update {
            id,
            title,
            description,
            severity,
            status,
            likelihood,
            impact,
        } => {
            let patch = FindingPatch {
                title,
                description,
                severity,
                status,
                risk_likelihood: likelihood,
                risk_impact: impact,
            };
            renderer::with_spinner(
                "Updating finding",
                update_entity(
                    &mut store.findings,
                    &mut store.notifications,
                    "Finding updated",
                    client.update_finding(id, &patch),
                ),
            )
            .await?;
        }
        FindingCommand::Delete { id } => {
            renderer::with_spinner(
                "Deleting finding",
                delete_entity(
                    &mut store.findings,
                    &mut store.notifications,
                    "Finding",
                    id,
                    client.delete_finding(id),
                ),
            )
            .await?;
        }
        FindingCommand::Comment { id, body } => {
            renderer::with_spinner(
                "Adding comment",
                update_entity(
                    &mut store.findings,
                    &mut store.notifications,
                    "Comment added",
                    client.add_finding_comment(id, &body),
                ),
            )
            .await?;
        }
        FindingCommand::UploadEvidence { id, file } => {
            let (file_name, bytes) = read_attachment(&file)?;
            renderer::with_spinner(
                "Uploading evidence",
                update_entity(
                    &mut store.findings,
                    &mut store.notifications,
                    "Evidence uploaded",
                    client.upload_finding_evidence(id, &file_name, bytes),
                ),
            )
            .await?;
        }
    }
    Ok(())
}

async fn run_incidents(
    command: IncidentCommand,
    client: &RestClient,
    store: &mut AppStore,
) -> Result<()> {
    ensure_session(client)?;
    match command {
        IncidentCommand::List(args) => {
            apply_list_args(&mut store.incidents, &args);
            renderer::with_spinner(
                "Fetching incidents",
                refresh_list(&mut store.incidents, |query| async move {
                    client.list_incidents(&query).await
                }),
            )
            .await?;
            renderer::render_incident_list(&store.incidents);
        }
        IncidentCommand::Show { id } => {
            renderer::with_spinner(
                "Fetching incident",
                refresh_detail(&mut store.incidents, id, |id| async move {
                    client.fetch_incident(id).await
                }),
            )
            .await?;
            if let Some(incident) = store.incidents.detail().loaded() {
                renderer::render_incident_detail(incident);
            }
        }
        IncidentCommand::Report {
            title,
            description,
            severity,
            sla,
        } => {
            let draft = NewIncident {
                title,
                description,
                severity,
                sla_deadline: sla,
            };
            let created = renderer::with_spinner(
                "Reporting incident",
                create_entity(
                    &mut store.incidents,
                    &mut store.notifications,
                    "Incident",
                    client.report_incident(&draft),
                ),
            )
            .await?;
            renderer::render_incident_detail(&created);
        }
        IncidentCommand::Transition { id, status } => {
            let current =
                renderer::with_spinner("Fetching incident", client.fetch_incident(id)).await?;
            if !current.status.can_transition_to(status) {
                anyhow::bail!(
                    "Incident is {} and cannot move to {}\n\n💡 Hint: Incidents advance one step at a time: Open → Investigating → Mitigated → Resolved → Closed.",
                    current.status,
                    status
                );
            }
            renderer::with_spinner(
                "Updating incident",
                update_entity(
                    &mut store.incidents,
                    &mut store.notifications,
                    &format!("Incident moved to {}", status),
                    client.transition_incident(id, status),
                ),
            )
            .await?;
        }
        IncidentCommand::AddUpdate { id, note } => {
            renderer::with_spinner(
                "Adding update",
                update_entity(
                    &mut store.incidents,
                    &mut store.notifications,
                    "Update added",
                    client.add_incident_update(id, &note),
                ),
            )
            .await?;
        }
    }
    Ok(())
}

async fn run_training(
    command: TrainingCommand,
    client: &RestClient,
    store: &mut AppStore,
) -> Result<()> {
    ensure_session(client)?;
    match command {
        TrainingCommand::List(args) => {
            apply_list_args(&mut store.training, &args);
            renderer::with_spinner(
                "Fetching courses",
                refresh_list(&mut store.training, |query| async move {
                    client.list_courses(&query).await
                }),
            )
            .await?;
            renderer::render_course_list(&store.training);
        }
        TrainingCommand::Show { id } => {
            renderer::with_spinner(
                "Fetching course",
                refresh_detail(&mut store.training, id, |id| async move {
                    client.fetch_course(id).await
                }),
            )
            .await?;
            if let Some(course) = store.training.detail().loaded() {
                renderer::render_course_detail(course);
            }
        }
        TrainingCommand::Assign { course, user } => {
            renderer::with_spinner(
                "Assigning course",
                update_entity(
                    &mut store.training,
                    &mut store.notifications,
                    "Course assigned",
                    client.assign_course(course, user),
                ),
            )
            .await?;
        }
        TrainingCommand::Complete { course, assignment } => {
            renderer::with_spinner(
                "Completing assignment",
                update_entity(
                    &mut store.training,
                    &mut store.notifications,
                    "Assignment completed",
                    client.complete_assignment(course, assignment),
                ),
            )
            .await?;
        }
    }
    Ok(())
}

fn apply_list_args<T>(
    slice: &mut grc_console::application::store::CollectionSlice<T>,
    args: &ListArgs,
) where
    T: grc_console::compliance::domain::Identified + Clone,
{
    slice.set_filters(args.filters());
    slice.set_page(args.page);
}

fn ensure_session(client: &RestClient) -> Result<()> {
    if client.has_session() {
        Ok(())
    } else {
        Err(ApiError::NotAuthenticated.into())
    }
}

fn read_attachment(path: &Path) -> Result<(String, Vec<u8>)> {
    let bytes = std::fs::read(path).with_context(|| {
        format!(
            "Failed to read file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("attachment")
        .to_string();
    Ok((file_name, bytes))
}
