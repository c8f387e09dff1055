use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use azclassic::api::{self, ClassicClient};
use azclassic::cloudprovider::{
    CloudDisk, CloudEip, CloudInstance, CloudNic, StatusSource, StopOptions,
};
use azclassic::config;
use azclassic::services::{ClassicInstance, InstanceContext};
use azclassic::utils::format_status;

type Instance = ClassicInstance<ClassicClient>;

struct Session {
    api: Arc<ClassicClient>,
    context: InstanceContext,
    wait: azclassic::cloudprovider::WaitConfig,
}

fn error_line(msg: &str, err: impl std::fmt::Display) -> String {
    format!("{}: {}", yansi::Paint::new(msg).red(), err)
}

fn fail(msg: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{}", error_line(msg, err));
    process::exit(1);
}

fn build_session(env_file: Option<&str>) -> Session {
    config::load_env_file(env_file);
    let api = match ClassicClient::from_env() {
        Ok(c) => Arc::new(c),
        Err(e) => fail("Failed to create HTTP client", e),
    };
    Session {
        api,
        context: InstanceContext {
            region_name: config::get_region(),
            zone_global_id: config::get_zone_id(),
        },
        wait: config::get_wait_config(),
    }
}

async fn fetch_instance(session: &Session, instance_id: &str) -> Instance {
    match ClassicInstance::fetch(session.api.clone(), session.context.clone(), instance_id).await {
        Ok(i) => i.with_wait_config(session.wait),
        Err(e) => fail("Failed to fetch instance", e),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn json_value_to_string(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => "".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            serde_json::to_string(v).unwrap_or_default()
        }
    }
}

fn print_object(value: &serde_json::Value) {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    if let Some(obj) = value.as_object() {
        for (k, v) in obj {
            table.add_row(vec![k.as_str(), &json_value_to_string(v)]);
        }
    }
    println!("\n{table}\n");
}

fn spinner(msg: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn report_done(pb: ProgressBar, result: azclassic::CloudResult<()>, ok_msg: String, err_msg: &str) {
    pb.finish_and_clear();
    match result {
        Ok(()) => println!("{}", yansi::Paint::new(ok_msg).green()),
        Err(e) => fail(err_msg, e),
    }
}

#[derive(Parser)]
#[command(
    name = "azclassic",
    author,
    version,
    about = "Manage Azure classic virtual machines",
    long_about = r#"azclassic — inspect and drive Azure classic (ASM) virtual machines through the management API.

Credentials come from the environment or an `.env` file:
  AZURE_ACCESS_TOKEN, AZURE_SUBSCRIPTION_ID, AZURE_REGION, AZURE_ZONE_ID,
  AZURE_MANAGEMENT_URL, CLASSIC_API_VERSION, POLL_INTERVAL_SECS, WAIT_TIMEOUT_SECS

Examples:
  azclassic list
  azclassic status /subscriptions/<sub>/resourceGroups/<rg>/providers/Microsoft.ClassicCompute/virtualMachines/<vm>
  azclassic stop <instance-id> --force
"#,
    after_help = "Use `azclassic <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration and API connectivity
    #[command(about = "Validate configuration and ensure API connectivity.", long_about = "Check that a token and subscription are configured, then list classic VMs once to confirm the credentials work.")]
    CheckConfig,
    /// List classic instances of the configured region
    #[command(about = "List classic instances", long_about = "List classic virtual machines in the subscription. When AZURE_REGION is set only instances in that location are shown.")]
    List,
    /// Show instance details
    #[command(about = "Show instance details", long_about = "Fetch an instance (with its instance view) and print its normalized attributes.")]
    Show { instance_id: String },
    /// Print the normalized status
    Status { instance_id: String },
    /// Start an instance and wait until it is running
    Start { instance_id: String },
    /// Shut down an instance and wait until it is stopped
    #[command(about = "Stop an instance", long_about = "Issue a shutdown and wait until the instance reports a stopped state. `--force` is accepted for parity; classic VMs have a single shutdown verb.")]
    Stop {
        instance_id: String,
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Delete an instance together with its security group and cloud service
    Delete { instance_id: String },
    /// List network interfaces
    Nics { instance_id: String },
    /// Show the public / reserved IP
    Eip { instance_id: String },
    /// List disks
    Disks { instance_id: String },
    /// Attach a disk and wait for the instance to settle
    AttachDisk { instance_id: String, disk_id: String },
    /// Detach a disk and wait for the instance to settle
    DetachDisk { instance_id: String, disk_id: String },
    /// Associate a network security group
    AssignSecgroup { instance_id: String, secgroup_id: String },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    let session = build_session(cli.env_file.as_deref());

    match cli.command {
        Commands::CheckConfig => {
            let mut ok = true;
            if config::get_access_token().trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("AZURE_ACCESS_TOKEN is not configured").red());
                ok = false;
            }
            if config::get_subscription_id().trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("AZURE_SUBSCRIPTION_ID is not configured").red());
                ok = false;
            }
            if !ok {
                process::exit(1);
            }
            match api::get_classic_instances(&*session.api, None).await {
                Ok(list) => println!(
                    "{}",
                    yansi::Paint::new(format!("Configuration looks valid ({} classic instances visible)", list.len())).green()
                ),
                Err(e) => fail("Configuration appears invalid", e),
            }
        }
        Commands::List => {
            let instances = match ClassicInstance::list(session.api.clone(), session.context.clone()).await {
                Ok(i) => i,
                Err(e) => fail("Failed to list instances", e),
            };
            let mut table = new_table();
            table.set_header(vec!["ID", "Name", "Location", "Size", "Status"]);
            for i in &instances {
                let record = i.record();
                table.add_row(vec![
                    record.id.clone(),
                    record.name.clone(),
                    record.location.clone(),
                    record.properties.hardware_profile.size.clone(),
                    format_status(i.raw_status().unwrap_or("")),
                ]);
            }
            println!("\n{table}");
            println!("\n{}\n", yansi::Paint::new(format!("Showing {} classic instances", instances.len())).dim());
        }
        Commands::Show { instance_id } => {
            let mut inst = fetch_instance(&session, &instance_id).await;
            let status = inst.status().await;
            let details = serde_json::json!({
                "id": inst.id(),
                "name": inst.name(),
                "global_id": inst.global_id(),
                "project_id": inst.project_id(),
                "location": inst.record().location,
                "status": status.as_str(),
                "raw_status": inst.raw_status().unwrap_or(""),
                "instance_type": inst.instance_type(),
                "vcpu_count": inst.vcpu_count(),
                "vmem_size_mb": inst.vmem_size_mb(),
                "os_type": inst.os_type().to_string(),
                "full_os_name": inst.full_os_name(),
                "hypervisor": inst.hypervisor(),
                "security_groups": inst.security_group_ids(),
                "sys_tags": inst.sys_tags(),
                "tags": inst.tags(),
            });
            print_object(&details);
        }
        Commands::Status { instance_id } => {
            let mut inst = fetch_instance(&session, &instance_id).await;
            let status = inst.status().await;
            println!("{} {}", yansi::Paint::new(inst.name()).bold(), yansi::Paint::new(status.as_str()).cyan());
        }
        Commands::Start { instance_id } => {
            let mut inst = fetch_instance(&session, &instance_id).await;
            let pb = spinner(format!("Starting {}", inst.name()));
            let result = inst.start_vm().await;
            report_done(pb, result, format!("{} is running", inst.name()), "Failed to start instance");
        }
        Commands::Stop { instance_id, force } => {
            let mut inst = fetch_instance(&session, &instance_id).await;
            let pb = spinner(format!("Stopping {}", inst.name()));
            let result = inst.stop_vm(&StopOptions { is_force: force }).await;
            report_done(pb, result, format!("{} is stopped", inst.name()), "Failed to stop instance");
        }
        Commands::Delete { instance_id } => {
            let mut inst = fetch_instance(&session, &instance_id).await;
            if let Err(e) = inst.delete_vm().await {
                fail("Failed to delete instance", e);
            }
            println!("{} '{}' {}", yansi::Paint::new("Instance").green(), inst.name(), yansi::Paint::new("deleted").green());
        }
        Commands::Nics { instance_id } => {
            let inst = fetch_instance(&session, &instance_id).await;
            let nics = match inst.nics().await {
                Ok(n) => n,
                Err(e) => fail("Failed to resolve network interfaces", e),
            };
            if nics.is_empty() {
                println!("(no network identity)");
                return;
            }
            let mut table = new_table();
            table.set_header(vec!["Network", "IP", "MAC", "Driver"]);
            for nic in &nics {
                table.add_row(vec![nic.network_id().to_string(), nic.ip().to_string(), nic.mac(), nic.driver().to_string()]);
            }
            println!("\n{table}\n");
        }
        Commands::Eip { instance_id } => {
            let inst = fetch_instance(&session, &instance_id).await;
            match inst.eip().await {
                Ok(Some(eip)) => {
                    let mut table = new_table();
                    table.set_header(vec!["ID", "Name", "IP", "Mode", "Status"]);
                    table.add_row(vec![
                        eip.id().to_string(),
                        eip.name().to_string(),
                        eip.ip_addr().to_string(),
                        eip.mode().to_string(),
                        eip.status().to_string(),
                    ]);
                    println!("\n{table}\n");
                }
                Ok(None) => println!("(no public address)"),
                Err(e) => fail("Failed to resolve public address", e),
            }
        }
        Commands::Disks { instance_id } => {
            let inst = fetch_instance(&session, &instance_id).await;
            let disks = match inst.disks().await {
                Ok(d) => d,
                Err(e) => fail("Failed to list disks", e),
            };
            let mut table = new_table();
            table.set_header(vec!["Name", "Type", "Size (GB)", "Caching", "Image", "VHD"]);
            for d in &disks {
                table.add_row(vec![
                    d.name().to_string(),
                    d.disk_type().to_string(),
                    d.size_gb().to_string(),
                    d.cache_mode().to_string(),
                    d.template_id().to_string(),
                    d.access_path().to_string(),
                ]);
            }
            println!("\n{table}\n");
        }
        Commands::AttachDisk { instance_id, disk_id } => {
            let mut inst = fetch_instance(&session, &instance_id).await;
            let pb = spinner(format!("Attaching {} to {}", disk_id, inst.name()));
            let result = inst.attach_disk(&disk_id).await;
            report_done(pb, result, format!("Disk attached to {}", inst.name()), "Failed to attach disk");
        }
        Commands::DetachDisk { instance_id, disk_id } => {
            let mut inst = fetch_instance(&session, &instance_id).await;
            let pb = spinner(format!("Detaching {} from {}", disk_id, inst.name()));
            let result = inst.detach_disk(&disk_id).await;
            report_done(pb, result, format!("Disk detached from {}", inst.name()), "Failed to detach disk");
        }
        Commands::AssignSecgroup { instance_id, secgroup_id } => {
            let mut inst = fetch_instance(&session, &instance_id).await;
            if let Err(e) = inst.assign_security_group(&secgroup_id).await {
                fail("Failed to assign security group", e);
            }
            println!("{} {}", yansi::Paint::new("Security group assigned to").green(), inst.name());
        }
    }
}
