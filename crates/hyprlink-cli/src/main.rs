//! hyprlink CLI
//!
//! Inspects a running Hyprland instance and follows its event stream.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hyprlink::Instance;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hyprlink")]
#[command(about = "Inspect Hyprland state and follow its event stream")]
#[command(version)]
struct Cli {
    /// Instance signature (defaults to $HYPRLAND_INSTANCE_SIGNATURE)
    #[arg(short, long)]
    signature: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Follow the event stream and print every event
    Listen,

    /// List all windows
    Windows,

    /// List all workspaces
    Workspaces,

    /// List all monitors
    Monitors,

    /// Show the focused window and active workspace
    Active,

    /// Run a dispatcher command, e.g. `hyprlink dispatch workspace 3`
    Dispatch {
        /// Arguments passed to the dispatcher
        #[arg(required = true)]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let instance = match cli.signature {
        Some(signature) => Instance::with_signature(&signature)?,
        None => Instance::from_env()?,
    };

    match cli.command {
        Commands::Listen => cmd_listen(&instance),
        Commands::Windows => cmd_windows(&instance),
        Commands::Workspaces => cmd_workspaces(&instance),
        Commands::Monitors => cmd_monitors(&instance),
        Commands::Active => cmd_active(&instance),
        Commands::Dispatch { args } => cmd_dispatch(&instance, &args),
    }
}

fn cmd_listen(instance: &Instance) -> Result<()> {
    // One printing observer per event kind.
    macro_rules! print_events {
        ($($signal:ident),* $(,)?) => {
            $(
                instance.signals.$signal.connect(|_, event| {
                    println!("{}: {:?}", stringify!($signal), event);
                });
            )*
        };
    }
    print_events!(
        activelayout,
        activespecial,
        activespecialv2,
        activewindow,
        activewindowv2,
        changefloatingmode,
        closelayer,
        closewindow,
        configreloaded,
        createworkspace,
        createworkspacev2,
        destroyworkspace,
        destroyworkspacev2,
        focusedmon,
        focusedmonv2,
        fullscreen,
        ignoregrouplock,
        lockgroups,
        minimized,
        monitoradded,
        monitoraddedv2,
        monitorremoved,
        moveintogroup,
        moveoutofgroup,
        movewindow,
        movewindowv2,
        moveworkspace,
        moveworkspacev2,
        openlayer,
        openwindow,
        pin,
        renameworkspace,
        screencast,
        submap,
        togglegroup,
        urgent,
        windowtitle,
        windowtitlev2,
        workspace,
        workspacev2,
    );

    eprintln!("listening for events (ctrl-c to stop)...");
    instance.watch()?;
    Ok(())
}

fn cmd_windows(instance: &Instance) -> Result<()> {
    for window in instance.windows()? {
        println!(
            "{}  [{}] {:?} on workspace {} ({})",
            window.address, window.wm_class, window.title, window.workspace.name, window.workspace.id,
        );
    }
    Ok(())
}

fn cmd_workspaces(instance: &Instance) -> Result<()> {
    for workspace in instance.workspaces()? {
        println!(
            "{:>4}  {:<16} {} window(s) on {}{}",
            workspace.id,
            workspace.name,
            workspace.window_count,
            workspace.monitor_name,
            if workspace.is_special() { "  (special)" } else { "" },
        );
    }
    Ok(())
}

fn cmd_monitors(instance: &Instance) -> Result<()> {
    for monitor in instance.monitors()? {
        println!(
            "{}  {} ({}x{}@{:.2}Hz, scale {}){}",
            monitor.id,
            monitor.name,
            monitor.width,
            monitor.height,
            monitor.refresh_rate,
            monitor.scale,
            if monitor.is_focused { "  (focused)" } else { "" },
        );
        println!("      active workspace: {} ({})", monitor.active_workspace.name, monitor.active_workspace.id);
    }
    Ok(())
}

fn cmd_active(instance: &Instance) -> Result<()> {
    match instance.active_window()? {
        Some(window) => println!("window: {}  [{}] {:?}", window.address, window.wm_class, window.title),
        None => println!("window: none"),
    }
    let workspace = instance.active_workspace()?;
    println!("workspace: {} ({})", workspace.name, workspace.id);
    Ok(())
}

fn cmd_dispatch(instance: &Instance, args: &[String]) -> Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    instance.dispatch(&args)?;
    println!("ok");
    Ok(())
}
