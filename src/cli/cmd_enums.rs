use clap::{Parser, Subcommand};
use cluster_agent::Component;

/// Command-line interface of `cluster-agent`.
#[derive(Parser)]
#[command(name = "cluster-agent", version)]
#[command(about = "Resolve, validate and persist configuration parameters for cluster components")]
pub struct Cli {
    /// Enables detailed debug output (which table entry matched, which file was picked).
    #[arg(short, long, global = true)]
    pub(crate) debug: bool,

    /// Agent config file (defaults to $CLUSTER_AGENT_CONFIG, then ~/.cluster-agent/config.yaml).
    #[arg(long, global = true)]
    pub(crate) config: Option<String>,

    /// Extra directory to search for component config files. Repeatable; searched first.
    #[arg(long = "conf-dir", global = true, value_name = "DIR")]
    pub(crate) conf_dirs: Vec<String>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map a parameter name onto its canonical key and target file.
    Resolve {
        /// hadoop, hbase, hive, kafka, spark, storm, zookeeper or flink.
        component: Component,
        /// Parameter name in any supported spelling (e.g. HBASE_ROOT_DIR).
        name: String,
        /// Prefer the schema slot in this file when the key lives in several.
        #[arg(long)]
        file: Option<String>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Check a value against the rules for a parameter, without touching any file.
    Validate {
        component: Component,
        name: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long)]
        json: bool,
    },
    /// Resolve, validate and write a parameter into the component's config file.
    Set {
        component: Component,
        name: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Write into this file instead of the resolved one. Must be a file the component accepts.
        #[arg(long)]
        file: Option<String>,
        /// Stop after validation and file location; nothing is written.
        #[arg(long)]
        dry_run: bool,
        #[arg(long)]
        json: bool,
    },
    /// List a component's schema table in match order.
    Schema {
        component: Component,
        /// Only entries targeting this file.
        #[arg(long)]
        file: Option<String>,
    },
    /// List supported components, their files and the discovered config directory.
    Components,
    /// Show the version of the tool.
    Version,
}
