// cluster-agent: resolves, validates and persists configuration parameters
// for big-data cluster components (Hadoop, HBase, Hive, Kafka, Spark, Storm,
// ZooKeeper, Flink).
//
// The library is what the remote-command layer links against; the
// `cluster-agent` binary is a thin CLI over the same functions.

pub mod components;
pub mod facade;
pub mod libs;
pub mod logger;
pub mod schemas;

pub use libs::dispatcher::{
    Dispatcher, WritePlan, apply_config_param, modify_config, resolve_config_param, validate_config_param,
};
pub use libs::errors::ConfigError;
pub use libs::resolver::NotFound;
pub use schemas::agent_config::AgentConfig;
pub use schemas::component::Component;
pub use schemas::entry::ResolvedParameter;
pub use schemas::status::{ConfigStatus, DispatchStatus, ValidationOutcome};
