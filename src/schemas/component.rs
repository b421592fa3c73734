use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One managed big-data software package.
///
/// Every component owns a static [`ComponentProfile`](crate::schemas::profile::ComponentProfile)
/// describing where its configuration lives, which files it accepts and how
/// user-supplied parameter names map onto its canonical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Hadoop,    // HDFS/YARN/MapReduce site files under etc/hadoop
    Hbase,     // hbase-site.xml and friends
    Hive,      // hive-site.xml plus the Ranger plugin files
    Kafka,     // broker/producer/consumer .properties
    Spark,     // spark-defaults.conf
    Storm,     // storm.yaml
    Zookeeper, // zoo.cfg
    Flink,     // flink-conf.yaml
}

impl Component {
    /// Every supported component, in the order listings print them.
    pub const ALL: [Component; 8] = [
        Component::Hadoop,
        Component::Hbase,
        Component::Hive,
        Component::Kafka,
        Component::Spark,
        Component::Storm,
        Component::Zookeeper,
        Component::Flink,
    ];

    /// Lower-case name used on the command line and in the agent config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Hadoop => "hadoop",
            Component::Hbase => "hbase",
            Component::Hive => "hive",
            Component::Kafka => "kafka",
            Component::Spark => "spark",
            Component::Storm => "storm",
            Component::Zookeeper => "zookeeper",
            Component::Flink => "flink",
        }
    }

    /// Position of this component inside [`Component::ALL`]; used to index
    /// per-component caches.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// Parses a component name (case-insensitive). A few common nicknames are
/// accepted as well: `hdfs`/`yarn` for Hadoop and `zk` for ZooKeeper.
impl FromStr for Component {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hadoop" | "hdfs" | "yarn" => Ok(Component::Hadoop),
            "hbase" => Ok(Component::Hbase),
            "hive" => Ok(Component::Hive),
            "kafka" => Ok(Component::Kafka),
            "spark" => Ok(Component::Spark),
            "storm" => Ok(Component::Storm),
            "zookeeper" | "zk" => Ok(Component::Zookeeper),
            "flink" => Ok(Component::Flink),
            _ => {
                let valid = Component::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(format!("Invalid component '{s}'. Must be one of: {valid}"))
            }
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
