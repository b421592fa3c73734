// Per-component knowledge: accepted files, install locations, the ordered
// schema table and the value rules. Each submodule exports one static
// `PROFILE`; everything else in the crate reaches them through `profile()`.
//
// Adding a component means adding a submodule here and a variant to
// `Component`; the resolver, validator and locator need no changes.

/// Hadoop core (`core-site.xml`, `hdfs-site.xml`, `yarn-site.xml`, `mapred-site.xml`).
pub mod hadoop;
/// HBase (`hbase-site.xml`, `hbase-policy.xml`).
pub mod hbase;
/// Hive and its Ranger plugin files.
pub mod hive;
/// Kafka broker and client property files.
pub mod kafka;
pub mod spark;
pub mod storm;
pub mod zookeeper;
pub mod flink;

use crate::schemas::component::Component;
use crate::schemas::profile::ComponentProfile;

/// Static profile for `component`.
pub fn profile(component: Component) -> &'static ComponentProfile {
    match component {
        Component::Hadoop => &hadoop::PROFILE,
        Component::Hbase => &hbase::PROFILE,
        Component::Hive => &hive::PROFILE,
        Component::Kafka => &kafka::PROFILE,
        Component::Spark => &spark::PROFILE,
        Component::Storm => &storm::PROFILE,
        Component::Zookeeper => &zookeeper::PROFILE,
        Component::Flink => &flink::PROFILE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_describes_its_own_component() {
        for component in Component::ALL {
            let profile = profile(component);
            assert_eq!(profile.component, component);
            assert!(!profile.files.is_empty(), "{component} accepts no files");
            assert!(!profile.schema.is_empty(), "{component} has an empty schema");
        }
    }

    #[test]
    fn list_keys_are_schema_keys() {
        for component in Component::ALL {
            let profile = profile(component);
            for key in profile.list_keys {
                assert!(
                    profile.schema.iter().any(|e| e.canonical_name == *key),
                    "{component}: list key {key} is not in the schema"
                );
            }
        }
    }

    #[test]
    fn file_names_are_unique_per_component() {
        for component in Component::ALL {
            let files = profile(component).files;
            for (i, spec) in files.iter().enumerate() {
                assert!(
                    files[i + 1..].iter().all(|other| other.name != spec.name),
                    "{component}: {} declared twice",
                    spec.name
                );
            }
        }
    }
}
